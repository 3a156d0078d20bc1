use actix_web::{web, HttpResponse};
use crate::core::{extract_coordinates, looks_like_kml, validate_kml};
use crate::error::ApiError;
use crate::models::{BoundingBox, KmlLine, KmlRequest, ProcessKmlResponse};

const LINE_NAME: &str = "KML Line";

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/process_kml", web::post().to(process_kml_handler))
        .route("/validate_kml", web::post().to(validate_kml_handler));
}

/// Extract coordinates from a KML document and derive a map viewport
pub fn process_kml(kml: &str) -> Result<ProcessKmlResponse, ApiError> {
    if !looks_like_kml(kml) {
        return Err(ApiError::InvalidKml);
    }

    let coordinates = extract_coordinates(kml);
    if coordinates.is_empty() {
        return Err(ApiError::NoCoordinates);
    }

    let map_config = BoundingBox::from_coordinates(&coordinates).map_config();

    Ok(ProcessKmlResponse {
        success: true,
        map_config,
        total_lines: 1,
        total_coordinates: coordinates.len(),
        lines_data: vec![KmlLine {
            name: LINE_NAME.to_string(),
            coordinates,
        }],
    })
}

/// POST /process_kml
async fn process_kml_handler(req: web::Json<KmlRequest>) -> Result<HttpResponse, ApiError> {
    let response = process_kml(&req.kml_content).map_err(|e| {
        tracing::warn!("Rejected KML upload ({} bytes): {}", req.kml_content.len(), e);
        e
    })?;

    tracing::info!(
        "Processed KML with {} coordinates, zoom {}",
        response.total_coordinates,
        response.map_config.zoom_level
    );

    Ok(HttpResponse::Ok().json(response))
}

/// POST /validate_kml
async fn validate_kml_handler(req: web::Json<KmlRequest>) -> HttpResponse {
    let report = validate_kml(&req.kml_content);
    tracing::debug!("KML validation: {:?}", report);
    HttpResponse::Ok().json(report)
}
