use actix_web::{web, HttpResponse};
use validator::Validate;
use crate::core::{assess_risk, predict_growth};
use crate::error::ApiError;
use crate::models::{
    AssessRiskRequest, AssessRiskResponse, DetectVegetationRequest, DetectVegetationResponse,
    PredictGrowthRequest, PredictGrowthResponse,
};
use crate::routes::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/detect_vegetation", web::post().to(detect_vegetation))
        .route("/assess_risk", web::post().to(assess_risk_handler))
        .route("/predict_growth", web::post().to(predict_growth_handler));
}

/// Generate vegetation points for a power line
///
/// POST /detect_vegetation
///
/// Request body:
/// ```json
/// {
///   "line_id": "string",
///   "line_data": { "line_type": "transmission", "region": "string" },
///   "coordinates": [{ "lat": 0.0, "lng": 0.0 }],
///   "line_type": "string"
/// }
/// ```
async fn detect_vegetation(
    state: web::Data<AppState>,
    req: web::Json<DetectVegetationRequest>,
) -> Result<HttpResponse, ApiError> {
    if let Err(errors) = req.validate() {
        tracing::warn!("Validation failed for detect_vegetation request: {:?}", errors);
        return Err(errors.into());
    }

    let req = req.into_inner();
    let vegetation_data = state
        .generator
        .generate(&req.line_id, &req.line_data, &mut rand::rng());

    tracing::info!(
        "Generated {} vegetation points for line {} ({}, region {}, {} input coordinates)",
        vegetation_data.len(),
        req.line_id,
        req.line_data.line_type,
        req.line_data.region,
        req.coordinates.len()
    );
    if let Some(line_type) = &req.line_type {
        tracing::debug!("Request line_type {} for line {}", line_type, req.line_id);
    }

    Ok(HttpResponse::Ok().json(DetectVegetationResponse {
        total_points: vegetation_data.len(),
        vegetation_data,
        line_id: req.line_id,
        analysis_timestamp: chrono::Utc::now(),
    }))
}

/// POST /assess_risk
async fn assess_risk_handler(req: web::Json<AssessRiskRequest>) -> HttpResponse {
    let risk_analysis = assess_risk(&req.vegetation_data);

    tracing::info!("Assessed risk for {} vegetation points", req.vegetation_data.len());

    HttpResponse::Ok().json(AssessRiskResponse {
        risk_analysis,
        assessment_timestamp: chrono::Utc::now(),
    })
}

/// POST /predict_growth
///
/// The outlook does not depend on the submitted points; they are only
/// counted for the log.
async fn predict_growth_handler(req: web::Json<PredictGrowthRequest>) -> HttpResponse {
    let growth_prediction = predict_growth(&mut rand::rng());

    tracing::info!(
        "Predicted growth for {} vegetation points, {} maintenance months",
        req.vegetation_data.len(),
        growth_prediction.maintenance_schedule.len()
    );

    HttpResponse::Ok().json(PredictGrowthResponse {
        growth_prediction,
        prediction_timestamp: chrono::Utc::now(),
    })
}
