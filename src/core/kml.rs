use crate::models::{Coordinate, KmlValidation};

const KML_MARKER: &str = "<kml";
const PLACEMARK_TAG: &str = "<Placemark>";
const COORDINATES_OPEN: &str = "<coordinates>";
const COORDINATES_CLOSE: &str = "</coordinates>";

/// Return the text between the first `<coordinates>` tag and the closing tag
/// that follows it
///
/// Matching is a plain case-sensitive substring search. Tags carrying
/// attributes are not recognised.
pub fn coordinates_region(kml: &str) -> Option<&str> {
    let start = kml.find(COORDINATES_OPEN)? + COORDINATES_OPEN.len();
    let len = kml[start..].find(COORDINATES_CLOSE)?;
    Some(&kml[start..start + len])
}

/// Parse a single `lon,lat[,alt]` token
///
/// Components past the second are ignored. Returns `None` for tokens with
/// fewer than two components or a component that is not a finite number.
#[inline]
pub fn parse_coordinate(token: &str) -> Option<Coordinate> {
    let mut parts = token.split(',');
    let lon = parse_component(parts.next()?)?;
    let lat = parse_component(parts.next()?)?;
    Some(Coordinate::new(lon, lat))
}

// `nan` and `inf` parse as f64 but cannot be bounded
#[inline]
fn parse_component(component: &str) -> Option<f64> {
    component.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Extract coordinates from the first `<coordinates>` region of a KML document
///
/// Tokens are whitespace separated and kept in source order. Malformed
/// tokens are skipped; a document without a usable region yields an empty
/// vector.
pub fn extract_coordinates(kml: &str) -> Vec<Coordinate> {
    match coordinates_region(kml) {
        Some(region) => region.split_whitespace().filter_map(parse_coordinate).collect(),
        None => Vec::new(),
    }
}

/// Whether the text looks like a KML document at all
pub fn looks_like_kml(kml: &str) -> bool {
    kml.contains(KML_MARKER)
}

/// Report which structural markers a KML document carries
pub fn validate_kml(kml: &str) -> KmlValidation {
    let has_kml_tag = kml.contains(KML_MARKER);
    let has_placemarks = kml.contains(PLACEMARK_TAG);
    let has_coordinates = kml.contains(COORDINATES_OPEN);
    let is_valid = !extract_coordinates(kml).is_empty();

    let error_message = if is_valid {
        String::new()
    } else if has_coordinates {
        "No parseable coordinates found".to_string()
    } else {
        "No <coordinates> element found".to_string()
    };

    KmlValidation {
        is_valid,
        has_kml_tag,
        has_placemarks,
        has_coordinates,
        error_message,
    }
}
