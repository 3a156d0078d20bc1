// Core algorithm exports
pub mod bounds;
pub mod growth;
pub mod kml;
pub mod risk;
pub mod vegetation;

pub use bounds::{calculate_bounds, zoom_level_for_span, FALLBACK_LOCATION};
pub use growth::predict_growth;
pub use kml::{extract_coordinates, looks_like_kml, validate_kml};
pub use risk::assess_risk;
pub use vegetation::VegetationGenerator;
