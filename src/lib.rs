//! Vegetation Agent - vegetation risk service for power-line corridors
//!
//! Extracts coordinates and map viewports from KML documents and fabricates
//! vegetation, risk and growth reports for the lines they describe.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{
    calculate_bounds, extract_coordinates, zoom_level_for_span, VegetationGenerator,
};
pub use error::ApiError;
pub use models::{BoundingBox, Coordinate, MapConfig, VegetationPoint};
