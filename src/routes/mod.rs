// Route exports
pub mod kml;
pub mod status;
pub mod vegetation;

use actix_web::web;
use crate::core::VegetationGenerator;

/// Application state shared across all handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub generator: VegetationGenerator,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.configure(status::configure)
        .configure(vegetation::configure)
        .configure(kml::configure);
}
