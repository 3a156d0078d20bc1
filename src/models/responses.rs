use serde::{Deserialize, Serialize};
use crate::models::domain::{Coordinate, GrowthPrediction, MapConfig, RiskAssessment, VegetationPoint};

/// Service banner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
    pub status: String,
    pub version: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectVegetationResponse {
    pub vegetation_data: Vec<VegetationPoint>,
    pub total_points: usize,
    pub line_id: String,
    pub analysis_timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessRiskResponse {
    pub risk_analysis: RiskAssessment,
    pub assessment_timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictGrowthResponse {
    pub growth_prediction: GrowthPrediction,
    pub prediction_timestamp: chrono::DateTime<chrono::Utc>,
}

/// A named polyline extracted from a KML document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KmlLine {
    pub name: String,
    pub coordinates: Vec<Coordinate>,
}

/// Response for the KML processing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessKmlResponse {
    pub success: bool,
    pub map_config: MapConfig,
    pub lines_data: Vec<KmlLine>,
    pub total_lines: usize,
    pub total_coordinates: usize,
}
