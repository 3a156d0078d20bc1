use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use validator::Validate;
use crate::models::domain::{LineData, RiskRecord};

/// Request to generate vegetation data for a line
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DetectVegetationRequest {
    #[validate(length(min = 1))]
    pub line_id: String,
    #[serde(default)]
    pub line_data: LineData,
    #[serde(default)]
    pub coordinates: Vec<HashMap<String, f64>>,
    #[serde(default)]
    pub line_type: Option<String>,
}

/// Request to aggregate risk over vegetation points
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessRiskRequest {
    #[serde(default)]
    pub vegetation_data: Vec<RiskRecord>,
}

/// Request for a growth outlook
///
/// Points are only counted, so their shape is not checked.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PredictGrowthRequest {
    #[serde(default)]
    pub vegetation_data: Vec<serde_json::Value>,
}

/// Raw KML document upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KmlRequest {
    pub kml_content: String,
}
