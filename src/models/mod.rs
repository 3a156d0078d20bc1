// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    BaseCounts, BoundingBox, Coordinate, GrowthPrediction, KmlValidation, LineData, MapConfig,
    MonthlyGrowth, Priority, RiskAssessment, RiskLevel, RiskRecord, RiskSummary, TreeSpecies,
    VegetationPoint,
};
pub use requests::{AssessRiskRequest, DetectVegetationRequest, KmlRequest, PredictGrowthRequest};
pub use responses::{
    AssessRiskResponse, DetectVegetationResponse, ErrorResponse, HealthResponse, KmlLine,
    PredictGrowthResponse, ProcessKmlResponse, RootResponse,
};
