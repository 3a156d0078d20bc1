use serde::{Deserialize, Serialize};

/// A single KML coordinate in longitude/latitude order
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl From<Coordinate> for geo::Point<f64> {
    fn from(coord: Coordinate) -> Self {
        geo::Point::new(coord.lon, coord.lat)
    }
}

/// Axis-aligned bounding box over a set of coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Degenerate box covering a single coordinate
    pub fn point(coord: Coordinate) -> Self {
        Self {
            min_lat: coord.lat,
            max_lat: coord.lat,
            min_lon: coord.lon,
            max_lon: coord.lon,
        }
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// The larger of the two axis spans, in degrees
    pub fn span(&self) -> f64 {
        self.lat_span().max(self.lon_span())
    }

    pub fn center(&self) -> Coordinate {
        Coordinate::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }
}

/// Map viewport derived from a bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapConfig {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom_level: u8,
    pub bounds: BoundingBox,
}

/// Descriptive attributes of a power line
///
/// Only `line_type` and `region` influence generation; anything else the
/// client sends is carried along untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineData {
    #[serde(default = "default_line_type")]
    pub line_type: String,
    #[serde(default = "default_region")]
    pub region: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Default for LineData {
    fn default() -> Self {
        Self {
            line_type: default_line_type(),
            region: default_region(),
            extra: serde_json::Map::new(),
        }
    }
}

fn default_line_type() -> String { "transmission".to_string() }
fn default_region() -> String { "Unknown".to_string() }

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeSpecies {
    Oak,
    Pine,
    Maple,
    Birch,
    Cedar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Immediate,
}

/// A vegetation sample along a power line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VegetationPoint {
    pub id: String,
    #[serde(rename = "type")]
    pub species: TreeSpecies,
    pub height: f64,
    pub distance: f64,
    #[serde(rename = "riskScore")]
    pub risk_score: f64,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    pub priority: Priority,
    #[serde(rename = "estimatedCost")]
    pub estimated_cost: f64,
}

/// The fields of a vegetation point that risk aggregation reads
///
/// Clients may post trimmed-down points; anything beyond these three fields
/// is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskRecord {
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    #[serde(rename = "riskScore")]
    pub risk_score: f64,
    #[serde(rename = "estimatedCost")]
    pub estimated_cost: f64,
}

impl From<&VegetationPoint> for RiskRecord {
    fn from(point: &VegetationPoint) -> Self {
        Self {
            risk_level: point.risk_level,
            risk_score: point.risk_score,
            estimated_cost: point.estimated_cost,
        }
    }
}

/// Aggregated risk over a set of vegetation points
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskSummary {
    pub critical_risks: usize,
    pub high_risks: usize,
    pub medium_risks: usize,
    pub low_risks: usize,
    pub total_cost: f64,
    pub average_risk_score: f64,
    pub total_vegetation_points: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RiskAssessment {
    Summary(RiskSummary),
    Unavailable { error: String },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyGrowth {
    pub month: String,
    pub growth_rate: f64,
    pub risk_increase: f64,
    pub maintenance_needed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthPrediction {
    pub predictions: Vec<MonthlyGrowth>,
    pub total_growth: f64,
    pub maintenance_schedule: Vec<String>,
}

/// Structural markers found in a KML document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KmlValidation {
    pub is_valid: bool,
    pub has_kml_tag: bool,
    pub has_placemarks: bool,
    pub has_coordinates: bool,
    pub error_message: String,
}

/// Base point counts per line type
#[derive(Debug, Clone, Copy)]
pub struct BaseCounts {
    pub transmission: usize,
    pub distribution: usize,
}

impl Default for BaseCounts {
    fn default() -> Self {
        Self {
            transmission: 50,
            distribution: 30,
        }
    }
}
