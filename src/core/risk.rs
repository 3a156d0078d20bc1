use crate::models::{RiskAssessment, RiskLevel, RiskRecord, RiskSummary};

/// Aggregate vegetation risk records into a risk summary
///
/// An empty input produces `RiskAssessment::Unavailable` rather than a
/// summary full of zeros.
pub fn assess_risk(vegetation: &[RiskRecord]) -> RiskAssessment {
    if vegetation.is_empty() {
        return RiskAssessment::Unavailable {
            error: "No vegetation data provided".to_string(),
        };
    }

    let count_level = |level: RiskLevel| vegetation.iter().filter(|v| v.risk_level == level).count();

    let total_cost: f64 = vegetation.iter().map(|v| v.estimated_cost).sum();
    let total_risk: f64 = vegetation.iter().map(|v| v.risk_score).sum();

    RiskAssessment::Summary(RiskSummary {
        critical_risks: count_level(RiskLevel::Critical),
        high_risks: count_level(RiskLevel::High),
        medium_risks: count_level(RiskLevel::Medium),
        low_risks: count_level(RiskLevel::Low),
        total_cost,
        average_risk_score: total_risk / vegetation.len() as f64,
        total_vegetation_points: vegetation.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(level: RiskLevel, score: f64, cost: f64) -> RiskRecord {
        RiskRecord {
            risk_level: level,
            risk_score: score,
            estimated_cost: cost,
        }
    }

    #[test]
    fn test_empty_input() {
        match assess_risk(&[]) {
            RiskAssessment::Unavailable { error } => assert_eq!(error, "No vegetation data provided"),
            other => panic!("expected unavailable, got {:?}", other),
        }
    }

    #[test]
    fn test_counts_and_totals() {
        let points = vec![
            point(RiskLevel::Critical, 0.8, 1000.0),
            point(RiskLevel::High, 0.6, 2000.0),
            point(RiskLevel::High, 0.4, 1500.0),
            point(RiskLevel::Low, 0.2, 500.0),
        ];

        let summary = match assess_risk(&points) {
            RiskAssessment::Summary(s) => s,
            other => panic!("expected summary, got {:?}", other),
        };

        assert_eq!(summary.critical_risks, 1);
        assert_eq!(summary.high_risks, 2);
        assert_eq!(summary.medium_risks, 0);
        assert_eq!(summary.low_risks, 1);
        assert_eq!(summary.total_cost, 5000.0);
        assert!((summary.average_risk_score - 0.5).abs() < 1e-12);
        assert_eq!(summary.total_vegetation_points, 4);
    }

    #[test]
    fn test_records_ignore_extra_fields() {
        let full = serde_json::json!({
            "id": "VEG_T_001",
            "type": "Pine",
            "height": 30.0,
            "distance": 5.0,
            "riskScore": 0.9,
            "riskLevel": "Critical",
            "priority": "Immediate",
            "estimatedCost": 2500.0
        });
        let record: RiskRecord = serde_json::from_value(full).unwrap();
        assert_eq!(record, point(RiskLevel::Critical, 0.9, 2500.0));

        let partial = serde_json::json!({
            "riskLevel": "High",
            "riskScore": 0.5,
            "estimatedCost": 1000.0
        });
        let record: RiskRecord = serde_json::from_value(partial).unwrap();
        assert_eq!(record, point(RiskLevel::High, 0.5, 1000.0));
    }

    #[test]
    fn test_unavailable_serializes_as_error_object() {
        let json = serde_json::to_value(assess_risk(&[])).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "No vegetation data provided" }));
    }
}
