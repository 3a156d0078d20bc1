use rand::distr::{Distribution, StandardUniform};
use rand::Rng;
use crate::models::{BaseCounts, LineData, Priority, RiskLevel, TreeSpecies, VegetationPoint};

const TRANSMISSION_LINE: &str = "transmission";

impl Distribution<TreeSpecies> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> TreeSpecies {
        match rng.random_range(0..5) {
            0 => TreeSpecies::Oak,
            1 => TreeSpecies::Pine,
            2 => TreeSpecies::Maple,
            3 => TreeSpecies::Birch,
            _ => TreeSpecies::Cedar,
        }
    }
}

impl Distribution<RiskLevel> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> RiskLevel {
        match rng.random_range(0..4) {
            0 => RiskLevel::Low,
            1 => RiskLevel::Medium,
            2 => RiskLevel::High,
            _ => RiskLevel::Critical,
        }
    }
}

impl Distribution<Priority> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Priority {
        match rng.random_range(0..4) {
            0 => Priority::Low,
            1 => Priority::Medium,
            2 => Priority::High,
            _ => Priority::Immediate,
        }
    }
}

/// Fabricates vegetation samples along a power line
///
/// Point density depends on the line type and the region the line runs
/// through:
/// - transmission lines start from `BaseCounts::transmission`, anything else
///   from `BaseCounts::distribution`
/// - forest or rural regions double the count
/// - urban or city regions keep 30% of it
#[derive(Debug, Clone, Copy, Default)]
pub struct VegetationGenerator {
    base_counts: BaseCounts,
}

impl VegetationGenerator {
    pub fn new(base_counts: BaseCounts) -> Self {
        Self { base_counts }
    }

    pub fn with_default_counts() -> Self {
        Self::default()
    }

    /// Number of points generated for a line
    pub fn point_count(&self, line_data: &LineData) -> usize {
        let base = if line_data.line_type == TRANSMISSION_LINE {
            self.base_counts.transmission
        } else {
            self.base_counts.distribution
        };

        let region = line_data.region.to_lowercase();
        if region.contains("forest") || region.contains("rural") {
            base * 2
        } else if region.contains("urban") || region.contains("city") {
            base * 3 / 10
        } else {
            base
        }
    }

    /// Generate vegetation points for a line
    ///
    /// Point ids are `VEG_{line_id}_{index:03}`.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        line_id: &str,
        line_data: &LineData,
        rng: &mut R,
    ) -> Vec<VegetationPoint> {
        (0..self.point_count(line_data))
            .map(|i| VegetationPoint {
                id: format!("VEG_{}_{:03}", line_id, i),
                species: rng.random(),
                height: rng.random_range(5.0..25.0),
                distance: rng.random_range(5.0..50.0),
                risk_score: rng.random_range(0.1..0.9),
                risk_level: rng.random(),
                priority: rng.random(),
                estimated_cost: rng.random_range(1000.0..5000.0),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn line(line_type: &str, region: &str) -> LineData {
        LineData {
            line_type: line_type.to_string(),
            region: region.to_string(),
            ..LineData::default()
        }
    }

    #[test]
    fn test_point_count_by_line_type() {
        let generator = VegetationGenerator::with_default_counts();

        assert_eq!(generator.point_count(&line("transmission", "Unknown")), 50);
        assert_eq!(generator.point_count(&line("distribution", "Unknown")), 30);
    }

    #[test]
    fn test_point_count_by_region() {
        let generator = VegetationGenerator::with_default_counts();

        assert_eq!(generator.point_count(&line("transmission", "Northern Forest")), 100);
        assert_eq!(generator.point_count(&line("distribution", "RURAL valley")), 60);
        assert_eq!(generator.point_count(&line("transmission", "Urban core")), 15);
        assert_eq!(generator.point_count(&line("distribution", "Inner City")), 9);
    }

    #[test]
    fn test_generated_ids_and_ranges() {
        let generator = VegetationGenerator::with_default_counts();
        let mut rng = StdRng::seed_from_u64(7);
        let points = generator.generate("L1", &LineData::default(), &mut rng);

        assert_eq!(points.len(), 50);
        assert_eq!(points[0].id, "VEG_L1_000");
        assert_eq!(points[49].id, "VEG_L1_049");

        for p in &points {
            assert!(p.height >= 5.0 && p.height < 25.0);
            assert!(p.distance >= 5.0 && p.distance < 50.0);
            assert!(p.risk_score >= 0.1 && p.risk_score < 0.9);
            assert!(p.estimated_cost >= 1000.0 && p.estimated_cost < 5000.0);
        }
    }

    #[test]
    fn test_same_seed_same_points() {
        let generator = VegetationGenerator::with_default_counts();
        let a = generator.generate("L1", &LineData::default(), &mut StdRng::seed_from_u64(42));
        let b = generator.generate("L1", &LineData::default(), &mut StdRng::seed_from_u64(42));

        let heights_a: Vec<f64> = a.iter().map(|p| p.height).collect();
        let heights_b: Vec<f64> = b.iter().map(|p| p.height).collect();
        assert_eq!(heights_a, heights_b);
    }
}
