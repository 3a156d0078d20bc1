use geo::{BoundingRect, MultiPoint};
use crate::models::{BoundingBox, Coordinate, MapConfig};

/// Location used when there is nothing to bound (San Francisco)
pub const FALLBACK_LOCATION: Coordinate = Coordinate::new(-122.4194, 37.7749);

/// Zoom level when the span is below every threshold
pub const MAX_ZOOM_LEVEL: u8 = 10;

/// Span thresholds in degrees, descending; first exceeded threshold wins
const ZOOM_THRESHOLDS: [(f64, u8); 5] = [
    (10.0, 5),
    (5.0, 6),
    (2.0, 7),
    (1.0, 8),
    (0.5, 9),
];

/// Calculate the bounding box covering all coordinates
///
/// An empty slice yields a point box at [`FALLBACK_LOCATION`].
pub fn calculate_bounds(coordinates: &[Coordinate]) -> BoundingBox {
    let points: MultiPoint<f64> = coordinates.iter().copied().collect();

    match points.bounding_rect() {
        Some(rect) => BoundingBox {
            min_lat: rect.min().y,
            max_lat: rect.max().y,
            min_lon: rect.min().x,
            max_lon: rect.max().x,
        },
        None => BoundingBox::point(FALLBACK_LOCATION),
    }
}

/// Map a span in degrees to a slippy-map zoom level
///
/// Larger spans give smaller (coarser) zoom levels. Thresholds are exclusive.
#[inline]
pub fn zoom_level_for_span(span: f64) -> u8 {
    ZOOM_THRESHOLDS
        .iter()
        .find(|(threshold, _)| span > *threshold)
        .map(|(_, zoom)| *zoom)
        .unwrap_or(MAX_ZOOM_LEVEL)
}

impl BoundingBox {
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Self {
        calculate_bounds(coordinates)
    }

    pub fn zoom_level(&self) -> u8 {
        zoom_level_for_span(self.span())
    }

    /// Center and zoom a map viewport on this box
    pub fn map_config(&self) -> MapConfig {
        let center = self.center();
        MapConfig {
            center_lat: center.lat,
            center_lon: center.lon,
            zoom_level: self.zoom_level(),
            bounds: *self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_coordinate_bounds() {
        let bbox = calculate_bounds(&[Coordinate::new(13.405, 52.52)]);

        assert_eq!(bbox.min_lat, 52.52);
        assert_eq!(bbox.max_lat, 52.52);
        assert_eq!(bbox.min_lon, 13.405);
        assert_eq!(bbox.max_lon, 13.405);
    }

    #[test]
    fn test_empty_bounds_fallback() {
        let bbox = calculate_bounds(&[]);
        assert_eq!(bbox, BoundingBox::point(FALLBACK_LOCATION));
        assert_eq!(bbox.span(), 0.0);
    }

    #[test]
    fn test_axes_reduced_independently() {
        let bbox = calculate_bounds(&[
            Coordinate::new(-1.0, 10.0),
            Coordinate::new(3.0, -2.0),
            Coordinate::new(0.5, 4.0),
        ]);

        assert_eq!(bbox.min_lon, -1.0);
        assert_eq!(bbox.max_lon, 3.0);
        assert_eq!(bbox.min_lat, -2.0);
        assert_eq!(bbox.max_lat, 10.0);
    }

    #[test]
    fn test_zoom_thresholds() {
        assert_eq!(zoom_level_for_span(0.0), 10);
        assert_eq!(zoom_level_for_span(0.5), 10);
        assert_eq!(zoom_level_for_span(0.51), 9);
        assert_eq!(zoom_level_for_span(1.0), 9);
        assert_eq!(zoom_level_for_span(1.5), 8);
        assert_eq!(zoom_level_for_span(3.0), 7);
        assert_eq!(zoom_level_for_span(5.0), 7);
        assert_eq!(zoom_level_for_span(7.0), 6);
        assert_eq!(zoom_level_for_span(10.0), 6);
        assert_eq!(zoom_level_for_span(11.0), 5);
    }

    #[test]
    fn test_zoom_is_non_increasing() {
        let mut previous = zoom_level_for_span(0.0);
        for step in 1..400 {
            let zoom = zoom_level_for_span(step as f64 * 0.05);
            assert!(zoom <= previous, "zoom increased at span {}", step as f64 * 0.05);
            previous = zoom;
        }
    }

    #[test]
    fn test_zoom_uses_larger_span() {
        let bbox = BoundingBox {
            min_lat: 0.0,
            max_lat: 0.1,
            min_lon: 0.0,
            max_lon: 12.0,
        };
        assert_eq!(bbox.zoom_level(), 5);
    }

    #[test]
    fn test_map_config_centers_box() {
        let bbox = BoundingBox {
            min_lat: 10.0,
            max_lat: 20.0,
            min_lon: -4.0,
            max_lon: 0.0,
        };
        let config = bbox.map_config();

        assert_eq!(config.center_lat, 15.0);
        assert_eq!(config.center_lon, -2.0);
        assert_eq!(config.zoom_level, 6);
        assert_eq!(config.bounds, bbox);
    }
}
