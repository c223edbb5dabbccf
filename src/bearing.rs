/// The 16 compass points, clockwise from North.
pub const DIRECTIONS: [&str; 16] = [
    "N", "NNE", "NE", "ENE", "E", "ESE", "SE", "SSE", "S", "SSW", "SW", "WSW", "W", "WNW", "NW",
    "NNW",
];

/// Convert a bearing in degrees (clockwise from North) to a compass label.
///
/// Each label covers a 22.5° sector centered on its direction, so the angle is
/// shifted by half a sector before dividing. The remainder is taken before
/// truncation, which keeps 360° on "N" rather than overflowing the table.
/// Negative angles saturate to index 0.
pub fn bearing_label(degrees: f64) -> &'static str {
    let index = ((degrees + 11.25) / 22.5 % 16.0) as usize;
    DIRECTIONS[index.min(DIRECTIONS.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_points() {
        assert_eq!(bearing_label(0.0), "N");
        assert_eq!(bearing_label(90.0), "E");
        assert_eq!(bearing_label(180.0), "S");
        assert_eq!(bearing_label(270.0), "W");
    }

    #[test]
    fn sector_boundaries() {
        assert_eq!(bearing_label(11.24), "N");
        assert_eq!(bearing_label(11.26), "NNE");
        assert_eq!(bearing_label(33.74), "NNE");
        assert_eq!(bearing_label(33.76), "NE");
        assert_eq!(bearing_label(348.74), "NNW");
        assert_eq!(bearing_label(348.76), "N");
    }

    #[test]
    fn wraps_at_full_circle() {
        assert_eq!(bearing_label(359.9), "N");
        assert_eq!(bearing_label(360.0), "N");
    }

    #[test]
    fn negative_saturates_to_north() {
        assert_eq!(bearing_label(-5.0), "N");
        assert_eq!(bearing_label(-100.0), "N");
    }

    #[test]
    fn every_degree_maps_to_a_known_label() {
        for tenth in 0..3600 {
            let label = bearing_label(tenth as f64 / 10.0);
            assert!(DIRECTIONS.contains(&label), "{label}");
        }
    }

    #[test]
    fn sector_centers() {
        for (i, &label) in DIRECTIONS.iter().enumerate() {
            assert_eq!(bearing_label(i as f64 * 22.5), label);
        }
    }
}
