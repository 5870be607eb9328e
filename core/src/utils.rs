use crate::DEFAULT_DURATION_SECS;

use log::warn;

/// Slider position to total auction duration in seconds. The slider is
/// non-linear, so positions are treated as opaque ids and resolved here.
pub const DURATION_TABLE: [(f64, u64); 9] = [
    (0.0, 600),
    (12.5, 1800),
    (25.0, 3600),
    (37.5, 7200),
    (50.0, 21_600),
    (62.5, 43_200),
    (75.0, 86_400),
    (87.5, 172_800),
    (100.0, 345_600),
];

#[derive(Debug, Clone, Copy)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Copy)]
pub struct InputRange {
    pub value: f64,
    pub min: f64,
    pub max: f64,
}

/// Linearly maps a value from one range to another, rounding to the nearest
/// integer.
pub fn map_value_to_range(input: InputRange, output: Range) -> i64 {
    let ratio = (input.value - input.min) / (input.max - input.min);
    (output.min + ratio * (output.max - output.min)).round() as i64
}

/// Resolves a duration slider position to seconds.
///
/// Off-table positions fall back to the minimum duration with a warning;
/// this is never surfaced as a user-facing failure.
pub fn duration_from_slider(position: f64) -> u64 {
    for (key, duration_secs) in DURATION_TABLE {
        if (position - key).abs() < f64::EPSILON {
            return duration_secs;
        }
    }
    warn!("duration slider position {} not found in duration table, defaulting to 10 minutes", position);
    DEFAULT_DURATION_SECS
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn maps_between_ranges() {
        let mapped = |value: f64| {
            map_value_to_range(
                InputRange {
                    value,
                    min: 0.0,
                    max: 345_600.0,
                },
                Range { min: 1.0, max: 30.0 },
            )
        };
        assert_eq!(mapped(0.0), 1);
        assert_eq!(mapped(345_600.0), 30);
        assert_eq!(mapped(172_800.0), 16);
        // the "1 hr" slider point maps to a single auction
        assert_eq!(mapped(3600.0), 1);
    }

    #[test]
    fn resolves_every_slider_position() {
        assert_eq!(duration_from_slider(0.0), 600);
        assert_eq!(duration_from_slider(12.5), 1800);
        assert_eq!(duration_from_slider(25.0), 3600);
        assert_eq!(duration_from_slider(37.5), 7200);
        assert_eq!(duration_from_slider(50.0), 21_600);
        assert_eq!(duration_from_slider(62.5), 43_200);
        assert_eq!(duration_from_slider(75.0), 86_400);
        assert_eq!(duration_from_slider(87.5), 172_800);
        assert_eq!(duration_from_slider(100.0), 345_600);
    }

    #[test]
    fn off_table_position_defaults_to_ten_minutes() {
        assert_eq!(duration_from_slider(13.0), DEFAULT_DURATION_SECS);
        assert_eq!(duration_from_slider(-1.0), DEFAULT_DURATION_SECS);
    }
}
