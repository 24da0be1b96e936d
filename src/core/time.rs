//! Time helpers for the player: positions are `f64` seconds as reported by the
//! media surface, durations are whole seconds.

/// Seconds per minute
pub const SECONDS_PER_MINUTE: f64 = 60.0;

/// Floor a reported position or length to whole seconds.
///
/// Non-finite and negative values collapse to zero, which is what a surface
/// reports before its metadata is known.
#[inline]
pub fn floor_seconds(seconds: f64) -> u64 {
    if !seconds.is_finite() || seconds <= 0.0 {
        return 0;
    }
    seconds.floor() as u64
}

/// Format seconds as MM:SS.
///
/// Both parts are floored and zero-padded to two digits. Minutes are never
/// wrapped into hours, so 7501 seconds renders as `125:01`.
pub fn format_time(total_seconds: f64) -> String {
    let minutes = (total_seconds / SECONDS_PER_MINUTE).floor() as u64;
    let seconds = (total_seconds % SECONDS_PER_MINUTE).floor() as u64;

    format!("{:02}:{:02}", minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0.0), "00:00");
        assert_eq!(format_time(65.0), "01:05");
        assert_eq!(format_time(599.0), "09:59");
        assert_eq!(format_time(600.0), "10:00");
    }

    #[test]
    fn test_format_time_long_media() {
        // 125 minutes, 1 second: minutes keep growing instead of wrapping
        assert_eq!(format_time(7501.0), "125:01");
        assert_eq!(format_time(7627.0), "127:07");
    }

    #[test]
    fn test_format_time_floors_fractions() {
        assert_eq!(format_time(59.999), "00:59");
        assert_eq!(format_time(61.5), "01:01");
    }

    #[test]
    fn test_format_time_invalid_input() {
        // Casts saturate, so garbage positions render as zero
        assert_eq!(format_time(f64::NAN), "00:00");
        assert_eq!(format_time(-5.0), "00:00");
    }

    #[test]
    fn test_floor_seconds() {
        assert_eq!(floor_seconds(125.9), 125);
        assert_eq!(floor_seconds(125.0), 125);
        assert_eq!(floor_seconds(0.4), 0);
    }

    #[test]
    fn test_floor_seconds_unknown_length() {
        assert_eq!(floor_seconds(f64::NAN), 0);
        assert_eq!(floor_seconds(f64::INFINITY), 0);
        assert_eq!(floor_seconds(-1.0), 0);
    }
}
