//! Human-readable renderings of playback positions and view counts.

use crate::error::{CoreError, Result};

const SECONDS_PER_HOUR: u64 = 3600;

/// Render a position or duration in seconds.
///
/// Under an hour the result is `m:ss` (minutes unpadded); from one hour
/// up it is `h:mm:ss`. Fractions are truncated, so `59.9` renders as
/// `0:59`. Negative or non-finite input is rejected.
///
/// ```
/// use tinyflix_core::format::format_time;
///
/// assert_eq!(format_time(0.0).unwrap(), "0:00");
/// assert_eq!(format_time(3725.0).unwrap(), "1:02:05");
/// ```
pub fn format_time(seconds: f64) -> Result<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return Err(CoreError::Precondition(format!(
            "time must be a finite, non-negative number of seconds \
             (got {seconds})"
        )));
    }

    let total_seconds = seconds.trunc() as u64;
    let hours = total_seconds / SECONDS_PER_HOUR;
    let minutes = (total_seconds % SECONDS_PER_HOUR) / 60;
    let secs = total_seconds % 60;

    if total_seconds >= SECONDS_PER_HOUR {
        Ok(format!("{}:{:02}:{:02}", hours, minutes, secs))
    } else {
        Ok(format!("{}:{:02}", minutes, secs))
    }
}

/// Compact view counter: `999`, `1.2K`, `3.4M`, `1B`.
pub fn format_view_count(count: u64) -> String {
    const UNITS: [(u64, &str); 3] =
        [(1_000_000_000, "B"), (1_000_000, "M"), (1_000, "K")];

    for (scale, suffix) in UNITS {
        if count >= scale {
            // One decimal, truncated so 1_999 never shows as "2.0K"
            let tenths = count / (scale / 10);
            let whole = tenths / 10;
            let fraction = tenths % 10;
            return if fraction == 0 {
                format!("{whole}{suffix}")
            } else {
                format!("{whole}.{fraction}{suffix}")
            };
        }
    }
    count.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_h_mm_ss(s: &str) -> bool {
        let parts: Vec<&str> = s.split(':').collect();
        parts.len() == 3
            && !parts[0].is_empty()
            && !parts[0].starts_with('0')
            && parts[1].len() == 2
            && parts[2].len() == 2
            && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
    }

    fn is_m_ss(s: &str) -> bool {
        let parts: Vec<&str> = s.split(':').collect();
        parts.len() == 2
            && !parts[0].is_empty()
            && parts[1].len() == 2
            && parts.iter().all(|p| p.chars().all(|c| c.is_ascii_digit()))
    }

    #[test]
    fn zero_renders_as_minutes() {
        assert_eq!(format_time(0.0).unwrap(), "0:00");
    }

    #[test]
    fn sub_hour_values() {
        assert_eq!(format_time(5.0).unwrap(), "0:05");
        assert_eq!(format_time(45.0).unwrap(), "0:45");
        assert_eq!(format_time(754.0).unwrap(), "12:34");
        assert_eq!(format_time(3599.0).unwrap(), "59:59");
    }

    #[test]
    fn hour_boundary_switches_layout() {
        assert_eq!(format_time(3600.0).unwrap(), "1:00:00");
        assert_eq!(format_time(3725.0).unwrap(), "1:02:05");
        assert_eq!(format_time(5025.0).unwrap(), "1:23:45");
        assert_eq!(format_time(36_000.0).unwrap(), "10:00:00");
    }

    #[test]
    fn fractional_seconds_truncate() {
        assert_eq!(format_time(59.99).unwrap(), "0:59");
        assert_eq!(format_time(3599.999).unwrap(), "59:59");
    }

    #[test]
    fn layout_holds_across_ranges() {
        for s in (0..3600).step_by(7) {
            let rendered = format_time(s as f64).unwrap();
            assert!(is_m_ss(&rendered), "{s} -> {rendered}");
        }
        for s in (3600..200_000).step_by(613) {
            let rendered = format_time(s as f64).unwrap();
            assert!(is_h_mm_ss(&rendered), "{s} -> {rendered}");
        }
    }

    #[test]
    fn negative_and_non_finite_are_preconditions() {
        for bad in [-1.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                format_time(bad),
                Err(CoreError::Precondition(_))
            ));
        }
    }

    #[test]
    fn view_counts_compact() {
        assert_eq!(format_view_count(0), "0");
        assert_eq!(format_view_count(999), "999");
        assert_eq!(format_view_count(1_000), "1K");
        assert_eq!(format_view_count(1_250), "1.2K");
        assert_eq!(format_view_count(1_999), "1.9K");
        assert_eq!(format_view_count(3_400_000), "3.4M");
        assert_eq!(format_view_count(1_000_000_000), "1B");
    }
}
