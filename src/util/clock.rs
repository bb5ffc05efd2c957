use std::fmt::Write;
use std::time::Duration;

/// Formats `elapsed` as `h:mm:ss.f` with leading zero units dropped:
/// `12.3`, `04:05.6`, `1:02:03.4`.
pub fn runtime(elapsed: Duration) -> String {
    let mut out = hms(elapsed);
    let _ = write!(out, ".{}", elapsed.subsec_millis() / 100);
    strip_leading_zero_units(out)
}

/// Formats `remaining` as `h:mm:ss` with leading zero units dropped:
/// `18`, `04:05`, `1:02:03`.
pub fn eta(remaining: Duration) -> String {
    strip_leading_zero_units(hms(remaining))
}

fn hms(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{}:{:02}:{:02}", secs / 3600, (secs / 60) % 60, secs % 60)
}

fn strip_leading_zero_units(s: String) -> String {
    let rest = s.strip_prefix("0:").unwrap_or(&s);
    let rest = rest.strip_prefix("00:").unwrap_or(rest);
    rest.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn runtime_drops_zero_units() {
        assert_eq!(runtime(Duration::from_millis(0)), "00.0");
        assert_eq!(runtime(Duration::from_millis(12_345)), "12.3");
        assert_eq!(runtime(Duration::from_millis(245_600)), "04:05.6");
        assert_eq!(runtime(Duration::from_millis(3_723_490)), "1:02:03.4");
        assert_eq!(runtime(Duration::from_secs(36_000)), "10:00:00.0");
    }

    #[test]
    fn eta_drops_zero_units() {
        assert_eq!(eta(Duration::from_secs(18)), "18");
        assert_eq!(eta(Duration::from_millis(18_900)), "18");
        assert_eq!(eta(Duration::from_secs(245)), "04:05");
        assert_eq!(eta(Duration::from_secs(3723)), "1:02:03");
    }
}
