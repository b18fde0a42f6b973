use std::time::Duration;

/// Parses a YouTube-style clock duration (`"45"`, `"3:45"` or `"1:02:30"`) into a [Duration]. Returns `None` for
/// anything else, including more than three components or a value too large to represent.
pub(crate) fn parse_clock_duration(text: &str) -> Option<Duration> {
    let mut seconds = 0u64;
    let mut components = 0;

    for part in text.trim().split(':') {
        components += 1;
        if components > 3 {
            return None;
        }

        seconds = seconds.checked_mul(60)?.checked_add(part.parse::<u64>().ok()?)?;
    }

    Some(Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_minutes_seconds() {
        assert_eq!(parse_clock_duration("3:45"), Some(Duration::from_secs(225)));
    }

    #[test]
    fn clock_hours_minutes_seconds() {
        assert_eq!(parse_clock_duration("1:02:30"), Some(Duration::from_secs(3750)));
    }

    #[test]
    fn clock_bare_seconds() {
        assert_eq!(parse_clock_duration("59"), Some(Duration::from_secs(59)));
    }

    #[test]
    fn clock_rejects_garbage() {
        assert_eq!(parse_clock_duration(""), None);
        assert_eq!(parse_clock_duration("live"), None);
        assert_eq!(parse_clock_duration("1:2:3:4"), None);
    }

    #[test]
    fn clock_rejects_overflow() {
        assert_eq!(parse_clock_duration("307445734561825861:0"), None);
        assert_eq!(parse_clock_duration("1:18446744073709551615"), None);
    }
}
