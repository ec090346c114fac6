const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
pub(crate) const DAY: u64 = 24 * HOUR;

/// Ages at or beyond this are reported as having no recent data.
pub const NO_RECENT_DATA_AFTER: u64 = 10 * DAY;

pub const NO_RECENT_DATA: &str = "No recent data";

/// Describes an age in seconds using the coarsest fitting pair of units.
pub fn format_age(age: u64) -> String {
    if age < MINUTE {
        return format!("{age} Seconds");
    }

    if age < HOUR {
        return format!("{} Minutes {} Seconds", age / MINUTE, age % MINUTE);
    }

    if age < DAY {
        return format!(
            "{} Hours {} Minutes",
            age / HOUR,
            round_half_even(age % HOUR, MINUTE)
        );
    }

    if age >= NO_RECENT_DATA_AFTER {
        return NO_RECENT_DATA.to_string();
    }

    format!(
        "{} Days {} Hours",
        age / DAY,
        round_half_even(age % DAY, HOUR)
    )
}

// value / unit rounded to the nearest integer, ties to even.
fn round_half_even(value: u64, unit: u64) -> u64 {
    let quotient = value / unit;
    let twice_remainder = 2 * (value % unit);
    if twice_remainder > unit || (twice_remainder == unit && quotient % 2 == 1) {
        quotient + 1
    } else {
        quotient
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seconds_below_one_minute() {
        assert_eq!(format_age(0), "0 Seconds");
        assert_eq!(format_age(45), "45 Seconds");
        assert_eq!(format_age(59), "59 Seconds");
    }

    #[test]
    fn minutes_and_seconds_below_one_hour() {
        assert_eq!(format_age(60), "1 Minutes 0 Seconds");
        assert_eq!(format_age(90), "1 Minutes 30 Seconds");
        assert_eq!(format_age(3599), "59 Minutes 59 Seconds");
    }

    #[test]
    fn hours_and_rounded_minutes_below_one_day() {
        assert_eq!(format_age(3600), "1 Hours 0 Minutes");
        assert_eq!(format_age(3661), "1 Hours 1 Minutes");
        assert_eq!(format_age(3600 + 89), "1 Hours 1 Minutes");
        assert_eq!(format_age(3600 + 91), "1 Hours 2 Minutes");
        // 59.98 minutes rounds to 60 rather than carrying into the hour
        assert_eq!(format_age(7199), "1 Hours 60 Minutes");
    }

    #[test]
    fn half_minute_ties_round_to_even() {
        assert_eq!(format_age(3600 + 30), "1 Hours 0 Minutes");
        assert_eq!(format_age(3600 + 90), "1 Hours 2 Minutes");
    }

    #[test]
    fn days_and_rounded_hours_below_ten_days() {
        assert_eq!(format_age(86400), "1 Days 0 Hours");
        assert_eq!(format_age(90000), "1 Days 1 Hours");
        assert_eq!(format_age(86400 + 1800), "1 Days 0 Hours");
        assert_eq!(format_age(86400 + 5400), "1 Days 2 Hours");
    }

    #[test]
    fn ten_day_boundary() {
        assert_eq!(format_age(863_999), "9 Days 24 Hours");
        assert_eq!(format_age(864_000), NO_RECENT_DATA);
        assert_eq!(format_age(900_000), NO_RECENT_DATA);
        assert_eq!(format_age(u64::MAX), NO_RECENT_DATA);
    }

    #[test]
    fn round_half_even_matches_banker_rounding() {
        assert_eq!(round_half_even(30, 60), 0);
        assert_eq!(round_half_even(90, 60), 2);
        assert_eq!(round_half_even(150, 60), 2);
        assert_eq!(round_half_even(31, 60), 1);
        assert_eq!(round_half_even(29, 60), 0);
    }
}
