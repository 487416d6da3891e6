//! DateTime display utilities.
//!
//! Chat timestamps are shown relative to the current day in the system time
//! zone, the way messaging apps label their conversation lists.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp, Zoned};

/// A wrapper around `Timestamp` that renders a chat-list time label.
///
/// # Format
///
/// - same day as now: `2:30 PM`
/// - the day before: `Yesterday`
/// - anything else: `MM/DD/YY`
pub struct RelativeTime<'a>(pub &'a Timestamp);

impl<'a> fmt::Display for RelativeTime<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let now = Timestamp::now().to_zoned(TimeZone::system());
        f.write_str(&relative_label(self.0, &now))
    }
}

/// Label for `at` as seen from `now`, in `now`'s time zone.
pub fn relative_label(at: &Timestamp, now: &Zoned) -> String {
    let local = at.to_zoned(now.time_zone().clone());
    let today = now.date();
    if local.date() == today {
        local.strftime("%-I:%M %p").to_string()
    } else if today.yesterday().is_ok_and(|yesterday| local.date() == yesterday) {
        "Yesterday".to_string()
    } else {
        local.strftime("%m/%d/%y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zoned(s: &str) -> Zoned {
        s.parse().unwrap()
    }

    #[test]
    fn test_same_day_shows_clock_time() {
        let now = zoned("2025-06-14T18:00:00+00:00[UTC]");
        let at: Timestamp = "2025-06-14T14:32:00Z".parse().unwrap();
        assert_eq!(relative_label(&at, &now), "2:32 PM");

        let morning: Timestamp = "2025-06-14T09:05:00Z".parse().unwrap();
        assert_eq!(relative_label(&morning, &now), "9:05 AM");
    }

    #[test]
    fn test_previous_day_is_yesterday() {
        let now = zoned("2025-06-14T00:30:00+00:00[UTC]");
        let at: Timestamp = "2025-06-13T23:59:00Z".parse().unwrap();
        assert_eq!(relative_label(&at, &now), "Yesterday");
    }

    #[test]
    fn test_older_dates_use_short_date() {
        let now = zoned("2025-06-14T12:00:00+00:00[UTC]");
        let at: Timestamp = "2025-06-05T08:00:00Z".parse().unwrap();
        assert_eq!(relative_label(&at, &now), "06/05/25");
    }

    #[test]
    fn test_label_uses_time_zone_of_now() {
        // 01:00 UTC on the 14th is still the 13th at UTC-4.
        let now = zoned("2025-06-13T22:00:00-04:00[-04:00]");
        let at: Timestamp = "2025-06-14T01:00:00Z".parse().unwrap();
        assert_eq!(relative_label(&at, &now), "9:00 PM");
    }
}
