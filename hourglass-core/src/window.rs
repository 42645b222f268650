//! Daily time window during which the block list is enforced

use crate::error::{TimeFormatError, WindowConfigError};
use chrono::{DateTime, NaiveTime, TimeZone, Timelike};
use std::fmt;

/// Window start used when no start time is supplied
pub const DEFAULT_START: &str = "9:00AM";
/// Window end used when no end time is supplied
pub const DEFAULT_END: &str = "5:00PM";

/// Kitchen-clock format: 12-hour with an AM/PM suffix, no leading zero
/// required
const KITCHEN_FORMAT: &str = "%I:%M%p";
/// Display variant of the kitchen format, hour rendered without padding
const KITCHEN_DISPLAY: &str = "%-I:%M%p";

fn parse_boundary(
    field: &'static str,
    value: &str,
    default: &str,
) -> Result<NaiveTime, TimeFormatError> {
    let raw = if value.is_empty() { default } else { value };
    NaiveTime::parse_from_str(raw, KITCHEN_FORMAT).map_err(|source| TimeFormatError {
        field,
        value: raw.to_string(),
        source,
    })
}

/// Recurring daily window, inclusive of its start and exclusive of its end
///
/// Moments are compared by their time of day only; the date is ignored and
/// sub-second precision is discarded, so `5:00:00.3PM` falls outside a
/// window ending at `5:00PM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockWindow {
    start: NaiveTime,
    end: NaiveTime,
}

impl BlockWindow {
    /// Build a window from kitchen-time strings such as `9:00AM`
    ///
    /// Empty strings fall back to [`DEFAULT_START`] and [`DEFAULT_END`].
    /// Both boundaries are always validated so one error report covers
    /// every bad input.
    pub fn configure(start: &str, end: &str) -> Result<Self, WindowConfigError> {
        let mut errors = Vec::new();

        let start = match parse_boundary("start", start, DEFAULT_START) {
            Ok(time) => Some(time),
            Err(err) => {
                errors.push(err);
                None
            }
        };
        let end = match parse_boundary("end", end, DEFAULT_END) {
            Ok(time) => Some(time),
            Err(err) => {
                errors.push(err);
                None
            }
        };

        match (start, end) {
            (Some(start), Some(end)) => Ok(Self { start, end }),
            _ => Err(WindowConfigError { errors }),
        }
    }

    pub fn start(&self) -> NaiveTime {
        self.start
    }

    pub fn end(&self) -> NaiveTime {
        self.end
    }

    /// Whether the moment's local time of day falls inside the window
    pub fn contains<Tz: TimeZone>(&self, moment: &DateTime<Tz>) -> bool {
        self.contains_time(moment.time())
    }

    /// Whether a bare time of day falls inside the window
    pub fn contains_time(&self, time_of_day: NaiveTime) -> bool {
        let truncated = time_of_day.with_nanosecond(0).unwrap_or(time_of_day);
        self.start <= truncated && truncated < self.end
    }
}

impl fmt::Display for BlockWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.start.format(KITCHEN_DISPLAY),
            self.end.format(KITCHEN_DISPLAY)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn window(start: &str, end: &str) -> BlockWindow {
        BlockWindow::configure(start, end).unwrap()
    }

    fn time(raw: &str) -> NaiveTime {
        NaiveTime::parse_from_str(raw, "%I:%M%p").unwrap()
    }

    #[test]
    fn test_boundaries_start_inclusive_end_exclusive() {
        let window = window("9:00AM", "5:00PM");

        assert!(window.contains_time(time("9:00AM")));
        assert!(!window.contains_time(time("8:59AM")));
        assert!(window.contains_time(time("4:59PM")));
        assert!(!window.contains_time(time("5:00PM")));
    }

    #[test]
    fn test_empty_strings_fall_back_to_defaults() {
        let defaulted = window("", "");
        assert_eq!(defaulted, window("9:00AM", "5:00PM"));
        assert_eq!(defaulted.start(), time("9:00AM"));
        assert_eq!(defaulted.end(), time("5:00PM"));
    }

    #[test]
    fn test_custom_minutes_are_honored() {
        let window = window("9:38AM", "5:14PM");

        assert!(window.contains_time(time("9:38AM")));
        assert!(!window.contains_time(time("9:37AM")));
        assert!(window.contains_time(time("5:13PM")));
        assert!(!window.contains_time(time("5:14PM")));
    }

    #[test]
    fn test_window_starting_at_midnight() {
        let window = window("12:00AM", "6:00PM");

        assert!(window.contains_time(time("12:00AM")));
        assert!(window.contains_time(time("9:00AM")));
        assert!(!window.contains_time(time("6:00PM")));
    }

    #[test]
    fn test_contains_checks_time_of_day_only() {
        let window = window("9:00AM", "5:00PM");

        let inside = Utc.with_ymd_and_hms(2024, 5, 15, 10, 0, 0).unwrap();
        let outside = Utc.with_ymd_and_hms(2019, 11, 3, 18, 0, 0).unwrap();

        assert!(window.contains(&inside));
        assert!(!window.contains(&outside));
    }

    #[test]
    fn test_sub_second_precision_is_discarded() {
        let window = window("9:00AM", "5:00PM");

        let just_before_end = NaiveTime::from_hms_milli_opt(16, 59, 59, 999).unwrap();
        let just_after_end = NaiveTime::from_hms_milli_opt(17, 0, 0, 1).unwrap();

        assert!(window.contains_time(just_before_end));
        assert!(!window.contains_time(just_after_end));
    }

    #[test]
    fn test_invalid_start_is_reported_by_name() {
        let err = BlockWindow::configure("IamNotValid", "5:00PM").unwrap_err();

        assert_eq!(err.errors.len(), 1);
        assert_eq!(err.errors[0].field, "start");
        assert_eq!(err.errors[0].value, "IamNotValid");
    }

    #[test]
    fn test_both_invalid_boundaries_are_reported() {
        let err = BlockWindow::configure("45difyr8&E&FDG", "45difyr8&E&FDG").unwrap_err();

        assert_eq!(err.errors.len(), 2);
        assert_eq!(err.errors[0].field, "start");
        assert_eq!(err.errors[1].field, "end");
    }

    #[test]
    fn test_twenty_four_hour_input_is_rejected() {
        assert!(BlockWindow::configure("17:00", "18:00").is_err());
    }

    #[test]
    fn test_display_round_trips_kitchen_format() {
        assert_eq!(window("9:00AM", "5:00PM").to_string(), "9:00AM-5:00PM");
        assert_eq!(window("11:30PM", "12:15AM").to_string(), "11:30PM-12:15AM");
    }
}
