use bazaar_models::v0::{DatePreset, ReportFilterParams};
use iso8601_timestamp::{Duration, Timestamp};
use time::{Date, Month};

/// Closed time interval a report's submission time is filtered against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateBounds {
    /// Inclusive lower bound, `None` if unbounded
    pub start: Option<Timestamp>,
    /// Inclusive upper bound, `None` if unbounded
    pub end: Option<Timestamp>,
}

impl DateBounds {
    pub const UNBOUNDED: DateBounds = DateBounds {
        start: None,
        end: None,
    };

    /// A missing bound is always satisfied
    pub fn contains(&self, instant: Timestamp) -> bool {
        self.start.map_or(true, |start| instant >= start)
            && self.end.map_or(true, |end| instant <= end)
    }
}

/// Resolve a filter's date preset or explicit range into concrete bounds.
///
/// `now` is passed in rather than read from the clock so results are
/// reproducible. Arithmetic is calendar-date based to avoid day-boundary
/// drift. Malformed input never errors; it falls back to an unbounded side.
pub fn resolve_date_bounds(params: &ReportFilterParams, now: Timestamp) -> DateBounds {
    let today = now.date();

    match params.date_preset {
        Some(DatePreset::All) => return DateBounds::UNBOUNDED,
        Some(DatePreset::Today) => return day_span(today, today),
        Some(DatePreset::Yesterday) => {
            let yesterday = today - Duration::days(1);
            return day_span(yesterday, yesterday);
        }
        Some(DatePreset::Last7) => return day_span(today - Duration::days(6), today),
        Some(DatePreset::Last30) => return day_span(today - Duration::days(29), today),
        Some(DatePreset::Custom) => return explicit_bounds(params),
        None => {}
    }

    // No preset given: explicit dates still win if either side parses
    let explicit = explicit_bounds(params);
    if explicit != DateBounds::UNBOUNDED {
        return explicit;
    }

    legacy_bounds(params.date_range.as_deref(), today)
}

fn explicit_bounds(params: &ReportFilterParams) -> DateBounds {
    let start = params.start_date.as_deref().and_then(parse_calendar_date);
    let end = params.end_date.as_deref().and_then(parse_calendar_date);

    // A reversed range is treated as swapped, not as empty
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) if start > end => (Some(end), Some(start)),
        other => other,
    };

    DateBounds {
        start: start.map(start_of_day),
        end: end.map(end_of_day),
    }
}

/// Legacy filter: `"all"` or a number of days counted back from today
fn legacy_bounds(date_range: Option<&str>, today: Date) -> DateBounds {
    match date_range {
        None | Some("all") => DateBounds::UNBOUNDED,
        Some(range) => match range.trim().parse::<i64>() {
            Ok(days) if days > 0 => day_span(today - Duration::days(days - 1), today),
            _ => DateBounds::UNBOUNDED,
        },
    }
}

fn day_span(start: Date, end: Date) -> DateBounds {
    DateBounds {
        start: Some(start_of_day(start)),
        end: Some(end_of_day(end)),
    }
}

fn start_of_day(date: Date) -> Timestamp {
    Timestamp::from(date.midnight())
}

fn end_of_day(date: Date) -> Timestamp {
    Timestamp::from(date.midnight() + Duration::days(1) - Duration::nanoseconds(1))
}

/// Parse a `YYYY-MM-DD` string. Impossible dates (month 13, day 32) are
/// rejected rather than rolled over.
fn parse_calendar_date(value: &str) -> Option<Date> {
    let mut parts = value.trim().splitn(3, '-');
    let year = parts.next()?.parse::<i32>().ok()?;
    let month = parts.next()?.parse::<u8>().ok()?;
    let day = parts.next()?.parse::<u8>().ok()?;

    let month = Month::try_from(month).ok()?;
    Date::from_calendar_date(year, month, day).ok()
}
