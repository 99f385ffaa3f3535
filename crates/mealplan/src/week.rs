use std::fmt;

use mealgrid_shared::mealplan::Day;
use serde::Serialize;
use time::{
    Date, Duration, OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description,
};
use time_tz::{ToTimezone, timezones};

const LABEL_FORMAT: &[BorrowedFormatItem<'_>] =
    format_description!("[month repr:short] [day padding:none]");

const DATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[year]-[month]-[day]");

/// The Monday to Sunday range displayed by the planner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WeekWindow {
    start: Date,
    end: Date,
}

impl WeekWindow {
    /// Returns the week holding `reference`, starting on the Monday on or
    /// before it. A Sunday belongs to the week that started six days earlier.
    pub fn containing(reference: Date) -> mealgrid_shared::Result<Self> {
        let days_since_monday = reference.weekday().number_days_from_monday();

        let Some(start) = reference.checked_sub(Duration::days(days_since_monday.into())) else {
            mealgrid_shared::user!("{reference} is outside the supported calendar range");
        };

        let Some(end) = start.checked_add(Duration::days(6)) else {
            mealgrid_shared::user!("{reference} is outside the supported calendar range");
        };

        Ok(Self { start, end })
    }

    pub fn start(&self) -> Date {
        self.start
    }

    pub fn end(&self) -> Date {
        self.end
    }

    pub fn next(&self) -> mealgrid_shared::Result<Self> {
        self.shift(Duration::weeks(1))
    }

    pub fn prev(&self) -> mealgrid_shared::Result<Self> {
        self.shift(Duration::weeks(-1))
    }

    fn shift(&self, by: Duration) -> mealgrid_shared::Result<Self> {
        let Some(reference) = self.start.checked_add(by) else {
            mealgrid_shared::user!("no week beyond {}", self.start);
        };

        Self::containing(reference)
    }

    pub fn date(&self, day: Day) -> Date {
        // end = start + 6 is checked at construction, so no day can overflow
        self.start + Duration::days(day.index() as i64)
    }

    /// Calendar day of month shown in the column header.
    pub fn day_of_month(&self, day: Day) -> u8 {
        self.date(day).day()
    }

    pub fn days(&self) -> impl Iterator<Item = (Day, Date)> + '_ {
        Day::ALL.into_iter().map(|day| (day, self.date(day)))
    }

    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Range label such as `May 12 - May 18`. Both month names are always
    /// printed, even when they are equal.
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WeekWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start.format(LABEL_FORMAT).map_err(|_| fmt::Error)?;
        let end = self.end.format(LABEL_FORMAT).map_err(|_| fmt::Error)?;

        write!(f, "{start} - {end}")
    }
}

/// Parses a `YYYY-MM-DD` reference date.
pub fn parse_date(value: &str) -> mealgrid_shared::Result<Date> {
    match Date::parse(value.trim(), DATE_FORMAT) {
        Ok(date) => Ok(date),
        Err(e) => mealgrid_shared::user!("invalid date '{value}': {e}"),
    }
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}

/// Current calendar date in the given IANA timezone, UTC when unknown.
pub fn today(tz: impl AsRef<str>) -> Date {
    let mut now = OffsetDateTime::now_utc();

    if let Some(tz) = timezones::get_by_name(tz.as_ref()) {
        now = now.to_timezone(tz);
    }

    now.date()
}
