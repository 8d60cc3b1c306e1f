//! Month grid and two-click date range selection used by the leave calendar.
//!
//! Everything here is a plain value transition: the component owns a
//! [`CalendarState`], feeds it [`CalendarEvent`]s and re-renders from
//! [`CalendarState::grid`].

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

use crate::utils::time::format_iso_date;

/// 6 rows x 7 columns.
pub const GRID_CELLS: usize = 42;

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalendarError {
    #[error("month index {0} is outside 0..=11")]
    InvalidMonth(u32),
    #[error("year {0} cannot be represented")]
    InvalidYear(i32),
}

/// A displayed month, with a zero-based month index like `Datelike::month0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    year: i32,
    month0: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month0: u32) -> Result<Self, CalendarError> {
        if month0 > 11 {
            return Err(CalendarError::InvalidMonth(month0));
        }
        // Both the month and the one after it must exist for grid padding.
        NaiveDate::from_ymd_opt(year, month0 + 1, 1)
            .and_then(|_| NaiveDate::from_ymd_opt(year + 1, 1, 1))
            .ok_or(CalendarError::InvalidYear(year))?;
        Ok(Self { year, month0 })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month0: date.month0(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize]
    }

    pub fn first_day(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1)
    }

    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day)
    }

    /// Day count from date arithmetic (first of next month minus one day), so
    /// leap years come out right without a table.
    pub fn days_in_month(&self) -> u32 {
        let (next_year, next_month) = if self.month0 == 11 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month0 + 2)
        };
        NaiveDate::from_ymd_opt(next_year, next_month, 1)
            .and_then(|first_of_next| first_of_next.pred_opt())
            .map(|last| last.day())
            .unwrap_or(28)
    }

    /// 0 = Sunday.
    pub fn leading_weekday(&self) -> u32 {
        self.first_day()
            .map(|date| date.weekday().num_days_from_sunday())
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarDay {
    pub day_number: u32,
    pub date: NaiveDate,
    pub belongs_to_displayed_month: bool,
    pub is_past: bool,
    pub is_today: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
    pub is_in_range: bool,
}

impl CalendarDay {
    fn placeholder(date: NaiveDate) -> Self {
        Self {
            day_number: date.day(),
            date,
            belongs_to_displayed_month: false,
            is_past: true,
            is_today: false,
            is_range_start: false,
            is_range_end: false,
            is_in_range: false,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.belongs_to_displayed_month && !self.is_past && !self.is_today
    }

    /// Inside the range but not one of its endpoints.
    pub fn is_range_interior(&self) -> bool {
        self.is_in_range && !self.is_range_start && !self.is_range_end
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn start_iso(&self) -> String {
        format_iso_date(self.start)
    }

    pub fn end_iso(&self) -> String {
        format_iso_date(self.end)
    }

    /// Inclusive day count.
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarEvent {
    DayClicked(CalendarDay),
    NextMonth,
    PreviousMonth,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub state: CalendarState,
    /// Set only when this event completed a range.
    pub completed: Option<DateRange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarState {
    today: NaiveDate,
    displayed: MonthCursor,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl CalendarState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            today,
            displayed: MonthCursor::containing(today),
            start: None,
            end: None,
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn displayed(&self) -> MonthCursor {
        self.displayed
    }

    pub fn displayed_month0(&self) -> u32 {
        self.displayed.month0
    }

    pub fn displayed_year(&self) -> i32 {
        self.displayed.year
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn selected_range(&self) -> Option<DateRange> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => Some(DateRange { start, end }),
            _ => None,
        }
    }

    /// The finalize action is offered only for a complete range.
    pub fn can_finalize(&self) -> bool {
        self.end.is_some()
    }

    pub fn is_displaying_today_month(&self) -> bool {
        self.displayed == MonthCursor::containing(self.today)
    }

    pub fn can_go_previous(&self) -> bool {
        self.displayed.month0 > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.displayed.month0 < 11
    }

    pub fn apply(self, event: CalendarEvent) -> Transition {
        match event {
            CalendarEvent::DayClicked(day) => self.click(day),
            CalendarEvent::NextMonth => Transition {
                state: self.next_month(),
                completed: None,
            },
            CalendarEvent::PreviousMonth => Transition {
                state: self.previous_month(),
                completed: None,
            },
        }
    }

    /// Navigation stays within the year containing "today" and keeps the
    /// selection as is.
    pub fn next_month(self) -> Self {
        if !self.can_go_next() {
            return self;
        }
        let month0 = self.displayed.month0 + 1;
        self.show_month(month0)
    }

    pub fn previous_month(self) -> Self {
        if !self.can_go_previous() {
            return self;
        }
        let month0 = self.displayed.month0 - 1;
        self.show_month(month0)
    }

    fn show_month(mut self, month0: u32) -> Self {
        match MonthCursor::new(self.displayed.year, month0) {
            Ok(cursor) => self.displayed = cursor,
            Err(err) => log::warn!("month navigation ignored: {}", err),
        }
        self
    }

    pub fn click(mut self, day: CalendarDay) -> Transition {
        if !day.is_selectable() {
            return Transition {
                state: self,
                completed: None,
            };
        }
        let clicked = day.date;

        let start = match (self.start, self.end) {
            (Some(start), None) => start,
            _ => {
                self.start = Some(clicked);
                self.end = None;
                log::debug!("start date set: {}", format_iso_date(clicked));
                return Transition {
                    state: self,
                    completed: None,
                };
            }
        };

        if clicked < start {
            self.start = Some(clicked);
            self.end = Some(start);
            log::debug!(
                "dates swapped: start={} end={}",
                format_iso_date(clicked),
                format_iso_date(start)
            );
        } else {
            self.end = Some(clicked);
            log::debug!("end date set: {}", format_iso_date(clicked));
        }

        let completed = self.selected_range();
        if let Some(range) = completed {
            log::debug!(
                "date range selected: start={} end={}",
                range.start_iso(),
                range.end_iso()
            );
        }
        Transition {
            state: self,
            completed,
        }
    }

    pub fn grid(&self) -> Vec<CalendarDay> {
        build_grid(self.displayed, self.today, self.start, self.end)
    }
}

pub fn build_grid(
    month: MonthCursor,
    today: NaiveDate,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
) -> Vec<CalendarDay> {
    let mut days = Vec::with_capacity(GRID_CELLS);
    let Some(first) = month.first_day() else {
        return days;
    };

    let lead_in = month.leading_weekday() as u64;
    let mut lead_date = first.checked_sub_days(chrono::Days::new(lead_in));
    for _ in 0..lead_in {
        if let Some(date) = lead_date {
            days.push(CalendarDay::placeholder(date));
            lead_date = date.succ_opt();
        }
    }

    for day_number in 1..=month.days_in_month() {
        let Some(date) = month.date_of(day_number) else {
            continue;
        };
        let (is_range_start, is_range_end, is_in_range) = match (start, end) {
            (Some(s), Some(e)) => (date == s, date == e, date >= s.min(e) && date <= s.max(e)),
            _ => (Some(date) == start, Some(date) == end, false),
        };
        days.push(CalendarDay {
            day_number,
            date,
            belongs_to_displayed_month: true,
            is_past: date < today,
            is_today: date == today,
            is_range_start,
            is_range_end,
            is_in_range,
        });
    }

    let mut trailing = month
        .date_of(month.days_in_month())
        .and_then(|last| last.succ_opt());
    while days.len() < GRID_CELLS {
        match trailing {
            Some(date) => {
                days.push(CalendarDay::placeholder(date));
                trailing = date.succ_opt();
            }
            None => break,
        }
    }

    days
}
