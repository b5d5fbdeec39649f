//! Date/Week Navigator
//!
//! Date tag formatting and the Monday-first week strip shown above the menu.

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::MealDate;

/// Weekday abbreviations, Monday first
pub const WEEKDAYS: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Placeholder shown when there is no date to format
pub const NO_DATE_TAG: &str = "-";

/// Monday-first weekday index (0 = Monday .. 6 = Sunday)
pub fn weekday_index(date: NaiveDate) -> usize {
    date.weekday().num_days_from_monday() as usize
}

/// Format `YYYY.MM.DD (요일)`; the numbers are printed as received.
pub fn format_date_tag(date: Option<&MealDate>) -> String {
    let Some(info) = date else {
        return NO_DATE_TAG.to_string();
    };
    let Some(resolved) = info.to_naive() else {
        return NO_DATE_TAG.to_string();
    };

    format!(
        "{}.{:02}.{:02} ({})",
        info.year,
        info.month,
        info.day,
        WEEKDAYS[weekday_index(resolved)]
    )
}

/// One weekday button
#[derive(Debug, Clone, PartialEq)]
pub struct WeekSlot {
    /// Fixed offset from Monday (0..=6)
    pub offset: usize,
    /// Absolute date this button points at
    pub date: NaiveDate,
    /// Button text, e.g. "수 3"
    pub label: String,
    /// Signed day delta relative to the displayed date
    pub delta: i64,
    /// True for the displayed day
    pub active: bool,
}

/// Week strip computed around a displayed date
#[derive(Debug, Clone, PartialEq)]
pub struct WeekNav {
    pub slots: [WeekSlot; 7],
}

impl WeekNav {
    /// `None` when the week runs past the representable date range
    pub fn from_date(base: NaiveDate) -> Option<Self> {
        let monday = base.checked_sub_signed(Duration::days(weekday_index(base) as i64))?;
        // every slot lies between monday and sunday
        monday.checked_add_signed(Duration::days(6))?;
        let slots = std::array::from_fn(|offset| {
            let date = monday + Duration::days(offset as i64);
            let delta = (date - base).num_days();
            WeekSlot {
                offset,
                date,
                label: format!("{} {}", WEEKDAYS[offset], date.day()),
                delta,
                active: delta == 0,
            }
        });
        Some(Self { slots })
    }

    /// Day delta for the button at `offset`
    pub fn delta(&self, offset: usize) -> Option<i64> {
        self.slots.get(offset).map(|slot| slot.delta)
    }
}

/// Compute the week strip; `None` when there is no usable date
pub fn week_nav(date: Option<&MealDate>) -> Option<WeekNav> {
    date.and_then(MealDate::to_naive).and_then(WeekNav::from_date)
}
