//! Meal Models
//!
//! Wire shapes returned by the meal endpoint and the canonical record the
//! rest of the page works with.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Calendar date as sent in `fmDt.date`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDate {
    pub year: i32,
    pub month: i32,
    pub day: i32,
}

impl MealDate {
    /// Resolve to a real date; out-of-range months and days roll over.
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let month0 = self.month.checked_sub(1)?;
        let year = self.year.checked_add(month0.div_euclid(12))?;
        let month = month0.rem_euclid(12) as u32 + 1;
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        first.checked_add_signed(Duration::days(i64::from(self.day) - 1))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct FmDt {
    date: Option<MealDate>,
}

/// Fields that may appear both at the top level and under `food`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MealFields {
    fm_seq: Option<Value>,
    fm_cn: Option<String>,
    fm_title: Option<String>,
    fm_dt: Option<FmDt>,
}

/// Raw response body of `selectFoodData.do`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MealResponse {
    #[serde(flatten)]
    top: MealFields,
    food: Option<MealFields>,
}

/// Canonical meal record
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MealRecord {
    /// `fmSeq` as display text
    pub seq: Option<String>,
    /// Raw menu text, possibly garbled
    pub content: Option<String>,
    pub title: Option<String>,
    pub date: Option<MealDate>,
}

impl MealResponse {
    /// Collapse the top-level and `food.*` shapes; top-level wins when present.
    pub fn normalize(self) -> MealRecord {
        let food = self.food.unwrap_or_default();
        let top = self.top;

        MealRecord {
            seq: seq_text(top.fm_seq).or_else(|| seq_text(food.fm_seq)),
            content: non_empty(top.fm_cn).or_else(|| non_empty(food.fm_cn)),
            title: non_empty(top.fm_title).or_else(|| non_empty(food.fm_title)),
            date: top
                .fm_dt
                .and_then(|dt| dt.date)
                .or_else(|| food.fm_dt.and_then(|dt| dt.date)),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.is_empty())
}

/// Display text for an `fmSeq` value; falsy values (null, 0, "") count as absent
fn seq_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) if !s.is_empty() => Some(s),
        Value::Number(n) if n.as_f64() != Some(0.0) => n
            .as_i64()
            .map(|i| i.to_string())
            .or_else(|| n.as_u64().map(|u| u.to_string()))
            .or_else(|| n.as_f64().map(|f| f.to_string())),
        _ => None,
    }
}
