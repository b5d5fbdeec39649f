//! UI Components
//!
//! Leptos components for the meal page.

mod meal_form;
mod week_strip;
mod meal_card;
mod photo_picker;

pub use meal_form::MealForm;
pub use week_strip::WeekStrip;
pub use meal_card::MealCard;
pub use photo_picker::PhotoPicker;
