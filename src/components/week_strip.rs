//! Week Strip Component
//!
//! Prev/next week buttons around the seven weekday buttons.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::store::PageStateStoreFields;
use crate::week::WEEKDAYS;

#[component]
pub fn WeekStrip() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    view! {
        <nav class="week-nav">
            <button id="prev-week" type="button" on:click=move |_| actions::step_meal(ctx, -7)>
                "«"
            </button>
            {(0..WEEKDAYS.len()).map(move |offset| {
                let label = move || {
                    state.week().with(|w| match w {
                        Some(nav) => nav.slots[offset].label.clone(),
                        None => WEEKDAYS[offset].to_string(),
                    })
                };
                let full_date = move || {
                    state.week().with(|w| w.as_ref().map(|nav| nav.slots[offset].date.to_string()))
                };
                let is_active = move || {
                    state.week().with(|w| w.as_ref().is_some_and(|nav| nav.slots[offset].active))
                };
                view! {
                    <button
                        type="button"
                        class=move || if is_active() { "weekday active" } else { "weekday" }
                        data-weekday=offset.to_string()
                        title=full_date
                        on:click=move |_| actions::select_weekday(ctx, offset)
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
            <button id="next-week" type="button" on:click=move |_| actions::step_meal(ctx, 7)>
                "»"
            </button>
        </nav>
    }
}
