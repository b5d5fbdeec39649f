//! Meal Board App
//!
//! Root component: provides the store and context, then loads the initial meal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::actions;
use crate::components::{MealCard, MealForm, PhotoPicker, WeekStrip};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::store::PageState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let initial_seq = config.initial_seq.clone();
    let state = Store::new(PageState::new(initial_seq.clone()));
    let ctx = AppContext::new(state, config);

    // Provide context to all children
    provide_context(state);
    provide_context(ctx);

    // Initial load
    match initial_seq {
        Some(seq) => {
            log::info!("initial load of fmSeq {}", seq);
            actions::fetch_meal(ctx, seq);
        }
        None => log::info!("no fmSeq in the page URL, waiting for input"),
    }

    view! {
        <main class="meal-board">
            <h1>"오늘의 급식"</h1>
            <MealForm />
            <WeekStrip />
            <MealCard />
            <PhotoPicker />
        </main>
    }
}
