//! Meal Card Component
//!
//! Date tag, dish list, metadata line and status text.

use leptos::prelude::*;

use crate::store::{use_page_store, PageStateStoreFields};

#[component]
pub fn MealCard() -> impl IntoView {
    let state = use_page_store();

    view! {
        <section class="meal-card">
            <p id="meal-date" class="meal-date">{move || state.date_tag().get()}</p>
            <ul id="meal-items" class="meal-items">
                {move || state.menu().with(|menu| menu.entries())
                    .into_iter()
                    .map(|item| view! { <li>{item}</li> })
                    .collect_view()}
            </ul>
            <p id="meal-meta" class="meal-meta">{move || state.meta().get()}</p>
            <p id="status" class="status">{move || state.status().get()}</p>
        </section>
    }
}
