//! Photo Picker Component
//!
//! Local-only preview of a meal photo.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::store::PageState;

#[component]
pub fn PhotoPicker() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;
    let fallback = ctx.config().fallback_photo;

    let on_change = move |ev: web_sys::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            actions::preview_photo(ctx, file);
        }
    };

    view! {
        <figure class="meal-photo">
            <img
                id="meal-photo"
                src=move || state.with(|s: &PageState| s.photo_src(&fallback))
                alt=move || state.with(|s: &PageState| s.photo_alt())
            />
            <input id="photo-input" type="file" accept="image/*" on:change=on_change />
        </figure>
    }
}
