//! Meal Form Component
//!
//! `fmSeq` input with load, prev/next and "find next" controls.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::store::PageStateStoreFields;

/// Identifier input and single-step navigation
#[component]
pub fn MealForm() -> impl IntoView {
    let ctx = use_app_context();
    let state = ctx.state;

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        actions::submit(ctx);
    };

    view! {
        <form id="meal-form" class="meal-form" on:submit=on_submit>
            <div class="seq-row">
                <label for="fmSeq">"fmSeq"</label>
                <input
                    id="fmSeq"
                    type="text"
                    inputmode="numeric"
                    placeholder="급식 번호"
                    prop:value=move || state.seq_input().get()
                    on:input=move |ev| state.seq_input().set(event_target_value(&ev))
                />
                <button type="submit">"불러오기"</button>
            </div>

            <div class="step-row">
                <button id="prev-meal" type="button" on:click=move |_| actions::step_meal(ctx, -1)>
                    "◀ 이전"
                </button>
                <button id="next-meal" type="button" on:click=move |_| actions::step_meal(ctx, 1)>
                    "다음 ▶"
                </button>
                <button id="find-next" type="button" on:click=move |_| actions::find_next(ctx)>
                    "다음 급식 찾기"
                </button>
                <label class="agent-toggle">
                    <input
                        id="agent-toggle"
                        type="checkbox"
                        prop:checked=move || state.agent_mode().get()
                        on:change=move |ev| state.agent_mode().set(event_target_checked(&ev))
                    />
                    "에이전트 모드"
                </label>
            </div>
        </form>
    }
}
