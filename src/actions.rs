//! Page Actions
//!
//! Async glue between user events, the meal endpoint and the page store.
//! Each action runs on the local task queue; results are applied in a
//! single store update.

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::api::{find_next_meal, request_meal};
use crate::context::AppContext;

/// Load `seq` and render whatever comes back
pub fn fetch_meal(ctx: AppContext, seq: String) {
    ctx.state.update(|s| s.begin_fetch());
    spawn_local(async move {
        let source = ctx.source();
        let record = request_meal(&source, &seq).await;
        ctx.state.update(|s| s.render(record.as_ref()));
    });
}

/// Load whatever the identifier field holds
pub fn submit(ctx: AppContext) {
    if let Some(seq) = ctx.state.with_untracked(|s| s.submitted_seq()) {
        fetch_meal(ctx, seq);
    }
}

/// Move the identifier by `delta` and load it
pub fn step_meal(ctx: AppContext, delta: i64) {
    if let Some(seq) = ctx.state.try_update(|s| s.step(delta)) {
        fetch_meal(ctx, seq);
    }
}

/// Jump to the day behind a weekday button
pub fn select_weekday(ctx: AppContext, offset: usize) {
    if let Some(delta) = ctx.state.try_update(|s| s.weekday_delta(offset)).flatten() {
        step_meal(ctx, delta);
    }
}

/// Probe forward for the next identifier with a menu
pub fn find_next(ctx: AppContext) {
    let agent_limit = ctx.config().agent_probe_limit;
    let (start, limit) = ctx
        .state
        .with_untracked(|s| (s.current_seq(), s.probe_limit(agent_limit)));
    ctx.state.update(|s| s.begin_search());

    spawn_local(async move {
        let source = ctx.source();
        let outcome = find_next_meal(&source, start, limit).await;
        log::debug!("search from fmSeq {} finished after {} probe(s)", start, outcome.probes);
        ctx.state.update(|s| s.finish_search(outcome.found));
    });
}

/// Show a local preview of the picked photo; nothing is uploaded
pub fn preview_photo(ctx: AppContext, file: File) {
    match web_sys::Url::create_object_url_with_blob(&file) {
        Ok(url) => {
            log::debug!("photo preview for {}", file.name());
            if let Some(previous) = ctx.state.try_update(|s| s.replace_photo(url)).flatten() {
                if let Err(e) = web_sys::Url::revoke_object_url(&previous) {
                    log::debug!("revoking {} failed: {:?}", previous, e);
                }
            }
        }
        Err(e) => log::warn!("photo preview failed: {:?}", e),
    }
}
