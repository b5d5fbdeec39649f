//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpMealSource;
use crate::config::AppConfig;
use crate::store::PageStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Page state
    pub state: PageStore,
    /// Loaded configuration
    config: StoredValue<AppConfig>,
    /// Meal endpoint client
    source: StoredValue<HttpMealSource, LocalStorage>,
}

impl AppContext {
    pub fn new(state: PageStore, config: AppConfig) -> Self {
        let source = HttpMealSource::new(config.api_url.clone());
        Self {
            state,
            config: StoredValue::new(config),
            source: StoredValue::new_local(source),
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn source(&self) -> HttpMealSource {
        self.source.get_value()
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
