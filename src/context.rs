//! Application Context
//!
//! Shared config, backend and toasts provided via Leptos Context API.

use leptos::prelude::*;

use dashboard_core::DashboardConfig;

use crate::api::HttpBackend;
use crate::toasts::Toasts;

#[derive(Clone, Copy)]
pub struct DashboardContext {
    config: StoredValue<DashboardConfig>,
    /// reqwest's wasm client stays on the main thread
    backend: StoredValue<HttpBackend, LocalStorage>,
    pub toasts: Toasts,
}

impl DashboardContext {
    pub fn new(config: DashboardConfig) -> Self {
        let backend = HttpBackend::new(&config.api_base);
        let toasts = Toasts::new(config.toast_lifetime);
        Self {
            config: StoredValue::new(config),
            backend: StoredValue::new_local(backend),
            toasts,
        }
    }

    pub fn config(&self) -> DashboardConfig {
        self.config.get_value()
    }

    pub fn backend(&self) -> HttpBackend {
        self.backend.get_value()
    }
}

pub fn use_dashboard() -> DashboardContext {
    use_context::<DashboardContext>().expect("DashboardContext should be provided")
}
