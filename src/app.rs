//! Facility Dashboard App
//!
//! Alerts, sensors and inventory panels side by side.

use leptos::prelude::*;

use dashboard_core::DashboardConfig;

use crate::components::{AlertView, InventoryView, SensorStatusView, ToastStack};
use crate::context::DashboardContext;

/// Backend origin from `<meta name="api-base" content="...">`, if present
fn configured_api_base() -> String {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector("meta[name=api-base]").ok().flatten())
        .and_then(|meta| meta.get_attribute("content"))
        .unwrap_or_default()
}

#[component]
pub fn App() -> impl IntoView {
    let config = DashboardConfig::default().with_api_base(configured_api_base());
    provide_context(DashboardContext::new(config));

    view! {
        <div class="dashboard-layout">
            <header class="dashboard-header">
                <h1>"Facility Monitor"</h1>
            </header>

            <main class="dashboard-grid">
                <AlertView />
                <SensorStatusView />
                <InventoryView />
            </main>

            <ToastStack />
        </div>
    }
}
