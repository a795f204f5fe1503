//! Dashboard Configuration

use std::time::Duration;

/// Fixed page size for inventory queries (no further pagination)
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Sensor status refresh period
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// How long a toast stays on screen
pub const DEFAULT_TOAST_LIFETIME: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    /// Origin of the REST backend. Empty means same origin as the page.
    pub api_base: String,
    pub page_size: u32,
    pub poll_interval: Duration,
    pub toast_lifetime: Duration,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            api_base: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            poll_interval: DEFAULT_POLL_INTERVAL,
            toast_lifetime: DEFAULT_TOAST_LIFETIME,
        }
    }
}

impl DashboardConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }
}
