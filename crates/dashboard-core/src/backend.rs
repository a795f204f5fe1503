//! Backend Collaborators
//!
//! The REST backend and the notification sink, as seen by the views.
//! Implementations can use the browser fetch API, in-memory fakes, etc.

use async_trait::async_trait;

use crate::error::ApiResult;
use crate::inventory::ItemQuery;
use crate::models::{AlertRecord, InventoryItem, SensorStatusSnapshot};

/// REST paths, relative to the backend origin
pub mod endpoints {
    pub const ALERTS: &str = "/api/alerts/";
    pub const ITEMS: &str = "/api/items/";
    pub const SENSOR_STATUS: &str = "/api/sensors/status/";

    pub fn resolve_alert(id: u32) -> String {
        format!("/api/alerts/{id}/resolve")
    }
}

/// Remote data source for all three views.
///
/// Futures are `?Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait Backend {
    /// `GET /api/alerts/?status=active`
    async fn active_alerts(&self) -> ApiResult<Vec<AlertRecord>>;

    /// `POST /api/alerts/{id}/resolve`
    async fn resolve_alert(&self, id: u32) -> ApiResult<AlertRecord>;

    /// `GET /api/items/?q=&sort=&order=&limit=&offset=`
    async fn items(&self, query: &ItemQuery) -> ApiResult<Vec<InventoryItem>>;

    /// `GET /api/sensors/status/`
    async fn sensor_statuses(&self) -> ApiResult<Vec<SensorStatusSnapshot>>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Transient user-facing messages. Fire and forget.
pub trait NotificationSink {
    fn notify(&self, level: NoticeLevel, message: &str);
}

#[cfg(test)]
pub(crate) mod fake {
    use std::cell::{Cell, RefCell};
    use std::collections::HashSet;

    use super::*;
    use crate::error::ApiError;

    fn server_error(path: String) -> ApiError {
        ApiError::Status { status: 500, url: path }
    }

    /// In-memory backend recording every call
    #[derive(Default)]
    pub struct FakeBackend {
        pub alerts: RefCell<Vec<AlertRecord>>,
        pub items: RefCell<Vec<InventoryItem>>,
        pub sensors: RefCell<Vec<SensorStatusSnapshot>>,
        pub failing: Cell<bool>,
        pub unresolvable: RefCell<HashSet<u32>>,
        pub item_queries: RefCell<Vec<ItemQuery>>,
        pub sensor_calls: Cell<usize>,
    }

    #[async_trait(?Send)]
    impl Backend for FakeBackend {
        async fn active_alerts(&self) -> ApiResult<Vec<AlertRecord>> {
            if self.failing.get() {
                return Err(server_error(endpoints::ALERTS.to_string()));
            }
            Ok(self.alerts.borrow().iter().filter(|a| !a.resolved).cloned().collect())
        }

        async fn resolve_alert(&self, id: u32) -> ApiResult<AlertRecord> {
            if self.failing.get() || self.unresolvable.borrow().contains(&id) {
                return Err(server_error(endpoints::resolve_alert(id)));
            }
            let mut alerts = self.alerts.borrow_mut();
            let alert = alerts
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or_else(|| ApiError::Status { status: 404, url: endpoints::resolve_alert(id) })?;
            alert.resolved = true;
            Ok(alert.clone())
        }

        async fn items(&self, query: &ItemQuery) -> ApiResult<Vec<InventoryItem>> {
            self.item_queries.borrow_mut().push(query.clone());
            if self.failing.get() {
                return Err(server_error(endpoints::ITEMS.to_string()));
            }
            Ok(self.items.borrow().clone())
        }

        async fn sensor_statuses(&self) -> ApiResult<Vec<SensorStatusSnapshot>> {
            self.sensor_calls.set(self.sensor_calls.get() + 1);
            if self.failing.get() {
                return Err(ApiError::Transport("connection refused".to_string()));
            }
            Ok(self.sensors.borrow().clone())
        }
    }

    /// Sink that keeps every notice
    #[derive(Default)]
    pub struct RecordingSink {
        pub notices: RefCell<Vec<(NoticeLevel, String)>>,
    }

    impl RecordingSink {
        pub fn count(&self, level: NoticeLevel) -> usize {
            self.notices.borrow().iter().filter(|(l, _)| *l == level).count()
        }
    }

    impl NotificationSink for RecordingSink {
        fn notify(&self, level: NoticeLevel, message: &str) {
            self.notices.borrow_mut().push((level, message.to_string()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_path() {
        assert_eq!(endpoints::resolve_alert(42), "/api/alerts/42/resolve");
    }
}
