//! Alert Board
//!
//! Active alert list with optimistic removal on resolve.

use std::collections::BTreeSet;

use crate::backend::{NoticeLevel, NotificationSink};
use crate::error::ApiResult;
use crate::models::AlertRecord;

pub const MSG_LOAD_FAILED: &str = "Could not load alerts";
pub const MSG_RESOLVED: &str = "Alert resolved";
pub const MSG_RESOLVE_FAILED: &str = "Could not resolve alert";

/// What the alert panel should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertPhase {
    Loading,
    Empty,
    Populated,
}

#[derive(Debug, Clone, Default)]
pub struct AlertBoard {
    loaded: bool,
    alerts: Vec<AlertRecord>,
    /// Ids with a resolve request in flight (display only, not a lock)
    resolving: BTreeSet<u32>,
}

impl AlertBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> AlertPhase {
        if !self.loaded {
            AlertPhase::Loading
        } else if self.alerts.is_empty() {
            AlertPhase::Empty
        } else {
            AlertPhase::Populated
        }
    }

    pub fn alerts(&self) -> &[AlertRecord] {
        &self.alerts
    }

    pub fn is_resolving(&self, id: u32) -> bool {
        self.resolving.contains(&id)
    }

    /// Replace the list on success; keep whatever was shown on failure.
    pub fn apply_load(&mut self, result: ApiResult<Vec<AlertRecord>>, sink: &dyn NotificationSink) {
        match result {
            Ok(mut alerts) => {
                alerts.retain(|a| !a.resolved);
                log::debug!("[ALERTS] Loaded {} active alerts", alerts.len());
                self.alerts = alerts;
            }
            Err(e) => {
                log::error!("[ALERTS] Failed to fetch alerts: {}", e);
                sink.notify(NoticeLevel::Error, MSG_LOAD_FAILED);
            }
        }
        self.loaded = true;
    }

    pub fn begin_resolve(&mut self, id: u32) {
        self.resolving.insert(id);
    }

    /// Drop the alert locally on success, no refetch.
    pub fn apply_resolve(
        &mut self,
        id: u32,
        result: ApiResult<AlertRecord>,
        sink: &dyn NotificationSink,
    ) {
        self.resolving.remove(&id);
        match result {
            Ok(_) => {
                self.alerts.retain(|a| a.id != id);
                sink.notify(NoticeLevel::Success, MSG_RESOLVED);
            }
            Err(e) => {
                log::error!("[ALERTS] Failed to resolve alert {}: {}", id, e);
                sink.notify(NoticeLevel::Error, MSG_RESOLVE_FAILED);
            }
        }
    }
}
