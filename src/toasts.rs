//! Toast Notifications
//!
//! `NotificationSink` backed by a signal list; each toast expires on a timer.

use std::time::Duration;

use leptos::prelude::*;

use dashboard_core::{NoticeLevel, NotificationSink};

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

impl Toast {
    pub fn class(&self) -> &'static str {
        match self.level {
            NoticeLevel::Success => "toast toast-success",
            NoticeLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Copy)]
pub struct Toasts {
    entries: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
    lifetime: Duration,
}

impl Toasts {
    pub fn new(lifetime: Duration) -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
            lifetime,
        }
    }

    /// Visible toasts, oldest first (tracked)
    pub fn entries(&self) -> Vec<Toast> {
        self.entries.get()
    }

    pub fn dismiss(&self, id: u64) {
        self.entries.try_update(|list| list.retain(|t| t.id != id));
    }
}

impl NotificationSink for Toasts {
    fn notify(&self, level: NoticeLevel, message: &str) {
        let mut id = 0;
        self.next_id.update_value(|n| {
            *n += 1;
            id = *n;
        });

        match level {
            NoticeLevel::Success => log::info!("[TOAST] {}", message),
            NoticeLevel::Error => log::warn!("[TOAST] {}", message),
        }
        self.entries.update(|list| {
            list.push(Toast {
                id,
                level,
                message: message.to_string(),
            })
        });

        let toasts = *self;
        set_timeout(move || toasts.dismiss(id), self.lifetime);
    }
}
