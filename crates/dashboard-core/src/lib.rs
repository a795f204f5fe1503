//! Dashboard Core
//!
//! View state for the facility monitoring dashboard, kept free of any
//! browser dependency so it can be exercised natively.

pub mod alerts;
pub mod backend;
pub mod config;
pub mod error;
pub mod inventory;
pub mod models;
pub mod poll;
pub mod sensors;
mod timestamp;

pub use alerts::{AlertBoard, AlertPhase};
pub use backend::{endpoints, Backend, NoticeLevel, NotificationSink};
pub use config::DashboardConfig;
pub use error::{ApiError, ApiResult};
pub use inventory::{
    InventoryBoard, InventoryBody, ItemQuery, RequestGate, RequestTicket, SortField, SortOrder,
    SortState,
};
pub use models::{
    AlertRecord, InventoryItem, ItemStatus, Location, SensorKind, SensorStatus,
    SensorStatusSnapshot, Severity,
};
pub use poll::{cancellable_poll, CancelToken};
pub use sensors::{SensorBoard, SensorCard, SensorIcon};
