//! UI Components
//!
//! Dashboard panels and shared widgets.

mod alert_view;
mod inventory_view;
mod sensor_status_view;
mod toast_stack;

pub use alert_view::AlertView;
pub use inventory_view::InventoryView;
pub use sensor_status_view::SensorStatusView;
pub use toast_stack::ToastStack;
