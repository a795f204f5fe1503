//! Dashboard Models
//!
//! Read-only view models mirroring backend responses.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::timestamp;

// ========================
// Alerts
// ========================

/// Alert severity. Tokens outside the known set are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Info,
    Warning,
    Critical,
    Other(String),
}

impl Severity {
    pub fn label(&self) -> &str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
            Severity::Other(raw) => raw,
        }
    }

    /// CSS class for the severity cell
    pub fn style_class(&self) -> &'static str {
        match self {
            Severity::Info => "severity-info",
            Severity::Warning => "severity-warning",
            Severity::Critical => "severity-critical",
            Severity::Other(_) => "severity-unknown",
        }
    }
}

impl From<String> for Severity {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "info" => Severity::Info,
            "warning" => Severity::Warning,
            "critical" => Severity::Critical,
            _ => Severity::Other(raw),
        }
    }
}

impl From<Severity> for String {
    fn from(severity: Severity) -> Self {
        severity.label().to_string()
    }
}

/// Alert data structure (matches backend `AlertResponse`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: u32,
    pub category: String,
    #[serde(default)]
    pub related_item_id: Option<u32>,
    #[serde(default)]
    pub sensor_id: Option<u32>,
    #[serde(deserialize_with = "timestamp::required")]
    pub timestamp: NaiveDateTime,
    pub message: String,
    pub severity: Severity,
    pub resolved: bool,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub resolved_at: Option<NaiveDateTime>,
}

impl AlertRecord {
    pub fn time_label(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

// ========================
// Inventory
// ========================

/// Item lifecycle status. Tokens are underscore separated (`in_stock`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemStatus {
    Active,
    InStock,
    InTransit,
    Expired,
    Removed,
    Other(String),
}

impl ItemStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ItemStatus::Active => "active",
            ItemStatus::InStock => "in_stock",
            ItemStatus::InTransit => "in_transit",
            ItemStatus::Expired => "expired",
            ItemStatus::Removed => "removed",
            ItemStatus::Other(raw) => raw,
        }
    }

    /// Display text: underscores become spaces
    pub fn label(&self) -> String {
        self.as_str().replace('_', " ")
    }
}

impl From<String> for ItemStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "active" => ItemStatus::Active,
            "in_stock" => ItemStatus::InStock,
            "in_transit" => ItemStatus::InTransit,
            "expired" => ItemStatus::Expired,
            "removed" => ItemStatus::Removed,
            _ => ItemStatus::Other(raw),
        }
    }
}

impl From<ItemStatus> for String {
    fn from(status: ItemStatus) -> Self {
        status.as_str().to_string()
    }
}

/// Location snapshot embedded in each item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
}

/// Inventory item (matches backend `ItemResponse`, events ignored)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: u32,
    pub nfc_tag: String,
    pub name: String,
    pub batch: String,
    pub expiry_date: NaiveDate,
    pub status: ItemStatus,
    pub location: Location,
}

impl InventoryItem {
    pub fn expiry_label(&self) -> String {
        self.expiry_date.format("%Y-%m-%d").to_string()
    }
}

// ========================
// Sensors
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    Temperature,
    Humidity,
    Power,
    Door,
    #[serde(other)]
    Unrecognized,
}

/// Backend-computed health. Unknown tokens are treated as offline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorStatus {
    Ok,
    Warning,
    Danger,
    #[serde(other)]
    Offline,
}

/// Point-in-time sensor read (matches backend `SensorStatusItem`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorStatusSnapshot {
    #[serde(rename = "sensor_id")]
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SensorKind,
    #[serde(default, deserialize_with = "timestamp::optional")]
    pub last_ping: Option<NaiveDateTime>,
    #[serde(default)]
    pub value: Option<f64>,
    #[serde(default)]
    pub threshold_min: Option<f64>,
    #[serde(default)]
    pub threshold_max: Option<f64>,
    pub status: SensorStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_alert_from_backend_json() {
        let alert: AlertRecord = serde_json::from_value(json!({
            "id": 7,
            "category": "sensor",
            "related_item_id": null,
            "sensor_id": 3,
            "timestamp": "2024-05-01T08:30:00.123456",
            "message": "Fridge 2 above threshold",
            "severity": "critical",
            "resolved": false,
            "resolved_at": null
        }))
        .unwrap();

        assert_eq!(alert.id, 7);
        assert_eq!(alert.sensor_id, Some(3));
        assert_eq!(alert.severity, Severity::Critical);
        assert!(alert.resolved_at.is_none());
        assert_eq!(alert.time_label(), "2024-05-01 08:30:00");
    }

    #[test]
    fn test_unknown_severity_keeps_raw_token() {
        let severity: Severity = serde_json::from_value(json!("emergency")).unwrap();
        assert_eq!(severity, Severity::Other("emergency".to_string()));
        assert_eq!(severity.label(), "emergency");
        assert_eq!(severity.style_class(), "severity-unknown");
        assert_eq!(serde_json::to_value(&severity).unwrap(), json!("emergency"));
    }

    #[test]
    fn test_item_status_tokens() {
        let status: ItemStatus = serde_json::from_value(json!("in_transit")).unwrap();
        assert_eq!(status, ItemStatus::InTransit);
        assert_eq!(status.label(), "in transit");

        let other: ItemStatus = serde_json::from_value(json!("on_hold_for_qa")).unwrap();
        assert_eq!(other, ItemStatus::Other("on_hold_for_qa".to_string()));
        assert_eq!(other.label(), "on hold for qa");
        assert_eq!(serde_json::to_value(&other).unwrap(), json!("on_hold_for_qa"));
    }

    #[test]
    fn test_item_ignores_events() {
        let item: InventoryItem = serde_json::from_value(json!({
            "id": 1,
            "nfc_tag": "04:A2:19",
            "name": "Insulin",
            "batch": "B-22",
            "expiry_date": "2025-01-31",
            "status": "in_stock",
            "location": { "id": 2, "name": "Pharmacy" },
            "events": []
        }))
        .unwrap();

        assert_eq!(item.location.name, "Pharmacy");
        assert!(item.location.address.is_none());
        assert_eq!(item.expiry_label(), "2025-01-31");
    }

    #[test]
    fn test_sensor_unknown_kind_and_status() {
        let sensor: SensorStatusSnapshot = serde_json::from_value(json!({
            "sensor_id": 9,
            "name": "Gauge",
            "type": "gauge-unknown",
            "last_ping": null,
            "value": 5,
            "threshold_min": null,
            "threshold_max": null,
            "status": "rebooting"
        }))
        .unwrap();

        assert_eq!(sensor.kind, SensorKind::Unrecognized);
        assert_eq!(sensor.status, SensorStatus::Offline);
        assert_eq!(sensor.value, Some(5.0));
    }
}
