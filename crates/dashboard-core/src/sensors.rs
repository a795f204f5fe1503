//! Sensor Board
//!
//! Latest sensor snapshots plus the pure rendering rules for one card.

use chrono::NaiveDateTime;

use crate::error::ApiResult;
use crate::models::{SensorKind, SensorStatus, SensorStatusSnapshot};

pub const NO_DATA: &str = "No data";
pub const NO_PING: &str = "—";

/// Card icon. `WifiOff` doubles as the fallback for unknown kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SensorIcon {
    Thermometer,
    Droplet,
    Zap,
    DoorOpen,
    WifiOff,
}

impl SensorIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            SensorIcon::Thermometer => "🌡",
            SensorIcon::Droplet => "💧",
            SensorIcon::Zap => "⚡",
            SensorIcon::DoorOpen => "🚪",
            SensorIcon::WifiOff => "📴",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SensorIcon::Thermometer => "thermometer",
            SensorIcon::Droplet => "droplet",
            SensorIcon::Zap => "zap",
            SensorIcon::DoorOpen => "door-open",
            SensorIcon::WifiOff => "wifi-off",
        }
    }
}

impl SensorKind {
    pub fn icon(self) -> SensorIcon {
        match self {
            SensorKind::Temperature => SensorIcon::Thermometer,
            SensorKind::Humidity => SensorIcon::Droplet,
            SensorKind::Power => SensorIcon::Zap,
            SensorKind::Door => SensorIcon::DoorOpen,
            SensorKind::Unrecognized => SensorIcon::WifiOff,
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            SensorKind::Temperature => "°C",
            SensorKind::Humidity => "%",
            SensorKind::Power | SensorKind::Door | SensorKind::Unrecognized => "",
        }
    }
}

impl SensorStatus {
    pub fn style_class(self) -> &'static str {
        match self {
            SensorStatus::Ok => "status-ok",
            SensorStatus::Warning => "status-warning",
            SensorStatus::Danger => "status-danger",
            SensorStatus::Offline => "status-offline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SensorStatus::Ok => "OK",
            SensorStatus::Warning => "WARNING",
            SensorStatus::Danger => "DANGER",
            SensorStatus::Offline => "OFFLINE",
        }
    }
}

fn format_reading(value: Option<f64>, kind: SensorKind) -> String {
    match value {
        Some(v) => match kind.unit() {
            "" => v.to_string(),
            unit => format!("{} {}", v, unit),
        },
        None => NO_DATA.to_string(),
    }
}

fn format_ping(last_ping: Option<NaiveDateTime>) -> String {
    match last_ping {
        Some(ts) => ts.format("%H:%M:%S").to_string(),
        None => NO_PING.to_string(),
    }
}

/// Everything one sensor card displays
#[derive(Debug, Clone, PartialEq)]
pub struct SensorCard {
    pub id: u32,
    pub name: String,
    pub icon: SensorIcon,
    pub reading: String,
    pub last_ping: String,
    pub status: SensorStatus,
}

impl SensorCard {
    pub fn from_snapshot(snapshot: &SensorStatusSnapshot) -> Self {
        Self {
            id: snapshot.id,
            name: snapshot.name.clone(),
            icon: snapshot.kind.icon(),
            reading: format_reading(snapshot.value, snapshot.kind),
            last_ping: format_ping(snapshot.last_ping),
            status: snapshot.status,
        }
    }

    pub fn style_class(&self) -> &'static str {
        self.status.style_class()
    }
}

#[derive(Debug, Clone, Default)]
pub struct SensorBoard {
    loaded: bool,
    sensors: Vec<SensorStatusSnapshot>,
}

impl SensorBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Failures keep the stale snapshot on screen.
    pub fn apply_load(&mut self, result: ApiResult<Vec<SensorStatusSnapshot>>) {
        match result {
            Ok(sensors) => {
                log::debug!("[SENSORS] Loaded {} sensor snapshots", sensors.len());
                self.sensors = sensors;
            }
            Err(e) => log::error!("[SENSORS] Failed to fetch sensor status: {}", e),
        }
        self.loaded = true;
    }

    pub fn is_loading(&self) -> bool {
        !self.loaded
    }

    #[cfg(test)]
    pub(crate) fn sensors(&self) -> &[SensorStatusSnapshot] {
        &self.sensors
    }

    pub fn cards(&self) -> Vec<SensorCard> {
        self.sensors.iter().map(SensorCard::from_snapshot).collect()
    }
}
