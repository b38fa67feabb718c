//! Wire types shared between the web client and the server side.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the device catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceSummary {
    pub id: i64,
    pub name: String,
}

/// A player slot on a device. `place` is unique within a device and acts
/// as the key; `balances` is the wire name for the amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub device_id: i64,
    pub place: u32,
    pub currency: String,
    pub balances: f64,
}

/// Full device detail as returned by the detail fetch. Replaced wholesale
/// on every fetch; `places` is ordered by place number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Device {
    pub id: i64,
    pub name: String,
    pub places: Vec<Place>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Device {
    pub fn place(&self, place: u32) -> Option<&Place> {
        self.places.iter().find(|p| p.place == place)
    }
}
