//! Server functions bridging the views to the device store.

use dioxus::prelude::*;

use crate::models::{Device, DeviceSummary};

#[server]
pub async fn get_devices_server() -> Result<Vec<DeviceSummary>, ServerFnError> {
    use crate::db;
    let conn = db::open()?;
    let devices = db::get_devices(&conn)?;
    Ok(devices)
}

#[server]
pub async fn get_device_server(device_id: i64) -> Result<Device, ServerFnError> {
    use crate::db;
    let conn = db::open()?;
    match db::get_device(&conn, device_id)? {
        Some(device) => Ok(device),
        None => Err(ServerFnError::new(format!("Unknown device {device_id}."))),
    }
}

/// The server is the source of truth for whether an update is accepted;
/// the client applies `new_balance` locally only after this returns Ok.
#[server]
pub async fn update_balance_server(
    device_id: i64,
    place: u32,
    new_balance: f64,
) -> Result<(), ServerFnError> {
    use crate::db;
    if new_balance < 0.0 {
        return Err(ServerFnError::new("Balance cannot be negative."));
    }
    let conn = db::open()?;
    if !db::set_balance(&conn, device_id, place, new_balance)? {
        return Err(ServerFnError::new(format!(
            "Unknown place {place} on device {device_id}."
        )));
    }
    Ok(())
}
