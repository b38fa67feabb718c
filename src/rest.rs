#![cfg(feature = "server")]

//! Plain HTTP/JSON surface for non-browser admin clients, nested under
//! `/api/v1/a` next to the Dioxus application.

use axum::{
    Json, Router,
    extract::Path,
    http::StatusCode,
    routing::{get, post},
};

use crate::db;
use crate::models::{Device, DeviceSummary};

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct UpdatePayload {
    #[serde(rename = "newBalance")]
    pub new_balance: f64,
}

pub fn router() -> Router {
    Router::new()
        .route("/devices/", get(list_devices))
        .route("/devices/:device_id/", get(device_detail))
        .route("/devices/:device_id/place/:place_id/update", post(update_place))
}

async fn list_devices() -> Result<Json<Vec<DeviceSummary>>, StatusCode> {
    let conn = db::open().map_err(internal)?;
    let devices = db::get_devices(&conn).map_err(internal)?;
    Ok(Json(devices))
}

async fn device_detail(Path(device_id): Path<i64>) -> Result<Json<Device>, StatusCode> {
    let conn = db::open().map_err(internal)?;
    match db::get_device(&conn, device_id).map_err(internal)? {
        Some(device) => Ok(Json(device)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn update_place(
    Path((device_id, place_id)): Path<(i64, u32)>,
    Json(payload): Json<UpdatePayload>,
) -> Result<StatusCode, StatusCode> {
    if payload.new_balance < 0.0 {
        return Err(StatusCode::UNPROCESSABLE_ENTITY);
    }
    let conn = db::open().map_err(internal)?;
    let updated =
        db::set_balance(&conn, device_id, place_id, payload.new_balance).map_err(internal)?;
    if updated {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(StatusCode::NOT_FOUND)
    }
}

fn internal(e: rusqlite::Error) -> StatusCode {
    log::error!("Device store error: {}", e);
    StatusCode::INTERNAL_SERVER_ERROR
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_payload_uses_the_documented_wire_name() {
        let payload: UpdatePayload = serde_json::from_value(serde_json::json!({
            "newBalance": 150.0
        }))
        .unwrap();
        assert_eq!(payload.new_balance, 150.0);

        let encoded = serde_json::to_value(UpdatePayload { new_balance: 12.5 }).unwrap();
        assert_eq!(encoded, serde_json::json!({ "newBalance": 12.5 }));
    }
}
