use dioxus::prelude::*;

use crate::Route;
use crate::api;

// Device catalog: one read on mount, a navigation link per row. No retry,
// no mutation capability.
#[component]
pub fn DeviceCatalog() -> Element {
    let devices = use_resource(|| async move {
        api::get_devices_server()
            .await
            .inspect_err(|e| log::error!("Failed to fetch the device list: {}", e))
    });

    rsx! {
        div { id: "catalog-page",
            h2 { "Devices" }

            match &*devices.read() {
                None => rsx! {
                    p { "Loading devices..." }
                },
                Some(Ok(devices)) => {
                    if devices.is_empty() {
                        rsx! {
                            p { "No devices registered." }
                        }
                    } else {
                        rsx! {
                            table { class: "device-table",
                                thead {
                                    tr {
                                        th { "ID" }
                                        th { "Device name" }
                                        th { "Actions" }
                                    }
                                }
                                tbody {
                                    for device in devices.iter() {
                                        tr { key: "{device.id}",
                                            td { "{device.id}" }
                                            td { "{device.name}" }
                                            td {
                                                Link {
                                                    to: Route::BalanceEditor {
                                                        device_id: device.id,
                                                    },
                                                    "View players"
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Some(Err(e)) => rsx! {
                    p { class: "error-message", "Error loading devices: {e}" }
                },
            }
        }
    }
}
