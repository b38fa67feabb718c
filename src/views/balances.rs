use dioxus::prelude::*;

use crate::Route;
use crate::api;
use crate::editor::{BalanceError, Editor};
use crate::notify;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Operation {
    Deposit,
    Withdraw,
}

// Balance editor: fetches the device detail, then lets the admin deposit
// to or withdraw from each player slot. The editor state lives in one
// signal; the snapshot is only mutated after the server confirmed an
// update.
#[component]
pub fn BalanceEditor(device_id: i64) -> Element {
    let mut editor = use_signal(Editor::default);

    let device_resource =
        use_resource(move || async move { api::get_device_server(device_id).await });

    use_effect(move || match &*device_resource.read() {
        Some(Ok(device)) => editor.write().load(device.clone()),
        Some(Err(e)) => {
            log::error!("Failed to fetch device {}: {}", device_id, e);
            notify::balance_error(&BalanceError::FetchFailed(e.to_string()));
        }
        None => {}
    });

    let snapshot = editor.read().device().cloned();

    rsx! {
        div { id: "balances-page",
            div { class: "editor-header",
                Link { to: Route::DeviceCatalog {}, class: "back-link", "Back" }
            }

            match snapshot {
                Some(device) => rsx! {
                    h2 { "Player balances on {device.name}" }
                    table { class: "balance-table",
                        thead {
                            tr {
                                th { "ID" }
                                th { "Currency" }
                                th { "Balance" }
                                th { "Actions" }
                            }
                        }
                        tbody {
                            for place in device.places.iter() {
                                BalanceRow {
                                    key: "{place.place}",
                                    device_id,
                                    place_no: place.place,
                                    currency: place.currency.clone(),
                                    balance: place.balances,
                                    editor,
                                }
                            }
                        }
                    }
                },
                None => match &*device_resource.read() {
                    Some(Err(e)) => rsx! {
                        p { class: "error-message", "Error loading players: {e}" }
                    },
                    _ => rsx! {
                        p { "Loading players..." }
                    },
                },
            }
        }
    }
}

#[component]
fn BalanceRow(
    device_id: i64,
    place_no: u32,
    currency: String,
    balance: f64,
    editor: Signal<Editor>,
) -> Element {
    let mut editor = editor;
    let pending = editor.read().pending_for(place_no).to_string();

    rsx! {
        tr {
            td { "{place_no}" }
            td { "{currency}" }
            td { "{balance:.2}" }
            td { class: "row-actions",
                input {
                    r#type: "text",
                    class: "amount-input",
                    value: "{pending}",
                    oninput: move |event| editor.write().set_pending(place_no, &event.value()),
                }
                button {
                    class: "deposit",
                    onclick: move |_| submit(editor, device_id, place_no, Operation::Deposit),
                    "Deposit"
                }
                button {
                    class: "withdraw",
                    onclick: move |_| submit(editor, device_id, place_no, Operation::Withdraw),
                    "Withdraw"
                }
            }
        }
    }
}

// Validation happens locally before any request goes out; the snapshot is
// reconciled only once the server accepted the new balance. The spawned
// future is scoped to the row's component, so a response that arrives
// after navigating away is dropped instead of hitting a stale view.
async fn submit(mut editor: Signal<Editor>, device_id: i64, place_no: u32, op: Operation) {
    let planned = match op {
        Operation::Deposit => editor.read().plan_deposit(place_no),
        Operation::Withdraw => editor.read().plan_withdraw(place_no),
    };

    let mutation = match planned {
        Ok(mutation) => mutation,
        Err(e) => {
            notify::balance_error(&e);
            return;
        }
    };

    match api::update_balance_server(device_id, mutation.place, mutation.new_balance).await {
        Ok(()) => {
            editor.write().commit(mutation);
            notify::success("Balance updated");
        }
        Err(e) => {
            log::error!(
                "Failed to update balance for place {} on device {}: {}",
                place_no,
                device_id,
                e
            );
            notify::balance_error(&BalanceError::UpdateFailed(e.to_string()));
        }
    }
}
