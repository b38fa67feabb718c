//! Transient toast notifications, shared by every view through a global
//! signal.

use dioxus::prelude::*;

use crate::editor::BalanceError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Level {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub level: Level,
    pub text: String,
}

pub static TOASTS: GlobalSignal<Vec<Toast>> = Signal::global(Vec::new);

const MAX_TOASTS: usize = 4;

fn push(level: Level, text: impl Into<String>) {
    use std::sync::atomic::{AtomicU64, Ordering};
    static NEXT_ID: AtomicU64 = AtomicU64::new(0);

    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let mut toasts = TOASTS.write();
    toasts.push(Toast {
        id,
        level,
        text: text.into(),
    });
    let overflow = toasts.len().saturating_sub(MAX_TOASTS);
    if overflow > 0 {
        toasts.drain(..overflow);
    }
}

pub fn success(text: impl Into<String>) {
    push(Level::Success, text);
}

/// Surface a balance-workflow error at the right level.
pub fn balance_error(err: &BalanceError) {
    push(level_for(err), err.to_string());
}

/// A zero amount is a user slip, everything else is an error.
fn level_for(err: &BalanceError) -> Level {
    match err {
        BalanceError::InvalidAmount => Level::Warning,
        _ => Level::Error,
    }
}

fn dismiss(id: u64) {
    TOASTS.write().retain(|t| t.id != id);
}

#[component]
pub fn Toasts() -> Element {
    let toasts = TOASTS.read().clone();

    rsx! {
        div { id: "toasts",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    class: match toast.level {
                        Level::Success => "toast toast-success",
                        Level::Warning => "toast toast-warning",
                        Level::Error => "toast toast-error",
                    },
                    span { "{toast.text}" }
                    button {
                        class: "toast-close",
                        onclick: move |_| dismiss(toast.id),
                        "✕"
                    }
                }
            }
        }
    }
}
