//! Balance-mutation workflow for the editor screen.
//!
//! The [`Editor`] owns the fetched device snapshot and the per-place
//! pending-amount inputs. Submissions go through `plan_deposit` /
//! `plan_withdraw`, which validate and compute the new absolute balance
//! without touching state; the caller sends the resulting [`Mutation`]
//! to the server and calls [`Editor::commit`] only after the server
//! confirmed it. A failed remote call therefore leaves both the balance
//! and the typed-in amount exactly as they were.

use std::collections::HashMap;

use crate::amount;
use crate::models::{Device, Place};

#[derive(Debug, Clone, PartialEq)]
pub enum BalanceError {
    /// Zero amount submitted; no request is made.
    InvalidAmount,
    /// Withdraw exceeds the player's balance; no request is made.
    InsufficientFunds,
    /// No player at that place number on the loaded device.
    UnknownPlace(u32),
    /// The remote mutation was rejected or the request failed.
    UpdateFailed(String),
    /// The catalog or detail read failed.
    FetchFailed(String),
}

impl std::fmt::Display for BalanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAmount => write!(f, "Enter a valid amount"),
            Self::InsufficientFunds => write!(f, "Insufficient funds on balance"),
            Self::UnknownPlace(place) => write!(f, "No player at place {place}"),
            Self::UpdateFailed(e) => write!(f, "Failed to update balance: {e}"),
            Self::FetchFailed(e) => write!(f, "Failed to load players: {e}"),
        }
    }
}

impl std::error::Error for BalanceError {}

/// A validated balance write, not yet confirmed by the server. The wire
/// carries the new absolute balance, never a delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mutation {
    pub place: u32,
    pub new_balance: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Editor {
    device: Option<Device>,
    pending: HashMap<u32, String>,
}

impl Editor {
    /// Replace the snapshot with a freshly fetched device and reset every
    /// pending amount to `"0"`.
    pub fn load(&mut self, device: Device) {
        self.pending = device
            .places
            .iter()
            .map(|p| (p.place, String::from("0")))
            .collect();
        self.device = Some(device);
    }

    pub fn device(&self) -> Option<&Device> {
        self.device.as_ref()
    }

    pub fn pending_for(&self, place: u32) -> &str {
        self.pending.get(&place).map(String::as_str).unwrap_or("0")
    }

    /// Store the sanitized form of whatever the user typed.
    pub fn set_pending(&mut self, place: u32, raw: &str) {
        self.pending
            .insert(place, amount::sanitize_amount_input(raw));
    }

    fn place(&self, place: u32) -> Result<&Place, BalanceError> {
        self.device
            .as_ref()
            .and_then(|d| d.place(place))
            .ok_or(BalanceError::UnknownPlace(place))
    }

    pub fn plan_deposit(&self, place: u32) -> Result<Mutation, BalanceError> {
        let player = self.place(place)?;
        let amount = amount::parse_amount(self.pending_for(place));
        if amount == 0.0 {
            return Err(BalanceError::InvalidAmount);
        }
        Ok(Mutation {
            place,
            new_balance: player.balances + amount,
        })
    }

    pub fn plan_withdraw(&self, place: u32) -> Result<Mutation, BalanceError> {
        let player = self.place(place)?;
        let amount = amount::parse_amount(self.pending_for(place));
        // Insufficient funds is checked before the zero-amount case; this
        // ordering is long-standing observable behavior.
        if player.balances < amount {
            return Err(BalanceError::InsufficientFunds);
        }
        if amount == 0.0 {
            return Err(BalanceError::InvalidAmount);
        }
        Ok(Mutation {
            place,
            new_balance: player.balances - amount,
        })
    }

    /// Reconcile a server-confirmed mutation into the snapshot and reset
    /// that place's pending amount.
    pub fn commit(&mut self, mutation: Mutation) {
        if let Some(device) = self.device.as_mut() {
            if let Some(player) = device.places.iter_mut().find(|p| p.place == mutation.place) {
                player.balances = mutation.new_balance;
            }
        }
        self.pending.insert(mutation.place, String::from("0"));
    }
}
