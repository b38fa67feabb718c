//! Web interface components for the soldesk application
//!
//! This module contains the Dioxus components that make up the admin
//! interface: navigation, the device catalog and the per-device player
//! balance editor.

/// Navigation bar component
mod navbar;
pub use navbar::Navbar;

/// Device catalog component
mod catalog;
pub use catalog::DeviceCatalog;

/// Player balance editor component
mod balances;
pub use balances::BalanceEditor;
