//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session and the app gate from Leptos context. Anything
//! that needs a signed-in user goes through the gate rather than checking the
//! session itself.

pub mod account_menu;
pub mod auth_modal;
pub mod product_card;
