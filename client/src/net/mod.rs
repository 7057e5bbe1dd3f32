//! Networking modules for the storefront backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the credential exchange and catalog/cart calls, and `types`
//! defines the JSON schema shared with the backend.

pub mod api;
pub mod types;
