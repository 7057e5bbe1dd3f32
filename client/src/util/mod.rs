//! Client utilities that sit between the network layer and shared state.
//!
//! DESIGN
//! ======
//! `session` probes the backend once on mount and settles the auth session
//! before any gated action can run.

pub mod session;
