//! Target-independent core for the MentorLink browser client.
//!
//! Everything that branches lives here as plain functions over plain data so
//! it can be tested natively; the wasm shell owns the actual DOM and network
//! bindings and calls into this crate through the port traits.

pub mod auth;
pub mod questionnaire;
