//! Networking for the auth backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` defines the collaborator trait and its HTTP implementation, `types`
//! the wire records.

pub mod api;
pub mod types;
