//! Routed pages.

pub mod admin;
pub mod login;
