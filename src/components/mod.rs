//! Session-aware components.
//!
//! SYSTEM CONTEXT
//! ==============
//! These read the session through context and never write it directly;
//! logout goes through the controller.

pub mod auth_guard;
pub mod layout;
pub mod permission_gate;
