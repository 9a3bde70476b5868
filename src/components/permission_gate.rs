//! Capability-gated rendering of actions.
//!
//! Membership of the permission key in the session's accessible elements is
//! the only check. No network calls happen at render time.

use leptos::prelude::*;

use crate::context::use_session;
use crate::state::session::{CREATE_KEY, DELETE_KEY, EDIT_KEY};

/// Render `children` only if the session holds `permission`, else `fallback`.
#[component]
pub fn PermissionGate(
    #[prop(into)] permission: String,
    #[prop(optional, into)] fallback: ViewFn,
    children: ChildrenFn,
) -> impl IntoView {
    let state = use_session().state;
    view! {
        <Show when=move || state.with(|s| s.has_capability(&permission)) fallback=fallback>
            {children()}
        </Show>
    }
}

#[component]
pub fn CreateGate(#[prop(optional, into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    view! { <PermissionGate permission=CREATE_KEY fallback=fallback>{children()}</PermissionGate> }
}

#[component]
pub fn EditGate(#[prop(optional, into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    view! { <PermissionGate permission=EDIT_KEY fallback=fallback>{children()}</PermissionGate> }
}

#[component]
pub fn DeleteGate(#[prop(optional, into)] fallback: ViewFn, children: ChildrenFn) -> impl IntoView {
    view! { <PermissionGate permission=DELETE_KEY fallback=fallback>{children()}</PermissionGate> }
}
