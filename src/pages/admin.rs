//! Admin landing page with capability-gated record actions.

use leptos::prelude::*;

use crate::components::permission_gate::{CreateGate, DeleteGate, EditGate};
use crate::context::use_session;

#[component]
pub fn AdminPage() -> impl IntoView {
    let state = use_session().state;
    let greeting = move || {
        state.with(|s| s.identity.as_ref().map(|id| format!("Welcome, {}", id.label())).unwrap_or_default())
    };

    view! {
        <section class="admin-page">
            <header class="admin-page__header">
                <h1>{greeting}</h1>
            </header>
            <div class="admin-page__actions">
                <CreateGate>
                    <button class="btn btn--primary">"+ New"</button>
                </CreateGate>
                <EditGate>
                    <button class="btn">"Edit"</button>
                </EditGate>
                <DeleteGate fallback=|| view! { <span class="admin-page__hint">"Read-only"</span> }>
                    <button class="btn btn--danger">"Delete"</button>
                </DeleteGate>
            </div>
        </section>
    }
}
