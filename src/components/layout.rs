//! Page chrome chosen per route: minimal, sidebar, or plain.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route classifier picks the layout; the sidebar lists only the admin
//! pages the session may open. The top bar carries the signed-in user, the
//! theme toggle, and logout.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::context::use_session;
use crate::routes::LayoutKind;
use crate::state::session::SessionState;
use crate::storage::{BrowserStorage, StorageTier};
use crate::util::navigate::RouterNavigator;
use crate::util::theme::{self, Theme};

/// Admin pages listed in the sidebar, as (path, label).
pub const SIDEBAR_ENTRIES: &[(&str, &str)] = &[
    ("/admin", "Dashboard"),
    ("/admin/users", "Users"),
    ("/admin/roles", "Roles"),
    ("/admin/settings", "Settings"),
];

/// Sidebar entries the session may open.
#[must_use]
pub fn visible_sidebar_entries(state: &SessionState) -> Vec<(&'static str, &'static str)> {
    SIDEBAR_ENTRIES.iter().copied().filter(|(path, _)| state.can_access_page(path)).collect()
}

#[component]
pub fn AppLayout(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let routes = session.routes.clone();
    let layout = Memo::new(move |_| routes.layout_for(&location.pathname.get()));

    move || match layout.get() {
        LayoutKind::Minimal => view! { <main class="layout layout--minimal">{children()}</main> }.into_any(),
        LayoutKind::Sidebar => view! {
            <div class="layout layout--sidebar">
                <TopBar/>
                <Sidebar/>
                <main class="layout__content">{children()}</main>
            </div>
        }
        .into_any(),
        LayoutKind::Plain => view! {
            <div class="layout">
                <TopBar/>
                <main class="layout__content">{children()}</main>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn Sidebar() -> impl IntoView {
    let state = use_session().state;
    let location = use_location();

    view! {
        <nav class="sidebar">
            {move || {
                let current = location.pathname.get();
                state
                    .with(visible_sidebar_entries)
                    .into_iter()
                    .map(|(path, label)| {
                        let class = if current == path { "sidebar__link sidebar__link--active" } else { "sidebar__link" };
                        view! { <a href=path class=class>{label}</a> }
                    })
                    .collect::<Vec<_>>()
            }}
        </nav>
    }
}

#[component]
fn TopBar() -> impl IntoView {
    let session = use_session();
    let state = session.state;
    let controller = session.controller;
    let theme_key = session.config.theme_key.clone();
    let navigator = StoredValue::new_local(RouterNavigator::new(use_navigate()));
    let theme = RwSignal::new(Theme::default());

    let read_key = theme_key.clone();
    Effect::new(move || {
        let stored = theme::read_preference(&BrowserStorage::new(StorageTier::Remembered), &read_key);
        theme::apply(stored);
        theme.set(stored);
    });

    let on_toggle_theme = move |_| {
        let next = theme::toggle(&BrowserStorage::new(StorageTier::Remembered), &theme_key, theme.get_untracked());
        theme.set(next);
    };

    let on_logout = move |_| {
        let controller = controller.get_value();
        navigator.with_value(|nav| controller.logout(nav));
    };

    let user_label = move || state.with(|s| s.identity.as_ref().map(|id| id.label().to_owned()).unwrap_or_default());

    view! {
        <header class="topbar">
            <span class="topbar__spacer"></span>
            <button class="btn topbar__theme" on:click=on_toggle_theme title="Toggle dark mode">
                {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
            </button>
            <Show when=move || state.with(|s| s.identity.is_some())>
                <span class="topbar__user">{user_label}</span>
                <button class="btn topbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
