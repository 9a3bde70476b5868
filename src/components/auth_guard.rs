//! Route guard admitting or redirecting a navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps the routed content. Protected paths without a stored credential are
//! sent to the login page with the requested location preserved; protected
//! content is withheld until the session has settled so it never flashes.
//!
//! On the server the session is never initialized, so protected routes
//! render empty and the browser decides after hydration.

#[cfg(test)]
#[path = "auth_guard_test.rs"]
mod auth_guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::context::use_session;
use crate::routes::RouteClassifier;
use crate::state::session::SessionState;
use crate::util::redirect::{build_login_redirect_url, join_location};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    /// Render nothing yet.
    Pending,
    /// Navigate to this login URL instead of rendering.
    Redirect(String),
}

/// Decide what to do with `href` (path + query + fragment).
#[must_use]
pub fn guard_decision(
    routes: &RouteClassifier,
    login_path: &str,
    state: &SessionState,
    authenticated: bool,
    href: &str,
) -> GuardDecision {
    if !routes.is_protected(RouteClassifier::path_of(href)) {
        return GuardDecision::Render;
    }
    if !state.initialized {
        return GuardDecision::Pending;
    }
    if !authenticated {
        return GuardDecision::Redirect(build_login_redirect_url(login_path, href));
    }
    if state.loading {
        return GuardDecision::Pending;
    }
    GuardDecision::Render
}

#[component]
pub fn AuthGuard(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let href = join_location(&location.pathname.get(), &location.search.get(), &location.hash.get());
        guard_decision(
            &session.routes,
            &session.config.login_path,
            &session.state.get(),
            session.tokens.is_authenticated(),
            &href,
        )
    });

    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decision.get() {
            log::debug!("guard redirecting to {target}");
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <Show when=move || decision.get() == GuardDecision::Render>
            {children()}
        </Show>
    }
}
