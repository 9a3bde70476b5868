//! Root application component with routing and context providers.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_guard::AuthGuard;
use crate::components::layout::AppLayout;
use crate::config::AuthConfig;
use crate::context::{install_session_initializer, provide_session};
use crate::net::api::HttpAuthApi;
use crate::pages::{admin::AdminPage, login::LoginPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the session once and provides it to every route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = provide_session(AuthConfig::default(), Rc::new(HttpAuthApi::default()));
    install_session_initializer(&session);

    view! {
        <Stylesheet id="leptos" href="/pkg/admin-session.css"/>
        <Title text="Admin"/>

        <Router>
            <AppLayout>
                <AuthGuard>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("admin") view=AdminPage/>
                        <Route path=(StaticSegment("admin"), ParamSegment("section")) view=AdminPage/>
                    </Routes>
                </AuthGuard>
            </AppLayout>
        </Router>
    }
}
