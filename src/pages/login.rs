//! Login page: username + password with "remember me".
//!
//! Errors are shown inline and leave the page in place. On success the
//! login flow navigates to the `redirect` target or the default destination.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::context::use_session;
use crate::login::{LoginFlow, validate_credentials};
use crate::util::navigate::RouterNavigator;
use crate::util::redirect::{post_login_target, redirect_param};

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigator = StoredValue::new_local(RouterNavigator::new(use_navigate()));

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let remember = RwSignal::new(false);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        let redirect = redirect_param(&location.search.get_untracked());
        let destination = post_login_target(&session.config, redirect.as_deref());
        let remember_me = remember.get();
        busy.set(true);
        info.set("Signing in...".to_owned());

        let controller = session.controller.get_value();
        let navigator = navigator.get_value();
        leptos::task::spawn_local(async move {
            let flow = LoginFlow::new(&controller, &navigator);
            match flow.submit(credentials, remember_me, &destination).await {
                Ok(()) => info.set(String::new()),
                Err(e) => info.set(e.user_message()),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin"</h1>
                <p class="login-card__subtitle">"Sign in to continue"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <label class="login-remember">
                        <input
                            type="checkbox"
                            prop:checked=move || remember.get()
                            on:change=move |ev| remember.set(event_target_checked(&ev))
                        />
                        "Remember me"
                    </label>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
