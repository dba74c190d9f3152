//! Login View
//!
//! Email/password login with a resend-verification affordance for
//! unverified accounts.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::context::use_toasts;
use crate::models::Session;
use crate::remote::auth::{self, AuthError};
use crate::remote::ApiClient;

#[component]
pub fn LoginView(
    #[prop(into)] on_authenticated: Callback<Session>,
    #[prop(into)] on_goto_signup: Callback<()>,
) -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());
    let toasts = use_toasts();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (loading, set_loading) = signal(false);
    let (unverified, set_unverified) = signal(false);

    let handle_login = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_unverified.set(false);
        set_loading.set(true);

        spawn_local(async move {
            let result = auth::log_in(
                &client.get_value(),
                &email.get_untracked(),
                &password.get_untracked(),
            )
            .await;

            match result {
                Ok(session) => {
                    tracing::info!(user_id = %session.user_id, "user logged in");
                    on_authenticated.run(session);
                }
                Err(err) => {
                    if err == AuthError::EmailUnverified {
                        set_unverified.set(true);
                    }
                    set_error.set(Some(err.to_string()));
                }
            }
            set_loading.set(false);
        });
    };

    let handle_resend = move |_| {
        spawn_local(async move {
            match auth::resend_verification_email(&client.get_value()).await {
                Ok(message) => toasts.success(message),
                Err(err) => toasts.error(err.to_string()),
            }
        });
    };

    view! {
        <div class="auth-card">
            <h1>"Login"</h1>

            {move || error.get().map(|message| view! { <p class="auth-error">{message}</p> })}

            <form on:submit=handle_login>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_email.set(input.value());
                    }
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        let target = ev.target().unwrap();
                        let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                        set_password.set(input.value());
                    }
                />
                <button type="submit" class="auth-submit" disabled=move || loading.get()>
                    {move || if loading.get() { "Logging in..." } else { "Login" }}
                </button>
            </form>

            <Show when=move || unverified.get()>
                <button type="button" class="resend-btn" on:click=handle_resend>
                    "Resend Verification Email"
                </button>
            </Show>

            <p class="auth-switch">
                "Don't have an account? "
                <button type="button" class="link-btn" on:click=move |_| on_goto_signup.run(())>
                    "Sign up"
                </button>
            </p>
        </div>
    }
}
