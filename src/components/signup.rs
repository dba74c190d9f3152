//! Signup View
//!
//! Account creation with inline success/error messaging.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::remote::{auth, ApiClient};

#[component]
pub fn SignupView(#[prop(into)] on_goto_login: Callback<()>) -> impl IntoView {
    let client = StoredValue::new(expect_context::<ApiClient>());

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal(None::<String>);
    let (message, set_message) = signal(None::<String>);
    let (loading, set_loading) = signal(false);

    let handle_signup = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);
        set_message.set(None);
        set_loading.set(true);

        spawn_local(async move {
            let result = auth::sign_up(
                &client.get_value(),
                &email.get_untracked(),
                &password.get_untracked(),
            )
            .await;

            match result {
                Ok(confirmation) => {
                    set_message.set(Some(confirmation));
                    set_email.set(String::new());
                    set_password.set(String::new());
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
            set_loading.set(false);
        });
    };

    view! {
        <div class="auth-card">
            <h1>"Sign Up"</h1>

            {move || error.get().map(|text| view! { <p class="auth-error">{text}</p> })}
            {move || message.get().map(|text| view! { <p class="auth-success">{text}</p> })}

            <form on:submit=handle_signup>
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
                    {move || if loading.get() { "Signing up..." } else { "Sign Up" }}
                </button>
            </form>

            <p class="auth-switch">
                "Already have an account? "
                <button type="button" class="link-btn" on:click=move |_| on_goto_login.run(())>
                    "Login"
                </button>
            </p>
        </div>
    }
}
