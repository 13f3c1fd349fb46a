use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::SessionHandle;

#[derive(Properties, PartialEq)]
pub struct LoginScreenProps {
    pub on_show_signup: Callback<()>,
}

#[function_component(LoginScreen)]
pub fn login_screen(props: &LoginScreenProps) -> Html {
    let session = use_context::<SessionHandle>().expect("session context missing");
    let email_ref = use_node_ref();
    let password_ref = use_node_ref();
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_submit = {
        let session = session.clone();
        let email_ref = email_ref.clone();
        let password_ref = password_ref.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(email_input), Some(password_input)) = (
                email_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let email = email_input.value();
            let password = password_input.value();
            if email.is_empty() || password.is_empty() {
                error.set(Some("Please fill in all fields".to_string()));
                return;
            }

            submitting.set(true);
            let session = session.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.login(&email, &password).await {
                    Ok(()) => error.set(None),
                    Err(e) => {
                        log::error!("❌ Login failed: {}", e);
                        error.set(Some(e.to_string()));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <div class="auth-screen">
            <form class="auth-card" onsubmit={on_submit}>
                <h1>{"Welcome back"}</h1>
                <p class="auth-subtitle">{"Sign in to continue your conversations"}</p>

                if let Some(message) = (*error).clone() {
                    <div class="form-error">{message}</div>
                }

                <label for="email">{"Email"}</label>
                <input
                    id="email"
                    type="email"
                    ref={email_ref}
                    placeholder="you@example.com"
                />

                <label for="password">{"Password"}</label>
                <input
                    id="password"
                    type="password"
                    ref={password_ref}
                    placeholder="Your password"
                />

                <button type="submit" class="primary" disabled={*submitting}>
                    { if *submitting { "Signing in..." } else { "Sign in" } }
                </button>

                <p class="auth-switch">
                    {"Don't have an account? "}
                    <button
                        type="button"
                        class="link"
                        onclick={props.on_show_signup.reform(|_: MouseEvent| ())}
                    >
                        {"Create one"}
                    </button>
                </p>
            </form>
        </div>
    }
}
