use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::{PasswordStrengthBar, SearchableSelect};
use crate::hooks::SessionHandle;
use crate::models::SignupRequest;
use crate::utils::{notify_success, COUNTRIES};

#[derive(Properties, PartialEq)]
pub struct SignupScreenProps {
    pub on_back_to_login: Callback<()>,
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[function_component(SignupScreen)]
pub fn signup_screen(props: &SignupScreenProps) -> Html {
    let session = use_context::<SessionHandle>().expect("session context missing");
    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let city_ref = use_node_ref();
    // Controlled so the strength bar tracks every keystroke
    let password = use_state(String::new);
    let country = use_state(|| None::<String>);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            password.set(value);
        })
    };

    let on_country_change = {
        let country = country.clone();
        Callback::from(move |picked: String| country.set(Some(picked)))
    };

    let on_submit = {
        let session = session.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let city_ref = city_ref.clone();
        let password = password.clone();
        let country = country.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_back_to_login = props.on_back_to_login.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let (Some(name_input), Some(email_input)) = (
                name_ref.cast::<HtmlInputElement>(),
                email_ref.cast::<HtmlInputElement>(),
            ) else {
                return;
            };

            let name = name_input.value();
            let email = email_input.value();
            if name.is_empty() || email.is_empty() || password.is_empty() {
                error.set(Some(
                    "Name, email and password are required".to_string(),
                ));
                return;
            }

            let draft = SignupRequest {
                name,
                email,
                password: (*password).clone(),
                phone: phone_ref
                    .cast::<HtmlInputElement>()
                    .and_then(|input| none_if_empty(input.value())),
                country: (*country).clone(),
                city: city_ref
                    .cast::<HtmlInputElement>()
                    .and_then(|input| none_if_empty(input.value())),
            };

            submitting.set(true);
            let session = session.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let on_back_to_login = on_back_to_login.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.signup(&draft).await {
                    Ok(payload) => {
                        let message = payload["message"]
                            .as_str()
                            .unwrap_or("Registration successful. Please check your email.")
                            .to_string();
                        notify_success(&message);
                        on_back_to_login.emit(());
                    }
                    Err(e) => {
                        log::error!("❌ Signup failed: {}", e);
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
                <h1>{"Create your account"}</h1>

                if let Some(message) = (*error).clone() {
                    <div class="form-error">{message}</div>
                }

                <label for="name">{"Name"}</label>
                <input id="name" type="text" ref={name_ref} placeholder="Full name" />

                <label for="email">{"Email"}</label>
                <input id="email" type="email" ref={email_ref} placeholder="you@example.com" />

                <label for="phone">{"Phone (optional)"}</label>
                <input id="phone" type="tel" ref={phone_ref} placeholder="+1 555 000 0000" />

                <label>{"Country (optional)"}</label>
                <SearchableSelect
                    options={COUNTRIES.iter().map(|c| c.to_string()).collect::<Vec<_>>()}
                    value={(*country).clone()}
                    on_change={on_country_change}
                    placeholder="Select a country"
                />

                <label for="city">{"City (optional)"}</label>
                <input id="city" type="text" ref={city_ref} placeholder="City" />

                <label for="password">{"Password"}</label>
                <input
                    id="password"
                    type="password"
                    value={(*password).clone()}
                    oninput={on_password_input}
                    placeholder="Choose a password"
                />
                <PasswordStrengthBar password={(*password).clone()} />

                <button type="submit" class="primary" disabled={*submitting}>
                    { if *submitting { "Creating account..." } else { "Sign up" } }
                </button>

                <p class="auth-switch">
                    {"Already have an account? "}
                    <button
                        type="button"
                        class="link"
                        onclick={props.on_back_to_login.reform(|_: MouseEvent| ())}
                    >
                        {"Sign in"}
                    </button>
                </p>
            </form>
        </div>
    }
}
