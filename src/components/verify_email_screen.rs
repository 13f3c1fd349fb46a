use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::hooks::SessionHandle;
use crate::utils::{notify_error, notify_success};

#[derive(Properties, PartialEq)]
pub struct VerifyEmailScreenProps {
    pub token: String,
    pub on_done: Callback<()>,
}

#[function_component(VerifyEmailScreen)]
pub fn verify_email_screen(props: &VerifyEmailScreenProps) -> Html {
    let session = use_context::<SessionHandle>().expect("session context missing");
    let verifying = use_state(|| true);

    {
        let session = session.clone();
        let token = props.token.clone();
        let on_done = props.on_done.clone();
        let verifying = verifying.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match session.verify_email(&token).await {
                    Ok(payload) => {
                        let message = payload["message"]
                            .as_str()
                            .unwrap_or("Email verified successfully")
                            .to_string();
                        notify_success(&message);
                    }
                    Err(e) => {
                        log::error!("❌ Email verification failed: {}", e);
                        notify_error(&e.to_string());
                    }
                }
                verifying.set(false);
                // Login is the destination whether or not the token
                // was any good
                Timeout::new(2_000, move || on_done.emit(())).forget();
            });
            || ()
        });
    }

    html! {
        <div class="auth-screen">
            <div class="auth-card verify-card">
                <div class="spinner"></div>
                <p>
                    { if *verifying {
                        "Verifying your email..."
                    } else {
                        "Redirecting to login..."
                    }}
                </p>
            </div>
        </div>
    }
}
