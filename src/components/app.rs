use web_sys::{window, UrlSearchParams};
use yew::prelude::*;

use super::{ChatScreen, LoginScreen, ProfileScreen, SignupScreen, VerifyEmailScreen};
use crate::hooks::{use_session, SessionHandle};

#[derive(Clone, Copy, PartialEq)]
enum Screen {
    Login,
    Signup,
    Chat,
    Profile,
}

/// Email verification links carry the token as a query parameter.
fn verification_token() -> Option<String> {
    let search = window()?.location().search().ok()?;
    let params = UrlSearchParams::new_with_str(&search).ok()?;
    params.get("token")
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session();
    let screen = use_state(|| Screen::Login);
    let verify_token = use_state(verification_token);

    // Verification takes over the whole window; success and failure
    // both end back at the login screen.
    if let Some(token) = (*verify_token).clone() {
        let on_done = {
            let verify_token = verify_token.clone();
            let screen = screen.clone();
            Callback::from(move |_| {
                verify_token.set(None);
                screen.set(Screen::Login);
            })
        };
        return html! {
            <ContextProvider<SessionHandle> context={session.clone()}>
                <VerifyEmailScreen {token} {on_done} />
            </ContextProvider<SessionHandle>>
        };
    }

    if session.store().loading {
        return html! {
            <div class="splash">
                <div class="spinner"></div>
                <p>{"Loading..."}</p>
            </div>
        };
    }

    let on_show_signup = {
        let screen = screen.clone();
        Callback::from(move |_| screen.set(Screen::Signup))
    };
    let on_back_to_login = {
        let screen = screen.clone();
        Callback::from(move |_| screen.set(Screen::Login))
    };
    let on_show_profile = {
        let screen = screen.clone();
        Callback::from(move |_| screen.set(Screen::Profile))
    };
    let on_back_to_chat = {
        let screen = screen.clone();
        Callback::from(move |_| screen.set(Screen::Chat))
    };
    let on_logout = {
        let screen = screen.clone();
        let session = session.clone();
        Callback::from(move |_| {
            session.logout();
            screen.set(Screen::Chat);
        })
    };

    let body = if !session.store().is_authenticated {
        match *screen {
            Screen::Signup => html! { <SignupScreen {on_back_to_login} /> },
            _ => html! { <LoginScreen {on_show_signup} /> },
        }
    } else {
        match *screen {
            Screen::Profile => html! { <ProfileScreen on_back={on_back_to_chat} /> },
            _ => html! { <ChatScreen {on_show_profile} {on_logout} /> },
        }
    };

    html! {
        <ContextProvider<SessionHandle> context={session}>
            {body}
        </ContextProvider<SessionHandle>>
    }
}
