use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::SearchableSelect;
use crate::hooks::SessionHandle;
use crate::models::{ProfileUpdate, User};
use crate::utils::{notify_error, notify_success, COUNTRIES};

#[derive(Properties, PartialEq)]
pub struct ProfileScreenProps {
    pub on_back: Callback<()>,
}

fn draft_from(user: &User) -> ProfileUpdate {
    ProfileUpdate {
        name: user.name.clone(),
        phone: user.phone.clone(),
        country: user.country.clone(),
        city: user.city.clone(),
    }
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[function_component(ProfileScreen)]
pub fn profile_screen(props: &ProfileScreenProps) -> Html {
    let session = use_context::<SessionHandle>().expect("session context missing");
    let editing = use_state(|| false);
    let saving = use_state(|| false);
    let draft = use_state(ProfileUpdate::default);

    // Seed the draft from the committed snapshot, and re-seed it when
    // the snapshot changes under us (e.g. after a save)
    {
        let draft = draft.clone();
        let user = session.store().user.clone();
        use_effect_with(user, move |user| {
            if let Some(user) = user {
                draft.set(draft_from(user));
            }
            || ()
        });
    }

    let edit_name = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*draft).clone();
            next.name = value;
            draft.set(next);
        })
    };
    let edit_phone = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*draft).clone();
            next.phone = none_if_empty(value);
            draft.set(next);
        })
    };
    let edit_city = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let value = e.target_unchecked_into::<HtmlInputElement>().value();
            let mut next = (*draft).clone();
            next.city = none_if_empty(value);
            draft.set(next);
        })
    };
    let edit_country = {
        let draft = draft.clone();
        Callback::from(move |picked: String| {
            let mut next = (*draft).clone();
            next.country = Some(picked);
            draft.set(next);
        })
    };

    let on_edit = {
        let editing = editing.clone();
        Callback::from(move |_: MouseEvent| editing.set(true))
    };

    let on_cancel = {
        let editing = editing.clone();
        let draft = draft.clone();
        let user = session.store().user.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(user) = &user {
                draft.set(draft_from(user));
            }
            editing.set(false);
        })
    };

    let on_submit = {
        let session = session.clone();
        let editing = editing.clone();
        let saving = saving.clone();
        let draft = draft.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if draft.name.is_empty() {
                notify_error("Name cannot be empty");
                return;
            }

            saving.set(true);
            let session = session.clone();
            let editing = editing.clone();
            let saving = saving.clone();
            let payload = (*draft).clone();
            wasm_bindgen_futures::spawn_local(async move {
                match session.update_profile(&payload).await {
                    Ok(_) => {
                        editing.set(false);
                        notify_success("Profile updated successfully");
                    }
                    Err(e) => {
                        log::error!("❌ Profile update failed: {}", e);
                        notify_error(&e.to_string());
                    }
                }
                saving.set(false);
            });
        })
    };

    let Some(user) = session.store().user.clone() else {
        // Only reachable for one render during logout
        return html! {};
    };

    let is_editing = *editing;

    html! {
        <div class="profile-screen">
            <header class="profile-header">
                <button onclick={props.on_back.reform(|_: MouseEvent| ())}>{"← Back"}</button>
                <h1>{"Profile Settings"}</h1>
            </header>

            <form class="profile-card" onsubmit={on_submit}>
                <label>{"Name"}</label>
                if is_editing {
                    <input type="text" value={draft.name.clone()} oninput={edit_name} />
                } else {
                    <p class="profile-value">{ user.name.clone() }</p>
                }

                <label>{"Email"}</label>
                // Not editable; it anchors the account
                <p class="profile-value muted">{ user.email.clone() }</p>

                <label>{"Phone"}</label>
                if is_editing {
                    <input
                        type="tel"
                        value={draft.phone.clone().unwrap_or_default()}
                        oninput={edit_phone}
                    />
                } else {
                    <p class="profile-value">
                        { user.phone.clone().unwrap_or_else(|| "Not set".to_string()) }
                    </p>
                }

                <label>{"Country"}</label>
                if is_editing {
                    <SearchableSelect
                        options={COUNTRIES.iter().map(|c| c.to_string()).collect::<Vec<_>>()}
                        value={draft.country.clone()}
                        on_change={edit_country}
                        placeholder="Select a country"
                    />
                } else {
                    <p class="profile-value">
                        { user.country.clone().unwrap_or_else(|| "Not set".to_string()) }
                    </p>
                }

                <label>{"City"}</label>
                if is_editing {
                    <input
                        type="text"
                        value={draft.city.clone().unwrap_or_default()}
                        oninput={edit_city}
                    />
                } else {
                    <p class="profile-value">
                        { user.city.clone().unwrap_or_else(|| "Not set".to_string()) }
                    </p>
                }

                <div class="profile-actions">
                    if is_editing {
                        <button type="button" onclick={on_cancel} disabled={*saving}>
                            {"Cancel"}
                        </button>
                        <button type="submit" class="primary" disabled={*saving}>
                            { if *saving { "Saving..." } else { "Save changes" } }
                        </button>
                    } else {
                        <button type="button" class="primary" onclick={on_edit}>
                            {"Edit profile"}
                        </button>
                    }
                </div>
            </form>
        </div>
    }
}
