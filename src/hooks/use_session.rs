use yew::prelude::*;

use crate::error::AppError;
use crate::models::{ProfileUpdate, SignupRequest, User};
use crate::services::auth_service;
use crate::stores::SessionStore;
use crate::utils::storage;

/// Clonable handle to the session state, provided to the whole tree
/// via `ContextProvider<SessionHandle>`.
///
/// Operations return their errors to the caller; the screen that
/// triggered them decides what the user sees.
#[derive(Clone, PartialEq)]
pub struct SessionHandle {
    state: UseStateHandle<SessionStore>,
}

impl SessionHandle {
    pub fn store(&self) -> &SessionStore {
        &self.state
    }

    /// Hydrate the session from the persisted token, if any. Always
    /// terminates with `loading` cleared, on success and failure alike.
    pub async fn bootstrap(&self) {
        let Some(token) = storage::load_token() else {
            log::info!("ℹ️ No persisted token, staying anonymous");
            let mut store = (*self.state).clone();
            store.finish_loading();
            self.state.set(store);
            return;
        };

        match auth_service::fetch_profile(&token).await {
            Ok(user) => {
                log::info!("✅ Session restored: {}", user.email);
                let mut store = (*self.state).clone();
                store.apply_login(token, user);
                store.finish_loading();
                self.state.set(store);
            }
            Err(e) => {
                log::error!("❌ Token verification failed: {}", e);
                storage::remove_token();
                let mut store = (*self.state).clone();
                store.clear();
                self.state.set(store);
            }
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<(), AppError> {
        let response = auth_service::login(email, password).await?;
        let (Some(token), Some(user)) = (response.token, response.user) else {
            return Err(AppError::Auth(
                "Invalid response format from server".to_string(),
            ));
        };

        if let Err(e) = storage::save_token(&token) {
            // Session still works for this tab; it just won't survive
            // a reload.
            log::error!("❌ Could not persist token: {}", e);
        }

        log::info!("✅ Login successful: {}", user.email);
        let mut store = (*self.state).clone();
        store.apply_login(token, user);
        store.finish_loading();
        self.state.set(store);
        Ok(())
    }

    /// Registration does not establish a session; the returned payload
    /// carries the backend's "check your email" message.
    pub async fn signup(&self, draft: &SignupRequest) -> Result<serde_json::Value, AppError> {
        auth_service::register(draft).await
    }

    pub async fn verify_email(&self, token: &str) -> Result<serde_json::Value, AppError> {
        auth_service::verify_email(token).await
    }

    /// Write the edited fields, then read back the canonical profile to
    /// pick up server-side normalization. Two calls on purpose.
    pub async fn update_profile(&self, draft: &ProfileUpdate) -> Result<User, AppError> {
        let token = self
            .state
            .token
            .clone()
            .ok_or_else(|| AppError::Auth("not authenticated".to_string()))?;

        let updated = auth_service::update_profile(&token, draft).await?;
        let mut store = (*self.state).clone();
        store.apply_profile(updated);
        self.state.set(store.clone());

        match auth_service::fetch_profile(&token).await {
            Ok(fresh) => {
                store.apply_profile(fresh.clone());
                self.state.set(store);
                Ok(fresh)
            }
            Err(e) => {
                // The credential stopped being valid mid-flight; same
                // treatment as a bootstrap failure.
                log::error!("❌ Profile re-fetch failed: {}", e);
                storage::remove_token();
                store.clear();
                self.state.set(store);
                Err(e)
            }
        }
    }

    /// Synchronous and infallible.
    pub fn logout(&self) {
        storage::remove_token();
        log::info!("👋 Logout");
        let mut store = (*self.state).clone();
        store.clear();
        self.state.set(store);
    }
}

#[hook]
pub fn use_session() -> SessionHandle {
    let state = use_state(SessionStore::default);
    let handle = SessionHandle { state };

    {
        let handle = handle.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                handle.bootstrap().await;
            });
            || ()
        });
    }

    handle
}
