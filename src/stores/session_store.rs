use crate::models::User;

/// Authentication state shared by every screen.
///
/// Lifecycle: created with `loading = true` at process start, hydrated
/// by bootstrap, mutated by login / profile update, reset to anonymous
/// by logout or any authentication failure detected along the way.
#[derive(Clone, PartialEq, Debug)]
pub struct SessionStore {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// Bootstrap-in-progress flag; cleared exactly once.
    pub loading: bool,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self {
            token: None,
            user: None,
            is_authenticated: false,
            loading: true,
        }
    }
}

impl SessionStore {
    /// Successful login or bootstrap hydration.
    pub fn apply_login(&mut self, token: String, user: User) {
        self.token = Some(token);
        self.user = Some(user);
        self.is_authenticated = true;
    }

    /// Replace the profile snapshot, keeping the credential.
    pub fn apply_profile(&mut self, user: User) {
        self.user = Some(user);
        self.is_authenticated = true;
    }

    /// Back to anonymous. Also terminates a pending bootstrap.
    pub fn clear(&mut self) {
        self.token = None;
        self.user = None;
        self.is_authenticated = false;
        self.loading = false;
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            phone: Some("+33123456789".to_string()),
            country: Some("France".to_string()),
            city: Some("Paris".to_string()),
        }
    }

    #[test]
    fn starts_anonymous_and_loading() {
        let store = SessionStore::default();
        assert!(store.loading);
        assert!(!store.is_authenticated);
        assert!(store.token.is_none());
        assert!(store.user.is_none());
    }

    #[test]
    fn bootstrap_without_token_just_finishes_loading() {
        let mut store = SessionStore::default();
        store.finish_loading();
        assert!(!store.loading);
        assert!(!store.is_authenticated);
        assert!(store.user.is_none());
    }

    #[test]
    fn login_authenticates_and_logout_resets() {
        let mut store = SessionStore::default();
        store.apply_login("tok-123".to_string(), sample_user());
        store.finish_loading();
        assert!(store.is_authenticated);
        assert_eq!(store.token.as_deref(), Some("tok-123"));
        assert_eq!(store.user.as_ref().unwrap().name, "Ada");

        store.clear();
        assert!(!store.is_authenticated);
        assert!(store.token.is_none());
        assert!(store.user.is_none());
        assert!(!store.loading);
    }

    #[test]
    fn clear_terminates_a_pending_bootstrap() {
        let mut store = SessionStore::default();
        assert!(store.loading);
        store.clear();
        assert!(!store.loading);
    }

    #[test]
    fn profile_update_replaces_snapshot_and_keeps_token() {
        let mut store = SessionStore::default();
        store.apply_login("tok-123".to_string(), sample_user());

        let mut updated = sample_user();
        updated.name = "Ada L.".to_string();
        updated.city = Some("Lyon".to_string());
        store.apply_profile(updated);

        assert_eq!(store.token.as_deref(), Some("tok-123"));
        assert_eq!(store.user.as_ref().unwrap().name, "Ada L.");
        assert_eq!(store.user.as_ref().unwrap().city.as_deref(), Some("Lyon"));
    }
}
