/**
 * Client Session State
 *
 * Tracks the logged-in user and the current token pair. Logout clears the
 * configuration store too, so no stale per-user state survives into the
 * next session.
 */

use crate::client::store::ConfigStore;
use crate::shared::api::{AuthResponse, TokenResponse};
use crate::shared::config::User;

#[derive(Debug, Default)]
pub struct Session {
    user: Option<User>,
    access_token: Option<String>,
    refresh_token: Option<String>,
    loading: bool,
    error: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_deref()
    }

    pub fn refresh_token(&self) -> Option<&str> {
        self.refresh_token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.access_token.is_some()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.error = error;
    }

    /// Install the session from a login or register response. The caller
    /// feeds `response.user_config` into the config store separately.
    pub fn apply_login(&mut self, response: &AuthResponse) {
        self.user = Some(response.user.clone());
        self.access_token = Some(response.access_token.clone());
        self.refresh_token = Some(response.refresh_token.clone());
        self.loading = false;
        self.error = None;
    }

    /// Swap in a rotated token pair.
    pub fn apply_refresh(&mut self, response: &TokenResponse) {
        self.access_token = Some(response.access_token.clone());
        self.refresh_token = Some(response.refresh_token.clone());
    }

    /// End the session and clear per-user configuration state.
    pub fn logout(&mut self, store: &mut ConfigStore) {
        self.user = None;
        self.access_token = None;
        self.refresh_token = None;
        self.loading = false;
        self.error = None;
        store.reset();
    }
}
