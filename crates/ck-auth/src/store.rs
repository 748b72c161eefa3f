use std::sync::Arc;

use ck_core::{KeyValueStore, StoredUser};
use log::warn;

/// Storage key for the bearer token
pub const TOKEN_KEY: &str = "ck_auth_token";
/// Storage key for the serialized user record
pub const USER_KEY: &str = "ck_auth_user";

/// Last-write-wins mirror of the bearer token and user record.
///
/// The token is an opaque string owned by the backend: no expiry check, no
/// signature validation. Storage failures read as absence.
#[derive(Clone)]
pub struct AuthStore {
    store: Arc<dyn KeyValueStore>,
}

impl AuthStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist the token and user record together.
    pub fn store_auth(&self, token: &str, user: &StoredUser) {
        self.store.set(TOKEN_KEY, token);
        match serde_json::to_string(user) {
            Ok(encoded) => self.store.set(USER_KEY, &encoded),
            Err(e) => warn!("Failed to encode stored user: {}", e),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY)
    }

    /// The persisted user record. Corrupt entries read as absent.
    pub fn stored_user(&self) -> Option<StoredUser> {
        let encoded = self.store.get(USER_KEY)?;
        match serde_json::from_str(&encoded) {
            Ok(user) => Some(user),
            Err(e) => {
                warn!("Discarding corrupt stored user record: {}", e);
                None
            }
        }
    }

    /// Remove both the token and the user record.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }
}
