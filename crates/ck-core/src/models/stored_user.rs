use serde::{Deserialize, Serialize};

/// User record mirrored from the backend auth response.
///
/// Persisted next to the bearer token and cleared together with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredUser {
    pub id: String,
    pub name: String,
    pub email: String,
}
