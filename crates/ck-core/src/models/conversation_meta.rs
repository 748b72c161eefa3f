use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Locally cached conversation metadata.
///
/// The backend owns the conversation itself; this is the lightweight record
/// kept client-side for list rendering and "last opened" restoration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMeta {
    pub id: String,
    pub user_id: String,
    pub title: Option<String>,
    pub last_message: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ConversationMeta {
    pub fn new(id: String, user_id: String, title: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            user_id,
            title,
            last_message: None,
            created_at: now,
            updated_at: now,
        }
    }
}
