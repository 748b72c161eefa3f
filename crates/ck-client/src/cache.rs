use std::sync::Arc;

use chrono::Utc;
use ck_core::{ConversationMeta, KeyValueStore};
use log::warn;

/// Storage key for the aggregate conversation list
pub const CONVERSATIONS_KEY: &str = "ck_conversations";
/// Storage key for the currently open conversation id
pub const CURRENT_CONVERSATION_KEY: &str = "ck_current_conversation";
/// Prefix for the per-user last-opened conversation key
pub const LAST_CONVERSATION_PREFIX: &str = "ck_last_conversation";

/// Conversation metadata cache over the key-value port.
///
/// Every operation is a synchronous read-modify-write pass over the full
/// persisted list; concurrent writers race with last-write-wins semantics.
/// Parse failures are logged and read as an empty store.
pub struct ConversationCache {
    store: Arc<dyn KeyValueStore>,
}

impl ConversationCache {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    fn read_all(&self) -> Vec<ConversationMeta> {
        let Some(encoded) = self.store.get(CONVERSATIONS_KEY) else {
            return Vec::new();
        };

        match serde_json::from_str(&encoded) {
            Ok(conversations) => conversations,
            Err(e) => {
                warn!("Discarding corrupt conversation cache: {}", e);
                Vec::new()
            }
        }
    }

    fn write_all(&self, conversations: &[ConversationMeta]) {
        match serde_json::to_string(conversations) {
            Ok(encoded) => self.store.set(CONVERSATIONS_KEY, &encoded),
            Err(e) => warn!("Failed to encode conversation cache: {}", e),
        }
    }

    /// Conversations cached for one user
    pub fn user_conversations(&self, user_id: &str) -> Vec<ConversationMeta> {
        self.read_all()
            .into_iter()
            .filter(|c| c.user_id == user_id)
            .collect()
    }

    /// Upsert by id: an existing entry keeps its created_at and gets a fresh
    /// updated_at; a new entry is stamped with both.
    pub fn save(&self, meta: ConversationMeta) {
        let mut conversations = self.read_all();

        match conversations.iter_mut().find(|c| c.id == meta.id) {
            Some(existing) => {
                existing.user_id = meta.user_id;
                existing.title = meta.title;
                existing.last_message = meta.last_message;
                existing.updated_at = Utc::now();
            }
            None => {
                let mut meta = meta;
                let now = Utc::now();
                meta.created_at = now;
                meta.updated_at = now;
                conversations.push(meta);
            }
        }

        self.write_all(&conversations);
    }

    /// Remove one conversation within a user's scope
    pub fn remove(&self, id: &str, user_id: &str) {
        let mut conversations = self.read_all();
        conversations.retain(|c| !(c.id == id && c.user_id == user_id));
        self.write_all(&conversations);
    }

    /// Drop every conversation for a user.
    ///
    /// Clears the current-conversation pointer if it referenced one of the
    /// dropped entries, and forgets the user's last-opened conversation.
    pub fn clear_user(&self, user_id: &str) {
        let conversations = self.read_all();

        if let Some(current) = self.current() {
            let owned = conversations
                .iter()
                .any(|c| c.user_id == user_id && c.id == current);
            if owned {
                self.store.remove(CURRENT_CONVERSATION_KEY);
            }
        }

        let remaining: Vec<ConversationMeta> = conversations
            .into_iter()
            .filter(|c| c.user_id != user_id)
            .collect();
        self.write_all(&remaining);

        self.store.remove(&Self::last_conversation_key(user_id));
    }

    pub fn set_current(&self, id: &str) {
        self.store.set(CURRENT_CONVERSATION_KEY, id);
    }

    pub fn current(&self) -> Option<String> {
        self.store.get(CURRENT_CONVERSATION_KEY)
    }

    /// Remember the last conversation a user had open
    pub fn set_last_conversation(&self, user_id: &str, id: &str) {
        self.store.set(&Self::last_conversation_key(user_id), id);
    }

    pub fn last_conversation(&self, user_id: &str) -> Option<String> {
        self.store.get(&Self::last_conversation_key(user_id))
    }

    fn last_conversation_key(user_id: &str) -> String {
        format!("{LAST_CONVERSATION_PREFIX}:{user_id}")
    }
}
