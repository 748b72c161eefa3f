use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outbound chat message payload.
///
/// Metadata is a plain JSON object by construction; size and reserved-key
/// rules are checked by `validation::validate_metadata`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub user_id: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Map<String, Value>>,
}

impl ChatRequest {
    pub fn new<U: Into<String>, M: Into<String>>(user_id: U, message: M) -> Self {
        Self {
            user_id: user_id.into(),
            message: message.into(),
            conversation_id: None,
            metadata: None,
        }
    }

    pub fn with_conversation<C: Into<String>>(mut self, conversation_id: C) -> Self {
        self.conversation_id = Some(conversation_id.into());
        self
    }

    pub fn with_metadata(mut self, metadata: Map<String, Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
