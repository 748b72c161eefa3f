pub mod error;
pub mod models;
pub mod storage;
pub mod validation;

pub use error::{ChatError, ErrorKind, FailureCause, Result};
pub use models::chat_request::ChatRequest;
pub use models::conversation_meta::ConversationMeta;
pub use models::stored_user::StoredUser;
pub use storage::{FileStore, KeyValueStore, MemoryStore, NoopStore};
pub use validation::ValidationResult;

#[cfg(test)]
mod tests;
