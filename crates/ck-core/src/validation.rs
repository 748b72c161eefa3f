use crate::ChatRequest;

use serde_json::{Map, Value};
use uuid::{Uuid, Version};

// Validation constraints
pub const MAX_MESSAGE_CHARS: usize = 4000;
pub const MAX_CONVERSATION_ID_CHARS: usize = 100;
pub const MAX_USER_ID_CHARS: usize = 100;
pub const MAX_METADATA_BYTES: usize = 10 * 1024;

/// Keys that would collide with object internals on the consuming side
pub const RESERVED_METADATA_KEYS: [&str; 3] = ["__proto__", "constructor", "prototype"];

/// Characters that sanitization strips or escapes
const MARKUP_CHARS: [char; 5] = ['<', '>', '\'', '"', '&'];

/// Outcome of a validation pass.
///
/// Warnings never block a request; errors do. Validity is derived from the
/// error list so the two can never disagree.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Validate a chat message body.
///
/// Markup characters are a warning only — they are escaped by
/// [`sanitize_message`], not rejected.
pub fn validate_message(message: &str) -> ValidationResult {
    let mut result = ValidationResult::default();

    if message.trim().is_empty() {
        result.errors.push(String::from("Message cannot be empty"));
    }

    let length = message.chars().count();
    if length > MAX_MESSAGE_CHARS {
        result.errors.push(format!(
            "Message exceeds the {MAX_MESSAGE_CHARS} character limit (got {length})"
        ));
    }

    if message.contains(&MARKUP_CHARS[..]) {
        result
            .warnings
            .push(String::from("Message contains markup characters that will be escaped"));
    }

    result
}

/// Validate a conversation id. Only called when the request carries one.
pub fn validate_conversation_id(conversation_id: &str) -> ValidationResult {
    let mut result = ValidationResult::default();

    if conversation_id.is_empty() {
        result
            .errors
            .push(String::from("Conversation ID cannot be empty"));
    } else if conversation_id.chars().count() > MAX_CONVERSATION_ID_CHARS {
        result.errors.push(format!(
            "Conversation ID exceeds the {MAX_CONVERSATION_ID_CHARS} character limit"
        ));
    }

    result
}

/// Validate a user id: a hyphenated UUID v4.
pub fn validate_user_id(user_id: &str) -> ValidationResult {
    let mut result = ValidationResult::default();

    if user_id.is_empty() {
        result.errors.push(String::from("User ID is required"));
        return result;
    }

    if user_id.chars().count() > MAX_USER_ID_CHARS {
        result.errors.push(format!(
            "User ID exceeds the {MAX_USER_ID_CHARS} character limit"
        ));
        return result;
    }

    // Uuid::try_parse also accepts braced/simple/urn forms; require the
    // 36-char hyphenated shape the backend issues.
    let well_formed = user_id.len() == 36
        && Uuid::try_parse(user_id)
            .map(|u| u.get_version() == Some(Version::Random))
            .unwrap_or(false);

    if !well_formed {
        result
            .errors
            .push(String::from("User ID must be a valid UUID"));
    }

    result
}

/// Validate request metadata: bounded size, no reserved keys.
pub fn validate_metadata(metadata: &Map<String, Value>) -> ValidationResult {
    let mut result = ValidationResult::default();

    for key in RESERVED_METADATA_KEYS {
        if metadata.contains_key(key) {
            result
                .errors
                .push(format!("Metadata key '{key}' is not allowed"));
        }
    }

    match serde_json::to_string(metadata) {
        Ok(encoded) if encoded.len() > MAX_METADATA_BYTES => {
            result.errors.push(format!(
                "Metadata exceeds the {MAX_METADATA_BYTES} byte limit"
            ));
        }
        Ok(_) => {}
        Err(_) => {
            result
                .errors
                .push(String::from("Metadata could not be serialized"));
        }
    }

    result
}

/// Run every field validator and concatenate the results.
///
/// Deliberately does not short-circuit: the caller gets the full list of
/// problems in one pass.
pub fn validate_chat_request(request: &ChatRequest) -> ValidationResult {
    let mut result = validate_message(&request.message);
    result.merge(validate_user_id(&request.user_id));

    if let Some(ref conversation_id) = request.conversation_id {
        result.merge(validate_conversation_id(conversation_id));
    }

    if let Some(ref metadata) = request.metadata {
        result.merge(validate_metadata(metadata));
    }

    result
}

/// Strip angle brackets and escape the remaining markup characters.
///
/// Unconditional transform, independent of validation outcome.
pub fn sanitize_message(message: &str) -> String {
    let mut sanitized = String::with_capacity(message.len());
    for ch in message.chars() {
        match ch {
            '<' | '>' => {}
            '&' => sanitized.push_str("&amp;"),
            '"' => sanitized.push_str("&quot;"),
            '\'' => sanitized.push_str("&#x27;"),
            _ => sanitized.push(ch),
        }
    }
    sanitized
}

/// Validate, then sanitize the message only when the request is valid.
///
/// Callers must check `ValidationResult::is_valid` before trusting the
/// returned request.
pub fn prepare_chat_request(request: &ChatRequest) -> (ChatRequest, ValidationResult) {
    let validation = validate_chat_request(request);

    let mut prepared = request.clone();
    if validation.is_valid() {
        prepared.message = sanitize_message(&prepared.message);
    }

    (prepared, validation)
}
