use crate::ChatRequest;
use crate::validation::{
    MAX_MESSAGE_CHARS, prepare_chat_request, sanitize_message, validate_chat_request,
    validate_conversation_id, validate_message, validate_metadata, validate_user_id,
};

use serde_json::{Map, Value, json};
use uuid::Uuid;

fn valid_user_id() -> String {
    Uuid::new_v4().to_string()
}

fn valid_request() -> ChatRequest {
    ChatRequest::new(valid_user_id(), "Hello there")
}

// =========================================================================
// Message validation
// =========================================================================

#[test]
fn given_plain_message_when_validated_then_valid() {
    let result = validate_message("What reminders do I have today?");

    assert!(result.is_valid());
    assert!(result.errors.is_empty());
    assert!(result.warnings.is_empty());
}

#[test]
fn given_empty_message_when_validated_then_invalid() {
    let result = validate_message("");

    assert!(!result.is_valid());
    assert!(!result.errors.is_empty());
}

#[test]
fn given_whitespace_message_when_validated_then_invalid() {
    let result = validate_message("   ");

    assert!(!result.is_valid());
    assert!(!result.errors.is_empty());
}

#[test]
fn given_message_at_limit_when_validated_then_valid() {
    let message = "a".repeat(MAX_MESSAGE_CHARS);

    let result = validate_message(&message);

    assert!(result.is_valid());
}

#[test]
fn given_overlong_message_when_validated_then_single_length_error() {
    let message = "a".repeat(MAX_MESSAGE_CHARS + 1);

    let result = validate_message(&message);

    assert!(!result.is_valid());
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("4001"));
}

#[test]
fn given_markup_characters_when_validated_then_warning_not_error() {
    let result = validate_message("a <b> & \"c\"");

    assert!(result.is_valid());
    assert_eq!(result.warnings.len(), 1);
}

// =========================================================================
// User id validation
// =========================================================================

#[test]
fn given_uuid_v4_when_user_id_validated_then_valid() {
    let result = validate_user_id(&valid_user_id());

    assert!(result.is_valid());
}

#[test]
fn given_empty_user_id_when_validated_then_invalid() {
    let result = validate_user_id("");

    assert!(!result.is_valid());
}

#[test]
fn given_non_uuid_user_id_when_validated_then_invalid() {
    let result = validate_user_id("not-a-uuid");

    assert!(!result.is_valid());
}

#[test]
fn given_uuid_with_wrong_version_when_validated_then_invalid() {
    // Version nibble 1 instead of 4
    let result = validate_user_id("00000000-0000-1000-8000-000000000000");

    assert!(!result.is_valid());
}

#[test]
fn given_simple_form_uuid_when_validated_then_invalid() {
    let simple = Uuid::new_v4().simple().to_string();

    let result = validate_user_id(&simple);

    assert!(!result.is_valid());
}

#[test]
fn given_overlong_user_id_when_validated_then_invalid() {
    let result = validate_user_id(&"a".repeat(101));

    assert!(!result.is_valid());
}

// =========================================================================
// Conversation id validation
// =========================================================================

#[test]
fn given_conversation_id_at_limit_when_validated_then_valid() {
    let result = validate_conversation_id(&"c".repeat(100));

    assert!(result.is_valid());
}

#[test]
fn given_overlong_conversation_id_when_validated_then_invalid() {
    let result = validate_conversation_id(&"c".repeat(101));

    assert!(!result.is_valid());
}

#[test]
fn given_empty_conversation_id_when_validated_then_invalid() {
    let result = validate_conversation_id("");

    assert!(!result.is_valid());
}

// =========================================================================
// Metadata validation
// =========================================================================

fn metadata_from(value: Value) -> Map<String, Value> {
    value.as_object().unwrap().clone()
}

#[test]
fn given_small_metadata_when_validated_then_valid() {
    let metadata = metadata_from(json!({"source": "desktop", "attempt": 1}));

    let result = validate_metadata(&metadata);

    assert!(result.is_valid());
}

#[test]
fn given_reserved_key_when_validated_then_invalid() {
    let metadata = metadata_from(json!({"__proto__": {"polluted": true}}));

    let result = validate_metadata(&metadata);

    assert!(!result.is_valid());
    assert!(result.errors[0].contains("__proto__"));
}

#[test]
fn given_oversized_metadata_when_validated_then_invalid() {
    let metadata = metadata_from(json!({"blob": "x".repeat(11 * 1024)}));

    let result = validate_metadata(&metadata);

    assert!(!result.is_valid());
}

// =========================================================================
// Composite validation
// =========================================================================

#[test]
fn given_valid_request_when_validated_then_valid() {
    let result = validate_chat_request(&valid_request());

    assert!(result.is_valid());
}

#[test]
fn given_multiple_invalid_fields_when_validated_then_all_errors_collected() {
    let request = ChatRequest::new("bad-id", "").with_conversation("c".repeat(101));

    let result = validate_chat_request(&request);

    // Empty message, malformed user id, overlong conversation id
    assert_eq!(result.errors.len(), 3);
}

// =========================================================================
// Sanitization
// =========================================================================

#[test]
fn given_angle_brackets_when_sanitized_then_stripped() {
    assert_eq!(sanitize_message("a<script>b</script>c"), "ascriptb/scriptc");
}

#[test]
fn given_escapable_characters_when_sanitized_then_entity_encoded() {
    assert_eq!(
        sanitize_message("Tom & Jerry's \"show\""),
        "Tom &amp; Jerry&#x27;s &quot;show&quot;"
    );
}

#[test]
fn given_clean_message_when_sanitized_then_unchanged() {
    assert_eq!(sanitize_message("hello world"), "hello world");
}

#[test]
fn given_valid_markup_message_when_prepared_then_sanitized() {
    let mut request = valid_request();
    request.message = String::from("<b>5</b> & \"done\" isn't");

    let (prepared, validation) = prepare_chat_request(&request);

    assert!(validation.is_valid());
    assert!(!prepared.message.contains('<'));
    assert!(!prepared.message.contains('>'));
    assert!(prepared.message.contains("&amp;"));
    assert!(prepared.message.contains("&quot;"));
    assert!(prepared.message.contains("&#x27;"));
}

#[test]
fn given_invalid_request_when_prepared_then_message_untouched() {
    let request = ChatRequest::new("bad-id", "raw <text>");

    let (prepared, validation) = prepare_chat_request(&request);

    assert!(!validation.is_valid());
    assert_eq!(prepared.message, "raw <text>");
}
