use crate::{ChatError, ErrorKind, FailureCause};

use serde_json::json;

fn classify(cause: FailureCause) -> ChatError {
    ChatError::from(cause)
}

fn status_cause(status: u16) -> FailureCause {
    FailureCause::Status {
        status,
        message: Some(format!("status {status} message")),
        body: None,
    }
}

// =========================================================================
// Classification
// =========================================================================

#[test]
fn given_status_401_when_classified_then_authentication() {
    let err = classify(status_cause(401));

    assert_eq!(err.kind(), ErrorKind::Authentication);
    assert_eq!(err.status(), Some(401));
}

#[test]
fn given_status_403_when_classified_then_authentication() {
    let err = classify(status_cause(403));

    assert_eq!(err.kind(), ErrorKind::Authentication);
}

#[test]
fn given_status_422_when_classified_then_validation() {
    let err = classify(status_cause(422));

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.status(), Some(422));
}

#[test]
fn given_status_429_when_classified_then_server() {
    let err = classify(status_cause(429));

    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.status(), Some(429));
}

#[test]
fn given_status_500_when_classified_then_server() {
    let err = classify(status_cause(500));

    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.status(), Some(500));
}

#[test]
fn given_gateway_statuses_when_classified_then_server() {
    for status in [502, 503, 504] {
        let err = classify(status_cause(status));
        assert_eq!(err.kind(), ErrorKind::Server);
    }
}

#[test]
fn given_unrecognized_status_when_classified_then_server() {
    let err = classify(status_cause(418));

    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.status(), Some(418));
}

#[test]
fn given_status_without_message_when_classified_then_synthesized_message() {
    let err = classify(FailureCause::Status {
        status: 500,
        message: None,
        body: None,
    });

    assert!(err.user_message().contains("HTTP 500"));
}

#[test]
fn given_transport_failure_when_classified_then_network() {
    let err = classify(FailureCause::Transport {
        message: String::from("connection refused"),
    });

    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.status(), None);
}

#[test]
fn given_classified_error_when_classified_again_then_unchanged() {
    let original = ChatError::validation("message too long");
    let message_before = original.user_message();

    let err = classify(FailureCause::Classified(original));

    assert_eq!(err.kind(), ErrorKind::Validation);
    assert_eq!(err.user_message(), message_before);
}

#[test]
fn given_status_with_body_when_classified_then_details_kept() {
    let err = classify(FailureCause::Status {
        status: 422,
        message: Some(String::from("invalid payload")),
        body: Some(json!({"detail": "invalid payload"})),
    });

    match err {
        ChatError::Validation { details, .. } => {
            assert_eq!(details.unwrap()["detail"], "invalid payload");
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

// =========================================================================
// Display formatting
// =========================================================================

#[test]
fn given_validation_error_when_formatted_then_prefixed() {
    let err = ChatError::validation("message too long");

    assert_eq!(err.user_message(), "Validation error: message too long");
}

#[test]
fn given_server_error_when_formatted_then_service_prefix() {
    let err = ChatError::server("upstream exploded");

    assert_eq!(err.user_message(), "Service error: upstream exploded");
}

#[test]
fn given_unknown_error_when_formatted_then_error_prefix() {
    let err = ChatError::unknown("something odd");

    assert_eq!(err.user_message(), "Error: something odd");
}

#[test]
fn given_authentication_error_when_formatted_then_message_as_is() {
    let err = ChatError::authentication("Session expired. Please log in again.");

    assert_eq!(err.user_message(), "Session expired. Please log in again.");
}

#[test]
fn given_network_error_when_formatted_then_message_as_is() {
    let err = ChatError::network("Unable to reach the server");

    assert_eq!(err.user_message(), "Unable to reach the server");
}
