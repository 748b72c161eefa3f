use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use serde_json::Value;
use thiserror::Error;

/// Failure categories surfaced to UI code.
///
/// The kind fully determines how [`ChatError::user_message`] formats the
/// display string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Authentication,
    Network,
    Validation,
    Server,
    Unknown,
}

/// Typed error raised by the client layer.
///
/// HTTP-born variants keep the response status and the raw error body so
/// callers can inspect what the backend actually said.
#[derive(Error, Debug)]
pub enum ChatError {
    #[error("Authentication error: {message} {location}")]
    Authentication {
        message: String,
        status: Option<u16>,
        details: Option<Value>,
        location: ErrorLocation,
    },

    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        status: Option<u16>,
        details: Option<Value>,
        location: ErrorLocation,
    },

    #[error("Service error: {message} {location}")]
    Server {
        message: String,
        status: Option<u16>,
        details: Option<Value>,
        location: ErrorLocation,
    },

    #[error("Error: {message} {location}")]
    Unknown {
        message: String,
        location: ErrorLocation,
    },
}

impl ChatError {
    /// Create an authentication error
    #[track_caller]
    pub fn authentication<S: Into<String>>(message: S) -> Self {
        ChatError::Authentication {
            message: message.into(),
            status: None,
            details: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a network error
    #[track_caller]
    pub fn network<S: Into<String>>(message: S) -> Self {
        ChatError::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a validation error
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        ChatError::Validation {
            message: message.into(),
            status: None,
            details: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a validation error carrying the rejected fields
    #[track_caller]
    pub fn validation_with_details<S: Into<String>>(message: S, details: Value) -> Self {
        ChatError::Validation {
            message: message.into(),
            status: None,
            details: Some(details),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a server error
    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        ChatError::Server {
            message: message.into(),
            status: None,
            details: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create an unknown error
    #[track_caller]
    pub fn unknown<S: Into<String>>(message: S) -> Self {
        ChatError::Unknown {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Authentication { .. } => ErrorKind::Authentication,
            Self::Network { .. } => ErrorKind::Network,
            Self::Validation { .. } => ErrorKind::Validation,
            Self::Server { .. } => ErrorKind::Server,
            Self::Unknown { .. } => ErrorKind::Unknown,
        }
    }

    /// HTTP status that produced this error, when it came from a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Authentication { status, .. }
            | Self::Validation { status, .. }
            | Self::Server { status, .. } => *status,
            Self::Network { .. } | Self::Unknown { .. } => None,
        }
    }

    /// Display string for end users, formatted by kind.
    ///
    /// Authentication and network messages are already user-facing and pass
    /// through unprefixed.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation { message, .. } => format!("Validation error: {message}"),
            Self::Server { message, .. } => format!("Service error: {message}"),
            Self::Unknown { message, .. } => format!("Error: {message}"),
            Self::Authentication { message, .. } | Self::Network { message, .. } => {
                message.clone()
            }
        }
    }
}

/// Raw failure cause, built at the call boundary before classification.
///
/// Replaces loose shape-sniffing of error-like values with a closed set of
/// origins: the transport failed, the server answered with a non-success
/// status, or the error was already classified upstream.
#[derive(Debug)]
pub enum FailureCause {
    Transport {
        message: String,
    },
    Status {
        status: u16,
        message: Option<String>,
        body: Option<Value>,
    },
    Classified(ChatError),
}

impl From<FailureCause> for ChatError {
    #[track_caller]
    fn from(cause: FailureCause) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match cause {
            // Idempotent: an already classified error passes through unchanged
            FailureCause::Classified(err) => err,

            FailureCause::Transport { message } => ChatError::Network { message, location },

            FailureCause::Status {
                status,
                message,
                body,
            } => {
                let message = message.unwrap_or_else(|| format!("HTTP {status}"));
                match status {
                    401 | 403 => ChatError::Authentication {
                        message,
                        status: Some(status),
                        details: body,
                        location,
                    },
                    422 => ChatError::Validation {
                        message,
                        status: Some(status),
                        details: body,
                        location,
                    },
                    429 => ChatError::Server {
                        message: String::from("Too many requests. Please wait and try again."),
                        status: Some(status),
                        details: body,
                        location,
                    },
                    _ => ChatError::Server {
                        message,
                        status: Some(status),
                        details: body,
                        location,
                    },
                }
            }
        }
    }
}

pub type Result<T> = StdResult<T, ChatError>;
