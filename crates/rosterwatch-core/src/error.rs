// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use rosterwatch_xmpp::ConnectionError;

/// Errors that end the session. Any other error raised while handling an event only drops
/// that event.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SessionError {
    #[error("Authentication failed")]
    AuthenticationFailed,
    #[error("Could not connect: {msg}")]
    ConnectionFailed { msg: String },
    #[error("Connection lost: {reason}")]
    Disconnected { reason: String },
    #[error("Protocol violation: {msg}")]
    ProtocolViolation { msg: String },
    #[error("The session was already started")]
    AlreadyStarted,
}

impl From<ConnectionError> for SessionError {
    fn from(value: ConnectionError) -> Self {
        match value {
            ConnectionError::InvalidCredentials => SessionError::AuthenticationFailed,
            ConnectionError::TimedOut => SessionError::ConnectionFailed {
                msg: "timed out".to_string(),
            },
            ConnectionError::Generic { msg } => SessionError::ConnectionFailed { msg },
        }
    }
}
