// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::stanza_error::{DefinedCondition, StanzaError};

/// Why an IQ request did not produce a usable answer.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("No response within the request deadline")]
    TimedOut,
    #[error("Connection went away before a response arrived")]
    Disconnected,
    #[error("Server responded with an unexpected payload")]
    UnexpectedResponse,
    #[error("Server returned an error: {err:?}")]
    Stanza { err: StanzaError },
    #[error("Could not send request: {msg}")]
    Generic { msg: String },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed element: {msg}")]
    Generic { msg: String },
    #[error(transparent)]
    Parsers(#[from] xmpp_parsers::Error),
}

impl From<xmpp_parsers::Error> for RequestError {
    fn from(err: xmpp_parsers::Error) -> Self {
        ParseError::from(err).into()
    }
}

impl RequestError {
    /// The stanza error condition the server replied with, if any.
    pub fn condition(&self) -> Option<&DefinedCondition> {
        match self {
            Self::Stanza { err } => Some(&err.defined_condition),
            _ => None,
        }
    }

    pub fn is_item_not_found_err(&self) -> bool {
        self.condition() == Some(&DefinedCondition::ItemNotFound)
    }
}
