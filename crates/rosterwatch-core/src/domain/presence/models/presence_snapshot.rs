// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use strum_macros::{Display, EnumString};

/// The last presence we received from a contact. A missing `type_` means that the contact
/// is available.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresenceSnapshot {
    pub type_: Option<PresenceType>,
    pub show: Option<Show>,
    pub status: Option<String>,
    pub priority: Option<i8>,
}

/// RFC 6121: 4.7.1. Type Attribute. Availability is expressed by the absence of a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PresenceType {
    Unavailable,
    Subscribe,
    Subscribed,
    Unsubscribe,
    Unsubscribed,
    Probe,
    Error,
}

/// RFC 6121: 4.7.2.1. Show Element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Show {
    Away,
    Chat,
    Dnd,
    Xa,
}

impl PresenceSnapshot {
    pub fn available() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, type_: PresenceType) -> Self {
        self.type_ = Some(type_);
        self
    }

    pub fn with_show(mut self, show: Show) -> Self {
        self.show = Some(show);
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_priority(mut self, priority: i8) -> Self {
        self.priority = Some(priority);
        self
    }
}
