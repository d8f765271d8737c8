// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::BTreeSet;
use std::fmt::Formatter;

use itertools::Itertools;
use jid::BareJid;
use strum_macros::Display;

/// A contact on our roster as last pushed by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    pub id: BareJid,
    pub name: Option<String>,
    pub subscription: Subscription,
    pub pending: PendingRequest,
    pub groups: BTreeSet<String>,
}

/// RFC 6121: 2.1.2.5. Subscription Attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Subscription {
    #[default]
    None,
    To,
    From,
    Both,
    Remove,
}

/// An outbound request that the contact has not answered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display)]
#[strum(serialize_all = "lowercase")]
pub enum PendingRequest {
    #[default]
    None,
    Subscribe,
    Unsubscribe,
}

impl RosterEntry {
    pub fn new(id: BareJid) -> Self {
        RosterEntry {
            id,
            name: None,
            subscription: Default::default(),
            pending: Default::default(),
            groups: Default::default(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscription = subscription;
        self
    }

    pub fn with_pending(mut self, pending: PendingRequest) -> Self {
        self.pending = pending;
        self
    }

    pub fn with_groups<I, S>(mut self, groups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.groups = groups.into_iter().map(Into::into).collect();
        self
    }

    /// Whether we should ask the contact for their presence, i.e. we don't receive it yet
    /// and haven't already asked for it.
    pub fn wants_presence_subscription(&self) -> bool {
        matches!(self.subscription, Subscription::None | Subscription::From)
            && self.pending != PendingRequest::Subscribe
    }

    /// `"{name} ({id})"` if the entry has a name, otherwise just the id.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => format!("{} ({})", name, self.id),
            None => self.id.to_string(),
        }
    }
}

impl std::fmt::Display for RosterEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if let Some(name) = &self.name {
            write!(f, "{} ", name)?;
        }
        write!(f, "({}, {})", self.id, self.subscription)?;
        if !self.groups.is_empty() {
            write!(f, " {}", self.groups.iter().join(", "))?;
        }
        Ok(())
    }
}
