// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::roster;

use crate::domain::roster::models::{PendingRequest, RosterEntry, Subscription};

impl From<roster::Item> for RosterEntry {
    fn from(value: roster::Item) -> Self {
        RosterEntry {
            id: value.jid,
            name: value.name.filter(|name| !name.trim().is_empty()),
            subscription: value.subscription.into(),
            pending: value.ask.into(),
            groups: value.groups.into_iter().map(|group| group.0).collect(),
        }
    }
}

impl From<roster::Subscription> for Subscription {
    fn from(value: roster::Subscription) -> Self {
        match value {
            roster::Subscription::None => Subscription::None,
            roster::Subscription::From => Subscription::From,
            roster::Subscription::To => Subscription::To,
            roster::Subscription::Both => Subscription::Both,
            roster::Subscription::Remove => Subscription::Remove,
        }
    }
}

impl From<roster::Ask> for PendingRequest {
    fn from(value: roster::Ask) -> Self {
        match value {
            roster::Ask::None => PendingRequest::None,
            roster::Ask::Subscribe => PendingRequest::Subscribe,
        }
    }
}
