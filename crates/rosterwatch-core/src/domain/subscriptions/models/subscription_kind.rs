// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use jid::BareJid;

use crate::domain::presence::models::PresenceType;
use crate::SessionError;

/// The four presence types that negotiate a presence subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubscriptionKind {
    SubscribeRequest,
    SubscribedConfirmation,
    UnsubscribeRequest,
    UnsubscribedConfirmation,
}

/// A subscription related presence as it arrived from the server.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionEvent {
    pub from: BareJid,
    pub display_name: Option<String>,
    pub kind: SubscriptionKind,
}

impl TryFrom<PresenceType> for SubscriptionKind {
    type Error = SessionError;

    fn try_from(value: PresenceType) -> Result<Self, Self::Error> {
        match value {
            PresenceType::Subscribe => Ok(SubscriptionKind::SubscribeRequest),
            PresenceType::Subscribed => Ok(SubscriptionKind::SubscribedConfirmation),
            PresenceType::Unsubscribe => Ok(SubscriptionKind::UnsubscribeRequest),
            PresenceType::Unsubscribed => Ok(SubscriptionKind::UnsubscribedConfirmation),
            PresenceType::Unavailable | PresenceType::Probe | PresenceType::Error => {
                Err(SessionError::ProtocolViolation {
                    msg: format!("Presence of type '{}' is not a subscription event", value),
                })
            }
        }
    }
}
