// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use xmpp_parsers::presence;
use xmpp_parsers::presence::Presence;

use crate::domain::presence::models::{PresenceSnapshot, PresenceType, Show};

impl From<&Presence> for PresenceSnapshot {
    fn from(value: &Presence) -> Self {
        PresenceSnapshot {
            type_: presence_type(&value.type_),
            show: value.show.clone().map(Into::into),
            status: value
                .statuses
                .get("")
                .or_else(|| value.statuses.values().next())
                .cloned(),
            // The protocol defaults the priority to 0, so a 0 is indistinguishable from none.
            priority: (value.priority != 0).then_some(value.priority),
        }
    }
}

/// Returns `None` for an available presence.
pub(crate) fn presence_type(value: &presence::Type) -> Option<PresenceType> {
    match value {
        presence::Type::None => None,
        presence::Type::Error => Some(PresenceType::Error),
        presence::Type::Probe => Some(PresenceType::Probe),
        presence::Type::Subscribe => Some(PresenceType::Subscribe),
        presence::Type::Subscribed => Some(PresenceType::Subscribed),
        presence::Type::Unavailable => Some(PresenceType::Unavailable),
        presence::Type::Unsubscribe => Some(PresenceType::Unsubscribe),
        presence::Type::Unsubscribed => Some(PresenceType::Unsubscribed),
    }
}

impl From<presence::Show> for Show {
    fn from(value: presence::Show) -> Self {
        match value {
            presence::Show::Away => Show::Away,
            presence::Show::Chat => Show::Chat,
            presence::Show::Dnd => Show::Dnd,
            presence::Show::Xa => Show::Xa,
        }
    }
}

impl From<Show> for presence::Show {
    fn from(value: Show) -> Self {
        match value {
            Show::Away => presence::Show::Away,
            Show::Chat => presence::Show::Chat,
            Show::Dnd => presence::Show::Dnd,
            Show::Xa => presence::Show::Xa,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use anyhow::Result;
    use minidom::Element;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_converts_presence() -> Result<()> {
        let presence = Presence::try_from(Element::from_str(
            r#"<presence xmlns="jabber:client" from="a@rosterwatch.org/phone">
              <show>away</show>
              <status>Out for lunch</status>
              <priority>5</priority>
            </presence>"#,
        )?)?;

        assert_eq!(
            PresenceSnapshot::from(&presence),
            PresenceSnapshot::available()
                .with_show(Show::Away)
                .with_status("Out for lunch")
                .with_priority(5)
        );

        Ok(())
    }

    #[test]
    fn test_converts_unavailable_presence() -> Result<()> {
        let presence = Presence::try_from(Element::from_str(
            r#"<presence xmlns="jabber:client" from="a@rosterwatch.org/phone" type="unavailable"/>"#,
        )?)?;

        assert_eq!(
            PresenceSnapshot::from(&presence),
            PresenceSnapshot::available().with_type(PresenceType::Unavailable)
        );

        Ok(())
    }
}
