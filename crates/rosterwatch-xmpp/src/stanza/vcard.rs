// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use minidom::Element;

use crate::{ns, ElementExt, ParseError};

/// XEP-0054 vcard-temp, reduced to the identity fields a roster cares about. Photos,
/// addresses, phone numbers and the like are ignored while parsing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VCard {
    /// `<FN/>`
    pub formatted_name: Option<String>,
    /// `<N><GIVEN/></N>`
    pub given_name: Option<String>,
    /// `<N><FAMILY/></N>`
    pub family_name: Option<String>,
    /// `<NICKNAME/>` split at commas, in document order.
    pub nicknames: Vec<String>,
}

impl VCard {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// `<FN/>` if present, otherwise given and family name joined by a space.
    pub fn full_name(&self) -> Option<String> {
        if let Some(name) = &self.formatted_name {
            return Some(name.clone());
        }
        let parts = [&self.given_name, &self.family_name]
            .into_iter()
            .flatten()
            .map(String::as_str)
            .collect::<Vec<_>>();
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

impl TryFrom<&Element> for VCard {
    type Error = ParseError;

    fn try_from(elem: &Element) -> Result<Self, Self::Error> {
        elem.expect_is("vCard", ns::VCARD_TEMP)?;

        let structured = elem.get_child("N", ns::VCARD_TEMP);

        Ok(VCard {
            formatted_name: elem.child_text("FN"),
            given_name: structured.and_then(|n| n.child_text("GIVEN")),
            family_name: structured.and_then(|n| n.child_text("FAMILY")),
            nicknames: elem
                .child_text("NICKNAME")
                .map(|list| {
                    list.split(',')
                        .map(str::trim)
                        .filter(|nick| !nick.is_empty())
                        .map(ToString::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        })
    }
}

impl TryFrom<Element> for VCard {
    type Error = ParseError;

    fn try_from(elem: Element) -> Result<Self, Self::Error> {
        Self::try_from(&elem)
    }
}
