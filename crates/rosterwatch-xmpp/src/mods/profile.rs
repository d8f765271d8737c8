// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use jid::{BareJid, Jid};
use minidom::Element;
use xmpp_parsers::iq::{Iq, IqType};

use crate::client::ModuleContext;
use crate::mods::Module;
use crate::ns;
use crate::stanza::VCard;

/// XEP-0054: vcard-temp
#[derive(Default, Clone)]
pub struct Profile {
    ctx: ModuleContext,
}

impl Module for Profile {
    fn attach(&mut self, context: ModuleContext) {
        self.ctx = context;
    }
}

impl Profile {
    /// Returns `None` if the contact has no vCard or the server answered with an empty
    /// result.
    pub async fn load_vcard_temp(&self, from: impl Into<BareJid>) -> Result<Option<VCard>> {
        let iq = Iq {
            from: None,
            to: Some(Jid::from(from.into())),
            id: self.ctx.generate_id(),
            payload: IqType::Get(Element::builder("vCard", ns::VCARD_TEMP).build()),
        };

        let vcard = match self.ctx.send_iq(iq).await {
            Ok(Some(payload)) => VCard::try_from(payload)?,
            Ok(None) => return Ok(None),
            Err(e) if e.is_item_not_found_err() => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        Ok(Some(vcard))
    }
}
