// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::info;
use xmpp_parsers::iq::{Iq, IqType};
use xmpp_parsers::ping;

use crate::client::ModuleContext;
use crate::mods::Module;
use crate::ns;
use crate::util::{acknowledge, RequestError};

/// XEP-0199: answers server pings and keeps the stream alive with our own.
#[derive(Default, Clone)]
pub(crate) struct Ping {
    ctx: ModuleContext,
}

impl Module for Ping {
    fn attach(&mut self, context: ModuleContext) {
        self.ctx = context
    }

    fn on_iq(&self, iq: &Iq) -> Result<()> {
        match &iq.payload {
            IqType::Get(payload) if payload.is("ping", ns::PING) => {
                self.ctx.send_stanza(acknowledge(iq))
            }
            _ => Ok(()),
        }
    }
}

impl Ping {
    /// A ping that goes unanswered means the stream is dead, so the connection is dropped.
    pub async fn send_ping(&self) -> Result<()> {
        let request = Iq::from_get(self.ctx.generate_id(), ping::Ping);

        match self.ctx.send_iq(request).await {
            Err(RequestError::TimedOut) => {
                info!("Server did not answer our ping, disconnecting.");
                self.ctx.disconnect();
                Ok(())
            }
            Err(err) => Err(err.into()),
            Ok(_) => Ok(()),
        }
    }
}
