// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::app::deps::DynSessionContext;
use crate::domain::messaging::models::{IncomingMessage, MessageKind};

pub struct MessagePrinter {
    ctx: DynSessionContext,
}

impl MessagePrinter {
    pub fn new(ctx: DynSessionContext) -> Self {
        Self { ctx }
    }

    pub fn on_message(&self, message: &IncomingMessage) -> String {
        let line = match &message.kind {
            MessageKind::Regular => format!(
                "{}: {}",
                message
                    .from
                    .as_ref()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
                message.body.as_deref().unwrap_or_default()
            ),
            MessageKind::Error { stanza } => format!("Error: {}", stanza),
        };

        self.ctx.present(&line);
        line
    }
}
