// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::app::event_handlers::{ServerEvent, ServerEventHandler};
use crate::domain::messaging::services::MessagePrinter;

pub struct MessagesEventHandler {
    printer: Arc<MessagePrinter>,
}

impl MessagesEventHandler {
    pub fn new(printer: Arc<MessagePrinter>) -> Self {
        Self { printer }
    }
}

#[async_trait]
impl ServerEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Message(message) => {
                self.printer.on_message(&message);
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
