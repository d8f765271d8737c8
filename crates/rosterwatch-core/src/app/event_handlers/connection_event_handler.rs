// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use crate::app::deps::DynSessionContext;
use crate::app::event_handlers::{ConnectionEvent, ServerEvent, ServerEventHandler};
use crate::SessionError;

/// Turns an unexpected loss of the connection into a fatal session error.
pub struct ConnectionEventHandler {
    ctx: DynSessionContext,
}

impl ConnectionEventHandler {
    pub fn new(ctx: DynSessionContext) -> Self {
        Self { ctx }
    }
}

#[async_trait]
impl ServerEventHandler for ConnectionEventHandler {
    fn name(&self) -> &'static str {
        "connection"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Connection(event) => self.handle_connection_event(event)?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl ConnectionEventHandler {
    fn handle_connection_event(&self, event: ConnectionEvent) -> Result<()> {
        match event {
            ConnectionEvent::Connected => {
                // The session reports the outcome of `connect` itself.
            }
            ConnectionEvent::Disconnected { error } => {
                if self.ctx.is_shutting_down() {
                    info!("Connection closed.");
                    return Ok(());
                }

                return Err(SessionError::Disconnected {
                    reason: error
                        .map(|err| err.to_string())
                        .unwrap_or_else(|| "Connection closed by server".to_string()),
                }
                .into());
            }
        }
        Ok(())
    }
}
