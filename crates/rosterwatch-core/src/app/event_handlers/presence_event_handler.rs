// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::app::event_handlers::{ServerEvent, ServerEventHandler};
use crate::domain::presence::services::PresenceTracker;

pub struct PresenceEventHandler {
    tracker: Arc<PresenceTracker>,
}

impl PresenceEventHandler {
    pub fn new(tracker: Arc<PresenceTracker>) -> Self {
        Self { tracker }
    }
}

#[async_trait]
impl ServerEventHandler for PresenceEventHandler {
    fn name(&self) -> &'static str {
        "presence"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Presence { from, presence } => {
                self.tracker.on_presence(&from, presence);
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
