// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::app::event_handlers::{ServerEvent, ServerEventHandler};
use crate::domain::roster::services::RosterReconciler;

/// Feeds roster pushes into the `RosterReconciler`.
pub struct RosterEventHandler {
    reconciler: Arc<RosterReconciler>,
}

impl RosterEventHandler {
    pub fn new(reconciler: Arc<RosterReconciler>) -> Self {
        Self { reconciler }
    }
}

#[async_trait]
impl ServerEventHandler for RosterEventHandler {
    fn name(&self) -> &'static str {
        "roster"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::RosterPush { entry } => {
                self.reconciler.on_roster_push(entry).await;
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
