// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::app::deps::DynRosterStore;
use crate::app::event_handlers::{ServerEvent, ServerEventHandler};
use crate::domain::subscriptions::models::{SubscriptionEvent, SubscriptionKind};
use crate::domain::subscriptions::services::SubscriptionNegotiator;

/// Classifies subscription presences and hands them to the `SubscriptionNegotiator`. A
/// presence type that doesn't negotiate a subscription fails the handler with a
/// `SessionError::ProtocolViolation`.
pub struct SubscriptionEventHandler {
    store: DynRosterStore,
    negotiator: Arc<SubscriptionNegotiator>,
}

impl SubscriptionEventHandler {
    pub fn new(store: DynRosterStore, negotiator: Arc<SubscriptionNegotiator>) -> Self {
        Self { store, negotiator }
    }
}

#[async_trait]
impl ServerEventHandler for SubscriptionEventHandler {
    fn name(&self) -> &'static str {
        "subscription"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Subscription { from, type_ } => {
                let kind = SubscriptionKind::try_from(type_)?;
                let display_name = self.store.get(&from).and_then(|entry| entry.name);

                self.negotiator.on_subscription_event(&SubscriptionEvent {
                    from,
                    display_name,
                    kind,
                });
            }
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}
