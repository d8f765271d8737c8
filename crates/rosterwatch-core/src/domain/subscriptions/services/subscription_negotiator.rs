// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::app::deps::DynSessionContext;
use crate::domain::subscriptions::models::{SubscriptionEvent, SubscriptionKind};

/// Reports incoming subscription requests and answers. Requests are never answered
/// automatically.
pub struct SubscriptionNegotiator {
    ctx: DynSessionContext,
}

impl SubscriptionNegotiator {
    pub fn new(ctx: DynSessionContext) -> Self {
        Self { ctx }
    }

    pub fn on_subscription_event(&self, event: &SubscriptionEvent) -> String {
        let name = match &event.display_name {
            Some(display_name) => format!("{} ({})", display_name, event.from),
            None => event.from.to_string(),
        };

        let line = match event.kind {
            SubscriptionKind::SubscribeRequest => format!("Subscription request from {}", name),
            SubscriptionKind::SubscribedConfirmation => format!("Subscribed to {}", name),
            SubscriptionKind::UnsubscribeRequest => {
                format!("Unsubscription request from {}", name)
            }
            SubscriptionKind::UnsubscribedConfirmation => format!("Unsubscribed from {}", name),
        };

        self.ctx.present(&line);
        line
    }
}
