// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use pretty_assertions::assert_eq;

use rosterwatch_core::app::deps::SessionConfig;
use rosterwatch_core::app::event_handlers::{
    ServerEvent, ServerEventHandlerQueue, SubscriptionEventHandler,
};
use rosterwatch_core::domain::presence::models::PresenceType;
use rosterwatch_core::domain::roster::models::RosterEntry;
use rosterwatch_core::domain::roster::repos::RosterStore;
use rosterwatch_core::domain::subscriptions::models::{SubscriptionEvent, SubscriptionKind};
use rosterwatch_core::domain::subscriptions::services::SubscriptionNegotiator;
use rosterwatch_core::test::recording_context;
use rosterwatch_xmpp::bare;

#[test]
fn test_describes_each_kind() {
    let (ctx, sink) = recording_context(SessionConfig::default());
    let negotiator = SubscriptionNegotiator::new(ctx);

    for kind in [
        SubscriptionKind::SubscribeRequest,
        SubscriptionKind::SubscribedConfirmation,
        SubscriptionKind::UnsubscribeRequest,
        SubscriptionKind::UnsubscribedConfirmation,
    ] {
        negotiator.on_subscription_event(&SubscriptionEvent {
            from: bare!("a@rosterwatch.org"),
            display_name: None,
            kind,
        });
    }

    negotiator.on_subscription_event(&SubscriptionEvent {
        from: bare!("b@rosterwatch.org"),
        display_name: Some("Bob".to_string()),
        kind: SubscriptionKind::SubscribeRequest,
    });

    assert_eq!(
        sink.lines(),
        vec![
            "Subscription request from a@rosterwatch.org",
            "Subscribed to a@rosterwatch.org",
            "Unsubscription request from a@rosterwatch.org",
            "Unsubscribed from a@rosterwatch.org",
            "Subscription request from Bob (b@rosterwatch.org)",
        ]
    );
}

#[tokio::test]
async fn test_handler_looks_up_display_name() {
    let (ctx, sink) = recording_context(SessionConfig::default());
    let store = Arc::new(RosterStore::new());
    let id = bare!("a@rosterwatch.org");
    store.upsert(&id, RosterEntry::new(id.clone()).with_name("Alice"));

    let queue = ServerEventHandlerQueue::new();
    queue.set_handlers(
        ctx.clone(),
        vec![Box::new(SubscriptionEventHandler::new(
            store,
            Arc::new(SubscriptionNegotiator::new(ctx)),
        ))],
    );

    queue
        .handle_event(ServerEvent::Subscription {
            from: id,
            type_: PresenceType::Subscribed,
        })
        .await;

    assert_eq!(sink.lines(), vec!["Subscribed to Alice (a@rosterwatch.org)"]);
}
