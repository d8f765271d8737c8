// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use connection_event_handler::ConnectionEventHandler;
pub use event_handler_queue::ServerEventHandlerQueue;
pub use messages_event_handler::MessagesEventHandler;
pub use presence_event_handler::PresenceEventHandler;
pub use roster_event_handler::RosterEventHandler;
pub use server_event::*;
pub use subscription_event_handler::SubscriptionEventHandler;

mod connection_event_handler;
mod event_handler_queue;
mod messages_event_handler;
mod presence_event_handler;
mod roster_event_handler;
mod server_event;
mod subscription_event_handler;

/// `ServerEventHandler` is a trait representing a handler for events coming from the server.
///
/// If a handler returns `None`, the event has been consumed and is not passed on. If it returns
/// `Some(event)`, the event is handed to the next handler in the queue.
#[async_trait]
pub trait ServerEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>>;
}
