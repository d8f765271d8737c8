// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::OnceLock;

use tracing::{error, warn};

use crate::app::deps::DynSessionContext;
use crate::app::event_handlers::{ServerEvent, ServerEventHandler};
use crate::SessionError;

/// Runs every `ServerEvent` through the registered handlers, one event at a time.
pub struct ServerEventHandlerQueue {
    inner: OnceLock<QueueInner>,
}

struct QueueInner {
    ctx: DynSessionContext,
    handlers: Vec<Box<dyn ServerEventHandler>>,
}

impl ServerEventHandlerQueue {
    pub fn new() -> Self {
        Self {
            inner: Default::default(),
        }
    }

    /// Installs the handlers. Can only be called once, subsequent calls are ignored.
    pub fn set_handlers(&self, ctx: DynSessionContext, handlers: Vec<Box<dyn ServerEventHandler>>) {
        if self.inner.set(QueueInner { ctx, handlers }).is_err() {
            warn!("Handlers were already set in ServerEventHandlerQueue");
        }
    }

    pub async fn handle_event(&self, event: ServerEvent) {
        let Some(inner) = self.inner.get() else {
            warn!("Dropping event since no handlers are installed. {:?}", event);
            return;
        };

        let mut event = event;

        for handler in inner.handlers.iter() {
            match handler.handle_event(event).await {
                Ok(None) => return,
                Ok(Some(e)) => event = e,
                Err(err) => {
                    error!(
                        "Event handler '{}' aborted with error: {}",
                        handler.name(),
                        err.to_string()
                    );
                    if let Some(fatal_error) = err.downcast_ref::<SessionError>() {
                        inner.ctx.abort_session(fatal_error.clone());
                    }
                    return;
                }
            }
        }
    }

    /// Logs an event that could not be translated. Fatal errors end the session.
    pub fn handle_parse_error(&self, err: anyhow::Error) {
        error!("Failed to parse event. {}", err);

        let Some(fatal_error) = err.downcast_ref::<SessionError>() else {
            return;
        };
        let Some(inner) = self.inner.get() else {
            warn!("Dropping fatal error since no handlers are installed. {}", fatal_error);
            return;
        };
        inner.ctx.abort_session(fatal_error.clone());
    }
}

impl Default for ServerEventHandlerQueue {
    fn default() -> Self {
        Self::new()
    }
}
