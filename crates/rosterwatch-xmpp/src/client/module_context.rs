// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::sync::Arc;
use std::task::Waker;
use std::time::Instant;

use anyhow::Result;
use jid::{BareJid, FullJid};
use minidom::Element;
use parking_lot::{Mutex, RwLock};
use tokio::sync::{mpsc, oneshot};
use tracing::debug;
use xmpp_parsers::iq::Iq;

use crate::client::builder::{missing_connector_provider, noop_event_handler};
use crate::client::{ConnectorProvider, EventHandler};
use crate::connector::Connection;
use crate::deps::{IDProvider, UUIDProvider};
use crate::util::{ModuleFutureState, RequestError, RequestFuture};
use crate::Event;

/// The slice of the client a module gets to see.
#[derive(Clone)]
pub struct ModuleContext {
    pub(super) inner: Arc<ModuleContextInner>,
}

impl ModuleContext {
    /// Sends `iq` and resolves with the payload of the matching response.
    pub(crate) fn send_iq(
        &self,
        iq: Iq,
    ) -> impl Future<Output = Result<Option<Element>, RequestError>> {
        let request = RequestFuture::new_iq_request(&iq.id);
        self.inner.track(request.state.clone());

        match self.send_stanza(iq) {
            Ok(()) => request,
            Err(err) => RequestFuture::failed(RequestError::Generic {
                msg: err.to_string(),
            }),
        }
    }

    pub(crate) fn send_stanza(&self, stanza: impl Into<Element>) -> Result<()> {
        self.inner.send_stanza(stanza)
    }

    pub(crate) fn disconnect(&self) {
        self.inner.disconnect()
    }

    pub(crate) fn bare_jid(&self) -> Option<BareJid> {
        self.inner.jid.read().as_ref().map(FullJid::to_bare)
    }

    pub(crate) fn generate_id(&self) -> String {
        self.inner.id_provider.new_id()
    }

    pub(crate) fn schedule_event(&self, event: Event) {
        self.inner.schedule_event(event)
    }
}

impl Default for ModuleContext {
    fn default() -> Self {
        ModuleContext {
            inner: Arc::new(ModuleContextInner::new(
                missing_connector_provider(),
                noop_event_handler(),
                Box::new(UUIDProvider),
            )),
        }
    }
}

pub(super) enum QueuedEvent {
    Event(Event),
    /// Answered once every event queued before it has been handled.
    Barrier(oneshot::Sender<()>),
}

/// An IQ request waiting for its response.
pub(super) struct PendingRequest {
    pub state: Arc<Mutex<dyn ModuleFutureState>>,
    pub issued_at: Instant,
}

pub(super) struct ModuleContextInner {
    pub jid: RwLock<Option<FullJid>>,
    pub connector_provider: ConnectorProvider,
    pub connection: RwLock<Option<Box<dyn Connection>>>,
    pub event_handler: EventHandler,
    pub event_sender: mpsc::UnboundedSender<QueuedEvent>,
    pub event_receiver: Mutex<Option<mpsc::UnboundedReceiver<QueuedEvent>>>,
    pub pending_requests: Mutex<Vec<PendingRequest>>,
    pub id_provider: Box<dyn IDProvider>,
}

impl ModuleContextInner {
    pub(super) fn new(
        connector_provider: ConnectorProvider,
        event_handler: EventHandler,
        id_provider: Box<dyn IDProvider>,
    ) -> Self {
        let (event_sender, event_receiver) = mpsc::unbounded_channel();

        ModuleContextInner {
            jid: RwLock::new(None),
            connector_provider,
            connection: RwLock::new(None),
            event_handler,
            event_sender,
            event_receiver: Mutex::new(Some(event_receiver)),
            pending_requests: Mutex::new(vec![]),
            id_provider,
        }
    }

    fn track(&self, state: Arc<Mutex<dyn ModuleFutureState>>) {
        self.pending_requests.lock().push(PendingRequest {
            state,
            issued_at: Instant::now(),
        });
    }

    pub(super) fn send_stanza(&self, stanza: impl Into<Element>) -> Result<()> {
        let connection = self.connection.read();
        let Some(connection) = connection.as_ref() else {
            return Err(RequestError::Disconnected.into());
        };
        let stanza = stanza.into();

        #[cfg(feature = "trace-stanzas")]
        debug!(">> {}", String::from(&stanza));

        connection.send_stanza(stanza)
    }

    pub(super) fn schedule_event(&self, event: Event) {
        if self.event_sender.send(QueuedEvent::Event(event)).is_err() {
            debug!("Event dispatch has stopped, dropping event.");
        }
    }

    pub(super) fn disconnect(&self) {
        let connection = self.connection.write().take();
        if let Some(connection) = connection {
            connection.disconnect();
            self.fail_pending_requests();
        }
    }

    /// Fails every outstanding request. Called once the connection is gone since no response
    /// can arrive anymore.
    pub(super) fn fail_pending_requests(&self) {
        let pending = std::mem::take(&mut *self.pending_requests.lock());
        let wakers: Vec<Waker> = pending
            .into_iter()
            .filter_map(|request| request.state.lock().fail_with_disconnect())
            .collect();
        wakers.into_iter().for_each(Waker::wake);
    }
}
