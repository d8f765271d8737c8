// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::fmt::{Debug, Formatter};
use std::sync::{Arc, Weak};
use std::task::Waker;
use std::time::Duration;

use anyhow::Result;
use jid::FullJid;
use minidom::Element;
use secrecy::Secret;
use tokio::sync::oneshot;
use tracing::{debug, error, warn};

use crate::client::builder::ClientBuilder;
use crate::client::module_context::{ModuleContextInner, PendingRequest, QueuedEvent};
use crate::client::{Event, ModuleRegistry};
use crate::connector::{Connection, ConnectionError, ConnectionEvent};
use crate::mods;
use crate::mods::AnyModule;
use crate::util::{InboundStanza, ModuleFuturePoll, PinnedFuture};
use crate::Event as ClientEvent;

/// Requests without a response after this long are failed on the next timeout tick.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// An XMPP client made of pluggable modules. Cloning is cheap and yields a handle to the
/// same connection.
#[derive(Clone)]
pub struct Client {
    pub(super) inner: Arc<ClientInner>,
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("jid", &*self.inner.context.jid.read())
            .field("connected", &self.is_connected())
            .finish()
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    pub async fn connect(
        &self,
        jid: &FullJid,
        password: Secret<String>,
    ) -> Result<(), ConnectionError> {
        ClientInner::connect(&self.inner, jid, password).await
    }

    pub fn disconnect(&self) {
        self.inner.context.disconnect()
    }

    pub fn is_connected(&self) -> bool {
        self.inner.context.connection.read().is_some()
    }

    /// Returns the module of type `M`.
    ///
    /// Panics if `M` was never added to the builder.
    pub fn get_mod<M: AnyModule + Clone>(&self) -> M {
        self.inner.module::<M>()
    }

    /// Resolves once every event that was scheduled before this call has been handed to the
    /// event handler and the handler's future has completed.
    pub async fn flush_events(&self) {
        let (tx, rx) = oneshot::channel();
        let barrier = QueuedEvent::Barrier(tx);
        if self.inner.context.event_sender.send(barrier).is_ok() {
            _ = rx.await;
        }
    }
}

pub(super) struct ClientInner {
    pub context: Arc<ModuleContextInner>,
    pub modules: Arc<ModuleRegistry>,
}

impl ClientInner {
    async fn connect(
        this: &Arc<Self>,
        jid: &FullJid,
        password: Secret<String>,
    ) -> Result<(), ConnectionError> {
        this.context.disconnect();
        Self::spawn_event_dispatch(this);

        this.context.jid.write().replace(jid.clone());

        let weak = Arc::downgrade(this);
        let handler = Box::new(move |_: &dyn Connection, event: ConnectionEvent| {
            match weak.upgrade() {
                Some(inner) => Box::pin(inner.on_connection_event(event)) as PinnedFuture<()>,
                None => Box::pin(async {}) as PinnedFuture<()>,
            }
        });

        let connector = (this.context.connector_provider)();
        let connection = connector.connect(jid, password, handler).await?;
        this.context.connection.write().replace(connection);

        for module in this.modules.values() {
            if let Err(err) = module.read().on_connect() {
                error!("Module failed to handle connect. {}", err);
            }
        }

        this.context
            .schedule_event(ClientEvent::Client(Event::Connected));
        Ok(())
    }

    fn module<M: AnyModule + Clone>(&self) -> M {
        let module = self
            .modules
            .get(&TypeId::of::<M>())
            .and_then(|entry| entry.read().as_any().downcast_ref::<M>().cloned());

        match module {
            Some(module) => module,
            None => panic!("{} is not registered", std::any::type_name::<M>()),
        }
    }

    /// Hands queued events to the event handler one at a time. Only a weak reference is held
    /// so the task ends together with the client.
    fn spawn_event_dispatch(this: &Arc<Self>) {
        let Some(mut receiver) = this.context.event_receiver.lock().take() else {
            return;
        };
        let weak: Weak<ClientInner> = Arc::downgrade(this);

        tokio::spawn(async move {
            while let Some(queued) = receiver.recv().await {
                let event = match queued {
                    QueuedEvent::Event(event) => event,
                    QueuedEvent::Barrier(tx) => {
                        _ = tx.send(());
                        continue;
                    }
                };
                let Some(inner) = weak.upgrade() else {
                    break;
                };
                let handled = (inner.context.event_handler)(
                    Client {
                        inner: Arc::clone(&inner),
                    },
                    event,
                );
                drop(inner);
                handled.await;
            }
            debug!("Event dispatch stopped.");
        });
    }

    async fn on_connection_event(self: Arc<Self>, event: ConnectionEvent) {
        match event {
            ConnectionEvent::Stanza(stanza) => self.on_stanza(stanza),
            ConnectionEvent::TimeoutTimer => self.expire_requests(),
            ConnectionEvent::PingTimer => {
                if let Err(err) = self.module::<mods::Ping>().send_ping().await {
                    warn!("Ping failed. {}", err)
                }
            }
            ConnectionEvent::Disconnected { error } => {
                self.context.connection.write().take();
                self.context.fail_pending_requests();
                self.context
                    .schedule_event(ClientEvent::Client(Event::Disconnected { error }))
            }
        }
    }

    fn on_stanza(&self, stanza: Element) {
        #[cfg(feature = "trace-stanzas")]
        debug!("<< {}", String::from(&stanza));

        let stanza = match InboundStanza::try_from(stanza) {
            Ok(stanza) => stanza,
            Err(err) => {
                error!("Dropping unparsable stanza. {}", err);
                return;
            }
        };

        // Responses complete their requests before modules see them, but the waiting tasks
        // are only woken after all modules had their turn.
        let wakers = self.resolve_requests(|request| match request.state.lock().offer(&stanza) {
            ModuleFuturePoll::Pending => None,
            ModuleFuturePoll::Ready(waker) => Some(waker),
        });

        for module in self.modules.values() {
            if let Err(err) = module.read().dispatch(&stanza) {
                error!("Module failed to handle stanza. {}", err);
            }
        }

        wakers.into_iter().for_each(Waker::wake);
    }

    fn expire_requests(&self) {
        let wakers = self.resolve_requests(|request| {
            if request.issued_at.elapsed() < REQUEST_TIMEOUT {
                return None;
            }
            Some(request.state.lock().fail_with_timeout())
        });
        wakers.into_iter().for_each(Waker::wake);
    }

    /// Removes every pending request for which `settle` returns `Some` and collects the
    /// wakers of the removed requests.
    fn resolve_requests(
        &self,
        mut settle: impl FnMut(&PendingRequest) -> Option<Option<Waker>>,
    ) -> Vec<Waker> {
        let mut wakers = vec![];
        self.context.pending_requests.lock().retain(|request| {
            match settle(request) {
                None => true,
                Some(waker) => {
                    wakers.extend(waker);
                    false
                }
            }
        });
        wakers
    }
}
