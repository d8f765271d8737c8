// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::any::TypeId;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use jid::FullJid;
use parking_lot::RwLock;
use secrecy::Secret;

use crate::client::client::ClientInner;
use crate::client::module_context::ModuleContextInner;
use crate::client::{ConnectorProvider, EventHandler, ModuleContext, ModuleRegistry};
use crate::connector::{Connection, ConnectionError, ConnectionEventHandler, Connector};
use crate::deps::{IDProvider, UUIDProvider};
use crate::mods::AnyModule;
use crate::util::PinnedFuture;
use crate::{mods, Client, Event};

/// Placeholder used until a real connector is configured. Every attempt fails.
pub(crate) struct MissingConnector;

pub struct ClientBuilder {
    connector_provider: ConnectorProvider,
    event_handler: EventHandler,
    id_provider: Box<dyn IDProvider>,
    modules: ModuleRegistry,
}

impl ClientBuilder {
    pub(super) fn new() -> Self {
        let builder = ClientBuilder {
            connector_provider: missing_connector_provider(),
            event_handler: noop_event_handler(),
            id_provider: Box::new(UUIDProvider),
            modules: ModuleRegistry::new(),
        };
        // Answering server pings is not optional.
        builder.add_mod(mods::Ping::default())
    }

    pub fn set_connector_provider(self, connector_provider: ConnectorProvider) -> Self {
        Self {
            connector_provider,
            ..self
        }
    }

    pub fn set_id_provider(self, id_provider: impl IDProvider + 'static) -> Self {
        Self {
            id_provider: Box::new(id_provider),
            ..self
        }
    }

    /// The handler runs for one event at a time, in the order the underlying stanzas
    /// arrived. The next event waits until the returned future completed.
    pub fn set_event_handler<F, Fut>(self, handler: F) -> Self
    where
        F: Fn(Client, Event) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            event_handler: Box::new(move |client, event| {
                Box::pin(handler(client, event)) as PinnedFuture<()>
            }),
            ..self
        }
    }

    pub fn add_mod<M: AnyModule + Clone>(mut self, module: M) -> Self {
        self.modules
            .insert(TypeId::of::<M>(), RwLock::new(Box::new(module)));
        self
    }

    pub fn build(self) -> Client {
        let context = Arc::new(ModuleContextInner::new(
            self.connector_provider,
            self.event_handler,
            self.id_provider,
        ));

        for module in self.modules.values() {
            module.write().attach(ModuleContext {
                inner: Arc::clone(&context),
            });
        }

        Client {
            inner: Arc::new(ClientInner {
                context,
                modules: Arc::new(self.modules),
            }),
        }
    }
}

pub(super) fn missing_connector_provider() -> ConnectorProvider {
    Box::new(|| Box::new(MissingConnector))
}

pub(super) fn noop_event_handler() -> EventHandler {
    Box::new(|_, _| Box::pin(async {}) as PinnedFuture<()>)
}

#[async_trait]
impl Connector for MissingConnector {
    async fn connect(
        &self,
        _jid: &FullJid,
        _password: Secret<String>,
        _event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn Connection>, ConnectionError> {
        Err(ConnectionError::Generic {
            msg: "No connector configured for this client".to_string(),
        })
    }
}
