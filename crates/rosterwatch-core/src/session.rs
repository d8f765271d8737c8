// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::future::Future;
use std::sync::Arc;

use jid::FullJid;
use secrecy::SecretString;
use tokio::sync::mpsc;
use tracing::{error, info};

use crate::app::deps::{
    DynProfileResolver, DynRosterStore, DynSessionContext, SessionConfig, SessionContext,
    SessionDependencies,
};
use crate::app::event_handlers::{
    ConnectionEventHandler, MessagesEventHandler, PresenceEventHandler, RosterEventHandler,
    ServerEventHandlerQueue, SubscriptionEventHandler,
};
use crate::domain::messaging::services::MessagePrinter;
use crate::domain::presence::services::PresenceTracker;
use crate::domain::roster::repos::RosterStore;
use crate::domain::roster::services::RosterReconciler;
use crate::domain::shared::services::PresentationSink;
use crate::domain::subscriptions::services::SubscriptionNegotiator;
use crate::domain::user_profiles::services::ProfileResolver;
use crate::session_builder::SessionBuilder;
use crate::SessionError;

/// A single connection of one account. Connects, lists the roster and then reports roster,
/// presence, subscription and message events until it is shut down.
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    ctx: DynSessionContext,
    deps: SessionDependencies,
    store: DynRosterStore,
    reconciler: Arc<RosterReconciler>,
    profile_resolver: DynProfileResolver,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Creates a session on top of `deps` and installs its handlers in `event_handler_queue`.
    pub fn new(
        config: SessionConfig,
        deps: SessionDependencies,
        sink: Box<dyn PresentationSink>,
        event_handler_queue: &ServerEventHandlerQueue,
    ) -> Self {
        let ctx = Arc::new(SessionContext::new(config, sink));
        let store = Arc::new(RosterStore::new());

        let profile_resolver = Arc::new(ProfileResolver::new(
            ctx.clone(),
            store.clone(),
            deps.contact_list_service.clone(),
            deps.user_profile_service.clone(),
        ));
        let reconciler = Arc::new(RosterReconciler::new(
            ctx.clone(),
            store.clone(),
            deps.contact_list_service.clone(),
            profile_resolver.clone(),
        ));

        event_handler_queue.set_handlers(
            ctx.clone(),
            vec![
                Box::new(ConnectionEventHandler::new(ctx.clone())),
                Box::new(RosterEventHandler::new(reconciler.clone())),
                Box::new(SubscriptionEventHandler::new(
                    store.clone(),
                    Arc::new(SubscriptionNegotiator::new(ctx.clone())),
                )),
                Box::new(PresenceEventHandler::new(Arc::new(PresenceTracker::new(
                    ctx.clone(),
                    store.clone(),
                )))),
                Box::new(MessagesEventHandler::new(Arc::new(MessagePrinter::new(
                    ctx.clone(),
                )))),
            ],
        );

        Session {
            inner: Arc::new(SessionInner {
                ctx,
                deps,
                store,
                reconciler,
                profile_resolver,
            }),
        }
    }

    pub fn roster_store(&self) -> DynRosterStore {
        self.inner.store.clone()
    }

    /// Runs the session until `shutdown` resolves or a fatal error occurs. The connection is
    /// closed in either case. A session can only be run once.
    pub async fn run_until(
        &self,
        jid: &FullJid,
        password: SecretString,
        shutdown: impl Future<Output = ()>,
    ) -> Result<(), SessionError> {
        let Some(mut fatal_errors) = self.inner.ctx.take_fatal_errors() else {
            return Err(SessionError::AlreadyStarted);
        };

        let result = self.inner.run(jid, password, shutdown, &mut fatal_errors).await;

        if let Err(err) = &result {
            error!("Session aborted. {}", err);
        }

        self.inner.close().await;
        result
    }
}

impl SessionInner {
    async fn run(
        &self,
        jid: &FullJid,
        password: SecretString,
        shutdown: impl Future<Output = ()>,
        fatal_errors: &mut mpsc::UnboundedReceiver<SessionError>,
    ) -> Result<(), SessionError> {
        self.connect(jid, password).await?;
        self.announce_presence().await;
        self.load_roster().await;
        self.list_roster();
        self.perform_startup_actions().await;

        tokio::select! {
            _ = shutdown => {
                info!("Shutdown requested.");
                Ok(())
            },
            Some(err) = fatal_errors.recv() => Err(err),
        }
    }

    async fn connect(&self, jid: &FullJid, password: SecretString) -> Result<(), SessionError> {
        info!("Connecting as {}…", jid);

        if let Err(err) = self.deps.connection_service.connect(jid, password).await {
            self.ctx.present(format!("connecting... Error: {}", err));
            return Err(err.into());
        }

        self.ctx.present("connecting... Ok");
        Ok(())
    }

    async fn announce_presence(&self) {
        if let Err(err) = self
            .deps
            .account_service
            .send_presence(&self.ctx.config.initial_presence)
            .await
        {
            error!("Failed to send initial presence. {}", err);
        }
    }

    async fn load_roster(&self) {
        let entries = match self.deps.contact_list_service.load_roster().await {
            Ok(entries) => entries,
            Err(err) => {
                error!("Failed to load roster. {}", err);
                return;
            }
        };

        for entry in entries {
            self.reconciler.on_roster_push(entry).await;
        }
    }

    fn list_roster(&self) {
        for group in self.store.groups() {
            match &group {
                Some(group) => self.ctx.present(format!("*** {} ***", group)),
                None => self.ctx.present("*** Ungrouped ***"),
            }
            for entry in self.store.all_by_group(group.as_deref()) {
                self.ctx.present(format!("- {}", entry.display_name()));
            }
            self.ctx.present("");
        }
    }

    async fn perform_startup_actions(&self) {
        let actions = &self.ctx.config.startup_actions;

        if let Some(contact) = &actions.add_contact {
            info!("Adding {} to the roster…", contact.id);
            match self.deps.contact_list_service.add_contact(contact).await {
                Ok(()) => {
                    if let Err(err) = self
                        .deps
                        .contact_list_service
                        .request_subscription(&contact.id)
                        .await
                    {
                        error!(
                            "Failed to request presence subscription from {}. {}",
                            contact.id, err
                        );
                    }
                }
                Err(err) => error!("Failed to add {} to the roster. {}", contact.id, err),
            }
        }

        if let Some(message) = &actions.send_message {
            if let Err(err) = self.deps.account_service.send_message(message).await {
                error!("Failed to send message to {}. {}", message.to, err);
            }
        }
    }

    async fn close(&self) {
        self.ctx.cancel_pending_work();
        self.profile_resolver.wait_for_pending_lookups().await;
        self.deps.connection_service.disconnect().await;
        self.ctx.present("closing... Ok");
    }
}
