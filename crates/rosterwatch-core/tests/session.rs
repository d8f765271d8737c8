// rosterwatch/rosterwatch-core
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;
use secrecy::Secret;

use rosterwatch_core::app::deps::{SessionConfig, StartupActions};
use rosterwatch_core::app::event_handlers::{ConnectionEvent, ServerEvent, ServerEventHandlerQueue};
use rosterwatch_core::domain::account::models::OwnPresence;
use rosterwatch_core::domain::messaging::models::OutgoingMessage;
use rosterwatch_core::domain::presence::models::PresenceType;
use rosterwatch_core::domain::roster::models::{NewContact, RosterEntry, Subscription};
use rosterwatch_core::test::{MockSessionDependencies, RecordingSink};
use rosterwatch_core::{Session, SessionError};
use rosterwatch_xmpp::{bare, full, ConnectionError};

/// Dependencies of a session that connects successfully and has an empty roster.
fn connecting_deps() -> MockSessionDependencies {
    let mut deps = MockSessionDependencies::default();
    deps.connection_service
        .expect_connect()
        .once()
        .returning(|_, _| Box::pin(async { Ok(()) }));
    deps.connection_service
        .expect_disconnect()
        .once()
        .returning(|| Box::pin(async {}));
    deps.account_service
        .expect_send_presence()
        .returning(|_| Box::pin(async { Ok(()) }));
    deps
}

fn session(
    config: SessionConfig,
    deps: MockSessionDependencies,
) -> (Session, ServerEventHandlerQueue, RecordingSink) {
    let queue = ServerEventHandlerQueue::new();
    let sink = RecordingSink::default();
    let session = Session::new(config, deps.into_deps(), Box::new(sink.clone()), &queue);
    (session, queue, sink)
}

#[tokio::test]
async fn test_authentication_failure_is_fatal() -> Result<()> {
    let mut deps = MockSessionDependencies::default();
    deps.connection_service
        .expect_connect()
        .once()
        .returning(|_, _| Box::pin(async { Err(ConnectionError::InvalidCredentials) }));
    deps.connection_service
        .expect_disconnect()
        .once()
        .returning(|| Box::pin(async {}));
    deps.account_service.expect_send_presence().never();
    deps.contact_list_service.expect_load_roster().never();

    let (session, _queue, sink) = session(SessionConfig::default(), deps);

    let result = session
        .run_until(
            &full!("test@rosterwatch.org/cli"),
            Secret::new("wrong".to_string()),
            async {},
        )
        .await;

    assert_eq!(result, Err(SessionError::AuthenticationFailed));
    assert_eq!(
        sink.lines(),
        vec!["connecting... Error: Invalid credentials", "closing... Ok"]
    );

    Ok(())
}

#[tokio::test]
async fn test_lists_roster_by_group() -> Result<()> {
    let mut deps = connecting_deps();
    deps.account_service.checkpoint();
    deps.account_service
        .expect_send_presence()
        .once()
        .withf(|presence| presence == &OwnPresence::default())
        .returning(|_| Box::pin(async { Ok(()) }));
    deps.contact_list_service
        .expect_load_roster()
        .once()
        .returning(|| {
            Box::pin(async {
                Ok(vec![
                    RosterEntry::new(bare!("a@rosterwatch.org"))
                        .with_name("Alice")
                        .with_subscription(Subscription::Both)
                        .with_groups(["Work", "Friends"]),
                    RosterEntry::new(bare!("c@rosterwatch.org"))
                        .with_name("Carol")
                        .with_subscription(Subscription::Both),
                    RosterEntry::new(bare!("b@rosterwatch.org")),
                ])
            })
        });
    deps.contact_list_service
        .expect_request_subscription()
        .once()
        .withf(|id| id == &bare!("b@rosterwatch.org"))
        .returning(|_| Box::pin(async { Ok(()) }));

    let (session, _queue, sink) = session(SessionConfig::default(), deps);

    session
        .run_until(
            &full!("test@rosterwatch.org/cli"),
            Secret::new("secret".to_string()),
            async {},
        )
        .await?;

    assert_eq!(
        sink.lines(),
        vec![
            "connecting... Ok",
            "Discovered Alice (a@rosterwatch.org, both) Friends, Work",
            "Discovered Carol (c@rosterwatch.org, both)",
            "Subscribing to b@rosterwatch.org",
            "Discovered (b@rosterwatch.org, none)",
            "*** Friends ***",
            "- Alice (a@rosterwatch.org)",
            "",
            "*** Work ***",
            "- Alice (a@rosterwatch.org)",
            "",
            "*** Ungrouped ***",
            "- b@rosterwatch.org",
            "- Carol (c@rosterwatch.org)",
            "",
            "closing... Ok",
        ]
    );
    assert_eq!(session.roster_store().len(), 3);

    Ok(())
}

#[tokio::test]
async fn test_performs_startup_actions() -> Result<()> {
    let mut deps = connecting_deps();
    deps.contact_list_service
        .expect_load_roster()
        .returning(|| Box::pin(async { Ok(vec![]) }));
    deps.contact_list_service
        .expect_add_contact()
        .once()
        .withf(|contact| {
            contact.id == bare!("friend@rosterwatch.org")
                && contact.name.as_deref() == Some("Friend")
        })
        .returning(|_| Box::pin(async { Ok(()) }));
    deps.contact_list_service
        .expect_request_subscription()
        .once()
        .withf(|id| id == &bare!("friend@rosterwatch.org"))
        .returning(|_| Box::pin(async { Ok(()) }));
    deps.account_service
        .expect_send_message()
        .once()
        .withf(|message| {
            message.to == bare!("friend@rosterwatch.org")
                && message.body == "Hello"
                && message.subject.as_deref() == Some("Greetings")
        })
        .returning(|_| Box::pin(async { Ok(()) }));

    let config = SessionConfig {
        startup_actions: StartupActions {
            add_contact: Some(NewContact {
                id: bare!("friend@rosterwatch.org"),
                name: Some("Friend".to_string()),
                groups: vec![],
            }),
            send_message: Some(OutgoingMessage {
                to: bare!("friend@rosterwatch.org"),
                body: "Hello".to_string(),
                subject: Some("Greetings".to_string()),
            }),
        },
        ..Default::default()
    };

    let (session, _queue, _sink) = session(config, deps);

    session
        .run_until(
            &full!("test@rosterwatch.org/cli"),
            Secret::new("secret".to_string()),
            async {},
        )
        .await?;

    Ok(())
}

#[tokio::test]
async fn test_disconnect_is_fatal() -> Result<()> {
    let mut deps = connecting_deps();
    deps.contact_list_service
        .expect_load_roster()
        .returning(|| Box::pin(async { Ok(vec![]) }));

    let (session, queue, sink) = session(SessionConfig::default(), deps);

    queue
        .handle_event(ServerEvent::Connection(ConnectionEvent::Disconnected {
            error: Some(ConnectionError::Generic {
                msg: "stream closed".to_string(),
            }),
        }))
        .await;

    let result = session
        .run_until(
            &full!("test@rosterwatch.org/cli"),
            Secret::new("secret".to_string()),
            std::future::pending(),
        )
        .await;

    assert_eq!(
        result,
        Err(SessionError::Disconnected {
            reason: "stream closed".to_string()
        })
    );
    assert_eq!(sink.lines().last().map(String::as_str), Some("closing... Ok"));

    Ok(())
}

#[tokio::test]
async fn test_malformed_subscription_kind_is_fatal() -> Result<()> {
    let mut deps = connecting_deps();
    deps.contact_list_service
        .expect_load_roster()
        .returning(|| Box::pin(async { Ok(vec![]) }));

    let (session, queue, _sink) = session(SessionConfig::default(), deps);

    queue
        .handle_event(ServerEvent::Subscription {
            from: bare!("a@rosterwatch.org"),
            type_: PresenceType::Probe,
        })
        .await;

    let result = session
        .run_until(
            &full!("test@rosterwatch.org/cli"),
            Secret::new("secret".to_string()),
            std::future::pending(),
        )
        .await;

    assert_eq!(
        result,
        Err(SessionError::ProtocolViolation {
            msg: "Presence of type 'probe' is not a subscription event".to_string()
        })
    );

    Ok(())
}

#[tokio::test]
async fn test_session_runs_only_once() -> Result<()> {
    let mut deps = connecting_deps();
    deps.contact_list_service
        .expect_load_roster()
        .returning(|| Box::pin(async { Ok(vec![]) }));

    let (session, _queue, _sink) = session(SessionConfig::default(), deps);

    session
        .run_until(
            &full!("test@rosterwatch.org/cli"),
            Secret::new("secret".to_string()),
            async {},
        )
        .await?;

    assert_eq!(
        session
            .run_until(
                &full!("test@rosterwatch.org/cli"),
                Secret::new("secret".to_string()),
                async {},
            )
            .await,
        Err(SessionError::AlreadyStarted)
    );

    Ok(())
}
