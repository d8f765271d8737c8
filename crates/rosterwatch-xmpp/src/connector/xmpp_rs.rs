// rosterwatch/rosterwatch-xmpp
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use futures::stream::{SplitSink, SplitStream};
use futures::{SinkExt, StreamExt};
use jid::FullJid;
use minidom::Element;
use secrecy::{ExposeSecret, Secret};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time;
use tokio_xmpp::{AsyncClient, Error, Event, Packet};
use tracing::{error, warn};

use crate::client::ConnectorProvider;
use crate::connector::{
    Connection as ConnectionTrait, ConnectionError, ConnectionEvent, ConnectionEventHandler,
    Connector as ConnectorTrait,
};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
const PING_INTERVAL: Duration = Duration::from_secs(60);
const TIMEOUT_CHECK_INTERVAL: Duration = Duration::from_secs(2);

type SharedHandler = Arc<ConnectionEventHandler>;

/// Connects to a real XMPP server via tokio-xmpp, which takes care of STARTTLS, SASL and
/// resource binding. Automatic reconnects are disabled.
pub struct Connector;

impl Connector {
    pub fn provider() -> ConnectorProvider {
        Box::new(|| Box::new(Connector))
    }
}

#[async_trait]
impl ConnectorTrait for Connector {
    async fn connect(
        &self,
        jid: &FullJid,
        password: Secret<String>,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn ConnectionTrait>, ConnectionError> {
        let mut client = AsyncClient::new(jid.clone(), password.expose_secret().as_str());
        client.set_reconnect(false);

        time::timeout(CONNECT_TIMEOUT, wait_until_online(&mut client))
            .await
            .map_err(|_| ConnectionError::TimedOut)??;

        Ok(Box::new(Connection::start(client, event_handler)))
    }
}

async fn wait_until_online(client: &mut AsyncClient) -> Result<(), ConnectionError> {
    loop {
        let Some(event) = client.next().await else {
            return Err(ConnectionError::Generic {
                msg: "Stream ended before the session was established".to_string(),
            });
        };

        match event {
            Event::Online { .. } => return Ok(()),
            Event::Disconnected(Error::Auth(_)) => return Err(ConnectionError::InvalidCredentials),
            Event::Disconnected(err) => {
                return Err(ConnectionError::Generic {
                    msg: err.to_string(),
                })
            }
            Event::Stanza(stanza) => {
                return Err(ConnectionError::Generic {
                    msg: format!("Stanza received before the session was established: {:?}", stanza),
                })
            }
        }
    }
}

/// A live stream. Outgoing packets go through a channel to a writer task. Incoming events are
/// read by a separate task and handed to the event handler.
pub struct Connection {
    link: Link,
    timers: Vec<JoinHandle<()>>,
}

/// The sending half handed to the event handler.
#[derive(Clone)]
struct Link {
    packets: UnboundedSender<Packet>,
}

impl Link {
    fn send(&self, packet: Packet) -> Result<()> {
        self.packets.send(packet)?;
        Ok(())
    }

    fn end_stream(&self) {
        if let Err(err) = self.send(Packet::StreamEnd) {
            warn!("Could not end stream. {}", err);
        }
    }
}

impl Connection {
    fn start(client: AsyncClient, event_handler: ConnectionEventHandler) -> Self {
        let (packets, queue) = mpsc::unbounded_channel();
        let link = Link { packets };
        let handler: SharedHandler = Arc::new(event_handler);
        let (sink, stream) = client.split();

        tokio::spawn(write_packets(sink, queue));
        tokio::spawn(read_events(stream, link.clone(), handler.clone()));

        let timers = vec![
            spawn_timer(link.clone(), handler.clone(), PING_INTERVAL, || {
                ConnectionEvent::PingTimer
            }),
            spawn_timer(link.clone(), handler, TIMEOUT_CHECK_INTERVAL, || {
                ConnectionEvent::TimeoutTimer
            }),
        ];

        Connection { link, timers }
    }

    fn stop_timers(&self) {
        self.timers.iter().for_each(JoinHandle::abort);
    }
}

/// Events are handled one after the other so the client sees stanzas in the order the
/// server sent them.
async fn read_events(mut stream: SplitStream<AsyncClient>, link: Link, handler: SharedHandler) {
    let mut error = None;

    while let Some(event) = stream.next().await {
        match event {
            Event::Stanza(stanza) => handler(&link, ConnectionEvent::Stanza(stanza)).await,
            Event::Online { .. } => {}
            Event::Disconnected(err) => {
                error = Some(ConnectionError::Generic {
                    msg: err.to_string(),
                });
                break;
            }
        }
    }

    handler(&link, ConnectionEvent::Disconnected { error }).await;
}

async fn write_packets(
    mut sink: SplitSink<AsyncClient, Packet>,
    mut queue: UnboundedReceiver<Packet>,
) {
    while let Some(packet) = queue.recv().await {
        let ends_stream = matches!(packet, Packet::StreamEnd);
        if let Err(err) = sink.send(packet).await {
            error!("Failed to write to stream. {}", err);
            return;
        }
        if ends_stream {
            return;
        }
    }
}

fn spawn_timer(
    link: Link,
    handler: SharedHandler,
    period: Duration,
    event: fn() -> ConnectionEvent,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = time::interval_at(time::Instant::now() + period, period);
        loop {
            interval.tick().await;
            // Ticks must not wait on each other, e.g. a ping waiting for its response.
            tokio::spawn(handler(&link, event()));
        }
    })
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.stop_timers();
    }
}

impl ConnectionTrait for Connection {
    fn send_stanza(&self, stanza: Element) -> Result<()> {
        self.link.send(Packet::Stanza(stanza))
    }

    fn disconnect(&self) {
        self.stop_timers();
        self.link.end_stream();
    }
}

impl ConnectionTrait for Link {
    fn send_stanza(&self, stanza: Element) -> Result<()> {
        self.send(Packet::Stanza(stanza))
    }

    fn disconnect(&self) {
        self.end_stream();
    }
}
