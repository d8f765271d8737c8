// rosterwatch/rosterwatch-cli
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use clap::Parser;
use jid::BareJid;
use tracing::{error, info, Level};

use rosterwatch_core::app::deps::{SessionConfig, StartupActions};
use rosterwatch_core::domain::account::models::OwnPresence;
use rosterwatch_core::domain::messaging::models::OutgoingMessage;
use rosterwatch_core::domain::presence::models::Show;
use rosterwatch_core::domain::roster::models::NewContact;
use rosterwatch_core::Session;
use rosterwatch_xmpp::connector;

use crate::credentials::load_credentials;
use crate::logging::enable_logging;
use crate::stdout_sink::StdoutSink;

mod credentials;
mod logging;
mod stdout_sink;

type Connector = connector::xmpp_rs::Connector;

/// Connects to an XMPP account, lists its roster and reports roster, presence and
/// subscription changes until Ctrl+C is pressed.
#[derive(Parser, Debug)]
#[command(name = "rosterwatch", version)]
pub struct Args {
    /// The account to log in with. Falls back to ACCOUNT in .env, then to a prompt.
    pub account: Option<String>,
    /// Falls back to PASSWORD in .env, then to a prompt.
    pub password: Option<String>,

    /// Rename contacts without a name after the name in their vCard.
    #[arg(long)]
    resolve_profiles: bool,
    #[arg(long, default_value_t = 4)]
    max_concurrent_lookups: usize,

    /// One of away, chat, dnd or xa.
    #[arg(long, value_parser = parse_show)]
    show: Option<Show>,
    #[arg(long)]
    status: Option<String>,
    #[arg(long)]
    priority: Option<i8>,

    /// Adds a contact to the roster after connecting and asks for their presence.
    #[arg(long)]
    add_contact: Option<BareJid>,
    #[arg(long, requires = "add_contact")]
    contact_name: Option<String>,
    #[arg(long = "group", requires = "add_contact")]
    groups: Vec<String>,

    /// Sends a message after connecting.
    #[arg(long)]
    send_to: Option<BareJid>,
    #[arg(long, default_value = "Hello from rosterwatch!")]
    message: String,
    #[arg(long)]
    subject: Option<String>,

    #[arg(long, default_value_t = Level::INFO)]
    log_level: Level,
}

impl Args {
    fn session_config(&self) -> SessionConfig {
        let default_presence = OwnPresence::default();

        SessionConfig {
            resolve_profiles: self.resolve_profiles,
            max_concurrent_lookups: self.max_concurrent_lookups,
            initial_presence: OwnPresence {
                show: self.show.or(default_presence.show),
                status: self.status.clone().or(default_presence.status),
                priority: self.priority,
            },
            startup_actions: StartupActions {
                add_contact: self.add_contact.clone().map(|id| NewContact {
                    id,
                    name: self.contact_name.clone(),
                    groups: self.groups.clone(),
                }),
                send_message: self.send_to.clone().map(|to| OutgoingMessage {
                    to,
                    body: self.message.clone(),
                    subject: self.subject.clone(),
                }),
            },
        }
    }
}

fn parse_show(value: &str) -> Result<Show, String> {
    value
        .parse::<Show>()
        .map_err(|_| format!("'{}' is not one of away, chat, dnd or xa", value))
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    enable_logging(args.log_level)?;

    let (jid, password) = load_credentials(&args)?;

    let session = Session::builder()
        .set_connector_provider(Connector::provider())
        .set_config(args.session_config())
        .set_presentation_sink(StdoutSink)
        .build();

    session
        .run_until(&jid, password, async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for Ctrl+C. {}", err);
                return;
            }
            info!("Received Ctrl+C, shutting down…");
        })
        .await?;

    Ok(())
}
