// rosterwatch/rosterwatch-cli
//
// Copyright: 2026, The rosterwatch Authors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Password};
use jid::{BareJid, FullJid};
use secrecy::{Secret, SecretString};
use tracing::debug;

use crate::Args;

/// Reads the account and password from the command line, then from a `.env` file in the
/// current directory (`ACCOUNT` and `PASSWORD`) and finally asks for whatever is still missing.
pub fn load_credentials(args: &Args) -> Result<(FullJid, SecretString)> {
    if let Err(err) = dotenvy::dotenv() {
        debug!("Not loading .env file. {}", err);
    }

    let account = match args.account.clone().or_else(|| env::var("ACCOUNT").ok()) {
        Some(account) => account,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt("Account")
            .validate_with(|input: &String| {
                parse_account(input)
                    .map(|_| ())
                    .map_err(|err| err.to_string())
            })
            .interact_text()?,
    };

    let password = match args.password.clone().or_else(|| env::var("PASSWORD").ok()) {
        Some(password) => password,
        None => Password::with_theme(&ColorfulTheme::default())
            .with_prompt("Password")
            .interact()?,
    };

    Ok((parse_account(&account)?, Secret::new(password)))
}

/// Accepts a full JID or a bare one, in which case a resource is made up.
fn parse_account(account: &str) -> Result<FullJid> {
    if let Ok(jid) = FullJid::from_str(account) {
        return Ok(jid);
    }

    let bare = BareJid::from_str(account)
        .map_err(|err| anyhow!("'{}' is not a valid account. {}", account, err))?;
    Ok(FullJid::from_str(&format!(
        "{}/rosterwatch-{}",
        bare,
        std::process::id()
    ))?)
}
