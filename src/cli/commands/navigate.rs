use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use secrecy::SecretString;
use std::path::PathBuf;

pub const NAME: &str = "navigate";
pub const ARG_PATH: &str = "path";
pub const ARG_FROM: &str = "from";
pub const ARG_TOKEN: &str = "token";
pub const ARG_TOKEN_FILE: &str = "token-file";
pub const ARG_JSON: &str = "json";

/// Where the session token is read from.
#[derive(Debug)]
pub enum TokenSource {
    Absent,
    Inline(SecretString),
    File(PathBuf),
}

#[derive(Debug)]
pub struct Options {
    pub path: String,
    pub from: Option<String>,
    pub token: TokenSource,
    pub json: bool,
}

impl Options {
    /// Parse `navigate` options.
    ///
    /// # Errors
    /// Returns an error if the target path is missing.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let path = matches
            .get_one::<String>(ARG_PATH)
            .cloned()
            .context("missing required argument: <path>")?;

        let token = if let Some(token) = matches.get_one::<String>(ARG_TOKEN) {
            TokenSource::Inline(SecretString::from(token.clone()))
        } else if let Some(file) = matches.get_one::<String>(ARG_TOKEN_FILE) {
            TokenSource::File(PathBuf::from(file))
        } else {
            TokenSource::Absent
        };

        Ok(Self {
            path,
            from: matches.get_one::<String>(ARG_FROM).cloned(),
            token,
            json: matches.get_flag(ARG_JSON),
        })
    }
}

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Run the login guard for a path and print the resulting route")
        .arg(
            Arg::new(ARG_PATH)
                .help("Path to navigate to, e.g. /equipment")
                .required(true),
        )
        .arg(
            Arg::new(ARG_FROM)
                .long("from")
                .help("Path of the currently active route"),
        )
        .arg(
            Arg::new(ARG_TOKEN)
                .long("token")
                .help("Session token (its presence is all that matters)")
                .env("EQUIPMENT_CONSOLE_TOKEN")
                .hide_env_values(true)
                .conflicts_with(ARG_TOKEN_FILE),
        )
        .arg(
            Arg::new(ARG_TOKEN_FILE)
                .long("token-file")
                .help("JSON key/value storage file holding the \"token\" key")
                .env("EQUIPMENT_CONSOLE_TOKEN_FILE"),
        )
        .arg(
            Arg::new(ARG_JSON)
                .long("json")
                .help("Print the result as JSON")
                .action(ArgAction::SetTrue),
        )
}
