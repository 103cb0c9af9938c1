use anyhow::{Context, Result};
use clap::{Arg, Command};
use std::path::PathBuf;

pub const NAME: &str = "serve";
pub const ARG_HOST: &str = "host";
pub const ARG_PORT: &str = "port";
pub const ARG_DIST: &str = "dist";

#[derive(Debug)]
pub struct Options {
    pub host: String,
    pub port: u16,
    pub dist: PathBuf,
}

impl Options {
    /// Parse `serve` options.
    ///
    /// # Errors
    /// Returns an error if a defaulted argument is unexpectedly missing.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let host = matches
            .get_one::<String>(ARG_HOST)
            .cloned()
            .context("missing required argument: --host")?;
        let port = matches.get_one::<u16>(ARG_PORT).copied().unwrap_or(5173);
        let dist = matches
            .get_one::<String>(ARG_DIST)
            .map(PathBuf::from)
            .context("missing required argument: --dist")?;

        Ok(Self { host, port, dist })
    }
}

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("Serve the built single-page app with history fallback")
        .arg(
            Arg::new(ARG_HOST)
                .long("host")
                .help("Address to bind, all interfaces by default")
                .default_value("0.0.0.0")
                .env("EQUIPMENT_CONSOLE_HOST"),
        )
        .arg(
            Arg::new(ARG_PORT)
                .short('p')
                .long("port")
                .help("Port to listen on")
                .default_value("5173")
                .env("EQUIPMENT_CONSOLE_PORT")
                .value_parser(clap::value_parser!(u16)),
        )
        .arg(
            Arg::new(ARG_DIST)
                .long("dist")
                .help("Directory holding the built app (index.html and assets)")
                .default_value("dist")
                .env("EQUIPMENT_CONSOLE_DIST"),
        )
}
