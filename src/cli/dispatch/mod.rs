//! Maps parsed arguments to an [`Action`].
//!
//! The route table is built here, before any action runs, so a bad declaration
//! file (duplicate names, malformed paths) stops the process up front.

use crate::cli::actions::{self, Action};
use crate::cli::commands::{navigate, routes, serve, ARG_ROUTES_FILE};
use crate::router::{routes::app_routes, RouteTable};
use crate::web::ServeConfig;
use anyhow::{anyhow, Context, Result};
use std::path::Path;
use tracing::debug;

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if the route table is invalid or arguments are inconsistent.
pub fn handler(matches: &clap::ArgMatches) -> Result<Action> {
    let table = load_table(matches.get_one::<String>(ARG_ROUTES_FILE).map(Path::new))?;

    match matches.subcommand() {
        Some((routes::NAME, sub_m)) => Ok(Action::Routes(actions::routes::Args {
            table,
            json: sub_m.get_flag(routes::ARG_JSON),
        })),
        Some((navigate::NAME, sub_m)) => {
            let options = navigate::Options::parse(sub_m)?;
            Ok(Action::Navigate(actions::navigate::Args {
                table,
                path: options.path,
                from: options.from,
                token: options.token,
                json: options.json,
            }))
        }
        Some((serve::NAME, sub_m)) => {
            let options = serve::Options::parse(sub_m)?;
            Ok(Action::Serve(actions::serve::Args {
                table,
                config: ServeConfig {
                    host: options.host,
                    port: options.port,
                    dist: options.dist,
                },
            }))
        }
        Some((name, _)) => Err(anyhow!("unknown subcommand: {name}")),
        None => Err(anyhow!("missing subcommand")),
    }
}

/// Builds the route table from `routes_file`, or the built-in one.
///
/// # Errors
/// Returns an error if the declarations cannot be read or fail validation.
pub fn load_table(routes_file: Option<&Path>) -> Result<RouteTable> {
    if let Some(path) = routes_file {
        debug!("Loading route declarations from {}", path.display());
        RouteTable::from_path(path)
            .with_context(|| format!("Invalid route declarations in {}", path.display()))
    } else {
        RouteTable::new(app_routes()).context("Invalid built-in route table")
    }
}
