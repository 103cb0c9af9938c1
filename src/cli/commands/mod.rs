pub mod logging;
pub mod navigate;
pub mod routes;
pub mod serve;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_ROUTES_FILE: &str = "routes-file";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("equipment-console")
        .about("Equipment management console shell")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new(ARG_ROUTES_FILE)
                .long("routes-file")
                .help("JSON route declarations to use instead of the built-in table")
                .env("EQUIPMENT_CONSOLE_ROUTES_FILE")
                .global(true),
        )
        .subcommand(routes::command())
        .subcommand(navigate::command())
        .subcommand(serve::command());

    logging::with_args(command)
}
