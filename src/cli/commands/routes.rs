use clap::{Arg, ArgAction, Command};

pub const NAME: &str = "routes";
pub const ARG_JSON: &str = "json";

#[must_use]
pub fn command() -> Command {
    Command::new(NAME)
        .about("List the flattened route table")
        .arg(
            Arg::new(ARG_JSON)
                .long("json")
                .help("Print the table as JSON")
                .action(ArgAction::SetTrue),
        )
}
