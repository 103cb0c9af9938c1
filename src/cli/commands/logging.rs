use clap::{builder::ValueParser, Arg, ArgAction, Command};

pub const ARG_VERBOSITY: &str = "verbosity";

const LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Accepts a level name or its index (`0..=4`) so `EQUIPMENT_CONSOLE_LOG_LEVEL`
/// can be either `debug` or `3`.
#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(|level: &str| -> Result<u8, String> {
        if let Ok(parsed) = level.parse::<u8>() {
            if usize::from(parsed) < LEVELS.len() {
                return Ok(parsed);
            }
        }

        LEVELS
            .iter()
            .position(|name| name.eq_ignore_ascii_case(level))
            .and_then(|index| u8::try_from(index).ok())
            .ok_or_else(|| format!("invalid log level: {level}"))
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE (default: ERROR)")
            .env("EQUIPMENT_CONSOLE_LOG_LEVEL")
            .global(true)
            .action(ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}
