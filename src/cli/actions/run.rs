use crate::cli::actions::{navigate, routes, serve, Action};
use anyhow::Result;

/// Execute the provided action.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Routes(args) => routes::execute(&args),
        Action::Navigate(args) => navigate::execute(args),
        Action::Serve(args) => serve::execute(args).await,
    }
}
