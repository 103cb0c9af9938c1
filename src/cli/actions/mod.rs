pub mod navigate;
pub mod routes;
pub mod serve;

// Single dispatch point; kept apart so this file only lists the actions.
mod run;

#[derive(Debug)]
pub enum Action {
    Routes(routes::Args),
    Navigate(navigate::Args),
    Serve(serve::Args),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the action fails.
    pub async fn execute(self) -> anyhow::Result<()> {
        run::execute(self).await
    }
}
