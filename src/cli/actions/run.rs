use crate::cli::{
    actions::{Action, Runtime, alerts, dashboard, login, products},
    globals::GlobalArgs,
};
use anyhow::Result;

/// Single dispatch point for all CLI actions.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action, globals: &GlobalArgs) -> Result<()> {
    let runtime = Runtime::new(globals)?;

    let output = match action {
        Action::Login { username, password } => {
            login::execute(&runtime, username, &password).await?
        }
        Action::Products(action) => products::execute(&runtime, action).await?,
        Action::Dashboard => dashboard::execute(&runtime).await?,
        Action::Alerts => alerts::execute(&runtime).await?,
    };

    println!("{output}");

    Ok(())
}
