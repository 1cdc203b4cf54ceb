use crate::{
    cli::actions::{Runtime, runtime::explain},
    features::auth::{client, types::LoginRequest},
};
use anyhow::Result;
use secrecy::{ExposeSecret, SecretString};
use tracing::info;

/// Signs in and renders the shell exports that carry the session to later calls.
///
/// # Errors
/// Returns an error if the credentials are rejected or the server is unreachable.
pub async fn execute(runtime: &Runtime, username: String, password: &SecretString) -> Result<String> {
    let request = LoginRequest {
        username,
        password: password.expose_secret().to_string(),
    };

    let session = client::login(&runtime.api, &request).await.map_err(explain)?;

    info!(user = %session.identity, "signed in");

    Ok(format!(
        "export STOCKROOM_USER={}\nexport STOCKROOM_TOKEN={}",
        shell_quote(&session.identity),
        shell_quote(&session.token)
    ))
}

fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_quote_escapes_single_quotes() {
        assert_eq!(shell_quote("Admin"), "'Admin'");
        assert_eq!(shell_quote("o'neil"), r"'o'\''neil'");
    }
}
