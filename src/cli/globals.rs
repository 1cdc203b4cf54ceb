use crate::cli::commands::{ARG_API_URL, ARG_TIMEOUT, ARG_TOKEN, ARG_USER};
use crate::features::auth::Session;
use anyhow::{Context, Result};
use secrecy::{ExposeSecret, SecretString};

/// Arguments shared by every subcommand.
#[derive(Clone)]
pub struct GlobalArgs {
    pub api_url: String,
    pub timeout_ms: u32,
    pub user: Option<String>,
    pub token: Option<SecretString>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            timeout_ms: crate::app_lib::config::DEFAULT_TIMEOUT_MS,
            user: None,
            token: None,
        }
    }

    /// # Errors
    /// Returns an error if `--api-url` is missing.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let api_url = matches
            .get_one::<String>(ARG_API_URL)
            .cloned()
            .context("missing required argument: --api-url")?;

        Ok(Self {
            api_url,
            timeout_ms: matches
                .get_one::<u32>(ARG_TIMEOUT)
                .copied()
                .unwrap_or(crate::app_lib::config::DEFAULT_TIMEOUT_MS),
            user: matches.get_one::<String>(ARG_USER).cloned(),
            token: matches
                .get_one::<String>(ARG_TOKEN)
                .map(|token| SecretString::from(token.clone())),
        })
    }

    pub fn set_session(&mut self, user: String, token: SecretString) {
        self.user = Some(user);
        self.token = Some(token);
    }

    /// The session to seed the in-memory store with, when both halves were given.
    #[must_use]
    pub fn session(&self) -> Option<Session> {
        let user = self.user.as_ref()?;
        let token = self.token.as_ref()?;
        Some(Session::new(user.clone(), token.expose_secret()))
            .filter(Session::is_complete)
    }
}

impl std::fmt::Debug for GlobalArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlobalArgs")
            .field("api_url", &self.api_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("user", &self.user)
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish()
    }
}
