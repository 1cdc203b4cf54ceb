//! One CLI invocation behaves like one page load: an in-memory session seeded
//! from `--user`/`--token`, a guard that must pass before any protected call,
//! and an API client that clears the session on `401`.

use crate::{
    app_lib::{ApiClient, ApiError, AppConfig, ReqwestTransport},
    cli::globals::GlobalArgs,
    features::auth::{AuthContext, MemoryChrome, MemoryNavigator, MemorySessionStore},
};
use anyhow::{Context, Result, anyhow};
use std::{rc::Rc, time::Duration};
use tracing::debug;

/// Location reported to the guard; never the landing page.
const CLI_PATH: &str = "/stockroom";

const LOGIN_HINT: &str =
    "run `stockroom login` and export STOCKROOM_USER and STOCKROOM_TOKEN";

pub struct Runtime {
    pub config: AppConfig,
    pub auth: AuthContext,
    pub api: ApiClient<ReqwestTransport>,
    chrome: Rc<MemoryChrome>,
}

impl Runtime {
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(globals: &GlobalArgs) -> Result<Self> {
        let config = AppConfig::default()
            .with_api_base_url(&globals.api_url)
            .with_request_timeout_ms(globals.timeout_ms);

        let store = Rc::new(
            globals
                .session()
                .map_or_else(MemorySessionStore::new, MemorySessionStore::with_session),
        );
        let chrome = Rc::new(MemoryChrome::with_slot());
        let auth = AuthContext::new(
            &config,
            store,
            Rc::new(MemoryNavigator::new(CLI_PATH)),
            chrome.clone(),
        );

        let transport = ReqwestTransport::new(Duration::from_millis(u64::from(
            config.request_timeout_ms,
        )))
        .context("Failed to initialize the HTTP client")?;
        let api = auth.api_client(&config, transport);

        debug!(api_base_url = %config.api_base_url, "runtime ready");

        Ok(Self {
            config,
            auth,
            api,
            chrome,
        })
    }

    /// Runs the guard for a protected command and returns the signed-in identity.
    ///
    /// # Errors
    /// Returns an error with a login hint when no session was supplied.
    pub fn require_session(&self) -> Result<String> {
        if !self.auth.guard.enforce(CLI_PATH) {
            return Err(anyhow!("not signed in; {LOGIN_HINT}"));
        }

        self.chrome
            .identity()
            .context("session identity missing after guard")
    }
}

/// Adds the login hint when the server rejected the session.
pub fn explain(err: ApiError) -> anyhow::Error {
    match err {
        ApiError::SessionExpired => anyhow!(err).context(format!("session expired; {LOGIN_HINT}")),
        other => anyhow!(other),
    }
}
