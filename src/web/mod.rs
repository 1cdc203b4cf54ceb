//! Browser bootstrap. Binds the core to `sessionStorage`, `window.location`, and
//! the DOM page chrome, wires the logout control, and runs the guard once per
//! page load. The landing page itself is never guarded.

pub mod dom;
pub mod storage;
pub mod telemetry;

use crate::{
    app_lib::{ApiClient, AppConfig, FetchTransport},
    features::{
        alerts,
        auth::{AuthContext, Navigator},
    },
};
use dom::{BrowserNavigator, DomChrome, LOGOUT_CONTROL_ID, element_by_id};
use std::rc::Rc;
use storage::BrowserSessionStore;
use tracing::{Level, error};
use wasm_bindgen::{JsCast, prelude::*};

/// Everything a view controller needs after the page passed the guard.
pub struct Page {
    pub config: AppConfig,
    pub auth: AuthContext,
    pub api: ApiClient<FetchTransport>,
}

/// Builds the page context, wires the logout control, and enforces the guard.
///
/// Returns `None` when the guard redirected; the caller must not render.
#[must_use]
pub fn boot() -> Option<Page> {
    let config = AppConfig::load();
    let navigator = Rc::new(BrowserNavigator);
    let auth = AuthContext::new(
        &config,
        Rc::new(BrowserSessionStore::new()),
        navigator.clone(),
        Rc::new(DomChrome),
    );

    wire_logout_control(&auth);

    let path = navigator.current_path();
    if auth.guard.protects(&path) && !auth.guard.enforce(&path) {
        return None;
    }

    let api = auth.api_client(&config, FetchTransport::new(config.request_timeout_ms));
    Some(Page { config, auth, api })
}

fn wire_logout_control(auth: &AuthContext) {
    let Some(control) = element_by_id(LOGOUT_CONTROL_ID) else {
        return;
    };
    let logout = auth.logout.clone();
    let on_click = Closure::<dyn FnMut()>::new(move || logout.perform());
    if control
        .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
        .is_err()
    {
        error!("failed to wire the logout control");
    }
    // The listener lives as long as the page.
    on_click.forget();
}

/// Refreshes the navbar alert badge. Failures were already logged by the client.
async fn refresh_alert_badge(api: &ApiClient<FetchTransport>) {
    if let Ok(count) = alerts::client::count(api).await {
        dom::show_alert_count(count);
    }
}

/// Module entry point: install console logging, run the bootstrap, then load
/// the alert badge for signed-in pages.
#[wasm_bindgen(start)]
pub fn start() {
    telemetry::init(Level::INFO);
    let Some(page) = boot() else {
        return;
    };

    if page.auth.is_authenticated() {
        wasm_bindgen_futures::spawn_local(async move {
            refresh_alert_badge(&page.api).await;
        });
    }
}
