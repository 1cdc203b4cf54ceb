//! Browser implementations of the navigation and page-chrome seams.

use crate::features::{
    alerts,
    auth::navigation::{Navigator, PageChrome},
};
use tracing::error;

/// Element that displays the signed-in identity.
pub const IDENTITY_SLOT_ID: &str = "userName";
/// Control wired to the logout action.
pub const LOGOUT_CONTROL_ID: &str = "logoutBtn";

/// Navbar and menu badges revealed when alerts exist.
pub const ALERT_BADGE_IDS: [&str; 2] = ["navAlertBadge", "menuAlertBadge"];
/// Count shown in the alert dropdown header.
pub const ALERT_COUNT_ID: &str = "navAlertCount";
const HIDDEN_CLASS: &str = "d-none";

/// `window.location`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn current_path(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_default()
    }

    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if window.location().set_href(path).is_err() {
            error!(path, "failed to redirect");
        }
    }
}

/// The `userName` header slot; pages without it are left alone.
#[derive(Clone, Copy, Debug, Default)]
pub struct DomChrome;

impl PageChrome for DomChrome {
    fn show_identity(&self, identity: &str) {
        if let Some(slot) = element_by_id(IDENTITY_SLOT_ID) {
            slot.set_text_content(Some(identity));
        }
    }
}

/// Writes the alert count into the badges. Nothing changes when there are none.
pub fn show_alert_count(count: usize) {
    let Some(text) = alerts::badge_text(count) else {
        return;
    };

    for id in ALERT_BADGE_IDS {
        if let Some(badge) = element_by_id(id) {
            badge.set_text_content(Some(&text));
            if badge.class_list().remove_1(HIDDEN_CLASS).is_err() {
                error!(id, "failed to reveal alert badge");
            }
        }
    }
    if let Some(counter) = element_by_id(ALERT_COUNT_ID) {
        counter.set_text_content(Some(&text));
    }
}

pub(crate) fn element_by_id(id: &str) -> Option<web_sys::Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}
