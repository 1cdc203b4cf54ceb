//! Host seams the guard and logout act on: where the user is, and the page
//! chrome slot that displays who they are. Browser implementations live in the
//! `web` module; the in-memory ones back the CLI and tests.

use std::cell::RefCell;

/// Reads and changes the current location.
pub trait Navigator {
    fn current_path(&self) -> String;
    fn redirect(&self, path: &str);
}

/// Shared header UI. Implementations must be a no-op when the slot is absent.
pub trait PageChrome {
    fn show_identity(&self, identity: &str);
}

/// Location held in memory; every redirect is recorded.
#[derive(Debug, Default)]
pub struct MemoryNavigator {
    location: RefCell<String>,
    redirects: RefCell<Vec<String>>,
}

impl MemoryNavigator {
    pub fn new(location: impl Into<String>) -> Self {
        Self {
            location: RefCell::new(location.into()),
            redirects: RefCell::new(Vec::new()),
        }
    }

    /// Redirect targets in the order they happened.
    #[must_use]
    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }
}

impl Navigator for MemoryNavigator {
    fn current_path(&self) -> String {
        self.location.borrow().clone()
    }

    fn redirect(&self, path: &str) {
        self.location.replace(path.to_string());
        self.redirects.borrow_mut().push(path.to_string());
    }
}

/// Page chrome with an optional identity slot.
#[derive(Debug, Default)]
pub struct MemoryChrome {
    slot: Option<RefCell<Option<String>>>,
}

impl MemoryChrome {
    #[must_use]
    pub fn with_slot() -> Self {
        Self {
            slot: Some(RefCell::new(None)),
        }
    }

    /// A page without chrome, such as a bare form.
    #[must_use]
    pub fn without_slot() -> Self {
        Self { slot: None }
    }

    #[must_use]
    pub fn identity(&self) -> Option<String> {
        self.slot.as_ref().and_then(|slot| slot.borrow().clone())
    }
}

impl PageChrome for MemoryChrome {
    fn show_identity(&self, identity: &str) {
        if let Some(slot) = &self.slot {
            slot.replace(Some(identity.to_string()));
        }
    }
}
