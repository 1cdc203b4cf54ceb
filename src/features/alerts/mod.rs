//! Low-stock alerts shown in the navbar badge.

pub mod client;

/// Text for the navbar alert badges; `None` leaves them hidden.
#[must_use]
pub fn badge_text(count: usize) -> Option<String> {
    (count > 0).then(|| count.to_string())
}
