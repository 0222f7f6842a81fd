//! Notification texts and result-count classification

use crate::traits::{Notification, Severity};

pub const NO_MATCH: &str = "Oops, there is no country with that name.";
pub const ONE_FOUND: &str = "One country found.";
pub const TOO_MANY: &str = "Too many matches found. Please enter a more specific name.";
pub const GENERIC_FAILURE: &str = "Oops, something went wrong.";

/// Largest result count reported as a plain "found" message.
pub const MAX_LISTED: usize = 10;

/// Notification for a successful search returning `count` records.
pub fn classify(count: usize) -> Notification {
    let (severity, message) = match count {
        0 => (Severity::Failure, NO_MATCH.to_string()),
        1 => (Severity::Success, ONE_FOUND.to_string()),
        2..=MAX_LISTED => (Severity::Success, format!("{count} countries found.")),
        _ => (Severity::Info, TOO_MANY.to_string()),
    };
    Notification { severity, message }
}
