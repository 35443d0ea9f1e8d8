//! Centralized custom_id string constants for interaction components.
//! Consolidating here reduces typos and keeps renames in one place.

pub const CONFIRM_ACCEPT: &str = "confirm_accept";
pub const CONFIRM_DECLINE: &str = "confirm_decline";

pub fn is_confirm(id: &str) -> bool {
    id == CONFIRM_ACCEPT || id == CONFIRM_DECLINE
}
