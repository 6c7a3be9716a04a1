//! Session context for the invitation UI.
//!
//! Provides the locale, the intro handoff flag, and the invitation data
//! to all components via use_context.
//!
//! ## Usage
//!
//! ```ignore
//! // In a child component
//! let locale = use_locale();
//! let label = locale().translate("scroll_down");
//! ```

use dioxus::prelude::*;
use zaffa_core::{InvitationDetails, LocaleState};

/// Hook to access the session locale from context.
///
/// Returns a reactive signal; reading it subscribes the component to
/// language switches, writing it switches the whole surface at once.
pub fn use_locale() -> Signal<LocaleState> {
    use_context::<Signal<LocaleState>>()
}

/// Hook to check whether the intro has completed and handed off.
///
/// False while the intro overlay is up; flips to true exactly once.
pub fn use_intro_finished() -> Signal<bool> {
    use_context::<Signal<bool>>()
}

/// Hook to access the invitation content.
///
/// The details are fixed for the life of the session; only their
/// rendering changes with the locale.
pub fn use_invitation() -> InvitationDetails {
    use_context::<InvitationDetails>()
}
