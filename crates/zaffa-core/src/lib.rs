//! Zaffa Core Library
//!
//! The platform-independent heart of a bilingual wedding invitation:
//! a cinematic intro that hands off to the invitation page, and the
//! locale state that renders everything in English or Arabic.
//!
//! ## Overview
//!
//! The guest experience opens on a full-screen intro video. While it
//! plays, the hero video of the page underneath buffers in the background.
//! When the intro ends (naturally, by a tap, or because a timer rescued a
//! stalled network) the page is revealed and the hero restarts from its
//! first frame, exactly once. Everything else on the page (countdown,
//! venue card, RSVP) renders from typed invitation data in the language
//! the guest picked.
//!
//! ## Guarantees
//!
//! - **One completion**: the intro's completion callback fires exactly
//!   once, however media events, taps, and timers interleave
//! - **Forward-only**: intro phases never move backwards
//! - **Never stuck**: fallback timers bound how long a dead network can
//!   hold the page hostage
//! - **Two languages, one catalog**: every interface string exists in
//!   English and Arabic; lookups cannot straddle languages
//!
//! ## Quick Start
//!
//! ```ignore
//! use zaffa_core::{IntroEvent, IntroSequencer, LocaleState};
//!
//! let mut sequencer = IntroSequencer::new("intro.mp4", "hero.mp4");
//! let mount_effects = sequencer.begin();
//!
//! // feed what the media layer reports, run what comes back
//! let effects = sequencer.handle(IntroEvent::IntroReady);
//!
//! let locale = LocaleState::detect();
//! let label = locale.translate("scroll_down");
//! ```

pub mod countdown;
pub mod error;
pub mod invitation;
pub mod locale;
pub mod sequencer;

// Re-exports
pub use countdown::TimeRemaining;
pub use error::{ZaffaError, ZaffaResult};
pub use invitation::{BilingualText, InvitationDetails};
pub use locale::{catalog_keys, Direction, Language, LocaleState};
pub use sequencer::{
    HeroCommand, HeroHandoff, IntroEffect, IntroEvent, IntroPhase, IntroSequencer, MediaSource,
    HANDOFF_SEQUENCE, START_FALLBACK, WATCHDOG_CEILING,
};
