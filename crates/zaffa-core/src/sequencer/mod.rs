//! Intro-to-hero media handoff
//!
//! The invitation opens with a full-screen intro video, then reveals the
//! page whose hero video restarts from its first frame. This module owns
//! that choreography:
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  IntroSequencer (pure state machine)                       │
//! │  ├── IntroEvent in  (media callbacks, taps, timer fires)   │
//! │  ├── IntroEffect out (preload, play, pause, notify)        │
//! │  └── phases: Preloading → Playing → Completing → Done      │
//! │                                                            │
//! │  HeroHandoff (hero-side guard)                             │
//! │  └── pause → reset → play, exactly once, only after Done   │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! Hosting views execute the effects against real media elements and feed
//! back what actually happened. The guarantees the rest of the app leans
//! on, regardless of how events race:
//!
//! - the completion callback fires exactly once per mounted sequencer
//! - the hero preload hint fires before it, never after
//! - a detached sequencer never produces another effect
//! - two timers ([`START_FALLBACK`], [`WATCHDOG_CEILING`]) bound how long
//!   a stalled intro can block the page

pub mod events;
pub mod hero;
pub mod machine;

pub use events::{IntroEffect, IntroEvent};
pub use hero::{HeroCommand, HeroHandoff, HANDOFF_SEQUENCE};
pub use machine::{IntroPhase, IntroSequencer, MediaSource, START_FALLBACK, WATCHDOG_CEILING};
