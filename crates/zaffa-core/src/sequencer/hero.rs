//! Hero-side handoff guard.
//!
//! When the intro completes, the hero video must restart from its first
//! frame exactly once: pause whatever partial playback the preload caused,
//! rewind to zero, then play. Media readiness events must never trigger
//! that restart on their own; they only clear the loading veil. This small
//! piece of state enforces both rules for the hero view.

/// A single instruction for the hero media element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroCommand {
    /// Stop any in-flight playback.
    Pause,
    /// Rewind to the first frame.
    ResetToStart,
    /// Start playback from the current position. A refusal (autoplay
    /// policy) must be swallowed and surfaced as manual controls.
    Play,
}

/// The exact order the hero element runs through when the intro hands off.
pub const HANDOFF_SEQUENCE: [HeroCommand; 3] = [
    HeroCommand::Pause,
    HeroCommand::ResetToStart,
    HeroCommand::Play,
];

/// Tracks what the hero view has already done, so the restart cannot run
/// twice and the loading veil clears exactly once.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeroHandoff {
    loaded: bool,
    started: bool,
}

impl HeroHandoff {
    pub fn new() -> Self {
        Self::default()
    }

    /// The media element reported its first frame. Returns true only the
    /// first time, when the loading veil should come down. Never starts
    /// playback.
    pub fn media_loaded(&mut self) -> bool {
        if self.loaded {
            return false;
        }
        self.loaded = true;
        true
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// The intro finished. Yields the restart sequence the first time and
    /// nothing afterwards, however often the signal repeats.
    pub fn intro_finished(&mut self) -> Option<[HeroCommand; 3]> {
        if self.started {
            return None;
        }
        self.started = true;
        Some(HANDOFF_SEQUENCE)
    }

    pub fn has_started(&self) -> bool {
        self.started
    }
}
