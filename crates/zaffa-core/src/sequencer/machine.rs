//! The intro sequencer state machine.
//!
//! Drives the opening video overlay from mount to handoff. Phases only move
//! forward, and no interleaving of media events, guest taps, and timer fires
//! can produce a second completion notification. The machine performs no I/O
//! itself; see [`IntroEffect`](super::IntroEffect) for the contract with the
//! hosting view.

use std::fmt;
use std::time::Duration;

use tracing::{debug, warn};

use super::events::{IntroEffect, IntroEvent};

/// How long the overlay may sit in [`IntroPhase::Preloading`] before the
/// sequencer gives up on the intro and completes anyway.
pub const START_FALLBACK: Duration = Duration::from_secs(8);

/// Absolute ceiling on the whole intro, whatever the phase. A stalled
/// network or a hung decoder can never hold the invitation hostage longer
/// than this.
pub const WATCHDOG_CEILING: Duration = Duration::from_secs(120);

/// Lifecycle phase of the intro overlay.
///
/// The ordering is meaningful: a sequencer only ever advances, never
/// returns to an earlier phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IntroPhase {
    /// Media is buffering; playback has not started.
    Preloading,
    /// The intro video is running.
    Playing,
    /// Completion has been decided and the host has been notified; the
    /// overlay is on its way out.
    Completing,
    /// The host confirmed the handoff. The sequencer is inert.
    Done,
}

impl IntroPhase {
    /// True once the completion decision has been made. From here the
    /// completion callback can never fire again.
    pub fn completion_reached(&self) -> bool {
        matches!(self, IntroPhase::Completing | IntroPhase::Done)
    }
}

impl fmt::Display for IntroPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IntroPhase::Preloading => "preloading",
            IntroPhase::Playing => "playing",
            IntroPhase::Completing => "completing",
            IntroPhase::Done => "done",
        };
        write!(f, "{}", name)
    }
}

/// Opaque handle to a playable media resource, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaSource(String);

impl MediaSource {
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MediaSource {
    fn from(uri: &str) -> Self {
        Self::new(uri)
    }
}

impl From<String> for MediaSource {
    fn from(uri: String) -> Self {
        Self::new(uri)
    }
}

/// State machine for the intro-to-hero handoff.
///
/// ```text
/// Preloading ── IntroReady/IntroStarted ──▶ Playing
///     │                                        │
///     └── skip, failure, timers ──▶ Completing ◀── end, skip, watchdog
///                                       │
///                                  finish() ──▶ Done
/// ```
#[derive(Debug, Clone)]
pub struct IntroSequencer {
    phase: IntroPhase,
    intro_src: MediaSource,
    hero_src: MediaSource,
    hero_ready: bool,
    begun: bool,
    detached: bool,
}

impl IntroSequencer {
    /// Create a sequencer for the given media pair. Sources are fixed for
    /// the life of the machine.
    pub fn new(intro_src: impl Into<MediaSource>, hero_src: impl Into<MediaSource>) -> Self {
        Self {
            phase: IntroPhase::Preloading,
            intro_src: intro_src.into(),
            hero_src: hero_src.into(),
            hero_ready: false,
            begun: false,
            detached: false,
        }
    }

    pub fn phase(&self) -> IntroPhase {
        self.phase
    }

    pub fn intro_src(&self) -> &MediaSource {
        &self.intro_src
    }

    pub fn hero_src(&self) -> &MediaSource {
        &self.hero_src
    }

    /// True once the background hero preload has buffered enough to play.
    /// Informational only; completion never waits for it.
    pub fn hero_ready(&self) -> bool {
        self.hero_ready
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// The host is mounted and ready to run effects. Returns the mount
    /// effects the first time, nothing on repeat calls.
    pub fn begin(&mut self) -> Vec<IntroEffect> {
        if self.begun || self.detached {
            return Vec::new();
        }
        self.begun = true;
        debug!(intro = %self.intro_src, hero = %self.hero_src, "intro sequencer started");
        vec![IntroEffect::PreloadHero]
    }

    /// Feed one event and collect the effects to run, in order.
    pub fn handle(&mut self, event: IntroEvent) -> Vec<IntroEffect> {
        if self.detached {
            return Vec::new();
        }
        match event {
            IntroEvent::IntroReady => {
                // canplay can fire again after a stall; retrying the play
                // request while still preloading is the desired behavior.
                if self.phase == IntroPhase::Preloading {
                    vec![IntroEffect::PlayIntro]
                } else {
                    Vec::new()
                }
            }
            IntroEvent::IntroStarted => {
                if self.phase == IntroPhase::Preloading {
                    self.advance(IntroPhase::Playing);
                }
                Vec::new()
            }
            IntroEvent::IntroEnded => self.complete("intro ended", false),
            IntroEvent::IntroFailed => {
                warn!(intro = %self.intro_src, "intro media failed, completing immediately");
                self.complete("intro failed", false)
            }
            IntroEvent::SkipRequested => self.complete("skip requested", true),
            IntroEvent::HeroBuffered => {
                if !self.hero_ready {
                    self.hero_ready = true;
                    debug!(hero = %self.hero_src, "hero media buffered");
                }
                Vec::new()
            }
            IntroEvent::StartFallbackElapsed => {
                // Only a rescue for an intro that never started. Once the
                // video is playing it is allowed its full runtime.
                if self.phase == IntroPhase::Preloading {
                    warn!(
                        elapsed_secs = START_FALLBACK.as_secs(),
                        "intro never started playing, forcing completion"
                    );
                    self.complete("start fallback", true)
                } else {
                    Vec::new()
                }
            }
            IntroEvent::WatchdogElapsed => {
                if !self.phase.completion_reached() {
                    warn!(
                        elapsed_secs = WATCHDOG_CEILING.as_secs(),
                        phase = %self.phase,
                        "intro exceeded the watchdog ceiling, forcing completion"
                    );
                    self.complete("watchdog", true)
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// The host confirms the handoff finished (overlay unmounted, page
    /// revealed). Only meaningful from `Completing`.
    pub fn finish(&mut self) {
        match self.phase {
            IntroPhase::Completing => self.advance(IntroPhase::Done),
            IntroPhase::Done => {}
            other => warn!(phase = %other, "finish called before completion was decided"),
        }
    }

    /// Stop producing effects permanently. Called when the hosting view is
    /// torn down while its subscriptions unwind; any event still in flight
    /// lands here and dies quietly.
    pub fn detach(&mut self) {
        if !self.detached {
            self.detached = true;
            debug!(phase = %self.phase, "intro sequencer detached");
        }
    }

    /// One-shot completion transition. The phase guard makes the
    /// notification idempotent under racing events.
    fn complete(&mut self, reason: &str, pause_intro: bool) -> Vec<IntroEffect> {
        if self.phase.completion_reached() {
            return Vec::new();
        }
        debug!(reason, "intro completing");
        self.advance(IntroPhase::Completing);
        let mut effects = Vec::with_capacity(2);
        if pause_intro {
            effects.push(IntroEffect::PauseIntro);
        }
        effects.push(IntroEffect::NotifyComplete);
        effects
    }

    fn advance(&mut self, next: IntroPhase) {
        debug_assert!(
            next >= self.phase,
            "phase must not move backwards: {} -> {}",
            self.phase,
            next
        );
        if next > self.phase {
            debug!(from = %self.phase, to = %next, "intro phase advanced");
            self.phase = next;
        }
    }
}
