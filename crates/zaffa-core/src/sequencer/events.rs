//! Events and effects for the intro sequencer.
//!
//! The sequencer is a pure state machine: the hosting view feeds it
//! [`IntroEvent`]s as the media layer and timers report in, and carries out
//! the [`IntroEffect`]s it returns. Keeping the machine free of I/O is what
//! makes the once-and-only-once completion guarantee testable.

/// External stimulus observed by the intro sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroEvent {
    /// Intro media has buffered enough to begin playback.
    IntroReady,
    /// Intro playback actually started.
    IntroStarted,
    /// Intro media reached its natural end.
    IntroEnded,
    /// Intro media failed to load or decode.
    IntroFailed,
    /// The guest tapped or clicked anywhere on the intro surface.
    SkipRequested,
    /// The background hero preload buffered enough data to play.
    HeroBuffered,
    /// The start fallback timer fired before playback ever began.
    StartFallbackElapsed,
    /// The absolute watchdog ceiling elapsed.
    WatchdogElapsed,
}

/// Side effect the hosting view must carry out after feeding an event.
///
/// Effects are returned in the order they must run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntroEffect {
    /// Start buffering the hero media in the background and surface the
    /// informational preload hint to the host. Emitted once, at mount.
    PreloadHero,
    /// Ask the media layer to start intro playback. A refusal (autoplay
    /// policy) is not an error; the skip path and timers still apply.
    PlayIntro,
    /// Pause the intro media immediately.
    PauseIntro,
    /// Invoke the host's completion callback. Emitted exactly once over
    /// the life of a sequencer.
    NotifyComplete,
}
