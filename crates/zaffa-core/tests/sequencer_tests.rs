//! Scenario tests for the intro sequencer and hero handoff
//!
//! These walk the machine through the runs a real session produces: the
//! happy path, guest skips, media failures, racing triggers, timer rescues,
//! and teardown mid-flight. The one guarantee under test everywhere is that
//! completion is decided exactly once and phases only move forward.

use zaffa_core::{
    HeroCommand, HeroHandoff, IntroEffect, IntroEvent, IntroPhase, IntroSequencer,
    HANDOFF_SEQUENCE,
};

/// Build a sequencer that has run its mount effects.
fn mounted() -> (IntroSequencer, Vec<IntroEffect>) {
    let mut sequencer = IntroSequencer::new("intro.mp4", "hero.mp4");
    let mount_effects = sequencer.begin();
    (sequencer, mount_effects)
}

/// Feed a slice of events and collect every effect in arrival order.
fn drain(sequencer: &mut IntroSequencer, events: &[IntroEvent]) -> Vec<IntroEffect> {
    let mut effects = Vec::new();
    for &event in events {
        effects.extend(sequencer.handle(event));
    }
    effects
}

fn count(effects: &[IntroEffect], wanted: IntroEffect) -> usize {
    effects.iter().filter(|&&e| e == wanted).count()
}

// ============================================================================
// Happy Path
// ============================================================================

/// Test the natural run: preload, play, end, hand off
#[test]
fn test_natural_end_completes_once() {
    let (mut sequencer, mount_effects) = mounted();
    assert_eq!(mount_effects, vec![IntroEffect::PreloadHero]);

    assert_eq!(
        sequencer.handle(IntroEvent::IntroReady),
        vec![IntroEffect::PlayIntro]
    );
    assert!(sequencer.handle(IntroEvent::IntroStarted).is_empty());
    assert_eq!(sequencer.phase(), IntroPhase::Playing);

    assert_eq!(
        sequencer.handle(IntroEvent::IntroEnded),
        vec![IntroEffect::NotifyComplete]
    );
    assert_eq!(sequencer.phase(), IntroPhase::Completing);

    sequencer.finish();
    assert_eq!(sequencer.phase(), IntroPhase::Done);
}

/// Test that the hero preload hint comes strictly before completion
#[test]
fn test_preload_hint_precedes_completion() {
    let (mut sequencer, mount_effects) = mounted();
    let mut all = mount_effects;
    all.extend(drain(
        &mut sequencer,
        &[
            IntroEvent::IntroReady,
            IntroEvent::IntroStarted,
            IntroEvent::HeroBuffered,
            IntroEvent::IntroEnded,
        ],
    ));

    let preload_at = all
        .iter()
        .position(|&e| e == IntroEffect::PreloadHero)
        .expect("preload hint must be emitted");
    let complete_at = all
        .iter()
        .position(|&e| e == IntroEffect::NotifyComplete)
        .expect("completion must be emitted");
    assert!(preload_at < complete_at);
    assert_eq!(count(&all, IntroEffect::PreloadHero), 1);
    assert_eq!(count(&all, IntroEffect::NotifyComplete), 1);
}

/// Test that a slow hero preload never blocks completion
#[test]
fn test_completion_does_not_wait_for_hero() {
    let (mut sequencer, _) = mounted();
    let effects = drain(
        &mut sequencer,
        &[
            IntroEvent::IntroReady,
            IntroEvent::IntroStarted,
            IntroEvent::IntroEnded,
        ],
    );
    assert_eq!(count(&effects, IntroEffect::NotifyComplete), 1);
    assert!(!sequencer.hero_ready());
}

// ============================================================================
// Skip Paths
// ============================================================================

/// Test skipping while the intro is playing pauses it first
#[test]
fn test_skip_while_playing() {
    let (mut sequencer, _) = mounted();
    drain(
        &mut sequencer,
        &[IntroEvent::IntroReady, IntroEvent::IntroStarted],
    );

    let effects = sequencer.handle(IntroEvent::SkipRequested);
    assert_eq!(
        effects,
        vec![IntroEffect::PauseIntro, IntroEffect::NotifyComplete]
    );
}

/// Test skipping before playback ever starts
#[test]
fn test_skip_while_preloading() {
    let (mut sequencer, _) = mounted();
    let effects = sequencer.handle(IntroEvent::SkipRequested);
    assert_eq!(
        effects,
        vec![IntroEffect::PauseIntro, IntroEffect::NotifyComplete]
    );
    assert_eq!(sequencer.phase(), IntroPhase::Completing);
}

/// Test a double tap produces one completion
#[test]
fn test_double_skip_completes_once() {
    let (mut sequencer, _) = mounted();
    let effects = drain(
        &mut sequencer,
        &[IntroEvent::SkipRequested, IntroEvent::SkipRequested],
    );
    assert_eq!(count(&effects, IntroEffect::NotifyComplete), 1);
}

// ============================================================================
// Racing Triggers
// ============================================================================

/// Test a tap landing in the same tick as the natural end
#[test]
fn test_skip_racing_natural_end() {
    let (mut sequencer, _) = mounted();
    drain(
        &mut sequencer,
        &[IntroEvent::IntroReady, IntroEvent::IntroStarted],
    );

    let effects = drain(
        &mut sequencer,
        &[IntroEvent::IntroEnded, IntroEvent::SkipRequested],
    );
    assert_eq!(count(&effects, IntroEffect::NotifyComplete), 1);
    assert_eq!(sequencer.phase(), IntroPhase::Completing);
}

/// Test every completion trigger arriving back to back
#[test]
fn test_all_triggers_at_once_complete_once() {
    let (mut sequencer, _) = mounted();
    let effects = drain(
        &mut sequencer,
        &[
            IntroEvent::SkipRequested,
            IntroEvent::IntroEnded,
            IntroEvent::IntroFailed,
            IntroEvent::StartFallbackElapsed,
            IntroEvent::WatchdogElapsed,
        ],
    );
    assert_eq!(count(&effects, IntroEffect::NotifyComplete), 1);
}

/// Test that nothing fires after the handoff is confirmed
#[test]
fn test_events_after_done_are_inert() {
    let (mut sequencer, _) = mounted();
    sequencer.handle(IntroEvent::IntroEnded);
    sequencer.finish();

    let effects = drain(
        &mut sequencer,
        &[
            IntroEvent::IntroReady,
            IntroEvent::IntroEnded,
            IntroEvent::SkipRequested,
            IntroEvent::WatchdogElapsed,
        ],
    );
    assert!(effects.is_empty());
    assert_eq!(sequencer.phase(), IntroPhase::Done);
}

/// Test that stale media events cannot drag the phase backwards
#[test]
fn test_stale_media_events_keep_phase() {
    let (mut sequencer, _) = mounted();
    sequencer.handle(IntroEvent::SkipRequested);
    assert_eq!(sequencer.phase(), IntroPhase::Completing);

    // A buffered canplay or play event arriving late changes nothing.
    assert!(sequencer.handle(IntroEvent::IntroReady).is_empty());
    assert!(sequencer.handle(IntroEvent::IntroStarted).is_empty());
    assert_eq!(sequencer.phase(), IntroPhase::Completing);
}

// ============================================================================
// Failure and Timer Rescues
// ============================================================================

/// Test that a failed intro completes immediately instead of hanging
#[test]
fn test_intro_failure_completes() {
    let (mut sequencer, _) = mounted();
    let effects = sequencer.handle(IntroEvent::IntroFailed);
    assert_eq!(effects, vec![IntroEffect::NotifyComplete]);
}

/// Test the start fallback rescues an intro that never began
#[test]
fn test_start_fallback_rescues_preloading() {
    let (mut sequencer, _) = mounted();
    let effects = sequencer.handle(IntroEvent::StartFallbackElapsed);
    assert_eq!(count(&effects, IntroEffect::NotifyComplete), 1);
    assert_eq!(sequencer.phase(), IntroPhase::Completing);
}

/// Test the start fallback leaves a playing intro alone
#[test]
fn test_start_fallback_ignores_playing_intro() {
    let (mut sequencer, _) = mounted();
    drain(
        &mut sequencer,
        &[IntroEvent::IntroReady, IntroEvent::IntroStarted],
    );

    assert!(sequencer.handle(IntroEvent::StartFallbackElapsed).is_empty());
    assert_eq!(sequencer.phase(), IntroPhase::Playing);
}

/// Test the watchdog cuts off even a playing intro
#[test]
fn test_watchdog_cuts_off_playing_intro() {
    let (mut sequencer, _) = mounted();
    drain(
        &mut sequencer,
        &[IntroEvent::IntroReady, IntroEvent::IntroStarted],
    );

    let effects = sequencer.handle(IntroEvent::WatchdogElapsed);
    assert_eq!(
        effects,
        vec![IntroEffect::PauseIntro, IntroEffect::NotifyComplete]
    );
}

/// Test the watchdog is a no-op once completion was decided
#[test]
fn test_watchdog_after_completion_is_inert() {
    let (mut sequencer, _) = mounted();
    sequencer.handle(IntroEvent::IntroEnded);
    assert!(sequencer.handle(IntroEvent::WatchdogElapsed).is_empty());
}

// ============================================================================
// Teardown
// ============================================================================

/// Test that a detached sequencer goes silent
#[test]
fn test_detach_silences_everything() {
    let (mut sequencer, _) = mounted();
    drain(
        &mut sequencer,
        &[IntroEvent::IntroReady, IntroEvent::IntroStarted],
    );

    sequencer.detach();
    assert!(sequencer.is_detached());

    let effects = drain(
        &mut sequencer,
        &[
            IntroEvent::IntroEnded,
            IntroEvent::SkipRequested,
            IntroEvent::StartFallbackElapsed,
            IntroEvent::WatchdogElapsed,
            IntroEvent::HeroBuffered,
        ],
    );
    assert!(effects.is_empty(), "detached sequencer produced {effects:?}");
}

/// Test that detaching before begin suppresses the mount effects too
#[test]
fn test_detach_before_begin() {
    let mut sequencer = IntroSequencer::new("intro.mp4", "hero.mp4");
    sequencer.detach();
    assert!(sequencer.begin().is_empty());
}

// ============================================================================
// Hero Handoff End to End
// ============================================================================

/// Test the full journey: intro completes, hero restarts exactly once
#[test]
fn test_end_to_end_handoff() {
    let _ = tracing_subscriber::fmt::try_init();

    let (mut sequencer, _) = mounted();
    let mut hero = HeroHandoff::new();

    // Hero media loads during the intro; the veil clears, playback waits.
    assert!(hero.media_loaded());
    assert!(!hero.has_started());

    drain(
        &mut sequencer,
        &[
            IntroEvent::HeroBuffered,
            IntroEvent::IntroReady,
            IntroEvent::IntroStarted,
        ],
    );
    let effects = sequencer.handle(IntroEvent::IntroEnded);
    assert_eq!(count(&effects, IntroEffect::NotifyComplete), 1);
    sequencer.finish();

    // The completion signal reaches the hero view.
    let commands = hero.intro_finished().expect("restart must run");
    assert_eq!(commands, HANDOFF_SEQUENCE);
    assert_eq!(
        commands,
        [
            HeroCommand::Pause,
            HeroCommand::ResetToStart,
            HeroCommand::Play,
        ]
    );

    // Repeated signals and late media events change nothing.
    assert_eq!(hero.intro_finished(), None);
    assert!(!hero.media_loaded());
}

/// Test that hero readiness alone never triggers the restart
#[test]
fn test_hero_load_does_not_restart() {
    let mut hero = HeroHandoff::new();
    assert!(hero.media_loaded());
    assert!(!hero.media_loaded());
    assert!(!hero.has_started());
}
