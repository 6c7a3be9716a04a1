//! Property-based tests for the intro sequencer and locale state
//!
//! Uses proptest to hammer the machine with arbitrary event interleavings
//! and verify the invariants hold under every ordering, not just the
//! scripted scenarios.

use proptest::prelude::*;
use zaffa_core::{
    IntroEffect, IntroEvent, IntroPhase, IntroSequencer, Language, LocaleState,
};

// ============================================================================
// Strategy Generators
// ============================================================================

/// Any event the media layer, the guest, or a timer can produce.
fn intro_event_strategy() -> impl Strategy<Value = IntroEvent> {
    prop_oneof![
        Just(IntroEvent::IntroReady),
        Just(IntroEvent::IntroStarted),
        Just(IntroEvent::IntroEnded),
        Just(IntroEvent::IntroFailed),
        Just(IntroEvent::SkipRequested),
        Just(IntroEvent::HeroBuffered),
        Just(IntroEvent::StartFallbackElapsed),
        Just(IntroEvent::WatchdogElapsed),
    ]
}

/// An arbitrary interleaving of events, duplicates and all.
fn event_run_strategy(max_len: usize) -> impl Strategy<Value = Vec<IntroEvent>> {
    prop::collection::vec(intro_event_strategy(), 0..max_len)
}

/// Operations a session can perform on its locale state.
#[derive(Debug, Clone)]
enum LocaleOp {
    Toggle,
    Set(Language),
}

fn locale_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<LocaleOp>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(LocaleOp::Toggle),
            1 => Just(LocaleOp::Set(Language::En)),
            1 => Just(LocaleOp::Set(Language::Ar)),
        ],
        0..max_ops,
    )
}

fn apply_run(events: &[IntroEvent]) -> (IntroSequencer, Vec<IntroEffect>) {
    let mut sequencer = IntroSequencer::new("intro.mp4", "hero.mp4");
    let mut effects = sequencer.begin();
    for &event in events {
        effects.extend(sequencer.handle(event));
    }
    (sequencer, effects)
}

fn completions(effects: &[IntroEffect]) -> usize {
    effects
        .iter()
        .filter(|&&e| e == IntroEffect::NotifyComplete)
        .count()
}

// ============================================================================
// Sequencer Properties
// ============================================================================

proptest! {
    /// No interleaving of events ever notifies completion twice
    #[test]
    fn completion_is_at_most_once(events in event_run_strategy(40)) {
        let (_, effects) = apply_run(&events);
        prop_assert!(completions(&effects) <= 1);
    }

    /// Any run containing a completion trigger notifies exactly once
    #[test]
    fn completion_is_exactly_once_when_triggered(events in event_run_strategy(30)) {
        let mut events = events;
        events.push(IntroEvent::SkipRequested);
        let (sequencer, effects) = apply_run(&events);
        prop_assert_eq!(completions(&effects), 1);
        prop_assert!(sequencer.phase().completion_reached());
    }

    /// Phases never move backwards, whatever arrives
    #[test]
    fn phases_are_monotonic(events in event_run_strategy(40)) {
        let mut sequencer = IntroSequencer::new("intro.mp4", "hero.mp4");
        sequencer.begin();
        let mut previous = sequencer.phase();
        for event in events {
            sequencer.handle(event);
            let current = sequencer.phase();
            prop_assert!(current >= previous, "{} fell back to {}", previous, current);
            previous = current;
        }
    }

    /// The preload hint is emitted exactly once and before any completion
    #[test]
    fn preload_hint_comes_first(events in event_run_strategy(40)) {
        let (_, effects) = apply_run(&events);
        let preloads = effects.iter().filter(|&&e| e == IntroEffect::PreloadHero).count();
        prop_assert_eq!(preloads, 1);
        if let Some(complete_at) = effects.iter().position(|&e| e == IntroEffect::NotifyComplete) {
            let preload_at = effects
                .iter()
                .position(|&e| e == IntroEffect::PreloadHero)
                .expect("counted above");
            prop_assert!(preload_at < complete_at);
        }
    }

    /// A detached sequencer is silent no matter what arrives afterwards
    #[test]
    fn detach_silences_the_machine(
        before in event_run_strategy(20),
        after in event_run_strategy(20),
    ) {
        let mut sequencer = IntroSequencer::new("intro.mp4", "hero.mp4");
        sequencer.begin();
        for event in before {
            sequencer.handle(event);
        }
        sequencer.detach();
        let phase = sequencer.phase();
        for event in after {
            prop_assert!(sequencer.handle(event).is_empty());
        }
        prop_assert_eq!(sequencer.phase(), phase);
    }

    /// Once Done, the machine emits nothing further
    #[test]
    fn done_is_inert(events in event_run_strategy(30)) {
        let mut sequencer = IntroSequencer::new("intro.mp4", "hero.mp4");
        sequencer.begin();
        sequencer.handle(IntroEvent::IntroEnded);
        sequencer.finish();
        prop_assert_eq!(sequencer.phase(), IntroPhase::Done);
        for event in events {
            prop_assert!(sequencer.handle(event).is_empty());
        }
    }
}

// ============================================================================
// Locale Properties
// ============================================================================

proptest! {
    /// Direction always agrees with the current language
    #[test]
    fn direction_tracks_language(ops in locale_ops_strategy(30)) {
        let mut locale = LocaleState::default();
        for op in ops {
            match op {
                LocaleOp::Toggle => locale.toggle(),
                LocaleOp::Set(language) => locale.set_language(language),
            }
            prop_assert_eq!(locale.is_rtl(), locale.language() == Language::Ar);
            let attr = locale.direction().attr();
            prop_assert!(attr == "ltr" || attr == "rtl");
        }
    }

    /// An even number of toggles always lands back where it started
    #[test]
    fn toggle_pairs_are_identity(start in prop_oneof![Just(Language::En), Just(Language::Ar)], pairs in 0..10usize) {
        let mut locale = LocaleState::new(start);
        for _ in 0..pairs * 2 {
            locale.toggle();
        }
        prop_assert_eq!(locale.language(), start);
    }

    /// Known keys translate to non-empty text in whatever language is active
    #[test]
    fn known_keys_always_resolve(ops in locale_ops_strategy(10)) {
        let mut locale = LocaleState::default();
        for op in ops {
            match op {
                LocaleOp::Toggle => locale.toggle(),
                LocaleOp::Set(language) => locale.set_language(language),
            }
        }
        for key in zaffa_core::catalog_keys() {
            let text = locale.translate(key);
            prop_assert!(!text.is_empty());
        }
    }
}
