//! Full-screen intro video overlay.
//!
//! Owns the intro sequencer: wires the media element's events into the
//! machine, executes the effects it returns against the webview, and tells
//! the host exactly once when the page should take over. All policy lives
//! in `zaffa_core::sequencer`; this component is deliberately just wiring.

use dioxus::prelude::*;
use zaffa_core::{
    IntroEffect, IntroEvent, IntroPhase, IntroSequencer, START_FALLBACK, WATCHDOG_CEILING,
};

use crate::context::use_locale;

/// DOM id of the intro media element, shared with the eval snippets.
const INTRO_VIDEO_ID: &str = "intro-video";

#[component]
pub fn VideoIntro(
    intro_src: String,
    hero_src: String,
    /// Fired once when the hero preload kicks off, before any completion
    on_preload_hint: EventHandler<()>,
    /// Fired exactly once when the page should be revealed
    on_complete: EventHandler<()>,
) -> Element {
    let locale = use_locale();
    let mut sequencer = use_signal({
        let intro = intro_src.clone();
        let hero = hero_src.clone();
        move || IntroSequencer::new(intro.clone(), hero.clone())
    });

    // Mount: run the machine's mount effects, arm both rescue timers, and
    // probe for media that got ready before our listeners attached.
    use_effect(move || {
        let mount_effects = sequencer.write().begin();
        apply_effects(mount_effects, sequencer, on_preload_hint, on_complete);

        spawn(async move {
            if probe_intro_ready().await {
                drive(IntroEvent::IntroReady, sequencer, on_preload_hint, on_complete);
            }
        });
        spawn(async move {
            tokio::time::sleep(START_FALLBACK).await;
            drive(
                IntroEvent::StartFallbackElapsed,
                sequencer,
                on_preload_hint,
                on_complete,
            );
        });
        spawn(async move {
            tokio::time::sleep(WATCHDOG_CEILING).await;
            drive(
                IntroEvent::WatchdogElapsed,
                sequencer,
                on_preload_hint,
                on_complete,
            );
        });
    });

    // Teardown: the scope's tasks die with it; the detach flag catches any
    // event already past the gate.
    use_drop(move || {
        sequencer.write().detach();
    });

    let phase = sequencer.read().phase();
    let dir = locale().direction().attr();
    let loading_label = locale().translate("loading");
    let skip_label = locale().translate("skip_hint");

    rsx! {
        div {
            class: "intro-overlay",
            dir: "{dir}",
            onclick: move |evt| {
                evt.stop_propagation();
                drive(IntroEvent::SkipRequested, sequencer, on_preload_hint, on_complete);
            },

            video {
                id: INTRO_VIDEO_ID,
                class: "intro-video",
                src: "{intro_src}",
                muted: true,
                preload: "auto",
                "playsinline": "true",
                oncanplay: move |_| drive(IntroEvent::IntroReady, sequencer, on_preload_hint, on_complete),
                onplay: move |_| drive(IntroEvent::IntroStarted, sequencer, on_preload_hint, on_complete),
                onended: move |_| drive(IntroEvent::IntroEnded, sequencer, on_preload_hint, on_complete),
                onerror: move |_| drive(IntroEvent::IntroFailed, sequencer, on_preload_hint, on_complete),
            }

            if phase == IntroPhase::Preloading {
                div { class: "intro-loading",
                    div { class: "loading-spinner" }
                    span { class: "intro-loading-label", "{loading_label}" }
                }
            }

            div { class: "intro-skip-hint", "{skip_label}" }
        }
    }
}

/// Feed one event through the machine and run whatever comes back.
fn drive(
    event: IntroEvent,
    mut sequencer: Signal<IntroSequencer>,
    on_preload_hint: EventHandler<()>,
    on_complete: EventHandler<()>,
) {
    let effects = sequencer.write().handle(event);
    apply_effects(effects, sequencer, on_preload_hint, on_complete);
}

/// Execute sequencer effects, in order, against the webview.
fn apply_effects(
    effects: Vec<IntroEffect>,
    mut sequencer: Signal<IntroSequencer>,
    on_preload_hint: EventHandler<()>,
    on_complete: EventHandler<()>,
) {
    for effect in effects {
        match effect {
            IntroEffect::PreloadHero => {
                on_preload_hint.call(());
                let hero_uri = sequencer.peek().hero_src().to_string();
                spawn(async move {
                    // Detached element keeps buffering in the background;
                    // resolves once enough data is in to start playback.
                    match document::eval(&preload_hero_js(&hero_uri)).await {
                        Ok(value) if value.as_bool() == Some(true) => {
                            drive(
                                IntroEvent::HeroBuffered,
                                sequencer,
                                on_preload_hint,
                                on_complete,
                            );
                        }
                        Ok(_) => tracing::debug!("hero preload did not buffer"),
                        Err(err) => tracing::debug!("hero preload eval failed: {err:?}"),
                    }
                });
            }
            IntroEffect::PlayIntro => {
                // The rejection of a blocked autoplay is swallowed in the
                // snippet; the skip path and timers guarantee progress.
                document::eval(&play_intro_js());
            }
            IntroEffect::PauseIntro => {
                document::eval(&pause_intro_js());
            }
            IntroEffect::NotifyComplete => {
                on_complete.call(());
                sequencer.write().finish();
            }
        }
    }
}

/// True when the intro element is already buffered past canplay, which can
/// happen with cached media before our listeners attach.
async fn probe_intro_ready() -> bool {
    let js = format!(
        "const v = document.getElementById('{INTRO_VIDEO_ID}'); return !!(v && v.readyState >= 3);"
    );
    matches!(document::eval(&js).await, Ok(value) if value.as_bool() == Some(true))
}

fn play_intro_js() -> String {
    format!(
        "const v = document.getElementById('{INTRO_VIDEO_ID}'); if (v) {{ v.play().catch(() => {{}}); }}"
    )
}

fn pause_intro_js() -> String {
    format!("const v = document.getElementById('{INTRO_VIDEO_ID}'); if (v) {{ v.pause(); }}")
}

fn preload_hero_js(src: &str) -> String {
    format!(
        r#"const v = document.createElement('video');
v.preload = 'auto';
v.muted = true;
v.playsInline = true;
v.src = {src:?};
v.load();
return await new Promise((resolve) => {{
    v.addEventListener('loadeddata', () => resolve(true), {{ once: true }});
    v.addEventListener('error', () => resolve(false), {{ once: true }});
}});"#
    )
}
