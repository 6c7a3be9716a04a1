//! Hero video with a loading veil and the one-shot reset-and-play handoff.
//!
//! The element mounts muted underneath the intro overlay so it can buffer
//! early. Media readiness only lifts the veil; playback starts exactly once,
//! when the intro reports completion, via the pause / rewind / play sequence
//! from `zaffa_core::sequencer::hero`. A blocked autoplay downgrades to the
//! element's native controls instead of failing.

use dioxus::prelude::*;
use zaffa_core::{HeroCommand, HeroHandoff};

use crate::context::{use_intro_finished, use_locale};

/// DOM id of the hero media element, shared with the eval snippets.
const HERO_VIDEO_ID: &str = "hero-video";

#[component]
pub fn HeroVideo(src: String) -> Element {
    let locale = use_locale();
    let intro_finished = use_intro_finished();
    let mut handoff = use_signal(HeroHandoff::new);
    let mut veil_lifted = use_signal(|| false);
    let mut autoplay_blocked = use_signal(|| false);

    // Restart from the first frame exactly once, strictly after the intro
    // is done. Repeat renders find the handoff already spent.
    use_effect(move || {
        if intro_finished() {
            if let Some(commands) = handoff.write().intro_finished() {
                spawn(async move {
                    if !run_handoff(&commands).await {
                        tracing::debug!("hero autoplay denied, falling back to manual controls");
                        autoplay_blocked.set(true);
                    }
                });
            }
        }
    });

    let loading_label = locale().translate("loading");
    let manual_hint = locale().translate("manual_play_hint");

    rsx! {
        div { class: "hero-media",
            video {
                id: HERO_VIDEO_ID,
                class: "hero-video",
                src: "{src}",
                muted: true,
                preload: "auto",
                "playsinline": "true",
                controls: autoplay_blocked(),
                onloadeddata: move |_| {
                    // First frame is in; never starts playback.
                    if handoff.write().media_loaded() {
                        veil_lifted.set(true);
                    }
                },
                onerror: move |_| {
                    // A dead hero still gets its veil out of the way.
                    tracing::warn!("hero media failed to load");
                    veil_lifted.set(true);
                },
            }

            if !veil_lifted() {
                div { class: "hero-loading",
                    div { class: "loading-spinner" }
                    span { class: "hero-loading-label", "{loading_label}" }
                }
            }

            if autoplay_blocked() {
                div { class: "hero-manual-hint", "{manual_hint}" }
            }
        }
    }
}

/// Run the handoff sequence against the hero element in one round trip.
/// Returns false when the final play() was rejected or the element is gone.
async fn run_handoff(commands: &[HeroCommand]) -> bool {
    let mut js = format!(
        "const v = document.getElementById('{HERO_VIDEO_ID}');\nif (!v) {{ return false; }}\n"
    );
    for command in commands {
        match command {
            HeroCommand::Pause => js.push_str("v.pause();\n"),
            HeroCommand::ResetToStart => js.push_str("v.currentTime = 0;\n"),
            HeroCommand::Play => {
                js.push_str("return await v.play().then(() => true).catch(() => false);\n");
            }
        }
    }
    match document::eval(&js).await {
        Ok(value) => value.as_bool() == Some(true),
        Err(err) => {
            tracing::debug!("hero handoff eval failed: {err:?}");
            false
        }
    }
}
