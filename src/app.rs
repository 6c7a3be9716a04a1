use dioxus::prelude::*;
use zaffa_core::{InvitationDetails, LocaleState};

use crate::components::{LanguageToggle, VideoIntro};
use crate::pages::Invitation;
use crate::theme::GLOBAL_STYLES;

/// The opening video, played full screen before the page is revealed.
pub const INTRO_VIDEO: Asset = asset!("/assets/media/intro.mp4");

/// The hero video at the top of the invitation page.
pub const HERO_VIDEO: Asset = asset!("/assets/media/invitation.mp4");

/// Root application component.
///
/// Provides global styles, the locale and invitation contexts, and keeps
/// the intro overlay mounted until the sequencer hands off to the page.
#[component]
pub fn App() -> Element {
    let options = crate::launch_options();

    // Shared session state
    let locale: Signal<LocaleState> = use_signal(|| match options.language {
        Some(language) => LocaleState::new(language),
        None => LocaleState::detect(),
    });
    let mut intro_finished: Signal<bool> = use_signal(|| options.skip_intro);

    // Provide contexts to all child components
    use_context_provider(|| locale);
    use_context_provider(|| intro_finished);
    use_context_provider(InvitationDetails::default);

    rsx! {
        style { {GLOBAL_STYLES} }

        // The page mounts underneath the intro so the hero can buffer early
        if !intro_finished() {
            VideoIntro {
                intro_src: INTRO_VIDEO.to_string(),
                hero_src: HERO_VIDEO.to_string(),
                on_preload_hint: move |_| tracing::debug!("hero preload requested"),
                on_complete: move |_| intro_finished.set(true),
            }
        }

        LanguageToggle {}
        Invitation {}
    }
}
