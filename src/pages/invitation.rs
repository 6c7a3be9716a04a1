//! The invitation page.
//!
//! A single scrolling column: hero video, countdown, venue details, the
//! couple's note, RSVP, and the guest photo wall. The hero section stays
//! veiled behind the intro overlay and fades in when the handoff lands.

use dioxus::prelude::*;

use crate::app::HERO_VIDEO;
use crate::components::{
    CountdownTimer, HandwrittenMessage, HeroVideo, PhotoSection, RsvpSection, VenueMap,
};
use crate::context::{use_intro_finished, use_invitation, use_locale};

#[component]
pub fn Invitation() -> Element {
    let locale = use_locale();
    let intro_finished = use_intro_finished();
    let invitation = use_invitation();

    let language = locale().language();
    let dir = locale().direction().attr();

    let scroll_to_countdown = move |_| {
        document::eval(
            "document.getElementById('countdown-section')?.scrollIntoView({behavior:'smooth'})",
        );
    };

    rsx! {
        main {
            class: "invitation",
            dir: "{dir}",
            lang: "{language.code()}",

            section {
                class: if intro_finished() { "hero-section hero-revealed" } else { "hero-section" },
                HeroVideo { src: HERO_VIDEO.to_string() }
                div { class: "hero-overlay",
                    h1 { class: "hero-names", "{invitation.couple(language)}" }
                    p { class: "hero-date", "{invitation.formatted_date(language)}" }
                }
                button {
                    class: "scroll-hint",
                    onclick: scroll_to_countdown,
                    span { class: "scroll-hint-label", {locale().translate("scroll_down")} }
                    span { class: "scroll-hint-arrow", "↓" }
                }
            }

            section { id: "countdown-section", class: "countdown-section",
                h2 { class: "section-title", {locale().translate("our_special_day")} }
                p { class: "section-subtitle", {locale().translate("counting_moments")} }
                CountdownTimer {}
            }

            section { class: "venue-section",
                h2 { class: "section-title", {locale().translate("join_us_at")} }
                p { class: "venue-name", "{invitation.venue(language)}" }

                div { class: "event-facts",
                    div { class: "event-fact",
                        span { class: "event-fact-label", {locale().translate("location")} }
                        span { class: "event-fact-value", "{invitation.city(language)}" }
                    }
                    div { class: "event-fact",
                        span { class: "event-fact-label", {locale().translate("date")} }
                        span { class: "event-fact-value", "{invitation.formatted_date(language)}" }
                    }
                    div { class: "event-fact",
                        span { class: "event-fact-label", {locale().translate("time")} }
                        span { class: "event-fact-value", "{invitation.formatted_time(language)}" }
                    }
                }
                p { class: "reception-note", {locale().translate("reception_note")} }

                VenueMap {}
            }

            HandwrittenMessage {}
            RsvpSection {}
            PhotoSection {}

            section { class: "reminder-card",
                h3 { class: "reminder-title", {locale().translate("gentle_reminder")} }
                p { class: "reminder-body", {locale().translate("dress_code_note")} }
            }

            footer { class: "invitation-footer",
                p { class: "footer-names", "{invitation.couple(language)}" }
                p { class: "footer-message", {locale().translate("footer_message")} }
                p { class: "footer-date", "{invitation.formatted_date(language)}" }
            }
        }
    }
}
