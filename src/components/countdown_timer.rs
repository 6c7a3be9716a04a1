//! Ticking countdown to the celebration.

use chrono::Local;
use dioxus::prelude::*;
use zaffa_core::TimeRemaining;

use crate::context::{use_invitation, use_locale};

#[component]
pub fn CountdownTimer() -> Element {
    let locale = use_locale();
    let invitation = use_invitation();
    let target = invitation.event_at();
    let mut remaining = use_signal(|| TimeRemaining::between(Local::now().naive_local(), target));

    // One tick per second for the life of the page.
    use_effect(move || {
        spawn(async move {
            loop {
                tokio::time::sleep(std::time::Duration::from_secs(1)).await;
                remaining.set(TimeRemaining::between(Local::now().naive_local(), target));
            }
        });
    });

    let time = remaining();
    let units = [
        (time.days, locale().translate("days")),
        (time.hours, locale().translate("hours")),
        (time.minutes, locale().translate("minutes")),
        (time.seconds, locale().translate("seconds")),
    ];

    rsx! {
        div { class: "countdown",
            for (value, label) in units {
                div { class: "countdown-tile",
                    span { class: "countdown-value", "{value}" }
                    span { class: "countdown-label", "{label}" }
                }
            }
        }
    }
}
