//! RSVP form.
//!
//! Replies stay on this machine: the reply is logged for the couple to
//! collect and the guest gets a warm acknowledgement. No network involved.

use dioxus::prelude::*;

use crate::context::use_locale;

#[derive(Clone, Copy, PartialEq)]
enum RsvpChoice {
    Attending,
    Declining,
}

#[component]
pub fn RsvpSection() -> Element {
    let locale = use_locale();
    let mut name = use_signal(String::new);
    let mut guests = use_signal(|| 1u32);
    let mut choice = use_signal(|| RsvpChoice::Attending);
    let mut name_missing = use_signal(|| false);
    let mut submitted = use_signal(|| Option::<RsvpChoice>::None);

    let submit = move |_| {
        let guest_name = name().trim().to_string();
        if guest_name.is_empty() {
            name_missing.set(true);
            return;
        }
        let reply = choice();
        tracing::info!(
            name = %guest_name,
            attending = reply == RsvpChoice::Attending,
            guests = guests(),
            "rsvp received"
        );
        submitted.set(Some(reply));
    };

    rsx! {
        div { class: "rsvp-section",
            h2 { class: "section-title", {locale().translate("rsvp_title")} }

            if let Some(reply) = submitted() {
                p { class: "rsvp-thanks",
                    if reply == RsvpChoice::Attending {
                        {locale().translate("rsvp_thanks")}
                    } else {
                        {locale().translate("rsvp_thanks_decline")}
                    }
                }
            } else {
                p { class: "rsvp-prompt", {locale().translate("rsvp_prompt")} }

                input {
                    class: if name_missing() { "rsvp-name rsvp-name-missing" } else { "rsvp-name" },
                    r#type: "text",
                    placeholder: locale().translate("rsvp_name_placeholder"),
                    value: "{name}",
                    oninput: move |evt| {
                        name.set(evt.value());
                        name_missing.set(false);
                    },
                }
                if name_missing() {
                    p { class: "rsvp-error", {locale().translate("rsvp_name_required")} }
                }

                div { class: "rsvp-choices",
                    button {
                        class: if choice() == RsvpChoice::Attending { "rsvp-choice rsvp-choice-active" } else { "rsvp-choice" },
                        onclick: move |_| choice.set(RsvpChoice::Attending),
                        {locale().translate("rsvp_attending")}
                    }
                    button {
                        class: if choice() == RsvpChoice::Declining { "rsvp-choice rsvp-choice-active" } else { "rsvp-choice" },
                        onclick: move |_| choice.set(RsvpChoice::Declining),
                        {locale().translate("rsvp_declining")}
                    }
                }

                if choice() == RsvpChoice::Attending {
                    div { class: "rsvp-guests",
                        label { class: "rsvp-guests-label", {locale().translate("rsvp_guests")} }
                        input {
                            class: "rsvp-guests-input",
                            r#type: "number",
                            min: "1",
                            max: "8",
                            value: "{guests}",
                            oninput: move |evt| {
                                if let Ok(count) = evt.value().parse::<u32>() {
                                    guests.set(count.clamp(1, 8));
                                }
                            },
                        }
                    }
                }

                button {
                    class: "rsvp-submit",
                    onclick: submit,
                    {locale().translate("rsvp_submit")}
                }
            }
        }
    }
}
