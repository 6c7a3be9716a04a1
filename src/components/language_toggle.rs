//! Fixed-position language switcher.
//!
//! One button, always labeled with the language it would switch to.

use dioxus::prelude::*;

use crate::context::use_locale;

#[component]
pub fn LanguageToggle() -> Element {
    let mut locale = use_locale();
    let next = locale().language().toggled();

    rsx! {
        button {
            class: "language-toggle",
            "aria-label": "Switch language",
            onclick: move |_| {
                locale.write().toggle();
                tracing::debug!(language = %locale.peek().language(), "language switched");
            },
            "{next.native_name()}"
        }
    }
}
