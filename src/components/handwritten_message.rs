//! The couple's note to their guests, set in a handwritten style.
//!
//! The note is authored in markdown so emphasis and line breaks survive
//! edits without touching layout code.

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};
use zaffa_core::Language;

use crate::context::use_locale;

const MESSAGE_EN: &str = "\
To our dearest family and friends,

Some moments are too big for two people alone. This is one of them.

Your presence is the only gift we ask for. Come celebrate with us,
dance with us, and share the first page of our story.

*With all our love,*

**Abdelrahman & Lamis**";

const MESSAGE_AR: &str = "\
إلى أهلنا وأصدقائنا الأعزاء،

هناك لحظات أكبر من أن يعيشها اثنان وحدهما، وهذه واحدة منها.

حضوركم هو الهدية الوحيدة التي نتمناها. تعالوا احتفلوا معنا،
وارقصوا معنا، وشاركونا أول صفحة من حكايتنا.

*مع كل حبنا،*

**عبد الرحمن ولميس**";

#[component]
pub fn HandwrittenMessage() -> Element {
    let locale = use_locale();

    let rendered = use_memo(move || {
        let source = match locale().language() {
            Language::En => MESSAGE_EN,
            Language::Ar => MESSAGE_AR,
        };
        render_markdown(source)
    });

    rsx! {
        div { class: "handwritten-message",
            h2 { class: "section-title", {locale().translate("message_title")} }
            div {
                class: "handwritten-body",
                dangerous_inner_html: "{rendered()}",
            }
        }
    }
}

/// Render a markdown note to HTML.
fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::empty());
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_notes_render_to_html() {
        for source in [MESSAGE_EN, MESSAGE_AR] {
            let html = render_markdown(source);
            assert!(html.contains("<p>"), "paragraphs survive rendering");
            assert!(html.contains("<em>"), "emphasis survives rendering");
            assert!(html.contains("<strong>"), "signature stays bold");
        }
    }

    #[test]
    fn test_notes_are_signed_by_the_couple() {
        assert!(render_markdown(MESSAGE_EN).contains("Abdelrahman &amp; Lamis"));
        assert!(render_markdown(MESSAGE_AR).contains("عبد الرحمن ولميس"));
    }
}
