//! Venue card: where the celebration happens and how to get there.
//!
//! Desktop stand-in for a tappable map: a static map image, a QR code a
//! phone can scan for directions, and a copy-link button for everyone else.

use base64::Engine;
use dioxus::prelude::*;

use crate::context::{use_invitation, use_locale};
use crate::theme::colors;

const MAP_IMAGE: Asset = asset!("/assets/images/venue-map.png");

#[component]
pub fn VenueMap() -> Element {
    let locale = use_locale();
    let invitation = use_invitation();
    let mut map_loaded = use_signal(|| false);
    let mut copied = use_signal(|| false);

    let language = locale().language();
    let maps_url = invitation.maps_url();
    let qr_data_url = use_memo({
        let url = maps_url.clone();
        move || generate_qr_data_url(&url)
    });

    let copy_link = {
        let url = maps_url.clone();
        move |_| {
            let link = url.clone();
            spawn(async move {
                // Use arboard for cross-platform clipboard access
                match arboard::Clipboard::new() {
                    Ok(mut clipboard) => {
                        if clipboard.set_text(&link).is_ok() {
                            tracing::debug!("maps link copied");
                            copied.set(true);
                            // Reset copied state after 2 seconds
                            tokio::time::sleep(std::time::Duration::from_secs(2)).await;
                            copied.set(false);
                        }
                    }
                    Err(err) => {
                        tracing::warn!("Clipboard not available: {}", err);
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "venue-map",
            // External links open in the system browser on desktop
            a { class: "venue-map-frame", href: "{maps_url}",
                if !map_loaded() {
                    div { class: "venue-map-veil",
                        div { class: "loading-spinner" }
                        span { {locale().translate("venue_map_loading")} }
                    }
                }
                img {
                    class: "venue-map-image",
                    src: MAP_IMAGE,
                    alt: locale().translate("venue_map_title"),
                    onload: move |_| map_loaded.set(true),
                }
                div { class: "venue-map-caption", {locale().translate("tap_to_open_map")} }
            }

            div { class: "venue-directions",
                if let Some(qr) = qr_data_url() {
                    img {
                        class: "venue-qr",
                        src: "{qr}",
                        alt: locale().translate("view_on_maps"),
                    }
                }
                p { class: "venue-directions-hint", {locale().translate("directions_hint")} }
                a {
                    class: "venue-maps-link",
                    href: "{maps_url}",
                    {locale().translate("view_on_maps")}
                }
                button {
                    class: "venue-copy-button",
                    onclick: copy_link,
                    if copied() {
                        {locale().translate("link_copied")}
                    } else {
                        {locale().translate("copy_map_link")}
                    }
                }
                p { class: "venue-address", "{invitation.venue(language)}, {invitation.city(language)}" }
            }
        }
    }
}

/// Generate QR code data URL from a string.
///
/// Returns a base64-encoded SVG data URL that can be used as an img src.
/// Returns None if QR code generation fails.
fn generate_qr_data_url(data: &str) -> Option<String> {
    use qrcode::render::svg;
    use qrcode::QrCode;

    let code = QrCode::new(data.as_bytes()).ok()?;

    // Render as SVG for crisp scaling
    let svg_string = code
        .render()
        .min_dimensions(180, 180)
        .dark_color(svg::Color(colors::INK))
        .light_color(svg::Color(colors::IVORY))
        .build();

    let encoded = base64::engine::general_purpose::STANDARD.encode(svg_string.as_bytes());
    Some(format!("data:image/svg+xml;base64,{}", encoded))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_data_url_is_renderable_svg() {
        let url = generate_qr_data_url("https://www.google.com/maps/search/?api=1&query=test")
            .expect("QR generation must succeed for a short URL");

        let payload = url
            .strip_prefix("data:image/svg+xml;base64,")
            .expect("data URL prefix");
        let decoded = base64::engine::general_purpose::STANDARD
            .decode(payload)
            .expect("payload must be valid base64");
        let svg = String::from_utf8(decoded).expect("SVG must be UTF-8");
        assert!(svg.contains("<svg"));
        assert!(svg.contains(colors::INK));
    }

    #[test]
    fn test_qr_encodes_the_venue_link() {
        let details = zaffa_core::InvitationDetails::default();
        assert!(generate_qr_data_url(&details.maps_url()).is_some());
    }
}
