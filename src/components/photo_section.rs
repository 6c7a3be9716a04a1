//! Guest photo wall.
//!
//! File picker with decode, thumbnail, and a local album copy. Guests pick
//! photos off their machine; each one is validated by decoding, shrunk to a
//! preview, and the original is copied into the couple's album folder under
//! the system pictures directory.

use std::path::{Path, PathBuf};

use anyhow::Context;
use base64::Engine;
use dioxus::prelude::*;
use image::ImageFormat;
use rfd::FileDialog;

use crate::context::use_locale;

/// Longest edge of a preview tile, in pixels.
const PREVIEW_EDGE: u32 = 480;

#[derive(Clone, PartialEq)]
struct GuestPhoto {
    file_name: String,
    data_uri: String,
}

#[component]
pub fn PhotoSection() -> Element {
    let locale = use_locale();
    let mut photos = use_signal(Vec::<GuestPhoto>::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let pick_photos = move |_| {
        busy.set(true);
        error.set(None);

        spawn(async move {
            // Open file picker (blocking, but in spawn_blocking so the UI
            // stays responsive)
            let picked = tokio::task::spawn_blocking(|| {
                FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Choose photos to share")
                    .pick_files()
            })
            .await;

            match picked {
                Ok(Some(paths)) => {
                    for path in paths {
                        match load_preview(&path) {
                            Ok(photo) => {
                                // The album copy is best effort; a failure
                                // keeps the preview on the wall.
                                if let Err(err) = copy_to_album(&path) {
                                    tracing::warn!("album copy failed: {err:#}");
                                }
                                photos.write().push(photo);
                            }
                            Err(err) => {
                                error.set(Some(format!("{err:#}")));
                            }
                        }
                    }
                    busy.set(false);
                }
                Ok(None) => {
                    // User cancelled
                    busy.set(false);
                }
                Err(err) => {
                    error.set(Some(format!("File picker error: {err}")));
                    busy.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "photo-section",
            h2 { class: "section-title", {locale().translate("photos_title")} }
            p { class: "photo-prompt", {locale().translate("photos_prompt")} }

            if let Some(err) = error() {
                div { class: "photo-error",
                    span { "{err}" }
                    button {
                        class: "error-dismiss",
                        onclick: move |_| error.set(None),
                        "✕"
                    }
                }
            }

            if photos().is_empty() {
                p { class: "photo-empty", {locale().translate("photos_empty")} }
            } else {
                div { class: "photo-grid",
                    for photo in photos() {
                        img {
                            class: "photo-tile",
                            src: "{photo.data_uri}",
                            alt: "{photo.file_name}",
                        }
                    }
                }
            }

            button {
                class: "photo-add-button",
                disabled: busy(),
                onclick: pick_photos,
                if busy() {
                    {locale().translate("photos_saving")}
                } else {
                    {locale().translate("photos_add")}
                }
            }
        }
    }
}

/// Decode a picked file and build a small preview as a PNG data URI.
/// Decoding doubles as validation; anything unreadable is rejected here.
fn load_preview(path: &Path) -> anyhow::Result<GuestPhoto> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("photo")
        .to_string();

    let img = image::open(path).with_context(|| format!("could not read {file_name}"))?;
    let preview = img.thumbnail(PREVIEW_EDGE, PREVIEW_EDGE);

    let mut buffer = Vec::new();
    preview
        .write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Png)
        .context("could not encode preview")?;

    let encoded = base64::engine::general_purpose::STANDARD.encode(&buffer);
    Ok(GuestPhoto {
        file_name,
        data_uri: format!("data:image/png;base64,{}", encoded),
    })
}

/// Copy the original file into the album folder, creating it on first use.
fn copy_to_album(path: &Path) -> anyhow::Result<PathBuf> {
    let album_dir = dirs::picture_dir()
        .context("no pictures directory on this system")?
        .join("zaffa-album");
    std::fs::create_dir_all(&album_dir)
        .with_context(|| format!("could not create {}", album_dir.display()))?;

    let file_name = path
        .file_name()
        .context("picked file has no name")?;
    let destination = album_dir.join(file_name);
    std::fs::copy(path, &destination)
        .with_context(|| format!("could not copy into {}", destination.display()))?;

    tracing::info!(photo = %destination.display(), "photo added to the album");
    Ok(destination)
}
