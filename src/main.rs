#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::tao::window::Fullscreen;
use dioxus::desktop::{Config, WindowBuilder};
use zaffa_core::{InvitationDetails, Language};

/// Launch-time choices, set once from the command line
static LAUNCH_OPTIONS: OnceLock<LaunchOptions> = OnceLock::new();

#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    /// Forced interface language; None means detect from the system
    pub language: Option<Language>,
    /// Start on the invitation page without playing the intro
    pub skip_intro: bool,
}

/// Get the launch options (set from command line or defaults)
pub fn launch_options() -> LaunchOptions {
    LAUNCH_OPTIONS.get().cloned().unwrap_or_default()
}

/// Zaffa - Bilingual Wedding Invitation
#[derive(Parser, Debug)]
#[command(name = "zaffa-desktop")]
#[command(about = "Zaffa - bilingual wedding invitation with a video intro")]
struct Args {
    /// Interface language (en or ar); detected from the system when omitted
    #[arg(short, long)]
    lang: Option<String>,

    /// Launch in borderless fullscreen
    #[arg(short, long)]
    fullscreen: bool,

    /// Skip the intro video and open straight on the invitation
    #[arg(long)]
    skip_intro: bool,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // An unknown language code falls back to detection rather than aborting
    let language = match args.lang.as_deref().map(Language::from_code) {
        Some(Ok(language)) => Some(language),
        Some(Err(err)) => {
            tracing::warn!("{err}, detecting from the system instead");
            None
        }
        None => None,
    };

    let _ = LAUNCH_OPTIONS.set(LaunchOptions {
        language,
        skip_intro: args.skip_intro,
    });

    // Portrait-ish window, matching the phone-first layout of the page
    let window_width = 560.0;
    let window_height = 940.0;

    let details = InvitationDetails::default();
    let title = format!("{} - Wedding Celebration", details.couple(Language::En));

    tracing::info!(
        fullscreen = args.fullscreen,
        skip_intro = args.skip_intro,
        "Starting '{}'",
        title
    );

    // Configure desktop window
    let mut window = WindowBuilder::new()
        .with_title(&title)
        .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
        .with_resizable(true);
    if args.fullscreen {
        window = window.with_fullscreen(Some(Fullscreen::Borderless(None)));
    }

    let config = Config::new().with_window(window);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
