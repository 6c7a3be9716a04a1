//! Color constants for the invitation palette.
//!
//! Warm paper-and-gold wedding aesthetic. The same values are mirrored as
//! CSS custom properties in the global stylesheet.

#![allow(dead_code)]

// === PAPER (Backgrounds) ===
pub const IVORY: &str = "#faf7f2";
pub const CREAM: &str = "#f3ede2";
pub const CHAMPAGNE: &str = "#e9dcc9";

// === NIGHT (Intro overlay) ===
pub const NIGHT: &str = "#0b0a09";

// === GOLD (Ornament, Titles, Buttons) ===
pub const GOLD: &str = "#b08d57";
pub const GOLD_DEEP: &str = "#8a6c3f";
pub const GOLD_GLOW: &str = "rgba(176, 141, 87, 0.35)";

// === ROSE (Accents) ===
pub const ROSE: &str = "#b76e79";

// === INK (Text) ===
pub const INK: &str = "#2f2a26";
pub const INK_SOFT: &str = "rgba(47, 42, 38, 0.72)";
pub const INK_FAINT: &str = "rgba(47, 42, 38, 0.5)";

// === SEMANTIC ===
pub const ERROR: &str = "#a33a3a";
