//! Visual theme: palette constants and the global stylesheet.

pub mod colors;
pub mod styles;

pub use styles::GLOBAL_STYLES;
