//! Page components for the zaffa invitation.

mod invitation;

pub use invitation::Invitation;
