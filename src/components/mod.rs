//! UI Components for the zaffa invitation.

mod countdown_timer;
mod handwritten_message;
mod hero_video;
mod language_toggle;
mod photo_section;
mod rsvp_section;
mod venue_map;
mod video_intro;

pub use countdown_timer::CountdownTimer;
pub use handwritten_message::HandwrittenMessage;
pub use hero_video::HeroVideo;
pub use language_toggle::LanguageToggle;
pub use photo_section::PhotoSection;
pub use rsvp_section::RsvpSection;
pub use venue_map::VenueMap;
pub use video_intro::VideoIntro;
