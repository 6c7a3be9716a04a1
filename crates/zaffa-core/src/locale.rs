//! Session locale: language selection, text direction, and the bilingual
//! string catalog.
//!
//! The site speaks exactly two languages, English (LTR) and Egyptian Arabic
//! (RTL). Every user-facing string lives in one catalog keyed by a stable
//! snake_case identifier, so a key lookup can never straddle languages.
//! Missing keys are a programming error: lookups assert in debug builds and
//! fall back to the key string itself in release builds so rendering never
//! crashes in front of a guest.

use std::fmt;
use std::str::FromStr;

use crate::error::{ZaffaError, ZaffaResult};

/// One of the two supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// English, left-to-right
    #[default]
    En,
    /// Arabic, right-to-left
    Ar,
}

impl Language {
    /// BCP 47 primary subtag for this language.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Ar => "ar",
        }
    }

    /// How the language names itself, for toggle buttons.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Ar => "العربية",
        }
    }

    /// Text direction this language is written in.
    pub fn direction(&self) -> Direction {
        match self {
            Language::En => Direction::Ltr,
            Language::Ar => Direction::Rtl,
        }
    }

    /// The other supported language.
    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Ar,
            Language::Ar => Language::En,
        }
    }

    /// Parse a user-supplied language code such as `en`, `AR` or `ar-EG`.
    ///
    /// Only the primary subtag is considered. Anything outside the two
    /// supported languages is an error so callers can decide how loudly
    /// to complain.
    pub fn from_code(code: &str) -> ZaffaResult<Language> {
        match Self::from_locale_tag(code) {
            Some(language) => Ok(language),
            None => Err(ZaffaError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// Match a full locale tag (`ar-EG`, `en_US.UTF-8`, ...) against the
    /// supported languages, trying the whole tag first and then just the
    /// primary subtag. Returns None when neither language matches.
    pub fn from_locale_tag(tag: &str) -> Option<Language> {
        let tag = tag.trim().to_ascii_lowercase();
        if tag.is_empty() {
            return None;
        }
        for language in [Language::En, Language::Ar] {
            if tag == language.code() {
                return Some(language);
            }
        }
        let primary = tag.split(['-', '_', '.']).next().unwrap_or(&tag);
        for language in [Language::En, Language::Ar] {
            if primary == language.code() {
                return Some(language);
            }
        }
        None
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = ZaffaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

/// Horizontal writing direction, as used by the HTML `dir` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Ltr,
    Rtl,
}

impl Direction {
    /// Value suitable for the `dir` attribute.
    pub fn attr(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.attr())
    }
}

/// Current language of the session plus everything derived from it.
///
/// Cheap to copy; UI layers keep one instance in shared state and hand out
/// copies to whoever renders text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocaleState {
    language: Language,
}

impl LocaleState {
    /// Start a session in the given language.
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Start a session in the language the operating system reports,
    /// falling back to English when the system locale is missing or
    /// unsupported.
    pub fn detect() -> Self {
        let language = sys_locale::get_locale()
            .as_deref()
            .and_then(Language::from_locale_tag)
            .unwrap_or_default();
        tracing::debug!(%language, "detected session language");
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Swap to the other language.
    pub fn toggle(&mut self) {
        self.language = self.language.toggled();
    }

    pub fn direction(&self) -> Direction {
        self.language.direction()
    }

    pub fn is_rtl(&self) -> bool {
        self.direction() == Direction::Rtl
    }

    /// Look up a catalog string in the current language.
    ///
    /// Unknown keys assert in debug builds; release builds log a warning
    /// and render the key itself rather than blanking out the UI.
    pub fn translate<'a>(&self, key: &'a str) -> &'a str {
        match lookup(self.language, key) {
            Some(text) => text,
            None => {
                debug_assert!(false, "missing translation key: {key}");
                tracing::warn!(key, "missing translation key, rendering the key itself");
                key
            }
        }
    }
}

/// All keys the catalog knows, for exhaustiveness checks.
pub fn catalog_keys() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|entry| entry.0)
}

fn lookup(language: Language, key: &str) -> Option<&'static str> {
    CATALOG
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, en, ar)| match language {
            Language::En => *en,
            Language::Ar => *ar,
        })
}

/// The full bilingual catalog: (key, English, Arabic).
///
/// Keys are referenced from the UI as string literals; add here first.
const CATALOG: &[(&str, &str, &str)] = &[
    ("loading", "Loading...", "جارٍ التحميل..."),
    ("skip_hint", "Tap anywhere to skip", "اضغط في أي مكان للتخطي"),
    (
        "manual_play_hint",
        "Press play to start the video",
        "اضغط زر التشغيل لبدء الفيديو",
    ),
    ("scroll_down", "Scroll Down", "مرر للأسفل"),
    ("our_special_day", "Our Special Day", "يومنا المميز"),
    (
        "counting_moments",
        "Counting every moment until we celebrate together",
        "نعد كل لحظة حتى نحتفل معًا",
    ),
    ("days", "Days", "أيام"),
    ("hours", "Hours", "ساعات"),
    ("minutes", "Minutes", "دقائق"),
    ("seconds", "Seconds", "ثوانٍ"),
    ("join_us_at", "Join Us At", "انضموا إلينا في"),
    ("location", "Location", "الموقع"),
    ("date", "Date", "التاريخ"),
    ("time", "Time", "الوقت"),
    (
        "reception_note",
        "Reception at 6 PM, zaffa procession at 7 PM",
        "وقت الاستقبال ٦ مساءً ووقت الزفة ٧ مساءً",
    ),
    ("gentle_reminder", "Gentle Reminder", "تنبيه"),
    (
        "dress_code_note",
        "Gentlemen are kindly asked to attend in full formal suits",
        "الرجاء حضور الرجال ببدل كاملة رسمية",
    ),
    ("message_title", "A Note From Us", "رسالة منا"),
    ("rsvp_title", "Will You Join Us?", "هل ستنضمون إلينا؟"),
    (
        "rsvp_prompt",
        "We would be honored to have you with us",
        "يشرفنا حضوركم معنا",
    ),
    ("rsvp_name_placeholder", "Your name", "اسمك"),
    (
        "rsvp_name_required",
        "Please tell us your name",
        "من فضلك أخبرنا باسمك",
    ),
    ("rsvp_attending", "Joyfully attending", "سأحضر بكل سرور"),
    ("rsvp_declining", "Regretfully declining", "أعتذر عن الحضور"),
    ("rsvp_guests", "Guests", "عدد الضيوف"),
    ("rsvp_submit", "Send Reply", "إرسال الرد"),
    (
        "rsvp_thanks",
        "Thank you! We cannot wait to see you.",
        "شكرًا لكم! لا نطيق الانتظار لرؤيتكم.",
    ),
    (
        "rsvp_thanks_decline",
        "Thank you for letting us know. You will be missed.",
        "شكرًا لإخبارنا. سنفتقد حضوركم.",
    ),
    ("photos_title", "Share Your Photos", "شاركونا صوركم"),
    (
        "photos_prompt",
        "Add your favorite moments to our album",
        "أضيفوا أجمل لحظاتكم إلى ألبومنا",
    ),
    ("photos_add", "Add Photos", "إضافة صور"),
    (
        "photos_empty",
        "No photos yet, be the first to share one",
        "لا توجد صور بعد، كونوا أول من يشارك",
    ),
    ("photos_saving", "Adding photos...", "جارٍ إضافة الصور..."),
    ("venue_map_title", "Venue map", "خريطة المكان"),
    ("venue_map_loading", "Loading map...", "جارٍ تحميل الخريطة..."),
    ("view_on_maps", "View on Google Maps", "عرض على خرائط جوجل"),
    ("tap_to_open_map", "Tap to open map", "اضغط لفتح الخريطة"),
    (
        "directions_hint",
        "Scan the code or copy the link for directions",
        "امسحوا الرمز أو انسخوا الرابط للاتجاهات",
    ),
    ("copy_map_link", "Copy map link", "نسخ رابط الخريطة"),
    ("link_copied", "Link copied", "تم نسخ الرابط"),
    (
        "footer_message",
        "We cannot wait to celebrate with you",
        "لا نطيق الانتظار للاحتفال معكم",
    ),
];
