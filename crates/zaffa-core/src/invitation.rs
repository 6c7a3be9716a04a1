//! Typed invitation content: the couple, the venue, the schedule.
//!
//! Proper nouns (names, venue, city) carry their own renderings in both
//! languages instead of going through the translation catalog, since they
//! are data, not interface chrome. Date formatting leans on chrono's
//! localized month names so Arabic sessions read Arabic dates.

use chrono::{Locale, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{ZaffaError, ZaffaResult};
use crate::locale::Language;

// Compile-time checked default schedule: March 29, 2026 at 6:00 PM.
const DEFAULT_EVENT_DATE: NaiveDate = match NaiveDate::from_ymd_opt(2026, 3, 29) {
    Some(date) => date,
    None => panic!("invalid default event date"),
};
const DEFAULT_EVENT_TIME: NaiveTime = match NaiveTime::from_hms_opt(18, 0, 0) {
    Some(time) => time,
    None => panic!("invalid default event time"),
};

/// A value carried in both site languages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BilingualText {
    en: String,
    ar: String,
}

impl BilingualText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }

    /// The rendering for the given language.
    pub fn get(&self, language: Language) -> &str {
        match language {
            Language::En => &self.en,
            Language::Ar => &self.ar,
        }
    }
}

/// Everything the invitation says about the event itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvitationDetails {
    couple: BilingualText,
    venue: BilingualText,
    city: BilingualText,
    event_date: NaiveDate,
    event_time: NaiveTime,
    maps_query: String,
}

impl Default for InvitationDetails {
    fn default() -> Self {
        Self {
            couple: BilingualText::new("Abdelrahman & Lamis", "عبد الرحمن ولميس"),
            venue: BilingualText::new("Helnan Maamora", "هلنان المعمورة"),
            city: BilingualText::new("Alexandria, Egypt", "الإسكندرية، مصر"),
            event_date: DEFAULT_EVENT_DATE,
            event_time: DEFAULT_EVENT_TIME,
            maps_query: "Helnan Maamora Alexandria".to_string(),
        }
    }
}

impl InvitationDetails {
    /// Replace the schedule, validating the calendar values.
    pub fn with_event(
        mut self,
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
    ) -> ZaffaResult<Self> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            ZaffaError::InvalidSchedule(format!("{year:04}-{month:02}-{day:02}"))
        })?;
        let time = NaiveTime::from_hms_opt(hour, minute, 0)
            .ok_or_else(|| ZaffaError::InvalidSchedule(format!("{hour:02}:{minute:02}")))?;
        self.event_date = date;
        self.event_time = time;
        Ok(self)
    }

    pub fn couple(&self, language: Language) -> &str {
        self.couple.get(language)
    }

    pub fn venue(&self, language: Language) -> &str {
        self.venue.get(language)
    }

    pub fn city(&self, language: Language) -> &str {
        self.city.get(language)
    }

    /// The event moment in local wall-clock time, for countdowns.
    pub fn event_at(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.event_date, self.event_time)
    }

    /// The event date written out in the session language,
    /// e.g. "March 29, 2026" or "29 مارس 2026".
    pub fn formatted_date(&self, language: Language) -> String {
        match language {
            Language::En => self
                .event_date
                .format_localized("%B %-d, %Y", Locale::en_US)
                .to_string(),
            Language::Ar => self
                .event_date
                .format_localized("%-d %B %Y", Locale::ar_EG)
                .to_string(),
        }
    }

    /// The event time on a 12-hour clock with a localized meridiem.
    pub fn formatted_time(&self, language: Language) -> String {
        use chrono::Timelike;

        let (is_pm, hour12) = self.event_time.hour12();
        let minute = self.event_time.minute();
        let meridiem = match (language, is_pm) {
            (Language::En, false) => "AM",
            (Language::En, true) => "PM",
            (Language::Ar, false) => "صباحًا",
            (Language::Ar, true) => "مساءً",
        };
        format!("{hour12}:{minute:02} {meridiem}")
    }

    /// Google Maps search URL for the venue.
    pub fn maps_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={}",
            self.maps_query.replace(' ', "%20")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_schedule() {
        let details = InvitationDetails::default();
        let event = details.event_at();
        assert_eq!(event.format("%Y-%m-%d %H:%M").to_string(), "2026-03-29 18:00");
    }

    #[test]
    fn test_bilingual_proper_nouns() {
        let details = InvitationDetails::default();
        assert_eq!(details.couple(Language::En), "Abdelrahman & Lamis");
        assert_eq!(details.venue(Language::Ar), "هلنان المعمورة");
        assert_eq!(details.city(Language::En), "Alexandria, Egypt");
    }

    #[test]
    fn test_formatted_date_per_language() {
        let details = InvitationDetails::default();
        assert_eq!(details.formatted_date(Language::En), "March 29, 2026");
        let arabic = details.formatted_date(Language::Ar);
        assert!(arabic.contains("مارس"), "expected Arabic month in {arabic}");
        assert!(arabic.contains("2026"));
    }

    #[test]
    fn test_formatted_time_per_language() {
        let details = InvitationDetails::default();
        assert_eq!(details.formatted_time(Language::En), "6:00 PM");
        assert_eq!(details.formatted_time(Language::Ar), "6:00 مساءً");

        let morning = InvitationDetails::default()
            .with_event(2026, 3, 29, 9, 30)
            .unwrap();
        assert_eq!(morning.formatted_time(Language::En), "9:30 AM");
        assert_eq!(morning.formatted_time(Language::Ar), "9:30 صباحًا");
    }

    #[test]
    fn test_with_event_rejects_impossible_dates() {
        let details = InvitationDetails::default();
        assert!(details.clone().with_event(2026, 2, 30, 18, 0).is_err());
        assert!(details.clone().with_event(2026, 3, 29, 25, 0).is_err());
        assert!(details.with_event(2027, 1, 1, 0, 0).is_ok());
    }

    #[test]
    fn test_maps_url_is_encoded() {
        let details = InvitationDetails::default();
        assert_eq!(
            details.maps_url(),
            "https://www.google.com/maps/search/?api=1&query=Helnan%20Maamora%20Alexandria"
        );
    }
}
