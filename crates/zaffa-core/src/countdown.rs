//! Countdown arithmetic for the big day.

use chrono::NaiveDateTime;

const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * 60;
const SECS_PER_DAY: i64 = 24 * 60 * 60;

/// Wall-clock time left until the event, broken into display units.
///
/// Always non-negative: once the event has passed, every field is zero and
/// [`TimeRemaining::is_elapsed`] reports true.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeRemaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl TimeRemaining {
    /// Remaining time from `now` to `target`, clamped at zero.
    pub fn between(now: NaiveDateTime, target: NaiveDateTime) -> Self {
        let total = (target - now).num_seconds().max(0);
        Self {
            days: total / SECS_PER_DAY,
            hours: total / SECS_PER_HOUR % 24,
            minutes: total / SECS_PER_MINUTE % 60,
            seconds: total % 60,
        }
    }

    /// True once the target moment has been reached or passed.
    pub fn is_elapsed(&self) -> bool {
        self.days == 0 && self.hours == 0 && self.minutes == 0 && self.seconds == 0
    }
}
