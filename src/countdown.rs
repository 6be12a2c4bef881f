use chrono::{DateTime, Utc};

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Whole days, hours, minutes and seconds left until the deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TimeLeft {
    pub days: u64,
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl TimeLeft {
    pub fn until(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        Self::from_distance_millis((target - now).num_milliseconds())
    }

    /// Each field is floored and clamped on its own, so a negative distance
    /// reads as zero everywhere rather than borrowing from larger units.
    pub fn from_distance_millis(distance: i64) -> Self {
        Self {
            days: clamp(distance.div_euclid(DAY_MS)),
            hours: clamp((distance % DAY_MS).div_euclid(HOUR_MS)),
            minutes: clamp((distance % HOUR_MS).div_euclid(MINUTE_MS)),
            seconds: clamp((distance % MINUTE_MS).div_euclid(SECOND_MS)),
        }
    }

    pub fn total_seconds(&self) -> u64 {
        self.days * 86_400 + self.hours * 3_600 + self.minutes * 60 + self.seconds
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Label and value of each display cell, largest unit first.
    pub fn cells(&self) -> [(&'static str, u64); 4] {
        [
            ("days", self.days),
            ("hours", self.hours),
            ("minutes", self.minutes),
            ("seconds", self.seconds),
        ]
    }
}

fn clamp(value: i64) -> u64 {
    value.max(0) as u64
}
