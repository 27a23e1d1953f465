use std::fmt;
use std::str::FromStr;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::PlanError;

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day, "HH:MM" on the wire.
///
/// Stored as minutes since midnight. There is no date or timezone component and
/// arithmetic never wraps past midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(u16);

impl ClockTime {
    /// Constructor for literals in `const` items, where an out-of-range value fails to compile.
    pub(crate) const fn at(hours: u16, minutes: u16) -> Self {
        assert!(hours < 24 && minutes < 60, "clock time out of range");
        Self(hours * 60 + minutes)
    }

    /// Builds a time from hours and minutes, `None` when out of range.
    pub fn from_hm(hours: u16, minutes: u16) -> Option<Self> {
        if hours < 24 && minutes < 60 {
            Some(Self(hours * 60 + minutes))
        } else {
            None
        }
    }

    /// Builds a time from minutes since midnight, `None` past 23:59.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Adds minutes, `None` if the result would cross midnight.
    pub fn checked_add_minutes(self, minutes: u16) -> Option<Self> {
        self.0.checked_add(minutes).and_then(Self::from_minutes)
    }

    /// Signed distance in minutes from `self` to `later`.
    pub fn minutes_until(self, later: ClockTime) -> i32 {
        i32::from(later.0) - i32::from(self.0)
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

impl FromStr for ClockTime {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let time = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|e| PlanError::Validation(format!("Invalid time '{}': {}", s, e)))?;

        // %H:%M never yields seconds, so hour/minute fully describe the value
        Ok(Self((time.hour() * 60 + time.minute()) as u16))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
