use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::clock::ClockTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PottyEventKind {
    Wake,
    Meal,
    PottyMeal,
    PottyWake,
    PottyBed,
    PottyMaintenance,
}

impl PottyEventKind {
    /// Food or water going in, as opposed to an elimination opportunity.
    pub fn is_input(self) -> bool {
        matches!(self, PottyEventKind::Meal)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PottyEvent {
    pub id: String,
    pub time: ClockTime,
    pub kind: PottyEventKind,
    pub label: String,
    pub is_input: bool,
    #[serde(default)]
    pub completed: bool,
}

impl PottyEvent {
    pub fn new(
        id: impl Into<String>,
        time: ClockTime,
        kind: PottyEventKind,
        label: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            time,
            kind,
            label: label.into(),
            is_input: kind.is_input(),
            completed: false,
        }
    }
}

/// Daily routine a schedule is generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PottyScheduleConfig {
    pub wake_time: ClockTime,
    pub bed_time: ClockTime,
    pub meal_times: Vec<ClockTime>,
}

impl PottyScheduleConfig {
    /// Default wake and bed times around a dog's feeding schedule.
    ///
    /// An empty feeding schedule falls back to the default 08:00 / 18:00 meals.
    pub fn with_feeding_schedule(meal_times: Vec<ClockTime>) -> Self {
        let defaults = Self::default();
        if meal_times.is_empty() {
            return defaults;
        }
        Self {
            meal_times,
            ..defaults
        }
    }
}

const DEFAULT_WAKE_TIME: ClockTime = ClockTime::at(7, 0);
const DEFAULT_BED_TIME: ClockTime = ClockTime::at(22, 0);
const DEFAULT_MEAL_TIMES: [ClockTime; 2] = [ClockTime::at(8, 0), ClockTime::at(18, 0)];

impl Default for PottyScheduleConfig {
    fn default() -> Self {
        Self {
            wake_time: DEFAULT_WAKE_TIME,
            bed_time: DEFAULT_BED_TIME,
            meal_times: DEFAULT_MEAL_TIMES.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateScheduleRequest {
    pub birth_date: NaiveDate,
    /// Reference date for the age calculation, defaults to the server's current date
    pub today: Option<NaiveDate>,
    #[serde(default)]
    pub config: Option<PottyScheduleConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PottyScheduleResponse {
    pub age_months: u32,
    pub max_hold_minutes: u16,
    pub events: Vec<PottyEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPottyScheduleResponse {
    pub dog_id: String,
    pub date: NaiveDate,
    pub age_months: u32,
    pub max_hold_minutes: u16,
    pub events: Vec<PottyEvent>,
    pub completed_count: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionsResponse {
    pub dog_id: String,
    pub date: NaiveDate,
    pub completed: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToggleCompletionResponse {
    pub event_id: String,
    pub completed: bool,
    pub completed_ids: Vec<String>,
}
