//! # Potty Schedule Generator
//!
//! Turns a dog's age and daily routine into a time-ordered list of elimination
//! opportunities for a single day.
//!
//! The schedule is assembled in three passes:
//!
//! 1. Anchors: the wake-up break and the bedtime break
//! 2. Meals: every meal plus a reflex break 20 minutes later
//! 3. Maintenance: any gap longer than the dog can hold its bladder is split by
//!    breaks placed at whole multiples of the hold interval
//!
//! The hold interval is one hour per month of age, capped at eight hours. Output
//! depends only on the inputs, ids included, so regenerating a schedule keeps
//! externally stored completion flags attached to the right events.

use chrono::{Datelike, NaiveDate};
use tracing::{debug, warn};

use crate::errors::{PlanError, PlanResult};
use crate::models::clock::ClockTime;
use crate::models::potty::{PottyEvent, PottyEventKind, PottyScheduleConfig};

/// Delay between a meal and the gastrocolic-reflex break.
pub const GASTROCOLIC_DELAY_MINUTES: u16 = 20;
/// Age from which the hold interval stops growing.
pub const ADULT_AGE_MONTHS: u32 = 8;
/// A maintenance break is skipped when it would land closer than this to the next event.
pub const MIN_REMAINDER_MINUTES: u16 = 30;

/// A generated schedule together with the values it was derived from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PottySchedule {
    pub age_months: u32,
    pub max_hold_minutes: u16,
    pub events: Vec<PottyEvent>,
}

/// Whole calendar months between `birth_date` and `today`, never less than 1.
pub fn age_in_months(birth_date: NaiveDate, today: NaiveDate) -> u32 {
    let mut months = (today.year() - birth_date.year()) * 12 + today.month() as i32
        - birth_date.month() as i32;
    if today.day() < birth_date.day() {
        months -= 1;
    }

    months.max(1) as u32
}

/// Longest interval, in minutes, a dog of this age is expected to hold its bladder.
pub fn max_hold_minutes(age_months: u32) -> u16 {
    (age_months.clamp(1, ADULT_AGE_MONTHS) * 60) as u16
}

/// Rejects routines the generator cannot lay out within one day.
pub fn validate_config(config: &PottyScheduleConfig) -> PlanResult<()> {
    if config.wake_time >= config.bed_time {
        return Err(PlanError::Configuration(format!(
            "Wake time {} must be before bed time {}",
            config.wake_time, config.bed_time
        )));
    }

    for (i, meal) in config.meal_times.iter().enumerate() {
        if *meal < config.wake_time || *meal > config.bed_time {
            return Err(PlanError::Configuration(format!(
                "Meal {} at {} is outside the waking day {}-{}",
                i + 1,
                meal,
                config.wake_time,
                config.bed_time
            )));
        }
    }

    if let Some(pair) = config.meal_times.windows(2).find(|pair| pair[0] >= pair[1]) {
        return Err(PlanError::Configuration(format!(
            "Meal times must be strictly increasing, got {} then {}",
            pair[0], pair[1]
        )));
    }

    Ok(())
}

/// Generates the schedule for a dog born on `birth_date`, with age measured on `today`.
pub fn generate_for_birth_date(
    config: &PottyScheduleConfig,
    birth_date: NaiveDate,
    today: NaiveDate,
) -> PlanResult<PottySchedule> {
    let age_months = age_in_months(birth_date, today);
    let events = generate_schedule(config, age_months)?;

    Ok(PottySchedule {
        age_months,
        max_hold_minutes: max_hold_minutes(age_months),
        events,
    })
}

/// Generates the day's events for a dog of `age_months`.
///
/// Ages of zero are treated as one month.
pub fn generate_schedule(
    config: &PottyScheduleConfig,
    age_months: u32,
) -> PlanResult<Vec<PottyEvent>> {
    if let Err(e) = validate_config(config) {
        warn!("Rejected potty schedule config: {}", e);
        return Err(e);
    }

    let max_hold = max_hold_minutes(age_months);
    debug!(
        "Generating potty schedule: age_months={}, max_hold_minutes={}, meals={}",
        age_months,
        max_hold,
        config.meal_times.len()
    );

    let anchors = anchor_events(config)?;
    Ok(fill_gaps(anchors, max_hold))
}

fn anchor_events(config: &PottyScheduleConfig) -> PlanResult<Vec<PottyEvent>> {
    let mut events = Vec::with_capacity(config.meal_times.len() * 2 + 2);

    events.push(PottyEvent::new(
        "wake",
        config.wake_time,
        PottyEventKind::Wake,
        "Wake-up potty break",
    ));

    let last = config.meal_times.len().saturating_sub(1);
    for (i, &meal_time) in config.meal_times.iter().enumerate() {
        let meal_name = match i {
            0 => "Breakfast",
            i if i == last => "Dinner",
            _ => "Lunch",
        };

        let reflex_time = meal_time
            .checked_add_minutes(GASTROCOLIC_DELAY_MINUTES)
            .ok_or_else(|| {
                PlanError::Configuration(format!(
                    "Potty break after {} at {} would fall past midnight",
                    meal_name, meal_time
                ))
            })?;

        events.push(PottyEvent::new(
            format!("meal-{}", i),
            meal_time,
            PottyEventKind::Meal,
            meal_name,
        ));
        events.push(PottyEvent::new(
            format!("potty-meal-{}", i),
            reflex_time,
            PottyEventKind::PottyMeal,
            format!("Potty after {}", meal_name),
        ));
    }

    events.sort_by_key(|e| e.time);
    events.push(PottyEvent::new(
        "bed",
        config.bed_time,
        PottyEventKind::PottyBed,
        "Bedtime potty break",
    ));
    events.sort_by_key(|e| e.time);

    Ok(events)
}

fn fill_gaps(anchors: Vec<PottyEvent>, max_hold: u16) -> Vec<PottyEvent> {
    let mut schedule = Vec::with_capacity(anchors.len());
    let mut inserted: usize = 0;
    let mut iter = anchors.into_iter().peekable();

    while let Some(current) = iter.next() {
        let current_time = current.time;
        schedule.push(current);

        let Some(next_time) = iter.peek().map(|next| next.time) else {
            break;
        };

        let gap = current_time.minutes_until(next_time);
        if gap <= i32::from(max_hold) {
            continue;
        }

        // gap > max_hold >= 60 here, so the cast and the decrement are safe
        let gap = gap as u16;
        let mut insert_count = gap / max_hold;
        if gap % max_hold < MIN_REMAINDER_MINUTES {
            insert_count -= 1;
        }
        debug!(
            "Gap {}-{} ({} min) exceeds hold of {} min, inserting {} break(s)",
            current_time, next_time, gap, max_hold, insert_count
        );

        for k in 1..=insert_count {
            let Some(time) = current_time.checked_add_minutes(k * max_hold) else {
                break;
            };
            if time == next_time {
                continue;
            }

            schedule.push(PottyEvent::new(
                format!("maintenance-{}", inserted),
                time,
                PottyEventKind::PottyMaintenance,
                "Maintenance potty break",
            ));
            inserted += 1;
        }
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(s: &str) -> ClockTime {
        s.parse().unwrap()
    }

    #[test]
    fn remainder_below_threshold_drops_last_break() {
        // 240 minute gap with a 120 minute hold: only the midpoint break is kept
        let anchors = vec![
            PottyEvent::new("a", t("08:00"), PottyEventKind::Wake, "a"),
            PottyEvent::new("b", t("12:00"), PottyEventKind::PottyBed, "b"),
        ];
        let filled = fill_gaps(anchors, 120);
        let times: Vec<String> = filled.iter().map(|e| e.time.to_string()).collect();
        assert_eq!(times, vec!["08:00", "10:00", "12:00"]);
    }

    #[test]
    fn remainder_at_threshold_keeps_every_break() {
        let anchors = vec![
            PottyEvent::new("a", t("08:00"), PottyEventKind::Wake, "a"),
            PottyEvent::new("b", t("12:30"), PottyEventKind::PottyBed, "b"),
        ];
        let filled = fill_gaps(anchors, 120);
        let times: Vec<String> = filled.iter().map(|e| e.time.to_string()).collect();
        assert_eq!(times, vec!["08:00", "10:00", "12:00", "12:30"]);
    }

    #[test]
    fn gap_equal_to_hold_needs_no_break() {
        let anchors = vec![
            PottyEvent::new("a", t("08:00"), PottyEventKind::Wake, "a"),
            PottyEvent::new("b", t("09:00"), PottyEventKind::PottyBed, "b"),
        ];
        assert_eq!(fill_gaps(anchors, 60).len(), 2);
    }
}
