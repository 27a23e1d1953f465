use std::collections::BTreeSet;

use chrono::NaiveDate;
use eyre::{Result, WrapErr};
use pawplan_core::models::potty::PottyEvent;
use tracing::{debug, info};

use crate::CompletionStore;

/// Sets `completed` on every event whose id is in `completed_ids`.
///
/// Ids that no longer match an event (for example after the routine changed)
/// are ignored.
pub fn apply_completions(events: &mut [PottyEvent], completed_ids: &BTreeSet<String>) -> usize {
    let mut matched = 0;
    for event in events.iter_mut() {
        event.completed = completed_ids.contains(&event.id);
        if event.completed {
            matched += 1;
        }
    }
    matched
}

/// Flips one event's completion flag and returns the new state with the full set.
pub async fn toggle_completion(
    store: &dyn CompletionStore,
    dog_id: &str,
    date: NaiveDate,
    event_id: &str,
) -> Result<(bool, BTreeSet<String>)> {
    let mut completed = store
        .get(dog_id, date)
        .await
        .wrap_err_with(|| format!("Failed to load completions for dog {} on {}", dog_id, date))?;

    let now_completed = if completed.remove(event_id) {
        false
    } else {
        completed.insert(event_id.to_string());
        true
    };

    store
        .set(dog_id, date, completed.clone())
        .await
        .wrap_err_with(|| format!("Failed to save completions for dog {} on {}", dog_id, date))?;

    info!(
        "Potty event {} for dog {} on {} marked {}",
        event_id,
        dog_id,
        date,
        if now_completed { "done" } else { "not done" }
    );
    debug!("Dog {} now has {} completed event(s) on {}", dog_id, completed.len(), date);

    Ok((now_completed, completed))
}
