//! Reminder fire-time computation.
//!
//! Pure functions turning stories and shows into the reminders a refresh arms. Nothing here
//! reads the clock; `now` is always passed in.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Duration, Utc};

use crate::server::model::{
    reminder::{ReminderKind, ScheduledReminder},
    show::Show,
    story::Story,
};

/// How long before a start the reminder fires.
pub const LEAD_TIME: Duration = Duration::minutes(5);

/// Computes when the reminder for something starting at `start_at` should fire.
///
/// Fires `LEAD_TIME` before the start. When that moment has already passed but the start has
/// not, fires at the start instead so late discoveries are still announced.
///
/// # Returns
/// - `Some(fire_at)` - When to fire
/// - `None` - `start_at` is not in the future
pub fn compute_reminder(now: DateTime<Utc>, start_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if start_at <= now {
        return None;
    }

    let lead = start_at - LEAD_TIME;
    if lead <= now {
        Some(start_at)
    } else {
        Some(lead)
    }
}

/// Reminders for every story that has not started yet.
///
/// Stories sharing a name get their feed id appended to the key, e.g. `"Rerun [12]"`.
pub fn story_reminders(now: DateTime<Utc>, stories: &[Story]) -> Vec<ScheduledReminder> {
    let candidates = stories
        .iter()
        .filter(|story| story.start_at >= now)
        .filter_map(|story| {
            let fire_at = compute_reminder(now, story.start_at)?;
            Some((
                story.id,
                ScheduledReminder {
                    key: story.name.clone(),
                    fire_at,
                    kind: ReminderKind::Story,
                    display_name: story.name.clone(),
                    start_at: story.start_at,
                },
            ))
        })
        .collect();

    disambiguate_by_id(candidates)
}

/// Reminders for every upcoming performance of every eligible show.
///
/// Shows that already ended or whose id is at or above `show_id_threshold` are skipped
/// entirely. Each performance of the remaining shows is scheduled independently. Shows
/// sharing a name and sequence number get their feed id appended to the key.
pub fn show_reminders(
    now: DateTime<Utc>,
    shows: &[Show],
    show_id_threshold: i64,
) -> Vec<ScheduledReminder> {
    let candidates = shows
        .iter()
        .filter(|show| show.end_at >= now && show.id < show_id_threshold)
        .flat_map(|show| {
            show.schedules.iter().filter_map(move |schedule| {
                let fire_at = compute_reminder(now, schedule.start_at)?;
                Some((
                    show.id,
                    ScheduledReminder {
                        key: show.schedule_key(schedule),
                        fire_at,
                        kind: ReminderKind::Show,
                        display_name: show.name.clone(),
                        start_at: schedule.start_at,
                    },
                ))
            })
        })
        .collect();

    disambiguate_by_id(candidates)
}

/// Makes every key in a refresh batch unique.
///
/// Collisions that survive the per-feed id suffix (the same record listed twice, or a story
/// named like a show performance) get a counter appended, e.g. `"Rerun (2)"`. Order is kept.
pub fn ensure_unique_keys(reminders: &mut [ScheduledReminder]) {
    let mut taken: HashSet<String> = HashSet::with_capacity(reminders.len());

    for reminder in reminders.iter_mut() {
        let base = reminder.key.clone();
        let mut counter = 2;
        while !taken.insert(reminder.key.clone()) {
            reminder.key = format!("{} ({})", base, counter);
            counter += 1;
        }
    }
}

/// Appends the record id to every key that more than one candidate shares.
fn disambiguate_by_id(candidates: Vec<(i64, ScheduledReminder)>) -> Vec<ScheduledReminder> {
    let mut counts: HashMap<String, usize> = HashMap::with_capacity(candidates.len());
    for (_, reminder) in &candidates {
        *counts.entry(reminder.key.clone()).or_default() += 1;
    }

    candidates
        .into_iter()
        .map(|(id, mut reminder)| {
            if counts.get(&reminder.key).copied().unwrap_or(0) > 1 {
                reminder.key = format!("{} [{}]", reminder.key, id);
            }
            reminder
        })
        .collect()
}
