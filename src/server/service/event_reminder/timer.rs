//! Registry of armed one-shot reminder timers.
//!
//! Each armed reminder is a sleeping tokio task. The registry owns the mapping from reminder
//! key to task, so replacing the whole batch, cancelling one key and listing what is pending
//! are all plain map operations under one lock.
//!
//! A timer task only dispatches after confirming, under the registry lock, that the entry for
//! its key still carries its own instance id. Replacing or cancelling a timer removes that
//! entry under the same lock, so a timer that already woke up but lost the race can never
//! fire.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tokio::task::AbortHandle;
use tokio::time::Instant;

use crate::server::{error::internal::InternalError, model::reminder::ScheduledReminder};

/// Callback invoked once per fired reminder, outside the registry lock.
///
/// Must return quickly; long-running work belongs in a spawned task.
pub type FireCallback = Arc<dyn Fn(ScheduledReminder) + Send + Sync>;

struct ArmedTimer {
    /// Instance id, unique across the registry's lifetime.
    id: u64,
    reminder: ScheduledReminder,
    handle: AbortHandle,
}

#[derive(Default)]
struct RegistryState {
    timers: HashMap<String, ArmedTimer>,
    next_id: u64,
}

fn lock(state: &Mutex<RegistryState>) -> MutexGuard<'_, RegistryState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owned set of armed reminder timers, at most one per key.
pub struct TimerRegistry {
    state: Arc<Mutex<RegistryState>>,
}

impl TimerRegistry {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(RegistryState::default())),
        }
    }

    /// Replaces every armed timer with one timer per reminder.
    ///
    /// All existing timers are cancelled and the new batch is armed under a single lock
    /// acquisition, so no timer of the previous batch can fire once this call has started.
    /// Each timer sleeps until its reminder's `fire_at` (immediately if already due), removes
    /// itself from the registry and then calls `on_fire` once.
    ///
    /// Must be called from within a tokio runtime.
    ///
    /// # Arguments
    /// - `reminders` - The complete new batch; keys should be unique
    /// - `now` - Current time, used to turn fire times into delays
    /// - `on_fire` - Called with the reminder when its timer fires
    ///
    /// # Returns
    /// - Number of timers armed
    pub fn arm_batch(
        &self,
        reminders: Vec<ScheduledReminder>,
        now: DateTime<Utc>,
        on_fire: FireCallback,
    ) -> usize {
        let reminders = dedupe(reminders);
        let base = Instant::now();

        let mut state = lock(&self.state);

        for (_, timer) in state.timers.drain() {
            timer.handle.abort();
        }

        for reminder in reminders {
            state.next_id += 1;
            let id = state.next_id;
            let delay = (reminder.fire_at - now).to_std().unwrap_or_default();
            let key = reminder.key.clone();

            let task = tokio::spawn(run_timer(
                Arc::downgrade(&self.state),
                key.clone(),
                id,
                base + delay,
                on_fire.clone(),
            ));

            state.timers.insert(
                key,
                ArmedTimer {
                    id,
                    reminder,
                    handle: task.abort_handle(),
                },
            );
        }

        state.timers.len()
    }

    /// Cancels the timer armed for `key`.
    ///
    /// # Returns
    /// - `true` - A pending timer was cancelled
    /// - `false` - Nothing pending under `key`
    pub fn cancel(&self, key: &str) -> bool {
        match lock(&self.state).timers.remove(key) {
            Some(timer) => {
                timer.handle.abort();
                true
            }
            None => false,
        }
    }

    /// Snapshot of every pending reminder, ordered by fire time then key.
    pub fn list_active(&self) -> Vec<ScheduledReminder> {
        let mut reminders: Vec<ScheduledReminder> = lock(&self.state)
            .timers
            .values()
            .map(|timer| timer.reminder.clone())
            .collect();
        reminders.sort_by(|a, b| a.fire_at.cmp(&b.fire_at).then_with(|| a.key.cmp(&b.key)));
        reminders
    }

    pub fn len(&self) -> usize {
        lock(&self.state).timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for TimerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TimerRegistry {
    fn drop(&mut self) {
        for (_, timer) in lock(&self.state).timers.drain() {
            timer.handle.abort();
        }
    }
}

async fn run_timer(
    state: std::sync::Weak<Mutex<RegistryState>>,
    key: String,
    id: u64,
    deadline: Instant,
    on_fire: FireCallback,
) {
    tokio::time::sleep_until(deadline).await;

    let Some(state) = state.upgrade() else {
        return;
    };

    let fired = {
        let mut state = lock(&state);
        let owned = state.timers.get(&key).is_some_and(|timer| timer.id == id);
        if owned {
            state.timers.remove(&key).map(|timer| timer.reminder)
        } else {
            None
        }
    };

    if let Some(reminder) = fired {
        on_fire(reminder);
    }
}

/// Drops earlier reminders that share a key with a later one, keeping batch order otherwise.
fn dedupe(reminders: Vec<ScheduledReminder>) -> Vec<ScheduledReminder> {
    let mut positions: HashMap<String, usize> = HashMap::with_capacity(reminders.len());
    let mut unique: Vec<ScheduledReminder> = Vec::with_capacity(reminders.len());

    for reminder in reminders {
        match positions.get(&reminder.key) {
            Some(&position) => {
                let err = InternalError::DuplicateReminderKey {
                    key: reminder.key.clone(),
                };
                tracing::error!("{}", err);
                debug_assert!(false, "{}", err);
                unique[position] = reminder;
            }
            None => {
                positions.insert(reminder.key.clone(), unique.len());
                unique.push(reminder);
            }
        }
    }

    unique
}
