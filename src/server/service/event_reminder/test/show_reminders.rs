use super::*;

fn show(id: i64, name: &str, end_at: DateTime<Utc>, starts: &[(i64, DateTime<Utc>)]) -> Show {
    Show {
        id,
        name: name.to_string(),
        end_at,
        schedules: starts
            .iter()
            .map(|(seq, start_at)| ShowSchedule {
                seq: *seq,
                start_at: *start_at,
                end_at: *start_at + Duration::minutes(30),
            })
            .collect(),
    }
}

/// Tests the id threshold.
///
/// Verifies that a show at or above the threshold is excluded even when it has upcoming
/// performances, while a show below it is included.
///
/// Expected: only the show with id 42 yields a reminder
#[test]
fn excludes_shows_at_or_above_threshold() {
    let now = origin();
    let start = now + Duration::hours(2);
    let shows = vec![
        show(1500, "Placeholder", now + Duration::days(365), &[(1, start)]),
        show(1000, "Boundary", now + Duration::days(1), &[(1, start)]),
        show(42, "Real", now + Duration::days(1), &[(1, start)]),
    ];

    let reminders = show_reminders(now, &shows, 1000);

    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].key, "Real #1");
    assert_eq!(reminders[0].display_name, "Real");
}

/// Tests that ended shows are skipped.
///
/// Expected: no reminders for a show whose end is in the past
#[test]
fn excludes_ended_shows() {
    let now = origin();
    let shows = vec![show(
        7,
        "Over",
        now - Duration::seconds(1),
        &[(1, now + Duration::hours(1))],
    )];

    assert!(show_reminders(now, &shows, 1000).is_empty());
}

/// Tests per-performance scheduling.
///
/// Verifies that of three performances only the one still in the future gets a reminder,
/// keyed by its sequence number.
///
/// Expected: exactly one reminder, "Live #2"
#[test]
fn schedules_only_future_performances() {
    let now = origin();
    let shows = vec![show(
        3,
        "Live",
        now + Duration::days(1),
        &[
            (1, now - Duration::hours(2)),
            (2, now + Duration::hours(2)),
            (3, now - Duration::minutes(1)),
        ],
    )];

    let reminders = show_reminders(now, &shows, 1000);

    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].key, "Live #2");
    assert_eq!(reminders[0].kind, ReminderKind::Show);
    assert_eq!(reminders[0].start_at, now + Duration::hours(2));
}

/// Tests two shows sharing a name and sequence number.
///
/// Expected: the colliding performances carry their show id, the other one keeps its key
#[test]
fn appends_show_id_when_name_and_seq_repeat() {
    let now = origin();
    let start = now + Duration::hours(2);
    let shows = vec![
        show(
            10,
            "Encore",
            now + Duration::days(1),
            &[(1, start), (2, start + Duration::hours(1))],
        ),
        show(11, "Encore", now + Duration::days(2), &[(1, start + Duration::days(1))]),
    ];

    let keys: Vec<String> = show_reminders(now, &shows, 1000)
        .into_iter()
        .map(|r| r.key)
        .collect();

    assert_eq!(keys, vec!["Encore #1 [10]", "Encore #2", "Encore #1 [11]"]);
}

/// Tests the batch-wide uniqueness pass for the same record listed twice.
///
/// Expected: the second occurrence gets a counter suffix, order is kept
#[test]
fn suffixes_keys_still_colliding() {
    let at = origin();
    let mut reminders = vec![
        reminder("Dup [5]", at),
        reminder("Other", at),
        reminder("Dup [5]", at),
    ];

    ensure_unique_keys(&mut reminders);

    let keys: Vec<&str> = reminders.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["Dup [5]", "Other", "Dup [5] (2)"]);
}
