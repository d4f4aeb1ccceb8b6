use super::*;

/// Tests a start well beyond the lead time.
///
/// Expected: fires five minutes before the start
#[test]
fn fires_lead_time_before_distant_start() {
    let now = origin();

    let fire_at = compute_reminder(now, now + Duration::minutes(10));

    assert_eq!(fire_at, Some(now + Duration::minutes(5)));
}

/// Tests a start inside the lead time window.
///
/// Expected: fires at the start itself
#[test]
fn fires_at_start_inside_lead_time() {
    let now = origin();

    assert_eq!(
        compute_reminder(now, now + Duration::minutes(3)),
        Some(now + Duration::minutes(3))
    );
    assert_eq!(
        compute_reminder(now, now + Duration::minutes(5)),
        Some(now + Duration::minutes(5))
    );
}

/// Tests starts that are not in the future.
///
/// Expected: None for a past start and for a start exactly now
#[test]
fn skips_past_and_current_starts() {
    let now = origin();

    assert_eq!(compute_reminder(now, now - Duration::seconds(1)), None);
    assert_eq!(compute_reminder(now, now), None);
}

/// Tests story filtering and key assignment.
///
/// Verifies that started stories are dropped and upcoming ones are keyed by name.
///
/// Expected: one reminder keyed "Upcoming"
#[test]
fn story_reminders_skip_started_stories() {
    let now = origin();
    let stories = vec![
        Story {
            id: 1,
            name: "Started".to_string(),
            event_type: StoryEventType::Marathon,
            start_at: now - Duration::hours(1),
        },
        Story {
            id: 2,
            name: "Upcoming".to_string(),
            event_type: StoryEventType::CheerfulCarnival,
            start_at: now + Duration::hours(1),
        },
    ];

    let reminders = story_reminders(now, &stories);

    assert_eq!(reminders.len(), 1);
    assert_eq!(reminders[0].key, "Upcoming");
    assert_eq!(reminders[0].kind, ReminderKind::Story);
    assert_eq!(reminders[0].fire_at, now + Duration::minutes(55));
}
