use super::*;

/// Tests listing with nothing scheduled.
///
/// Expected: a single page holding only the header
#[test]
fn renders_header_without_reminders() {
    assert_eq!(render_pages(&[]), vec!["# Scheduled Events (page 1)\n"]);
}

/// Tests the line format.
///
/// Expected: key followed by absolute and relative timestamps of the fire time
#[test]
fn renders_reminder_lines() {
    let fire_at = DateTime::from_timestamp(1_735_689_600, 0).unwrap();

    let pages = render_pages(&[reminder("Bar #1", fire_at)]);

    assert_eq!(
        pages,
        vec!["# Scheduled Events (page 1)\n- Bar #1 at <t:1735689600:f> / <t:1735689600:R>\n"]
    );
}

/// Tests pagination.
///
/// Verifies that 45 reminders are split into pages of at most 20 entries with numbered
/// headers and no reminder lost or repeated.
///
/// Expected: pages of 20, 20 and 5 entries
#[test]
fn splits_into_pages_of_twenty() {
    let base = DateTime::from_timestamp(1_735_689_600, 0).unwrap();
    let reminders: Vec<ScheduledReminder> = (0..45)
        .map(|i| reminder(&format!("Story {i}"), base + Duration::minutes(i)))
        .collect();

    let pages = render_pages(&reminders);

    assert_eq!(pages.len(), 3);
    let entries: Vec<usize> = pages
        .iter()
        .map(|page| page.lines().filter(|line| line.starts_with("- ")).count())
        .collect();
    assert_eq!(entries, vec![20, 20, 5]);
    assert!(pages[1].starts_with("# Scheduled Events (page 2)\n- Story 20 at"));
    assert!(pages[2].starts_with("# Scheduled Events (page 3)\n"));
}

/// Tests pagination of long reminder keys.
///
/// Twenty keys of 150 characters would make a 3000+ character message, so the page has to
/// be split before the count limit is reached.
///
/// Expected: every page within the message limit, all 20 entries listed once
#[test]
fn splits_pages_by_message_length() {
    let base = DateTime::from_timestamp(1_735_689_600, 0).unwrap();
    let reminders: Vec<ScheduledReminder> = (0..20)
        .map(|i| reminder(&format!("{:0>150}", i), base + Duration::minutes(i)))
        .collect();

    let pages = render_pages(&reminders);

    assert!(pages.len() >= 2);
    assert!(pages
        .iter()
        .all(|page| page.chars().count() <= MAX_MESSAGE_LEN));
    let entries: usize = pages
        .iter()
        .map(|page| page.lines().filter(|line| line.starts_with("- ")).count())
        .sum();
    assert_eq!(entries, 20);
    assert!(pages[1].starts_with("# Scheduled Events (page 2)\n"));
}

/// Tests a single key longer than a whole message.
///
/// Expected: the key is clipped so its page still fits the message limit
#[test]
fn clips_key_longer_than_message() {
    let fire_at = DateTime::from_timestamp(1_735_689_600, 0).unwrap();
    let key = "x".repeat(3000);

    let pages = render_pages(&[reminder(&key, fire_at)]);

    assert_eq!(pages.len(), 1);
    assert!(pages[0].chars().count() <= MAX_MESSAGE_LEN);
    assert!(pages[0].contains("…"));
    assert!(pages[0].ends_with("at <t:1735689600:f> / <t:1735689600:R>\n"));
}
