use super::*;

/// Tests the status emotion line.
///
/// Expected: happy with a gift, sad without
#[test]
fn status_emotion_depends_on_gift() {
    assert!(emotion(true).starts_with("OMG GIFT!!!"));
    assert!(!emotion(false).contains("GIFT"));
}

/// Tests the config dump.
///
/// Expected: pretty camelCase JSON inside a json code block
#[test]
fn dumps_config_as_json_block() {
    let location = location(&["500"]);

    let content = render_config(&location).unwrap();

    assert!(content.starts_with("```json\n{\n"));
    assert!(content.ends_with("\n```"));
    assert!(content.contains("\"guildId\": \"1\""));
    assert!(content.contains("\"commandAccessRoleIds\""));
}

/// Tests the reload summary.
///
/// Expected: failures mentioned only when there are any
#[test]
fn reload_message_mentions_failures() {
    assert_eq!(
        reload_message(2, 0),
        "Configs reloaded! 2 service location(s) loaded."
    );
    assert!(reload_message(2, 1).contains("1 file(s) failed"));
}
