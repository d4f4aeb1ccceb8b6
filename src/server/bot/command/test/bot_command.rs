use super::*;

/// Tests command name lookup.
///
/// Expected: every command resolves from its own name, unknown names resolve to None
#[test]
fn resolves_commands_by_name() {
    for command in BotCommand::ALL {
        assert_eq!(BotCommand::from_name(command.name()), Some(command));
    }

    assert_eq!(BotCommand::from_name("crash"), None);
    assert_eq!(BotCommand::register_all().len(), BotCommand::ALL.len());
}
