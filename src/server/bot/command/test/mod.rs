use chrono::{DateTime, Duration, Utc};
use test_utils::factory::service_location::ServiceLocationFactory;

use crate::server::{
    bot::command::{
        dump_config::render_config,
        has_command_access,
        list_events::{render_pages, MAX_MESSAGE_LEN},
        reload_configs::reload_message,
        status::emotion,
        BotCommand,
    },
    model::{
        reminder::{ReminderKind, ScheduledReminder},
        service_location::ServiceLocation,
    },
};

mod bot_command;
mod render;
mod render_pages;

fn location(access_roles: &[&str]) -> ServiceLocation {
    let factory = access_roles
        .iter()
        .fold(ServiceLocationFactory::new().guild_id("1"), |factory, role| {
            factory.access_role(*role)
        });

    serde_json::from_value(factory.build()).unwrap()
}

fn reminder(key: &str, fire_at: DateTime<Utc>) -> ScheduledReminder {
    ScheduledReminder {
        key: key.to_string(),
        fire_at,
        kind: ReminderKind::Story,
        display_name: key.to_string(),
        start_at: fire_at + Duration::minutes(5),
    }
}
