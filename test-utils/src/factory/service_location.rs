//! Service location factory for creating per-guild config documents.

use serde_json::{json, Map, Value};

use crate::factory::helpers::next_id;

/// Factory for creating service location documents.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::service_location::ServiceLocationFactory;
///
/// let location = ServiceLocationFactory::new()
///     .guild_id("100")
///     .access_role("500")
///     .event_reminder("600", json!("700"))
///     .build();
/// ```
pub struct ServiceLocationFactory {
    guild_id: String,
    io_channel_id: String,
    command_access_role_ids: Vec<String>,
    event_reminder: Option<Value>,
    boost_notifier: Option<Value>,
}

impl ServiceLocationFactory {
    /// Creates a new ServiceLocationFactory with default values.
    ///
    /// Defaults:
    /// - guildId and ioChannelId: unique numeric snowflakes
    /// - no access roles and no modules
    pub fn new() -> Self {
        Self {
            guild_id: (100_000 + next_id()).to_string(),
            io_channel_id: (200_000 + next_id()).to_string(),
            command_access_role_ids: Vec::new(),
            event_reminder: None,
            boost_notifier: None,
        }
    }

    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    pub fn io_channel_id(mut self, io_channel_id: impl Into<String>) -> Self {
        self.io_channel_id = io_channel_id.into();
        self
    }

    /// Adds a role whose members may use the bot's commands.
    pub fn access_role(mut self, role_id: impl Into<String>) -> Self {
        self.command_access_role_ids.push(role_id.into());
        self
    }

    /// Enables the event reminder module.
    ///
    /// # Arguments
    /// - `story_ping_role_id` - Role mentioned with story announcements
    /// - `show_ping_role_id` - Either a role ID string or an object keyed by `"UTCxx"` buckets
    pub fn event_reminder(
        mut self,
        story_ping_role_id: impl Into<String>,
        show_ping_role_id: Value,
    ) -> Self {
        self.event_reminder = Some(json!({
            "storyPingRoleId": story_ping_role_id.into(),
            "showPingRoleId": show_ping_role_id,
        }));
        self
    }

    /// Sets a field of the event reminder module, e.g. `"storyMessageTemplate"`.
    ///
    /// Has no effect unless `event_reminder` was called first.
    pub fn event_reminder_field(mut self, key: &str, value: Value) -> Self {
        if let Some(Value::Object(module)) = self.event_reminder.as_mut() {
            module.insert(key.to_string(), value);
        }
        self
    }

    /// Enables the boost notifier module.
    pub fn boost_notifier(mut self, boost_role_id: impl Into<String>) -> Self {
        self.boost_notifier = Some(json!({ "boostRoleId": boost_role_id.into() }));
        self
    }

    pub fn build(self) -> Value {
        let mut modules = Map::new();
        if let Some(event_reminder) = self.event_reminder {
            modules.insert("eventReminder".to_string(), event_reminder);
        }
        if let Some(boost_notifier) = self.boost_notifier {
            modules.insert("boostNotifier".to_string(), boost_notifier);
        }

        json!({
            "guildId": self.guild_id,
            "ioChannelId": self.io_channel_id,
            "commandAccessRoleIds": self.command_access_role_ids,
            "modules": modules,
        })
    }
}

impl Default for ServiceLocationFactory {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates a service location with both modules enabled and one access role.
pub fn create_service_location() -> Value {
    let id = next_id();
    ServiceLocationFactory::new()
        .access_role((300_000 + id).to_string())
        .event_reminder((400_000 + id).to_string(), json!((500_000 + id).to_string()))
        .boost_notifier((600_000 + id).to_string())
        .build()
}
