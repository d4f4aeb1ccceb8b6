//! Slash commands.
//!
//! The bot's commands form a closed set, `BotCommand`. Each command lives in its own module
//! with a `handle` function; response rendering is kept in pure functions where there is any.

pub mod dump_config;
pub mod list_events;
pub mod reload_configs;
pub mod status;
pub mod update_db;

use serenity::all::{
    CommandInteraction, CommandOptionType, Context, CreateCommand, CreateCommandOption,
    CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage,
};

use crate::server::{error::AppError, model::service_location::ServiceLocation};

/// Reply to members who may not use the bot's commands.
pub const ACCESS_DENIED: &str = ":sparkles:     :innocent: :thumbsdown:     :sparkles:";

/// Every slash command the bot serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Status,
    ListEvents,
    UpdateDb,
    ReloadConfigs,
    DumpConfig,
}

impl BotCommand {
    pub const ALL: [BotCommand; 5] = [
        BotCommand::Status,
        BotCommand::ListEvents,
        BotCommand::UpdateDb,
        BotCommand::ReloadConfigs,
        BotCommand::DumpConfig,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::ListEvents => "listevents",
            Self::UpdateDb => "updatedb",
            Self::ReloadConfigs => "reloadconfigs",
            Self::DumpConfig => "dumpconfig",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == name)
    }

    /// Registration payload of the command.
    pub fn register(self) -> CreateCommand {
        let command = CreateCommand::new(self.name());

        match self {
            Self::Status => command
                .description("Queries the bot's status")
                .add_option(
                    CreateCommandOption::new(
                        CommandOptionType::Boolean,
                        "gift",
                        "A gift for me??? UwU",
                    )
                    .required(false),
                ),
            Self::ListEvents => command.description("List all the scheduled events"),
            Self::UpdateDb => command.description("Updates the event and virtual live list"),
            Self::ReloadConfigs => command.description("Reloads all configs"),
            Self::DumpConfig => command.description("Dumps the current config"),
        }
    }

    /// Registration payloads of every command.
    pub fn register_all() -> Vec<CreateCommand> {
        Self::ALL.into_iter().map(Self::register).collect()
    }
}

/// Checks whether a member may use the bot's commands.
///
/// # Arguments
/// - `location` - Service location of the guild the command came from, `None` if the guild
///   is not serviced or the command was sent outside a guild
/// - `member_role_ids` - Roles of the invoking member
///
/// # Returns
/// - `true` if the guild is serviced and the member holds one of its access roles
pub fn has_command_access(location: Option<&ServiceLocation>, member_role_ids: &[u64]) -> bool {
    location.is_some_and(|location| location.grants_command_access(member_role_ids))
}

/// Replies to a command with an ephemeral message.
pub async fn respond(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseMessage::new()
        .content(content)
        .ephemeral(true);
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}

/// Sends an ephemeral follow-up to an already answered command.
pub async fn follow_up(
    ctx: &Context,
    command: &CommandInteraction,
    content: impl Into<String>,
) -> Result<(), AppError> {
    let message = CreateInteractionResponseFollowup::new()
        .content(content)
        .ephemeral(true);
    command.create_followup(&ctx.http, message).await?;

    Ok(())
}

#[cfg(test)]
mod test;
