//! Interaction event handler for slash commands.
//!
//! Commands are only served in serviced guilds and only to members holding one of the
//! guild's command access roles. Everyone else gets an ephemeral refusal.

use serenity::all::{CommandInteraction, Context, Interaction};

use crate::server::{
    bot::command::{self, has_command_access, BotCommand, ACCESS_DENIED},
    error::AppError,
    state::AppState,
};

/// Handles an interaction, dispatching slash commands to their handlers.
///
/// Interactions other than slash commands are ignored. A failing command is logged; Discord
/// shows the user that the interaction failed.
pub async fn handle_interaction_create(state: &AppState, ctx: Context, interaction: Interaction) {
    let Interaction::Command(command) = interaction else {
        return;
    };

    if let Err(e) = dispatch(state, &ctx, &command).await {
        tracing::error!(
            "Command /{} from user {} failed: {}",
            command.data.name,
            command.user.id,
            e
        );
    }
}

async fn dispatch(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    let location = match command.guild_id {
        Some(guild_id) => state.locations.get(guild_id.get()).await,
        None => None,
    };
    let member_roles: Vec<u64> = command
        .member
        .as_ref()
        .map(|member| member.roles.iter().map(|role| role.get()).collect())
        .unwrap_or_default();

    if !has_command_access(location.as_ref(), &member_roles) {
        tracing::info!(
            "User {} was refused /{} in guild {:?}",
            command.user.id,
            command.data.name,
            command.guild_id
        );
        return command::respond(ctx, command, ACCESS_DENIED).await;
    }

    let Some(bot_command) = BotCommand::from_name(&command.data.name) else {
        tracing::warn!("Received unknown command /{}", command.data.name);
        return Ok(());
    };

    match bot_command {
        BotCommand::Status => command::status::handle(ctx, command).await,
        BotCommand::ListEvents => command::list_events::handle(state, ctx, command).await,
        BotCommand::UpdateDb => command::update_db::handle(state, ctx, command).await,
        BotCommand::ReloadConfigs => command::reload_configs::handle(state, ctx, command).await,
        BotCommand::DumpConfig => {
            command::dump_config::handle(location.as_ref(), ctx, command).await
        }
    }
}
