//! Ready event handler for bot initialization.
//!
//! This module handles the `ready` event which is fired when the bot successfully
//! connects to Discord's gateway and completes the initial handshake.
//!
//! The ready handler is used to:
//! - Log connection information
//! - Set the bot's activity
//! - Register the slash commands in every serviced guild

use serenity::all::{ActivityData, Context, GuildId, Ready};

use crate::server::{bot::command::BotCommand, state::AppState};

/// Handles the ready event when the bot connects to Discord.
///
/// Replaces the guild command set of every serviced guild with the bot's commands. A guild
/// whose registration fails is logged and skipped.
///
/// # Arguments
/// - `state` - Shared services, for the list of serviced guilds
/// - `ctx` - Discord context for setting activity and registering commands
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(state: &AppState, ctx: Context, ready: Ready) {
    tracing::info!("{} is connected to Discord", ready.user.name);

    ctx.set_activity(Some(ActivityData::custom("Waiting for the next event")));

    for location in state.locations.all().await {
        let guild_id = match location.guild_id() {
            Ok(guild_id) => guild_id,
            Err(e) => {
                tracing::error!("Skipping command registration: {}", e);
                continue;
            }
        };

        match GuildId::new(guild_id)
            .set_commands(&ctx.http, BotCommand::register_all())
            .await
        {
            Ok(commands) => tracing::info!(
                "Registered {} commands in guild {}",
                commands.len(),
                guild_id
            ),
            Err(e) => tracing::error!(
                "Failed to register commands in guild {}: {}",
                guild_id,
                e
            ),
        }
    }
}
