use std::sync::Arc;

use serenity::all::{Client, GatewayIntents};
use serenity::http::Http;

use crate::server::{bot::handler::Handler, config::Config, error::AppError, state::AppState};

/// Builds the Discord bot client without connecting it.
///
/// The returned HTTP handle is usable right away, so services that post messages can be
/// wired up before the gateway connection starts.
///
/// # Arguments
/// - `config` - Application configuration holding the bot token
/// - `state` - Shared services handed to the event handler
///
/// # Returns
/// - `Ok((Client, Arc<Http>))` - Client ready to be started and its HTTP handle
/// - `Err(AppError::DiscordErr)` - Client construction failed (e.g. malformed token)
pub async fn init_bot(config: &Config, state: AppState) -> Result<(Client, Arc<Http>), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in Discord Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(Handler::new(state))
        .await?;
    let http = client.http.clone();

    Ok((client, http))
}

/// Connects the bot to Discord and runs until the connection ends.
///
/// # Returns
/// - `Ok(())` if the bot shut down cleanly
/// - `Err(AppError)` if connecting or the gateway connection failed
pub async fn start_bot(mut client: Client) -> Result<(), AppError> {
    tracing::info!("Starting Discord bot...");

    // Start the bot (this blocks until shutdown)
    client.start().await?;

    Ok(())
}
