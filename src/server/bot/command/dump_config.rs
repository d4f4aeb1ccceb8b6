//! `/dumpconfig` - shows the invoking guild's service location.

use serenity::all::{CommandInteraction, Context};

use crate::server::{
    bot::command::respond, error::AppError, model::service_location::ServiceLocation,
};

/// Renders a service location as a JSON code block.
pub fn render_config(location: &ServiceLocation) -> Result<String, AppError> {
    let json = serde_json::to_string_pretty(location)?;

    Ok(format!("```json\n{}\n```", json))
}

pub async fn handle(
    location: Option<&ServiceLocation>,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    tracing::info!(
        "{} requested a dump of guild {:?}'s current config",
        command.user.id,
        command.guild_id
    );

    // Access is only granted in serviced guilds, so a location is always present here
    let Some(location) = location else {
        return Err(AppError::NotFound(format!(
            "No service location for guild {:?}",
            command.guild_id
        )));
    };

    let content = render_config(location)?;
    tracing::debug!("{}", content);

    respond(ctx, command, content).await
}
