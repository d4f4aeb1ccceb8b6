//! `/reloadconfigs` - reloads the service location directory.

use serenity::all::{CommandInteraction, Context};

use crate::server::{bot::command::respond, error::AppError, state::AppState};

/// Summary shown after a reload.
pub fn reload_message(loaded: usize, failed: usize) -> String {
    match failed {
        0 => format!("Configs reloaded! {} service location(s) loaded.", loaded),
        _ => format!(
            "Configs reloaded! {} service location(s) loaded, {} file(s) failed and were skipped.",
            loaded, failed
        ),
    }
}

pub async fn handle(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    tracing::info!("{} requested a reload of configs", command.user.id);

    let content = match state.locations.reload().await {
        Ok(errors) => reload_message(state.locations.all().await.len(), errors.len()),
        Err(e) => {
            tracing::error!("Failed to reload configs: {}", e);
            "Failed to reload configs, the previous configs are still active.".to_string()
        }
    };

    respond(ctx, command, content).await
}
