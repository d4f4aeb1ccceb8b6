//! `/updatedb` - on-demand refresh of the event and virtual live lists.

use serenity::all::{
    CommandInteraction, Context, CreateInteractionResponse, CreateInteractionResponseFollowup,
    CreateInteractionResponseMessage,
};

use crate::server::{error::AppError, state::AppState};

pub const STARTED: &str = "Updating event and virtual live list...";
pub const FINISHED: &str = "Finished updating event and virtual live list";

/// Acknowledges the command, refreshes the reminders and reports completion.
///
/// The completion message is the same whatever the feeds returned; the refresh outcome is
/// only logged.
pub async fn handle(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    tracing::info!("{} requested event database update", command.user.id);

    command
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Message(
                CreateInteractionResponseMessage::new().content(STARTED),
            ),
        )
        .await?;

    state.reminder.refresh().await;

    command
        .create_followup(
            &ctx.http,
            CreateInteractionResponseFollowup::new().content(FINISHED),
        )
        .await?;

    Ok(())
}
