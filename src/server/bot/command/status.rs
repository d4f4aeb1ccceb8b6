//! `/status` - ephemeral embed telling whether the bot is alive.

use chrono::Utc;
use rand::Rng;
use serenity::all::{
    CommandInteraction, Context, CreateEmbed, CreateInteractionResponse,
    CreateInteractionResponseMessage, Timestamp,
};

use crate::server::error::{internal::InternalError, AppError};

const HAPPY_EMOJI: &str = "<:mafuyulilguy:1119765248828780687>";
const SAD_EMOJI: &str = "<:enajiiempty:1132921144366878730>";

/// Emotion line of the status embed, depending on whether a gift was brought.
pub fn emotion(gift: bool) -> String {
    if gift {
        format!("OMG GIFT!!! {}", HAPPY_EMOJI)
    } else {
        SAD_EMOJI.to_string()
    }
}

/// Builds the status embed for the current time.
///
/// # Returns
/// - `Ok(CreateEmbed)` - The embed
/// - `Err(AppError::InternalErr(InvalidDiscordTimestamp))` - Current time not representable
pub fn build_status_embed(gift: bool) -> Result<CreateEmbed, AppError> {
    let now = Utc::now().timestamp();
    let timestamp =
        Timestamp::from_unix_timestamp(now).map_err(|e| InternalError::InvalidDiscordTimestamp {
            timestamp: now,
            reason: e.to_string(),
        })?;
    let colour: u32 = rand::rng().random_range(0..=0xFFFFFF);

    Ok(CreateEmbed::new()
        .colour(colour)
        .title("**Bot Status**")
        .field("Online", "Yes! No... Maybe?", false)
        .field(
            "Time",
            format!("It _was_ <t:{}:f>... This ain't instant messaging, though!", now),
            false,
        )
        .field("Emotion", emotion(gift), false)
        .timestamp(timestamp))
}

pub async fn handle(ctx: &Context, command: &CommandInteraction) -> Result<(), AppError> {
    tracing::info!("{} requested bot status", command.user.id);

    let gift = command
        .data
        .options
        .iter()
        .find(|option| option.name == "gift")
        .and_then(|option| option.value.as_bool())
        .unwrap_or(false);

    let embed = build_status_embed(gift)?;
    let message = CreateInteractionResponseMessage::new()
        .embed(embed)
        .ephemeral(true);
    command
        .create_response(&ctx.http, CreateInteractionResponse::Message(message))
        .await?;

    Ok(())
}
