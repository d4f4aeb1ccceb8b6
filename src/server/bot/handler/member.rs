use std::sync::Arc;

use serenity::all::{Context, GuildMemberUpdateEvent, Member};

use crate::server::{
    service::{
        boost_notification::BoostNotificationService,
        reminder_notification::DiscordAnnouncementSink,
    },
    state::AppState,
};

/// Handles the guild_member_update event when a member's roles or profile change
///
/// Forwards the role change to the boost notifier. The previous member state is only
/// available when it was cached; without it the notifier reports the current state alone.
pub async fn handle_guild_member_update(
    state: &AppState,
    ctx: Context,
    old: Option<Member>,
    _new: Option<Member>,
    event: GuildMemberUpdateEvent,
) {
    let guild_id = event.guild_id.get();
    let user_id = event.user.id.get();

    let old_roles: Option<Vec<u64>> =
        old.map(|member| member.roles.iter().map(|role| role.get()).collect());
    let new_roles: Vec<u64> = event.roles.iter().map(|role| role.get()).collect();

    let boost_service = BoostNotificationService::new(
        state.locations.clone(),
        Arc::new(DiscordAnnouncementSink::new(ctx.http.clone())),
    );

    if let Err(e) = boost_service
        .handle_member_update(guild_id, user_id, old_roles.as_deref(), &new_roles)
        .await
    {
        tracing::error!(
            "Failed to handle boost change of user {} in guild {}: {}",
            user_id,
            guild_id,
            e
        );
    }
}
