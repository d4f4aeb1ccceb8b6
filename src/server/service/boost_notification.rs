//! Boost notification service.
//!
//! Announces when a member of a serviced guild gains or loses the guild's booster role. The
//! gateway does not always provide the member's previous state; in that case the service
//! posts what it can tell about the current state and says it is unsure about the past.

use std::sync::Arc;

use crate::server::{
    data::service_location::ServiceLocationStore,
    error::AppError,
    service::reminder_notification::AnnouncementSink,
    util::parse::parse_u64_from_string,
};

/// Builds the announcement for a member's boost state change.
///
/// # Arguments
/// - `user_id` - The member whose roles changed
/// - `had_role` - Whether they held the booster role before, `None` if unknown
/// - `has_role` - Whether they hold it now
///
/// # Returns
/// - `Some(message)` - Message to post
/// - `None` - Boost state is known to be unchanged
pub fn boost_message(user_id: u64, had_role: Option<bool>, has_role: bool) -> Option<String> {
    let message = match (had_role, has_role) {
        (Some(false), true) => format!("<@{}> started boosting the server! :tada:", user_id),
        (Some(true), false) => {
            format!("<@{}> is no longer boosting the server :broken_heart:", user_id)
        }
        (Some(_), _) => return None,
        (None, false) => format!(
            "<@{}> is not currently boosting the server (unsure whether they were previously)",
            user_id
        ),
        (None, true) => format!(
            "<@{}> is currently boosting the server (unsure whether they were previously)",
            user_id
        ),
    };

    Some(message)
}

/// Service posting boost announcements in serviced guilds.
pub struct BoostNotificationService {
    locations: ServiceLocationStore,
    sink: Arc<dyn AnnouncementSink>,
}

impl BoostNotificationService {
    pub fn new(locations: ServiceLocationStore, sink: Arc<dyn AnnouncementSink>) -> Self {
        Self { locations, sink }
    }

    /// Handles a member update, announcing boost changes.
    ///
    /// # Arguments
    /// - `guild_id` - Guild the member belongs to
    /// - `user_id` - The updated member
    /// - `old_roles` - Role IDs before the update, `None` if the previous state is unknown
    /// - `new_roles` - Role IDs after the update
    ///
    /// # Returns
    /// - `Ok(true)` - An announcement was posted
    /// - `Ok(false)` - Guild not serviced, module disabled or nothing to announce
    /// - `Err(AppError)` - Invalid configured snowflake or the message could not be sent
    pub async fn handle_member_update(
        &self,
        guild_id: u64,
        user_id: u64,
        old_roles: Option<&[u64]>,
        new_roles: &[u64],
    ) -> Result<bool, AppError> {
        let Some(location) = self.locations.get(guild_id).await else {
            tracing::debug!(
                "Member {} changed in guild {}, which is not serviced",
                user_id,
                guild_id
            );
            return Ok(false);
        };
        let Some(module) = &location.modules.boost_notifier else {
            return Ok(false);
        };
        let Some(channel_id) = location.boost_notifier_channel_id()? else {
            return Ok(false);
        };
        let boost_role_id = parse_u64_from_string(module.boost_role_id.clone())?;

        let had_role = old_roles.map(|roles| roles.contains(&boost_role_id));
        let has_role = new_roles.contains(&boost_role_id);

        let Some(message) = boost_message(user_id, had_role, has_role) else {
            return Ok(false);
        };

        tracing::info!("{}", message);
        self.sink.send(channel_id, message).await?;

        Ok(true)
    }
}

#[cfg(test)]
mod test;
