//! `/listevents` - pages of every pending reminder.

use serenity::all::{CommandInteraction, Context};

use crate::server::{
    bot::command::{follow_up, respond},
    error::AppError,
    model::reminder::ScheduledReminder,
    state::AppState,
};

/// Maximum number of reminders listed per message.
pub const PAGE_SIZE: usize = 20;

/// Discord's limit on message content, in characters.
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Room kept for the page header when clipping a single overlong line.
const HEADER_ALLOWANCE: usize = 64;

fn header(page: usize) -> String {
    format!("# Scheduled Events (page {})\n", page)
}

/// One list entry; keys too long to fit a message on their own are clipped.
fn render_line(reminder: &ScheduledReminder) -> String {
    let seconds = reminder.fire_at.timestamp();
    let suffix = format!(" at <t:{}:f> / <t:{}:R>\n", seconds, seconds);
    let budget = MAX_MESSAGE_LEN - HEADER_ALLOWANCE - suffix.chars().count() - "- ".len();

    let key = if reminder.key.chars().count() > budget {
        let clipped: String = reminder.key.chars().take(budget - 1).collect();
        format!("{}…", clipped)
    } else {
        reminder.key.clone()
    };

    format!("- {}{}", key, suffix)
}

/// Renders pending reminders as message pages.
///
/// Each line names the reminder and when it fires, both as an absolute and a relative
/// Discord timestamp. A page holds at most `PAGE_SIZE` lines and never exceeds
/// `MAX_MESSAGE_LEN` characters. Always returns at least one page, so an empty schedule still
/// gets a header.
pub fn render_pages(reminders: &[ScheduledReminder]) -> Vec<String> {
    let mut pages = Vec::new();
    let mut page = header(1);
    let mut page_len = page.chars().count();
    let mut entries = 0;

    for reminder in reminders {
        let line = render_line(reminder);
        let line_len = line.chars().count();

        if entries == PAGE_SIZE || (entries > 0 && page_len + line_len > MAX_MESSAGE_LEN) {
            pages.push(page);
            page = header(pages.len() + 1);
            page_len = page.chars().count();
            entries = 0;
        }

        page.push_str(&line);
        page_len += line_len;
        entries += 1;
    }
    pages.push(page);

    pages
}

pub async fn handle(
    state: &AppState,
    ctx: &Context,
    command: &CommandInteraction,
) -> Result<(), AppError> {
    tracing::info!("{} requested a list of scheduled events", command.user.id);

    let reminders = state.reminder.active_reminders();
    let mut pages = render_pages(&reminders).into_iter();

    if let Some(first) = pages.next() {
        respond(ctx, command, first).await?;
    }
    for page in pages {
        follow_up(ctx, command, page).await?;
    }

    Ok(())
}
