//! Discord bot integration.
//!
//! This module connects the bot to Discord's gateway and routes gateway events to the
//! services: slash commands to the command handlers, member updates to the boost notifier.
//! Reminder announcements do not go through the gateway; they are posted with the client's
//! HTTP handle by the notification dispatcher.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Receive guild availability and interaction events
//! - `GUILD_MEMBERS` - Receive member updates for boost notifications (privileged intent)
//!
//! Note: `GUILD_MEMBERS` is a privileged intent and must be explicitly enabled
//! in the Discord Developer Portal for the bot application.

pub mod command;
pub mod handler;
pub mod start;
