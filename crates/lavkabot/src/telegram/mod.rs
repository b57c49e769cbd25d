//! Telegram bot integration and handlers

pub mod actions;
pub mod bot;
pub mod handlers;
pub mod keyboards;

use teloxide::types::InlineKeyboardButton;

// Re-exports for convenience
pub use actions::CallbackAction;
pub use bot::{create_bot, setup_bot_commands, Command};
pub use handlers::{schema, HandlerDeps, HandlerError};

/// Shorthand for a callback button
pub fn cb(text: impl Into<String>, data: impl Into<String>) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, data)
}
