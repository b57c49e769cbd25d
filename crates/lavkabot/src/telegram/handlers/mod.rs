//! Telegram bot handler tree configuration
//!
//! This module provides the dispatcher schema for the bot. Message texts and
//! keyboards are built by the pure functions in `views`, so the handler
//! bodies only move data between Telegram and the cart.

mod callbacks;
mod commands;
mod reply;
mod schema;
mod types;
pub mod views;

pub use schema::schema;
pub use types::{HandlerDeps, HandlerError};
