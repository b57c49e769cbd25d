//! Lavka - Telegram shopping bot
//!
//! Shows the menu as inline keyboards and keeps a per-user cart in memory.
//! The cart ledger and the catalog live in `lavkacore`; this crate is the
//! Telegram side.
//!
//! # Module Structure
//!
//! - `config`: environment-driven settings
//! - `logging`: console + file logger
//! - `cli`: command line interface
//! - `catalog_source`: picks and checks the menu the bot serves
//! - `telegram`: keyboards, callback payloads, dispatcher schema and handlers

pub mod catalog_source;
pub mod cli;
pub mod config;
pub mod logging;
pub mod telegram;

pub use telegram::{schema, HandlerDeps};
