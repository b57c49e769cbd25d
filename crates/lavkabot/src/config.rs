use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the bot
/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Custom Bot API server URL (local telegram-bot-api)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_API_URL").ok().filter(|s| !s.is_empty()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: lavka.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "lavka.log".to_string()));

/// Path to a TOML menu file
/// Read from CATALOG_PATH environment variable
/// When unset the built-in menu is used
pub static CATALOG_PATH: Lazy<Option<String>> =
    Lazy::new(|| env::var("CATALOG_PATH").ok().filter(|s| !s.trim().is_empty()));

/// Network configuration
pub mod network {
    use super::Duration;

    /// Timeout for Bot API requests (in seconds)
    pub const TIMEOUT_SECS: u64 = 30;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(TIMEOUT_SECS)
    }
}

/// Telegram Bot API limits
pub mod telegram {
    /// Maximum size of `callback_data` in bytes
    pub const CALLBACK_DATA_MAX_BYTES: usize = 64;

    /// Maximum length of a message text in characters
    pub const MESSAGE_MAX_CHARS: usize = 4096;
}
