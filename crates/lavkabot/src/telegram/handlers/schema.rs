//! Dispatcher schema and handler chain builders

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::callbacks::handle_callback;
use super::commands::{handle_command, handle_text};
use super::reply::surface_cart_error;
use super::types::{HandlerDeps, HandlerError};
use crate::telegram::bot::Command;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same schema is used by `run_bot` and can be driven directly in tests.
///
/// # Arguments
/// * `deps` - Handler dependencies (cart ledger, catalog)
///
/// # Returns
/// The complete handler tree for the bot
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_messages = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        // Commands first so "/cart" is not taken for a search query
        .branch(command_handler(deps_commands))
        // Reply keyboard buttons and search queries
        .branch(message_handler(deps_messages))
        .branch(callback_handler(deps_callback))
}

fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                let chat_id = msg.chat.id;
                let result = handle_command(bot.clone(), msg, cmd, deps).await;
                surface_cart_error(&bot, chat_id, result).await
            }
        },
    ))
}

/// Text messages in private chats
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.chat.is_private())
        .filter_map(|msg: Message| msg.text().map(str::to_owned))
        .endpoint(move |bot: Bot, msg: Message, text: String| {
            let deps = deps.clone();
            async move {
                let chat_id = msg.chat.id;
                let result = handle_text(bot.clone(), msg, text, deps).await;
                surface_cart_error(&bot, chat_id, result).await
            }
        })
}

fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move { handle_callback(bot, q, deps).await }
    })
}
