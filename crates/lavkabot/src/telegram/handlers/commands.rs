//! Command and text message handlers

use lavkacore::validation::user_id_from_u64;
use teloxide::prelude::*;
use teloxide::types::Message;
use teloxide::utils::command::BotCommands;

use super::reply::{send_cart, send_sections};
use super::types::{HandlerDeps, HandlerError};
use super::views;
use crate::telegram::bot::Command;
use crate::telegram::keyboards::{self, CART_BUTTON, MENU_BUTTON, SEARCH_BUTTON};

fn sender_id(msg: &Message) -> Result<i64, HandlerError> {
    let user = msg
        .from
        .as_ref()
        .ok_or_else(|| HandlerError::from("message has no sender"))?;
    Ok(user_id_from_u64(user.id.0)?)
}

pub(super) async fn handle_command(bot: Bot, msg: Message, cmd: Command, deps: HandlerDeps) -> Result<(), HandlerError> {
    log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

    match cmd {
        Command::Start => {
            let first_name = msg.from.as_ref().map(|u| u.first_name.as_str());
            bot.send_message(msg.chat.id, views::welcome_text(&deps.catalog, first_name))
                .reply_markup(keyboards::main_keyboard())
                .await?;
        }
        Command::Menu => send_sections(&bot, msg.chat.id, &deps.catalog).await?,
        Command::Cart => send_cart(&bot, msg.chat.id, sender_id(&msg)?, &deps).await?,
        Command::Help => {
            bot.send_message(msg.chat.id, Command::descriptions().to_string())
                .await?;
        }
    }
    Ok(())
}

/// Reply keyboard buttons, stray commands and search queries
pub(super) async fn handle_text(bot: Bot, msg: Message, text: String, deps: HandlerDeps) -> Result<(), HandlerError> {
    let chat_id = msg.chat.id;

    match text.trim() {
        MENU_BUTTON => send_sections(&bot, chat_id, &deps.catalog).await?,
        CART_BUTTON => send_cart(&bot, chat_id, sender_id(&msg)?, &deps).await?,
        SEARCH_BUTTON => {
            bot.send_message(chat_id, views::SEARCH_PROMPT).await?;
        }
        command if command.starts_with('/') => {
            bot.send_message(chat_id, views::UNKNOWN_COMMAND).await?;
        }
        query => {
            log::info!("Search '{}' from chat {}", query, chat_id);
            let (text, keyboard) = views::search_view(&deps.catalog, query);
            let request = bot.send_message(chat_id, text);
            match keyboard {
                Some(keyboard) => request.reply_markup(keyboard).await?,
                None => request.await?,
            };
        }
    }
    Ok(())
}
