//! Sending helpers shared by the message and callback handlers

use lavkacore::{CartError, Catalog};
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId};
use teloxide::{ApiError, RequestError};

use super::types::{HandlerDeps, HandlerError};
use super::views;
use crate::telegram::keyboards;

/// Edits the message the button belongs to, or sends a new one when there is
/// nothing to edit or the edit failed.
pub(super) async fn edit_or_send(
    bot: &Bot,
    chat_id: ChatId,
    message_id: Option<MessageId>,
    text: String,
    keyboard: InlineKeyboardMarkup,
) -> Result<(), RequestError> {
    if let Some(message_id) = message_id {
        match bot
            .edit_message_text(chat_id, message_id, text.clone())
            .reply_markup(keyboard.clone())
            .await
        {
            Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => return Ok(()),
            Err(e) => {
                log::warn!(
                    "Failed to edit message {} in chat {}: {}. Sending a new one",
                    message_id.0,
                    chat_id,
                    e
                );
            }
        }
    }
    bot.send_message(chat_id, text).reply_markup(keyboard).await?;
    Ok(())
}

pub(super) async fn send_sections(bot: &Bot, chat_id: ChatId, catalog: &Catalog) -> Result<(), RequestError> {
    bot.send_message(chat_id, views::SECTIONS_PROMPT)
        .reply_markup(keyboards::sections_keyboard(catalog))
        .await?;
    Ok(())
}

pub(super) async fn send_cart(bot: &Bot, chat_id: ChatId, user_id: i64, deps: &HandlerDeps) -> Result<(), HandlerError> {
    let (text, keyboard) = views::cart_view(&deps.cart, user_id)?;
    bot.send_message(chat_id, text).reply_markup(keyboard).await?;
    Ok(())
}

/// Turns a rejected cart input into a chat message; other errors pass through
pub(super) async fn surface_cart_error(
    bot: &Bot,
    chat_id: ChatId,
    result: Result<(), HandlerError>,
) -> Result<(), HandlerError> {
    let Err(e) = result else {
        return Ok(());
    };
    match e.downcast_ref::<CartError>() {
        Some(cart_error) => {
            log::warn!("Rejected cart input in chat {}: {}", chat_id, cart_error);
            bot.send_message(chat_id, format!("⚠️ {}", cart_error)).await?;
            Ok(())
        }
        None => Err(e),
    }
}
