//! Inline button handler

use lavkacore::validation::user_id_from_u64;
use lavkacore::{lines_total, CartError};
use teloxide::prelude::*;
use teloxide::types::{InlineKeyboardMarkup, MessageId};

use super::reply::{edit_or_send, send_sections};
use super::types::{HandlerDeps, HandlerError};
use super::views;
use crate::telegram::actions::CallbackAction;
use crate::telegram::keyboards;

/// Where the pressed button lives and who pressed it
struct Origin<'a> {
    bot: &'a Bot,
    deps: &'a HandlerDeps,
    chat_id: ChatId,
    message_id: Option<MessageId>,
    user_id: i64,
}

impl Origin<'_> {
    async fn show(&self, text: impl Into<String>, keyboard: InlineKeyboardMarkup) -> Result<(), HandlerError> {
        edit_or_send(self.bot, self.chat_id, self.message_id, text.into(), keyboard).await?;
        Ok(())
    }

    async fn show_cart(&self) -> Result<(), HandlerError> {
        let (text, keyboard) = views::cart_view(&self.deps.cart, self.user_id)?;
        self.show(text, keyboard).await
    }

    /// Quantity controls for a line, or the cart once the line is gone
    async fn show_line_or_cart(&self, product: &str) -> Result<(), HandlerError> {
        match views::quantity_view(&self.deps.cart, self.user_id, product)? {
            Some((text, keyboard)) => self.show(text, keyboard).await,
            None => self.show_cart().await,
        }
    }

    /// Runs the action; the returned text is shown as the callback notice
    async fn run(&self, action: CallbackAction) -> Result<Option<String>, HandlerError> {
        let cart = &self.deps.cart;
        let catalog = &self.deps.catalog;

        match action {
            CallbackAction::Sections => {
                self.show(views::SECTIONS_PROMPT, keyboards::sections_keyboard(catalog))
                    .await?;
            }
            CallbackAction::NewOrder => send_sections(self.bot, self.chat_id, catalog).await?,
            CallbackAction::Section(name) => match catalog.section(&name) {
                Some(section) => {
                    self.show(format!("{}:", section.name), keyboards::products_keyboard(section))
                        .await?;
                }
                None => return Ok(Some(views::SECTION_GONE.to_string())),
            },
            CallbackAction::Add(name) => {
                let Some(product) = catalog.find_product(&name) else {
                    return Ok(Some(views::PRODUCT_GONE.to_string()));
                };
                cart.add(self.user_id, &product.name, product.price)?;
                log::info!("User {} added '{}' to the cart", self.user_id, product.name);

                self.bot
                    .send_message(self.chat_id, views::added_text(&product.name))
                    .reply_markup(keyboards::added_keyboard())
                    .await?;
                return Ok(Some(format!("✅ {}", product.name)));
            }
            CallbackAction::ShowCart => self.show_cart().await?,
            CallbackAction::EditCart => {
                let names = cart.product_names(self.user_id)?;
                if names.is_empty() {
                    self.show_cart().await?;
                } else {
                    self.show(views::EDIT_PROMPT, keyboards::edit_quantity_keyboard(&names))
                        .await?;
                }
            }
            CallbackAction::EditLine(product) => self.show_line_or_cart(&product).await?,
            CallbackAction::ChangeQuantity { product, change } => {
                cart.edit_quantity(self.user_id, &product, change)?;
                self.show_line_or_cart(&product).await?;
            }
            CallbackAction::Pay => {
                let lines = cart.take(self.user_id)?;
                if lines.is_empty() {
                    return Ok(Some(lavkacore::EMPTY_CART_MESSAGE.to_string()));
                }
                let total = lines_total(&lines);
                log::info!(
                    "User {} placed an order: {} lines, {} руб",
                    self.user_id,
                    lines.len(),
                    total
                );
                self.show(views::order_text(&lines), keyboards::new_order_keyboard())
                    .await?;
            }
            CallbackAction::ClearCart => {
                if cart.is_empty(self.user_id)? {
                    self.show_cart().await?;
                } else {
                    self.show(views::CLEAR_PROMPT, keyboards::clear_cart_keyboard())
                        .await?;
                }
            }
            CallbackAction::ConfirmClear => {
                cart.clear(self.user_id)?;
                log::info!("User {} cleared the cart", self.user_id);
                self.show(views::CART_CLEARED, keyboards::new_order_keyboard())
                    .await?;
            }
        }
        Ok(None)
    }
}

/// Handles presses on every inline keyboard the bot sends.
///
/// The callback query is always answered; rejected cart input and stale
/// buttons are reported in the answer notice instead of a new message.
pub(super) async fn handle_callback(bot: Bot, q: CallbackQuery, deps: HandlerDeps) -> Result<(), HandlerError> {
    let chat_id = q
        .message
        .as_ref()
        .map(|m| m.chat().id)
        .unwrap_or_else(|| ChatId::from(q.from.id));
    let message_id = q.message.as_ref().map(|m| m.id());
    let data = q.data.as_deref().unwrap_or_default();
    log::info!("Callback '{}' from user {} in chat {}", data, q.from.id, chat_id);

    let outcome = match (CallbackAction::parse(data), user_id_from_u64(q.from.id.0)) {
        (None, _) => {
            log::warn!("Unknown callback data '{}' from chat {}", data, chat_id);
            Ok(Some(views::STALE_BUTTON.to_string()))
        }
        (Some(_), Err(e)) => Err(HandlerError::from(e)),
        (Some(action), Ok(user_id)) => {
            let origin = Origin {
                bot: &bot,
                deps: &deps,
                chat_id,
                message_id,
                user_id,
            };
            origin.run(action).await
        }
    };

    let (notice, result) = match outcome {
        Ok(notice) => (notice, Ok(())),
        Err(e) => match e.downcast_ref::<CartError>() {
            Some(cart_error) => {
                log::warn!("Rejected cart input from chat {}: {}", chat_id, cart_error);
                (Some(format!("⚠️ {}", cart_error)), Ok(()))
            }
            None => (None, Err(e)),
        },
    };

    let answer = bot.answer_callback_query(q.id.clone());
    match notice {
        Some(text) => answer.text(text).await?,
        None => answer.await?,
    };
    result
}
