//! Message texts and keyboards for each screen of the bot

use lavkacore::{lines_total, Cart, CartLine, CartResult, Catalog};
use teloxide::types::InlineKeyboardMarkup;

use crate::config;
use crate::telegram::keyboards;

pub const SECTIONS_PROMPT: &str = "Выберите раздел:";
pub const SEARCH_PROMPT: &str = "Введите название товара:";
pub const EDIT_PROMPT: &str = "Выберите товар для изменения количества:";
pub const CLEAR_PROMPT: &str = "Очистить корзину?";
pub const CART_CLEARED: &str = "🗑 Корзина очищена.";
pub const UNKNOWN_COMMAND: &str = "Неизвестная команда. Список команд: /help";
pub const STALE_BUTTON: &str = "Эта кнопка больше не работает.";
pub const SECTION_GONE: &str = "Этого раздела больше нет в меню.";
pub const PRODUCT_GONE: &str = "Этого товара больше нет в меню.";

pub fn welcome_text(catalog: &Catalog, first_name: Option<&str>) -> String {
    match first_name {
        Some(name) => format!(
            "Здравствуйте, {}! Добро пожаловать в «{}».\nВыберите «Меню», чтобы сделать заказ.",
            name, catalog.title
        ),
        None => format!(
            "Добро пожаловать в «{}».\nВыберите «Меню», чтобы сделать заказ.",
            catalog.title
        ),
    }
}

pub fn added_text(product_name: &str) -> String {
    format!("Товар «{}» добавлен в корзину.", product_name)
}

/// Cuts a message down to Telegram's text limit on a char boundary
pub fn fit_message(text: String) -> String {
    let limit = config::telegram::MESSAGE_MAX_CHARS;
    if text.chars().count() <= limit {
        return text;
    }
    let mut cut: String = text.chars().take(limit - 1).collect();
    cut.push('…');
    cut
}

/// Cuts product lines out of a cart or receipt text so it fits Telegram's
/// limit while the total after the last blank line stays intact
pub fn fit_keeping_total(text: String) -> String {
    let limit = config::telegram::MESSAGE_MAX_CHARS;
    if text.chars().count() <= limit {
        return text;
    }
    let Some(split) = text.rfind("\n\n") else {
        return fit_message(text);
    };
    let (body, total) = text.split_at(split);
    // "…" plus the newline before it
    let budget = limit.saturating_sub(total.chars().count() + 2);

    let mut kept = String::new();
    let mut used = 0;
    for line in body.lines() {
        let len = line.chars().count() + 1;
        if used + len > budget {
            break;
        }
        kept.push_str(line);
        kept.push('\n');
        used += len;
    }
    kept.push('…');
    kept.push_str(total);
    kept
}

/// The cart summary with the cart controls, or the empty-cart message with
/// a button to start ordering
pub fn cart_view(cart: &Cart, user_id: i64) -> CartResult<(String, InlineKeyboardMarkup)> {
    let text = fit_keeping_total(cart.show(user_id)?);
    let keyboard = if cart.is_empty(user_id)? {
        keyboards::new_order_keyboard()
    } else {
        keyboards::cart_keyboard()
    };
    Ok((text, keyboard))
}

/// The +/- controls for one line, `None` once the line is gone
pub fn quantity_view(cart: &Cart, user_id: i64, product: &str) -> CartResult<Option<(String, InlineKeyboardMarkup)>> {
    Ok(cart
        .quantity(user_id, product)?
        .map(|quantity| (format!("{}: {} шт.", product, quantity), keyboards::quantity_keyboard(product))))
}

/// Receipt shown after paying
pub fn order_text(lines: &[CartLine]) -> String {
    let mut text = String::from("✅ Заказ оформлен!\n\n");
    for line in lines {
        text.push_str(&format!(
            "• {} - {} шт. = {} руб\n",
            line.product_name,
            line.quantity,
            line.subtotal()
        ));
    }
    text.push_str(&format!("\n💰 Итого: {} руб\nСпасибо за заказ!", lines_total(lines)));
    fit_keeping_total(text)
}

/// Search results as text plus "add" buttons; no keyboard when nothing matched
pub fn search_view(catalog: &Catalog, query: &str) -> (String, Option<InlineKeyboardMarkup>) {
    let found = catalog.search(query);
    if found.is_empty() {
        return (format!("По запросу «{}» ничего не найдено.", query.trim()), None);
    }

    let mut text = format!("Найдено по запросу «{}»:\n", query.trim());
    for product in found.iter().take(keyboards::SEARCH_RESULTS_LIMIT) {
        text.push_str(&format!("• {} — {} руб\n", product.name, product.price));
    }
    if found.len() > keyboards::SEARCH_RESULTS_LIMIT {
        text.push_str(&format!(
            "…и ещё {}. Уточните запрос.",
            found.len() - keyboards::SEARCH_RESULTS_LIMIT
        ));
    }
    (fit_message(text), Some(keyboards::search_results_keyboard(&found)))
}
