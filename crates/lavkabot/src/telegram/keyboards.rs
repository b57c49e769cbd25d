//! Reply and inline keyboards
//!
//! Pure builders: no I/O, no cart access. Handlers pass in whatever data the
//! keyboard shows (catalog sections, cart product names, search results).

use lavkacore::{Catalog, Product, Section};
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup};

use super::actions::CallbackAction;
use super::cb;

/// Text of the reply keyboard buttons
pub const MENU_BUTTON: &str = "Меню";
pub const CART_BUTTON: &str = "Корзина";
pub const SEARCH_BUTTON: &str = "Поиск";

/// Search results beyond this many are not offered as buttons
pub const SEARCH_RESULTS_LIMIT: usize = 10;

const BACK_TO_SECTIONS: &str = "🔙Выбор раздела";

pub fn keyboard_stats(keyboard: &InlineKeyboardMarkup) -> (usize, usize) {
    let rows = keyboard.inline_keyboard.len();
    let buttons = keyboard.inline_keyboard.iter().map(|row| row.len()).sum();
    (rows, buttons)
}

fn action(text: impl Into<String>, action: CallbackAction) -> InlineKeyboardButton {
    cb(text, action.as_data())
}

/// Persistent keyboard under the input field: "Меню", "Корзина", "Поиск"
pub fn main_keyboard() -> KeyboardMarkup {
    KeyboardMarkup::new(vec![vec![
        KeyboardButton::new(MENU_BUTTON),
        KeyboardButton::new(CART_BUTTON),
        KeyboardButton::new(SEARCH_BUTTON),
    ]])
    .resize_keyboard()
    .input_field_placeholder("Выберите:")
}

/// One button per menu section
pub fn sections_keyboard(catalog: &Catalog) -> InlineKeyboardMarkup {
    let rows = catalog
        .sections
        .iter()
        .map(|section| vec![action(section.name.clone(), CallbackAction::Section(section.name.clone()))])
        .collect::<Vec<_>>();
    InlineKeyboardMarkup::new(rows)
}

/// One button per product of a section, plus a way back to the sections
pub fn products_keyboard(section: &Section) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = section
        .products
        .iter()
        .map(|product| {
            vec![action(
                format!("{} — {} руб", product.name, product.price),
                CallbackAction::Add(product.name.clone()),
            )]
        })
        .collect();
    rows.push(vec![action(BACK_TO_SECTIONS, CallbackAction::Sections)]);
    InlineKeyboardMarkup::new(rows)
}

/// Shown after a product was added
pub fn added_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![action("Перейти в корзину", CallbackAction::ShowCart)],
        vec![action(BACK_TO_SECTIONS, CallbackAction::Sections)],
    ])
}

/// Shown with an empty cart, after paying and after clearing
pub fn new_order_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![action("Сделать еще заказ", CallbackAction::NewOrder)]])
}

/// Controls under a non-empty cart
pub fn cart_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![action("Редактировать количество", CallbackAction::EditCart)],
        vec![action("Оплатить", CallbackAction::Pay)],
        vec![action("Очистить корзину", CallbackAction::ClearCart)],
    ])
}

/// One button per cart line to pick which quantity to edit
pub fn edit_quantity_keyboard(product_names: &[String]) -> InlineKeyboardMarkup {
    let mut rows: Vec<Vec<InlineKeyboardButton>> = product_names
        .iter()
        .map(|name| vec![action(name.clone(), CallbackAction::EditLine(name.clone()))])
        .collect();
    rows.push(vec![action("Назад", CallbackAction::ShowCart)]);
    InlineKeyboardMarkup::new(rows)
}

/// "➕" / "➖" for one product, plus a way back to the cart
pub fn quantity_keyboard(product: &str) -> InlineKeyboardMarkup {
    let change = |change: i64| CallbackAction::ChangeQuantity {
        product: product.to_string(),
        change,
    };
    InlineKeyboardMarkup::new(vec![
        vec![action("➕", change(1)), action("➖", change(-1))],
        vec![action("🔙В корзину", CallbackAction::ShowCart)],
    ])
}

/// Confirmation before the cart is cleared
pub fn clear_cart_keyboard() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![action("Да", CallbackAction::ConfirmClear)],
        vec![action("Нет", CallbackAction::ShowCart)],
    ])
}

/// "Добавить в корзину" for each search hit (a single hit keeps the plain label)
pub fn search_results_keyboard(products: &[&Product]) -> InlineKeyboardMarkup {
    let rows = match products {
        [single] => vec![vec![action("Добавить в корзину", CallbackAction::Add(single.name.clone()))]],
        _ => products
            .iter()
            .take(SEARCH_RESULTS_LIMIT)
            .map(|product| {
                vec![action(
                    format!("➕ {} — {} руб", product.name, product.price),
                    CallbackAction::Add(product.name.clone()),
                )]
            })
            .collect(),
    };
    InlineKeyboardMarkup::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callback_data(keyboard: &InlineKeyboardMarkup) -> Vec<String> {
        keyboard
            .inline_keyboard
            .iter()
            .flatten()
            .filter_map(|button| match &button.kind {
                InlineKeyboardButtonKind::CallbackData(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_keyboard_stats_multiple_rows() {
        let keyboard = InlineKeyboardMarkup::new(vec![
            vec![InlineKeyboardButton::callback("A", "a")],
            vec![
                InlineKeyboardButton::callback("B", "b"),
                InlineKeyboardButton::callback("C", "c"),
            ],
        ]);
        assert_eq!(keyboard_stats(&keyboard), (2, 3));
    }

    #[test]
    fn test_main_keyboard_buttons() {
        let keyboard = main_keyboard();
        let labels: Vec<_> = keyboard.keyboard.iter().flatten().map(|b| b.text.as_str()).collect();
        assert_eq!(labels, vec![MENU_BUTTON, CART_BUTTON, SEARCH_BUTTON]);
    }

    #[test]
    fn test_sections_keyboard_one_row_per_section() {
        let catalog = Catalog::default();
        let keyboard = sections_keyboard(&catalog);
        assert_eq!(keyboard_stats(&keyboard), (3, 3));
        assert_eq!(callback_data(&keyboard)[0], "sec:Основное меню");
    }

    #[test]
    fn test_products_keyboard_has_back_button() {
        let catalog = Catalog::default();
        let section = catalog.section("Комплексные обеды").unwrap();
        let keyboard = products_keyboard(section);

        assert_eq!(keyboard_stats(&keyboard), (3, 3));
        assert_eq!(
            callback_data(&keyboard),
            vec!["add:Бизнес-ланч", "add:Студенческий обед", "menu:sections"]
        );
        assert_eq!(keyboard.inline_keyboard[0][0].text, "Бизнес-ланч — 450 руб");
    }

    #[test]
    fn test_cart_keyboard() {
        assert_eq!(
            callback_data(&cart_keyboard()),
            vec!["cart:edit", "cart:pay", "cart:clear"]
        );
    }

    #[test]
    fn test_edit_quantity_keyboard() {
        let names = vec!["Чай".to_string(), "Кофе".to_string()];
        let keyboard = edit_quantity_keyboard(&names);
        assert_eq!(keyboard_stats(&keyboard), (3, 3));
        assert_eq!(callback_data(&keyboard), vec!["edit:Чай", "edit:Кофе", "cart:show"]);
    }

    #[test]
    fn test_quantity_keyboard() {
        let keyboard = quantity_keyboard("Чай");
        assert_eq!(keyboard_stats(&keyboard), (2, 3));
        assert_eq!(callback_data(&keyboard), vec!["qty:+1:Чай", "qty:-1:Чай", "cart:show"]);
    }

    #[test]
    fn test_clear_cart_keyboard() {
        assert_eq!(callback_data(&clear_cart_keyboard()), vec!["cart:clear_ok", "cart:show"]);
    }

    #[test]
    fn test_search_results_keyboard_single_and_many() {
        let catalog = Catalog::default();

        let single = catalog.search("кофе");
        let keyboard = search_results_keyboard(&single);
        assert_eq!(keyboard.inline_keyboard[0][0].text, "Добавить в корзину");
        assert_eq!(callback_data(&keyboard), vec!["add:Кофе"]);

        let many = catalog.search("о");
        assert!(many.len() > 1);
        let keyboard = search_results_keyboard(&many);
        assert_eq!(keyboard_stats(&keyboard).0, many.len().min(SEARCH_RESULTS_LIMIT));
    }

    #[test]
    fn test_static_keyboards_fit_callback_limit() {
        for keyboard in [added_keyboard(), new_order_keyboard(), cart_keyboard(), clear_cart_keyboard()] {
            for data in callback_data(&keyboard) {
                assert!(crate::telegram::actions::fits_callback_data(&data), "{}", data);
            }
        }
    }
}
