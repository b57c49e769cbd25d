//! Callback payloads carried by inline buttons
//!
//! Every inline button the bot sends carries one of these actions encoded as
//! `prefix:argument`. Product and section names go into the payload verbatim,
//! so the whole payload must fit Telegram's 64-byte `callback_data` limit;
//! `check-catalog` verifies that for every product in the menu.

use lavkacore::validation::parse_quantity_change;

use crate::config;

/// Action requested by an inline button press
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CallbackAction {
    /// Show the list of menu sections in place
    Sections,
    /// Start a new order: send the list of sections as a new message
    NewOrder,
    /// Show the products of a section
    Section(String),
    /// Add one unit of a product to the cart
    Add(String),
    ShowCart,
    /// Pick a cart line to edit
    EditCart,
    /// Show the +/- controls for one cart line
    EditLine(String),
    /// Change a cart line's quantity by `change`
    ChangeQuantity { product: String, change: i64 },
    Pay,
    /// Ask for confirmation before clearing the cart
    ClearCart,
    ConfirmClear,
}

impl CallbackAction {
    /// Encodes the action as `callback_data`
    pub fn as_data(&self) -> String {
        match self {
            CallbackAction::Sections => "menu:sections".to_string(),
            CallbackAction::NewOrder => "menu:new_order".to_string(),
            CallbackAction::Section(name) => format!("sec:{}", name),
            CallbackAction::Add(product) => format!("add:{}", product),
            CallbackAction::ShowCart => "cart:show".to_string(),
            CallbackAction::EditCart => "cart:edit".to_string(),
            CallbackAction::EditLine(product) => format!("edit:{}", product),
            CallbackAction::ChangeQuantity { product, change } => format!("qty:{:+}:{}", change, product),
            CallbackAction::Pay => "cart:pay".to_string(),
            CallbackAction::ClearCart => "cart:clear".to_string(),
            CallbackAction::ConfirmClear => "cart:clear_ok".to_string(),
        }
    }

    /// Decodes `callback_data`; `None` for anything the bot did not produce
    pub fn parse(data: &str) -> Option<Self> {
        let (prefix, rest) = data.split_once(':')?;
        let action = match (prefix, rest) {
            ("menu", "sections") => CallbackAction::Sections,
            ("menu", "new_order") => CallbackAction::NewOrder,
            ("cart", "show") => CallbackAction::ShowCart,
            ("cart", "edit") => CallbackAction::EditCart,
            ("cart", "pay") => CallbackAction::Pay,
            ("cart", "clear") => CallbackAction::ClearCart,
            ("cart", "clear_ok") => CallbackAction::ConfirmClear,
            ("sec", name) if !name.is_empty() => CallbackAction::Section(name.to_string()),
            ("add", product) if !product.is_empty() => CallbackAction::Add(product.to_string()),
            ("edit", product) if !product.is_empty() => CallbackAction::EditLine(product.to_string()),
            ("qty", rest) => {
                let (change, product) = rest.split_once(':')?;
                if product.is_empty() {
                    return None;
                }
                let change = parse_quantity_change(change).ok()?;
                CallbackAction::ChangeQuantity {
                    product: product.to_string(),
                    change,
                }
            }
            _ => return None,
        };
        Some(action)
    }
}

/// Whether an encoded payload fits Telegram's `callback_data` limit
pub fn fits_callback_data(data: &str) -> bool {
    data.len() <= config::telegram::CALLBACK_DATA_MAX_BYTES
}
