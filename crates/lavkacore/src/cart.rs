//! Per-user shopping cart ledger
//!
//! One [`Cart`] is created at startup and shared with every handler by
//! `Arc<Cart>`. Each user gets a basket lazily on the first `add`; after
//! that the basket is only emptied, never dropped.
//!
//! Baskets are stored in a [`DashMap`] keyed by user id. Every operation does
//! its whole read-modify-write while holding that user's shard lock, so two
//! updates for the same user arriving on different dispatcher tasks are
//! applied one after the other instead of racing.

use dashmap::DashMap;

use crate::error::CartResult;
use crate::validation::{validate_product, validate_user_id};

/// Shown by [`Cart::show`] when the user has nothing in the basket
pub const EMPTY_CART_MESSAGE: &str = "Ваша корзина пуста.";

/// One product's standing within a user's basket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub product_name: String,
    /// Price of one unit, fixed by the first `add` of this product
    pub unit_price: i64,
    /// Always >= 1 while the line exists
    pub quantity: i64,
}

impl CartLine {
    /// `quantity * unit_price`, saturating at `i64::MAX`
    pub fn subtotal(&self) -> i64 {
        self.quantity.saturating_mul(self.unit_price)
    }
}

/// Lines of one user, kept in insertion order for stable rendering
#[derive(Debug, Default, Clone)]
struct Basket {
    lines: Vec<CartLine>,
}

impl Basket {
    fn position(&self, product_name: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.product_name == product_name)
    }

    fn line_mut(&mut self, product_name: &str) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product_name == product_name)
    }

    fn remove(&mut self, product_name: &str) -> bool {
        match self.position(product_name) {
            Some(idx) => {
                self.lines.remove(idx);
                true
            }
            None => false,
        }
    }

    fn total(&self) -> i64 {
        lines_total(&self.lines)
    }
}

/// Sum of the lines' subtotals, saturating at `i64::MAX`
pub fn lines_total(lines: &[CartLine]) -> i64 {
    lines.iter().fold(0i64, |acc, line| acc.saturating_add(line.subtotal()))
}

/// In-memory cart ledger: user id -> basket
#[derive(Debug, Default)]
pub struct Cart {
    baskets: DashMap<i64, Basket>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one unit of a product to the user's basket.
    ///
    /// A product already in the basket gets its quantity bumped by one; the
    /// price passed on repeat adds is ignored and the first price stays.
    ///
    /// # Errors
    /// `InvalidArgument` for a non-positive user id, a blank product name or a
    /// negative price. Nothing is changed in that case.
    pub fn add(&self, user_id: i64, product_name: &str, product_price: i64) -> CartResult<()> {
        validate_user_id(user_id)?;
        validate_product(product_name, Some(product_price))?;

        let mut basket = self.baskets.entry(user_id).or_default();
        match basket.line_mut(product_name) {
            Some(line) => {
                line.quantity = line.quantity.saturating_add(1);
                log::debug!(
                    "Cart {}: '{}' quantity -> {}",
                    user_id,
                    product_name,
                    line.quantity
                );
            }
            None => {
                basket.lines.push(CartLine {
                    product_name: product_name.to_string(),
                    unit_price: product_price,
                    quantity: 1,
                });
                log::debug!("Cart {}: added '{}' at {}", user_id, product_name, product_price);
            }
        }
        Ok(())
    }

    /// Removes a product line. Missing users and products are a no-op.
    pub fn remove(&self, user_id: i64, product_name: &str) -> CartResult<()> {
        validate_user_id(user_id)?;
        validate_product(product_name, None)?;

        if let Some(mut basket) = self.baskets.get_mut(&user_id) {
            if basket.remove(product_name) {
                log::debug!("Cart {}: removed '{}'", user_id, product_name);
            }
        }
        Ok(())
    }

    /// Adds `change` (which may be negative or zero) to a line's quantity.
    ///
    /// A line whose quantity drops below 1 is removed. Missing users and
    /// products are a no-op.
    pub fn edit_quantity(&self, user_id: i64, product_name: &str, change: i64) -> CartResult<()> {
        validate_user_id(user_id)?;
        validate_product(product_name, None)?;

        let Some(mut basket) = self.baskets.get_mut(&user_id) else {
            return Ok(());
        };
        let Some(line) = basket.line_mut(product_name) else {
            return Ok(());
        };

        line.quantity = line.quantity.saturating_add(change);
        if line.quantity < 1 {
            basket.remove(product_name);
            log::debug!("Cart {}: '{}' dropped to zero, removed", user_id, product_name);
        }
        Ok(())
    }

    /// Empties the user's basket, keeping the user's entry. No-op for users
    /// who never added anything.
    pub fn clear(&self, user_id: i64) -> CartResult<()> {
        validate_user_id(user_id)?;

        if let Some(mut basket) = self.baskets.get_mut(&user_id) {
            *basket = Basket::default();
        }
        Ok(())
    }

    /// Empties the user's basket and hands back what was in it.
    ///
    /// Reading and emptying happen under one entry lock: a concurrent `add`
    /// lands either in the returned lines or in the emptied basket. Unknown
    /// users get an empty `Vec` and no entry.
    pub fn take(&self, user_id: i64) -> CartResult<Vec<CartLine>> {
        validate_user_id(user_id)?;

        Ok(self
            .baskets
            .get_mut(&user_id)
            .map(|mut basket| std::mem::take(&mut basket.lines))
            .unwrap_or_default())
    }

    /// Renders the basket as a chat message.
    ///
    /// ```
    /// use lavkacore::Cart;
    ///
    /// let cart = Cart::new();
    /// cart.add(1, "Чай", 100).unwrap();
    /// assert_eq!(
    ///     cart.show(1).unwrap(),
    ///     "🛒 Ваша корзина:\n• Чай - 1 шт. x 100 руб = 100 руб\n\n💰 Общая сумма: 100 руб"
    /// );
    /// ```
    pub fn show(&self, user_id: i64) -> CartResult<String> {
        validate_user_id(user_id)?;

        let Some(basket) = self.baskets.get(&user_id) else {
            return Ok(EMPTY_CART_MESSAGE.to_string());
        };
        if basket.lines.is_empty() {
            return Ok(EMPTY_CART_MESSAGE.to_string());
        }

        let mut text = String::from("🛒 Ваша корзина:\n");
        for line in &basket.lines {
            text.push_str(&format!(
                "• {} - {} шт. x {} руб = {} руб\n",
                line.product_name,
                line.quantity,
                line.unit_price,
                line.subtotal()
            ));
        }
        text.push_str(&format!("\n💰 Общая сумма: {} руб", basket.total()));
        Ok(text)
    }

    /// Sum of `quantity * unit_price` over the basket; 0 for unknown users.
    pub fn get_total_price(&self, user_id: i64) -> CartResult<i64> {
        validate_user_id(user_id)?;

        Ok(self.baskets.get(&user_id).map(|basket| basket.total()).unwrap_or(0))
    }

    /// Snapshot of the user's lines in insertion order
    pub fn lines(&self, user_id: i64) -> CartResult<Vec<CartLine>> {
        validate_user_id(user_id)?;

        Ok(self
            .baskets
            .get(&user_id)
            .map(|basket| basket.lines.clone())
            .unwrap_or_default())
    }

    /// Product names in the user's basket, in insertion order
    pub fn product_names(&self, user_id: i64) -> CartResult<Vec<String>> {
        Ok(self
            .lines(user_id)?
            .into_iter()
            .map(|line| line.product_name)
            .collect())
    }

    /// Current quantity of a product, `None` if it is not in the basket
    pub fn quantity(&self, user_id: i64, product_name: &str) -> CartResult<Option<i64>> {
        validate_user_id(user_id)?;
        validate_product(product_name, None)?;

        Ok(self.baskets.get(&user_id).and_then(|basket| {
            basket
                .lines
                .iter()
                .find(|line| line.product_name == product_name)
                .map(|line| line.quantity)
        }))
    }

    pub fn is_empty(&self, user_id: i64) -> CartResult<bool> {
        validate_user_id(user_id)?;

        Ok(self
            .baskets
            .get(&user_id)
            .map(|basket| basket.lines.is_empty())
            .unwrap_or(true))
    }

    /// Number of users that have a basket (empty or not)
    pub fn user_count(&self) -> usize {
        self.baskets.len()
    }
}
