//! Lavka core - cart ledger and product catalog for the Lavka shopping bot
//!
//! Nothing in this crate knows about Telegram. The bot crate owns a single
//! [`Cart`] instance and a [`Catalog`], and calls into them from its handlers.
//!
//! # Module Structure
//!
//! - `cart`: per-user baskets (add, remove, edit quantity, clear, show, total)
//! - `catalog`: menu sections and products, loaded from TOML or built in
//! - `error`: the `InvalidArgument` error kind shared by all cart operations
//! - `validation`: input checks applied before any cart mutation

pub mod cart;
pub mod catalog;
pub mod error;
pub mod validation;

// Re-export commonly used types for convenience
pub use cart::{lines_total, Cart, CartLine, EMPTY_CART_MESSAGE};
pub use catalog::{Catalog, CatalogError, Product, Section};
pub use error::{CartError, CartResult};
