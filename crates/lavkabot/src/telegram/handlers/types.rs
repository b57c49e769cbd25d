//! Handler types and dependencies

use std::sync::Arc;

use lavkacore::{Cart, Catalog};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
///
/// Built once in `run_bot`; every handler branch gets a clone, and the cart
/// and catalog behind the `Arc`s are shared by all of them.
#[derive(Clone)]
pub struct HandlerDeps {
    pub cart: Arc<Cart>,
    pub catalog: Arc<Catalog>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(cart: Arc<Cart>, catalog: Arc<Catalog>) -> Self {
        Self { cart, catalog }
    }
}
