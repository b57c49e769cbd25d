use thiserror::Error;

/// Error returned by cart operations
///
/// Every failure is a validation failure raised before the basket is touched,
/// so a returned error always means "nothing changed". The message is written
/// for the chat user and can be sent back as is.
///
/// # Example
///
/// ```
/// use lavkacore::{Cart, CartError};
///
/// let cart = Cart::new();
/// let err = cart.add(0, "Кофе", 150).unwrap_err();
/// assert!(matches!(err, CartError::InvalidArgument(_)));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// Malformed user id, product name, price or quantity change
    #[error("{0}")]
    InvalidArgument(String),
}

impl CartError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        CartError::InvalidArgument(msg.into())
    }
}

/// Type alias for Result with CartError
pub type CartResult<T> = Result<T, CartError>;
