use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid product ID")]
    ProductNotFound(i64),
    #[error("Product not in cart")]
    NotInCart(i64),
    #[error("Quantity must be greater than zero")]
    InvalidQuantity(i64),
    #[error("Not enough stock available")]
    InsufficientStock { requested: i64, available: u32 },
    #[error("Profile not found")]
    ProfileNotFound(u64),
    #[error("user already exist")]
    UsernameTaken(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
