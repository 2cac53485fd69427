//! HTTP request handlers.
//!
//! Controllers parse and validate input into domain parameters, call the deck service
//! and wrap results in the response envelope. Errors propagate as `AppError` and are
//! rendered by its `IntoResponse` implementation.

pub mod deck;
pub mod health;

#[cfg(test)]
mod test;
