//! Server-side domain models and parameter types.
//!
//! This module contains the domain models used throughout the service layer. Deck
//! records are converted from entity models at the repository boundary and transformed
//! to DTOs at the controller boundary, so the service layer only ever sees validated,
//! strongly typed values.

pub mod deck;
pub mod query;
pub mod symbol;
