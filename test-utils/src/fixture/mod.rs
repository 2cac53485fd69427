//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory test data structures
//! for use in unit tests and as default values for factories. Unlike factories,
//! fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let deck = fixture::deck::entity();
//!
//! // Create with custom fields
//! let combo = fixture::deck::entity_builder()
//!     .name("Storm Combo")
//!     .deck_type("COMBO")
//!     .build();
//! ```

pub mod deck;

pub use deck::{entity as deck_entity, entity_builder as deck_entity_builder};
