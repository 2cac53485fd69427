//! SeaORM entity models for the deck store.

pub mod prelude;

pub mod deck;
