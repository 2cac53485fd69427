//! Database repository layer.
//!
//! `DeckStore` is the persistence contract the service layer depends on and
//! `DeckRepository` its SeaORM implementation. Repositories use SeaORM entity models
//! internally and hand domain models back, so entity types never leave this module.

pub mod deck;
pub mod store;
