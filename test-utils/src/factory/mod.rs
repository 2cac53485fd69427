//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Each factory sources its defaults from the matching
//! fixture and assigns a unique id and name so multiple rows never collide.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let deck = factory::deck::create_deck(&db).await?;
//!
//!     // Customize through the builder
//!     let combo = factory::deck::DeckFactory::new(&db)
//!         .name("Storm Combo")
//!         .deck_type("COMBO")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod deck;
pub mod helpers;

pub use deck::create_deck;
