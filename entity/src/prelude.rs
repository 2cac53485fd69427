pub use super::deck::Entity as Deck;
