//! Data transfer objects shared by the HTTP layer.
//!
//! Everything in here is serialized straight onto the wire: the response envelope in
//! `api` and the deck request/response shapes in `deck`.

pub mod api;
pub mod deck;
