//! Input parsing and request validation shared by the controllers.

pub mod parse;
pub mod validate;
