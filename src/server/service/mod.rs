//! Service layer for business logic and orchestration.
//!
//! Services sit between the controller (API) layer and the data (repository) layer and
//! are responsible for:
//!
//! - **Business Logic**: Enforcing rules such as deck name uniqueness and existence checks
//! - **Orchestration**: Turning request parameters into validated domain values before
//!   they reach storage
//! - **Domain Models**: Working with domain models rather than DTOs or entity models

pub mod deck;
