//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the deck API, including
//! endpoints, business rules, data access and infrastructure. The backend uses Axum as
//! the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO conversion
//! - **Service Layer** (`service/`) - Business rules such as name uniqueness and existence checks
//! - **Data Layer** (`data/`) - The `DeckStore` contract and its SeaORM repository
//! - **Model Layer** (`model/`) - Domain models, enums, filters and pagination
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Util** (`util/`) - Path/query parsing and request body validation
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (the deck service)
//! - **Startup** (`startup`) - Tracing, database connection with migrations, shutdown signal
//! - **Router** (`router`) - Axum route configuration and API documentation
//!
//! # Request Flow
//!
//! 1. **Router** receives the HTTP request and routes it to a controller
//! 2. **Controller** validates the path, query or body into domain parameters
//! 3. **Service** applies business rules and calls the store
//! 4. **Data** queries the database and converts entities to domain models
//! 5. **Controller** converts the domain model to a DTO inside the response envelope

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
