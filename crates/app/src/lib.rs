//! # pessoas-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the driven port [`PersonRepository`](ports::PersonRepository) that
//!   storage adapters implement
//! - Define the driving use-case struct [`PersonService`](services::person_service::PersonService):
//!   list, create, update, delete
//! - Decide the order of checks (body first, then store) without knowing
//!   *how* persistence works
//!
//! ## Dependency rule
//! Depends on `pessoas-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
