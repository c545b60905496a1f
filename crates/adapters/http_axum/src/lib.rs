//! # pessoas-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Route `GET|POST /pessoas` and `PUT|DELETE /pessoas/{id}` to
//!   [`PersonService`](pessoas_app::services::person_service::PersonService)
//! - Answer every other method/path combination with a JSON `404`
//! - Map application results into HTTP responses (JSON or plain text)
//! - Log each request (method + path) via `tower-http`'s trace layer
//!
//! ## Dependency rule
//! Depends on `pessoas-app` (for port traits and services) and `pessoas-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
