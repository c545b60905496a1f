//! # pessoas-domain
//!
//! Pure domain model for the pessoas record service.
//!
//! ## Responsibilities
//! - Foundational types: the integer [`PersonId`](id::PersonId) and error conventions
//! - Define the schema-less [`Person`](person::Person) record and its merge rules
//! - Define the [`Collection`](collection::Collection) persisted as one JSON array,
//!   including id assignment and linear lookups
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;

pub mod collection;
pub mod person;
