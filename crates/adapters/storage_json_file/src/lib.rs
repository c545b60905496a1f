//! # pessoas-adapter-storage-json-file
//!
//! Flat-file persistence adapter: the whole collection lives in a single
//! JSON array that is read fresh and rewritten wholesale on every mutation.
//!
//! ## Responsibilities
//! - Implement the repository port trait defined in `pessoas-app::ports::storage`
//! - Initialize the store file when it is missing (optional)
//! - Serialize read-modify-write cycles so concurrent mutations cannot lose updates
//! - Map IO and JSON failures into domain errors
//!
//! ## Dependency rule
//! Depends on `pessoas-app` (for port traits) and `pessoas-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod person_repo;
pub mod store;

pub use person_repo::JsonFilePersonRepository;
pub use store::{Config, JsonFile};
