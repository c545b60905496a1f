//! Storage port — repository trait for the person collection.

use std::future::Future;

use pessoas_domain::error::PessoasError;
use pessoas_domain::id::PersonId;
use pessoas_domain::person::Person;

/// Persistence for the single person collection.
///
/// Every mutating method is a complete read → modify → write cycle.
/// Implementations must not let two cycles interleave.
pub trait PersonRepository {
    /// Return the stored collection byte for byte, without re-validation.
    fn read_raw(&self) -> impl Future<Output = Result<Vec<u8>, PessoasError>> + Send;

    /// Assign an id to `person`, append it and return the stored record.
    fn create(&self, person: Person) -> impl Future<Output = Result<Person, PessoasError>> + Send;

    /// Merge `patch` into the record with `id`.
    ///
    /// Resolves to `None` when no record matches; the store is left untouched.
    fn update(
        &self,
        id: PersonId,
        patch: Person,
    ) -> impl Future<Output = Result<Option<Person>, PessoasError>> + Send;

    /// Remove every record with `id`, returning how many were removed.
    fn delete(&self, id: PersonId) -> impl Future<Output = Result<usize, PessoasError>> + Send;
}
