//! Person service — use-cases for the `/pessoas` resource.

use pessoas_domain::error::{NotFoundError, PessoasError, ValidationError};
use pessoas_domain::id::PersonId;
use pessoas_domain::person::Person;

use crate::ports::PersonRepository;

/// Application service for person CRUD operations.
pub struct PersonService<R> {
    repo: R,
}

impl<R: PersonRepository> PersonService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Return the stored collection verbatim, even when it is not valid JSON
    /// or not valid UTF-8.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_raw(&self) -> Result<Vec<u8>, PessoasError> {
        self.repo.read_raw().await
    }

    /// Parse `body` as a new record and store it with a fresh id.
    ///
    /// The body is parsed before the store is touched.
    ///
    /// # Errors
    ///
    /// Returns [`PessoasError::Validation`] when `body` is not a JSON object,
    /// or a storage/processing error from the repository.
    pub async fn create_person(&self, body: &[u8]) -> Result<Person, PessoasError> {
        let person = Person::from_json(body)?;
        let created = self.repo.create(person).await?;
        tracing::debug!(id = ?created.id(), "person created");
        Ok(created)
    }

    /// Shallow-merge the fields in `body` into the record with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`PessoasError::Validation`] when `body` is not a JSON object,
    /// [`PessoasError::NotFound`] when no record has `id`, or a
    /// storage/processing error from the repository.
    pub async fn update_person(&self, id: PersonId, body: &[u8]) -> Result<Person, PessoasError> {
        let patch = Person::from_json(body)?;
        let updated = self
            .repo
            .update(id, patch)
            .await?
            .ok_or(NotFoundError { id })?;
        tracing::debug!(%id, "person updated");
        Ok(updated)
    }

    /// Remove the record with `id`.
    ///
    /// Removing an id that does not exist succeeds without changes.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidId`] for id `0`, or a
    /// storage/processing error from the repository.
    pub async fn delete_person(&self, id: PersonId) -> Result<(), PessoasError> {
        if id.is_zero() {
            return Err(ValidationError::InvalidId(id.to_string()).into());
        }
        let removed = self.repo.delete(id).await?;
        tracing::debug!(%id, removed, "person deleted");
        Ok(())
    }
}
