//! Flat-file implementation of [`PersonRepository`].

use std::future::Future;
use std::sync::Arc;

use tokio::sync::Mutex;

use pessoas_app::ports::PersonRepository;
use pessoas_domain::error::PessoasError;
use pessoas_domain::id::PersonId;
use pessoas_domain::person::Person;

use crate::store::JsonFile;

/// Person repository backed by a single JSON array file.
///
/// Mutations hold `write_lock` from the read until the rewrite completes, so
/// two requests never base their rewrite on the same snapshot. Clones share
/// the lock.
#[derive(Clone)]
pub struct JsonFilePersonRepository {
    file: JsonFile,
    write_lock: Arc<Mutex<()>>,
}

impl JsonFilePersonRepository {
    /// Create a new repository over the given store file.
    #[must_use]
    pub fn new(file: JsonFile) -> Self {
        Self {
            file,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

impl PersonRepository for JsonFilePersonRepository {
    fn read_raw(&self) -> impl Future<Output = Result<Vec<u8>, PessoasError>> + Send {
        let file = self.file.clone();
        async move { Ok(file.read_bytes().await?) }
    }

    fn create(&self, person: Person) -> impl Future<Output = Result<Person, PessoasError>> + Send {
        let file = self.file.clone();
        let lock = Arc::clone(&self.write_lock);
        async move {
            let _guard = lock.lock().await;
            let mut people = file.load().await?;
            let created = people.insert(person);
            file.save(&people).await?;
            Ok(created)
        }
    }

    fn update(
        &self,
        id: PersonId,
        patch: Person,
    ) -> impl Future<Output = Result<Option<Person>, PessoasError>> + Send {
        let file = self.file.clone();
        let lock = Arc::clone(&self.write_lock);
        async move {
            let _guard = lock.lock().await;
            let mut people = file.load().await?;
            let Some(updated) = people.update(id, patch) else {
                return Ok(None);
            };
            file.save(&people).await?;
            Ok(Some(updated))
        }
    }

    fn delete(&self, id: PersonId) -> impl Future<Output = Result<usize, PessoasError>> + Send {
        let file = self.file.clone();
        let lock = Arc::clone(&self.write_lock);
        async move {
            let _guard = lock.lock().await;
            let mut people = file.load().await?;
            let removed = people.remove(id);
            file.save(&people).await?;
            Ok(removed)
        }
    }
}
