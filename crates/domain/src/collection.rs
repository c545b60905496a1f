//! Collection — the ordered list of person records persisted as one JSON array.
//!
//! There is no secondary index: every lookup is a linear scan by `id`.

use serde::{Deserialize, Serialize};

use crate::id::PersonId;
use crate::person::Person;

/// Every stored person, in file order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Collection {
    records: Vec<Person>,
}

impl Collection {
    /// Parse the textual contents of a store.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] when the text is not a
    /// JSON array of objects.
    pub fn parse(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    /// Serialize with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if serialization fails.
    pub fn to_pretty_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    fn get(&self, id: PersonId) -> Option<&Person> {
        self.records.iter().find(|p| p.has_id(id))
    }

    /// Id the next inserted record receives.
    ///
    /// One past the larger of the record count and the highest stored id, so
    /// a store that never saw a deletion numbers records `1..=len` and ids
    /// still alive after deletions are never handed out again.
    #[must_use]
    pub fn next_id(&self) -> PersonId {
        let count = i64::try_from(self.records.len()).unwrap_or(i64::MAX - 1);
        let highest = self
            .records
            .iter()
            .filter_map(Person::id)
            .map(PersonId::get)
            .max()
            .unwrap_or(0);
        PersonId::new(count.max(highest).saturating_add(1))
    }

    /// Assign the next id to `person`, append it and return the stored copy.
    ///
    /// Any `id` the caller supplied is overwritten.
    pub fn insert(&mut self, mut person: Person) -> Person {
        person.set_id(self.next_id());
        self.records.push(person.clone());
        person
    }

    /// Merge `patch` into the record with `id`, returning the merged record.
    pub fn update(&mut self, id: PersonId, patch: Person) -> Option<Person> {
        let record = self.records.iter_mut().find(|p| p.has_id(id))?;
        record.merge(patch);
        Some(record.clone())
    }

    /// Drop every record with `id`, returning how many were removed.
    pub fn remove(&mut self, id: PersonId) -> usize {
        let before = self.records.len();
        self.records.retain(|p| !p.has_id(id));
        before - self.records.len()
    }
}
