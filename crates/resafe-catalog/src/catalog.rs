//! Ordered record collection with tolerant id-keyed mutation

use crate::sequencer::CodeSequencer;
use resafe_record::{CatalogRecord, CodedRecord, RecordId};
use std::slice;

/// One ordered collection of records of a single type
///
/// Ordering is a user-facing invariant: `add` inserts at the front so newly
/// created artifacts appear above older ones. Mutation is id-keyed and
/// tolerant: `update`/`remove` on an unknown id are no-ops, mirroring the
/// forgiving semantics the analyst-facing layer expects.
///
/// # Example
/// ```
/// use resafe_catalog::Catalog;
/// use resafe_record::{Accident, RecordId};
///
/// let mut accidents: Catalog<Accident> = Catalog::new();
/// accidents.add(|id| Accident {
///     id,
///     code: "A1".into(),
///     description: "Risk of death due to insulin mismanagement.".into(),
/// });
/// assert_eq!(accidents.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    items: Vec<T>,
    seq: CodeSequencer,
}

impl<T> Default for Catalog<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            seq: CodeSequencer::new(),
        }
    }
}

impl<T: CatalogRecord> Catalog<T> {
    /// Create an empty collection
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id, build the record with it, and insert at the
    /// front
    ///
    /// Returns the allocated id.
    pub fn add(&mut self, make: impl FnOnce(RecordId) -> T) -> RecordId {
        let id = self.seq.next();
        let record = make(id);
        debug_assert_eq!(record.id(), id, "record must carry the allocated id");
        self.items.insert(0, record);
        id
    }

    /// Patch the record with the given id in place
    ///
    /// Returns `false` (not an error) when no record carries the id.
    pub fn update(&mut self, id: RecordId, patch: impl FnOnce(&mut T)) -> bool {
        match self.items.iter_mut().find(|item| item.id() == id) {
            Some(item) => {
                patch(item);
                true
            }
            None => false,
        }
    }

    /// Remove the record with the given id
    ///
    /// Returns `false` (not an error) when no record carries the id.
    pub fn remove(&mut self, id: RecordId) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id() != id);
        self.items.len() != before
    }

    /// Atomically replace the whole collection (snapshot hydration)
    ///
    /// Preserves the given order and reseeds the sequencer to the maximum
    /// id present, so ids allocated afterwards never collide with reloaded
    /// records.
    pub fn replace_all(&mut self, records: Vec<T>) {
        let max_id = records.iter().map(|r| r.id().value()).max().unwrap_or(0);
        self.seq.reseed(max_id);
        self.items = records;
    }

    /// Drop every record and restart the sequencer
    pub fn clear(&mut self) {
        self.replace_all(Vec::new());
    }

    /// Record with the given id, if present
    #[must_use]
    pub fn get(&self, id: RecordId) -> Option<&T> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// Whether a record with the given id exists
    #[inline]
    #[must_use]
    pub fn contains_id(&self, id: RecordId) -> bool {
        self.get(id).is_some()
    }

    /// Records in display order (newest first)
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[T] {
        &self.items
    }

    /// Iterate records in display order
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The embedded sequencer (read-only, for invariant checks)
    #[inline]
    #[must_use]
    pub fn sequencer(&self) -> &CodeSequencer {
        &self.seq
    }
}

impl<T: CodedRecord> Catalog<T> {
    /// First record carrying the given code
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&T> {
        self.items.iter().find(|item| item.code() == Some(code))
    }

    /// Whether any record carries the given code
    #[inline]
    #[must_use]
    pub fn contains_code(&self, code: &str) -> bool {
        self.find_by_code(code).is_some()
    }

    /// Iterate the codes present in this collection
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.items.iter().filter_map(CodedRecord::code)
    }
}

impl<'a, T: CatalogRecord> IntoIterator for &'a Catalog<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
