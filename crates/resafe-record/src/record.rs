//! Record identity and the trait seams shared by all artifact types
//!
//! Every record carries a catalog-local [`RecordId`]; most method artifacts
//! additionally carry a human-facing code (`H1`, `SC-01`) that is unique
//! within its own collection by convention, not by construction.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Catalog-local numeric record identity
///
/// Monotonic within a collection and re-derived from `max(existing ids)`
/// whenever a collection is bulk-replaced. Never shown to the analyst; the
/// human-facing identifier is the record's code.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Wrap a raw id value
    #[inline]
    #[must_use]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Raw numeric value
    #[inline]
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl From<u64> for RecordId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A record that can live in a catalog collection
///
/// The catalog keys `update`/`remove` by this id; implementations expose the
/// id field directly.
pub trait CatalogRecord {
    /// Catalog-local identity
    fn id(&self) -> RecordId;
}

/// A record that carries a human-facing code (`H1`, `SC-01`, `UCA-02`)
///
/// Codes are optional on some record families (loss scenarios and safety
/// requirements acquired them late in the method's evolution), so the
/// accessor is `Option`.
pub trait CodedRecord: CatalogRecord {
    /// The record's code, if it has one
    fn code(&self) -> Option<&str>;
}

/// A record with an outbound list of reference codes
///
/// The list is stored decoded (`["H1", "H2"]`); the delimited `"H1, H2"`
/// form exists only at the edges; see [`crate::codes`].
pub trait LinkedRecord {
    /// Outbound reference codes, in authoring order
    fn linked_codes(&self) -> &[String];
}
