//! Forward and inverse reference resolution

use resafe_catalog::Catalog;
use resafe_record::{CatalogRecord, CodedRecord, LinkedRecord};
use std::collections::HashSet;

/// Outcome of resolving one record's outbound reference list
///
/// `dangling` is exactly the referenced codes with no matching record in
/// the target collection; order follows the reference list. Resolution
/// never mutates either side.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Resolution {
    /// Codes that found a record in the target collection
    pub resolved: Vec<String>,
    /// Codes with no matching record (reported, never auto-removed)
    pub dangling: Vec<String>,
}

impl Resolution {
    /// Whether every reference resolved
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.dangling.is_empty()
    }
}

/// Resolve a record's outbound references against the target collection
#[must_use]
pub fn resolve<R, T>(record: &R, targets: &Catalog<T>) -> Resolution
where
    R: LinkedRecord,
    T: CodedRecord,
{
    resolve_codes(record.linked_codes(), targets)
}

/// Resolve a plain code list against the target collection
#[must_use]
pub fn resolve_codes<T: CodedRecord>(codes: &[String], targets: &Catalog<T>) -> Resolution {
    let known: HashSet<&str> = targets.codes().collect();

    let mut resolution = Resolution::default();
    for code in codes {
        if known.contains(code.as_str()) {
            resolution.resolved.push(code.clone());
        } else {
            resolution.dangling.push(code.clone());
        }
    }
    resolution
}

/// Inverse query: records whose reference list includes `code`
///
/// Answers "what depends on this artifact before I delete it". Display
/// order of the catalog is preserved.
#[must_use]
pub fn references_to<'a, T>(code: &str, catalog: &'a Catalog<T>) -> Vec<&'a T>
where
    T: CatalogRecord + LinkedRecord,
{
    catalog
        .iter()
        .filter(|record| record.linked_codes().iter().any(|c| c == code))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use resafe_record::{Accident, Hazard, RecordId};

    fn accidents(codes: &[&str]) -> Catalog<Accident> {
        let mut catalog = Catalog::new();
        for code in codes {
            catalog.add(|id| Accident {
                id,
                code: (*code).to_string(),
                description: String::new(),
            });
        }
        catalog
    }

    fn hazard(code: &str, linked: &[&str]) -> Hazard {
        Hazard {
            id: RecordId::new(1),
            code: code.to_string(),
            description: String::new(),
            linked_accidents: linked.iter().map(|c| (*c).to_string()).collect(),
        }
    }

    #[test]
    fn resolve_splits_resolved_and_dangling() {
        let targets = accidents(&["A1"]);
        let record = hazard("H1", &["A1", "A9"]);

        let resolution = resolve(&record, &targets);

        assert_eq!(resolution.resolved, vec!["A1".to_string()]);
        assert_eq!(resolution.dangling, vec!["A9".to_string()]);
        assert!(!resolution.is_complete());
    }

    #[test]
    fn resolve_empty_reference_list_is_complete() {
        let targets = accidents(&["A1"]);
        let record = hazard("H1", &[]);

        assert!(resolve(&record, &targets).is_complete());
    }

    #[test]
    fn resolve_against_empty_collection_dangles_everything() {
        let targets = accidents(&[]);
        let record = hazard("H1", &["A1", "A2"]);

        let resolution = resolve(&record, &targets);
        assert!(resolution.resolved.is_empty());
        assert_eq!(resolution.dangling.len(), 2);
    }

    #[test]
    fn resolve_keeps_duplicate_references() {
        let targets = accidents(&["A1"]);
        let record = hazard("H1", &["A1", "A1"]);

        let resolution = resolve(&record, &targets);
        assert_eq!(resolution.resolved, vec!["A1".to_string(), "A1".to_string()]);
    }

    #[test]
    fn resolve_does_not_mutate_inputs() {
        let targets = accidents(&["A1"]);
        let record = hazard("H1", &["A1", "A9"]);
        let before = record.clone();
        let target_len = targets.len();

        let _ = resolve(&record, &targets);

        assert_eq!(record, before);
        assert_eq!(targets.len(), target_len);
    }

    #[test]
    fn references_to_finds_dependents() {
        let mut hazards: Catalog<Hazard> = Catalog::new();
        hazards.add(|id| Hazard {
            id,
            code: "H1".into(),
            description: String::new(),
            linked_accidents: vec!["A1".into(), "A2".into()],
        });
        hazards.add(|id| Hazard {
            id,
            code: "H2".into(),
            description: String::new(),
            linked_accidents: vec!["A2".into()],
        });

        let dependents = references_to("A2", &hazards);
        let codes: Vec<_> = dependents.iter().map(|h| h.code.as_str()).collect();
        assert_eq!(codes, ["H2", "H1"]);

        assert!(references_to("A9", &hazards).is_empty());
    }
}
