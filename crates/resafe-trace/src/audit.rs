//! Whole-project traceability audit
//!
//! Sweeps the fixed reference shapes of the method and reports every gap as
//! a [`TraceWarning`]. Warnings are advisory: the audit never blocks a save
//! and never touches the records it inspects.

use crate::resolver::resolve_codes;
use resafe_catalog::ProjectCatalogs;
use resafe_record::{CatalogRecord, CodedRecord, LinkedRecord};
use std::fmt::{self, Display, Formatter};

/// The reference shapes the method defines between collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TraceLink {
    /// Hazard → accident codes
    HazardToAccident,
    /// Safety constraint → hazard codes
    ConstraintToHazard,
    /// Responsibility → safety-constraint codes
    ResponsibilityToConstraint,
    /// Controller constraint → UCA codes
    ControllerConstraintToUca,
    /// Safety requirement → loss-scenario record id
    RequirementToScenario,
}

impl TraceLink {
    /// Name of the collection the reference points into
    #[must_use]
    pub fn target_name(self) -> &'static str {
        match self {
            Self::HazardToAccident => "accident",
            Self::ConstraintToHazard => "hazard",
            Self::ResponsibilityToConstraint => "safety constraint",
            Self::ControllerConstraintToUca => "unsafe control action",
            Self::RequirementToScenario => "loss scenario",
        }
    }
}

/// One reported traceability gap
///
/// Carries enough structure to render "H3 traces to no accident yet"
/// without re-querying the catalogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceWarning {
    /// Which reference shape is broken
    pub link: TraceLink,
    /// Human-facing label of the referencing record (code when it has one,
    /// `#id` otherwise)
    pub source: String,
    /// The referenced codes (or ids) with no matching record
    pub missing: Vec<String>,
}

impl Display for TraceWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} references unknown {}(s): {}",
            self.source,
            self.link.target_name(),
            self.missing.join(", ")
        )
    }
}

/// Audit every fixed reference shape of the project
///
/// Returns one warning per record with at least one dangling reference,
/// in catalog display order per shape. An empty result means full
/// traceability.
#[must_use]
pub fn audit(catalogs: &ProjectCatalogs) -> Vec<TraceWarning> {
    let mut warnings = Vec::new();

    check_links(
        TraceLink::HazardToAccident,
        catalogs.hazards.iter(),
        &catalogs.accidents,
        coded_label,
        &mut warnings,
    );
    check_links(
        TraceLink::ConstraintToHazard,
        catalogs.safety_constraints.iter(),
        &catalogs.hazards,
        coded_label,
        &mut warnings,
    );
    check_links(
        TraceLink::ResponsibilityToConstraint,
        catalogs.responsibilities.iter(),
        &catalogs.safety_constraints,
        id_label,
        &mut warnings,
    );
    check_links(
        TraceLink::ControllerConstraintToUca,
        catalogs.controller_constraints.iter(),
        &catalogs.ucas,
        id_label,
        &mut warnings,
    );

    // Requirements link to scenarios by record id, not code.
    for requirement in &catalogs.safety_requirements {
        if !catalogs.loss_scenarios.contains_id(requirement.linked_scenario) {
            warnings.push(TraceWarning {
                link: TraceLink::RequirementToScenario,
                source: coded_label(requirement),
                missing: vec![format!("#{}", requirement.linked_scenario)],
            });
        }
    }

    warnings
}

fn check_links<'a, R, T>(
    link: TraceLink,
    sources: impl Iterator<Item = &'a R>,
    targets: &resafe_catalog::Catalog<T>,
    label: impl Fn(&R) -> String,
    warnings: &mut Vec<TraceWarning>,
) where
    R: CatalogRecord + LinkedRecord + 'a,
    T: CodedRecord,
{
    for record in sources {
        let resolution = resolve_codes(record.linked_codes(), targets);
        if !resolution.is_complete() {
            warnings.push(TraceWarning {
                link,
                source: label(record),
                missing: resolution.dangling,
            });
        }
    }
}

fn coded_label<R: CodedRecord>(record: &R) -> String {
    match record.code() {
        Some(code) => code.to_string(),
        None => id_label(record),
    }
}

fn id_label<R: CatalogRecord>(record: &R) -> String {
    format!("#{}", record.id())
}
