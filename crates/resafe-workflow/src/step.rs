//! Workflow steps and the pages that handle them

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A workflow step number in `[1,7]`
///
/// Persisted step values are untrusted; [`StepNumber::from_persisted`]
/// falls back to step 1 rather than rejecting, so navigation always has
/// somewhere to go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StepNumber(u8);

impl StepNumber {
    /// Step 1 - scope definition
    pub const FIRST: Self = Self(1);
    /// Step 7 - model synchronization
    pub const LAST: Self = Self(7);

    /// Construct from an in-range value
    #[must_use]
    pub fn new(step: u8) -> Option<Self> {
        (1..=7).contains(&step).then_some(Self(step))
    }

    /// Construct from a persisted value, clamping out-of-range input to 1
    #[must_use]
    pub fn from_persisted(raw: i64) -> Self {
        u8::try_from(raw)
            .ok()
            .and_then(Self::new)
            .unwrap_or(Self::FIRST)
    }

    /// Numeric value in `[1,7]`
    #[inline]
    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// The following step, if any
    #[must_use]
    pub fn next(self) -> Option<Self> {
        Self::new(self.0 + 1)
    }

    /// Whether this is the final workflow step
    #[inline]
    #[must_use]
    pub fn is_last(self) -> bool {
        self == Self::LAST
    }

    /// Short human label for the step's activity
    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Scope Definition",
            2 => "iStar4Safety Models",
            3 => "Control Structure",
            4 => "Unsafe Control Actions",
            5 => "Controller Constraints",
            6 => "Loss Scenarios & Safety Requirements",
            _ => "Update iStar4Safety Models",
        }
    }

    /// The page responsible for this step
    #[must_use]
    pub fn route(self) -> StepRoute {
        match self.0 {
            1 => StepRoute::Scope,
            2 => StepRoute::IstarModels,
            3 => StepRoute::ControlStructure,
            4 => StepRoute::Ucas,
            5 => StepRoute::ControllerConstraints,
            6 => StepRoute::LossScenarios,
            _ => StepRoute::ModelUpdate,
        }
    }
}

impl Display for StepNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The seven fixed workflow pages plus the home dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepRoute {
    Home,
    Scope,
    IstarModels,
    ControlStructure,
    Ucas,
    ControllerConstraints,
    LossScenarios,
    ModelUpdate,
}

impl StepRoute {
    /// Resolve the page for a raw step value; out-of-range values land on
    /// the home dashboard
    #[must_use]
    pub fn for_step(raw: i64) -> Self {
        match raw {
            1..=7 => StepNumber::from_persisted(raw).route(),
            _ => Self::Home,
        }
    }

    /// Route path as the shell knows it
    #[must_use]
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Scope => "/scope",
            Self::IstarModels => "/istar-models",
            Self::ControlStructure => "/control-structure",
            Self::Ucas => "/ucas",
            Self::ControllerConstraints => "/controller-constraints",
            Self::LossScenarios => "/loss-scenarios",
            Self::ModelUpdate => "/model-update",
        }
    }
}

impl Display for StepRoute {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_rejects_out_of_range() {
        assert!(StepNumber::new(0).is_none());
        assert!(StepNumber::new(8).is_none());
        assert_eq!(StepNumber::new(4).unwrap().get(), 4);
    }

    #[test]
    fn from_persisted_clamps_to_first() {
        assert_eq!(StepNumber::from_persisted(0), StepNumber::FIRST);
        assert_eq!(StepNumber::from_persisted(-3), StepNumber::FIRST);
        assert_eq!(StepNumber::from_persisted(99), StepNumber::FIRST);
        assert_eq!(StepNumber::from_persisted(7), StepNumber::LAST);
    }

    #[test]
    fn next_stops_at_last() {
        assert_eq!(StepNumber::new(6).unwrap().next(), Some(StepNumber::LAST));
        assert_eq!(StepNumber::LAST.next(), None);
    }

    #[test]
    fn each_step_routes_to_its_page() {
        let paths: Vec<_> = (1..=7)
            .map(|n| StepNumber::new(n).unwrap().route().as_path())
            .collect();
        assert_eq!(
            paths,
            [
                "/scope",
                "/istar-models",
                "/control-structure",
                "/ucas",
                "/controller-constraints",
                "/loss-scenarios",
                "/model-update",
            ]
        );
    }

    #[test]
    fn out_of_range_step_routes_home() {
        assert_eq!(StepRoute::for_step(0), StepRoute::Home);
        assert_eq!(StepRoute::for_step(12), StepRoute::Home);
        assert_eq!(StepRoute::for_step(3), StepRoute::ControlStructure);
    }
}
