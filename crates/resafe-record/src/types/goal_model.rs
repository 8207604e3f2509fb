//! Step 2 records - goal modeling (actors and goal links)

use crate::record::{CatalogRecord, RecordId};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// Kind of actor in the goal model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ActorKind {
    #[default]
    Controller,
    Sensor,
    Environment,
    Stakeholder,
}

impl ActorKind {
    /// Normalize a free-form kind string, defaulting to `Controller`
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Sensor" => Self::Sensor,
            "Environment" => Self::Environment,
            "Stakeholder" => Self::Stakeholder,
            _ => Self::Controller,
        }
    }
}

impl Display for ActorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Controller => "Controller",
            Self::Sensor => "Sensor",
            Self::Environment => "Environment",
            Self::Stakeholder => "Stakeholder",
        };
        f.write_str(label)
    }
}

/// An actor in the goal model, with its stated responsibilities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: RecordId,
    pub name: String,
    pub kind: ActorKind,
    /// Free-text responsibility statements (not code references)
    pub responsibilities: Vec<String>,
}

impl CatalogRecord for Actor {
    fn id(&self) -> RecordId {
        self.id
    }
}

/// Relationship between an actor and a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GoalLinkKind {
    #[default]
    Achieves,
    DependsOn,
    Obstructs,
    Satisfies,
}

/// A labeled edge from an actor to a goal
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalLink {
    pub id: RecordId,
    pub from_actor: String,
    pub goal: String,
    pub kind: GoalLinkKind,
}

impl CatalogRecord for GoalLink {
    fn id(&self) -> RecordId {
        self.id
    }
}
