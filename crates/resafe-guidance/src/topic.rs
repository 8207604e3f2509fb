//! Guidance topic node

/// One node of the guidance tree
///
/// A substep entry is a display string that may encode a
/// `"Label: description"` pair; when the entry (or its label) is itself a
/// key in the topic map, drilling into it opens that topic's own detail.
/// Entries that resolve to nothing are leaf content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuidanceTopic {
    /// Title; doubles as the topic's key in the content map
    pub title: String,
    pub description: String,
    /// Ordered labeled sub-items
    pub substeps: Vec<String>,
}

impl GuidanceTopic {
    /// Build a topic node
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        substeps: Vec<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            substeps,
        }
    }

    /// A leaf topic that is its own detail (no substeps)
    #[must_use]
    pub fn leaf(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(title, description, Vec::new())
    }
}
