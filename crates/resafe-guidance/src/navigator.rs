//! Drill-down navigation over the guidance tree

use crate::content;
use crate::topic::GuidanceTopic;

/// Decorative suffixes stripped from a substep label before key lookup
const DECORATIVE_SUFFIXES: [&str; 2] = ["(Optional)", "(Recommended)"];

/// Resolve a substep label to its topic detail, if it has one
///
/// Key derivation: strip known decorative suffixes; if the cleaned label is
/// not itself a key, fall back to the text before the first colon. Labels
/// that still resolve to nothing are leaf content.
///
/// Known ambiguity, preserved for behavioral parity: a leaf label that
/// legitimately contains a colon will mis-resolve whenever its prefix
/// happens to be a topic key.
#[must_use]
pub fn resolve_drill_key(label: &str) -> Option<&'static GuidanceTopic> {
    let mut cleaned = label.trim();
    for suffix in DECORATIVE_SUFFIXES {
        if let Some(stripped) = cleaned.strip_suffix(suffix) {
            cleaned = stripped.trim_end();
        }
    }

    if let Some(found) = content::topic(cleaned) {
        return Some(found);
    }

    let prefix = cleaned.split(':').next().unwrap_or(cleaned).trim();
    if prefix == cleaned {
        return None;
    }
    content::topic(prefix)
}

/// LIFO navigation over guidance topics
///
/// `current` is the topic detail on screen; the back stack holds the trail
/// of parents. Depth is bounded by how many drills resolve, which the
/// finite authored tree keeps naturally small.
#[derive(Debug, Clone, Default)]
pub struct GuidanceNavigator {
    current: Option<GuidanceTopic>,
    back_stack: Vec<GuidanceTopic>,
}

impl GuidanceNavigator {
    /// Closed navigator
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The topic currently on screen
    #[inline]
    #[must_use]
    pub fn current(&self) -> Option<&GuidanceTopic> {
        self.current.as_ref()
    }

    /// Back-stack depth
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.back_stack.len()
    }

    /// Whether any topic is open
    #[inline]
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Open a topic fresh, clearing any existing trail
    ///
    /// The shown detail is the resolved entry for the topic's own title;
    /// a topic absent from the content map is its own detail (a leaf).
    pub fn open(&mut self, topic: &GuidanceTopic) {
        self.back_stack.clear();
        let resolved = content::topic(&topic.title).cloned().unwrap_or_else(|| topic.clone());
        self.current = Some(resolved);
    }

    /// Open by key, for callers that only hold a title
    pub fn open_key(&mut self, key: &str) {
        let topic = content::topic(key)
            .cloned()
            .unwrap_or_else(|| GuidanceTopic::leaf(key, ""));
        self.back_stack.clear();
        self.current = Some(topic);
    }

    /// Drill into a substep label
    ///
    /// When the label resolves to a topic detail, the current topic is
    /// pushed onto the back stack and replaced. Unresolved labels are leaf
    /// content and the call is a no-op. Returns whether a drill happened.
    pub fn drill_into(&mut self, label: &str) -> bool {
        let Some(detail) = resolve_drill_key(label) else {
            return false;
        };
        if let Some(previous) = self.current.replace(detail.clone()) {
            self.back_stack.push(previous);
        }
        true
    }

    /// Step back one level; closes the view when the trail is exhausted
    ///
    /// Returns the newly current topic, or `None` once closed.
    pub fn back(&mut self) -> Option<&GuidanceTopic> {
        match self.back_stack.pop() {
            Some(previous) => {
                self.current = Some(previous);
                self.current.as_ref()
            }
            None => {
                self.current = None;
                None
            }
        }
    }

    /// Close everything at once (backdrop dismiss), bypassing the stack
    pub fn close_all(&mut self) {
        self.back_stack.clear();
        self.current = None;
    }
}
