#![forbid(unsafe_code)]

//! Disclosure (accordion) section state.
//!
//! A [`DisclosureGroup`] tracks the expanded/collapsed state of N named
//! sections. Sections are independent: this is a multi-open accordion, not
//! a radio group, and toggling one section never changes another. The id
//! set and its order are fixed at construction; insertion order is display
//! order.
//!
//! The group only owns the boolean state and guarantees the transition is
//! synchronous, so a view layer can key animations off the returned state
//! without race conditions. The animated size itself is the
//! [`Reveal`](crate::reveal::Reveal) contract's job.

use std::fmt;

/// A disclosure operation referenced a section id that is not in the group.
///
/// Ids are fixed at construction, so hitting this at runtime is a
/// programmer error; it is surfaced as a `Result` so development and tests
/// fail loudly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidSectionError {
    id: String,
}

impl InvalidSectionError {
    /// The id that failed to resolve.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}

impl fmt::Display for InvalidSectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown disclosure section: {}", self.id)
    }
}

impl std::error::Error for InvalidSectionError {}

#[derive(Debug, Clone)]
struct Section {
    id: String,
    expanded: bool,
}

/// Ordered expanded/collapsed state for a fixed set of named sections.
///
/// # Example
///
/// ```
/// use scrim_overlay::disclosure::DisclosureGroup;
///
/// let mut group = DisclosureGroup::new([("products", true), ("company", false)]);
/// assert_eq!(group.toggle("company"), Ok(true));
/// assert_eq!(group.is_expanded("products"), Ok(true));
/// assert_eq!(group.expanded_ids(), vec!["products", "company"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DisclosureGroup {
    sections: Vec<Section>,
}

impl DisclosureGroup {
    /// Create a group from `(id, initially_expanded)` pairs.
    ///
    /// Order is preserved as display order. A duplicate id keeps the first
    /// occurrence; duplicates are a construction bug and trip a debug
    /// assertion in development builds.
    #[must_use]
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = (S, bool)>,
        S: Into<String>,
    {
        let mut group = Self {
            sections: Vec::new(),
        };
        for (id, expanded) in sections {
            let id = id.into();
            if group.find(&id).is_some() {
                debug_assert!(false, "duplicate disclosure section id: {id}");
                continue;
            }
            group.sections.push(Section { id, expanded });
        }
        group
    }

    /// Create a group with every section collapsed.
    #[must_use]
    pub fn collapsed<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(ids.into_iter().map(|id| (id, false)))
    }

    /// Number of sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// Whether the group has no sections.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// All section ids, in display order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.id.as_str())
    }

    /// Flip the expanded state of one section, leaving every other section
    /// untouched. Returns the new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool, InvalidSectionError> {
        let section = self
            .sections
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| InvalidSectionError { id: id.to_string() })?;
        section.expanded = !section.expanded;
        #[cfg(feature = "tracing")]
        tracing::trace!(id, expanded = section.expanded, "disclosure toggled");
        Ok(section.expanded)
    }

    /// Whether the given section is expanded.
    pub fn is_expanded(&self, id: &str) -> Result<bool, InvalidSectionError> {
        self.find(id)
            .map(|s| s.expanded)
            .ok_or_else(|| InvalidSectionError { id: id.to_string() })
    }

    /// Ids of all currently expanded sections, in display order.
    #[must_use]
    pub fn expanded_ids(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter(|s| s.expanded)
            .map(|s| s.id.as_str())
            .collect()
    }

    fn find(&self, id: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.id == id)
    }
}
