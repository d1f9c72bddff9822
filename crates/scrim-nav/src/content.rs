#![forbid(unsafe_code)]

//! Static navigation content records.
//!
//! The chrome treats content as opaque, immutable data supplied at
//! construction: a list of sections, each with a display label and child
//! items. Section ids are stable and unique; they are what the disclosure
//! state is keyed on.

/// A single navigable entry inside a section (or directly in the nav bar).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    label: String,
    destination: String,
    event_name: Option<String>,
}

impl NavItem {
    /// Create an item with a display label and destination path.
    #[must_use]
    pub fn new(label: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            destination: destination.into(),
            event_name: None,
        }
    }

    /// Set the analytics event name fired on selection (builder).
    #[must_use]
    pub fn with_event_name(mut self, name: impl Into<String>) -> Self {
        self.event_name = Some(name.into());
        self
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Destination path.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Analytics event name, falling back to the chrome-wide default.
    #[must_use]
    pub fn event_name(&self) -> &str {
        self.event_name.as_deref().unwrap_or("nav.select")
    }
}

/// A named, collapsible group of items in the drawer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSection {
    id: String,
    label: String,
    initially_expanded: bool,
    items: Vec<NavItem>,
}

impl NavSection {
    /// Create a section with a stable id and display label.
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            initially_expanded: false,
            items: Vec::new(),
        }
    }

    /// Add one item (builder).
    #[must_use]
    pub fn with_item(mut self, item: NavItem) -> Self {
        self.items.push(item);
        self
    }

    /// Set all items (builder).
    #[must_use]
    pub fn with_items(mut self, items: Vec<NavItem>) -> Self {
        self.items = items;
        self
    }

    /// Start this section expanded (builder).
    #[must_use]
    pub fn expanded(mut self) -> Self {
        self.initially_expanded = true;
        self
    }

    /// Stable section id.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether the section starts expanded.
    #[must_use]
    pub fn initially_expanded(&self) -> bool {
        self.initially_expanded
    }

    /// Child items.
    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }
}
