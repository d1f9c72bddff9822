#![forbid(unsafe_code)]

//! The always-visible navigation bar.
//!
//! Thin by design: it holds the desktop item records and the
//! call-to-action, and reports selections through the injected seams. The
//! drawer it summons on small viewports is a separate
//! [`NavDrawer`](crate::drawer::NavDrawer) the host composes next to it.

use std::collections::HashMap;

use crate::content::NavItem;
use crate::dispatch::{AnalyticsSink, NavigationResolver};

/// Top-of-page navigation bar model.
#[derive(Debug, Clone, Default)]
pub struct NavBar {
    items: Vec<NavItem>,
    cta: Option<NavItem>,
}

impl NavBar {
    /// Create an empty bar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a desktop item (builder).
    #[must_use]
    pub fn with_item(mut self, item: NavItem) -> Self {
        self.items.push(item);
        self
    }

    /// Set the call-to-action (builder).
    #[must_use]
    pub fn with_cta(mut self, item: NavItem) -> Self {
        self.cta = Some(item);
        self
    }

    /// Desktop items, in display order.
    #[must_use]
    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// The call-to-action, if configured.
    #[must_use]
    pub fn cta(&self) -> Option<&NavItem> {
        self.cta.as_ref()
    }

    /// Activate a desktop item by index. Returns the destination navigated
    /// to, or `None` for an out-of-range index.
    pub fn activate_item(
        &self,
        index: usize,
        resolver: &mut dyn NavigationResolver,
        analytics: &mut dyn AnalyticsSink,
    ) -> Option<&str> {
        let item = self.items.get(index)?;
        Some(Self::dispatch(item, "nav_bar", resolver, analytics))
    }

    /// Activate the call-to-action.
    pub fn activate_cta(
        &self,
        resolver: &mut dyn NavigationResolver,
        analytics: &mut dyn AnalyticsSink,
    ) -> Option<&str> {
        let item = self.cta.as_ref()?;
        Some(Self::dispatch(item, "nav_bar_cta", resolver, analytics))
    }

    fn dispatch<'a>(
        item: &'a NavItem,
        source: &str,
        resolver: &mut dyn NavigationResolver,
        analytics: &mut dyn AnalyticsSink,
    ) -> &'a str {
        let mut metadata = HashMap::new();
        metadata.insert("source".to_string(), source.to_string());
        metadata.insert("label".to_string(), item.label().to_string());
        analytics.notify(item.destination(), item.event_name(), &metadata);
        resolver.navigate(item.destination());
        item.destination()
    }
}
