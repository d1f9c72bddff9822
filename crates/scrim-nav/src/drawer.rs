#![forbid(unsafe_code)]

//! The full-screen mobile navigation drawer.
//!
//! [`NavDrawer`] composes the three overlay-core pieces over a list of
//! [`NavSection`] records: an [`OverlayController`] owns the open/closed
//! state and the scroll lock, a [`DisclosureGroup`] owns the per-section
//! expanded booleans, and one [`Reveal`] per section turns those booleans
//! into animation-safe sizes for the view layer.
//!
//! Input routing: the overlay controller sees every event first (dismissal
//! key, backdrop press); while open, the drawer itself handles Up/Down
//! traversal and Enter activation. Activating a section header toggles its
//! disclosure; activating an item notifies analytics, resolves navigation,
//! and closes the drawer through the same `close()` path every dismissal
//! trigger uses.

use std::collections::HashMap;
use std::time::Duration;

use scrim_core::event::{Event, KeyCode, KeyEventKind};
use scrim_core::geometry::Rect;
use scrim_core::surface::PresentationSurface;
use scrim_overlay::disclosure::{DisclosureGroup, InvalidSectionError};
use scrim_overlay::overlay::{DismissTrigger, OverlayController, OverlayEvent};
use scrim_overlay::reveal::Reveal;

use crate::content::NavSection;
use crate::dispatch::{AnalyticsSink, NavigationResolver};

/// Default expand/collapse motion duration.
const DEFAULT_MOTION: Duration = Duration::from_millis(240);

/// State change reported from drawer interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawerEvent {
    /// The drawer opened.
    Opened,
    /// The drawer closed via a dismissal trigger.
    Dismissed(DismissTrigger),
    /// A section header was toggled.
    SectionToggled {
        /// The section's stable id.
        id: String,
        /// Its new state.
        expanded: bool,
    },
    /// An item was selected; the drawer has closed itself.
    Navigated {
        /// The destination path handed to the resolver.
        destination: String,
    },
}

/// A keyboard-traversable row: a section header, or one of its items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Row {
    section: usize,
    item: Option<usize>,
}

/// Full-screen navigation drawer with accordion sections.
#[derive(Debug)]
pub struct NavDrawer<S: PresentationSurface> {
    overlay: OverlayController<S>,
    group: DisclosureGroup,
    reveals: Vec<Reveal>,
    sections: Vec<NavSection>,
    cursor: usize,
}

impl<S: PresentationSurface> NavDrawer<S> {
    /// Create a closed drawer over the given surface and content.
    #[must_use]
    pub fn new(surface: S, sections: Vec<NavSection>) -> Self {
        let group = DisclosureGroup::new(
            sections
                .iter()
                .map(|s| (s.id().to_string(), s.initially_expanded())),
        );
        let reveals = sections
            .iter()
            .map(|s| {
                if s.initially_expanded() {
                    Reveal::expanded(DEFAULT_MOTION)
                } else {
                    Reveal::new(DEFAULT_MOTION)
                }
            })
            .collect();
        Self {
            overlay: OverlayController::new(surface),
            group,
            reveals,
            sections,
            cursor: 0,
        }
    }

    /// Set the dismissal key (builder). Defaults to Escape.
    #[must_use]
    pub fn with_dismiss_key(mut self, key: KeyCode) -> Self {
        self.overlay = self.overlay.with_dismiss_key(key);
        self
    }

    /// The overlay controller (state, bindings, surface).
    #[must_use]
    pub fn overlay(&self) -> &OverlayController<S> {
        &self.overlay
    }

    /// The content records this drawer renders.
    #[must_use]
    pub fn sections(&self) -> &[NavSection] {
        &self.sections
    }

    /// Whether the drawer is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Register the drawer panel area for backdrop hit-testing.
    pub fn set_panel(&mut self, panel: Rect) {
        self.overlay.set_panel(panel);
    }

    /// Open the drawer (activates the scroll lock).
    pub fn open(&mut self) -> Option<DrawerEvent> {
        if self.overlay.open() {
            self.cursor = 0;
            Some(DrawerEvent::Opened)
        } else {
            None
        }
    }

    /// Close the drawer through the explicit close control.
    pub fn close(&mut self) -> Option<DrawerEvent> {
        self.overlay
            .close()
            .then(|| DrawerEvent::Dismissed(DismissTrigger::CloseControl))
    }

    /// Open if closed, close if open.
    pub fn toggle_open(&mut self) -> Option<DrawerEvent> {
        if self.is_open() { self.close() } else { self.open() }
    }

    /// Whether the given section is expanded.
    pub fn is_section_expanded(&self, id: &str) -> Result<bool, InvalidSectionError> {
        self.group.is_expanded(id)
    }

    /// Ids of expanded sections, in display order.
    #[must_use]
    pub fn expanded_sections(&self) -> Vec<&str> {
        self.group.expanded_ids()
    }

    /// Toggle a section and aim its reveal at the new state.
    ///
    /// This is also the entry point for view layers wiring pointer taps on
    /// section headers.
    pub fn toggle_section(&mut self, id: &str) -> Result<bool, InvalidSectionError> {
        let expanded = self.group.toggle(id)?;
        if let Some(idx) = self.sections.iter().position(|s| s.id() == id) {
            self.reveals[idx].set_open(expanded);
        }
        Ok(expanded)
    }

    /// Advance all section motions by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        for reveal in &mut self.reveals {
            reveal.tick(dt);
        }
    }

    /// Fraction of a section's intrinsic size currently on screen.
    #[must_use]
    pub fn section_fraction(&self, id: &str) -> Option<f32> {
        let idx = self.sections.iter().position(|s| s.id() == id)?;
        Some(self.reveals[idx].fraction())
    }

    /// How much of a section's measured content to show right now.
    #[must_use]
    pub fn section_size_hint(&self, id: &str, intrinsic: u16) -> Option<u16> {
        let idx = self.sections.iter().position(|s| s.id() == id)?;
        Some(self.reveals[idx].size_hint(intrinsic))
    }

    /// Handle an input event.
    ///
    /// Dismissal (key or backdrop) is routed through the overlay
    /// controller; while open, Up/Down move the cursor and Enter activates
    /// the row under it.
    pub fn handle_event(
        &mut self,
        event: &Event,
        resolver: &mut dyn NavigationResolver,
        analytics: &mut dyn AnalyticsSink,
    ) -> Option<DrawerEvent> {
        if let Some(OverlayEvent::Dismissed(trigger)) = self.overlay.handle_event(event) {
            return Some(DrawerEvent::Dismissed(trigger));
        }
        if !self.overlay.is_open() {
            return None;
        }

        let Event::Key(key) = event else {
            return None;
        };
        if key.kind != KeyEventKind::Press {
            return None;
        }

        match key.code {
            KeyCode::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                let last = self.visible_rows().len().saturating_sub(1);
                self.cursor = (self.cursor + 1).min(last);
                None
            }
            KeyCode::Enter => self.activate_cursor(resolver, analytics),
            _ => None,
        }
    }

    /// Activate the row under the cursor.
    fn activate_cursor(
        &mut self,
        resolver: &mut dyn NavigationResolver,
        analytics: &mut dyn AnalyticsSink,
    ) -> Option<DrawerEvent> {
        let rows = self.visible_rows();
        let row = *rows.get(self.cursor.min(rows.len().saturating_sub(1)))?;

        match row.item {
            None => {
                let id = self.sections[row.section].id().to_string();
                let expanded = self.toggle_section(&id).ok()?;
                Some(DrawerEvent::SectionToggled { id, expanded })
            }
            Some(item_idx) => {
                let section = &self.sections[row.section];
                let item = &section.items()[item_idx];
                let destination = item.destination().to_string();

                let mut metadata = HashMap::new();
                metadata.insert("section".to_string(), section.id().to_string());
                metadata.insert("label".to_string(), item.label().to_string());
                analytics.notify(&destination, item.event_name(), &metadata);
                resolver.navigate(&destination);
                #[cfg(feature = "tracing")]
                tracing::debug!(destination, "drawer item selected");

                // Same close path as every dismissal trigger.
                self.overlay.close();
                Some(DrawerEvent::Navigated { destination })
            }
        }
    }

    /// The traversable rows given current disclosure state: every section
    /// header, plus the items of expanded sections.
    fn visible_rows(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for (section_idx, section) in self.sections.iter().enumerate() {
            rows.push(Row {
                section: section_idx,
                item: None,
            });
            if self.group.is_expanded(section.id()).unwrap_or(false) {
                for item_idx in 0..section.items().len() {
                    rows.push(Row {
                        section: section_idx,
                        item: Some(item_idx),
                    });
                }
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::NavItem;
    use crate::dispatch::{NullDispatch, RecordingDispatch};
    use scrim_core::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
    use scrim_core::surface::{HeadlessSurface, StyleProperty};

    fn content() -> Vec<NavSection> {
        vec![
            NavSection::new("products", "Products")
                .with_item(NavItem::new("Overview", "/products"))
                .with_item(NavItem::new("Changelog", "/changelog")),
            NavSection::new("company", "Company")
                .with_item(NavItem::new("About", "/about").with_event_name("company.about")),
        ]
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    fn open_drawer(
        surface: &mut HeadlessSurface,
    ) -> NavDrawer<&mut HeadlessSurface> {
        let mut drawer = NavDrawer::new(surface, content());
        assert_eq!(drawer.open(), Some(DrawerEvent::Opened));
        drawer
    }

    #[test]
    fn open_and_close_report_events_once() {
        let mut surface = HeadlessSurface::new(1200, 1185).with_scroll_offset(480);
        let mut drawer = NavDrawer::new(&mut surface, content());

        assert_eq!(drawer.open(), Some(DrawerEvent::Opened));
        assert_eq!(drawer.open(), None);
        assert_eq!(
            drawer.close(),
            Some(DrawerEvent::Dismissed(DismissTrigger::CloseControl))
        );
        assert_eq!(drawer.close(), None);
    }

    #[test]
    fn dismissal_key_routes_through_the_overlay() {
        let mut surface = HeadlessSurface::new(1200, 1185).with_scroll_offset(480);
        let mut drawer = open_drawer(&mut surface);
        let mut nav = NullDispatch;
        let mut analytics = RecordingDispatch::new();

        let event = drawer.handle_event(&key(KeyCode::Escape), &mut nav, &mut analytics);
        assert_eq!(
            event,
            Some(DrawerEvent::Dismissed(DismissTrigger::DismissKey))
        );
        assert!(!drawer.is_open());
        drop(drawer);
        assert_eq!(surface.scroll_offset(), 480);
        assert_eq!(surface.style(StyleProperty::Position), None);
    }

    #[test]
    fn backdrop_press_dismisses() {
        let mut surface = HeadlessSurface::new(1200, 1185);
        let mut drawer = open_drawer(&mut surface);
        drawer.set_panel(Rect::new(40, 0, 60, 50));
        let mut nav = NullDispatch;
        let mut analytics = RecordingDispatch::new();

        let press = Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            5,
            5,
        ));
        let event = drawer.handle_event(&press, &mut nav, &mut analytics);
        assert_eq!(event, Some(DrawerEvent::Dismissed(DismissTrigger::Backdrop)));
    }

    #[test]
    fn enter_on_header_toggles_that_section_only() {
        let mut surface = HeadlessSurface::new(1200, 1185);
        let mut drawer = open_drawer(&mut surface);
        let mut resolver = RecordingDispatch::new();
        let mut analytics = RecordingDispatch::new();

        // Cursor starts on the "products" header.
        let event = drawer.handle_event(&key(KeyCode::Enter), &mut resolver, &mut analytics);
        assert_eq!(
            event,
            Some(DrawerEvent::SectionToggled {
                id: "products".to_string(),
                expanded: true,
            })
        );
        assert_eq!(drawer.is_section_expanded("products"), Ok(true));
        assert_eq!(drawer.is_section_expanded("company"), Ok(false));
        assert!(resolver.navigations.is_empty());
        assert!(analytics.notifications.is_empty());
    }

    #[test]
    fn enter_on_item_navigates_notifies_and_closes() {
        let mut surface = HeadlessSurface::new(1200, 1185).with_scroll_offset(480);
        let mut drawer = open_drawer(&mut surface);
        let mut analytics = RecordingDispatch::new();
        let mut resolver = RecordingDispatch::new();

        drawer.handle_event(&key(KeyCode::Enter), &mut resolver, &mut analytics);
        // Rows now: products header, Overview, Changelog, company header.
        drawer.handle_event(&key(KeyCode::Down), &mut resolver, &mut analytics);
        let event = drawer.handle_event(&key(KeyCode::Enter), &mut resolver, &mut analytics);

        assert_eq!(
            event,
            Some(DrawerEvent::Navigated {
                destination: "/products".to_string(),
            })
        );
        assert_eq!(resolver.navigations, vec!["/products"]);

        let (destination, name, metadata) = &analytics.notifications[0];
        assert_eq!(destination, "/products");
        assert_eq!(name, "nav.select");
        assert_eq!(metadata.get("section").map(String::as_str), Some("products"));
        assert_eq!(metadata.get("label").map(String::as_str), Some("Overview"));

        // Item selection exits through the same close path as dismissal.
        assert!(!drawer.is_open());
        drop(drawer);
        assert_eq!(surface.scroll_offset(), 480);
    }

    #[test]
    fn collapsed_sections_hide_their_items_from_traversal() {
        let mut surface = HeadlessSurface::new(1200, 1185);
        let mut drawer = open_drawer(&mut surface);
        let mut nav = NullDispatch;
        let mut analytics = NullDispatch;

        // Everything collapsed: rows are just the two headers.
        drawer.handle_event(&key(KeyCode::Down), &mut nav, &mut analytics);
        let event = drawer.handle_event(&key(KeyCode::Enter), &mut nav, &mut analytics);
        assert_eq!(
            event,
            Some(DrawerEvent::SectionToggled {
                id: "company".to_string(),
                expanded: true,
            })
        );
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut surface = HeadlessSurface::new(1200, 1185);
        let mut drawer = open_drawer(&mut surface);
        let mut nav = NullDispatch;
        let mut analytics = NullDispatch;

        for _ in 0..10 {
            drawer.handle_event(&key(KeyCode::Up), &mut nav, &mut analytics);
        }
        for _ in 0..10 {
            drawer.handle_event(&key(KeyCode::Down), &mut nav, &mut analytics);
        }
        // Still activates a valid row (the last header).
        let event = drawer.handle_event(&key(KeyCode::Enter), &mut nav, &mut analytics);
        assert!(matches!(event, Some(DrawerEvent::SectionToggled { .. })));
    }

    #[test]
    fn toggle_drives_the_section_reveal() {
        let mut surface = HeadlessSurface::new(1200, 1185);
        let mut drawer = NavDrawer::new(&mut surface, content());

        assert_eq!(drawer.section_fraction("products"), Some(0.0));
        drawer.toggle_section("products").unwrap();
        drawer.tick(Duration::from_millis(120));
        let mid = drawer.section_fraction("products").unwrap();
        assert!(mid > 0.0 && mid < 1.0);

        drawer.tick(Duration::from_secs(1));
        assert_eq!(drawer.section_fraction("products"), Some(1.0));
        assert_eq!(drawer.section_size_hint("products", 320), Some(320));
        // The untouched section never moved.
        assert_eq!(drawer.section_fraction("company"), Some(0.0));
    }

    #[test]
    fn unknown_section_errors() {
        let mut surface = HeadlessSurface::new(1200, 1185);
        let mut drawer = NavDrawer::new(&mut surface, content());
        assert!(drawer.toggle_section("careers").is_err());
        assert_eq!(drawer.section_fraction("careers"), None);
    }

    #[test]
    fn events_while_closed_do_nothing() {
        let mut surface = HeadlessSurface::new(1200, 1185);
        let mut drawer = NavDrawer::new(&mut surface, content());
        let mut resolver = RecordingDispatch::new();
        let mut analytics = RecordingDispatch::new();

        assert_eq!(
            drawer.handle_event(&key(KeyCode::Enter), &mut resolver, &mut analytics),
            None
        );
        assert_eq!(
            drawer.handle_event(&key(KeyCode::Escape), &mut resolver, &mut analytics),
            None
        );
        assert!(resolver.navigations.is_empty());
        assert!(analytics.notifications.is_empty());
        assert_eq!(drawer.overlay().dismiss_binding_count(), 0);
    }
}
