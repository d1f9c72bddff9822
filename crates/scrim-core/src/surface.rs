#![forbid(unsafe_code)]

//! The presentation-surface capability.
//!
//! Overlay components never touch global page state directly. They mutate it
//! through [`PresentationSurface`], an injected capability over the host's
//! scrollable root: scroll offset get/set, viewport vs. content width (for
//! scrollbar-gutter compensation), and get/set of a bounded set of root
//! style properties.
//!
//! This keeps the controllers testable without a rendering environment, and
//! it is what makes the at-most-one-snapshot invariant enforceable: the lock
//! object owns the captured state, not the call site.
//!
//! # Hosts
//!
//! - A browser host maps this onto the document root element.
//! - A terminal host maps it onto its own viewport model.
//! - [`NullSurface`] is the headless degradation: it reports no scrollable
//!   root, so lock operations become safe no-ops.

/// The bounded set of root style properties a scroll lock may mutate.
///
/// Restoration is property-by-property, so the set is closed by design:
/// anything not listed here is never touched and never needs restoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StyleProperty {
    /// Root overflow behavior.
    Overflow,
    /// Root positioning scheme.
    Position,
    /// Root top offset.
    Top,
    /// Root width.
    Width,
    /// Root right padding (scrollbar-gutter compensation).
    PaddingRight,
}

impl StyleProperty {
    /// All properties, in the order a lock applies them.
    pub const ALL: [Self; 5] = [
        Self::Overflow,
        Self::Position,
        Self::Top,
        Self::Width,
        Self::PaddingRight,
    ];

    /// The canonical property name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overflow => "overflow",
            Self::Position => "position",
            Self::Top => "top",
            Self::Width => "width",
            Self::PaddingRight => "padding-right",
        }
    }
}

/// Injected capability over the host's scrollable root.
///
/// # Contract
///
/// - `set_style(prop, None)` removes the property entirely; a subsequent
///   `style(prop)` returns `None`. This is what makes "restore to unset"
///   expressible.
/// - `viewport_width() - content_width()` is the scrollbar gutter; hosts
///   without a layout-occupying scrollbar report equal widths.
/// - When `has_scroll_root` returns `false`, all other methods must be safe
///   to call and free of side effects.
pub trait PresentationSurface {
    /// Whether the host has a scrollable root at all.
    ///
    /// Headless and server-rendered contexts return `false`; lock
    /// operations then degrade to no-ops.
    fn has_scroll_root(&self) -> bool {
        true
    }

    /// Current vertical scroll offset in pixels.
    fn scroll_offset(&self) -> i32;

    /// Programmatically set the vertical scroll offset.
    fn set_scroll_offset(&mut self, offset: i32);

    /// Current viewport width in pixels.
    fn viewport_width(&self) -> u32;

    /// Current content width in pixels (viewport minus scrollbar gutter).
    fn content_width(&self) -> u32;

    /// Current value of a root style property, `None` if unset.
    fn style(&self, prop: StyleProperty) -> Option<String>;

    /// Set a root style property, or remove it with `None`.
    fn set_style(&mut self, prop: StyleProperty, value: Option<&str>);
}

impl<T: PresentationSurface + ?Sized> PresentationSurface for &mut T {
    fn has_scroll_root(&self) -> bool {
        (**self).has_scroll_root()
    }

    fn scroll_offset(&self) -> i32 {
        (**self).scroll_offset()
    }

    fn set_scroll_offset(&mut self, offset: i32) {
        (**self).set_scroll_offset(offset);
    }

    fn viewport_width(&self) -> u32 {
        (**self).viewport_width()
    }

    fn content_width(&self) -> u32 {
        (**self).content_width()
    }

    fn style(&self, prop: StyleProperty) -> Option<String> {
        (**self).style(prop)
    }

    fn set_style(&mut self, prop: StyleProperty, value: Option<&str>) {
        (**self).set_style(prop, value);
    }
}

/// A surface with no scrollable root.
///
/// Every operation is a no-op; queries return zeros and `None`. Use this in
/// headless or server-rendered contexts where the overlay logic still runs
/// but there is nothing to lock.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl PresentationSurface for NullSurface {
    fn has_scroll_root(&self) -> bool {
        false
    }

    fn scroll_offset(&self) -> i32 {
        0
    }

    fn set_scroll_offset(&mut self, _offset: i32) {}

    fn viewport_width(&self) -> u32 {
        0
    }

    fn content_width(&self) -> u32 {
        0
    }

    fn style(&self, _prop: StyleProperty) -> Option<String> {
        None
    }

    fn set_style(&mut self, _prop: StyleProperty, _value: Option<&str>) {}
}

#[cfg(any(test, feature = "test-helpers"))]
pub use headless::{HeadlessSurface, SurfaceOp};

#[cfg(any(test, feature = "test-helpers"))]
mod headless {
    use super::{PresentationSurface, StyleProperty};
    use std::collections::BTreeMap;

    /// A recorded side effect on a [`HeadlessSurface`].
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub enum SurfaceOp {
        /// A style property was set or removed.
        SetStyle(StyleProperty, Option<String>),
        /// The scroll offset was set.
        SetScroll(i32),
    }

    /// An in-memory surface for tests.
    ///
    /// Behaves like a real scrollable root (styles persist, scroll offset
    /// persists) and records every mutation so tests can assert side effects
    /// happened exactly once — not just that the end state looks right.
    #[derive(Debug, Clone, Default)]
    pub struct HeadlessSurface {
        scroll_offset: i32,
        viewport_width: u32,
        content_width: u32,
        styles: BTreeMap<StyleProperty, String>,
        ops: Vec<SurfaceOp>,
    }

    impl HeadlessSurface {
        /// Create a surface with the given viewport and content widths.
        #[must_use]
        pub fn new(viewport_width: u32, content_width: u32) -> Self {
            Self {
                viewport_width,
                content_width,
                ..Self::default()
            }
        }

        /// Set the initial scroll offset (builder).
        #[must_use]
        pub fn with_scroll_offset(mut self, offset: i32) -> Self {
            self.scroll_offset = offset;
            self
        }

        /// Pre-set a style property (builder), as if the page already
        /// carried it before any lock ran.
        #[must_use]
        pub fn with_style(mut self, prop: StyleProperty, value: impl Into<String>) -> Self {
            self.styles.insert(prop, value.into());
            self
        }

        /// The recorded mutations, in order.
        #[must_use]
        pub fn ops(&self) -> &[SurfaceOp] {
            &self.ops
        }

        /// Forget recorded mutations (state is kept).
        pub fn clear_ops(&mut self) {
            self.ops.clear();
        }

        /// Number of recorded scroll mutations.
        #[must_use]
        pub fn scroll_op_count(&self) -> usize {
            self.ops
                .iter()
                .filter(|op| matches!(op, SurfaceOp::SetScroll(_)))
                .count()
        }

        /// Snapshot of all currently-set style properties.
        #[must_use]
        pub fn styles(&self) -> &BTreeMap<StyleProperty, String> {
            &self.styles
        }
    }

    impl PresentationSurface for HeadlessSurface {
        fn scroll_offset(&self) -> i32 {
            self.scroll_offset
        }

        fn set_scroll_offset(&mut self, offset: i32) {
            self.scroll_offset = offset;
            self.ops.push(SurfaceOp::SetScroll(offset));
        }

        fn viewport_width(&self) -> u32 {
            self.viewport_width
        }

        fn content_width(&self) -> u32 {
            self.content_width
        }

        fn style(&self, prop: StyleProperty) -> Option<String> {
            self.styles.get(&prop).cloned()
        }

        fn set_style(&mut self, prop: StyleProperty, value: Option<&str>) {
            match value {
                Some(v) => {
                    self.styles.insert(prop, v.to_string());
                }
                None => {
                    self.styles.remove(&prop);
                }
            }
            self.ops
                .push(SurfaceOp::SetStyle(prop, value.map(str::to_string)));
        }
    }
}
