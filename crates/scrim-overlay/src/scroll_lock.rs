#![forbid(unsafe_code)]

//! Scroll lock for the page behind an overlay.
//!
//! Locking a page without breaking it has three failure modes: the page
//! jumps to the top (fixed positioning discards the scroll offset), content
//! shifts horizontally (the scrollbar leaves layout), and releasing the lock
//! loses where the user was. [`ScrollLock`] avoids all three by capturing
//! the scroll offset and the prior value of every property it is about to
//! mutate, offsetting the fixed root by the negative scroll position, and
//! compensating for the scrollbar gutter with right padding.
//!
//! # Lifecycle Guarantees
//!
//! 1. **All mutated state is tracked** — each style property is captured
//!    immediately before it is first written.
//!
//! 2. **Deactivation restores previous state** — captured properties are
//!    restored in reverse order, including properties that were previously
//!    unset, then the scroll offset is restored.
//!
//! 3. **At most one snapshot** — activating an already-active lock is a
//!    no-op. The original snapshot is never overwritten, so nested or
//!    double-fired activations cannot corrupt the restore path.
//!
//! 4. **Headless safety** — on a surface with no scrollable root, both
//!    operations are safe no-ops.

use scrim_core::surface::{PresentationSurface, StyleProperty};

/// Saved pre-lock state, held exactly while the lock is active.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScrollSnapshot {
    /// Vertical scroll offset at activation time.
    scroll_offset: i32,
    /// Prior value of each mutated property, in application order.
    saved: Vec<(StyleProperty, Option<String>)>,
}

/// Freezes and restores the scroll state of a presentation surface.
///
/// The snapshot field doubles as the active flag: a snapshot exists if and
/// only if the lock is active.
///
/// # Example
///
/// ```
/// use scrim_core::surface::NullSurface;
/// use scrim_overlay::scroll_lock::ScrollLock;
///
/// let mut surface = NullSurface;
/// let mut lock = ScrollLock::new();
/// lock.activate(&mut surface);
/// lock.deactivate(&mut surface);
/// assert!(!lock.is_active());
/// ```
#[derive(Debug, Default)]
pub struct ScrollLock {
    snapshot: Option<ScrollSnapshot>,
}

impl ScrollLock {
    /// Create an inactive lock.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the lock currently holds a snapshot.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Freeze the surface, capturing state for later restoration.
    ///
    /// No-op if already active (the original snapshot is kept) or if the
    /// surface has no scrollable root.
    pub fn activate(&mut self, surface: &mut impl PresentationSurface) {
        if self.snapshot.is_some() {
            #[cfg(feature = "tracing")]
            tracing::debug!("scroll lock already active, keeping original snapshot");
            return;
        }
        if !surface.has_scroll_root() {
            return;
        }

        let scroll_offset = surface.scroll_offset();
        let gutter = surface.viewport_width().saturating_sub(surface.content_width());
        let top = format!("{}px", -i64::from(scroll_offset));

        let mut saved = Vec::with_capacity(StyleProperty::ALL.len());
        let writes = [
            (StyleProperty::Overflow, Some("hidden".to_string())),
            (StyleProperty::Position, Some("fixed".to_string())),
            (StyleProperty::Top, Some(top)),
            (StyleProperty::Width, Some("100%".to_string())),
            (
                StyleProperty::PaddingRight,
                (gutter > 0).then(|| format!("{gutter}px")),
            ),
        ];
        for (prop, value) in writes {
            if let Some(value) = value {
                saved.push((prop, surface.style(prop)));
                surface.set_style(prop, Some(&value));
            }
        }

        self.snapshot = Some(ScrollSnapshot {
            scroll_offset,
            saved,
        });
        #[cfg(feature = "tracing")]
        tracing::debug!(scroll_offset, gutter, "scroll lock activated");
    }

    /// Restore the surface to its pre-activation state.
    ///
    /// Restores every captured property (including removing properties that
    /// were previously unset) in reverse capture order, then restores the
    /// scroll offset. No-op when not active.
    pub fn deactivate(&mut self, surface: &mut impl PresentationSurface) {
        let Some(snapshot) = self.snapshot.take() else {
            return;
        };
        for (prop, prior) in snapshot.saved.into_iter().rev() {
            surface.set_style(prop, prior.as_deref());
        }
        surface.set_scroll_offset(snapshot.scroll_offset);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            scroll_offset = snapshot.scroll_offset,
            "scroll lock deactivated"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrim_core::surface::{HeadlessSurface, NullSurface, SurfaceOp};

    fn worked_example_surface() -> HeadlessSurface {
        // 1200px viewport with a 15px scrollbar, scrolled to 480px.
        HeadlessSurface::new(1200, 1185).with_scroll_offset(480)
    }

    #[test]
    fn activate_applies_fixed_layout_at_negative_offset() {
        let mut surface = worked_example_surface();
        let mut lock = ScrollLock::new();

        lock.activate(&mut surface);

        assert!(lock.is_active());
        assert_eq!(surface.style(StyleProperty::Overflow).as_deref(), Some("hidden"));
        assert_eq!(surface.style(StyleProperty::Position).as_deref(), Some("fixed"));
        assert_eq!(surface.style(StyleProperty::Top).as_deref(), Some("-480px"));
        assert_eq!(surface.style(StyleProperty::Width).as_deref(), Some("100%"));
        assert_eq!(
            surface.style(StyleProperty::PaddingRight).as_deref(),
            Some("15px")
        );
    }

    #[test]
    fn deactivate_round_trips_the_worked_example() {
        let mut surface = worked_example_surface();
        let mut lock = ScrollLock::new();

        lock.activate(&mut surface);
        lock.deactivate(&mut surface);

        assert!(!lock.is_active());
        assert_eq!(surface.scroll_offset(), 480);
        for prop in StyleProperty::ALL {
            assert_eq!(surface.style(prop), None, "{} should be unset", prop.as_str());
        }
    }

    #[test]
    fn restoration_is_property_by_property_exact() {
        let mut surface = HeadlessSurface::new(1024, 1009)
            .with_scroll_offset(33)
            .with_style(StyleProperty::Width, "960px")
            .with_style(StyleProperty::Overflow, "auto");
        let mut lock = ScrollLock::new();

        lock.activate(&mut surface);
        lock.deactivate(&mut surface);

        assert_eq!(surface.style(StyleProperty::Width).as_deref(), Some("960px"));
        assert_eq!(surface.style(StyleProperty::Overflow).as_deref(), Some("auto"));
        assert_eq!(surface.style(StyleProperty::Position), None);
        assert_eq!(surface.style(StyleProperty::Top), None);
        assert_eq!(surface.style(StyleProperty::PaddingRight), None);
    }

    #[test]
    fn reactivation_keeps_the_original_snapshot() {
        let mut surface = worked_example_surface();
        let mut lock = ScrollLock::new();

        lock.activate(&mut surface);
        let ops_after_first = surface.ops().len();

        lock.activate(&mut surface);
        assert_eq!(
            surface.ops().len(),
            ops_after_first,
            "second activate must not touch the surface"
        );

        lock.deactivate(&mut surface);
        assert_eq!(surface.scroll_offset(), 480);
        assert_eq!(surface.style(StyleProperty::Position), None);
    }

    #[test]
    fn deactivate_when_inactive_is_a_noop() {
        let mut surface = worked_example_surface();
        let mut lock = ScrollLock::new();

        lock.deactivate(&mut surface);
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn no_gutter_means_no_padding_compensation() {
        let mut surface = HeadlessSurface::new(390, 390).with_scroll_offset(100);
        let mut lock = ScrollLock::new();

        lock.activate(&mut surface);
        assert_eq!(surface.style(StyleProperty::PaddingRight), None);

        lock.deactivate(&mut surface);
        assert!(
            !surface
                .ops()
                .iter()
                .any(|op| matches!(op, SurfaceOp::SetStyle(StyleProperty::PaddingRight, _))),
            "padding-right must never be written when there is no gutter"
        );
    }

    #[test]
    fn zero_offset_pins_top_at_zero() {
        let mut surface = HeadlessSurface::new(800, 800);
        let mut lock = ScrollLock::new();

        lock.activate(&mut surface);
        assert_eq!(surface.style(StyleProperty::Top).as_deref(), Some("0px"));
    }

    #[test]
    fn surface_without_scroll_root_degrades_to_noop() {
        let mut surface = NullSurface;
        let mut lock = ScrollLock::new();

        lock.activate(&mut surface);
        assert!(!lock.is_active());

        lock.deactivate(&mut surface);
        assert!(!lock.is_active());
    }

    #[test]
    fn deactivate_restores_scroll_exactly_once() {
        let mut surface = worked_example_surface();
        let mut lock = ScrollLock::new();

        lock.activate(&mut surface);
        lock.deactivate(&mut surface);
        lock.deactivate(&mut surface);

        assert_eq!(surface.scroll_op_count(), 1);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn scroll_offset_round_trips(
                offset in -100_000i32..1_000_000,
                viewport in 1u32..4_000,
                gutter in 0u32..64,
            ) {
                let mut surface =
                    HeadlessSurface::new(viewport, viewport.saturating_sub(gutter))
                        .with_scroll_offset(offset);
                let mut lock = ScrollLock::new();

                lock.activate(&mut surface);
                lock.deactivate(&mut surface);

                prop_assert_eq!(surface.scroll_offset(), offset);
            }

            #[test]
            fn preexisting_styles_survive_a_lock_cycle(
                width in "[0-9]{1,4}px",
                top in "-?[0-9]{1,4}px",
            ) {
                let mut surface = HeadlessSurface::new(1280, 1265)
                    .with_style(StyleProperty::Width, width.clone())
                    .with_style(StyleProperty::Top, top.clone());
                let mut lock = ScrollLock::new();

                lock.activate(&mut surface);
                lock.deactivate(&mut surface);

                prop_assert_eq!(surface.style(StyleProperty::Width), Some(width));
                prop_assert_eq!(surface.style(StyleProperty::Top), Some(top));
            }
        }
    }
}
