#![forbid(unsafe_code)]

//! Overlay open/close state machine.
//!
//! [`OverlayController`] owns the single open/closed boolean for a
//! dismissible full-screen surface and fuses the scroll lock to it: lock
//! activation is an unconditional side effect of the Closed→Open
//! transition and deactivation of Open→Closed, so the two can never drift
//! apart. All three dismissal triggers (explicit close, dismissal key,
//! backdrop press) converge on the one [`close`](OverlayController::close)
//! path.
//!
//! # Lifecycle Guarantees
//!
//! 1. **Lockstep** — the scroll lock is active if and only if the overlay
//!    is open.
//!
//! 2. **Idempotent transitions** — `open()` while open and `close()` while
//!    closed are no-ops; double-fired dismissal triggers cause no double
//!    deactivation.
//!
//! 3. **Detached listeners** — the dismissal key binding exists only while
//!    open. Closed means detached, not ignored.
//!
//! 4. **Drop is the lifetime ceiling** — tearing the controller down while
//!    open deactivates the lock and discards the bindings, so an abnormal
//!    teardown can never leave the page scroll-locked.

use scrim_core::event::{Event, KeyCode, MouseEventKind};
use scrim_core::geometry::Rect;
use scrim_core::surface::PresentationSurface;

use crate::dismiss::DismissBindings;
use crate::scroll_lock::ScrollLock;

/// The two states of an overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    /// Not shown; the page behind is live.
    #[default]
    Closed,
    /// Shown; the page behind is scroll-locked.
    Open,
}

impl OverlayState {
    /// Whether this is the open state.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }
}

/// Which dismissal trigger closed the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissTrigger {
    /// An explicit close control (e.g. the ✕ button).
    CloseControl,
    /// The document-scope dismissal key.
    DismissKey,
    /// A press on the backdrop outside the panel.
    Backdrop,
}

/// State change reported from event handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayEvent {
    /// The overlay transitioned to open.
    Opened,
    /// The overlay transitioned to closed.
    Dismissed(DismissTrigger),
}

/// Open/close controller for one dismissible overlay surface.
///
/// Owns the [`PresentationSurface`] handle for the page behind it; tests
/// typically pass `&mut HeadlessSurface` (the blanket `&mut` impl) so the
/// surface can be inspected after the controller is gone.
#[derive(Debug)]
pub struct OverlayController<S: PresentationSurface> {
    surface: S,
    lock: ScrollLock,
    state: OverlayState,
    bindings: DismissBindings,
    dismiss_key: KeyCode,
    panel: Option<Rect>,
}

impl<S: PresentationSurface> OverlayController<S> {
    /// Create a closed controller over the given surface.
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            lock: ScrollLock::new(),
            state: OverlayState::Closed,
            bindings: DismissBindings::new(),
            dismiss_key: KeyCode::Escape,
            panel: None,
        }
    }

    /// Set the dismissal key (builder). Defaults to Escape.
    #[must_use]
    pub fn with_dismiss_key(mut self, key: KeyCode) -> Self {
        self.dismiss_key = key;
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Whether the overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// The surface behind the overlay.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the surface, for host-side updates such as
    /// viewport resizes. The lock's snapshot is not affected.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Register the panel area for backdrop hit-testing.
    ///
    /// The view layer calls this whenever it lays the panel out. Without a
    /// registered panel, pointer events never dismiss: a missing layout
    /// must not turn the whole screen into a dismiss target.
    pub fn set_panel(&mut self, panel: Rect) {
        self.panel = Some(panel);
    }

    /// Forget the panel area (pointer dismissal is disabled until the next
    /// [`set_panel`](Self::set_panel)).
    pub fn clear_panel(&mut self) {
        self.panel = None;
    }

    /// Number of attached dismissal bindings (1 while open, 0 while
    /// closed). Exposed for listener-leak assertions.
    #[must_use]
    pub fn dismiss_binding_count(&self) -> usize {
        self.bindings.active_count()
    }

    /// Open the overlay, activating the scroll lock.
    ///
    /// Returns `true` if this call performed the transition, `false` if the
    /// overlay was already open (the lock is not re-activated).
    pub fn open(&mut self) -> bool {
        if self.state.is_open() {
            return false;
        }
        self.state = OverlayState::Open;
        self.lock.activate(&mut self.surface);
        self.bindings.attach(self.dismiss_key);
        #[cfg(feature = "tracing")]
        tracing::debug!("overlay opened");
        true
    }

    /// Close the overlay, deactivating the scroll lock.
    ///
    /// This is the single convergence point for every dismissal trigger.
    /// Returns `true` if this call performed the transition, `false` if the
    /// overlay was already closed.
    pub fn close(&mut self) -> bool {
        if !self.state.is_open() {
            return false;
        }
        self.state = OverlayState::Closed;
        self.lock.deactivate(&mut self.surface);
        self.bindings.detach(self.dismiss_key);
        #[cfg(feature = "tracing")]
        tracing::debug!("overlay closed");
        true
    }

    /// Open if closed, close if open.
    pub fn toggle(&mut self) {
        if self.state.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Handle an input event.
    ///
    /// Routes the dismissal key and backdrop presses to
    /// [`close`](Self::close). Returns the resulting transition, or `None`
    /// if the event did not change state (including every event while
    /// closed — the bindings are detached, so nothing can match).
    pub fn handle_event(&mut self, event: &Event) -> Option<OverlayEvent> {
        match event {
            Event::Key(key) if self.bindings.matches(key) => {
                if self.close() {
                    Some(OverlayEvent::Dismissed(DismissTrigger::DismissKey))
                } else {
                    None
                }
            }
            Event::Mouse(mouse) if self.state.is_open() => match (mouse.kind, self.panel) {
                (MouseEventKind::Down(_), Some(panel))
                    if !panel.contains(mouse.column, mouse.row) =>
                {
                    if self.close() {
                        Some(OverlayEvent::Dismissed(DismissTrigger::Backdrop))
                    } else {
                        None
                    }
                }
                _ => None,
            },
            _ => None,
        }
    }
}

impl<S: PresentationSurface> Drop for OverlayController<S> {
    fn drop(&mut self) {
        if self.state.is_open() {
            self.lock.deactivate(&mut self.surface);
            self.bindings.clear();
            #[cfg(feature = "tracing")]
            tracing::debug!("overlay torn down while open, lock released");
        }
    }
}
