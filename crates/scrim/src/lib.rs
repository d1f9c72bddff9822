#![forbid(unsafe_code)]

//! Scrim public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use scrim_core::animation::{EasingFn, Fade, ease_in, ease_in_out, ease_out, linear};
pub use scrim_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use scrim_core::geometry::Rect;
pub use scrim_core::surface::{NullSurface, PresentationSurface, StyleProperty};

// --- Overlay re-exports ----------------------------------------------------

pub use scrim_overlay::disclosure::{DisclosureGroup, InvalidSectionError};
pub use scrim_overlay::dismiss::DismissBindings;
pub use scrim_overlay::overlay::{DismissTrigger, OverlayController, OverlayEvent, OverlayState};
pub use scrim_overlay::reveal::{Reveal, RevealPhase};
pub use scrim_overlay::scroll_lock::ScrollLock;

// --- Nav re-exports --------------------------------------------------------

#[cfg(feature = "nav")]
pub use scrim_nav::{
    AnalyticsSink, DrawerEvent, NavBar, NavDrawer, NavItem, NavSection, NavigationResolver,
    NullDispatch,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for Scrim hosts.
#[derive(Debug)]
pub enum Error {
    /// A disclosure operation referenced an unknown section.
    InvalidSection(InvalidSectionError),
    /// Host integration error with message.
    Host(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSection(err) => write!(f, "{err}"),
            Self::Host(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<InvalidSectionError> for Error {
    fn from(err: InvalidSectionError) -> Self {
        Self::InvalidSection(err)
    }
}

/// Standard result type for Scrim APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        DisclosureGroup, DismissTrigger, Error, Event, KeyCode, KeyEvent, OverlayController,
        OverlayEvent, OverlayState, PresentationSurface, Rect, Result, Reveal, ScrollLock,
        StyleProperty,
    };

    #[cfg(feature = "nav")]
    pub use crate::{DrawerEvent, NavBar, NavDrawer, NavItem, NavSection};

    pub use crate::{core, overlay};
    #[cfg(feature = "nav")]
    pub use crate::nav;
}

pub use scrim_core as core;
#[cfg(feature = "nav")]
pub use scrim_nav as nav;
pub use scrim_overlay as overlay;
