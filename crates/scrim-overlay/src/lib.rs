#![forbid(unsafe_code)]

//! Overlay interaction state for Scrim.
//!
//! Three cooperating pieces:
//!
//! - [`scroll_lock::ScrollLock`] freezes the page behind an overlay without
//!   visual jump and restores it exactly on release.
//! - [`disclosure::DisclosureGroup`] tracks N independently collapsible
//!   sections, with [`reveal::Reveal`] supplying the animation-safe size
//!   contract for the view layer.
//! - [`overlay::OverlayController`] owns the open/closed state machine and
//!   fuses the scroll lock to it, so the lock can never outlive or lag the
//!   overlay.

pub mod disclosure;
pub mod dismiss;
pub mod overlay;
pub mod reveal;
pub mod scroll_lock;

pub use disclosure::{DisclosureGroup, InvalidSectionError};
pub use dismiss::DismissBindings;
pub use overlay::{DismissTrigger, OverlayController, OverlayEvent, OverlayState};
pub use reveal::{Reveal, RevealPhase};
pub use scroll_lock::ScrollLock;
