#![forbid(unsafe_code)]

//! Navigation chrome built on the Scrim overlay core.
//!
//! [`content`] holds the static records a site hands the chrome (sections,
//! items, destinations). [`dispatch`] defines the injected collaborator
//! seams (routing, analytics). [`navbar::NavBar`] is the always-visible
//! bar; [`drawer::NavDrawer`] is the full-screen mobile drawer composing
//! the overlay controller, disclosure group, and per-section reveals.

pub mod content;
pub mod dispatch;
pub mod drawer;
pub mod navbar;

pub use content::{NavItem, NavSection};
pub use dispatch::{AnalyticsSink, NavigationResolver, NullDispatch};
pub use drawer::{DrawerEvent, NavDrawer};
pub use navbar::NavBar;
