#![forbid(unsafe_code)]

//! Core types for Scrim: canonical input events, geometry, animation
//! primitives, and the presentation-surface capability that overlay
//! components mutate through.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod logging;
pub mod surface;
