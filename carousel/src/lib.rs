//! A headless auto-centering engine for scrollable carousels.
//!
//! For host bindings (item enumeration, click-to-center), see the `carousel-adapter` crate.
//!
//! This crate focuses on the centering math: a per-item table of container offsets that put each
//! child at the viewport center, a nearest-offset search, and frame-driven smoothing of the
//! container offset and of per-child emphasis scales.
//!
//! It is UI-agnostic. A GUI layer is expected to provide:
//! - the container layout (grid, horizontal or vertical) and viewport size
//! - child sizes
//! - the container offset, drag notifications and a per-frame delta time
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod engine;
mod error;
mod options;
mod position;
mod smoothing;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use engine::{CenteringEngine, SETTLE_EPSILON};
pub use error::{CenterError, Result};
pub use options::{CenteringOptions, DEFAULT_CENTER_SCALE, DEFAULT_CENTER_SPEED};
pub use position::PositionTable;
pub use smoothing::{Smoothing, lerp};
pub use state::CenterState;
pub use types::{Axis, Layout, LayoutMode, Nearest, Phase, Scale3, Size, Vec2};
