//! Host adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the centering math and state. This crate
//! provides the framework-neutral glue a UI binding needs:
//!
//! - Host traits for the scroll container and its children
//! - A view that keeps a host container and a `CenteringEngine` in sync each frame
//! - A controller that enumerates items, binds click-to-center and applies emphasis scales
//!
//! This crate is intentionally framework-agnostic (no egui/bevy bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod host;
mod item;
mod view;


pub use controller::Controller;
pub use host::{ClickHandler, Clickable, Container, Displayable, Node};
pub use item::Item;
pub use view::{CenterView, SharedEngine, request_center_shared};
