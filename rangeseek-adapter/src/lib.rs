//! Adapter utilities for the `rangeseek` crate.
//!
//! The `rangeseek` crate is UI-agnostic and works on a single track axis. This crate provides
//! small, framework-neutral helpers commonly needed by adapters:
//!
//! - Measuring the view against the host's size constraints
//! - Projecting 2-D pointer events onto the track axis (horizontal or vertical)
//! - Render geometry: track, filled range and thumb rectangles
//!
//! This crate is intentionally framework-agnostic (no ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod geometry;
mod measure;


pub use controller::{AdapterOptions, Controller, PointerEvent};
pub use geometry::{Geometry, Padding, RectF, Size, ThumbGeometry, ThumbSize, ViewFrame};
pub use measure::{MeasureSpec, measure_height, measure_width};
