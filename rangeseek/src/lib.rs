//! A headless multi-thumb range seek bar engine.
//!
//! For adapter-level utilities (orientation, measuring, render geometry), see the
//! `rangeseek-adapter` crate.
//!
//! This crate focuses on the non-visual core of a range seek bar: the mapping between track
//! pixels and scale values, step quantization, the ordering constraints between thumbs, and the
//! pointer-down/move/up state machine that drags one thumb at a time.
//!
//! It is UI-agnostic. A TUI/GUI layer is expected to provide:
//! - the track length along the seek bar's axis and half of the thumb's extent
//! - pointer events projected onto that axis
//! - rendering, using thumb positions and visual states
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod distribute;
mod error;
mod gesture;
mod mapper;
mod options;
mod seekbar;
mod thumbs;
mod types;


pub use distribute::{EvenDistributor, FirstLayout};
pub use error::ConfigError;
pub use gesture::{GestureController, GestureState};
pub use mapper::ScaleMapper;
pub use options::{OnSeekCallback, RangeSeekOptions};
pub use seekbar::RangeSeekBar;
pub use thumbs::{Thumb, ThumbSet};
pub use types::{
    Orientation, PointerAction, Scale, SeekEvent, SeekEventKind, ThumbVisual, Track,
};
