#![cfg_attr(not(test), no_std)]

//! Platform-free core of the fading slide viewer: word wrapping, page batching
//! and the fade/auto-advance state machine.

extern crate alloc;

pub mod geometry;
pub mod input;
pub mod page;
pub mod paginate;
pub mod render;
pub mod settings;
pub mod slideshow;
