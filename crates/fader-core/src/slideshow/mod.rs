//! Slide controller: page slots, fade clock and auto-advance.
//!
//! All state lives in one [`Slideshow`] value and is only mutated from
//! [`Slideshow::on_frame_tick`] and the press handlers, so the host must call
//! them from a single thread. Phase changes go through [`next_phase`], which
//! stays free of page and clock bookkeeping.

use core::fmt::Debug;

use log::{debug, info, warn};

use crate::{
    geometry::Point,
    input::{InputEvent, InputProvider},
    page::{Line, LineQueue, Page},
    paginate::paginate,
    render::SlideView,
    settings::SlideshowConfig,
};

mod fade;

pub use fade::{
    FadePhase, FadeTiming, MAX_OPACITY, PhaseClock, PhaseEffect, Transition, Trigger, next_phase,
    opacity,
};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

pub struct Slideshow {
    queue: LineQueue,
    config: SlideshowConfig,
    phase: FadePhase,
    /// `None` until the first page has been loaded.
    current: Option<Page>,
    next: Page,
    total_ms: u64,
    fade_start_ms: u64,
    stable_start_ms: u64,
    auto_mode: bool,
    pending_redraw: bool,
}

include!("runtime.rs");
include!("input.rs");
include!("view.rs");
