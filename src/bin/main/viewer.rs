use std::time::{Duration, Instant};

use eframe::egui;
use fader_core::slideshow::{Slideshow, TickResult};
use fader_hal_egui::{
    input::pointer::PointerInput,
    render::{FrameRenderer, slide::SlideRenderer, window_background},
};

/// Turns a monotonic millisecond reading into per-frame deltas.
///
/// Deltas come from the absolute reading rather than rounding each frame's
/// duration, so the slideshow clock does not drift.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(super) struct FrameClock {
    last_ms: u64,
}

impl FrameClock {
    pub(super) fn delta_to(&mut self, now_ms: u64) -> u64 {
        let delta = now_ms.saturating_sub(self.last_ms);
        self.last_ms = self.last_ms.max(now_ms);
        delta
    }
}

pub(super) struct Viewer {
    slideshow: Slideshow,
    input: PointerInput,
    renderer: SlideRenderer,
    started: Instant,
    clock: FrameClock,
}

impl Viewer {
    pub(super) fn new(slideshow: Slideshow, renderer: SlideRenderer) -> Self {
        Self {
            slideshow,
            input: PointerInput::new(),
            renderer,
            started: Instant::now(),
            clock: FrameClock::default(),
        }
    }

    fn schedule_repaint(&self, ctx: &egui::Context, tick: TickResult) {
        match tick {
            TickResult::RenderRequested => ctx.request_repaint(),
            TickResult::NoRender => {
                if let Some(wait_ms) = self.slideshow.next_deadline_ms() {
                    ctx.request_repaint_after(Duration::from_millis(wait_ms));
                }
            }
        }
    }
}

impl eframe::App for Viewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now_ms = self.started.elapsed().as_millis() as u64;
        let delta_ms = self.clock.delta_to(now_ms);

        let background = window_background();
        let tick = egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(background).inner_margin(0.0))
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                self.input.set_origin(origin);
                self.renderer.set_origin(origin);

                ui.input(|input| self.input.collect(&input.events));
                self.slideshow.pump_inputs(&mut self.input);
                let tick = self.slideshow.on_frame_tick(delta_ms);

                let painter = ui.painter();
                self.slideshow
                    .with_view(|view| self.renderer.render(view, painter));
                tick
            })
            .inner;

        self.schedule_repaint(ctx, tick);
    }
}
