pub mod slide;

use egui::{Align2, Color32, FontId, Painter, Pos2, Rect};
use fader_core::render::SlideView;

pub trait FrameRenderer {
    fn render(&mut self, view: SlideView<'_>, painter: &Painter);
}

/// Steel-blue backdrop behind every slide.
pub const fn window_background() -> Color32 {
    Color32::from_rgb(102, 153, 204)
}

/// Draws `text` with its `anchor` point placed at `origin`.
pub fn draw_text(
    painter: &Painter,
    text: &str,
    origin: Pos2,
    color: Color32,
    font: FontId,
    anchor: Align2,
) -> Rect {
    painter.text(origin, anchor, text, font, color)
}
