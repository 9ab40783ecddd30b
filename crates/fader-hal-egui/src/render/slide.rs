use egui::{Align2, Color32, Painter, Pos2, pos2};
use fader_core::{geometry::Point, render::SlideView, settings::SlideshowConfig};

use super::{FrameRenderer, draw_text};
use crate::platform::font::FontHandle;

const TOGGLE_LABEL: &str = "Auto";
const TOGGLE_LABEL_SIZE: f32 = 20.0;
/// The label sits this far inside the toggle's hit circle.
const TOGGLE_LABEL_LIFT: f32 = 30.0;
const TOGGLE_OFF_COLOR: Color32 = Color32::from_rgb(128, 128, 128);

/// Draws the visible page and the auto-advance toggle label.
pub struct SlideRenderer {
    config: SlideshowConfig,
    font: FontHandle,
    origin: Pos2,
}

impl SlideRenderer {
    pub fn new(config: SlideshowConfig, font: FontHandle) -> Self {
        Self {
            config,
            font,
            origin: Pos2::ZERO,
        }
    }

    /// Screen position of the slide canvas's top-left corner.
    pub fn set_origin(&mut self, origin: Pos2) {
        self.origin = origin;
    }

    /// Non-blank lines of `view` with the screen position of their top-left
    /// corner.
    pub fn line_layout<'v>(
        &self,
        view: &SlideView<'v>,
    ) -> impl Iterator<Item = (Pos2, &'v str)> {
        view.lines
            .iter()
            .enumerate()
            .filter(|(_, line)| !line.is_blank())
            .map(|(index, line)| (self.to_screen(self.config.line_origin(index)), line.as_str()))
    }

    pub fn toggle_label_anchor(&self, view: &SlideView<'_>) -> Pos2 {
        let center = view.toggle.center;
        self.to_screen(Point::new(center.x, center.y - TOGGLE_LABEL_LIFT))
    }

    fn to_screen(&self, point: Point) -> Pos2 {
        pos2(self.origin.x + point.x, self.origin.y + point.y)
    }
}

impl FrameRenderer for SlideRenderer {
    fn render(&mut self, view: SlideView<'_>, painter: &Painter) {
        if !view.is_blank() {
            let color = text_color(view.opacity);
            let font = self.font.font_id(self.config.font_size as f32);
            for (at, text) in self.line_layout(&view) {
                draw_text(painter, text, at, color, font.clone(), Align2::LEFT_TOP);
            }
        }

        draw_text(
            painter,
            TOGGLE_LABEL,
            self.toggle_label_anchor(&view),
            toggle_color(view.auto_mode),
            self.font.font_id(TOGGLE_LABEL_SIZE),
            Align2::CENTER_CENTER,
        );
    }
}

/// White text carrying the fade opacity as alpha.
pub fn text_color(opacity: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(255, 255, 255, opacity)
}

pub fn toggle_color(auto_mode: bool) -> Color32 {
    if auto_mode {
        Color32::WHITE
    } else {
        TOGGLE_OFF_COLOR
    }
}
