//! Layout and timing configuration, fixed for the lifetime of a session.

use crate::{
    geometry::{Circle, Point},
    page::clamp_lines_per_page,
    slideshow::FadeTiming,
};

const TOGGLE_INSET_X: f32 = 40.0;
const TOGGLE_RADIUS: f32 = 30.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideshowConfig {
    pub screen_width: u32,
    pub screen_height: u32,
    pub font_size: u32,
    pub lines_per_page: usize,
    pub fade_ms: u64,
    pub auto_stable_ms: u64,
    pub line_height: u32,
    /// Left edge of every text line.
    pub text_left: u32,
    /// Top edge of the first text line.
    pub text_top: u32,
    /// Average glyph advance as a fraction of the font size, in thousandths.
    pub glyph_width_permille: u32,
    /// Hit region of the auto-advance toggle.
    pub toggle: Circle,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            screen_width: 1280,
            screen_height: 720,
            font_size: 30,
            lines_per_page: 5,
            fade_ms: 2_000,
            auto_stable_ms: 3_000,
            line_height: 80,
            text_left: 100,
            text_top: 130,
            glyph_width_permille: 1_100,
            toggle: corner_toggle(1280, 720),
        }
    }
}

impl SlideshowConfig {
    /// Resizes the window and moves the toggle back into the bottom-right corner.
    pub const fn with_screen_size(mut self, width: u32, height: u32) -> Self {
        self.screen_width = width;
        self.screen_height = height;
        self.toggle = corner_toggle(width, height);
        self
    }

    pub const fn with_font_size(mut self, font_size: u32) -> Self {
        self.font_size = font_size;
        self
    }

    pub const fn with_lines_per_page(mut self, lines_per_page: usize) -> Self {
        self.lines_per_page = lines_per_page;
        self
    }

    pub const fn with_fade_ms(mut self, fade_ms: u64) -> Self {
        self.fade_ms = fade_ms;
        self
    }

    pub const fn with_auto_stable_ms(mut self, auto_stable_ms: u64) -> Self {
        self.auto_stable_ms = auto_stable_ms;
        self
    }

    pub const fn with_toggle(mut self, toggle: Circle) -> Self {
        self.toggle = toggle;
        self
    }

    /// Clamps fields the layout math cannot work with.
    pub fn normalized(mut self) -> Self {
        self.lines_per_page = clamp_lines_per_page(self.lines_per_page);
        self.font_size = self.font_size.max(1);
        self.glyph_width_permille = self.glyph_width_permille.max(1);
        self
    }

    /// Character budget per line from the usable width and the average glyph
    /// estimate. Wide glyphs can still overflow; this is a heuristic.
    pub fn max_chars_per_line(&self) -> usize {
        let usable = self.screen_width.saturating_sub(self.text_left) as u64 * 1_000;
        let glyph = (self.font_size as u64 * self.glyph_width_permille as u64).max(1);
        (usable / glyph) as usize
    }

    /// Top-left anchor of the `index`-th line on a page.
    pub fn line_origin(&self, index: usize) -> Point {
        let offset = self.line_height as f32 * index as f32;
        Point::new(self.text_left as f32, self.text_top as f32 + offset)
    }

    pub const fn timing(&self) -> FadeTiming {
        FadeTiming {
            fade_ms: self.fade_ms,
            auto_stable_ms: self.auto_stable_ms,
        }
    }
}

const fn corner_toggle(width: u32, height: u32) -> Circle {
    Circle::new(
        Point::new(width as f32 - TOGGLE_INSET_X, height as f32),
        TOGGLE_RADIUS,
    )
}
