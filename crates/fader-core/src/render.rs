//! View model consumed by the drawing layer once per frame.

use crate::{geometry::Circle, page::Line, slideshow::FadePhase};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SlideView<'a> {
    /// Lines of the page currently on screen, top to bottom.
    pub lines: &'a [Line],
    /// 0..=255
    pub opacity: u8,
    pub phase: FadePhase,
    pub auto_mode: bool,
    pub toggle: Circle,
}

impl SlideView<'_> {
    /// Nothing on the page would be visible this frame.
    pub fn is_blank(&self) -> bool {
        self.opacity == 0 || self.lines.iter().all(Line::is_blank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn view(lines: &[Line], opacity: u8) -> SlideView<'_> {
        SlideView {
            lines,
            opacity,
            phase: FadePhase::Stable,
            auto_mode: false,
            toggle: Circle::new(Point::new(1240.0, 720.0), 30.0),
        }
    }

    #[test]
    fn transparent_or_empty_pages_are_blank() {
        let text = [Line::new("hello"), Line::blank()];
        let separators = [Line::blank(), Line::blank()];

        assert!(!view(&text, 1).is_blank());
        assert!(view(&text, 0).is_blank());
        assert!(view(&separators, 255).is_blank());
        assert!(view(&[], 255).is_blank());
    }
}
