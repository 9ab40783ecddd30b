use core::convert::Infallible;

use egui::{Event, PointerButton, Pos2};
use heapless::Deque;
use log::debug;

use fader_core::input::{InputEvent, InputProvider};

const POINTER_QUEUE_DEPTH: usize = 16;

/// Primary-button presses gathered from egui events, waiting to be polled.
///
/// Positions are translated so the top-left corner of the slide canvas is the
/// origin.
#[derive(Debug, Default)]
pub struct PointerInput {
    origin: Pos2,
    pending: Deque<InputEvent, POINTER_QUEUE_DEPTH>,
}

impl PointerInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_origin(&mut self, origin: Pos2) {
        self.origin = origin;
    }

    pub fn collect(&mut self, events: &[Event]) {
        for event in events {
            if let Event::PointerButton {
                pos,
                button: PointerButton::Primary,
                pressed: true,
                ..
            } = event
            {
                self.push_press(*pos);
            }
        }
    }

    pub fn push_press(&mut self, pos: Pos2) {
        let local = pos - self.origin.to_vec2();
        if self
            .pending
            .push_back(InputEvent::press(local.x, local.y))
            .is_err()
        {
            debug!(
                "pointer: queue full, dropping press at ({:.1}, {:.1})",
                local.x, local.y
            );
        }
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl InputProvider for PointerInput {
    type Error = Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(self.pending.pop_front())
    }
}

#[cfg(test)]
mod tests {
    use egui::{Modifiers, pos2};

    use super::*;

    fn button(pos: Pos2, button: PointerButton, pressed: bool) -> Event {
        Event::PointerButton {
            pos,
            button,
            pressed,
            modifiers: Modifiers::NONE,
        }
    }

    #[test]
    fn only_primary_presses_are_queued() {
        let mut input = PointerInput::new();
        input.collect(&[
            button(pos2(10.0, 20.0), PointerButton::Primary, true),
            button(pos2(10.0, 20.0), PointerButton::Primary, false),
            button(pos2(30.0, 40.0), PointerButton::Secondary, true),
            Event::PointerMoved(pos2(5.0, 5.0)),
        ]);

        assert_eq!(input.pending(), 1);
        assert_eq!(input.poll_event(), Ok(Some(InputEvent::press(10.0, 20.0))));
        assert_eq!(input.poll_event(), Ok(None));
    }

    #[test]
    fn presses_are_relative_to_the_canvas_origin() {
        let mut input = PointerInput::new();
        input.set_origin(pos2(8.0, 4.0));
        input.push_press(pos2(1_248.0, 724.0));

        assert_eq!(
            input.poll_event(),
            Ok(Some(InputEvent::press(1_240.0, 720.0)))
        );
    }

    #[test]
    fn overflow_drops_newest_presses() {
        let mut input = PointerInput::new();
        for i in 0..(POINTER_QUEUE_DEPTH + 4) {
            input.push_press(pos2(i as f32, 0.0));
        }

        assert_eq!(input.pending(), POINTER_QUEUE_DEPTH);
        assert_eq!(input.poll_event(), Ok(Some(InputEvent::press(0.0, 0.0))));
    }
}
