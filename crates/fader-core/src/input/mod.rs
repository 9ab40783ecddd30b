//! Input abstraction layer.

pub mod mock;

/// Pointer actions consumed by the slideshow, in window coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Press { x: f32, y: f32 },
}

impl InputEvent {
    pub const fn press(x: f32, y: f32) -> Self {
        Self::Press { x, y }
    }
}

/// Polled input provider.
pub trait InputProvider {
    type Error;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error>;
}
