use super::{InputEvent, InputProvider};

/// Input source that never produces events.
#[derive(Default, Debug, Clone, Copy)]
pub struct MockInput;

impl MockInput {
    pub const fn new() -> Self {
        Self
    }
}

impl InputProvider for MockInput {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        Ok(None)
    }
}

/// Replays a fixed list of events, one per poll.
#[derive(Debug, Clone)]
pub struct ScriptedInput<'a> {
    events: &'a [InputEvent],
    cursor: usize,
}

impl<'a> ScriptedInput<'a> {
    pub const fn new(events: &'a [InputEvent]) -> Self {
        Self { events, cursor: 0 }
    }

    pub fn remaining(&self) -> usize {
        self.events.len().saturating_sub(self.cursor)
    }
}

impl InputProvider for ScriptedInput<'_> {
    type Error = core::convert::Infallible;

    fn poll_event(&mut self) -> Result<Option<InputEvent>, Self::Error> {
        let Some(event) = self.events.get(self.cursor).copied() else {
            return Ok(None);
        };
        self.cursor = self.cursor.saturating_add(1);
        Ok(Some(event))
    }
}
