impl Slideshow {
    /// Handles a press at window coordinates `(x, y)`.
    ///
    /// The auto toggle always flips auto mode. Anywhere else a press only
    /// advances a stable page while auto mode is off. Returns whether the press
    /// changed anything.
    pub fn on_mouse_press(&mut self, x: f32, y: f32) -> bool {
        if self.config.toggle.contains(Point::new(x, y)) {
            self.toggle_auto_mode();
            return true;
        }

        self.apply_trigger(Trigger::Click)
    }

    pub fn toggle_auto_mode(&mut self) {
        self.auto_mode = !self.auto_mode;
        info!(
            "slideshow: auto mode {} phase={} total_ms={}",
            if self.auto_mode { "on" } else { "off" },
            self.phase.label(),
            self.total_ms
        );
        self.pending_redraw = true;
    }

    /// Drains every pending event from `input`.
    pub fn pump_inputs<IN>(&mut self, input: &mut IN)
    where
        IN: InputProvider,
        IN::Error: Debug,
    {
        loop {
            match input.poll_event() {
                Ok(Some(InputEvent::Press { x, y })) => {
                    self.on_mouse_press(x, y);
                }
                Ok(None) => break,
                Err(err) => {
                    warn!("slideshow: input provider failed: {:?}", err);
                    break;
                }
            }
        }
    }
}
