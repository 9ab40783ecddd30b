impl Slideshow {
    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    pub fn auto_mode(&self) -> bool {
        self.auto_mode
    }

    pub fn config(&self) -> &SlideshowConfig {
        &self.config
    }

    pub fn total_ms(&self) -> u64 {
        self.total_ms
    }

    pub fn fade_start_ms(&self) -> u64 {
        self.fade_start_ms
    }

    pub fn stable_start_ms(&self) -> u64 {
        self.stable_start_ms
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.current.as_ref()
    }

    pub fn next_page(&self) -> &Page {
        &self.next
    }

    pub fn remaining_lines(&self) -> usize {
        self.queue.len()
    }

    pub fn opacity(&self) -> u8 {
        opacity(
            self.phase,
            self.phase_clock().phase_elapsed_ms,
            self.config.fade_ms,
        )
    }

    /// Lines on screen and the opacity to draw them with.
    pub fn visible_lines(&self) -> (&[Line], u8) {
        let lines = self.current.as_ref().map_or(&[][..], |page| page.as_slice());
        (lines, self.opacity())
    }

    pub fn with_view<F>(&self, f: F)
    where
        F: FnOnce(SlideView<'_>),
    {
        let (lines, opacity) = self.visible_lines();
        f(SlideView {
            lines,
            opacity,
            phase: self.phase,
            auto_mode: self.auto_mode,
            toggle: self.config.toggle,
        });
    }

    /// Milliseconds until the next timer-driven phase change, if one is due.
    pub fn next_deadline_ms(&self) -> Option<u64> {
        let clock = self.phase_clock();
        match self.phase {
            FadePhase::FadingIn | FadePhase::FadingOut => Some(
                self.config
                    .fade_ms
                    .saturating_add(1)
                    .saturating_sub(clock.phase_elapsed_ms),
            ),
            FadePhase::Stable if self.auto_mode => Some(
                self.config
                    .auto_stable_ms
                    .saturating_sub(clock.stable_elapsed_ms),
            ),
            FadePhase::Stable => None,
        }
    }
}
