impl Slideshow {
    /// Starts a session over an already paginated queue and loads the first
    /// page, which begins fading in at time zero. Pages are cut at
    /// `config.lines_per_page`, whatever batch size the queue was built with.
    pub fn new(mut queue: LineQueue, config: SlideshowConfig) -> Self {
        let config = config.normalized();
        queue.set_lines_per_page(config.lines_per_page);

        let mut slideshow = Self {
            queue,
            config,
            phase: FadePhase::FadingIn,
            current: None,
            next: Page::new(),
            total_ms: 0,
            fade_start_ms: 0,
            stable_start_ms: 0,
            auto_mode: false,
            pending_redraw: true,
        };

        slideshow.advance_text();
        slideshow
    }

    /// Wraps `raw_text` with the layout's character budget and starts a session.
    pub fn from_text(raw_text: &str, config: SlideshowConfig) -> Self {
        let config = config.normalized();
        let queue = paginate(raw_text, config.max_chars_per_line(), config.lines_per_page);
        debug!(
            "slideshow: paginated {} lines at {} chars per line",
            queue.len(),
            config.max_chars_per_line()
        );
        Self::new(queue, config)
    }

    /// Advances the clock by `delta_ms`, then settles the fade timer, then the
    /// auto-advance timer.
    pub fn on_frame_tick(&mut self, delta_ms: u64) -> TickResult {
        self.total_ms = self.total_ms.saturating_add(delta_ms);

        let mut changed = core::mem::take(&mut self.pending_redraw);
        changed |= self.apply_trigger(Trigger::FadeTimer);
        changed |= self.apply_trigger(Trigger::AutoTimer);

        if changed || self.phase.is_fading() {
            TickResult::RenderRequested
        } else {
            TickResult::NoRender
        }
    }

    /// Fades the current page out and prepares the next one. Does nothing
    /// unless the page is stable.
    pub fn start_fade_out(&mut self) -> bool {
        if self.phase != FadePhase::Stable {
            return false;
        }

        self.set_phase(FadePhase::FadingOut);
        self.fade_start_ms = self.total_ms;
        self.advance_text();
        self.pending_redraw = true;
        true
    }

    /// Pulls the next batch of lines into the prepared slot.
    ///
    /// Before the first page exists the batch goes straight on screen and
    /// starts fading in. Once the queue is exhausted the prepared slot stays
    /// empty, so the following fade-in shows a blank page.
    pub fn advance_text(&mut self) {
        if self.queue.is_empty() {
            debug!(
                "slideshow: line queue exhausted at total_ms={}",
                self.total_ms
            );
            return;
        }

        self.next = self.queue.pop_page();
        debug!(
            "slideshow: prepared page lines={} remaining={}",
            self.next.len(),
            self.queue.len()
        );

        if self.current.is_none() {
            self.current = Some(core::mem::take(&mut self.next));
            self.set_phase(FadePhase::FadingIn);
            self.fade_start_ms = self.total_ms;
        }
        self.pending_redraw = true;
    }

    fn apply_trigger(&mut self, trigger: Trigger) -> bool {
        let Some(transition) = next_phase(
            self.phase,
            self.phase_clock(),
            self.auto_mode,
            trigger,
            &self.config.timing(),
        ) else {
            return false;
        };

        match transition.effect {
            PhaseEffect::MarkStable => {
                self.set_phase(transition.phase);
                self.stable_start_ms = self.total_ms;
            }
            PhaseEffect::PromoteNextPage => {
                self.set_phase(transition.phase);
                self.promote_next_page();
            }
            PhaseEffect::StartFadeOut => {
                self.start_fade_out();
            }
        }

        true
    }

    fn promote_next_page(&mut self) {
        let page = core::mem::take(&mut self.next);
        if page.is_empty() {
            debug!("slideshow: nothing left to show, blanking page");
        }
        self.current = Some(page);
        self.fade_start_ms = self.total_ms;
    }

    fn set_phase(&mut self, phase: FadePhase) {
        if self.phase != phase {
            debug!(
                "slideshow: phase {} -> {} total_ms={}",
                self.phase.label(),
                phase.label(),
                self.total_ms
            );
        }
        self.phase = phase;
    }

    fn phase_clock(&self) -> PhaseClock {
        PhaseClock {
            phase_elapsed_ms: self.total_ms.saturating_sub(self.fade_start_ms),
            stable_elapsed_ms: self.total_ms.saturating_sub(self.stable_start_ms),
        }
    }
}
