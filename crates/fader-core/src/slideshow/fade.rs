//! Fade phase transitions and opacity curves, independent of any page state.

pub const MAX_OPACITY: u8 = u8::MAX;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FadePhase {
    FadingIn,
    Stable,
    FadingOut,
}

impl FadePhase {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FadingIn => "fading_in",
            Self::Stable => "stable",
            Self::FadingOut => "fading_out",
        }
    }

    pub const fn is_fading(self) -> bool {
        !matches!(self, Self::Stable)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FadeTiming {
    pub fade_ms: u64,
    pub auto_stable_ms: u64,
}

/// Time spent in the current phase and since the page last became stable.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PhaseClock {
    pub phase_elapsed_ms: u64,
    pub stable_elapsed_ms: u64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Trigger {
    /// Per-tick check of the running fade.
    FadeTimer,
    /// Per-tick check of the auto-advance timer, after [`Trigger::FadeTimer`].
    AutoTimer,
    /// Press outside the auto toggle.
    Click,
}

/// Bookkeeping the controller must perform alongside a phase change.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PhaseEffect {
    /// Record when the page became stable.
    MarkStable,
    /// Replace the current page with the prepared one and restart the fade.
    PromoteNextPage,
    /// Begin fading out and prepare the next page.
    StartFadeOut,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Transition {
    pub phase: FadePhase,
    pub effect: PhaseEffect,
}

impl Transition {
    const fn new(phase: FadePhase, effect: PhaseEffect) -> Self {
        Self { phase, effect }
    }
}

/// Evaluates one trigger against the current phase.
///
/// Fades end strictly after `fade_ms` has elapsed; the auto timer fires once
/// `auto_stable_ms` has been reached. Clicks only advance a stable page while
/// auto mode is off.
pub fn next_phase(
    phase: FadePhase,
    clock: PhaseClock,
    auto_mode: bool,
    trigger: Trigger,
    timing: &FadeTiming,
) -> Option<Transition> {
    match (phase, trigger) {
        (FadePhase::FadingIn, Trigger::FadeTimer) if clock.phase_elapsed_ms > timing.fade_ms => {
            Some(Transition::new(FadePhase::Stable, PhaseEffect::MarkStable))
        }
        (FadePhase::FadingOut, Trigger::FadeTimer) if clock.phase_elapsed_ms > timing.fade_ms => {
            Some(Transition::new(
                FadePhase::FadingIn,
                PhaseEffect::PromoteNextPage,
            ))
        }
        (FadePhase::Stable, Trigger::AutoTimer)
            if auto_mode && clock.stable_elapsed_ms >= timing.auto_stable_ms =>
        {
            Some(Transition::new(
                FadePhase::FadingOut,
                PhaseEffect::StartFadeOut,
            ))
        }
        (FadePhase::Stable, Trigger::Click) if !auto_mode => Some(Transition::new(
            FadePhase::FadingOut,
            PhaseEffect::StartFadeOut,
        )),
        _ => None,
    }
}

/// Linear opacity ramp for `phase` after `phase_elapsed_ms` of a
/// `fade_ms`-long fade, clamped to `0..=MAX_OPACITY`.
pub fn opacity(phase: FadePhase, phase_elapsed_ms: u64, fade_ms: u64) -> u8 {
    match phase {
        FadePhase::Stable => MAX_OPACITY,
        FadePhase::FadingIn => ramp(phase_elapsed_ms, fade_ms),
        FadePhase::FadingOut => MAX_OPACITY - ramp(phase_elapsed_ms, fade_ms),
    }
}

fn ramp(elapsed_ms: u64, fade_ms: u64) -> u8 {
    if fade_ms == 0 {
        return MAX_OPACITY;
    }

    let scaled = elapsed_ms.min(fade_ms) as u128 * MAX_OPACITY as u128 / fade_ms as u128;
    scaled as u8
}
