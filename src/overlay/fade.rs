// SPDX-License-Identifier: MPL-2.0
//! Visibility/fade sub-component for the controls overlay.
//!
//! Owns the overlay's animated opacity and its derived "mounted" flag.
//! All timing is `Instant`-based and advanced by `Tick` messages from the
//! component's subscription; assigning a new fade supersedes the old one,
//! so a stale completion can never flip visibility after a newer request.

use std::time::{Duration, Instant};

use crate::config::{DEFAULT_FADE_OUT_DELAY_MS, MAX_FADE_OUT_DELAY_MS};

/// Duration of a fade in either direction.
const FADE_DURATION: Duration = Duration::from_millis(300);

/// Opacity above which a toggle reads the overlay as shown.
const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Auto-hide delay in milliseconds, clamped to a sane range.
///
/// # Example
///
/// ```
/// use iced_media_controls::FadeOutDelay;
///
/// let delay = FadeOutDelay::new(3_000);
/// assert_eq!(delay.millis(), 3_000);
///
/// // Values beyond the maximum are clamped
/// let forever = FadeOutDelay::new(10_000_000);
/// assert_eq!(forever.millis(), 60_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeOutDelay(u64);

impl FadeOutDelay {
    /// Creates a new delay value, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.min(MAX_FADE_OUT_DELAY_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for FadeOutDelay {
    fn default() -> Self {
        Self(DEFAULT_FADE_OUT_DELAY_MS)
    }
}

/// Where the animation currently stands.
#[derive(Debug, Clone, Copy)]
enum Phase {
    /// No animation in flight; opacity is 1 when visible, 0 when hidden.
    Steady,
    /// Animating toward fully opaque.
    FadingIn {
        started: Instant,
        from: f32,
        auto_hide: bool,
    },
    /// Fade-out scheduled but not started; opacity held meanwhile.
    Delaying { fade_at: Instant, hold: f32 },
    /// Animating toward fully transparent.
    FadingOut { started: Instant, from: f32 },
}

/// Fade controller state.
///
/// Lives inside the component instance for its mounted lifetime; there is
/// no shared or process-wide animation state.
#[derive(Debug, Clone)]
pub struct State {
    phase: Phase,
    visible: bool,
    fade_out_delay: FadeOutDelay,
}

/// Messages for the fade sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Tap on the overlay surface: hide when shown, show when hidden.
    Toggle,
    /// Fade the overlay in. With `auto_hide`, schedules a delayed
    /// fade-out once fully opaque.
    FadeIn { auto_hide: bool },
    /// Fade the overlay out after `delay`.
    FadeOut { delay: Duration },
    /// Snap to fully visible, dropping any in-flight animation.
    ShowImmediate,
    /// Advance time.
    Tick,
}

/// Effects produced by visibility changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The mounted flag flipped.
    VisibilityChanged(bool),
}

impl State {
    /// Creates the controller in its mount state.
    ///
    /// With `show_on_start` the overlay comes up visible and the auto-hide
    /// countdown is already armed; otherwise it comes up hidden.
    #[must_use]
    pub fn new(show_on_start: bool, fade_out_delay: FadeOutDelay) -> Self {
        if show_on_start {
            Self {
                phase: Phase::Delaying {
                    fade_at: Instant::now() + fade_out_delay.as_duration(),
                    hold: 1.0,
                },
                visible: true,
                fade_out_delay,
            }
        } else {
            Self {
                phase: Phase::Steady,
                visible: false,
                fade_out_delay,
            }
        }
    }

    /// Configured auto-hide delay.
    #[must_use]
    pub fn fade_out_delay(&self) -> FadeOutDelay {
        self.fade_out_delay
    }

    pub fn set_fade_out_delay(&mut self, delay: FadeOutDelay) {
        self.fade_out_delay = delay;
    }

    /// Current opacity in `[0, 1]`.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.opacity_at(Instant::now())
    }

    fn opacity_at(&self, now: Instant) -> f32 {
        match self.phase {
            Phase::Steady => {
                if self.visible {
                    1.0
                } else {
                    0.0
                }
            }
            Phase::FadingIn { started, from, .. } => lerp(from, 1.0, fade_progress(started, now)),
            Phase::Delaying { hold, .. } => hold,
            Phase::FadingOut { started, from } => lerp(from, 0.0, fade_progress(started, now)),
        }
    }

    /// Whether the overlay content is mounted.
    ///
    /// Lags the opacity: set the moment a fade-in begins, cleared only
    /// when a fade-out completes.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether opacity is actively animating (drives the fast tick rate).
    #[must_use]
    pub fn is_fading(&self) -> bool {
        matches!(self.phase, Phase::FadingIn { .. } | Phase::FadingOut { .. })
    }

    /// Whether a delayed fade-out is pending (coarse ticks suffice).
    #[must_use]
    pub fn is_waiting(&self) -> bool {
        matches!(self.phase, Phase::Delaying { .. })
    }

    /// Handle a fade message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message:
    /// Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Toggle => {
                if self.opacity() > VISIBILITY_THRESHOLD {
                    self.handle(Message::FadeOut {
                        delay: Duration::ZERO,
                    })
                } else {
                    self.handle(Message::FadeIn { auto_hide: true })
                }
            }
            Message::FadeIn { auto_hide } => {
                let from = self.opacity();
                // Mount first so content never flashes in partway through
                // the animation
                let effect = self.set_visible(true);
                self.phase = Phase::FadingIn {
                    started: Instant::now(),
                    from,
                    auto_hide,
                };
                tracing::debug!(from, auto_hide, "fade-in started");
                effect
            }
            Message::FadeOut { delay } => {
                let hold = self.opacity();
                let now = Instant::now();
                self.phase = if delay.is_zero() {
                    Phase::FadingOut {
                        started: now,
                        from: hold,
                    }
                } else {
                    Phase::Delaying {
                        fade_at: now + delay,
                        hold,
                    }
                };
                tracing::debug!(delay_ms = delay.as_millis() as u64, "fade-out scheduled");
                Effect::None
            }
            Message::ShowImmediate => {
                self.phase = Phase::Steady;
                tracing::debug!("animation cancelled, overlay pinned visible");
                self.set_visible(true)
            }
            Message::Tick => self.advance(Instant::now()),
        }
    }

    fn advance(&mut self, now: Instant) -> Effect {
        match self.phase {
            Phase::FadingIn {
                started, auto_hide, ..
            } if fade_done(started, now) => {
                self.phase = if auto_hide {
                    Phase::Delaying {
                        fade_at: now + self.fade_out_delay.as_duration(),
                        hold: 1.0,
                    }
                } else {
                    Phase::Steady
                };
                Effect::None
            }
            Phase::Delaying { fade_at, hold } if now >= fade_at => {
                self.phase = Phase::FadingOut {
                    started: now,
                    from: hold,
                };
                Effect::None
            }
            Phase::FadingOut { started, .. } if fade_done(started, now) => {
                // Visibility drops only on actual completion; a superseded
                // fade-out never reaches this arm because its phase was
                // overwritten
                self.phase = Phase::Steady;
                self.set_visible(false)
            }
            _ => Effect::None,
        }
    }

    fn set_visible(&mut self, visible: bool) -> Effect {
        if self.visible == visible {
            return Effect::None;
        }
        self.visible = visible;
        Effect::VisibilityChanged(visible)
    }
}

fn fade_progress(started: Instant, now: Instant) -> f32 {
    let elapsed = now.saturating_duration_since(started);
    (elapsed.as_secs_f32() / FADE_DURATION.as_secs_f32()).clamp(0.0, 1.0)
}

fn fade_done(started: Instant, now: Instant) -> bool {
    now.saturating_duration_since(started) >= FADE_DURATION
}

fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
