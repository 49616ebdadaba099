// SPDX-License-Identifier: MPL-2.0
//! The media-controls overlay component.
//!
//! Elm-style orchestrator over nested sub-components:
//!
//! ```text
//! MediaControls (orchestrator)
//!     ├── fade      - visibility/fade state machine
//!     ├── controls  - play/pause/replay button group (stateless)
//!     ├── seek_bar  - timeline + time labels (stateless)
//!     └── toolbar   - host-content passthrough (independent export)
//! ```
//!
//! The host owns playback: it passes the current [`Playback`] snapshot
//! into `view` and `update`, and receives requested transitions back as
//! [`Effect`] values. The overlay never mutates playback itself.

pub mod fade;
pub mod toolbar;

mod controls;
mod seek_bar;

use std::time::Duration;

use crate::config::Config;
use crate::design_tokens::{palette, spacing};
use crate::error::Result;
use crate::player::PlayerState;
use crate::styles;
use iced::widget::{column, container, mouse_area, Space};
use iced::{time, Color, Element, Length, Subscription};

pub use fade::FadeOutDelay;

/// Tick cadence while a fade is animating.
const FADE_TICK: Duration = Duration::from_millis(16);

/// Tick cadence while waiting out an auto-hide delay or spinning the
/// loading indicator.
const IDLE_TICK: Duration = Duration::from_millis(100);

/// Spinner advance per tick, in radians.
const SPINNER_SPEED: f32 = 0.35;

/// Host-owned playback snapshot, passed in on every render.
#[derive(Debug, Clone, Copy)]
pub struct Playback {
    pub state: PlayerState,
    /// Current position in seconds.
    pub progress_secs: f64,
    /// Total duration in seconds.
    pub duration_secs: f64,
}

/// Construction-time options for the overlay.
#[derive(Debug, Clone)]
pub struct Options {
    /// Accent color for the primary button and the elapsed seek track.
    pub main_color: Color,
    /// Auto-hide delay after a manual show.
    pub fade_out_delay: FadeOutDelay,
    /// Start mounted and visible (with the auto-hide countdown armed).
    pub show_on_start: bool,
    /// Show the controls while the host reports loading.
    pub show_on_load: bool,
    /// Suppress the seek bar and its time labels entirely.
    pub hide_seekbar: bool,
    /// Render the fullscreen button and emit
    /// [`Effect::RequestFullScreen`] on press.
    pub enable_fullscreen: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            main_color: palette::ACCENT,
            fade_out_delay: FadeOutDelay::default(),
            show_on_start: true,
            show_on_load: false,
            hide_seekbar: false,
            enable_fullscreen: false,
        }
    }
}

impl Options {
    /// Builds options from persisted preferences, falling back to the
    /// defaults for unset fields.
    pub fn from_config(config: &Config) -> Result<Self> {
        let mut options = Self::default();
        if let Some(ms) = config.fade_out_delay_ms {
            options.fade_out_delay = FadeOutDelay::new(ms);
        }
        if let Some(show) = config.show_on_start {
            options.show_on_start = show;
        }
        if let Some(show) = config.show_on_load {
            options.show_on_load = show;
        }
        if let Some(hide) = config.hide_seekbar {
            options.hide_seekbar = hide;
        }
        if let Some(color) = &config.main_color {
            options.main_color = crate::config::parse_color(color)?;
        }
        Ok(options)
    }
}

/// Messages emitted by the overlay widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Tap anywhere on the overlay surface.
    OverlayPressed,
    /// Primary button pressed while playing or paused.
    PlayPausePressed,
    /// Primary button pressed after playback ended.
    ReplayPressed,
    /// Seek slider dragged to a new position (visual preview).
    SeekPreview(f64),
    /// Seek slider released: commit the previewed position.
    SeekCommit,
    /// Fullscreen button pressed.
    FullScreenPressed,
    /// Host loading state changed.
    LoadingChanged(bool),
    /// Periodic tick from the subscription.
    Tick,
}

/// Requests the overlay hands back to the host.
///
/// The Iced rendition of the original widget's callback props: instead of
/// calling into the host, `update` returns what the host should do.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Transition playback to the given state.
    RequestPlayerState(PlayerState),
    /// Restart playback from the beginning.
    RequestReplay,
    /// Live drag position while scrubbing (continuous callback).
    Seeking(f64),
    /// Seek committed on release, followed by the pause/resume request
    /// that seeking-complete intentionally couples to.
    SeekCommitted { position: f64, request: PlayerState },
    /// Toggle fullscreen presentation.
    RequestFullScreen,
    /// The overlay's mounted flag flipped.
    VisibilityChanged(bool),
}

/// Media-controls overlay state.
///
/// Create once per video surface and keep for the surface's lifetime;
/// all animation state lives inside the instance.
#[derive(Debug, Clone)]
pub struct MediaControls {
    options: Options,
    fade: fade::State,
    is_loading: bool,
    spinner_rotation: f32,
    seek_preview: Option<f64>,
}

impl Default for MediaControls {
    fn default() -> Self {
        Self::new(Options::default())
    }
}

impl MediaControls {
    #[must_use]
    pub fn new(options: Options) -> Self {
        let fade = fade::State::new(options.show_on_start, options.fade_out_delay);
        Self {
            options,
            fade,
            is_loading: false,
            spinner_rotation: 0.0,
            seek_preview: None,
        }
    }

    /// Handle an overlay message against the host's current playback
    /// state.
    pub fn update(&mut self, message: Message, player_state: PlayerState) -> Effect {
        match message {
            Message::OverlayPressed => self.toggle(),
            Message::PlayPausePressed => {
                self.apply_pause_animation(player_state);
                Effect::RequestPlayerState(player_state.pause_toggle_target())
            }
            Message::ReplayPressed => {
                // Replay always re-arms the auto-hide, regardless of state
                self.fade.handle(fade::Message::FadeOut {
                    delay: self.options.fade_out_delay.as_duration(),
                });
                Effect::RequestReplay
            }
            Message::SeekPreview(position) => {
                self.seek_preview = Some(position);
                Effect::Seeking(position)
            }
            Message::SeekCommit => match self.seek_preview.take() {
                Some(position) => {
                    tracing::debug!(position, "seek committed");
                    self.apply_pause_animation(player_state);
                    Effect::SeekCommitted {
                        position,
                        request: player_state.pause_toggle_target(),
                    }
                }
                None => Effect::None,
            },
            Message::FullScreenPressed => Effect::RequestFullScreen,
            Message::LoadingChanged(loading) => self.set_loading(loading),
            Message::Tick => {
                if self.is_loading {
                    self.spinner_rotation += SPINNER_SPEED;
                    if self.spinner_rotation > std::f32::consts::TAU {
                        self.spinner_rotation -= std::f32::consts::TAU;
                    }
                }
                map_fade_effect(self.fade.handle(fade::Message::Tick))
            }
        }
    }

    /// Tap entry point: hide when shown, show when hidden.
    pub fn toggle(&mut self) -> Effect {
        map_fade_effect(self.fade.handle(fade::Message::Toggle))
    }

    /// Fade the controls in. With `auto_hide`, they fade back out after
    /// the configured delay.
    pub fn show(&mut self, auto_hide: bool) -> Effect {
        map_fade_effect(self.fade.handle(fade::Message::FadeIn { auto_hide }))
    }

    /// Fade the controls out after `delay`.
    pub fn hide_after(&mut self, delay: Duration) -> Effect {
        map_fade_effect(self.fade.handle(fade::Message::FadeOut { delay }))
    }

    /// Snap to fully visible with no pending auto-hide. Used when
    /// playback pauses so the controls are immediately legible.
    pub fn show_immediate(&mut self) -> Effect {
        map_fade_effect(self.fade.handle(fade::Message::ShowImmediate))
    }

    /// Current overlay opacity in `[0, 1]`, for composing external
    /// pieces (like the toolbar slot) with a matching fade.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        self.fade.opacity()
    }

    /// Whether the overlay content is mounted.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.fade.is_visible()
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    #[must_use]
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// The pause-toggle side effect on the fade controller, keyed by the
    /// playback state the host reported, not by the transition target:
    /// pausing pins the controls visible, resuming arms the auto-hide,
    /// and a finished video animates nothing.
    fn apply_pause_animation(&mut self, player_state: PlayerState) {
        match player_state {
            PlayerState::Playing => {
                self.fade.handle(fade::Message::ShowImmediate);
            }
            PlayerState::Paused => {
                self.fade.handle(fade::Message::FadeOut {
                    delay: self.options.fade_out_delay.as_duration(),
                });
            }
            PlayerState::Ended => {}
        }
    }

    fn set_loading(&mut self, loading: bool) -> Effect {
        if self.is_loading == loading {
            return Effect::None;
        }
        self.is_loading = loading;
        if !loading {
            self.spinner_rotation = 0.0;
        }
        if !self.options.show_on_load {
            return Effect::None;
        }
        if loading {
            // Pin the controls while loading; no auto-hide under a spinner
            map_fade_effect(self.fade.handle(fade::Message::FadeIn { auto_hide: false }))
        } else {
            // Loading finished: leave the controls up briefly, then hide
            map_fade_effect(self.fade.handle(fade::Message::FadeOut {
                delay: self.options.fade_out_delay.as_duration(),
            }))
        }
    }

    /// Renders the overlay for the given playback snapshot.
    ///
    /// While hidden, only a transparent tap-catcher is mounted so a tap
    /// can bring the controls back.
    pub fn view(&self, playback: &Playback) -> Element<'_, Message> {
        if !self.fade.is_visible() {
            return mouse_area(Space::new().width(Length::Fill).height(Length::Fill))
                .on_press(Message::OverlayPressed)
                .into();
        }

        let alpha = self.fade.opacity();
        let accent = self.options.main_color;

        let content = column![
            Space::new().height(Length::Fill),
            controls::view(
                playback.state,
                self.is_loading,
                self.spinner_rotation,
                accent,
                alpha,
            ),
            Space::new().height(Length::Fill),
            seek_bar::view(
                playback,
                self.seek_preview,
                accent,
                alpha,
                self.options.hide_seekbar,
                self.options.enable_fullscreen,
            ),
        ]
        .width(Length::Fill)
        .height(Length::Fill);

        mouse_area(
            container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(spacing::MD)
                .style(styles::overlay::backdrop(alpha)),
        )
        .on_press(Message::OverlayPressed)
        .into()
    }

    /// Tick subscription: fast while a fade animates, coarse while an
    /// auto-hide delay or the loading spinner is pending, none when
    /// steady.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.fade.is_fading() {
            time::every(FADE_TICK).map(|_| Message::Tick)
        } else if self.fade.is_waiting() || self.is_loading {
            time::every(IDLE_TICK).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }
}

fn map_fade_effect(effect: fade::Effect) -> Effect {
    match effect {
        fade::Effect::None => Effect::None,
        fade::Effect::VisibilityChanged(visible) => Effect::VisibilityChanged(visible),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hidden_options() -> Options {
        Options {
            show_on_start: false,
            ..Options::default()
        }
    }

    fn playback(state: PlayerState) -> Playback {
        Playback {
            state,
            progress_secs: 45.0,
            duration_secs: 120.0,
        }
    }

    #[test]
    fn default_options_match_original_widget() {
        let options = Options::default();
        assert_eq!(options.fade_out_delay.millis(), 5_000);
        assert!(options.show_on_start);
        assert!(!options.show_on_load);
        assert!(!options.hide_seekbar);
        assert!(!options.enable_fullscreen);
    }

    #[test]
    fn options_from_config_overrides_defaults() {
        let config = Config {
            fade_out_delay_ms: Some(2_000),
            show_on_start: Some(false),
            show_on_load: Some(true),
            hide_seekbar: Some(true),
            main_color: Some("#0C53AF".to_string()),
        };
        let options = Options::from_config(&config).expect("config must convert");
        assert_eq!(options.fade_out_delay.millis(), 2_000);
        assert!(!options.show_on_start);
        assert!(options.show_on_load);
        assert!(options.hide_seekbar);
    }

    #[test]
    fn options_from_config_rejects_bad_color() {
        let config = Config {
            main_color: Some("chartreuse".to_string()),
            ..Config::default()
        };
        assert!(Options::from_config(&config).is_err());
    }

    #[test]
    fn pause_while_playing_pins_overlay_and_requests_pause() {
        let mut controls = MediaControls::default();
        let effect = controls.update(Message::PlayPausePressed, PlayerState::Playing);

        assert_eq!(effect, Effect::RequestPlayerState(PlayerState::Paused));
        assert!(controls.is_visible());
        assert!((controls.opacity() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn resume_while_paused_arms_auto_hide_and_requests_playing() {
        let mut controls = MediaControls::default();
        controls.show_immediate();
        let effect = controls.update(Message::PlayPausePressed, PlayerState::Paused);

        assert_eq!(effect, Effect::RequestPlayerState(PlayerState::Playing));
        // Controls stay up for the configured delay before fading
        assert!(controls.fade.is_waiting());
        assert!((controls.opacity() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn pause_toggle_after_end_requests_restart_without_animation() {
        let mut controls = MediaControls::new(hidden_options());
        let effect = controls.update(Message::PlayPausePressed, PlayerState::Ended);

        assert_eq!(effect, Effect::RequestPlayerState(PlayerState::Playing));
        assert!(!controls.is_visible());
        assert!(!controls.fade.is_fading());
    }

    #[test]
    fn replay_requests_replay_and_rearms_auto_hide() {
        let mut controls = MediaControls::default();
        let effect = controls.update(Message::ReplayPressed, PlayerState::Ended);

        assert_eq!(effect, Effect::RequestReplay);
        assert!(controls.fade.is_waiting());
    }

    #[test]
    fn drag_previews_then_release_commits_exactly_once() {
        let mut controls = MediaControls::default();

        let preview = controls.update(Message::SeekPreview(90.0), PlayerState::Playing);
        assert_eq!(preview, Effect::Seeking(90.0));

        let commit = controls.update(Message::SeekCommit, PlayerState::Playing);
        assert_eq!(
            commit,
            Effect::SeekCommitted {
                position: 90.0,
                request: PlayerState::Paused,
            }
        );

        // Releasing again without a new drag does nothing
        let repeat = controls.update(Message::SeekCommit, PlayerState::Playing);
        assert_eq!(repeat, Effect::None);
    }

    #[test]
    fn seek_commit_couples_to_pause_animation() {
        let mut controls = MediaControls::default();
        controls.update(Message::SeekPreview(30.0), PlayerState::Playing);
        controls.update(Message::SeekCommit, PlayerState::Playing);

        // Committing while playing pins the overlay, same as the button
        assert!((controls.opacity() - 1.0).abs() < f32::EPSILON);
        assert!(!controls.fade.is_waiting());
    }

    #[test]
    fn fullscreen_press_requests_fullscreen() {
        let mut controls = MediaControls::default();
        let effect = controls.update(Message::FullScreenPressed, PlayerState::Playing);
        assert_eq!(effect, Effect::RequestFullScreen);
    }

    #[test]
    fn loading_drives_visibility_when_show_on_load() {
        let mut controls = MediaControls::new(Options {
            show_on_start: false,
            show_on_load: true,
            ..Options::default()
        });

        let shown = controls.update(Message::LoadingChanged(true), PlayerState::Paused);
        assert_eq!(shown, Effect::VisibilityChanged(true));
        assert!(controls.is_loading());

        let done = controls.update(Message::LoadingChanged(false), PlayerState::Paused);
        assert_eq!(done, Effect::None);
        assert!(controls.fade.is_waiting());
        assert!(!controls.is_loading());
    }

    #[test]
    fn loading_changes_are_inert_without_show_on_load() {
        let mut controls = MediaControls::new(hidden_options());
        let effect = controls.update(Message::LoadingChanged(true), PlayerState::Paused);

        assert_eq!(effect, Effect::None);
        assert!(controls.is_loading());
        assert!(!controls.is_visible());
    }

    #[test]
    fn repeated_loading_state_is_deduplicated() {
        let mut controls = MediaControls::new(Options {
            show_on_load: true,
            show_on_start: false,
            ..Options::default()
        });
        controls.update(Message::LoadingChanged(true), PlayerState::Paused);
        let repeat = controls.update(Message::LoadingChanged(true), PlayerState::Paused);
        assert_eq!(repeat, Effect::None);
    }

    #[test]
    fn ticks_spin_the_spinner_while_loading() {
        let mut controls = MediaControls::default();
        controls.update(Message::LoadingChanged(true), PlayerState::Paused);
        controls.update(Message::Tick, PlayerState::Paused);
        controls.update(Message::Tick, PlayerState::Paused);

        assert!(controls.spinner_rotation > 0.0);

        controls.update(Message::LoadingChanged(false), PlayerState::Paused);
        assert!(controls.spinner_rotation.abs() < f32::EPSILON);
    }

    #[test]
    fn tap_toggles_visibility() {
        let mut controls = MediaControls::new(hidden_options());
        let effect = controls.update(Message::OverlayPressed, PlayerState::Playing);

        assert_eq!(effect, Effect::VisibilityChanged(true));
        assert!(controls.is_visible());
    }

    #[test]
    fn view_renders_visible_and_hidden_states() {
        let visible = MediaControls::default();
        let _overlay = visible.view(&playback(PlayerState::Playing));

        let hidden = MediaControls::new(hidden_options());
        let _catcher = hidden.view(&playback(PlayerState::Paused));
    }
}
