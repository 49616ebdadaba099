// SPDX-License-Identifier: MPL-2.0
//! Demo host: a fake video surface driving the media-controls overlay.
//!
//! Playback is simulated with a timer; the overlay is composed over the
//! surface exactly the way a real player would do it, with the toolbar
//! slot stacked on top as an independent piece.

use std::time::Duration;

use iced::widget::{button, container, row, stack, text, Space};
use iced::{time, Alignment, Background, Color, Element, Length, Subscription, Task, Theme};
use iced_media_controls::{
    config, overlay::toolbar, Effect, MediaControls, Options, Playback, PlayerState,
};

/// Simulated playback advance per tick.
const TICK: Duration = Duration::from_millis(100);

fn main() -> iced::Result {
    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(|_state: &App| Theme::Dark)
        .subscription(App::subscription)
        .run()
}

struct App {
    controls: MediaControls,
    player_state: PlayerState,
    progress_secs: f64,
    duration_secs: f64,
    fullscreen: bool,
}

#[derive(Debug, Clone)]
enum Message {
    Controls(iced_media_controls::Message),
    PlaybackTick,
}

impl App {
    fn new() -> (Self, Task<Message>) {
        let loaded = config::load().unwrap_or_default();
        let options = Options::from_config(&loaded).unwrap_or_else(|_| Options {
            enable_fullscreen: true,
            ..Options::default()
        });
        let options = Options {
            enable_fullscreen: true,
            ..options
        };

        let app = App {
            controls: MediaControls::new(options),
            player_state: PlayerState::Playing,
            progress_secs: 0.0,
            duration_secs: 120.0,
            fullscreen: false,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        if self.fullscreen {
            String::from("media controls demo — fullscreen")
        } else {
            String::from("media controls demo")
        }
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Controls(msg) => {
                match self.controls.update(msg, self.player_state) {
                    Effect::RequestPlayerState(state) => self.player_state = state,
                    Effect::RequestReplay => {
                        self.progress_secs = 0.0;
                        self.player_state = PlayerState::Playing;
                    }
                    Effect::SeekCommitted { position, request } => {
                        self.progress_secs = position;
                        self.player_state = request;
                    }
                    Effect::RequestFullScreen => self.fullscreen = !self.fullscreen,
                    Effect::Seeking(_) | Effect::VisibilityChanged(_) | Effect::None => {}
                }
                Task::none()
            }
            Message::PlaybackTick => {
                if self.player_state.is_playing() {
                    self.progress_secs += TICK.as_secs_f64();
                    if self.progress_secs >= self.duration_secs {
                        self.progress_secs = self.duration_secs;
                        self.player_state = PlayerState::Ended;
                    }
                }
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let playback = Playback {
            state: self.player_state,
            progress_secs: self.progress_secs,
            duration_secs: self.duration_secs,
        };

        // Stand-in for the video surface
        let surface = container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_theme: &Theme| container::Style {
                background: Some(Background::Color(Color::BLACK)),
                ..container::Style::default()
            });

        let overlay = self.controls.view(&playback).map(Message::Controls);

        let mut layers = stack![surface, overlay];
        if self.controls.is_visible() {
            let toolbar_content = row![
                text("Big Buck Bunny").size(14.0),
                Space::new().width(Length::Fill),
                button(text("Replay").size(12.0)).on_press(Message::Controls(
                    iced_media_controls::Message::ReplayPressed
                )),
            ]
            .align_y(Alignment::Center);
            layers = layers.push(toolbar::view(toolbar_content, self.controls.opacity()));
        }

        layers.into()
    }

    fn subscription(&self) -> Subscription<Message> {
        let playback = if self.player_state.is_playing() {
            time::every(TICK).map(|_| Message::PlaybackTick)
        } else {
            Subscription::none()
        };
        Subscription::batch([
            playback,
            self.controls.subscription().map(Message::Controls),
        ])
    }
}
