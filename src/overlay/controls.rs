// SPDX-License-Identifier: MPL-2.0
//! Play/pause/replay button group.
//!
//! Stateless leaf: renders from arguments, no internal state. While the
//! host reports loading, the button is replaced by the animated spinner.

use super::Message;
use crate::design_tokens::{faded, palette, sizing};
use crate::icons;
use crate::player::PlayerState;
use crate::styles;
use crate::widgets::AnimatedSpinner;
use iced::widget::svg::Svg;
use iced::widget::{button, container};
use iced::{Color, Element, Length};

/// Renders the centered button group row.
pub(super) fn view<'a>(
    state: PlayerState,
    loading: bool,
    spinner_rotation: f32,
    accent: Color,
    alpha: f32,
) -> Element<'a, Message> {
    let content: Element<'a, Message> = if loading {
        AnimatedSpinner::new(faded(palette::WHITE, alpha), spinner_rotation).into_element()
    } else {
        let icon = icons::sized(state_icon(state), sizing::ICON_MD)
            .style(styles::overlay::icon(faded(palette::WHITE, alpha)));

        button(container(icon).center_x(Length::Fill).center_y(Length::Fill))
            .on_press(press_message(state))
            .width(Length::Fixed(sizing::PLAY_BUTTON))
            .height(Length::Fixed(sizing::PLAY_BUTTON))
            .style(styles::button::play(accent, alpha))
            .into()
    };

    container(content).center_x(Length::Fill).into()
}

/// Icon for the current playback state: play when paused, pause while
/// playing, replay once ended.
fn state_icon(state: PlayerState) -> Svg<'static> {
    match state {
        PlayerState::Paused => icons::play(),
        PlayerState::Playing => icons::pause(),
        PlayerState::Ended => icons::replay(),
    }
}

/// Press action for the primary button. Ended routes to replay, every
/// other state to the pause/resume toggle.
fn press_message(state: PlayerState) -> Message {
    if state.is_ended() {
        Message::ReplayPressed
    } else {
        Message::PlayPausePressed
    }
}
