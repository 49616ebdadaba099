// SPDX-License-Identifier: MPL-2.0
//! Seek bar with time labels and optional fullscreen button.
//!
//! Stateless leaf. The slider is bound to whole seconds — progress and
//! duration are floored before use, like the integer-range native slider
//! the original widget wrapped. Dragging emits a continuous preview
//! message; releasing commits the seek.

use super::{Message, Playback};
use crate::design_tokens::{faded, palette, sizing, spacing};
use crate::icons;
use crate::styles;
use iced::widget::{button, column, row, slider, text, Row, Space};
use iced::{Alignment, Color, Element, Length};

/// Renders the bottom row: time labels over the slider, plus the
/// fullscreen button when enabled.
pub(super) fn view<'a>(
    playback: &Playback,
    seek_preview: Option<f64>,
    accent: Color,
    alpha: f32,
    hide_seekbar: bool,
    enable_fullscreen: bool,
) -> Element<'a, Message> {
    let mut bottom: Row<'a, Message> = Row::new()
        .spacing(spacing::SM)
        .align_y(Alignment::Center)
        .width(Length::Fill);

    if hide_seekbar {
        bottom = bottom.push(Space::new().width(Length::Fill));
    } else {
        let duration = playback.duration_secs.max(0.0).floor();
        // While scrubbing, the progress label previews the drag position
        // instead of actual playback time
        let position = seek_preview
            .unwrap_or(playback.progress_secs)
            .clamp(0.0, duration)
            .floor();

        let labels = row![
            text(humanize_duration(position))
                .size(sizing::LABEL_TEXT)
                .style(styles::slider::time_label(alpha)),
            Space::new().width(Length::Fill),
            text(humanize_duration(duration))
                .size(sizing::LABEL_TEXT)
                .style(styles::slider::time_label(alpha)),
        ]
        .width(Length::Fill);

        let timeline = slider(0.0..=duration, position, Message::SeekPreview)
            .on_release(Message::SeekCommit)
            .step(1.0)
            .width(Length::Fill)
            .style(styles::slider::seek(accent, alpha));

        bottom = bottom.push(
            column![labels, timeline]
                .spacing(spacing::XXS)
                .width(Length::Fill),
        );
    }

    if enable_fullscreen {
        let icon: Element<'static, Message> = icons::sized(icons::fullscreen(), sizing::ICON_SM)
            .style(styles::overlay::icon(faded(palette::WHITE, alpha)))
            .into();
        bottom = bottom.push(
            button(icon)
                .on_press(Message::FullScreenPressed)
                .padding(spacing::XXS)
                .style(styles::button::icon(alpha)),
        );
    }

    bottom.into()
}

/// Formats seconds for the time labels.
///
/// Below one hour the label reads `MM:SS`; from one hour on it grows to
/// `HH:MM:SS`. Both forms are zero-padded.
fn humanize_duration(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if total_secs >= 3600 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
