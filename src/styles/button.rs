// SPDX-License-Identifier: MPL-2.0
//! Button styles for the overlay controls.

use crate::design_tokens::{faded, opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style for the round primary play/pause/replay button.
///
/// Filled with the host accent color; hover and press raise the accent's
/// own alpha before the fade factor is applied, so the button stays
/// legible mid-fade.
pub fn play(accent: Color, alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let base = match status {
            button::Status::Hovered => Color {
                a: opacity::HOVER.max(accent.a),
                ..accent
            },
            button::Status::Pressed => Color {
                a: opacity::PRESSED,
                ..accent
            },
            _ => accent,
        };

        button::Style {
            background: Some(Background::Color(faded(base, alpha))),
            text_color: faded(palette::WHITE, alpha),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::PILL.into(),
            },
            snap: true,
            ..button::Style::default()
        }
    }
}

/// Style for borderless icon buttons (fullscreen toggle).
pub fn icon(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => Some(Background::Color(faded(
                Color {
                    a: 0.15,
                    ..palette::WHITE
                },
                alpha,
            ))),
            _ => None,
        };

        button::Style {
            background,
            text_color: faded(palette::WHITE, alpha),
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: radius::SM.into(),
            },
            snap: true,
            ..button::Style::default()
        }
    }
}
