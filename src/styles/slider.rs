// SPDX-License-Identifier: MPL-2.0
//! Seek-bar styles: the timeline slider and its time labels.

use crate::design_tokens::{faded, palette, sizing};
use iced::widget::slider;
use iced::{Background, Border, Color, Theme};

/// Style for the seek slider.
///
/// The elapsed portion of the rail takes the host accent color, the
/// remaining portion the neutral track gray of the original widget.
pub fn seek(accent: Color, alpha: f32) -> impl Fn(&Theme, slider::Status) -> slider::Style {
    move |_theme: &Theme, status: slider::Status| {
        let handle_radius = match status {
            slider::Status::Hovered | slider::Status::Dragged => 8.0,
            _ => 6.0,
        };

        slider::Style {
            rail: slider::Rail {
                backgrounds: (
                    Background::Color(faded(accent, alpha)),
                    Background::Color(faded(palette::TRACK, alpha)),
                ),
                width: sizing::RAIL,
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: (sizing::RAIL / 2.0).into(),
                },
            },
            handle: slider::Handle {
                shape: slider::HandleShape::Circle {
                    radius: handle_radius,
                },
                background: Background::Color(faded(palette::WHITE, alpha)),
                border_width: 0.0,
                border_color: Color::TRANSPARENT,
            },
        }
    }
}

/// Text style for the progress/duration labels flanking the slider.
pub fn time_label(alpha: f32) -> impl Fn(&Theme) -> iced::widget::text::Style {
    move |_theme: &Theme| iced::widget::text::Style {
        color: Some(faded(palette::WHITE, alpha)),
    }
}
