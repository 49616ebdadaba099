// SPDX-License-Identifier: MPL-2.0
//! Overlay container and icon styles.

use crate::design_tokens::{faded, opacity, palette};
use iced::widget::{container, svg};
use iced::{Background, Color, Theme};

/// Style for the translucent backdrop behind the controls.
pub fn backdrop(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(faded(
            Color {
                a: opacity::BACKDROP,
                ..palette::BACKDROP
            },
            alpha,
        ))),
        text_color: Some(faded(palette::WHITE, alpha)),
        ..container::Style::default()
    }
}

/// Style for the toolbar row at the top of the overlay.
///
/// The toolbar itself is transparent; host-injected content carries its
/// own styling.
pub fn toolbar(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        text_color: Some(faded(palette::WHITE, alpha)),
        ..container::Style::default()
    }
}

/// Tint for overlay SVG icons.
pub fn icon(color: Color) -> impl Fn(&Theme, svg::Status) -> svg::Style {
    move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) }
}
