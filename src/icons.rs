// SPDX-License-Identifier: MPL-2.0
//! Centralized icon module for the overlay's SVG icons.
//!
//! Icons are embedded at compile time via `include_bytes!` and handles are
//! cached using `OnceLock`. Tinting happens at the style layer
//! ([`styles::overlay::icon`](crate::styles::overlay::icon)), so a single
//! asset serves every color and fade level.
//!
//! Icons use generic visual names describing the icon's appearance,
//! not the action context.

use iced::widget::svg::{Handle, Svg};
use iced::Length;
use std::sync::OnceLock;

/// Defines an icon function with a cached SVG handle.
macro_rules! define_icon {
    ($name:ident, $filename:literal, $doc:literal) => {
        #[doc = $doc]
        pub fn $name() -> Svg<'static> {
            static HANDLE: OnceLock<Handle> = OnceLock::new();
            static DATA: &[u8] = include_bytes!(concat!("../assets/icons/", $filename));
            let handle = HANDLE.get_or_init(|| Handle::from_memory(DATA));
            Svg::new(handle.clone())
        }
    };
}

define_icon!(play, "play.svg", "Play icon: triangle pointing right.");
define_icon!(pause, "pause.svg", "Pause icon: two vertical bars.");
define_icon!(replay, "replay.svg", "Replay icon: circular arrow.");
define_icon!(
    fullscreen,
    "fullscreen.svg",
    "Fullscreen icon: four corners pointing outward."
);

/// Sets a square size on an icon.
pub fn sized(icon: Svg<'static>, size: f32) -> Svg<'static> {
    icon.width(Length::Fixed(size)).height(Length::Fixed(size))
}
