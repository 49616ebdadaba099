// SPDX-License-Identifier: MPL-2.0
//! `iced_media_controls` is a media-controls overlay for video surfaces
//! built with the Iced GUI framework.
//!
//! It provides the controls layer rendered above video content —
//! play/pause/replay, a seek bar with time labels, an optional fullscreen
//! toggle and a host-injected toolbar slot — with tap-driven fade in/out
//! and auto-hide. The host owns playback; the overlay requests transitions
//! through [`Effect`] values instead of mutating anything itself.

#![doc(html_root_url = "https://docs.rs/iced_media_controls/0.1.0")]

pub mod config;
pub mod design_tokens;
pub mod error;
pub mod icons;
pub mod overlay;
pub mod player;
pub mod styles;
pub mod widgets;

pub use error::{Error, Result};
pub use overlay::{
    toolbar, Effect, FadeOutDelay, MediaControls, Message, Options, Playback,
};
pub use player::PlayerState;
