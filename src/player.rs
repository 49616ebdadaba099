// SPDX-License-Identifier: MPL-2.0
//! Playback-state domain type shared between the host and the overlay.
//!
//! The host owns the actual player; the overlay only reads this value and
//! requests transitions through [`Effect`](crate::overlay::Effect).

/// Host-owned playback state, passed in on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Paused,
    Ended,
}

impl PlayerState {
    /// The state a pause/resume toggle requests from the host.
    ///
    /// `Ended` resolves to `Playing`: committing a seek on a finished video
    /// restarts playback, matching the primary-button semantics.
    #[must_use]
    pub fn pause_toggle_target(self) -> Self {
        match self {
            PlayerState::Playing => PlayerState::Paused,
            PlayerState::Paused | PlayerState::Ended => PlayerState::Playing,
        }
    }

    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, PlayerState::Playing)
    }

    #[must_use]
    pub fn is_ended(self) -> bool {
        matches!(self, PlayerState::Ended)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_target_flips_playing_and_paused() {
        assert_eq!(
            PlayerState::Playing.pause_toggle_target(),
            PlayerState::Paused
        );
        assert_eq!(
            PlayerState::Paused.pause_toggle_target(),
            PlayerState::Playing
        );
    }

    #[test]
    fn toggle_target_restarts_from_ended() {
        assert_eq!(
            PlayerState::Ended.pause_toggle_target(),
            PlayerState::Playing
        );
    }

    #[test]
    fn state_predicates() {
        assert!(PlayerState::Playing.is_playing());
        assert!(!PlayerState::Paused.is_playing());
        assert!(PlayerState::Ended.is_ended());
        assert!(!PlayerState::Playing.is_ended());
    }
}
