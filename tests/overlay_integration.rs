// SPDX-License-Identifier: MPL-2.0
//! End-to-end exercises of the public overlay API, driven the way a host
//! application would drive it.

use iced_media_controls::{
    config, Effect, MediaControls, Message, Options, Playback, PlayerState,
};
use tempfile::tempdir;

fn playback(state: PlayerState, progress_secs: f64, duration_secs: f64) -> Playback {
    Playback {
        state,
        progress_secs,
        duration_secs,
    }
}

#[test]
fn seek_scenario_commits_position_then_toggles_playback() {
    // duration=120, progress=45: drag to 90 and release
    let mut controls = MediaControls::new(Options::default());
    let snapshot = playback(PlayerState::Playing, 45.0, 120.0);
    let _ = controls.view(&snapshot);

    assert_eq!(
        controls.update(Message::SeekPreview(90.0), snapshot.state),
        Effect::Seeking(90.0)
    );
    assert_eq!(
        controls.update(Message::SeekCommit, snapshot.state),
        Effect::SeekCommitted {
            position: 90.0,
            request: PlayerState::Paused,
        }
    );
    // The commit fires exactly once per release
    assert_eq!(
        controls.update(Message::SeekCommit, snapshot.state),
        Effect::None
    );
}

#[test]
fn ended_primary_button_replays_instead_of_pausing() {
    let mut controls = MediaControls::new(Options::default());
    let effect = controls.update(Message::ReplayPressed, PlayerState::Ended);
    assert_eq!(effect, Effect::RequestReplay);
}

#[test]
fn tap_mounts_hidden_controls_immediately() {
    let mut controls = MediaControls::new(Options {
        show_on_start: false,
        ..Options::default()
    });
    assert!(!controls.is_visible());

    let effect = controls.update(Message::OverlayPressed, PlayerState::Playing);
    assert_eq!(effect, Effect::VisibilityChanged(true));
    assert!(controls.is_visible());
    // Mounted before the fade finishes: still mostly transparent
    assert!(controls.opacity() < 0.5);
}

#[test]
fn show_immediate_always_yields_full_opacity() {
    let mut controls = MediaControls::new(Options {
        show_on_start: false,
        ..Options::default()
    });
    controls.update(Message::OverlayPressed, PlayerState::Playing);

    let effect = controls.show_immediate();
    assert_eq!(effect, Effect::None); // already mounted by the tap
    assert!((controls.opacity() - 1.0).abs() < f32::EPSILON);
    assert!(controls.is_visible());
}

#[test]
fn hidden_seekbar_still_renders_overlay() {
    let controls = MediaControls::new(Options {
        hide_seekbar: true,
        ..Options::default()
    });
    let _overlay = controls.view(&playback(PlayerState::Paused, 0.0, 0.0));
}

#[test]
fn persisted_config_drives_overlay_options() {
    let dir = tempdir().expect("failed to create temporary directory");
    let path = dir.path().join("media_controls.toml");

    let saved = config::Config {
        fade_out_delay_ms: Some(2_500),
        show_on_start: Some(false),
        show_on_load: Some(true),
        hide_seekbar: Some(false),
        main_color: Some("rgba(12, 83, 175, 0.9)".to_string()),
    };
    config::save_to_path(&saved, &path).expect("failed to save config");

    let loaded = config::load_from_path(&path).expect("failed to load config");
    let options = Options::from_config(&loaded).expect("config must convert");

    assert_eq!(options.fade_out_delay.millis(), 2_500);
    assert!(!options.show_on_start);
    assert!(options.show_on_load);

    let controls = MediaControls::new(options);
    assert!(!controls.is_visible());
}
