//! Geolocation providers driving the controller.

use crate::mock_collaborators::{MapCall, RecordingList, RecordingMap};
use mapty::controller::{ControllerState, WorkoutController, POSITION_UNAVAILABLE_MESSAGE};
use mapty::geolocation::{provider_from_settings, IpGeolocation};
use mapty::storage::config::load_config_from;
use mapty::workouts::Coords;
use std::time::{Duration, Instant};

/// Poll until the controller stops waiting or the deadline passes.
fn wait_for_position(controller: &mut WorkoutController<RecordingMap, RecordingList>) {
    let deadline = Instant::now() + Duration::from_secs(15);
    while controller.state() == ControllerState::AwaitingPosition && Instant::now() < deadline {
        controller.poll_position();
        std::thread::sleep(Duration::from_millis(20));
    }
}

#[test]
fn test_configured_fixed_position_loads_map() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[map]
zoom = 11

[geolocation]
source = "fixed"
fixed_latitude = 46.2
fixed_longitude = 6.15
"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    let provider = provider_from_settings(&config.geolocation);
    assert_eq!(provider.name(), "fixed");

    let mut controller = WorkoutController::new(
        RecordingMap::new(),
        RecordingList::new(),
        config.map.zoom,
    );
    controller.acquire_position(provider.as_ref());

    assert_eq!(controller.state(), ControllerState::MapReady);
    assert_eq!(
        controller.map().calls,
        vec![MapCall::CreateView {
            center: Coords::new(46.2, 6.15),
            zoom: 11
        }]
    );
}

#[test]
fn test_configured_disabled_source_alerts() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[geolocation]\nsource = \"disabled\"\n").unwrap();

    let config = load_config_from(&path).unwrap();
    let provider = provider_from_settings(&config.geolocation);

    let mut controller = WorkoutController::new(RecordingMap::new(), RecordingList::new(), 13);
    controller.acquire_position(provider.as_ref());

    assert_eq!(controller.state(), ControllerState::PositionUnavailable);
    assert_eq!(controller.alert(), Some(POSITION_UNAVAILABLE_MESSAGE));
}

#[test]
fn test_unreachable_lookup_service_fails() {
    // Nothing listens on the discard port locally
    let provider = IpGeolocation::with_url("http://127.0.0.1:9/json/");
    let mut controller = WorkoutController::new(RecordingMap::new(), RecordingList::new(), 13);
    controller.acquire_position(&provider);

    wait_for_position(&mut controller);

    assert_eq!(controller.state(), ControllerState::PositionUnavailable);
    assert_eq!(controller.alert(), Some(POSITION_UNAVAILABLE_MESSAGE));
    assert_eq!(controller.map().view_count(), 0);
}
