//! End-to-end controller flow: position, map clicks, form submission.

use crate::mock_collaborators::{MapCall, ManualGeolocation, RecordingList, RecordingMap};
use mapty::controller::{
    ControllerError, ControllerState, FormField, WorkoutController, INVALID_INPUT_MESSAGE,
    POSITION_UNAVAILABLE_MESSAGE,
};
use mapty::geolocation::{DisabledGeolocation, FixedGeolocation, GeolocationError, Position};
use mapty::map::{MarkerHandle, PopupOptions};
use mapty::workouts::{Coords, WorkoutType};
use std::collections::HashSet;

type TestController = WorkoutController<RecordingMap, RecordingList>;

fn controller() -> TestController {
    WorkoutController::new(RecordingMap::new(), RecordingList::new(), 13)
}

/// Controller with its map loaded at a fixed position.
fn ready_controller() -> TestController {
    let mut controller = controller();
    controller.acquire_position(&FixedGeolocation::new(Position::new(38.72, -9.14)));
    assert_eq!(controller.state(), ControllerState::MapReady);
    controller
}

fn fill_running(controller: &mut TestController, distance: &str, duration: &str, cadence: &str) {
    let form = controller.form_mut();
    form.workout_type = WorkoutType::Running;
    form.distance = distance.to_string();
    form.duration = duration.to_string();
    form.cadence = cadence.to_string();
}

fn select_cycling(controller: &mut TestController, distance: &str, duration: &str, elevation: &str) {
    controller.form_mut().workout_type = WorkoutType::Cycling;
    controller.toggle_elevation_field();
    let form = controller.form_mut();
    form.distance = distance.to_string();
    form.duration = duration.to_string();
    form.elevation = elevation.to_string();
}

#[test]
fn test_position_loads_map() {
    let controller = ready_controller();

    assert_eq!(
        controller.map().calls,
        vec![MapCall::CreateView {
            center: Coords::new(38.72, -9.14),
            zoom: 13
        }]
    );
    assert!(controller.alert().is_none());
    assert!(!controller.form().is_visible());
}

#[test]
fn test_unsupported_geolocation_alerts() {
    let mut controller = controller();
    controller.acquire_position(&DisabledGeolocation);

    assert_eq!(controller.state(), ControllerState::PositionUnavailable);
    assert_eq!(controller.alert(), Some(POSITION_UNAVAILABLE_MESSAGE));
    assert_eq!(controller.map().view_count(), 0);
}

#[test]
fn test_pending_position_keeps_waiting() {
    let provider = ManualGeolocation::new();
    let mut controller = controller();
    controller.acquire_position(&provider);

    assert_eq!(controller.state(), ControllerState::AwaitingPosition);
    assert!(!controller.poll_position());
    assert!(!controller.poll_position());
    assert_eq!(controller.state(), ControllerState::AwaitingPosition);
    assert!(controller.alert().is_none());

    let responder = provider.take_responder().unwrap();
    responder.resolve(Ok(Position::new(51.5, -0.12)));

    assert!(controller.poll_position());
    assert_eq!(controller.state(), ControllerState::MapReady);
    assert_eq!(controller.map().view_count(), 1);
    assert!(!controller.poll_position());
}

#[test]
fn test_denied_position_alerts() {
    let provider = ManualGeolocation::new();
    let mut controller = controller();
    controller.acquire_position(&provider);

    provider
        .take_responder()
        .unwrap()
        .resolve(Err(GeolocationError::Denied("user declined".to_string())));

    assert!(controller.poll_position());
    assert_eq!(controller.state(), ControllerState::PositionUnavailable);
    assert_eq!(
        controller.dismiss_alert().as_deref(),
        Some(POSITION_UNAVAILABLE_MESSAGE)
    );
    assert!(controller.alert().is_none());
}

#[test]
fn test_dropped_responder_counts_as_failure() {
    let provider = ManualGeolocation::new();
    let mut controller = controller();
    controller.acquire_position(&provider);
    drop(provider.take_responder());

    assert!(controller.poll_position());
    assert_eq!(controller.state(), ControllerState::PositionUnavailable);
}

#[test]
fn test_position_requested_once() {
    let mut controller = ready_controller();
    controller.acquire_position(&FixedGeolocation::new(Position::new(0.0, 0.0)));

    assert_eq!(controller.map().view_count(), 1);
    assert_eq!(controller.state(), ControllerState::MapReady);
}

#[test]
fn test_click_before_position_rejected() {
    let mut controller = controller();
    let result = controller.handle_map_click(Coords::new(1.0, 2.0));

    assert_eq!(result, Err(ControllerError::MapUnavailable));
    assert!(controller.pending_coords().is_none());
    assert!(!controller.form().is_visible());
}

#[test]
fn test_click_after_failure_rejected() {
    let mut controller = controller();
    controller.acquire_position(&DisabledGeolocation);

    assert_eq!(
        controller.handle_map_click(Coords::new(1.0, 2.0)),
        Err(ControllerError::AlertPending)
    );
    controller.dismiss_alert();
    assert_eq!(
        controller.handle_map_click(Coords::new(1.0, 2.0)),
        Err(ControllerError::MapUnavailable)
    );
    assert_eq!(controller.state(), ControllerState::PositionUnavailable);
}

#[test]
fn test_click_opens_form_with_focus() {
    let mut controller = ready_controller();
    controller.handle_map_click(Coords::new(38.7, -9.1)).unwrap();

    assert_eq!(controller.state(), ControllerState::FormOpen);
    assert_eq!(controller.pending_coords(), Some(Coords::new(38.7, -9.1)));
    assert!(controller.form().is_visible());
    assert_eq!(
        controller.form_mut().take_focus_request(),
        Some(FormField::Distance)
    );
}

#[test]
fn test_running_submission() {
    let mut controller = ready_controller();
    controller.handle_map_click(Coords::new(38.7, -9.1)).unwrap();
    fill_running(&mut controller, "5.2", "24", "178");

    let workout = controller.submit_workout().unwrap();
    assert_eq!(workout.workout_type(), WorkoutType::Running);
    assert!((workout.pace().unwrap() - 4.615).abs() < 1e-3);
    let id = workout.id();

    assert_eq!(controller.workouts().len(), 1);
    assert_eq!(controller.list().rendered, vec![id]);
    assert_eq!(controller.state(), ControllerState::MapReady);
    assert!(controller.pending_coords().is_none());
    assert!(!controller.form().is_visible());
}

#[test]
fn test_marker_popup_calls() {
    let mut controller = ready_controller();
    controller.handle_map_click(Coords::new(40.0, -8.0)).unwrap();
    select_cycling(&mut controller, "27", "95", "523");
    controller.submit_workout().unwrap();

    let marker = MarkerHandle(0);
    assert_eq!(
        controller.map().calls[1..],
        [
            MapCall::AddMarker(Coords::new(40.0, -8.0)),
            MapCall::BindPopup(marker, PopupOptions::for_workout(WorkoutType::Cycling)),
            MapCall::SetPopupContent(marker, "cycling".to_string()),
            MapCall::OpenPopup(marker),
        ]
    );

    let options = PopupOptions::for_workout(WorkoutType::Cycling);
    assert_eq!(options.class_name, "cycling-popup");
    assert!(!options.auto_close);
    assert!(!options.close_on_click);
}

#[test]
fn test_second_click_replaces_pending_location() {
    let mut controller = ready_controller();
    controller.handle_map_click(Coords::new(10.0, 10.0)).unwrap();
    controller.handle_map_click(Coords::new(20.0, 20.0)).unwrap();
    fill_running(&mut controller, "3", "18", "170");

    let workout = controller.submit_workout().unwrap();
    assert_eq!(workout.coords(), Coords::new(20.0, 20.0));
    assert_eq!(
        controller.map().marker_coords(),
        vec![Coords::new(20.0, 20.0)]
    );
}

#[test]
fn test_zero_cadence_rejected_and_form_kept() {
    let mut controller = ready_controller();
    controller.handle_map_click(Coords::new(5.0, 5.0)).unwrap();
    fill_running(&mut controller, "5", "25", "0");

    assert_eq!(
        controller.submit_workout().err(),
        Some(ControllerError::InvalidWorkoutInput)
    );
    assert_eq!(controller.alert(), Some(INVALID_INPUT_MESSAGE));
    assert_eq!(controller.state(), ControllerState::FormOpen);
    assert!(controller.form().is_visible());
    assert_eq!(controller.form().cadence, "0");
    assert_eq!(controller.form().distance, "5");
    assert!(controller.workouts().is_empty());
    assert!(controller.list().rendered.is_empty());
    assert_eq!(controller.map().marker_coords().len(), 0);
}

#[test]
fn test_alert_blocks_input_until_dismissed() {
    let mut controller = ready_controller();
    controller.handle_map_click(Coords::new(5.0, 5.0)).unwrap();
    fill_running(&mut controller, "5", "25", "-3");
    assert!(controller.submit_workout().is_err());

    // Fixing the input does not help while the alert is shown
    controller.form_mut().cadence = "170".to_string();
    assert_eq!(
        controller.submit_workout().err(),
        Some(ControllerError::AlertPending)
    );
    assert_eq!(
        controller.handle_map_click(Coords::new(6.0, 6.0)),
        Err(ControllerError::AlertPending)
    );
    assert_eq!(controller.pending_coords(), Some(Coords::new(5.0, 5.0)));
    assert!(controller.workouts().is_empty());

    assert_eq!(controller.dismiss_alert().as_deref(), Some(INVALID_INPUT_MESSAGE));
    assert!(controller.alert().is_none());

    let workout = controller.submit_workout().unwrap();
    assert_eq!(workout.coords(), Coords::new(5.0, 5.0));
    assert_eq!(workout.cadence(), Some(170.0));
}

#[test]
fn test_cycling_zero_elevation_accepted() {
    let mut controller = ready_controller();
    controller.handle_map_click(Coords::new(5.0, 5.0)).unwrap();
    select_cycling(&mut controller, "20", "60", "0");

    let workout = controller.submit_workout().unwrap();
    assert_eq!(workout.elevation_gain(), Some(0.0));
    assert_eq!(workout.speed(), Some(20.0));
}

#[test]
fn test_submit_without_click_rejected() {
    let mut controller = ready_controller();
    fill_running(&mut controller, "5", "25", "170");

    assert_eq!(
        controller.submit_workout().err(),
        Some(ControllerError::FormNotOpen)
    );
    assert!(controller.workouts().is_empty());
}

#[test]
fn test_submission_clears_inputs_except_elevation() {
    let mut controller = ready_controller();
    controller.handle_map_click(Coords::new(5.0, 5.0)).unwrap();
    select_cycling(&mut controller, "20", "60", "300");
    controller.submit_workout().unwrap();

    let form = controller.form();
    assert!(form.distance.is_empty());
    assert!(form.duration.is_empty());
    assert!(form.cadence.is_empty());
    assert_eq!(form.elevation, "300");
}

#[test]
fn test_toggle_swaps_rows() {
    let mut controller = ready_controller();
    assert!(controller.form().is_cadence_visible());
    assert!(!controller.form().is_elevation_visible());

    controller.toggle_elevation_field();
    assert!(!controller.form().is_cadence_visible());
    assert!(controller.form().is_elevation_visible());

    controller.toggle_elevation_field();
    assert!(controller.form().is_cadence_visible());
}

#[test]
fn test_many_submissions_keep_order() {
    let mut controller = ready_controller();
    let mut expected = Vec::new();

    for i in 0..10 {
        let coords = Coords::new(i as f64, -(i as f64));
        controller.handle_map_click(coords).unwrap();
        if i % 2 == 0 {
            fill_running(&mut controller, &format!("{}", i + 1), "30", "170");
            expected.push((coords, WorkoutType::Running));
        } else {
            let form = controller.form_mut();
            form.workout_type = WorkoutType::Cycling;
            form.distance = format!("{}", i * 3);
            form.duration = "45".to_string();
            form.elevation = "120".to_string();
            expected.push((coords, WorkoutType::Cycling));
        }
        controller.submit_workout().unwrap();
    }

    let workouts = controller.workouts();
    assert_eq!(workouts.len(), 10);
    for (workout, (coords, workout_type)) in workouts.iter().zip(&expected) {
        assert_eq!(workout.coords(), *coords);
        assert_eq!(workout.workout_type(), *workout_type);
    }

    let ids: HashSet<_> = workouts.iter().map(|w| w.id()).collect();
    assert_eq!(ids.len(), 10);

    let rendered: Vec<_> = workouts.iter().map(|w| w.id()).collect();
    assert_eq!(controller.list().rendered, rendered);
    assert_eq!(
        controller.map().marker_coords(),
        expected.iter().map(|(c, _)| *c).collect::<Vec<_>>()
    );
}
