//! Workout controller: position, map clicks, form submission.
//!
//! All state the interaction needs is owned here and driven from the UI
//! thread. The position request is the only asynchronous step; it is polled
//! from the event loop until it answers.

use super::form::{FormField, WorkoutForm};
use super::types::{
    ControllerError, ControllerState, INVALID_INPUT_MESSAGE, POSITION_UNAVAILABLE_MESSAGE,
};
use crate::geolocation::{GeolocationError, GeolocationProvider, Position, PositionRequest};
use crate::map::{MapWidget, MarkerHandle, PopupOptions};
use crate::ui::widgets::WorkoutList;
use crate::workouts::{Coords, Workout};

/// Mediates between the map, the form and the workout collection.
pub struct WorkoutController<M: MapWidget, L: WorkoutList> {
    state: ControllerState,
    map: M,
    list: L,
    /// Zoom level of the initial map view
    zoom: u8,
    position_request: Option<PositionRequest>,
    /// Location of the last map click, waiting for the form
    pending_coords: Option<Coords>,
    workouts: Vec<Workout>,
    form: WorkoutForm,
    alert: Option<String>,
}

impl<M: MapWidget, L: WorkoutList> WorkoutController<M, L> {
    /// Create a controller waiting for its position.
    pub fn new(map: M, list: L, zoom: u8) -> Self {
        Self {
            state: ControllerState::AwaitingPosition,
            map,
            list,
            zoom,
            position_request: None,
            pending_coords: None,
            workouts: Vec::new(),
            form: WorkoutForm::new(),
            alert: None,
        }
    }

    /// Current interaction state.
    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// Workouts in creation order.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Coordinates of the last map click not yet used by a submission.
    pub fn pending_coords(&self) -> Option<Coords> {
        self.pending_coords
    }

    /// The workout form.
    pub fn form(&self) -> &WorkoutForm {
        &self.form
    }

    /// The workout form, for input.
    pub fn form_mut(&mut self) -> &mut WorkoutForm {
        &mut self.form
    }

    /// The map widget.
    pub fn map(&self) -> &M {
        &self.map
    }

    /// The map widget, for rendering.
    pub fn map_mut(&mut self) -> &mut M {
        &mut self.map
    }

    /// The workout list.
    pub fn list(&self) -> &L {
        &self.list
    }

    /// The alert waiting to be dismissed, if any.
    ///
    /// While an alert is pending, map clicks and submissions are refused.
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Dismiss the pending alert, returning it.
    pub fn dismiss_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    fn ensure_no_alert(&self) -> Result<(), ControllerError> {
        match &self.alert {
            Some(alert) => {
                tracing::debug!("Input ignored while alert is shown: {}", alert);
                Err(ControllerError::AlertPending)
            }
            None => Ok(()),
        }
    }

    /// Ask the provider for the current position, once.
    ///
    /// A provider that answers synchronously is handled immediately;
    /// otherwise the answer arrives through [`poll_position`](Self::poll_position).
    pub fn acquire_position(&mut self, provider: &dyn GeolocationProvider) {
        if self.state != ControllerState::AwaitingPosition || self.position_request.is_some() {
            tracing::warn!("Position already requested, ignoring");
            return;
        }

        tracing::info!("Requesting current position from {} provider", provider.name());

        match provider.request_current_position() {
            Ok(request) => {
                self.position_request = Some(request);
                self.poll_position();
            }
            Err(e) => self.position_failed(e),
        }
    }

    /// Deliver the position answer if it has arrived.
    ///
    /// Returns true when the request completed during this call.
    pub fn poll_position(&mut self) -> bool {
        let Some(result) = self.position_request.as_ref().and_then(|r| r.poll()) else {
            return false;
        };
        self.position_request = None;

        match result {
            Ok(position) => self.load_map(position),
            Err(e) => self.position_failed(e),
        }
        true
    }

    fn load_map(&mut self, position: Position) {
        tracing::info!("Position found: {}", position.maps_link());
        self.map.create_view(position.coords(), self.zoom);
        self.state = ControllerState::MapReady;
    }

    fn position_failed(&mut self, error: GeolocationError) {
        let error = ControllerError::PositionUnavailable(error);
        tracing::warn!("{}", error);
        self.alert = Some(POSITION_UNAVAILABLE_MESSAGE.to_string());
        self.state = ControllerState::PositionUnavailable;
    }

    /// Open the form for a clicked map location.
    ///
    /// A click while the form is open replaces the pending location.
    pub fn handle_map_click(&mut self, coords: Coords) -> Result<(), ControllerError> {
        self.ensure_no_alert()?;
        match self.state {
            ControllerState::MapReady | ControllerState::FormOpen => {}
            ControllerState::AwaitingPosition | ControllerState::PositionUnavailable => {
                tracing::debug!("Map click at {} ignored: no map", coords);
                return Err(ControllerError::MapUnavailable);
            }
        }

        tracing::debug!("Map clicked at {}", coords);
        self.pending_coords = Some(coords);
        self.state = ControllerState::FormOpen;
        self.form.show();
        self.form.focus(FormField::Distance);
        Ok(())
    }

    /// Swap the cadence and elevation rows after a type change.
    pub fn toggle_elevation_field(&mut self) {
        self.form.toggle_elevation_field();
    }

    /// Validate the form and log a workout at the pending location.
    ///
    /// On invalid input an alert is raised and the form stays open with its
    /// values untouched.
    pub fn submit_workout(&mut self) -> Result<&Workout, ControllerError> {
        self.ensure_no_alert()?;
        let coords = match (self.state, self.pending_coords) {
            (ControllerState::FormOpen, Some(coords)) => coords,
            _ => return Err(ControllerError::FormNotOpen),
        };

        let workout = match self.form.values().into_workout(coords) {
            Ok(workout) => workout,
            Err(e) => {
                tracing::debug!("Rejected workout form: {}", e);
                self.alert = Some(INVALID_INPUT_MESSAGE.to_string());
                return Err(e);
            }
        };

        tracing::info!(
            "New {} workout {} at {}",
            workout.workout_type(),
            workout.id(),
            workout.coords()
        );
        tracing::debug!(?workout);

        let index = self.workouts.len();
        self.workouts.push(workout);
        let workout = &self.workouts[index];

        render_workout_marker(&mut self.map, workout);
        self.list.render_workout(workout);

        self.form.clear_inputs();
        self.form.hide();
        self.pending_coords = None;
        self.state = ControllerState::MapReady;

        Ok(&self.workouts[index])
    }
}

/// Add a workout's marker with an open, sticky popup labeled by its type.
pub fn render_workout_marker<M: MapWidget>(map: &mut M, workout: &Workout) -> MarkerHandle {
    let workout_type = workout.workout_type();
    let marker = map.add_marker(workout.coords());
    map.bind_popup(marker, PopupOptions::for_workout(workout_type));
    map.set_popup_content(marker, workout_type.as_str());
    map.open_popup(marker);
    marker
}
