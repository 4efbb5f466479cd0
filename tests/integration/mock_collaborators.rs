//! Recording stand-ins for the map and the workout list.
//!
//! Each call is stored so tests can assert on exactly what the controller
//! asked its collaborators to do.

use mapty::geolocation::{
    GeolocationError, GeolocationProvider, PositionRequest, PositionResponder,
};
use mapty::map::{MapWidget, MarkerHandle, PopupOptions};
use mapty::ui::widgets::WorkoutList;
use mapty::workouts::{Coords, Workout};
use std::cell::RefCell;
use uuid::Uuid;

/// A call made on [`RecordingMap`].
#[derive(Debug, Clone, PartialEq)]
pub enum MapCall {
    CreateView { center: Coords, zoom: u8 },
    AddMarker(Coords),
    BindPopup(MarkerHandle, PopupOptions),
    SetPopupContent(MarkerHandle, String),
    OpenPopup(MarkerHandle),
}

/// Map that records every call.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub calls: Vec<MapCall>,
    next_marker: usize,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Coordinates of every marker added, in order.
    pub fn marker_coords(&self) -> Vec<Coords> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                MapCall::AddMarker(coords) => Some(*coords),
                _ => None,
            })
            .collect()
    }

    /// Number of views created.
    pub fn view_count(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, MapCall::CreateView { .. }))
            .count()
    }
}

impl MapWidget for RecordingMap {
    fn create_view(&mut self, center: Coords, zoom: u8) {
        self.calls.push(MapCall::CreateView { center, zoom });
    }

    fn add_marker(&mut self, coords: Coords) -> MarkerHandle {
        let handle = MarkerHandle(self.next_marker);
        self.next_marker += 1;
        self.calls.push(MapCall::AddMarker(coords));
        handle
    }

    fn bind_popup(&mut self, marker: MarkerHandle, options: PopupOptions) {
        self.calls.push(MapCall::BindPopup(marker, options));
    }

    fn set_popup_content(&mut self, marker: MarkerHandle, content: &str) {
        self.calls
            .push(MapCall::SetPopupContent(marker, content.to_string()));
    }

    fn open_popup(&mut self, marker: MarkerHandle) {
        self.calls.push(MapCall::OpenPopup(marker));
    }
}

/// List that records the ids of rendered workouts.
#[derive(Debug, Default)]
pub struct RecordingList {
    pub rendered: Vec<Uuid>,
}

impl RecordingList {
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkoutList for RecordingList {
    fn render_workout(&mut self, workout: &Workout) {
        self.rendered.push(workout.id());
    }
}

/// Provider whose answer is delivered by the test.
#[derive(Default)]
pub struct ManualGeolocation {
    responder: RefCell<Option<PositionResponder>>,
}

impl ManualGeolocation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the responder handed out by the last request.
    pub fn take_responder(&self) -> Option<PositionResponder> {
        self.responder.borrow_mut().take()
    }
}

impl GeolocationProvider for ManualGeolocation {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn request_current_position(&self) -> Result<PositionRequest, GeolocationError> {
        let (responder, request) = PositionRequest::channel();
        *self.responder.borrow_mut() = Some(responder);
        Ok(request)
    }
}
