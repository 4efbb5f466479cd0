//! Workout form state and submission rules.
//!
//! The form holds raw text exactly as typed. Values are coerced to numbers
//! only on submission, with the same rules a browser applies to `+input`:
//! surrounding whitespace is ignored, an empty field reads as `0` and
//! anything unparsable reads as `NaN`.

use super::types::ControllerError;
use crate::workouts::{Coords, Workout, WorkoutType};

/// Input fields of the workout form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Type,
    Distance,
    Duration,
    Cadence,
    Elevation,
}

/// Workout form contents and visibility.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutForm {
    /// Selected workout type
    pub workout_type: WorkoutType,
    /// Distance input (km)
    pub distance: String,
    /// Duration input (min)
    pub duration: String,
    /// Cadence input (steps/min)
    pub cadence: String,
    /// Elevation gain input (m)
    pub elevation: String,
    visible: bool,
    cadence_visible: bool,
    elevation_visible: bool,
    focus_request: Option<FormField>,
}

impl Default for WorkoutForm {
    fn default() -> Self {
        Self {
            workout_type: WorkoutType::Running,
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
            visible: false,
            cadence_visible: true,
            elevation_visible: false,
            focus_request: None,
        }
    }
}

impl WorkoutForm {
    /// Create a hidden, empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reveal the form.
    pub fn show(&mut self) {
        self.visible = true;
    }

    /// Hide the form.
    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Whether the form is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Ask the UI to focus a field on its next frame.
    pub fn focus(&mut self, field: FormField) {
        self.focus_request = Some(field);
    }

    /// Take the pending focus request, if any.
    pub fn take_focus_request(&mut self) -> Option<FormField> {
        self.focus_request.take()
    }

    /// Whether the cadence row is shown.
    pub fn is_cadence_visible(&self) -> bool {
        self.cadence_visible
    }

    /// Whether the elevation row is shown.
    pub fn is_elevation_visible(&self) -> bool {
        self.elevation_visible
    }

    /// Swap visibility of the cadence and elevation rows.
    pub fn toggle_elevation_field(&mut self) {
        self.elevation_visible = !self.elevation_visible;
        self.cadence_visible = !self.cadence_visible;
    }

    /// Clear distance, duration and cadence. Elevation is left as typed.
    pub fn clear_inputs(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
    }

    /// Read the numeric values of the current inputs.
    pub fn values(&self) -> FormValues {
        FormValues {
            workout_type: self.workout_type,
            distance: coerce_number(&self.distance),
            duration: coerce_number(&self.duration),
            cadence: coerce_number(&self.cadence),
            elevation: coerce_number(&self.elevation),
        }
    }
}

/// Numeric snapshot of the form at submission time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormValues {
    pub workout_type: WorkoutType,
    pub distance: f64,
    pub duration: f64,
    pub cadence: f64,
    pub elevation: f64,
}

impl FormValues {
    /// Check the submission rules for the selected type.
    ///
    /// Runs need finite, positive distance, duration and cadence. Rides need
    /// finite distance, duration and elevation, but only distance and
    /// duration must be positive, so a zero or negative elevation passes.
    pub fn validate(&self) -> Result<(), ControllerError> {
        let valid = match self.workout_type {
            WorkoutType::Running => {
                let inputs = [self.distance, self.duration, self.cadence];
                all_finite(&inputs) && all_positive(&inputs)
            }
            WorkoutType::Cycling => {
                all_finite(&[self.distance, self.duration, self.elevation])
                    && all_positive(&[self.distance, self.duration])
            }
        };

        if valid {
            Ok(())
        } else {
            Err(ControllerError::InvalidWorkoutInput)
        }
    }

    /// Validate and build the workout for `coords`.
    pub fn into_workout(self, coords: Coords) -> Result<Workout, ControllerError> {
        self.validate()?;

        Ok(match self.workout_type {
            WorkoutType::Running => {
                Workout::running(coords, self.distance, self.duration, self.cadence)
            }
            WorkoutType::Cycling => {
                Workout::cycling(coords, self.distance, self.duration, self.elevation)
            }
        })
    }
}

/// Convert raw input text to a number.
pub fn coerce_number(input: &str) -> f64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// True when every value is a finite number.
pub fn all_finite(inputs: &[f64]) -> bool {
    inputs.iter().all(|v| v.is_finite())
}

/// True when every value is strictly positive.
pub fn all_positive(inputs: &[f64]) -> bool {
    inputs.iter().all(|v| *v > 0.0)
}
