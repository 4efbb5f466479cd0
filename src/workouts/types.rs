//! Workout domain types.
//!
//! A workout is a closed set of variants sharing a common record. The derived
//! metric of each variant (pace for runs, speed for rides) is computed once at
//! construction and never updated afterwards.

use chrono::{DateTime, Datelike, Local, NaiveDate, Utc};
use uuid::Uuid;

/// Full month names used in workout descriptions.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Geographic coordinates in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coords {
    /// Latitude in degrees (-90 to 90)
    pub lat: f64,
    /// Longitude in degrees (-180 to 180)
    pub lng: f64,
}

impl Coords {
    /// Create a coordinate pair.
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coords {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl std::fmt::Display for Coords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.5}, {:.5}", self.lat, self.lng)
    }
}

/// Kind of workout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WorkoutType {
    /// Run, measured by pace
    #[default]
    Running,
    /// Bike ride, measured by speed
    Cycling,
}

impl WorkoutType {
    /// All workout types in selector order.
    pub const ALL: [WorkoutType; 2] = [WorkoutType::Running, WorkoutType::Cycling];

    /// Lowercase type tag, as shown in marker popups.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    /// Capitalized label for titles and selectors.
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    /// Style class attached to this type's marker popups.
    pub fn popup_class(&self) -> String {
        format!("{}-popup", self.as_str())
    }
}

impl std::fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pace in minutes per kilometer.
pub fn calc_pace(distance_km: f64, duration_min: f64) -> f64 {
    duration_min / distance_km
}

/// Speed in kilometers per hour.
pub fn calc_speed(distance_km: f64, duration_min: f64) -> f64 {
    distance_km / (duration_min / 60.0)
}

/// Derived metric for a workout type: pace for running, speed for cycling.
pub fn derived_metric(workout_type: WorkoutType, distance_km: f64, duration_min: f64) -> f64 {
    match workout_type {
        WorkoutType::Running => calc_pace(distance_km, duration_min),
        WorkoutType::Cycling => calc_speed(distance_km, duration_min),
    }
}

/// Variant-specific fields of a workout.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutDetails {
    /// Run with cadence and cached pace
    Running {
        /// Steps per minute
        cadence: f64,
        /// Minutes per kilometer
        pace: f64,
    },
    /// Ride with elevation gain and cached speed
    Cycling {
        /// Meters climbed
        elevation_gain: f64,
        /// Kilometers per hour
        speed: f64,
    },
}

impl WorkoutDetails {
    /// The type tag of this variant.
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            WorkoutDetails::Running { .. } => WorkoutType::Running,
            WorkoutDetails::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// A logged workout.
///
/// Fields are read-only after construction. Constructors trust their inputs;
/// validation belongs to the caller.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: Uuid,
    created_at: DateTime<Utc>,
    coords: Coords,
    distance: f64,
    duration: f64,
    details: WorkoutDetails,
}

impl Workout {
    /// Create a run and compute its pace.
    pub fn running(coords: Coords, distance: f64, duration: f64, cadence: f64) -> Self {
        let pace = derived_metric(WorkoutType::Running, distance, duration);
        Self::with_details(
            coords,
            distance,
            duration,
            WorkoutDetails::Running { cadence, pace },
        )
    }

    /// Create a ride and compute its speed.
    pub fn cycling(coords: Coords, distance: f64, duration: f64, elevation_gain: f64) -> Self {
        let speed = derived_metric(WorkoutType::Cycling, distance, duration);
        Self::with_details(
            coords,
            distance,
            duration,
            WorkoutDetails::Cycling {
                elevation_gain,
                speed,
            },
        )
    }

    fn with_details(coords: Coords, distance: f64, duration: f64, details: WorkoutDetails) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            coords,
            distance,
            duration,
            details,
        }
    }

    /// Unique identifier.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Where the workout happened.
    pub fn coords(&self) -> Coords {
        self.coords
    }

    /// Distance in kilometers.
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Duration in minutes.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Variant-specific fields.
    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    /// Type discriminant.
    pub fn workout_type(&self) -> WorkoutType {
        self.details.workout_type()
    }

    /// Pace in min/km, for runs.
    pub fn pace(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { pace, .. } => Some(pace),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Cadence in steps/min, for runs.
    pub fn cadence(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Running { cadence, .. } => Some(cadence),
            WorkoutDetails::Cycling { .. } => None,
        }
    }

    /// Speed in km/h, for rides.
    pub fn speed(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { speed, .. } => Some(speed),
            WorkoutDetails::Running { .. } => None,
        }
    }

    /// Elevation gain in meters, for rides.
    pub fn elevation_gain(&self) -> Option<f64> {
        match self.details {
            WorkoutDetails::Cycling { elevation_gain, .. } => Some(elevation_gain),
            WorkoutDetails::Running { .. } => None,
        }
    }

    /// Human-readable title, e.g. "Running on April 14", in local time.
    pub fn description(&self) -> String {
        self.description_on(self.created_at.with_timezone(&Local).date_naive())
    }

    /// Title for the workout as if it happened on `date`.
    pub fn description_on(&self, date: NaiveDate) -> String {
        format!(
            "{} on {} {}",
            self.workout_type().label(),
            MONTHS[date.month0() as usize],
            date.day()
        )
    }
}
