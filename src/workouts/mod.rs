//! Workout domain model.

pub mod types;

pub use types::{
    calc_pace, calc_speed, derived_metric, Coords, Workout, WorkoutDetails, WorkoutType, MONTHS,
};
