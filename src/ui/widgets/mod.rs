//! Reusable UI widgets.

pub mod workout_form;
pub mod workout_list;

pub use workout_form::{FormAction, WorkoutFormPanel};
pub use workout_list::{WorkoutList, WorkoutListEntry, WorkoutListPanel, WorkoutStat};
