//! Workout list: entries rendered for each logged workout.

use egui::{RichText, Ui};
use uuid::Uuid;

use crate::ui::theme::{workout_accent, Theme};
use crate::workouts::{Workout, WorkoutDetails, WorkoutType};

/// Receives each newly created workout for display.
pub trait WorkoutList {
    /// Render a list entry for `workout`.
    fn render_workout(&mut self, workout: &Workout);
}

/// One statistic shown in a list entry.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutStat {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl WorkoutStat {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// Display model of a workout in the list.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkoutListEntry {
    pub id: Uuid,
    pub workout_type: WorkoutType,
    pub title: String,
    pub stats: Vec<WorkoutStat>,
}

impl WorkoutListEntry {
    /// Build the entry for a workout, titled with its description.
    pub fn from_workout(workout: &Workout) -> Self {
        Self::with_title(workout, workout.description())
    }

    /// Build the entry with an explicit title.
    pub fn with_title(workout: &Workout, title: String) -> Self {
        let type_icon = match workout.workout_type() {
            WorkoutType::Running => "🏃",
            WorkoutType::Cycling => "🚴",
        };

        let mut stats = vec![
            WorkoutStat::new(type_icon, workout.distance().to_string(), "km"),
            WorkoutStat::new("⏱", workout.duration().to_string(), "min"),
        ];

        match *workout.details() {
            WorkoutDetails::Running { cadence, pace } => {
                stats.push(WorkoutStat::new("⚡", format!("{:.1}", pace), "min/km"));
                stats.push(WorkoutStat::new("🦶", cadence.to_string(), "spm"));
            }
            WorkoutDetails::Cycling {
                elevation_gain,
                speed,
            } => {
                stats.push(WorkoutStat::new("⚡", format!("{:.1}", speed), "km/h"));
                stats.push(WorkoutStat::new("⛰", elevation_gain.to_string(), "m"));
            }
        }

        Self {
            id: workout.id(),
            workout_type: workout.workout_type(),
            title,
            stats,
        }
    }
}

/// Sidebar list of logged workouts, newest first.
#[derive(Debug, Default)]
pub struct WorkoutListPanel {
    entries: Vec<WorkoutListEntry>,
}

impl WorkoutListPanel {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries in creation order.
    pub fn entries(&self) -> &[WorkoutListEntry] {
        &self.entries
    }

    /// Draw the list.
    pub fn show(&self, ui: &mut Ui, theme: Theme) {
        if self.entries.is_empty() {
            ui.label(RichText::new("No workouts yet").color(theme.text_secondary()));
            return;
        }

        egui::ScrollArea::vertical().show(ui, |ui| {
            for entry in self.entries.iter().rev() {
                egui::Frame::group(ui.style())
                    .stroke(egui::Stroke::new(2.0, workout_accent(entry.workout_type)))
                    .show(ui, |ui| {
                        ui.set_min_width(ui.available_width());
                        ui.label(RichText::new(&entry.title).size(17.0).strong());
                        ui.horizontal_wrapped(|ui| {
                            for stat in &entry.stats {
                                ui.label(stat.icon);
                                ui.label(RichText::new(&stat.value).size(16.0).strong());
                                ui.label(
                                    RichText::new(stat.unit)
                                        .size(12.0)
                                        .color(theme.text_secondary()),
                                );
                                ui.add_space(8.0);
                            }
                        });
                    });
                ui.add_space(6.0);
            }
        });
    }
}

impl WorkoutList for WorkoutListPanel {
    fn render_workout(&mut self, workout: &Workout) {
        self.entries.push(WorkoutListEntry::from_workout(workout));
    }
}
