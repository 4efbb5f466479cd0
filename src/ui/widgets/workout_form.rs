//! Workout entry form panel.

use egui::{Key, RichText, TextEdit, Ui};

use crate::controller::{FormField, WorkoutForm};
use crate::workouts::WorkoutType;

/// What the user did with the form this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    None,
    /// The type selector changed
    TypeChanged,
    /// Enter pressed or OK clicked
    Submit,
}

/// Renders a [`WorkoutForm`] and reports user actions.
pub struct WorkoutFormPanel;

impl WorkoutFormPanel {
    /// Draw the form if it is visible.
    pub fn show(ui: &mut Ui, form: &mut WorkoutForm) -> FormAction {
        if !form.is_visible() {
            return FormAction::None;
        }

        let focus = form.take_focus_request();
        let mut action = FormAction::None;
        let mut enter_pressed = false;

        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("workout_form")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Type");
                    let before = form.workout_type;
                    egui::ComboBox::from_id_salt("workout_type")
                        .selected_text(before.label())
                        .show_ui(ui, |ui| {
                            for workout_type in WorkoutType::ALL {
                                ui.selectable_value(
                                    &mut form.workout_type,
                                    workout_type,
                                    workout_type.label(),
                                );
                            }
                        });
                    if form.workout_type != before {
                        action = FormAction::TypeChanged;
                    }
                    ui.end_row();

                    let rows = [
                        (FormField::Distance, "Distance", "km", true),
                        (FormField::Duration, "Duration", "min", true),
                        (FormField::Cadence, "Cadence", "step/min", form.is_cadence_visible()),
                        (FormField::Elevation, "Elev Gain", "meters", form.is_elevation_visible()),
                    ];

                    for (field, label, hint, visible) in rows {
                        if !visible {
                            continue;
                        }
                        ui.label(label);
                        let value = match field {
                            FormField::Distance => &mut form.distance,
                            FormField::Duration => &mut form.duration,
                            FormField::Cadence => &mut form.cadence,
                            _ => &mut form.elevation,
                        };
                        let response =
                            ui.add(TextEdit::singleline(value).hint_text(hint).desired_width(140.0));
                        if focus == Some(field) {
                            response.request_focus();
                        }
                        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
                            enter_pressed = true;
                        }
                        ui.end_row();
                    }
                });

            ui.add_space(6.0);
            if ui.button(RichText::new("OK").strong()).clicked() {
                enter_pressed = true;
            }
        });

        if enter_pressed {
            action = FormAction::Submit;
        }

        action
    }
}
