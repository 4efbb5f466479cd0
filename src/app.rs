//! Main application state and egui integration.
//!
//! Feeds the three event sources (position answer, map clicks, form
//! submissions) into the workout controller once per frame. Alerts are
//! modal: nothing behind them takes input until they are dismissed.

use eframe::egui;
use std::time::Duration;

use mapty::controller::{ControllerState, WorkoutController};
use mapty::geolocation::provider_from_settings;
use mapty::map::{http_tiles, TileMap};
use mapty::storage::config::AppConfig;
use mapty::ui::theme::Theme;
use mapty::ui::widgets::{FormAction, WorkoutFormPanel, WorkoutListPanel};

/// How often to check for the position answer while waiting.
const POSITION_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Main application state.
pub struct MaptyApp {
    /// Workout controller owning map, list and form
    controller: WorkoutController<TileMap, WorkoutListPanel>,
    /// UI theme
    theme: Theme,
}

impl MaptyApp {
    /// Create a new application instance and request the position.
    pub fn new(cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let theme = Theme::from(config.ui.theme);
        cc.egui_ctx.set_visuals(theme.visuals());
        if (config.ui.font_scale - 1.0).abs() > f32::EPSILON {
            cc.egui_ctx.set_zoom_factor(config.ui.font_scale);
        }

        let tiles = http_tiles(&config.map, &config.data_dir, cc.egui_ctx.clone());
        let mut controller = WorkoutController::new(
            TileMap::new(config.map.max_zoom).with_tiles(tiles),
            WorkoutListPanel::new(),
            config.map.zoom,
        );

        let provider = provider_from_settings(&config.geolocation);
        controller.acquire_position(provider.as_ref());

        Self { controller, theme }
    }

    /// Render the sidebar with form and workout list.
    fn render_sidebar(&mut self, ui: &mut egui::Ui) {
        ui.add_space(12.0);
        ui.heading(egui::RichText::new("Mapty").size(28.0).strong());
        ui.add_space(12.0);

        match WorkoutFormPanel::show(ui, self.controller.form_mut()) {
            FormAction::TypeChanged => self.controller.toggle_elevation_field(),
            FormAction::Submit => {
                if let Err(e) = self.controller.submit_workout() {
                    tracing::debug!("Submission failed: {}", e);
                }
            }
            FormAction::None => {}
        }

        ui.add_space(12.0);
        self.controller.list().show(ui, self.theme);
    }

    /// Render the pending alert as a modal dialog.
    fn render_alert(&mut self, ctx: &egui::Context) {
        let Some(message) = self.controller.alert() else {
            return;
        };
        let message = message.to_string();

        let modal = egui::Modal::new(egui::Id::new("alert")).show(ctx, |ui| {
            ui.set_min_width(280.0);
            ui.heading("Mapty");
            ui.add_space(8.0);
            ui.label(egui::RichText::new(&message).size(16.0));
            ui.add_space(12.0);
            ui.button("OK").clicked()
        });

        if modal.inner || modal.should_close() {
            self.controller.dismiss_alert();
        }
    }
}

impl eframe::App for MaptyApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.controller.poll_position() {
            ctx.request_repaint();
        } else if self.controller.state() == ControllerState::AwaitingPosition {
            ctx.request_repaint_after(POSITION_POLL_INTERVAL);
        }

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .exact_width(360.0)
            .show(ctx, |ui| self.render_sidebar(ui));

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                ui.label(self.controller.state().to_string());
                ui.separator();
                ui.label(format!("{} workouts", self.controller.workouts().len()));
            });
        });

        let theme = self.theme;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                if let Some(coords) = self.controller.map_mut().show(ui, theme) {
                    match self.controller.handle_map_click(coords) {
                        Ok(()) => ctx.request_repaint(),
                        Err(e) => tracing::debug!("Map click rejected: {}", e),
                    }
                }
            });

        // Alerts render on top of everything
        self.render_alert(ctx);
    }
}
