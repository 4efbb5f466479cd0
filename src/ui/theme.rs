//! UI theme definitions.

use egui::{Color32, Visuals};

use crate::storage::config::ThemePreference;
use crate::workouts::WorkoutType;

/// Theme configuration for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
        }
    }

    /// Background painted behind map tiles.
    pub fn map_background(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::MAP_BG,
            Theme::Light => LightTheme::MAP_BG,
        }
    }

    /// Fill of marker popups.
    pub fn popup_fill(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::PANEL_BG,
            Theme::Light => LightTheme::PANEL_BG,
        }
    }

    /// Primary text color.
    pub fn text_primary(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::TEXT_PRIMARY,
            Theme::Light => LightTheme::TEXT_PRIMARY,
        }
    }

    /// Secondary text color.
    pub fn text_secondary(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::TEXT_SECONDARY,
            Theme::Light => LightTheme::TEXT_SECONDARY,
        }
    }
}

impl From<ThemePreference> for Theme {
    fn from(preference: ThemePreference) -> Self {
        match preference {
            ThemePreference::Dark => Theme::Dark,
            ThemePreference::Light => Theme::Light,
        }
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(45, 52, 57);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(66, 72, 77);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(80, 87, 92);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(236, 236, 236);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(170, 170, 170);
    /// Map background
    pub const MAP_BG: Color32 = Color32::from_rgb(214, 222, 224);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(96, 102, 107);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    /// Background color
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 252);
    /// Panel background
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    /// Card background
    pub const CARD_BG: Color32 = Color32::from_rgb(240, 242, 243);
    /// Primary text
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(45, 52, 57);
    /// Secondary text
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(110, 116, 120);
    /// Map background
    pub const MAP_BG: Color32 = Color32::from_rgb(236, 240, 241);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(218, 218, 224);
}

/// Accent color for running workouts.
pub const RUNNING_ACCENT: Color32 = Color32::from_rgb(0, 196, 106);
/// Accent color for cycling workouts.
pub const CYCLING_ACCENT: Color32 = Color32::from_rgb(255, 181, 69);

/// Accent color of a workout type.
pub fn workout_accent(workout_type: WorkoutType) -> Color32 {
    match workout_type {
        WorkoutType::Running => RUNNING_ACCENT,
        WorkoutType::Cycling => CYCLING_ACCENT,
    }
}

/// Accent color for a popup style class such as `running-popup`.
pub fn popup_accent(class_name: &str) -> Color32 {
    WorkoutType::ALL
        .iter()
        .find(|t| t.popup_class() == class_name)
        .map(|t| workout_accent(*t))
        .unwrap_or(Color32::GRAY)
}

/// Create dark theme visuals.
fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::BACKGROUND;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::CARD_BG;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::PANEL_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(96, 104, 110);
    visuals.widgets.active.bg_fill = RUNNING_ACCENT;

    visuals.selection.bg_fill = RUNNING_ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = RUNNING_ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}

/// Create light theme visuals.
fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::BACKGROUND;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::CARD_BG;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(226, 230, 232);
    visuals.widgets.active.bg_fill = RUNNING_ACCENT;

    visuals.selection.bg_fill = RUNNING_ACCENT.linear_multiply(0.2);
    visuals.selection.stroke.color = RUNNING_ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}
