//! Marker pins and popups drawn over the map.

use egui::{Color32, FontId, Painter, Pos2, Rect, Response, Shape, Stroke, Ui, Vec2};
use walkers::{lat_lon, MapMemory, Plugin, Projector};

use super::PopupOptions;
use crate::ui::theme::{popup_accent, Theme};
use crate::workouts::Coords;

const PIN_RADIUS: f32 = 8.0;
const PIN_HEIGHT: f32 = 22.0;
const POPUP_PADDING: f32 = 10.0;
const POPUP_ACCENT_WIDTH: f32 = 5.0;
const DEFAULT_PIN_COLOR: Color32 = Color32::from_rgb(66, 133, 244);

/// Popup bound to a marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub options: PopupOptions,
    pub content: String,
    pub open: bool,
}

#[derive(Debug, Clone)]
pub(crate) struct Marker {
    pub(crate) coords: Coords,
    pub(crate) popup: Option<Popup>,
}

/// Wrap a longitude into `[-180, 180)`.
pub fn normalize_lng(lng: f64) -> f64 {
    (lng + 180.0).rem_euclid(360.0) - 180.0
}

/// Longitude of the copy of `lng` closest to `center_lng`.
///
/// After panning across the antimeridian the view center leaves
/// `[-180, 180)`; markers follow it instead of jumping a world away.
pub fn nearest_world_copy(lng: f64, center_lng: f64) -> f64 {
    lng + 360.0 * ((center_lng - lng) / 360.0).round()
}

/// Width of a popup whose text is `content_width` wide.
///
/// `max_width` wins over `min_width` when the two conflict.
pub fn popup_width(content_width: f32, options: &PopupOptions) -> f32 {
    (content_width + 2.0 * POPUP_PADDING + POPUP_ACCENT_WIDTH)
        .max(options.min_width)
        .min(options.max_width)
}

/// Draws markers and their open popups, recording the popup areas so
/// clicks on them don't reach the map.
pub(crate) struct MarkerLayer<'a> {
    markers: &'a [Marker],
    theme: Theme,
    popup_rects: &'a mut Vec<Rect>,
}

impl<'a> MarkerLayer<'a> {
    pub(crate) fn new(markers: &'a [Marker], theme: Theme, popup_rects: &'a mut Vec<Rect>) -> Self {
        Self {
            markers,
            theme,
            popup_rects,
        }
    }
}

impl Plugin for MarkerLayer<'_> {
    fn run(
        self: Box<Self>,
        ui: &mut Ui,
        response: &Response,
        projector: &Projector,
        _map_memory: &MapMemory,
    ) {
        let MarkerLayer {
            markers,
            theme,
            popup_rects,
        } = *self;
        let painter = ui.painter();
        let center_lng = projector.unproject(response.rect.center().to_vec2()).x();

        for marker in markers {
            let lng = nearest_world_copy(marker.coords.lng, center_lng);
            let tip = projector.project(lat_lon(marker.coords.lat, lng)).to_pos2();
            let accent = marker
                .popup
                .as_ref()
                .map(|p| popup_accent(&p.options.class_name))
                .unwrap_or(DEFAULT_PIN_COLOR);

            paint_pin(painter, tip, accent);

            if let Some(popup) = marker.popup.as_ref().filter(|p| p.open) {
                popup_rects.push(paint_popup(painter, popup, tip, accent, theme));
            }
        }
    }
}

fn paint_pin(painter: &Painter, tip: Pos2, accent: Color32) {
    let head = tip - Vec2::new(0.0, PIN_HEIGHT - PIN_RADIUS);
    painter.line_segment([head, tip], Stroke::new(3.0, accent));
    painter.circle_filled(head, PIN_RADIUS, accent);
    painter.circle_filled(head, PIN_RADIUS / 3.0, Color32::WHITE);
}

/// Draw a popup above a marker tip and return the area it covers.
fn paint_popup(painter: &Painter, popup: &Popup, tip: Pos2, accent: Color32, theme: Theme) -> Rect {
    let options = &popup.options;
    let inner_max = (options.max_width - 2.0 * POPUP_PADDING - POPUP_ACCENT_WIDTH).max(1.0);
    let galley = painter.layout(
        popup.content.clone(),
        FontId::proportional(15.0),
        theme.text_primary(),
        inner_max,
    );

    let width = popup_width(galley.size().x, options);
    let height = galley.size().y + 2.0 * POPUP_PADDING;
    let bottom = tip.y - PIN_HEIGHT - 10.0;
    let rect = Rect::from_min_size(
        Pos2::new(tip.x - width / 2.0, bottom - height),
        Vec2::new(width, height),
    );

    painter.rect_filled(rect, 6.0, theme.popup_fill());
    painter.rect_filled(
        Rect::from_min_size(rect.min, Vec2::new(POPUP_ACCENT_WIDTH, height)),
        2.0,
        accent,
    );
    painter.add(Shape::convex_polygon(
        vec![
            Pos2::new(tip.x - 8.0, bottom),
            Pos2::new(tip.x + 8.0, bottom),
            Pos2::new(tip.x, bottom + 8.0),
        ],
        theme.popup_fill(),
        Stroke::NONE,
    ));
    painter.galley(
        rect.min + Vec2::new(POPUP_ACCENT_WIDTH + POPUP_PADDING, POPUP_PADDING),
        galley,
        theme.text_primary(),
    );

    rect
}
