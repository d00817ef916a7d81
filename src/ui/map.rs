use eframe::egui::{Color32, Ui};
use egui_plot::{MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Geographic scatter map (central panel, top half)
// ---------------------------------------------------------------------------

/// Marker radius, fixed for all points.
const POINT_RADIUS: f32 = 3.0;

/// Pointer must be within this many degrees of a listing for the hover
/// tooltip to pick it up (~1 km at Sydney's latitude).
const HOVER_RANGE_DEGREES: f64 = 0.01;

/// Render the filtered listings as points at (longitude, latitude).
pub fn listings_map(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    // Owned snapshot so the tooltip closure does not borrow the state.
    let tooltips: Vec<([f64; 2], String)> = state
        .visible_indices
        .iter()
        .map(|&i| {
            let l = &dataset.listings[i];
            (
                [l.longitude, l.latitude],
                format!(
                    "{}\n{} · {}\n${} per night",
                    l.name, l.room_type, l.neighbourhood, l.price
                ),
            )
        })
        .collect();

    let coords: Vec<[f64; 2]> = tooltips.iter().map(|(pos, _)| *pos).collect();
    let points = Points::new(PlotPoints::from(coords))
        .name("Listings")
        .shape(MarkerShape::Circle)
        .filled(true)
        .radius(POINT_RADIUS)
        .color(Color32::from_rgba_unmultiplied(255, 0, 0, 75));

    Plot::new("listings_map")
        .data_aspect(1.0)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .label_formatter(move |_name, pointer| {
            nearest_tooltip(&tooltips, pointer)
                .unwrap_or_else(|| format!("{:.4}, {:.4}", pointer.x, pointer.y))
        })
        .show(ui, |plot_ui| {
            plot_ui.points(points);
        });
}

/// Details of the listing closest to the pointer, if any is in range.
fn nearest_tooltip(tooltips: &[([f64; 2], String)], pointer: &PlotPoint) -> Option<String> {
    let mut best: Option<(f64, &str)> = None;
    for ([x, y], text) in tooltips {
        let d2 = (x - pointer.x).powi(2) + (y - pointer.y).powi(2);
        if best.map_or(true, |(bd2, _)| d2 < bd2) {
            best = Some((d2, text.as_str()));
        }
    }
    match best {
        Some((d2, text)) if d2.sqrt() <= HOVER_RANGE_DEGREES => Some(text.to_string()),
        _ => None,
    }
}
