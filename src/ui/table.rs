use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Raw filtered rows (bottom panel, behind the sidebar toggle)
// ---------------------------------------------------------------------------

const HEADER_HEIGHT: f32 = 20.0;
const ROW_HEIGHT: f32 = 18.0;

/// Render the filtered listings as a plain table.
pub fn raw_data_table(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    ui.heading("Filtered Raw Data");
    ui.add_space(4.0);

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .column(Column::remainder().at_least(160.0))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .header(HEADER_HEIGHT, |mut header| {
            for title in [
                "Name",
                "Room type",
                "Price",
                "Neighbourhood",
                "Latitude",
                "Longitude",
                "Last review",
            ] {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, state.visible_indices.len(), |mut row| {
                let listing = &dataset.listings[state.visible_indices[row.index()]];
                row.col(|ui| {
                    ui.label(&listing.name);
                });
                row.col(|ui| {
                    ui.label(&listing.room_type);
                });
                row.col(|ui| {
                    ui.label(format!("${}", listing.price));
                });
                row.col(|ui| {
                    ui.label(&listing.neighbourhood);
                });
                row.col(|ui| {
                    ui.label(format!("{:.5}", listing.latitude));
                });
                row.col(|ui| {
                    ui.label(format!("{:.5}", listing.longitude));
                });
                row.col(|ui| {
                    ui.label(listing.last_review.to_string());
                });
            });
        });
}
