use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Step for the price drag widgets.
const PRICE_STEP: f64 = 10.0;

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            // ---- Room types ----
            let header = format!(
                "Room types  ({}/{})",
                state.criteria.room_types.len(),
                dataset.room_types.len()
            );
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("room_types")
                .default_open(true)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_room_types();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_room_types();
                        }
                    });

                    for value in &dataset.room_types {
                        // Swatch-coloured label matching the bar chart.
                        let mut text = RichText::new(value);
                        if let Some(cm) = &state.color_map {
                            text = text.color(cm.color_for(value));
                        }

                        let mut checked = state.criteria.room_types.contains(value);
                        if ui.checkbox(&mut checked, text).changed() {
                            if checked {
                                state.criteria.room_types.insert(value.clone());
                            } else {
                                state.criteria.room_types.remove(value);
                            }
                        }
                    }
                });

            ui.separator();

            // ---- Price range ----
            ui.strong("Price per night");
            ui.horizontal(|ui: &mut Ui| {
                ui.label("Min");
                ui.add(
                    egui::DragValue::new(&mut state.criteria.min_price)
                        .speed(PRICE_STEP)
                        .range(dataset.price_min..=dataset.price_max)
                        .prefix("$"),
                );
                ui.label("Max");
                ui.add(
                    egui::DragValue::new(&mut state.criteria.max_price)
                        .speed(PRICE_STEP)
                        .range(dataset.price_min..=dataset.price_max)
                        .prefix("$"),
                );
            });

            ui.separator();

            // ---- Neighbourhoods ----
            let header = format!(
                "Neighbourhoods  ({}/{})",
                state.criteria.neighbourhoods.len(),
                dataset.neighbourhoods.len()
            );
            egui::CollapsingHeader::new(RichText::new(header).strong())
                .id_salt("neighbourhoods")
                .default_open(false)
                .show(ui, |ui: &mut Ui| {
                    ui.horizontal(|ui: &mut Ui| {
                        if ui.small_button("All").clicked() {
                            state.select_all_neighbourhoods();
                        }
                        if ui.small_button("None").clicked() {
                            state.select_no_neighbourhoods();
                        }
                    });

                    for value in &dataset.neighbourhoods {
                        let mut checked = state.criteria.neighbourhoods.contains(value);
                        if ui.checkbox(&mut checked, value).changed() {
                            if checked {
                                state.criteria.neighbourhoods.insert(value.clone());
                            } else {
                                state.criteria.neighbourhoods.remove(value);
                            }
                        }
                    }
                });

            ui.separator();
            ui.checkbox(&mut state.show_raw_data, "Show filtered raw data");
        });

    // Recompute visible indices after any widget change.
    state.refilter();
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} listings loaded, {} match the filters",
                ds.len(),
                state.visible_indices.len()
            ));
        }

        if state.loading {
            ui.spinner();
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open listings data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path, None);
    }
}
