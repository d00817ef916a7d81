use eframe::egui;

use crate::state::AppState;
use crate::ui::{chart, map, panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct HarbourViewApp {
    pub state: AppState,
}

impl HarbourViewApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for HarbourViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Bottom panel: raw rows (only when toggled) ----
        if self.state.show_raw_data {
            egui::TopBottomPanel::bottom("raw_data")
                .resizable(true)
                .default_height(240.0)
                .show(ctx, |ui| {
                    table::raw_data_table(ui, &self.state);
                });
        }

        // ---- Central panel: map above bar chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            if self.state.dataset.is_none() {
                ui.centered_and_justified(|ui: &mut egui::Ui| {
                    ui.heading("Open a listings CSV to get started  (File → Open…)");
                });
                return;
            }

            ui.heading("Exploring Sydney Airbnb Data");
            ui.separator();

            let half = ui.available_height() / 2.0;
            ui.allocate_ui(egui::vec2(ui.available_width(), half), |ui: &mut egui::Ui| {
                map::listings_map(ui, &self.state);
            });
            ui.separator();
            chart::count_chart(ui, &self.state);
        });
    }
}
