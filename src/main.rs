mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use app::HarbourViewApp;
use eframe::egui;
use state::AppState;

/// Dataset loaded at startup when present in the working directory.
const DEFAULT_DATA_PATH: &str = "listings_syd_Mar2020.csv";

fn main() -> eframe::Result {
    env_logger::init();

    let mut state = AppState::default();
    let default_path = Path::new(DEFAULT_DATA_PATH);
    if default_path.exists() {
        state.load_path(default_path, None);
    } else {
        log::info!("Default dataset {DEFAULT_DATA_PATH} not found, waiting for File → Open…");
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Harbourview – Sydney Airbnb Explorer",
        options,
        Box::new(move |_cc| Ok(Box::new(HarbourViewApp::new(state)))),
    )
}
