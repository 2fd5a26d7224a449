mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use eframe::egui;

use app::LaptopLensApp;
use state::AppState;

/// Default dataset location, relative to the working directory.
const DATA_PATH: &str = "data/laptop_price.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Load once at startup; any load error is fatal before the window opens.
    let dataset = data::loader::load_csv(Path::new(DATA_PATH))
        .with_context(|| format!("loading {DATA_PATH}"))?;
    log::info!(
        "Loaded {} laptops across {} companies",
        dataset.len(),
        dataset.companies.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 860.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Laptop Lens – Price Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(LaptopLensApp::new(AppState::new(dataset))))),
    )
    .map_err(|e| anyhow::anyhow!("event loop failed: {e}"))
}
