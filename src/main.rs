mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::Path;

use anyhow::Context;
use app::CovidDashApp;
use eframe::egui;

/// The dataset is a fixed snapshot read from the working directory.
const DATA_FILE: &str = "covid_data.csv";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let dataset = data::loader::load_csv(Path::new(DATA_FILE))
        .with_context(|| format!("loading {DATA_FILE}"))?;
    log::info!(
        "Loaded {} countries across {} WHO regions",
        dataset.countries.len(),
        dataset.regions.len()
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "COVID-19 Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(CovidDashApp::new(dataset)))),
    )
    .map_err(|e| anyhow::anyhow!("running dashboard: {e}"))
}
