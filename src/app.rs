use eframe::egui;

use crate::color::RegionColors;
use crate::data::model::CaseDataset;
use crate::state::AppState;
use crate::ui::{charts, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct CovidDashApp {
    pub state: AppState,
    /// Region colours fixed at startup so all charts agree.
    colors: RegionColors,
}

impl CovidDashApp {
    pub fn new(dataset: CaseDataset) -> Self {
        let colors = RegionColors::new(&dataset.regions);
        Self {
            state: AppState::new(dataset),
            colors,
        }
    }
}

impl eframe::App for CovidDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: filters, cards, charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            panels::filter_row(ui, &mut self.state);
            ui.add_space(8.0);
            panels::metric_cards(ui, &self.state.view);
            ui.add_space(12.0);
            ui.separator();
            ui.add_space(8.0);

            // Bar chart on the left, the two pies stacked on the right.
            ui.columns(2, |cols: &mut [egui::Ui]| {
                charts::recovered_bar_chart(&mut cols[0], &self.state.view, &self.colors);

                charts::pie_chart(
                    &mut cols[1],
                    "Confirmed Distribution by WHO Region",
                    &self.state.view.pie_confirmed,
                    &self.colors,
                );
                cols[1].add_space(12.0);
                charts::pie_chart(
                    &mut cols[1],
                    "Deaths Distribution by WHO Region",
                    &self.state.view.pie_deaths,
                    &self.colors,
                );
            });
        });
    }
}
