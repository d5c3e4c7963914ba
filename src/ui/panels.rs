use eframe::egui::{self, Color32, RichText, Ui};

use crate::color;
use crate::data::aggregate::DerivedView;
use crate::data::model::MetricValue;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top bar: title plus dataset summary.
pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        ui.heading(RichText::new("COVID-19 Dashboard").strong());
        ui.separator();
        ui.label(format!(
            "{} countries across {} WHO regions",
            state.dataset.countries.len(),
            state.dataset.regions.len()
        ));
    });
}

// ---------------------------------------------------------------------------
// Filter row – country selector + dependent region display
// ---------------------------------------------------------------------------

/// Render the two dropdowns. The country selector drives everything; the
/// region selector only mirrors the derived region and stays disabled.
pub fn filter_row(ui: &mut Ui, state: &mut AppState) {
    // Selection is applied after the combo closure so the dataset can be
    // borrowed while the options render.
    let mut new_selection: Option<Option<String>> = None;

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Select Country");
        let selected_text = state
            .selected_country
            .clone()
            .unwrap_or_else(|| "None".to_string());

        egui::ComboBox::from_id_salt("country_filter")
            .width(220.0)
            .selected_text(selected_text)
            .show_ui(ui, |ui: &mut Ui| {
                if ui
                    .selectable_label(state.selected_country.is_none(), "None")
                    .clicked()
                {
                    new_selection = Some(None);
                }
                for country in &state.dataset.countries {
                    let is_selected =
                        state.selected_country.as_deref() == Some(country.as_str());
                    if ui.selectable_label(is_selected, country).clicked() {
                        new_selection = Some(Some(country.clone()));
                    }
                }
            });

        ui.add_space(16.0);

        ui.label("WHO Region");
        ui.add_enabled_ui(false, |ui: &mut Ui| {
            egui::ComboBox::from_id_salt("region_display")
                .width(220.0)
                .selected_text(state.view.region.clone())
                .show_ui(ui, |_ui| {});
        });
    });

    if let Some(selection) = new_selection {
        state.select_country(selection);
    }
}

// ---------------------------------------------------------------------------
// Metric cards
// ---------------------------------------------------------------------------

/// Render the three summary cards from the current view.
pub fn metric_cards(ui: &mut Ui, view: &DerivedView) {
    ui.columns(3, |cols: &mut [Ui]| {
        metric_card(
            &mut cols[0],
            "Total Confirmed Cases:",
            view.total_confirmed,
            color::CONFIRMED_ACCENT,
        );
        metric_card(
            &mut cols[1],
            "Total Deaths:",
            view.total_deaths,
            color::DEATHS_ACCENT,
        );
        metric_card(
            &mut cols[2],
            "Total Recovered:",
            view.total_recovered,
            color::RECOVERED_ACCENT,
        );
    });
}

fn metric_card(ui: &mut Ui, title: &str, value: MetricValue, accent: Color32) {
    egui::Frame::new()
        .fill(color::CARD_BACKGROUND)
        .corner_radius(6)
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui: &mut Ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(title).strong().size(16.0).color(accent));
                ui.add_space(4.0);
                ui.label(
                    RichText::new(value.to_string())
                        .strong()
                        .size(26.0)
                        .color(accent),
                );
            });
        });
}
