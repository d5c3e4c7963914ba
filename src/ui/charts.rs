use eframe::egui::{Sense, Shape, Stroke, Ui, Vec2};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::color::RegionColors;
use crate::data::aggregate::DerivedView;
use crate::data::model::format_count;

// ---------------------------------------------------------------------------
// Bar chart – recovered cases per WHO region
// ---------------------------------------------------------------------------

/// Render the recovered-by-region bar chart from the current view.
pub fn recovered_bar_chart(ui: &mut Ui, view: &DerivedView, colors: &RegionColors) {
    ui.strong("Recovered Cases by WHO Region");

    if view.bar_data.is_empty() {
        ui.label("No data for the current selection.");
        return;
    }

    // One single-bar chart per region so each gets its own legend entry.
    let bar_charts: Vec<BarChart> = view
        .bar_data
        .iter()
        .enumerate()
        .map(|(i, (region, total))| {
            let bar = Bar::new(i as f64, *total as f64).width(0.6).name(region);
            BarChart::new(vec![bar])
                .color(colors.color_for(region))
                .name(region)
        })
        .collect();

    let labels: Vec<String> = view.bar_data.iter().map(|(r, _)| r.clone()).collect();

    Plot::new("recovered_bar_chart")
        .legend(Legend::default())
        .height(340.0)
        .y_axis_label("Recovered")
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .x_axis_formatter(move |mark, _range| {
            // Only label whole bar positions.
            if (mark.value - mark.value.round()).abs() > 1e-6 || mark.value < 0.0 {
                return String::new();
            }
            labels
                .get(mark.value.round() as usize)
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for chart in bar_charts {
                plot_ui.bar_chart(chart);
            }
        });
}

// ---------------------------------------------------------------------------
// Pie chart – metric distribution per WHO region
// ---------------------------------------------------------------------------

/// Render a pie of `data` (region, count) with a legend alongside.
pub fn pie_chart(ui: &mut Ui, title: &str, data: &[(String, u64)], colors: &RegionColors) {
    ui.strong(title);

    let total: u64 = data.iter().map(|(_, n)| n).sum();
    if total == 0 {
        ui.label("No data for the current selection.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        let size = 160.0;
        let (response, painter) = ui.allocate_painter(Vec2::splat(size), Sense::hover());
        let center = response.rect.center();
        let radius = size * 0.48;

        // Slices start at 12 o'clock and go clockwise, painted as small
        // triangle wedges so any sweep angle renders correctly.
        let mut angle = -std::f32::consts::FRAC_PI_2;
        for (region, count) in data {
            if *count == 0 {
                continue;
            }
            let sweep = (*count as f32 / total as f32) * std::f32::consts::TAU;
            let steps = ((sweep / 0.05).ceil() as usize).max(2);
            let fill = colors.color_for(region);

            let point_at = |a: f32| center + radius * Vec2::new(a.cos(), a.sin());
            for s in 0..steps {
                let a0 = angle + sweep * s as f32 / steps as f32;
                let a1 = angle + sweep * (s + 1) as f32 / steps as f32;
                painter.add(Shape::convex_polygon(
                    vec![center, point_at(a0), point_at(a1)],
                    fill,
                    Stroke::NONE,
                ));
            }
            angle += sweep;
        }

        // Legend with per-slice share.
        ui.vertical(|ui: &mut Ui| {
            for (region, count) in data {
                let share = 100.0 * *count as f64 / total as f64;
                ui.horizontal(|ui: &mut Ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(Vec2::splat(10.0), Sense::hover());
                    ui.painter().rect_filled(swatch, 2, colors.color_for(region));
                    ui.label(format!(
                        "{region}: {} ({share:.1}%)",
                        format_count(*count)
                    ));
                });
            }
        });
    });
}
