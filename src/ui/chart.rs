use std::collections::HashMap;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Plot};

use crate::data::aggregate::{count_by_group, neighbourhoods_by_total};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Stacked bar chart (central panel, bottom half)
// ---------------------------------------------------------------------------

const BAR_WIDTH: f64 = 0.7;

/// Render listing counts per neighbourhood, stacked by room type.
/// Neighbourhoods are ordered by descending total count.
pub fn count_chart(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    let groups = count_by_group(dataset, &state.visible_indices);
    let hood_order = neighbourhoods_by_total(&groups);

    let mut counts: HashMap<(&str, &str), usize> = HashMap::new();
    for g in &groups {
        counts.insert((g.room_type.as_str(), g.neighbourhood.as_str()), g.count);
    }

    // One chart per room type, each stacked on the ones before it.
    let mut charts: Vec<BarChart> = Vec::new();
    for room_type in &dataset.room_types {
        let bars: Vec<Bar> = hood_order
            .iter()
            .enumerate()
            .map(|(x, hood)| {
                let count = counts
                    .get(&(room_type.as_str(), hood.as_str()))
                    .copied()
                    .unwrap_or(0);
                Bar::new(x as f64, count as f64).width(BAR_WIDTH).name(hood)
            })
            .collect();

        let color = state
            .color_map
            .as_ref()
            .map(|cm| cm.color_for(room_type))
            .unwrap_or(Color32::LIGHT_BLUE);

        let mut chart = BarChart::new(bars).name(room_type).color(color);
        {
            let below: Vec<&BarChart> = charts.iter().collect();
            chart = chart.stack_on(&below);
        }
        charts.push(chart);
    }

    let labels = hood_order.clone();
    Plot::new("count_chart")
        .legend(Legend::default())
        .y_axis_label("Number of Airbnbs")
        .x_axis_formatter(move |mark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > 1e-3 || idx < 0.0 {
                return String::new();
            }
            labels
                .get(idx as usize)
                .cloned()
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            for chart in charts {
                plot_ui.bar_chart(chart);
            }
        });
}
