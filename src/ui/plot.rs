use chrono::{Datelike, NaiveDate};
use eframe::egui::{self, RichText, Ui, Vec2b};
use egui_plot::{Line, Plot, PlotPoint, PlotPoints};

use crate::chart::ChartPayload;
use crate::color::{accent_color, heading_color};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Date ↔ plot axis
// ---------------------------------------------------------------------------

/// Plot x coordinate of a date: days since 0001-01-01.
pub fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// `MM/YYYY` label for a plot x coordinate, empty when out of range.
pub fn month_label(x: f64) -> String {
    if !x.is_finite() || x.abs() > i32::MAX as f64 {
        return String::new();
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|d| d.format("%m/%Y").to_string())
        .unwrap_or_default()
}

// ---------------------------------------------------------------------------
// Chart cards (central panel)
// ---------------------------------------------------------------------------

/// Render both charts stacked in the central panel.
pub fn chart_cards(ui: &mut Ui, state: &mut AppState) {
    let reset = state.take_plot_reset();
    let height = ((ui.available_height() - 80.0) / 2.0).max(120.0);

    chart_card(ui, &state.charts.trips, height, reset);
    ui.add_space(12.0);
    chart_card(ui, &state.charts.vrm, height, reset);
}

/// Render one chart inside a framed card.
fn chart_card(ui: &mut Ui, payload: &ChartPayload, height: f32, reset: bool) {
    egui::Frame::group(ui.style()).show(ui, |ui: &mut Ui| {
        ui.label(
            RichText::new(payload.title)
                .strong()
                .size(16.0)
                .color(heading_color(payload.metric)),
        );

        let axis_label = payload.metric.axis_label();
        let mut plot = Plot::new(payload.title)
            .height(height)
            .x_axis_formatter(|mark, _range| month_label(mark.value))
            .label_formatter(move |_name, value: &PlotPoint| {
                format!("{}\n{axis_label}: {:.0}", month_label(value.x), value.y)
            })
            .y_axis_label(axis_label)
            .auto_bounds(Vec2b::new(!payload.axes.x_fixed_range, !payload.axes.y_fixed_range))
            .allow_drag(true)
            .allow_scroll(true)
            .allow_zoom(true)
            .allow_boxed_zoom(true);
        if reset {
            plot = plot.reset();
        }

        let points: PlotPoints = payload
            .points
            .iter()
            .map(|&(date, value)| [date_to_x(date), value])
            .collect();

        let line = Line::new(payload.title, points)
            .color(accent_color(payload.metric))
            .width(2.0);

        plot.show(ui, |plot_ui| {
            if !payload.is_empty() {
                plot_ui.line(line);
            }
        });
    });
}
