use eframe::egui;

use crate::config::DashboardConfig;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TransitDashApp {
    pub config: DashboardConfig,
    pub state: AppState,
}

impl TransitDashApp {
    pub fn new(config: DashboardConfig, state: AppState) -> Self {
        Self { config, state }
    }
}

impl eframe::App for TransitDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Header + filter menu ----
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            panels::header(ui, &self.config);
            ui.separator();
            panels::filter_menu(ui, &mut self.state);
            ui.add_space(6.0);
        });

        // ---- Central panel: the two charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::chart_cards(ui, &mut self.state);
        });
    }
}
