use chrono::Datelike;
use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::DatePickerButton;

use crate::config::DashboardConfig;
use crate::state::AppState;

/// Display format of the date pickers.
const PICKER_FORMAT: &str = "%m/%Y";

// ---------------------------------------------------------------------------
// Header
// ---------------------------------------------------------------------------

/// Render the dashboard header: emoji, title and description.
pub fn header(ui: &mut Ui, config: &DashboardConfig) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.add_space(6.0);
        ui.label(RichText::new("🚌").size(40.0));
        ui.heading(RichText::new(&config.header_title).strong().size(28.0));
        ui.label(RichText::new(&config.header_description).weak());
        ui.add_space(6.0);
    });
}

// ---------------------------------------------------------------------------
// Filter menu – category, agency and date range
// ---------------------------------------------------------------------------

/// Render the three filter controls side by side.
pub fn filter_menu(ui: &mut Ui, state: &mut AppState) {
    // The options outlive any change to the selection.
    let dataset = state.dataset.clone();
    let options = dataset.options();

    ui.horizontal_wrapped(|ui: &mut Ui| {
        ui.vertical(|ui: &mut Ui| {
            ui.strong("Transit Agency Grouping");
            let mut category = state.category.clone();
            egui::ComboBox::from_id_salt("agency_size_filter")
                .selected_text(category.as_str())
                .width(220.0)
                .show_ui(ui, |ui: &mut Ui| {
                    for option in &options.categories {
                        ui.selectable_value(&mut category, option.clone(), option.as_str());
                    }
                });
            state.set_category(category);
        });

        ui.add_space(16.0);

        ui.vertical(|ui: &mut Ui| {
            ui.strong("Transit Agency Name");
            let mut agency = state.agency_name.clone();
            egui::ComboBox::from_id_salt("agency_name_filter")
                .selected_text(agency.as_str())
                .width(260.0)
                .show_ui(ui, |ui: &mut Ui| {
                    for option in &options.agencies {
                        ui.selectable_value(&mut agency, option.clone(), option.as_str());
                    }
                });
            state.set_agency(agency);
        });

        ui.add_space(16.0);

        ui.vertical(|ui: &mut Ui| {
            ui.strong("Date Range");
            let years = options.first_date.year()..=options.last_date.year();
            let mut start = state.start_date;
            let mut end = state.end_date;
            ui.horizontal(|ui: &mut Ui| {
                ui.add(
                    DatePickerButton::new(&mut start)
                        .id_salt("date_range_start")
                        .format(PICKER_FORMAT)
                        .calendar_week(false)
                        .start_end_years(years.clone()),
                );
                ui.label("→");
                ui.add(
                    DatePickerButton::new(&mut end)
                        .id_salt("date_range_end")
                        .format(PICKER_FORMAT)
                        .calendar_week(false)
                        .start_end_years(years),
                );
            });
            state.set_date_range(start, end);
        });
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Export charts…").clicked() {
                export_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} rows loaded, {} matching",
            state.dataset.len(),
            state.matched
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Export dialog
// ---------------------------------------------------------------------------

pub fn export_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Export charts")
        .set_file_name("transit_charts.json")
        .add_filter("JSON", &["json"])
        .save_file();

    if let Some(path) = file {
        match crate::chart::write_figures(&path, &state.charts) {
            Ok(()) => {
                log::info!("Exported charts to {}", path.display());
                state.status_message = None;
            }
            Err(e) => {
                log::error!("Failed to export charts: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
