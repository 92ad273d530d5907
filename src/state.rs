use std::sync::Arc;

use chrono::NaiveDate;

use crate::chart::{project, ChartPair};
use crate::config::DashboardConfig;
use crate::data::filter::{filter, FilterCriteria};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded once at startup, never mutated.
    pub dataset: Arc<Dataset>,

    /// Selected category (agency grouping).
    pub category: String,

    /// Selected agency name.
    pub agency_name: String,

    /// Inclusive date range picked by the user.
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,

    /// Charts for the current selection (cached until the next change).
    pub charts: ChartPair,

    /// Number of rows matching the current selection.
    pub matched: usize,

    /// Set when the charts change so the plots re-fit both axes once.
    pub reset_plots: bool,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Initial selection: configured defaults when the dataset has them,
    /// otherwise the first option; the full date span.
    pub fn new(dataset: Arc<Dataset>, config: &DashboardConfig) -> Self {
        let options = dataset.options();
        let category = pick_default(&options.categories, &config.default_category);
        let agency_name = pick_default(&options.agencies, &config.default_agency);
        let start_date = options.first_date;
        let end_date = options.last_date;

        let mut state = Self {
            dataset,
            category,
            agency_name,
            start_date,
            end_date,
            charts: project(&[]),
            matched: 0,
            reset_plots: true,
            status_message: None,
        };
        state.refresh();
        state
    }

    /// Criteria built from the current widget values.
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            category: self.category.clone(),
            agency_name: self.agency_name.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }

    /// Re-run filter → project for the current selection.
    pub fn refresh(&mut self) {
        let criteria = self.criteria();
        if criteria.is_reversed() {
            log::debug!("start date is after end date, nothing will match");
        }
        let hits = filter(self.dataset.records(), &criteria);
        log::debug!(
            "{criteria:?} matched {} of {} rows",
            hits.len(),
            self.dataset.len()
        );

        self.matched = hits.len();
        self.charts = project(&hits);
        self.reset_plots = true;
    }

    pub fn set_category(&mut self, category: String) {
        if self.category != category {
            self.category = category;
            self.refresh();
        }
    }

    pub fn set_agency(&mut self, agency_name: String) {
        if self.agency_name != agency_name {
            self.agency_name = agency_name;
            self.refresh();
        }
    }

    /// Set the date range, clamped to the dataset's span. The order of the
    /// two bounds is left as picked.
    pub fn set_date_range(&mut self, start: NaiveDate, end: NaiveDate) {
        let options = self.dataset.options();
        let start = options.clamp_date(start);
        let end = options.clamp_date(end);
        if (start, end) != (self.start_date, self.end_date) {
            self.start_date = start;
            self.end_date = end;
            self.refresh();
        }
    }

    /// Hand out the pending plot reset, clearing it.
    pub fn take_plot_reset(&mut self) -> bool {
        std::mem::take(&mut self.reset_plots)
    }
}

fn pick_default(options: &[String], preferred: &str) -> String {
    options
        .iter()
        .find(|o| o.as_str() == preferred)
        .or_else(|| options.first())
        .cloned()
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::loader::load_reader;

    const CSV: &str = "date_col,VOM_CAT,agency_name,trips_num,VRM\n\
                       2010-01-01,50-200 peak vehicles,City of Tallahassee,100,10\n\
                       2010-01-01,over 200 peak vehicles,Miami-Dade Transit,900,90\n\
                       2010-02-01,50-200 peak vehicles,City of Tallahassee,110,11\n\
                       2010-03-01,50-200 peak vehicles,City of Tallahassee,120,12\n\
                       2010-03-01,over 200 peak vehicles,Miami-Dade Transit,950,95\n";

    fn date(y: i32, m: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, 1).unwrap()
    }

    fn state_with(config: &DashboardConfig) -> AppState {
        let dataset = Arc::new(load_reader(CSV.as_bytes()).unwrap());
        AppState::new(dataset, config)
    }

    #[test]
    fn starts_on_configured_defaults_over_the_full_span() {
        let state = state_with(&DashboardConfig::default());

        assert_eq!(state.category, "50-200 peak vehicles");
        assert_eq!(state.agency_name, "City of Tallahassee");
        assert_eq!(state.start_date, date(2010, 1));
        assert_eq!(state.end_date, date(2010, 3));
        assert_eq!(state.matched, 3);
        assert_eq!(state.charts.trips.points.len(), 3);
    }

    #[test]
    fn falls_back_to_first_option_when_default_is_absent() {
        let config = DashboardConfig {
            default_category: "no such grouping".to_string(),
            default_agency: "no such agency".to_string(),
            ..DashboardConfig::default()
        };
        let state = state_with(&config);

        assert_eq!(state.category, "50-200 peak vehicles");
        assert_eq!(state.agency_name, "City of Tallahassee");
    }

    #[test]
    fn mismatched_agency_and_category_give_empty_charts() {
        let mut state = state_with(&DashboardConfig::default());
        state.set_agency("Miami-Dade Transit".to_string());

        assert_eq!(state.matched, 0);
        assert!(state.charts.trips.is_empty());
        assert!(state.charts.vrm.is_empty());

        state.set_category("over 200 peak vehicles".to_string());
        assert_eq!(state.matched, 2);
        assert_eq!(state.charts.vrm.points, [(date(2010, 1), 90.0), (date(2010, 3), 95.0)]);
    }

    #[test]
    fn date_range_is_clamped_and_may_be_reversed() {
        let mut state = state_with(&DashboardConfig::default());

        state.set_date_range(date(2000, 1), date(2030, 1));
        assert_eq!((state.start_date, state.end_date), (date(2010, 1), date(2010, 3)));
        assert_eq!(state.matched, 3);

        state.set_date_range(date(2010, 3), date(2010, 2));
        assert!(state.criteria().is_reversed());
        assert_eq!(state.matched, 0);
    }

    #[test]
    fn every_change_requests_one_plot_reset() {
        let mut state = state_with(&DashboardConfig::default());
        assert!(state.take_plot_reset());
        assert!(!state.take_plot_reset());

        state.set_date_range(date(2010, 2), date(2010, 3));
        assert!(state.take_plot_reset());

        // Re-selecting the same value is not a change.
        state.set_agency("City of Tallahassee".to_string());
        assert!(!state.take_plot_reset());
    }
}
