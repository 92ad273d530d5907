use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Dashboard configuration
// ---------------------------------------------------------------------------

/// Startup settings. Everything has a sensible default; only the data path
/// can be overridden, via the first command-line argument.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// CSV with the monthly per-agency figures.
    pub data_path: PathBuf,
    /// Native window title.
    pub window_title: String,
    pub header_title: String,
    pub header_description: String,
    /// Category selected at startup, if the dataset has it.
    pub default_category: String,
    /// Agency selected at startup, if the dataset has it.
    pub default_agency: String,
    pub window_size: [f32; 2],
    pub min_window_size: [f32; 2],
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("monthly_bus_data_for_visual.csv"),
            window_title: "Florida Transit Performance Dashboard".to_string(),
            header_title: "Florida Transit Performance Dash".to_string(),
            header_description: "The trend of Florida Transit Agencies bus VOMS (Vehicles Operated \
                                 in Annual Maximum Service) in last ten years between 2010 and 2022"
                .to_string(),
            default_category: "50-200 peak vehicles".to_string(),
            default_agency: "City of Tallahassee".to_string(),
            window_size: [1200.0, 860.0],
            min_window_size: [640.0, 480.0],
        }
    }
}

impl DashboardConfig {
    /// Defaults, with the data path taken from the first positional argument
    /// when one is given. `args` excludes the program name.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        if let Some(path) = args.into_iter().next() {
            config.data_path = PathBuf::from(path);
        }
        config
    }
}
