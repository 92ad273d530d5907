use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde_json::{json, Value as JsonValue};

use crate::data::model::Record;

// ---------------------------------------------------------------------------
// Metric – which column a chart plots
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    /// Unlinked passenger trips (UPT).
    Trips,
    /// Vehicle revenue miles (VRM).
    VehicleRevenueMiles,
}

impl Metric {
    pub fn title(self) -> &'static str {
        match self {
            Metric::Trips => "Monthly Unlinked Passenger Trips",
            Metric::VehicleRevenueMiles => "Monthly Vehicle Revenue Miles",
        }
    }

    /// Accent colour as `#rrggbb`.
    pub fn color(self) -> &'static str {
        match self {
            Metric::Trips => "#17B897",
            Metric::VehicleRevenueMiles => "#E12D39",
        }
    }

    /// Short axis label.
    pub fn axis_label(self) -> &'static str {
        match self {
            Metric::Trips => "UPT",
            Metric::VehicleRevenueMiles => "VRM",
        }
    }

    pub fn value(self, record: &Record) -> f64 {
        match self {
            Metric::Trips => record.trips,
            Metric::VehicleRevenueMiles => record.vehicle_revenue_miles,
        }
    }
}

// ---------------------------------------------------------------------------
// ChartPayload – everything a renderer needs for one chart
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartStyle {
    Line,
}

impl ChartStyle {
    /// Trace type understood by Plotly-style figure consumers.
    fn trace_type(self) -> &'static str {
        match self {
            ChartStyle::Line => "lines",
        }
    }
}

/// Whether each axis is locked to a fixed domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisScaling {
    pub x_fixed_range: bool,
    pub y_fixed_range: bool,
}

impl AxisScaling {
    /// Both axes follow the data.
    pub const AUTO: AxisScaling = AxisScaling {
        x_fixed_range: false,
        y_fixed_range: false,
    };
}

/// One metric's series for the current selection plus its presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPayload {
    pub metric: Metric,
    /// `(month, value)` pairs in the order of the filtered records.
    pub points: Vec<(NaiveDate, f64)>,
    pub title: &'static str,
    pub style: ChartStyle,
    pub axes: AxisScaling,
    pub color: &'static str,
}

impl ChartPayload {
    /// Project `records` onto `metric`. No aggregation or interpolation.
    pub fn from_records(metric: Metric, records: &[&Record]) -> Self {
        ChartPayload {
            metric,
            points: records.iter().map(|r| (r.date, metric.value(r))).collect(),
            title: metric.title(),
            style: ChartStyle::Line,
            axes: AxisScaling::AUTO,
            color: metric.color(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Plotly-style figure JSON for this chart.
    pub fn to_figure(&self) -> JsonValue {
        let x: Vec<String> = self
            .points
            .iter()
            .map(|(d, _)| d.format("%Y-%m-%d").to_string())
            .collect();
        let y: Vec<f64> = self.points.iter().map(|&(_, v)| v).collect();

        json!({
            "data": [{
                "x": x,
                "y": y,
                "type": self.style.trace_type(),
            }],
            "layout": {
                "title": { "text": self.title, "x": 0.05, "xanchor": "left" },
                "xaxis": { "fixedrange": self.axes.x_fixed_range },
                "yaxis": { "fixedrange": self.axes.y_fixed_range },
                "colorway": [self.color],
            },
        })
    }
}

/// The two charts shown for a selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPair {
    pub trips: ChartPayload,
    pub vrm: ChartPayload,
}

impl ChartPair {
    /// Both figures keyed the way the export file lays them out.
    pub fn to_figures(&self) -> JsonValue {
        json!({
            "upt": self.trips.to_figure(),
            "vrm": self.vrm.to_figure(),
        })
    }
}

/// Write both figures to `path` as pretty-printed JSON.
pub fn write_figures(path: &Path, charts: &ChartPair) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &charts.to_figures())
        .context("writing chart JSON")?;
    writer.flush().context("flushing chart JSON")?;
    Ok(())
}

/// Map filtered records to the trips and vehicle-revenue-miles charts.
pub fn project(filtered: &[&Record]) -> ChartPair {
    ChartPair {
        trips: ChartPayload::from_records(Metric::Trips, filtered),
        vrm: ChartPayload::from_records(Metric::VehicleRevenueMiles, filtered),
    }
}
