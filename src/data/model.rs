use chrono::NaiveDate;

use super::loader::LoadError;

// ---------------------------------------------------------------------------
// Record – one row of the monthly dataset
// ---------------------------------------------------------------------------

/// One agency's figures for one month.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// First day of the reported month.
    pub date: NaiveDate,
    /// Peak-vehicle grouping, e.g. `"50-200 peak vehicles"`.
    pub category: String,
    pub agency_name: String,
    /// Unlinked passenger trips (UPT).
    pub trips: f64,
    /// Vehicle revenue miles (VRM).
    pub vehicle_revenue_miles: f64,
}

// ---------------------------------------------------------------------------
// FilterOptions – the values the control surface may offer
// ---------------------------------------------------------------------------

/// Selectable values derived once from the loaded records.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOptions {
    /// Distinct categories, sorted ascending.
    pub categories: Vec<String>,
    /// Distinct agency names in first-seen order of the date-sorted rows.
    pub agencies: Vec<String>,
    pub first_date: NaiveDate,
    pub last_date: NaiveDate,
}

impl FilterOptions {
    fn from_sorted(records: &[Record]) -> Option<Self> {
        let first_date = records.first()?.date;
        let last_date = records.last()?.date;

        let mut categories: Vec<String> = Vec::new();
        let mut agencies: Vec<String> = Vec::new();
        for rec in records {
            if !categories.contains(&rec.category) {
                categories.push(rec.category.clone());
            }
            if !agencies.contains(&rec.agency_name) {
                agencies.push(rec.agency_name.clone());
            }
        }
        categories.sort();

        Some(FilterOptions {
            categories,
            agencies,
            first_date,
            last_date,
        })
    }

    /// Clamp a picked date into the dataset's span.
    pub fn clamp_date(&self, date: NaiveDate) -> NaiveDate {
        date.clamp(self.first_date, self.last_date)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset, sorted by date, with its selectable options.
///
/// Built once at startup and shared read-only afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<Record>,
    options: FilterOptions,
}

impl Dataset {
    /// Sort the records by date and derive the filter options.
    ///
    /// The sort is stable: rows that share a month keep their file order.
    pub fn from_records(mut records: Vec<Record>) -> Result<Self, LoadError> {
        records.sort_by_key(|r| r.date);
        let options = FilterOptions::from_sorted(&records).ok_or(LoadError::Empty)?;
        Ok(Dataset { records, options })
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Number of rows. Never zero for a loaded dataset.
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.records.len()
    }
}
