use chrono::NaiveDate;

use super::model::Record;

// ---------------------------------------------------------------------------
// Filter predicate: one category, one agency, an inclusive date range
// ---------------------------------------------------------------------------

/// The current selection, rebuilt from widget state on every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: String,
    pub agency_name: String,
    /// Inclusive lower bound.
    pub start_date: NaiveDate,
    /// Inclusive upper bound.
    pub end_date: NaiveDate,
}

impl FilterCriteria {
    /// Whether `record` passes all four predicates.
    ///
    /// Labels compare exactly (case-sensitive). A reversed range matches nothing.
    pub fn matches(&self, record: &Record) -> bool {
        record.category == self.category
            && record.agency_name == self.agency_name
            && record.date >= self.start_date
            && record.date <= self.end_date
    }

    /// `start_date` lies after `end_date`.
    pub fn is_reversed(&self) -> bool {
        self.start_date > self.end_date
    }
}

/// Return the records that pass `criteria`, in input order.
///
/// Never fails: unknown labels or a reversed range simply give an empty result.
pub fn filter<'a>(records: &'a [Record], criteria: &FilterCriteria) -> Vec<&'a Record> {
    records.iter().filter(|r| criteria.matches(r)).collect()
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::*;

    const TALLAHASSEE: &str = "City of Tallahassee";
    const MID: &str = "50-200 peak vehicles";

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Monthly rows 2010-01..2022-12 for two agencies, date-sorted.
    fn monthly_rows() -> Vec<Record> {
        let mut rows = Vec::new();
        for year in 2010..=2022 {
            for month in 1..=12 {
                for (category, agency) in [(MID, TALLAHASSEE), ("over 200 peak vehicles", "Miami-Dade Transit")] {
                    rows.push(Record {
                        date: date(year, month, 1),
                        category: category.to_string(),
                        agency_name: agency.to_string(),
                        trips: (year * 100 + month as i32) as f64,
                        vehicle_revenue_miles: month as f64 * 10.0,
                    });
                }
            }
        }
        rows
    }

    fn criteria(agency: &str, start: NaiveDate, end: NaiveDate) -> FilterCriteria {
        FilterCriteria {
            category: MID.to_string(),
            agency_name: agency.to_string(),
            start_date: start,
            end_date: end,
        }
    }

    #[test]
    fn one_year_of_one_agency() {
        let rows = monthly_rows();
        let c = criteria(TALLAHASSEE, date(2015, 1, 1), date(2015, 12, 31));

        let hits = filter(&rows, &c);
        assert_eq!(hits.len(), 12);
        for (i, rec) in hits.iter().enumerate() {
            assert_eq!(rec.agency_name, TALLAHASSEE);
            assert_eq!(rec.date, date(2015, i as u32 + 1, 1));
        }
    }

    #[test]
    fn bounds_are_inclusive() {
        let rows = monthly_rows();
        let c = criteria(TALLAHASSEE, date(2012, 3, 1), date(2012, 5, 1));

        let months: Vec<u32> = filter(&rows, &c).iter().map(|r| r.date.month()).collect();
        assert_eq!(months, [3, 4, 5]);

        let single_day = criteria(TALLAHASSEE, date(2012, 3, 1), date(2012, 3, 1));
        assert_eq!(filter(&rows, &single_day).len(), 1);
    }

    #[test]
    fn result_is_exact() {
        let rows = monthly_rows();
        let c = criteria(TALLAHASSEE, date(2019, 7, 15), date(2021, 2, 1));

        let hits = filter(&rows, &c);
        let expected = rows.iter().filter(|r| c.matches(r)).count();
        assert_eq!(hits.len(), expected);
        assert!(hits.iter().all(|r| c.matches(r)));
        // 2019-08 .. 2021-02 inclusive
        assert_eq!(hits.len(), 19);
    }

    #[test]
    fn filtering_twice_changes_nothing() {
        let rows = monthly_rows();
        let c = criteria(TALLAHASSEE, date(2011, 6, 1), date(2013, 6, 1));

        let once: Vec<Record> = filter(&rows, &c).into_iter().cloned().collect();
        let twice: Vec<Record> = filter(&once, &c).into_iter().cloned().collect();
        assert_eq!(once, twice);
    }

    #[test]
    fn reversed_range_matches_nothing() {
        let rows = monthly_rows();
        let c = criteria(TALLAHASSEE, date(2020, 6, 1), date(2020, 1, 1));

        assert!(c.is_reversed());
        assert!(filter(&rows, &c).is_empty());
    }

    #[test]
    fn unknown_agency_or_mismatched_category_matches_nothing() {
        let rows = monthly_rows();
        let unknown = criteria("Atlantis Transit", date(2010, 1, 1), date(2022, 12, 1));
        assert!(filter(&rows, &unknown).is_empty());

        // Miami-Dade only appears under the larger grouping.
        let mismatched = criteria("Miami-Dade Transit", date(2010, 1, 1), date(2022, 12, 1));
        assert!(filter(&rows, &mismatched).is_empty());
    }

    #[test]
    fn labels_compare_case_sensitively() {
        let rows = monthly_rows();
        let c = criteria("city of tallahassee", date(2010, 1, 1), date(2022, 12, 1));
        assert!(filter(&rows, &c).is_empty());
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let c = criteria(TALLAHASSEE, date(2010, 1, 1), date(2022, 12, 1));
        assert!(filter(&[], &c).is_empty());
    }
}
