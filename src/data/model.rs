use std::collections::BTreeMap;

use serde::Serialize;

// ---------------------------------------------------------------------------
// Record – one row of the input table
// ---------------------------------------------------------------------------

/// A single observation: how many users a category had in a given year.
///
/// Serialises with the input file's column names so the sample generator can
/// write it straight back out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    #[serde(rename = "continent")]
    pub category: String,
    pub year: i32,
    #[serde(rename = "population")]
    pub value: i64,
}

impl Record {
    pub fn new(category: impl Into<String>, year: i32, value: i64) -> Self {
        Self {
            category: category.into(),
            year,
            value,
        }
    }
}

// ---------------------------------------------------------------------------
// Series – the time series of one category
// ---------------------------------------------------------------------------

/// Years and values of one category, in file order.
///
/// Both vectors only ever grow together through [`Series::push`], so they
/// always have the same length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Series {
    category: String,
    years: Vec<i32>,
    values: Vec<i64>,
}

impl Series {
    pub fn new(category: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            years: Vec::new(),
            values: Vec::new(),
        }
    }

    fn push(&mut self, year: i32, value: i64) {
        self.years.push(year);
        self.values.push(value);
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    /// Number of (year, value) pairs.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }

    /// The series as plot coordinates `[year, value]`.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.years
            .iter()
            .zip(self.values.iter())
            .map(|(&year, &value)| [f64::from(year), value as f64])
    }
}

// ---------------------------------------------------------------------------
// Dataset – all series, keyed by category
// ---------------------------------------------------------------------------

/// Category → [`Series`] mapping that iterates in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    /// Series in the order their category first appeared.
    series: Vec<Series>,
    /// Category name → position in `series`.
    index: BTreeMap<String, usize>,
}

impl Dataset {
    /// Group records by category, keeping input order inside each series.
    pub fn from_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut dataset = Dataset::default();
        for record in records {
            dataset.insert(record);
        }
        dataset
    }

    /// Append one record to its category's series, creating it on first sight.
    pub(crate) fn insert(&mut self, record: Record) {
        let slot = match self.index.get(&record.category) {
            Some(&slot) => slot,
            None => {
                let slot = self.series.len();
                self.series.push(Series::new(record.category.clone()));
                self.index.insert(record.category, slot);
                slot
            }
        };
        self.series[slot].push(record.year, record.value);
    }

    pub fn get(&self, category: &str) -> Option<&Series> {
        self.index.get(category).map(|&slot| &self.series[slot])
    }

    /// Series in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    /// Category names in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.series.iter().map(Series::category)
    }

    /// Number of categories.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of records across all series.
    pub fn record_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_records() -> Vec<Record> {
        vec![
            Record::new("Africa", 2000, 10),
            Record::new("Asia", 2000, 50),
            Record::new("Africa", 2001, 15),
        ]
    }

    #[test]
    fn groups_the_example_rows() {
        let dataset = Dataset::from_records(sample_records());

        let africa = dataset.get("Africa").unwrap();
        assert_eq!(africa.years(), &[2000, 2001]);
        assert_eq!(africa.values(), &[10, 15]);

        let asia = dataset.get("Asia").unwrap();
        assert_eq!(asia.years(), &[2000]);
        assert_eq!(asia.values(), &[50]);

        assert_eq!(dataset.categories().collect::<Vec<_>>(), ["Africa", "Asia"]);
        assert_eq!(dataset.record_count(), 3);
    }

    #[test]
    fn categories_keep_first_seen_order_not_alphabetical() {
        let dataset = Dataset::from_records(vec![
            Record::new("World", 1990, 1),
            Record::new("Europe", 1990, 2),
            Record::new("Asia", 1990, 3),
            Record::new("Europe", 1991, 4),
            Record::new("World", 1991, 5),
        ]);
        assert_eq!(
            dataset.categories().collect::<Vec<_>>(),
            ["World", "Europe", "Asia"]
        );
    }

    #[test]
    fn grouping_is_a_stable_partition() {
        let records = vec![
            Record::new("B", 2003, 3),
            Record::new("A", 2001, 1),
            Record::new("B", 1999, 9),
            Record::new("A", 2001, 1),
            Record::new("A", 1990, 7),
        ];
        let dataset = Dataset::from_records(records.clone());

        for series in dataset.iter() {
            assert_eq!(series.years().len(), series.values().len());
            let expected: Vec<(i32, i64)> = records
                .iter()
                .filter(|r| r.category == series.category())
                .map(|r| (r.year, r.value))
                .collect();
            let actual: Vec<(i32, i64)> = series
                .years()
                .iter()
                .copied()
                .zip(series.values().iter().copied())
                .collect();
            assert_eq!(actual, expected);
        }
        assert_eq!(dataset.record_count(), records.len());
    }

    #[test]
    fn empty_input_gives_empty_dataset() {
        let dataset = Dataset::from_records(Vec::new());
        assert!(dataset.is_empty());
        assert_eq!(dataset.len(), 0);
        assert!(dataset.get("Africa").is_none());
    }

    #[test]
    fn points_pair_years_with_values() {
        let dataset = Dataset::from_records(sample_records());
        let points: Vec<[f64; 2]> = dataset.get("Africa").unwrap().points().collect();
        assert_eq!(points, vec![[2000.0, 10.0], [2001.0, 15.0]]);
    }
}
