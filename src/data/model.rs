use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// Record – one row of the case-count table
// ---------------------------------------------------------------------------

/// One country's aggregated case-count snapshot (one CSV row).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Record {
    #[serde(rename = "Country/Region")]
    pub country: String,
    #[serde(rename = "WHO Region")]
    pub region: String,
    #[serde(rename = "Confirmed")]
    pub confirmed: u64,
    #[serde(rename = "Deaths")]
    pub deaths: u64,
    #[serde(rename = "Recovered")]
    pub recovered: u64,
}

// ---------------------------------------------------------------------------
// Metric – which numeric column to aggregate
// ---------------------------------------------------------------------------

/// The three numeric columns of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Confirmed,
    Deaths,
    Recovered,
}

impl Metric {
    /// Read this metric's value off a record.
    pub fn of(&self, record: &Record) -> u64 {
        match self {
            Metric::Confirmed => record.confirmed,
            Metric::Deaths => record.deaths,
            Metric::Recovered => record.recovered,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Confirmed => write!(f, "Confirmed"),
            Metric::Deaths => write!(f, "Deaths"),
            Metric::Recovered => write!(f, "Recovered"),
        }
    }
}

// ---------------------------------------------------------------------------
// MetricValue – a card value, or the explicit "N/A" sentinel
// ---------------------------------------------------------------------------

/// Value shown on a summary card. `NotAvailable` is deliberately distinct
/// from `Count(0)`: it means "no selection / no data", not "zero cases".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricValue {
    Count(u64),
    NotAvailable,
}

impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricValue::Count(n) => write!(f, "{}", format_count(*n)),
            MetricValue::NotAvailable => write!(f, "N/A"),
        }
    }
}

/// Format an integer with thousands separators: 36263 → "36,263".
pub fn format_count(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// CaseDataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed dataset with pre-computed selector option lists.
#[derive(Debug, Clone)]
pub struct CaseDataset {
    /// All rows, in file order.
    pub records: Vec<Record>,
    /// Distinct countries, in order of first appearance.
    pub countries: Vec<String>,
    /// Distinct WHO regions, in order of first appearance.
    pub regions: Vec<String>,
}

impl CaseDataset {
    /// Build the selector option lists from the loaded rows.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut countries: Vec<String> = Vec::new();
        let mut regions: Vec<String> = Vec::new();

        for rec in &records {
            if !countries.contains(&rec.country) {
                countries.push(rec.country.clone());
            }
            if !regions.contains(&rec.region) {
                regions.push(rec.region.clone());
            }
        }

        CaseDataset {
            records,
            countries,
            regions,
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
