use std::path::Path;

use thiserror::Error;

use super::model::{CaseDataset, Record};

// ---------------------------------------------------------------------------
// LoadError – fatal startup failures
// ---------------------------------------------------------------------------

/// Any of these aborts startup: the dashboard cannot render without its data.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("opening CSV: {0}")]
    Io(#[from] csv::Error),

    #[error("CSV missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("CSV row {row}: {source}")]
    Row {
        /// 1-based data row number (header excluded).
        row: usize,
        source: csv::Error,
    },
}

/// The five columns every input file must carry.
pub const REQUIRED_COLUMNS: [&str; 5] = [
    "Country/Region",
    "WHO Region",
    "Confirmed",
    "Deaths",
    "Recovered",
];

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the case-count dataset from a CSV file.
///
/// Expected layout: header row with at least the [`REQUIRED_COLUMNS`], one
/// data row per country. Extra columns are ignored.
pub fn load_csv(path: &Path) -> Result<CaseDataset, LoadError> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    for col in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == col) {
            return Err(LoadError::MissingColumn(col));
        }
    }

    let mut records = Vec::new();
    for (i, result) in reader.deserialize::<Record>().enumerate() {
        let record = result.map_err(|source| LoadError::Row { row: i + 1, source })?;
        records.push(record);
    }

    Ok(CaseDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(content.as_bytes()).expect("write temp file");
        file
    }

    #[test]
    fn loads_well_formed_csv() {
        let file = write_csv(
            "Country/Region,WHO Region,Confirmed,Deaths,Recovered\n\
             Afghanistan,Eastern Mediterranean,36263,1269,25198\n\
             Albania,Europe,4880,144,2745\n",
        );

        let ds = load_csv(file.path()).expect("load");
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.countries, ["Afghanistan", "Albania"]);
        assert_eq!(ds.regions, ["Eastern Mediterranean", "Europe"]);
        assert_eq!(ds.records[0].confirmed, 36263);
        assert_eq!(ds.records[1].recovered, 2745);
    }

    #[test]
    fn ignores_extra_columns() {
        let file = write_csv(
            "Country/Region,Confirmed,Deaths,Recovered,Active,WHO Region\n\
             Albania,4880,144,2745,1991,Europe\n",
        );

        let ds = load_csv(file.path()).expect("load");
        assert_eq!(ds.records[0].country, "Albania");
        assert_eq!(ds.records[0].region, "Europe");
        assert_eq!(ds.records[0].deaths, 144);
    }

    #[test]
    fn missing_column_is_reported_by_name() {
        let file = write_csv(
            "Country/Region,Confirmed,Deaths,Recovered\n\
             Albania,4880,144,2745\n",
        );

        match load_csv(file.path()) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, "WHO Region"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn malformed_row_is_reported_with_row_number() {
        let file = write_csv(
            "Country/Region,WHO Region,Confirmed,Deaths,Recovered\n\
             Afghanistan,Eastern Mediterranean,36263,1269,25198\n\
             Albania,Europe,not-a-number,144,2745\n",
        );

        match load_csv(file.path()) {
            Err(LoadError::Row { row, .. }) => assert_eq!(row, 2),
            other => panic!("expected Row error, got {other:?}"),
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = load_csv(Path::new("/definitely/not/here.csv"));
        assert!(matches!(result, Err(LoadError::Io(_))));
    }
}
