use std::fs::File;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::model::{Dataset, Record};

/// Header names the loader requires.
pub const CATEGORY_COLUMN: &str = "continent";
pub const YEAR_COLUMN: &str = "year";
pub const VALUE_COLUMN: &str = "population";

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot open {}: {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Row-level and header-level problems. `line` is 1-based and counts the
/// header as line 1.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line {line}: header is missing the '{column}' column")]
    MissingColumn { line: u64, column: &'static str },
    #[error("line {line}: missing '{column}' field")]
    MissingField { line: u64, column: &'static str },
    #[error("line {line}: '{column}' value '{value}' is not an integer")]
    InvalidInteger {
        line: u64,
        column: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("line {line}: malformed CSV")]
    Csv {
        line: u64,
        #[source]
        source: csv::Error,
    },
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load a dataset from a CSV file with `continent`, `year` and `population`
/// columns.
///
/// The file is closed when this returns, whether parsing succeeded or not.
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let file = File::open(path).map_err(|source| LoadError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = load_reader(file)?;

    log::info!(
        "Loaded {} records in {} categories from {}",
        dataset.record_count(),
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse CSV from any byte source. Any bad row aborts the whole load.
pub fn load_reader<R: io::Read>(reader: R) -> Result<Dataset, ParseError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        // Short rows are reported per missing field rather than as a length
        // mismatch.
        .flexible(true)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|source| ParseError::Csv { line: 1, source })?
        .clone();

    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or(ParseError::MissingColumn {
                line: 1,
                column: name,
            })
    };
    let category_idx = column(CATEGORY_COLUMN)?;
    let year_idx = column(YEAR_COLUMN)?;
    let value_idx = column(VALUE_COLUMN)?;

    let mut dataset = Dataset::default();

    for (row_no, result) in reader.records().enumerate() {
        // Header is line 1; fall back to counting when position is unknown.
        let fallback_line = row_no as u64 + 2;
        let record = result.map_err(|source| ParseError::Csv {
            line: source
                .position()
                .map(|p| p.line())
                .unwrap_or(fallback_line),
            source,
        })?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line);

        let field = |idx: usize, column: &'static str| {
            record
                .get(idx)
                .ok_or(ParseError::MissingField { line, column })
        };

        let category = field(category_idx, CATEGORY_COLUMN)?;
        let year = parse_integer::<i32>(field(year_idx, YEAR_COLUMN)?, line, YEAR_COLUMN)?;
        let value = parse_integer::<i64>(field(value_idx, VALUE_COLUMN)?, line, VALUE_COLUMN)?;

        dataset.insert(Record::new(category, year, value));
    }

    Ok(dataset)
}

fn parse_integer<T>(raw: &str, line: u64, column: &'static str) -> Result<T, ParseError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    raw.trim()
        .parse::<T>()
        .map_err(|source| ParseError::InvalidInteger {
            line,
            column,
            value: raw.to_string(),
            source,
        })
}
