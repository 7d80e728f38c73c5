//! CSV Data Loader Module
//! Loads the observation table with Polars, derives YEAR/MONTH from the
//! period code and builds the filter option lists.

use super::columns::*;
use super::options::{FilterOption, FilterOptions};
use polars::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Required column '{0}' is missing")]
    MissingColumn(&'static str),
    #[error("Row {row}: invalid period code '{code}': {reason}")]
    InvalidPeriod {
        row: usize,
        code: String,
        reason: PeriodError,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PeriodError {
    #[error("empty period code")]
    Empty,
    #[error("expected YYYYMM")]
    Malformed,
    #[error("month {0} is outside 1..=12")]
    MonthOutOfRange(u32),
}

/// Split a period code such as `202103` into `("2021", 3)`.
///
/// Integer-typed codes arrive already rendered as text; surrounding quotes and
/// whitespace are ignored.
pub fn split_period(code: &str) -> Result<(String, u32), PeriodError> {
    let code = code.trim().trim_matches('"');
    if code.is_empty() {
        return Err(PeriodError::Empty);
    }
    if code.len() < 5 || !code.chars().all(|c| c.is_ascii_digit()) {
        return Err(PeriodError::Malformed);
    }

    let (year, month) = code.split_at(4);
    let month: u32 = month.parse().map_err(|_| PeriodError::Malformed)?;
    if !(1..=12).contains(&month) {
        return Err(PeriodError::MonthOutOfRange(month));
    }
    Ok((year.to_string(), month))
}

/// The loaded observation table plus its filter options.
///
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Dataset {
    df: DataFrame,
    options: FilterOptions,
    source: Option<PathBuf>,
}

impl Dataset {
    /// Normalized table: code columns as strings, `YEAR`, `MONTH` (i32) and
    /// `DT` (f64).
    pub fn frame(&self) -> &DataFrame {
        &self.df
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Load the observation CSV at `path`.
    pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset, LoadError> {
        let path = path.as_ref();

        // Polars reports a missing file as a generic compute error, check first.
        std::fs::metadata(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        // Schema length 0 reads every column as text: codes keep their exact
        // spelling ("00", "A10") however late a non-numeric one appears.
        // `DT` is converted in `from_frame`, where unparseable markers such as
        // "-" become nulls.
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .finish()?
            .collect()?;
        debug!(
            "read {} rows x {} columns from {}",
            df.height(),
            df.width(),
            path.display()
        );

        let mut dataset = Self::from_frame(&df)?;
        dataset.source = Some(path.to_path_buf());
        info!(
            "loaded {} observations from {} ({} items, {} years)",
            dataset.row_count(),
            path.display(),
            dataset.options.items.len(),
            dataset.options.years.len()
        );
        Ok(dataset)
    }

    /// Normalize an already-read frame into a [`Dataset`].
    pub fn from_frame(raw: &DataFrame) -> Result<Dataset, LoadError> {
        for name in REQUIRED_COLUMNS {
            if raw.column(name).is_err() {
                return Err(LoadError::MissingColumn(name));
            }
        }

        let item_ids = Self::string_values(raw, ITM_ID)?;
        let item_names = Self::string_values(raw, ITM_NM)?;
        let sex_codes = Self::string_values(raw, C1)?;
        let sex_names = Self::string_values(raw, C1_NM)?;
        let age_codes = Self::string_values(raw, C2)?;
        let age_names = Self::string_values(raw, C2_NM)?;
        let periods = Self::string_values(raw, PRD_DE)?;

        // Text that is not a number ("-" marks a missing figure) becomes null.
        let values: Vec<Option<f64>> = Self::string_values(raw, DT)?
            .iter()
            .map(|s| s.parse::<f64>().ok())
            .collect();

        let mut years: Vec<String> = Vec::with_capacity(periods.len());
        let mut months: Vec<i32> = Vec::with_capacity(periods.len());
        for (row, code) in periods.iter().enumerate() {
            let (year, month) = split_period(code).map_err(|reason| LoadError::InvalidPeriod {
                row,
                code: code.clone(),
                reason,
            })?;
            years.push(year);
            months.push(month as i32);
        }

        let options = FilterOptions {
            items: Self::distinct_pairs(&item_names, &item_ids),
            sexes: Self::distinct_pairs(&sex_names, &sex_codes),
            ages: Self::distinct_pairs(&age_names, &age_codes),
            years: Self::distinct_years(&years),
        };

        let df = DataFrame::new(vec![
            Column::new(ITM_ID.into(), item_ids),
            Column::new(ITM_NM.into(), item_names),
            Column::new(C1.into(), sex_codes),
            Column::new(C1_NM.into(), sex_names),
            Column::new(C2.into(), age_codes),
            Column::new(C2_NM.into(), age_names),
            Column::new(PRD_DE.into(), periods),
            Column::new(YEAR.into(), years),
            Column::new(MONTH.into(), months),
            Column::new(DT.into(), values),
        ])?;

        Ok(Dataset {
            df,
            options,
            source: None,
        })
    }

    /// Read a column as text, whatever type the CSV reader inferred.
    /// Nulls become empty strings.
    fn string_values(df: &DataFrame, name: &str) -> Result<Vec<String>, LoadError> {
        let as_str = df.column(name)?.cast(&DataType::String)?;
        let values = as_str
            .str()?
            .into_iter()
            .map(|v| v.map(|s| s.trim().to_string()).unwrap_or_default())
            .collect();
        Ok(values)
    }

    /// Distinct (label, code) pairs keyed by code, in first-occurrence order.
    fn distinct_pairs(labels: &[String], codes: &[String]) -> Vec<FilterOption> {
        let mut seen = HashSet::new();
        labels
            .iter()
            .zip(codes)
            .filter(|(_, code)| seen.insert(code.as_str()))
            .map(|(label, code)| FilterOption::new(label, code))
            .collect()
    }

    /// Distinct years, most recent first.
    fn distinct_years(years: &[String]) -> Vec<FilterOption> {
        let mut unique: Vec<&String> = years.iter().collect::<HashSet<_>>().into_iter().collect();
        unique.sort_unstable_by(|a, b| b.cmp(a));
        unique
            .into_iter()
            .map(|year| FilterOption::new(year, year))
            .collect()
    }
}
