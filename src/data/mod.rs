//! Data module - CSV loading and filter options

pub mod columns;
mod loader;
mod options;

pub use loader::{split_period, DataLoader, Dataset, LoadError, PeriodError};
pub use options::{Dimension, FilterOption, FilterOptions};
