//! Filter option lists shown in the four selectors.

use serde::{Deserialize, Serialize};

/// One selector entry; serialized as `{ "label": .., "value": .. }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub label: String,
    pub value: String,
}

impl FilterOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    Item,
    Sex,
    Age,
    Year,
}

/// Distinct values per filter dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub items: Vec<FilterOption>,
    pub sexes: Vec<FilterOption>,
    pub ages: Vec<FilterOption>,
    /// Most recent year first.
    pub years: Vec<FilterOption>,
}

impl FilterOptions {
    pub fn get(&self, dimension: Dimension) -> &[FilterOption] {
        match dimension {
            Dimension::Item => &self.items,
            Dimension::Sex => &self.sexes,
            Dimension::Age => &self.ages,
            Dimension::Year => &self.years,
        }
    }

    pub fn contains(&self, dimension: Dimension, code: &str) -> bool {
        self.get(dimension).iter().any(|o| o.value == code)
    }
}
