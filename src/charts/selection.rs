//! The four selector values driving a chart update.

use crate::data::{Dimension, FilterOptions};
use serde::{Deserialize, Serialize};

/// Item, sex and age codes plus the chosen years, in the order picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub item: String,
    pub sex: String,
    pub age: String,
    #[serde(default)]
    pub years: Vec<String>,
}

impl Selection {
    pub fn new(
        item: impl Into<String>,
        sex: impl Into<String>,
        age: impl Into<String>,
        years: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            item: item.into(),
            sex: sex.into(),
            age: age.into(),
            years: years.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the `years` query form: comma separated, blanks ignored.
    pub fn parse_years(raw: &str) -> Vec<String> {
        raw.split(',')
            .map(str::trim)
            .filter(|y| !y.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Selected years with repeats dropped, first occurrence wins.
    pub fn distinct_years(&self) -> Vec<&str> {
        let mut out: Vec<&str> = Vec::with_capacity(self.years.len());
        for year in &self.years {
            if !out.contains(&year.as_str()) {
                out.push(year);
            }
        }
        out
    }

    /// Fit a preferred selection to what the dataset actually holds.
    ///
    /// Codes missing from `options` fall back to the first option of their
    /// dimension. If none of the preferred years exist, the two most recent
    /// years are used.
    pub fn resolve(&self, options: &FilterOptions) -> Selection {
        let pick = |dimension: Dimension, code: &str| -> String {
            if options.contains(dimension, code) {
                code.to_string()
            } else {
                options
                    .get(dimension)
                    .first()
                    .map(|o| o.value.clone())
                    .unwrap_or_default()
            }
        };

        let mut years: Vec<String> = self
            .distinct_years()
            .into_iter()
            .filter(|y| options.contains(Dimension::Year, y))
            .map(str::to_string)
            .collect();
        if years.is_empty() {
            years = options.years.iter().take(2).map(|o| o.value.clone()).collect();
        }

        Selection {
            item: pick(Dimension::Item, &self.item),
            sex: pick(Dimension::Sex, &self.sex),
            age: pick(Dimension::Age, &self.age),
            years,
        }
    }
}
