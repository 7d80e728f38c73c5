//! Chart Updater Module
//! Filters the observation table per selected year and builds the figure.

use super::figure::{Figure, MonthLabels, Trace};
use super::selection::Selection;
use crate::data::columns::{C1, C2, DT, ITM_ID, MONTH, YEAR};
use crate::data::Dataset;
use polars::prelude::*;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Turns a [`Selection`] into a [`Figure`].
///
/// Holds no data of its own; the same selection against the same dataset
/// always yields the same figure.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChartUpdater {
    labels: MonthLabels,
}

impl ChartUpdater {
    pub fn new(labels: MonthLabels) -> Self {
        Self { labels }
    }

    pub fn labels(&self) -> MonthLabels {
        self.labels
    }

    /// Build one series per selected year.
    ///
    /// A year without matching rows still gets a named, empty series; an empty
    /// year list gives a figure with no series.
    pub fn update(&self, dataset: &Dataset, selection: &Selection) -> Result<Figure, ChartError> {
        let mut figure = Figure::monthly(self.labels);

        for year in selection.distinct_years() {
            let points = Self::monthly_points(dataset.frame(), selection, year)?;
            debug!(
                item = %selection.item,
                sex = %selection.sex,
                age = %selection.age,
                year,
                points = points.len(),
                "series built"
            );
            figure.add_trace(Trace::lines_markers(year, &points));
        }

        Ok(figure)
    }

    /// (month, value) pairs of the rows matching the selection in `year`,
    /// ordered by month. Null values are skipped.
    fn monthly_points(
        df: &DataFrame,
        selection: &Selection,
        year: &str,
    ) -> Result<Vec<(i32, f64)>, ChartError> {
        let filtered = df
            .clone()
            .lazy()
            .filter(
                col(ITM_ID)
                    .eq(lit(selection.item.as_str()))
                    .and(col(C1).eq(lit(selection.sex.as_str())))
                    .and(col(C2).eq(lit(selection.age.as_str())))
                    .and(col(YEAR).eq(lit(year))),
            )
            .select([col(MONTH), col(DT)])
            .collect()?;

        let months = filtered.column(MONTH)?.i32()?;
        let values = filtered.column(DT)?.f64()?;

        let mut points: Vec<(i32, f64)> = months
            .into_iter()
            .zip(values.into_iter())
            .filter_map(|(m, v)| Some((m?, v?)))
            .collect();
        points.sort_by_key(|(month, _)| *month);
        Ok(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DataLoader;

    fn dataset() -> Dataset {
        let raw = df!(
            "PRD_DE" => [202103i64, 202101, 202102, 202001, 202101, 202104],
            "ITM_ID" => ["T90", "T90", "T90", "T90", "T80", "T90"],
            "ITM_NM" => ["Employment rate", "Employment rate", "Employment rate", "Employment rate", "Unemployment rate", "Employment rate"],
            "C1" => [0i64, 0, 0, 0, 0, 1],
            "C1_NM" => ["Total", "Total", "Total", "Total", "Total", "Male"],
            "C2" => [0i64, 0, 0, 0, 0, 0],
            "C2_NM" => ["All", "All", "All", "All", "All", "All"],
            "DT" => [30.0, 10.0, 20.0, 55.5, 3.1, 99.0],
        )
        .unwrap();
        DataLoader::from_frame(&raw).unwrap()
    }

    #[test]
    fn one_series_ordered_by_month() {
        let updater = ChartUpdater::default();
        let sel = Selection::new("T90", "0", "0", ["2021"]);
        let fig = updater.update(&dataset(), &sel).unwrap();

        assert_eq!(fig.data.len(), 1);
        let series = &fig.data[0];
        assert_eq!(series.name, "2021");
        assert_eq!(series.mode, "lines+markers");
        assert_eq!(
            series.points().collect::<Vec<_>>(),
            vec![(1, 10.0), (2, 20.0), (3, 30.0)]
        );
    }

    #[test]
    fn one_series_per_requested_year() {
        let updater = ChartUpdater::default();
        let sel = Selection::new("T90", "0", "0", ["2020", "2021", "2018"]);
        let fig = updater.update(&dataset(), &sel).unwrap();

        let names: Vec<&str> = fig.data.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["2020", "2021", "2018"]);
        assert_eq!(fig.trace("2020").unwrap().points().collect::<Vec<_>>(), vec![(1, 55.5)]);
    }

    #[test]
    fn year_without_rows_gives_empty_named_series() {
        let updater = ChartUpdater::default();
        let sel = Selection::new("T90", "0", "0", ["2018"]);
        let fig = updater.update(&dataset(), &sel).unwrap();

        assert_eq!(fig.data.len(), 1);
        assert_eq!(fig.data[0].name, "2018");
        assert!(fig.data[0].is_empty());
    }

    #[test]
    fn empty_year_selection_gives_no_series() {
        let updater = ChartUpdater::default();
        let sel = Selection::new("T90", "0", "0", Vec::<String>::new());
        let fig = updater.update(&dataset(), &sel).unwrap();

        assert!(fig.data.is_empty());
        assert_eq!(fig.layout.xaxis.range, [0.5, 12.5]);
        assert_eq!(fig.layout.xaxis.ticktext.len(), 12);
    }

    #[test]
    fn filters_on_every_dimension() {
        let updater = ChartUpdater::default();
        let data = dataset();

        let male = updater
            .update(&data, &Selection::new("T90", "1", "0", ["2021"]))
            .unwrap();
        assert_eq!(male.data[0].points().collect::<Vec<_>>(), vec![(4, 99.0)]);

        let other_item = updater
            .update(&data, &Selection::new("T80", "0", "0", ["2021"]))
            .unwrap();
        assert_eq!(other_item.data[0].points().collect::<Vec<_>>(), vec![(1, 3.1)]);

        let unknown_age = updater
            .update(&data, &Selection::new("T90", "0", "40", ["2021"]))
            .unwrap();
        assert!(unknown_age.data[0].is_empty());
    }

    #[test]
    fn null_values_are_left_out_of_series() {
        let raw = df!(
            "PRD_DE" => ["202101", "202102", "202103"],
            "ITM_ID" => ["T90", "T90", "T90"],
            "ITM_NM" => ["Employment rate", "Employment rate", "Employment rate"],
            "C1" => ["0", "0", "0"],
            "C1_NM" => ["Total", "Total", "Total"],
            "C2" => ["0", "0", "0"],
            "C2_NM" => ["All", "All", "All"],
            "DT" => [Some(10.0), None, Some(30.0)],
        )
        .unwrap();
        let data = DataLoader::from_frame(&raw).unwrap();

        let fig = ChartUpdater::default()
            .update(&data, &Selection::new("T90", "0", "0", ["2021"]))
            .unwrap();
        assert_eq!(fig.data[0].points().collect::<Vec<_>>(), vec![(1, 10.0), (3, 30.0)]);
    }

    #[test]
    fn repeated_year_yields_single_series() {
        let updater = ChartUpdater::default();
        let sel = Selection::new("T90", "0", "0", ["2021", "2020", "2021"]);
        let fig = updater.update(&dataset(), &sel).unwrap();

        let names: Vec<&str> = fig.data.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["2021", "2020"]);
    }

    #[test]
    fn update_is_idempotent() {
        let updater = ChartUpdater::new(MonthLabels::English);
        let data = dataset();
        let sel = Selection::new("T90", "0", "0", ["2021", "2020"]);

        let first = updater.update(&data, &sel).unwrap();
        let second = updater.update(&data, &sel).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.layout.xaxis.ticktext[0], "Jan");
    }
}
