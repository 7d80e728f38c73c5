//! Charts module - figure model, chart updates and plotting

mod figure;
mod plotter;
mod selection;
mod updater;

pub use figure::{Axis, Figure, Layout, MonthLabels, Trace, MONTH_AXIS_RANGE};
pub use plotter::{ChartPlotter, PALETTE};
pub use selection::Selection;
pub use updater::{ChartError, ChartUpdater};
