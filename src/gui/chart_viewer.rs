//! Chart Viewer Widget
//! Central area showing the current figure.

use crate::charts::{ChartPlotter, Figure, MonthLabels};
use egui::RichText;

const MIN_CHART_HEIGHT: f32 = 300.0;

pub struct ChartViewer {
    figure: Figure,
    labels: MonthLabels,
}

impl ChartViewer {
    pub fn new(labels: MonthLabels) -> Self {
        Self {
            figure: Figure::monthly(labels),
            labels,
        }
    }

    pub fn set_figure(&mut self, figure: Figure) {
        self.figure = figure;
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        if self.figure.data.is_empty() {
            ui.label(RichText::new("No years selected").color(egui::Color32::GRAY));
        }
        let height = ui.available_height().max(MIN_CHART_HEIGHT);
        ChartPlotter::draw_figure(ui, &self.figure, self.labels, height);
    }
}
