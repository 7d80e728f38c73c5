//! Native dashboard window.
//! Same selectors and chart as the web page, recomputed on every change.

use crate::charts::{ChartUpdater, Selection};
use crate::data::Dataset;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction};
use egui::{Color32, RichText};
use std::sync::Arc;
use tracing::error;

pub struct DashboardApp {
    title: String,
    dataset: Arc<Dataset>,
    updater: ChartUpdater,
    control_panel: ControlPanel,
    chart_viewer: ChartViewer,
    status: Option<String>,
}

impl DashboardApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        title: String,
        dataset: Arc<Dataset>,
        updater: ChartUpdater,
        initial: Selection,
    ) -> Self {
        let mut app = Self {
            title,
            control_panel: ControlPanel::new(dataset.options().clone(), initial),
            chart_viewer: ChartViewer::new(updater.labels()),
            dataset,
            updater,
            status: None,
        };
        app.refresh();
        app
    }

    /// Rebuild the figure from the current selection.
    fn refresh(&mut self) {
        match self.updater.update(&self.dataset, &self.control_panel.selection) {
            Ok(figure) => {
                self.chart_viewer.set_figure(figure);
                self.status = None;
            }
            Err(e) => {
                error!("chart update failed: {e}");
                self.status = Some(format!("Error: {e}"));
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("control_panel").show(ctx, |ui| {
            ui.add_space(5.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&self.title).size(20.0).strong());
            });
            ui.add_space(5.0);

            if self.control_panel.show(ui) == ControlPanelAction::SelectionChanged {
                self.refresh();
            }

            if let Some(status) = &self.status {
                ui.label(RichText::new(status).color(Color32::from_rgb(220, 53, 69)));
            }
            ui.add_space(5.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.chart_viewer.show(ui);
        });
    }
}
