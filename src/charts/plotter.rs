//! Chart Plotter Module
//! Draws a [`Figure`] as an interactive egui_plot line chart.

use super::figure::{Figure, MonthLabels, MONTH_AXIS_RANGE};
use egui::Color32;
use egui_plot::{GridMark, Legend, Line, Plot, PlotPoints, Points};

/// Series colors, cycled in selection order.
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219), // Blue
    Color32::from_rgb(231, 76, 60),  // Red
    Color32::from_rgb(46, 204, 113), // Green
    Color32::from_rgb(155, 89, 182), // Purple
    Color32::from_rgb(243, 156, 18), // Orange
    Color32::from_rgb(26, 188, 156), // Teal
    Color32::from_rgb(233, 30, 99),  // Pink
    Color32::from_rgb(0, 188, 212),  // Cyan
    Color32::from_rgb(121, 85, 72),  // Brown
    Color32::from_rgb(96, 125, 139), // Blue Grey
];

pub struct ChartPlotter;

impl ChartPlotter {
    pub fn series_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    /// One tick per month, nothing in between.
    fn month_marks() -> Vec<GridMark> {
        (1..=12)
            .map(|m| GridMark {
                value: m as f64,
                step_size: 1.0,
            })
            .collect()
    }

    /// Draw every trace as line + markers on the fixed month axis.
    pub fn draw_figure(ui: &mut egui::Ui, figure: &Figure, labels: MonthLabels, height: f32) {
        Plot::new("monthly_chart")
            .height(height)
            .legend(Legend::default())
            .allow_scroll(false)
            .y_axis_label("Value")
            .include_x(MONTH_AXIS_RANGE[0])
            .include_x(MONTH_AXIS_RANGE[1])
            .x_grid_spacer(|_input| Self::month_marks())
            .x_axis_formatter(move |mark, _range| {
                let month = mark.value.round();
                if (mark.value - month).abs() > f64::EPSILON {
                    return String::new();
                }
                labels.label(month as i32).unwrap_or_default().to_string()
            })
            .show(ui, |plot_ui| {
                for (idx, trace) in figure.data.iter().enumerate() {
                    let color = Self::series_color(idx);
                    let points: Vec<[f64; 2]> = trace
                        .points()
                        .map(|(month, value)| [month as f64, value])
                        .collect();

                    plot_ui.line(
                        Line::new(PlotPoints::from_iter(points.iter().copied()))
                            .color(color)
                            .width(2.0)
                            .name(&trace.name),
                    );
                    plot_ui.points(
                        Points::new(PlotPoints::from_iter(points.iter().copied()))
                            .radius(3.5)
                            .color(color)
                            .name(&trace.name),
                    );
                }
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colors_cycle_through_palette() {
        assert_eq!(ChartPlotter::series_color(0), PALETTE[0]);
        assert_eq!(ChartPlotter::series_color(PALETTE.len() + 2), PALETTE[2]);
    }

    #[test]
    fn month_marks_cover_the_year() {
        let marks = ChartPlotter::month_marks();
        assert_eq!(marks.len(), 12);
        assert_eq!(marks[0].value, 1.0);
        assert_eq!(marks[11].value, 12.0);
    }
}
