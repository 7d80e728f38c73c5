//! Control Panel Widget
//! Top bar with the item / sex / age selectors and the year checkboxes.

use crate::charts::Selection;
use crate::data::{FilterOption, FilterOptions};
use egui::{ComboBox, RichText};

/// Selector state for the native window.
pub struct ControlPanel {
    options: FilterOptions,
    pub selection: Selection,
}

impl ControlPanel {
    pub fn new(options: FilterOptions, initial: Selection) -> Self {
        Self {
            options,
            selection: initial,
        }
    }

    fn combo(
        ui: &mut egui::Ui,
        id: &str,
        label: &str,
        options: &[FilterOption],
        current: &mut String,
    ) -> bool {
        let mut changed = false;
        let selected_text = options
            .iter()
            .find(|o| o.value == *current)
            .map(|o| o.label.clone())
            .unwrap_or_else(|| current.clone());

        ui.label(label);
        ComboBox::from_id_salt(id)
            .width(220.0)
            .selected_text(selected_text)
            .show_ui(ui, |ui| {
                for opt in options {
                    if ui
                        .selectable_label(*current == opt.value, &opt.label)
                        .clicked()
                        && *current != opt.value
                    {
                        *current = opt.value.clone();
                        changed = true;
                    }
                }
            });
        changed
    }

    /// Toggle `year` in the selection, keeping pick order.
    fn toggle_year(&mut self, year: &str, on: bool) {
        let present = self.selection.years.iter().any(|y| y == year);
        if on && !present {
            self.selection.years.push(year.to_string());
        } else if !on && present {
            self.selection.years.retain(|y| y != year);
        }
    }

    /// Draw the selectors; returns the action to take.
    pub fn show(&mut self, ui: &mut egui::Ui) -> ControlPanelAction {
        let mut changed = false;

        ui.horizontal(|ui| {
            changed |= Self::combo(
                ui,
                "itm_dropdown",
                "Item",
                &self.options.items,
                &mut self.selection.item,
            );
            changed |= Self::combo(
                ui,
                "sex_dropdown",
                "Sex",
                &self.options.sexes,
                &mut self.selection.sex,
            );
            changed |= Self::combo(
                ui,
                "age_dropdown",
                "Age",
                &self.options.ages,
                &mut self.selection.age,
            );
        });

        ui.add_space(5.0);

        ui.horizontal_wrapped(|ui| {
            ui.label(RichText::new("Years").strong());
            let years: Vec<String> = self.options.years.iter().map(|o| o.value.clone()).collect();
            for year in years {
                let mut on = self.selection.years.contains(&year);
                if ui.checkbox(&mut on, &year).changed() {
                    self.toggle_year(&year, on);
                    changed = true;
                }
            }
            if ui.small_button("Clear").clicked() && !self.selection.years.is_empty() {
                self.selection.years.clear();
                changed = true;
            }
        });

        if changed {
            ControlPanelAction::SelectionChanged
        } else {
            ControlPanelAction::None
        }
    }
}

/// Actions triggered by control panel
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    SelectionChanged,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn panel() -> ControlPanel {
        let options = FilterOptions {
            years: vec![FilterOption::new("2021", "2021"), FilterOption::new("2020", "2020")],
            ..Default::default()
        };
        ControlPanel::new(options, Selection::new("T90", "0", "0", ["2020"]))
    }

    #[test]
    fn toggling_years_keeps_pick_order() {
        let mut panel = panel();
        panel.toggle_year("2021", true);
        panel.toggle_year("2021", true);
        assert_eq!(panel.selection.years, vec!["2020", "2021"]);

        panel.toggle_year("2020", false);
        assert_eq!(panel.selection.years, vec!["2021"]);
    }
}
