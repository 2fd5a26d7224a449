use std::collections::BTreeSet;
use std::fmt::Display;

use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::color::ColorMap;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

/// Render the left filter panel. Any widget change triggers a full
/// recomputation of the derived view before the frame ends.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filter Laptops");
    ui.separator();

    let AppState {
        dataset,
        filters,
        company_colors,
        type_colors,
        ..
    } = state;

    let mut changed = false;

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            changed |= value_filter(
                ui,
                "Company",
                &dataset.companies,
                &mut filters.companies,
                Some(company_colors),
            );
            changed |= value_filter(
                ui,
                "Type",
                &dataset.type_names,
                &mut filters.type_names,
                Some(type_colors),
            );
            changed |= value_filter(
                ui,
                "RAM (GB)",
                &dataset.ram_values,
                &mut filters.ram_values,
                None,
            );

            ui.separator();
            ui.strong("Maximum price");
            changed |= ui
                .add(
                    egui::Slider::new(
                        &mut filters.max_price,
                        dataset.price_min..=dataset.price_max,
                    )
                    .prefix("$")
                    .fixed_decimals(0),
                )
                .changed();
        });

    if changed {
        state.refilter();
    }
}

/// A collapsible multi-select over the unique values of one column, with
/// All / None shortcuts. Returns whether the selection changed this frame.
/// `colors` adds a swatch per value when the column also drives chart colour.
fn value_filter<T: Ord + Clone + Display>(
    ui: &mut Ui,
    label: &str,
    all_values: &BTreeSet<T>,
    selected: &mut BTreeSet<T>,
    colors: Option<&ColorMap>,
) -> bool {
    let mut changed = false;

    let header_text = format!("{label}  ({}/{})", selected.len(), all_values.len());
    egui::CollapsingHeader::new(RichText::new(header_text).strong())
        .id_salt(label)
        .default_open(false)
        .show(ui, |ui: &mut Ui| {
            ui.horizontal(|ui: &mut Ui| {
                if ui.small_button("All").clicked() {
                    *selected = all_values.clone();
                    changed = true;
                }
                if ui.small_button("None").clicked() {
                    selected.clear();
                    changed = true;
                }
            });

            for val in all_values {
                let value_label = val.to_string();
                let mut text = RichText::new(&value_label);
                if let Some(cm) = colors {
                    text = text.color(cm.color_for(&value_label));
                }

                let mut checked = selected.contains(val);
                if ui.checkbox(&mut checked, text).changed() {
                    if checked {
                        selected.insert(val.clone());
                    } else {
                        selected.remove(val);
                    }
                    changed = true;
                }
            }
        });

    changed
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{} laptops loaded, {} match the filters",
            state.dataset.len(),
            state.visible_indices.len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Let the user point the dashboard at another laptop CSV with the same
/// schema. On failure the current dataset stays untouched; there is no
/// partially loaded state.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open laptop data")
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_csv(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} laptops across {} companies",
                    dataset.len(),
                    dataset.companies.len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e}");
                state.status_message = Some(format!("Error: {e}"));
            }
        }
    }
}
