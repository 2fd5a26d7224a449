use eframe::egui::Ui;
use egui_extras::{Column, TableBuilder};

use crate::data::loader::LAPTOP_COLUMNS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Bottom panel – filtered data table
// ---------------------------------------------------------------------------

/// Render the filtered rows as a 13-column table. Rows are laid out lazily,
/// so the full dataset stays cheap to show.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    ui.strong(format!("Filtered laptops ({})", state.visible_indices.len()));

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .columns(Column::auto().at_least(40.0), LAPTOP_COLUMNS.len())
        .header(20.0, |mut header| {
            for name in LAPTOP_COLUMNS {
                header.col(|ui| {
                    ui.strong(name);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, state.visible_indices.len(), |mut row| {
                let laptop = &state.dataset.laptops[state.visible_indices[row.index()]];

                row.col(|ui| {
                    ui.label(laptop.index.to_string());
                });
                row.col(|ui| {
                    ui.label(&laptop.company);
                });
                row.col(|ui| {
                    ui.label(&laptop.product);
                });
                row.col(|ui| {
                    ui.label(&laptop.type_name);
                });
                row.col(|ui| {
                    ui.label(format!("{:.1}", laptop.inches));
                });
                row.col(|ui| {
                    ui.label(&laptop.screen_resolution);
                });
                row.col(|ui| {
                    ui.label(&laptop.cpu);
                });
                row.col(|ui| {
                    ui.label(format!("{} GB", laptop.ram_gb));
                });
                row.col(|ui| {
                    ui.label(&laptop.memory);
                });
                row.col(|ui| {
                    ui.label(&laptop.gpu);
                });
                row.col(|ui| {
                    ui.label(&laptop.op_sys);
                });
                row.col(|ui| {
                    ui.label(format!("{:.2} kg", laptop.weight_kg));
                });
                row.col(|ui| {
                    ui.label(format!("${:.2}", laptop.price));
                });
            });
        });
}
