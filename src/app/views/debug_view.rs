use eframe::egui;

use crate::app::debug::{DebugCategory, DebugLevel};
use crate::app::state::AppState;

pub fn render_debug_panel(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical(|ui| {
        ui.horizontal(|ui| {
            ui.heading("Debug Console");
            ui.label(format!("Entries: {}", state.debug_logger.count()));
            if ui.button("Clear").clicked() {
                state.debug_logger.clear();
            }

            ui.separator();
            ui.label("Filter:");
            let categories = [
                ("All", None),
                ("Auth", Some(DebugCategory::Auth)),
                ("Nav", Some(DebugCategory::Nav)),
                ("Net", Some(DebugCategory::Net)),
                ("Storage", Some(DebugCategory::Storage)),
                ("Ui", Some(DebugCategory::Ui)),
            ];
            for (label, category) in categories {
                if ui
                    .selectable_label(state.debug_filter_category == category, label)
                    .clicked()
                {
                    state.debug_filter_category = category;
                }
            }
        });

        ui.separator();

        let entries = if let Some(category) = state.debug_filter_category {
            state.debug_logger.get_entries_by_category(category)
        } else {
            state.debug_logger.get_entries()
        };

        egui::ScrollArea::vertical()
            .auto_shrink([false; 2])
            .max_height(160.0)
            .show(ui, |ui| {
                for entry in entries.iter().rev().take(100) {
                    let color = match entry.level {
                        DebugLevel::Error => egui::Color32::RED,
                        DebugLevel::Warn => egui::Color32::YELLOW,
                        DebugLevel::Info => egui::Color32::DARK_GREEN,
                        DebugLevel::Debug => egui::Color32::GRAY,
                    };
                    ui.colored_label(color, entry.to_string());
                }
            });

        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Stats:");
            ui.colored_label(
                egui::Color32::RED,
                format!(
                    "Errors: {}",
                    state.debug_logger.count_by_level(DebugLevel::Error)
                ),
            );
            ui.colored_label(
                egui::Color32::YELLOW,
                format!(
                    "Warnings: {}",
                    state.debug_logger.count_by_level(DebugLevel::Warn)
                ),
            );
            ui.label(format!("Total: {}", state.debug_logger.count()));
        });
    });
}
