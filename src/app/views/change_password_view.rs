use eframe::egui;

use crate::app::state::AppState;
use crate::app::theme::colors;

use super::{error_banner, link_button, primary_button, screen_title, text_field};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let loading = state.change_password.loading;

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                let top = (ui.available_height() - 380.0).max(0.0) / 2.0;
                ui.add_space(top);

                screen_title(ui, "Change Password");
                ui.colored_label(
                    colors::TEXT_SECONDARY,
                    "Enter your current password and choose a new password.",
                );
                ui.add_space(16.0);

                error_banner(ui, &state.change_password.error);

                text_field(
                    ui,
                    "Current:",
                    &mut state.change_password.current_password,
                    true,
                    !loading,
                );
                text_field(
                    ui,
                    "New:",
                    &mut state.change_password.new_password,
                    true,
                    !loading,
                );
                text_field(
                    ui,
                    "Confirm:",
                    &mut state.change_password.confirm_password,
                    true,
                    !loading,
                );

                ui.colored_label(
                    colors::TEXT_MUTED,
                    egui::RichText::new("Password must be at least 8 characters long").size(12.0),
                );
                ui.add_space(16.0);

                let filled = !state.change_password.current_password.trim().is_empty()
                    && !state.change_password.new_password.trim().is_empty()
                    && !state.change_password.confirm_password.trim().is_empty();
                if primary_button(ui, "Update Password", "Updating...", loading, filled) {
                    state.handle_change_password();
                }

                ui.add_space(10.0);
                if link_button(ui, "Cancel", !loading) {
                    state.change_password.reset();
                    state.router.back();
                }
            });
        });
}
