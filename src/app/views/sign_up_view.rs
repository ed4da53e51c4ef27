use eframe::egui;

use crate::app::router::PATH_SIGN_IN;
use crate::app::state::AppState;
use crate::app::theme::colors;

use super::{error_banner, link_button, primary_button, screen_title, text_field};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.sign_up.pending_verification {
        render_verification_step(ui, state);
    } else {
        render_sign_up_form(ui, state);
    }
}

fn render_sign_up_form(ui: &mut egui::Ui, state: &mut AppState) {
    let loading = state.sign_up.loading;

    ui.vertical_centered(|ui| {
        let top = (ui.available_height() - 400.0).max(0.0) / 2.0;
        ui.add_space(top);

        screen_title(ui, "Sign Up");
        error_banner(ui, &state.sign_up.error);

        text_field(
            ui,
            "First Name:",
            &mut state.sign_up.first_name,
            false,
            !loading,
        );
        text_field(
            ui,
            "Last Name:",
            &mut state.sign_up.last_name,
            false,
            !loading,
        );
        text_field(ui, "Email:", &mut state.sign_up.email, false, !loading);
        text_field(ui, "Password:", &mut state.sign_up.password, true, !loading);
        ui.add_space(12.0);

        if primary_button(ui, "Sign Up", "Creating Account...", loading, true) {
            state.handle_sign_up();
        }

        ui.add_space(10.0);
        if link_button(ui, "Have an account? Sign In", !loading) {
            state.router.replace(PATH_SIGN_IN);
        }
    });
}

fn render_verification_step(ui: &mut egui::Ui, state: &mut AppState) {
    let loading = state.sign_up.loading;

    ui.vertical_centered(|ui| {
        let top = (ui.available_height() - 280.0).max(0.0) / 2.0;
        ui.add_space(top);

        screen_title(ui, "Verify Email");
        ui.colored_label(
            colors::TEXT_SECONDARY,
            format!("Enter the verification code sent to {}", state.sign_up.email),
        );
        ui.add_space(16.0);

        error_banner(ui, &state.sign_up.error);

        text_field(
            ui,
            "Code:",
            &mut state.sign_up.code,
            false,
            !loading,
        );
        ui.add_space(12.0);

        if primary_button(ui, "Verify Email", "Verifying...", loading, true) {
            state.handle_verify_email();
        }
    });
}
