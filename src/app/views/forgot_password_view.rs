use eframe::egui;

use crate::app::router::PATH_SIGN_IN;
use crate::app::state::AppState;
use crate::app::theme::colors;

use super::{error_banner, link_button, primary_button, screen_title, text_field};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    if state.forgot_password.email_sent {
        render_email_sent(ui, state);
    } else {
        render_request_form(ui, state);
    }
}

fn render_request_form(ui: &mut egui::Ui, state: &mut AppState) {
    let loading = state.forgot_password.loading;

    ui.vertical_centered(|ui| {
        let top = (ui.available_height() - 300.0).max(0.0) / 2.0;
        ui.add_space(top);

        screen_title(ui, "Forgot Password");
        ui.colored_label(
            colors::TEXT_SECONDARY,
            "Enter your email address and we'll send you a code to reset your password.",
        );
        ui.add_space(16.0);

        error_banner(ui, &state.forgot_password.error);

        text_field(
            ui,
            "Email:",
            &mut state.forgot_password.email,
            false,
            !loading,
        );
        ui.add_space(12.0);

        let has_email = !state.forgot_password.email.trim().is_empty();
        if primary_button(ui, "Send Reset Code", "Sending...", loading, has_email) {
            state.handle_reset_request();
        }

        ui.add_space(10.0);
        if link_button(ui, "Back to Sign In", !loading) {
            state.router.replace(PATH_SIGN_IN);
        }
    });
}

fn render_email_sent(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        let top = (ui.available_height() - 260.0).max(0.0) / 2.0;
        ui.add_space(top);

        screen_title(ui, "Check Your Email");
        ui.colored_label(
            colors::TEXT_SECONDARY,
            format!(
                "We've sent a password reset code to {}",
                state.forgot_password.email
            ),
        );
        ui.add_space(8.0);
        ui.colored_label(
            colors::TEXT_MUTED,
            "Please check your email and follow the instructions to reset your password.",
        );
        ui.add_space(20.0);

        if primary_button(ui, "Back to Sign In", "Back to Sign In", false, true) {
            state.forgot_password.reset();
            state.router.replace(PATH_SIGN_IN);
        }
    });
}
