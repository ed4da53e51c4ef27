use eframe::egui;

use crate::app::router::{PATH_FORGOT_PASSWORD, PATH_SIGN_UP};
use crate::app::state::AppState;

use super::{error_banner, link_button, primary_button, screen_title, text_field};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let loading = state.sign_in.loading;

    ui.vertical_centered(|ui| {
        let top = (ui.available_height() - 320.0).max(0.0) / 2.0;
        ui.add_space(top);

        screen_title(ui, "Sign In");
        error_banner(ui, &state.sign_in.error);

        text_field(ui, "Email:", &mut state.sign_in.email, false, !loading);
        text_field(ui, "Password:", &mut state.sign_in.password, true, !loading);
        ui.add_space(12.0);

        if primary_button(ui, "Sign In", "Signing In...", loading, true) {
            state.handle_sign_in();
        }

        ui.add_space(10.0);
        if link_button(ui, "Forgot Password?", !loading) {
            state.router.push(PATH_FORGOT_PASSWORD);
        }
        ui.add_space(4.0);
        if link_button(ui, "Don't have an account? Sign Up", !loading) {
            state.router.push(PATH_SIGN_UP);
        }
    });
}
