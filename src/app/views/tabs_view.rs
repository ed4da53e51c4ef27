use eframe::egui;

use crate::app::router::PATH_CHANGE_PASSWORD;
use crate::app::state::AppState;
use crate::app::theme::{colors, styles};
use crate::app::types::ActiveTab;

use super::screen_title;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - 180.0).max(0.0) / 2.0);
        if ui
            .selectable_label(state.active_tab == ActiveTab::Home, "Home")
            .clicked()
        {
            state.active_tab = ActiveTab::Home;
        }
        ui.add_space(20.0);
        if ui
            .selectable_label(state.active_tab == ActiveTab::Profile, "Profile")
            .clicked()
        {
            state.active_tab = ActiveTab::Profile;
        }
    });
    ui.separator();

    match state.active_tab {
        ActiveTab::Home => render_home(ui, state),
        ActiveTab::Profile => render_profile(ui, state),
    }
}

fn render_home(ui: &mut egui::Ui, state: &mut AppState) {
    let (greeting, email) = match state.session.user() {
        Some(user) => (
            format!("Hello, {}!", user.display_name()),
            user.email.clone(),
        ),
        None => ("Hello!".to_string(), String::new()),
    };

    ui.vertical_centered(|ui| {
        let top = (ui.available_height() - 220.0).max(0.0) / 2.0;
        ui.add_space(top);

        screen_title(ui, "Welcome!");
        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new(greeting).size(18.0).strong(),
        );
        ui.add_space(6.0);
        ui.colored_label(colors::TEXT_SECONDARY, email);
        ui.add_space(30.0);
        ui.separator();
        ui.add_space(30.0);

        if ui.button("Sign Out").clicked() {
            state.sign_out();
        }
    });
}

fn render_profile(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(user) = state.session.user().cloned() else {
        return;
    };

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(20.0);
                screen_title(ui, "Profile");

                let card_width = ui.available_width().min(480.0);

                ui.scope(|ui| {
                    ui.set_max_width(card_width);

                    styles::card_frame().show(ui, |ui| {
                        section_title(ui, "Personal Information");
                        info_row(ui, "First Name:", value_or(&user.first_name, "Not provided"));
                        info_row(ui, "Last Name:", value_or(&user.last_name, "Not provided"));
                        info_row(
                            ui,
                            "Full Name:",
                            user.full_name().unwrap_or_else(|| "Not provided".to_string()),
                        );
                        info_row(ui, "Email:", user.email.clone());
                        info_row(ui, "Username:", value_or(&user.username, "Not set"));
                        info_row(ui, "User ID:", user.id.clone());
                        info_row(
                            ui,
                            "Created:",
                            user.created_at
                                .map(|t| t.format("%b %e, %Y").to_string())
                                .unwrap_or_else(|| "Not available".to_string()),
                        );
                    });

                    ui.add_space(16.0);

                    styles::card_frame().show(ui, |ui| {
                        section_title(ui, "Account Status");
                        status_row(ui, "Email Verified:", user.email_verified);
                        info_row(
                            ui,
                            "Last Sign In:",
                            user.last_sign_in_at
                                .map(|t| t.format("%b %e, %Y %H:%M").to_string())
                                .unwrap_or_else(|| "Not available".to_string()),
                        );
                    });

                    ui.add_space(16.0);

                    styles::card_frame().show(ui, |ui| {
                        section_title(ui, "Actions");
                        ui.add_space(4.0);
                        if ui
                            .add_sized(
                                [ui.available_width(), 34.0],
                                egui::Button::new(
                                    egui::RichText::new("Change Password")
                                        .color(colors::TEXT_ON_PRIMARY),
                                )
                                .fill(colors::PRIMARY),
                            )
                            .clicked()
                        {
                            state.router.push(PATH_CHANGE_PASSWORD);
                        }
                        ui.add_space(8.0);
                        if ui
                            .add_sized([ui.available_width(), 34.0], egui::Button::new("Sign Out"))
                            .clicked()
                        {
                            state.sign_out();
                        }
                    });
                });

                ui.add_space(20.0);
            });
        });
}

fn section_title(ui: &mut egui::Ui, title: &str) {
    ui.with_layout(egui::Layout::top_down(egui::Align::Min), |ui| {
        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new(title).size(16.0).strong(),
        );
    });
    ui.add_space(8.0);
}

fn info_row(ui: &mut egui::Ui, label: &str, value: String) {
    ui.horizontal(|ui| {
        ui.colored_label(colors::TEXT_SECONDARY, label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.colored_label(colors::TEXT_PRIMARY, value);
        });
    });
    ui.add_space(2.0);
    ui.separator();
    ui.add_space(2.0);
}

fn status_row(ui: &mut egui::Ui, label: &str, ok: bool) {
    ui.horizontal(|ui| {
        ui.colored_label(colors::TEXT_SECONDARY, label);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (text, color) = if ok {
                ("Yes", colors::SUCCESS)
            } else {
                ("No", colors::ERROR)
            };
            ui.colored_label(color, egui::RichText::new(text).strong());
        });
    });
    ui.add_space(2.0);
    ui.separator();
    ui.add_space(2.0);
}

fn value_or(value: &Option<String>, fallback: &str) -> String {
    value.clone().unwrap_or_else(|| fallback.to_string())
}
