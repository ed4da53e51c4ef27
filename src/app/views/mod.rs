use eframe::egui;

use crate::app::guard::Segment;
use crate::app::state::AppState;
use crate::app::theme::colors;

pub mod change_password_view;
pub mod debug_view;
pub mod forgot_password_view;
pub mod sign_in_view;
pub mod sign_up_view;
pub mod tabs_view;

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    let frame_style = egui::Frame::default()
        .fill(colors::TOP_BAR_BG)
        .inner_margin(egui::Margin::symmetric(12, 8));

    egui::TopBottomPanel::top("top_panel")
        .frame(frame_style)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(
                    colors::PRIMARY,
                    egui::RichText::new("Anteroom").size(18.0).strong(),
                );

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(8.0);

                    if ui
                        .selectable_label(state.debug_view_open, "Debug")
                        .clicked()
                    {
                        state.debug_view_open = !state.debug_view_open;
                    }

                    if state.session.is_signed_in() {
                        ui.add_space(8.0);
                        if ui.button("Sign Out").clicked() {
                            state.sign_out();
                        }
                        if let Some(user) = state.session.user() {
                            ui.colored_label(colors::TEXT_SECONDARY, user.email.clone());
                        }
                    }
                });
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    if state.debug_view_open {
        egui::TopBottomPanel::bottom("debug_panel")
            .resizable(true)
            .show(ctx, |ui| {
                debug_view::render_debug_panel(ui, state);
            });
    }

    let frame = egui::Frame::default()
        .fill(colors::BG_LIGHT)
        .inner_margin(egui::Margin::same(0));

    egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
        if state.splash.is_visible() {
            render_loading(ui);
            return;
        }

        match state.router.active_segment() {
            Segment::SignIn => sign_in_view::render(ui, state),
            Segment::SignUp => sign_up_view::render(ui, state),
            Segment::ForgotPassword => forgot_password_view::render(ui, state),
            Segment::TabsRoot => tabs_view::render(ui, state),
            Segment::ChangePassword => change_password_view::render(ui, state),
            Segment::Other => render_unknown_route(ui, state),
        }
    });
}

/// Splash shown until session bootstrapping completes.
fn render_loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        let top = (ui.available_height() - 80.0).max(0.0) / 2.0;
        ui.add_space(top);
        ui.add(egui::Spinner::new().size(36.0));
        ui.add_space(10.0);
        ui.colored_label(colors::TEXT_SECONDARY, "Loading...");
    });
}

/// Unknown segments render a plain placeholder. Signed-in users never see
/// this (the guard redirects them to tabs); signed-out users are allowed
/// to stay.
fn render_unknown_route(ui: &mut egui::Ui, state: &mut AppState) {
    ui.vertical_centered(|ui| {
        ui.add_space(120.0);
        ui.colored_label(
            colors::TEXT_PRIMARY,
            egui::RichText::new("Screen not found").size(24.0).strong(),
        );
        ui.add_space(8.0);
        ui.colored_label(colors::TEXT_SECONDARY, state.router.current_path());
        ui.add_space(20.0);
        if ui.button("Go to Sign In").clicked() {
            state
                .router
                .replace(crate::app::router::PATH_SIGN_IN);
        }
    });
}

/// One labeled single-line input, shared by the form screens.
pub(crate) fn text_field(
    ui: &mut egui::Ui,
    label: &str,
    value: &mut String,
    password: bool,
    enabled: bool,
) {
    ui.horizontal(|ui| {
        let label_width = 110.0;
        let input_width = 260.0;
        ui.add_space((ui.available_width() - label_width - input_width - 8.0).max(0.0) / 2.0);
        ui.add_sized(
            [label_width, 24.0],
            egui::Label::new(egui::RichText::new(label).color(colors::TEXT_SECONDARY)),
        );
        ui.add_enabled_ui(enabled, |ui| {
            ui.add_sized(
                [input_width, 28.0],
                egui::TextEdit::singleline(value)
                    .password(password)
                    .text_color(colors::TEXT_PRIMARY),
            );
        });
    });
    ui.add_space(8.0);
}

/// The red banner shown when a screen has an error to display.
pub(crate) fn error_banner(ui: &mut egui::Ui, error: &Option<String>) {
    if let Some(message) = error {
        ui.vertical_centered(|ui| {
            crate::app::theme::styles::error_banner_frame().show(ui, |ui| {
                ui.colored_label(colors::ERROR, message.as_str());
            });
        });
        ui.add_space(10.0);
    }
}

/// Centered screen title.
pub(crate) fn screen_title(ui: &mut egui::Ui, title: &str) {
    ui.colored_label(
        colors::TEXT_PRIMARY,
        egui::RichText::new(title).size(28.0).strong(),
    );
    ui.add_space(20.0);
}

/// A borderless, link-styled button.
pub(crate) fn link_button(ui: &mut egui::Ui, text: &str, enabled: bool) -> bool {
    ui.add_enabled(
        enabled,
        egui::Link::new(egui::RichText::new(text).color(colors::PRIMARY)),
    )
    .clicked()
}

/// Primary action button; shows the busy label while an operation runs.
pub(crate) fn primary_button(
    ui: &mut egui::Ui,
    label: &str,
    busy_label: &str,
    loading: bool,
    enabled: bool,
) -> bool {
    let text = if loading { busy_label } else { label };
    ui.add_enabled(
        enabled && !loading,
        egui::Button::new(
            egui::RichText::new(text)
                .color(colors::TEXT_ON_PRIMARY)
                .size(16.0),
        )
        .min_size(egui::vec2(260.0, 36.0))
        .fill(colors::PRIMARY),
    )
    .clicked()
}
