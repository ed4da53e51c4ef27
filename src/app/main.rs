/**
 * Anteroom - Main Entry Point
 *
 * Binary entry point for the native desktop application. Loads
 * configuration, initializes logging, and runs the eframe event loop.
 */
use anteroom::app::state::AppState;
use anteroom::app::theme::styles;
use anteroom::app::{views, Config};
use eframe::egui;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> Result<(), eframe::Error> {
    init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "configuration error");
            eprintln!("configuration error: {}", err);
            std::process::exit(1);
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 720.0])
            .with_min_inner_size([400.0, 560.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Anteroom",
        options,
        Box::new(|cc| {
            styles::apply_global_theme(&cc.egui_ctx);
            let mut state = AppState::new(config);
            state.begin_session_restore();
            Ok(Box::new(AnteroomApp { state }))
        }),
    )
}

/// Main application shell
struct AnteroomApp {
    state: AppState,
}

impl eframe::App for AnteroomApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.check_results();
        self.state.run_route_guard();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint();
    }
}
