mod app;

use app::PaginationDemoApp;
use eframe::egui;
use egui_pagination::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let config = Config::load().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not load config, using defaults");
        Config::default()
    });
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        items_per_page = config.items_per_page,
        "starting pagination demo"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 720.0])
            .with_title("Pagination Demo"),
        ..Default::default()
    };

    eframe::run_native(
        "Pagination Demo",
        options,
        Box::new(move |cc| Box::new(PaginationDemoApp::new(cc, config))),
    )
    .map_err(|err| anyhow::anyhow!("failed to run demo: {err}"))
}
