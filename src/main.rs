//! Nine Men's Morris GUI
//!
//! A graphical interface for playing Mill against the AI or another player.

use mill::ui::MillApp;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("mill=info")))
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Nine Men's Morris"),
        ..Default::default()
    };

    eframe::run_native(
        "Nine Men's Morris",
        options,
        Box::new(|cc| Ok(Box::new(MillApp::new(cc)))),
    )
}
