use eframe::egui;
use log::info;

mod platform;
mod ui;

use ui::app_state::BodyScoreApp;

fn main() -> Result<(), eframe::Error> {
    // Initialize logging for debugging
    env_logger::init();
    info!("Starting Body Score egui application");

    // Phone-like portrait window: the layout targets a single narrow column
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([420.0, 860.0])
            .with_min_inner_size([360.0, 700.0])
            .with_max_inner_size([540.0, 1100.0])
            .with_title("Body Score")
            .with_resizable(true),
        ..Default::default()
    };

    info!("Launching egui window");
    eframe::run_native(
        "Body Score",
        options,
        Box::new(|_cc| {
            let app = BodyScoreApp::new();
            info!("Successfully initialized Body Score app");
            Ok(Box::new(app))
        }),
    )
}
