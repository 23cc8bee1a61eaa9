mod app;
mod color;
mod data;
mod state;
mod ui;

use std::path::PathBuf;

use app::LaunchboardApp;
use eframe::egui;

fn main() -> eframe::Result {
    env_logger::init();

    let mut launchboard = LaunchboardApp::default();

    // Optional CLI argument: a data file to load before the UI comes up.
    // A load failure here is fatal; the dashboard must not start with no
    // data behind an explicitly requested file.
    if let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) {
        match data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} missions from {}",
                    dataset.len(),
                    path.display()
                );
                launchboard.state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        }
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Launchboard – Launch Records Dashboard",
        options,
        Box::new(move |_cc| Ok(Box::new(launchboard))),
    )
}
