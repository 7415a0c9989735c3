//! Pentago GUI
//!
//! A graphical interface for playing Pentago against the AI or another player.

use pentago::ui::PentagoApp;

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Pentago"),
        ..Default::default()
    };

    eframe::run_native(
        "Pentago",
        options,
        Box::new(|cc| Ok(Box::new(PentagoApp::new(cc)))),
    )
}
