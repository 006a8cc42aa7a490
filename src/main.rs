//! Five in a Row GUI
//!
//! A graphical two-player Gomoku board.

use fiverow::ui::FiveInARowApp;

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([950.0, 720.0])
            .with_min_inner_size([760.0, 580.0])
            .with_title("Five in a Row"),
        ..Default::default()
    };

    eframe::run_native(
        "Five in a Row",
        options,
        Box::new(|cc| Ok(Box::new(FiveInARowApp::new(cc)))),
    )
}
