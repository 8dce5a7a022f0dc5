//! Gradeboard - Classroom Grades Dashboard
//!
//! Loads a CSV of student records and renders three linked charts:
//! a G1/G3 heatmap, a box plot by study-time level, and a per-sex line chart.

mod aggregate;
mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::GradeboardApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Configure native options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 900.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gradeboard"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Gradeboard",
        options,
        Box::new(|cc| Ok(Box::new(GradeboardApp::new(cc)))),
    )
}
