//! Main application entry point (native).

fn main() -> eframe::Result {
    env_logger::init();
    log::info!("Starting shelfcase");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("shelfcase")
            .with_inner_size([1100.0, 780.0])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "shelfcase",
        options,
        Box::new(|cc| Ok(Box::new(shelfcase_app::ShelfApp::new(cc)))),
    )
}
