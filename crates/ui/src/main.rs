use liftline_ui::MapApp;

fn main() -> eframe::Result {
    colog::init();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1100.0, 720.0]),
        ..Default::default()
    };
    eframe::run_native(
        "liftline",
        options,
        Box::new(|cc| Ok(Box::new(MapApp::new(cc)))),
    )
}
