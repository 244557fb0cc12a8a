// Hide console window in GUI mode (release builds only)
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod cli;
mod collector;
mod entry;
mod list;
mod logging;
mod storage;
mod textfmt;
mod theme;

use eframe::egui;

fn load_icon() -> Option<egui::IconData> {
    let png_bytes = include_bytes!("../assets/icon.png");
    let img = image::load_from_memory(png_bytes).ok()?.into_rgba8();
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.into_raw(),
        width: w,
        height: h,
    })
}

fn print_help() {
    println!("spec-sheet v{}", env!("CARGO_PKG_VERSION"));
    println!("Usage: spec-sheet [--cli]");
    println!();
    println!("  --cli    print the collected spec sheet to the terminal and exit");
    println!("  (none)   launch the GUI");
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_help();
        return;
    }
    if args.iter().any(|a| a == "--cli") {
        cli::run_cli();
        return;
    }

    logging::log_to_file("Started GUI");

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([860.0, 640.0])
        .with_min_inner_size([520.0, 380.0])
        .with_title("Spec Sheet");

    if let Some(icon_data) = load_icon() {
        viewport = viewport.with_icon(std::sync::Arc::new(icon_data));
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Spec Sheet",
        options,
        Box::new(|cc| Ok(Box::new(app::SpecSheetApp::new(cc)))),
    ) {
        eprintln!("GUI error: {}", e);
    }
}
