use eframe::egui;
use std::sync::mpsc;

mod app;
mod config;
mod nav;
mod net;
mod ui;

use app::{FinderApp, LoadEvent};
use config::Config;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = Config::load();
    log::info!("Base URL: {}", config.base_url());

    let (load_tx, load_rx) = mpsc::channel();

    let base_url = config.base_url().to_string();
    std::thread::spawn(move || {
        let http = net::http_client();
        let (classes, source) = net::loader::load_classes(&http, &base_url);
        let _ = load_tx.send(LoadEvent::ClassesLoaded { classes, source });
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([480.0, 360.0])
            .with_min_inner_size([320.0, 200.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Busca de Turmas",
        options,
        Box::new(|cc| Ok(Box::new(FinderApp::new(cc, config, load_rx)))),
    )?;

    Ok(())
}
