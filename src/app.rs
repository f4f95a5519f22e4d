use eframe::egui;
use std::sync::mpsc;
use std::time::Duration;

use crate::config::Config;
use crate::nav;
use crate::net::loader::ListSource;
use crate::ui::SearchPanel;

pub enum LoadEvent {
    ClassesLoaded {
        classes: Vec<String>,
        source: ListSource,
    },
}

pub struct FinderApp {
    config: Config,
    classes: Vec<String>,
    loaded: bool,
    search: SearchPanel,

    load_receiver: mpsc::Receiver<LoadEvent>,
}

impl FinderApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        config: Config,
        load_rx: mpsc::Receiver<LoadEvent>,
    ) -> Self {
        Self {
            config,
            classes: Vec::new(),
            loaded: false,
            search: SearchPanel::new(),
            load_receiver: load_rx,
        }
    }
}

impl eframe::App for FinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Ok(event) = self.load_receiver.try_recv() {
            match event {
                LoadEvent::ClassesLoaded { classes, source } => {
                    log::info!("Class list ready: {} entries ({:?})", classes.len(), source);
                    self.classes = classes;
                    self.loaded = true;
                }
            }
        }

        if let Some(class_name) = self.search.show(ctx, &self.classes, self.loaded) {
            nav::open_class_page(self.config.base_url(), &class_name);
        }

        if !self.loaded {
            // Keep polling the loader channel while no input events arrive.
            ctx.request_repaint_after(Duration::from_millis(100));
        }
    }
}
