use std::sync::mpsc;

use tracing::debug;

use milanko_core::compare::ComparisonList;
use milanko_core::consts::YEAR_DEFAULT;
use milanko_core::layout::{LayoutMode, ZoomState};
use milanko_core::params::ParameterSet;

use crate::messages::{WorkerCommand, WorkerResult};
use crate::panels;
use crate::states::{ImageStore, StatsFetch, StatsPhase, UiState};
use crate::worker;

pub struct MilankoApp {
    pub cmd_tx: mpsc::Sender<WorkerCommand>,
    pub result_rx: mpsc::Receiver<WorkerResult>,

    pub params: ParameterSet,
    pub year: u32,
    pub comparison: ComparisonList,
    pub layout: LayoutMode,
    pub zoom: ZoomState,

    pub stats: StatsFetch,
    pub images: ImageStore,
    pub ui_state: UiState,
    pub show_about: bool,
}

impl MilankoApp {
    pub fn new(ctx: &egui::Context) -> Self {
        let (result_tx, result_rx) = mpsc::channel();
        let cmd_tx = worker::spawn_worker(result_tx, ctx.clone());

        let mut app = Self {
            cmd_tx,
            result_rx,
            params: ParameterSet::default(),
            year: YEAR_DEFAULT,
            comparison: ComparisonList::new(),
            layout: LayoutMode::default(),
            zoom: ZoomState::new(),
            stats: StatsFetch::default(),
            images: ImageStore::default(),
            ui_state: UiState::default(),
            show_about: false,
        };
        app.request_stats();
        app
    }

    /// Issue a statistics fetch for the current parameters and year,
    /// superseding any fetch still in flight.
    pub fn request_stats(&mut self) {
        let request_id = self.stats.begin();
        debug!(request_id, year = self.year, "requesting statistics");
        self.send_command(WorkerCommand::FetchStats {
            params: self.params,
            year: self.year,
            request_id,
        });
    }

    /// Start fetches for comparison entries whose texture is not yet known.
    fn request_missing_images(&mut self) {
        let missing: Vec<String> = self
            .comparison
            .iter()
            .filter(|url| !self.images.contains(url))
            .map(str::to_string)
            .collect();
        for url in missing {
            self.images.mark_loading(url.clone());
            self.send_command(WorkerCommand::FetchImage { url });
        }
    }

    /// Drain all pending results from the worker.
    fn poll_results(&mut self, ctx: &egui::Context) {
        while let Ok(result) = self.result_rx.try_recv() {
            match result {
                WorkerResult::Stats {
                    request_id,
                    outcome,
                } => {
                    if !self.stats.accepts(request_id) {
                        debug!(request_id, "discarding superseded statistics result");
                        continue;
                    }
                    self.stats.phase = match outcome {
                        Ok(sample) => StatsPhase::Ready(sample),
                        Err(_) => StatsPhase::Unavailable,
                    };
                }
                WorkerResult::Image { url, result } => match result {
                    Ok(color_image) => {
                        let texture = ctx.load_texture(
                            url.clone(),
                            color_image,
                            egui::TextureOptions::LINEAR,
                        );
                        self.images.insert_ready(url, texture);
                    }
                    Err(_) => {
                        self.images.mark_failed(url);
                    }
                },
            }
        }
    }

    pub fn send_command(&self, cmd: WorkerCommand) {
        let _ = self.cmd_tx.send(cmd);
    }
}

impl eframe::App for MilankoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_results(ctx);
        self.request_missing_images();

        panels::top_bar::show(ctx, self);
        panels::status::show(ctx, self);
        panels::controls::show(ctx, self);
        panels::viewer::show(ctx, self);

        // About dialog
        if self.show_about {
            egui::Window::new("Milanko")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.vertical_centered(|ui| {
                        ui.heading("Milanko");
                        ui.label("Milankovitch temperature-curve explorer");
                        ui.add_space(8.0);
                        ui.label(format!("Version {}", env!("CARGO_PKG_VERSION")));
                        ui.add_space(8.0);
                        if ui.button("Close").clicked() {
                            self.show_about = false;
                        }
                    });
                });
        }
    }
}
