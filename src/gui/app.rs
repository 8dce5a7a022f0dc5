//! Gradeboard Main Application
//! Main window: background CSV load, full re-aggregation, dashboard.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{channel, Receiver};
use std::thread;

use egui::{Color32, RichText};

use crate::aggregate::{self, FiveNumberSummary, HeatCell, SexSeries};
use crate::data::{self, Sex, StudentRecord};
use crate::gui::dashboard::{self, DashboardAction};

/// CSV loaded at startup when present.
const DEFAULT_DATA_PATH: &str = "data/student-mat.csv";

/// CSV loading result from the background thread.
enum LoadResult {
    Complete(Vec<StudentRecord>),
    Error(String),
}

/// Main application window.
pub struct GradeboardApp {
    records: Vec<StudentRecord>,

    // Derived chart data, fully replaced on every load/filter change
    summaries: Vec<FiveNumberSummary>,
    heat_cells: Vec<HeatCell>,
    series: Vec<SexSeries>,

    sex_filter: Option<Sex>,
    status: String,

    // Async CSV loading
    load_rx: Option<Receiver<LoadResult>>,
    is_loading: bool,
}

impl GradeboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            records: Vec::new(),
            summaries: Vec::new(),
            heat_cells: Vec::new(),
            series: Vec::new(),
            sex_filter: None,
            status: "Ready".to_string(),
            load_rx: None,
            is_loading: false,
        };

        if Path::new(DEFAULT_DATA_PATH).exists() {
            app.start_load(PathBuf::from(DEFAULT_DATA_PATH));
        } else {
            app.status = format!("Place the class CSV at {DEFAULT_DATA_PATH} or browse for one");
        }
        app
    }

    /// Kick off a CSV load on a background thread.
    fn start_load(&mut self, path: PathBuf) {
        if self.is_loading {
            return;
        }
        self.is_loading = true;
        self.status = format!("Loading {}...", path.display());

        let (tx, rx) = channel();
        self.load_rx = Some(rx);

        thread::spawn(move || {
            let result = match data::load_records(&path.to_string_lossy()) {
                Ok(records) => LoadResult::Complete(records),
                Err(e) => LoadResult::Error(e.to_string()),
            };
            let _ = tx.send(result);
        });
    }

    /// Check for CSV loading results.
    fn check_load_results(&mut self) {
        let rx = self.load_rx.take();
        if let Some(rx) = rx {
            let mut should_keep_receiver = true;

            while let Ok(result) = rx.try_recv() {
                match result {
                    LoadResult::Complete(records) => {
                        self.status = format!("Loaded {} student records", records.len());
                        self.records = records;
                        self.recompute();
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                    LoadResult::Error(error) => {
                        log::warn!("CSV load failed: {error}");
                        self.status = format!("Error: {error}");
                        self.is_loading = false;
                        should_keep_receiver = false;
                    }
                }
            }

            if should_keep_receiver {
                self.load_rx = Some(rx);
            }
        }
    }

    /// Recompute all derived chart data from the loaded records.
    /// Prior aggregates are replaced wholesale, never mutated in place.
    fn recompute(&mut self) {
        let records = &self.records;
        let filter = self.sex_filter;

        let (summaries, (heat_cells, series)) = rayon::join(
            || aggregate::summarize_by_study_time(records),
            || {
                rayon::join(
                    || aggregate::count_grade_pairs(records),
                    || aggregate::series_by_sex(records, filter),
                )
            },
        );

        log::debug!(
            "Aggregated {} levels, {} heat cells, {} series",
            summaries.len(),
            heat_cells.len(),
            series.len()
        );
        self.summaries = summaries;
        self.heat_cells = heat_cells;
        self.series = series;
    }

    /// Handle CSV file selection.
    fn handle_browse_csv(&mut self) {
        if self.is_loading {
            return;
        }
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .pick_file()
        {
            self.start_load(path);
        }
    }
}

impl eframe::App for GradeboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        if self.is_loading {
            ctx.request_repaint();
        }

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("📊 Gradeboard")
                        .size(20.0)
                        .color(Color32::from_rgb(100, 149, 237)),
                );
                ui.separator();
                if ui.button("📂 Browse CSV").clicked() {
                    self.handle_browse_csv();
                }
                ui.separator();

                let status_color = if self.status.contains("Error") {
                    Color32::from_rgb(220, 53, 69)
                } else if self.status.starts_with("Loaded") {
                    Color32::from_rgb(40, 167, 69)
                } else {
                    Color32::GRAY
                };
                ui.label(RichText::new(&self.status).size(11.0).color(status_color));
            });
            ui.add_space(4.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.records.is_empty() {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Data").size(20.0));
                });
                return;
            }

            let action = dashboard::show_dashboard(
                ui,
                &self.summaries,
                &self.heat_cells,
                &self.series,
                self.sex_filter,
            );

            if let DashboardAction::FilterChanged(filter) = action {
                self.sex_filter = filter;
                self.recompute();
            }
        });
    }
}
