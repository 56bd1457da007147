use chrono::NaiveDate;
use eframe::App as EApp;
use egui::{ColorImage, Context, TextureHandle, TextureOptions};
use log::error;

use crate::analysis::Session;
use crate::config::Config;
use crate::plotting::{panels, render_report};
use crate::types::DateRange;

/// A rendered panel uploaded to the GPU, with the heading shown above it.
pub struct ChartTexture {
    pub heading: String,
    pub texture: TextureHandle,
}

/// Main application state
pub struct App {
    pub session: Session,
    pub config: Config,
    /// Date picker values; may differ from the session range until applied
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub charts: Vec<ChartTexture>,
    pub update_needed: bool,
    pub error_message: Option<String>,
}

impl App {
    pub fn new(session: Session, config: Config) -> Self {
        let range = session.range();
        Self {
            session,
            config,
            start_date: range.start,
            end_date: range.end,
            charts: Vec::new(),
            update_needed: true,
            error_message: None,
        }
    }

    /// Push the picker values into the session. Returns whether the report changed.
    pub fn apply_filter(&mut self) -> bool {
        let requested = DateRange::new(self.start_date, self.end_date);
        let clamped = requested.clamp_to(self.session.bounds());
        self.snap_pickers(clamped);
        if clamped == self.session.range() {
            return false;
        }

        self.session.on_filter_change(requested);
        self.update_needed = true;
        true
    }

    /// Keep the pickers inside the dataset bounds.
    fn snap_pickers(&mut self, clamped: DateRange) {
        if !clamped.is_empty() {
            self.start_date = clamped.start;
            self.end_date = clamped.end;
        }
    }

    pub fn reset_filter(&mut self) {
        let bounds = self.session.bounds();
        self.start_date = bounds.start;
        self.end_date = bounds.end;
        self.session.reset_filter();
        self.update_needed = true;
    }

    /// Re-render every panel for the current report and replace the textures.
    /// On failure the previous charts stay on screen and the error is shown.
    pub fn refresh_charts(&mut self, ctx: &Context) {
        let report = self.session.report();
        let labels = &self.config.locale;

        match render_report(report, labels, self.config.chart) {
            Ok(rendered) => {
                let headings = panels(report, labels)
                    .iter()
                    .map(|panel| panel.heading(labels).to_string())
                    .collect::<Vec<_>>();

                self.charts = rendered
                    .into_iter()
                    .zip(headings)
                    .map(|(chart, heading)| {
                        let image = ColorImage::from_rgb(
                            [chart.width as usize, chart.height as usize],
                            &chart.pixels,
                        );
                        ChartTexture {
                            heading,
                            texture: ctx.load_texture(chart.name, image, TextureOptions::LINEAR),
                        }
                    })
                    .collect();
                self.error_message = None;
            }
            Err(e) => {
                error!("Plotting error: {}", e);
                self.error_message = Some(e.to_string());
            }
        }
        self.update_needed = false;
    }
}

impl EApp for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        super::ui::draw_ui(self, ctx);
    }
}
