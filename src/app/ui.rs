use egui::{Context, RichText, Ui};
use egui_extras::DatePickerButton;

use super::App;

/// Draw the main application UI
pub fn draw_ui(app: &mut App, ctx: &Context) {
    if app.update_needed {
        app.refresh_charts(ctx);
    }

    let labels = app.config.locale.clone();

    egui::SidePanel::left("side_panel").show(ctx, |ui| {
        ui.heading(&labels.filter_heading);
        ui.separator();

        ui.label(&labels.start_date);
        let start_changed = ui
            .add(
                DatePickerButton::new(&mut app.start_date)
                    .id_salt("start_date")
                    .calendar_week(false),
            )
            .changed();

        ui.label(&labels.end_date);
        let end_changed = ui
            .add(
                DatePickerButton::new(&mut app.end_date)
                    .id_salt("end_date")
                    .calendar_week(false),
            )
            .changed();

        if start_changed || end_changed {
            app.apply_filter();
        }

        ui.separator();
        if ui.button(&labels.reset).clicked() {
            app.reset_filter();
        }

        let bounds = app.session.bounds();
        ui.small(format!("{} .. {}", bounds.start, bounds.end));
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.heading(RichText::new(&labels.title).size(26.0));
            ui.separator();

            if let Some(message) = &app.error_message {
                ui.colored_label(egui::Color32::LIGHT_RED, message);
            }

            let report = app.session.report();
            ui.heading(&labels.daily_heading);
            ui.columns(3, |columns| {
                metric(&mut columns[0], &labels.casual_metric, report.metrics.casual);
                metric(&mut columns[1], &labels.registered_metric, report.metrics.registered);
                metric(&mut columns[2], &labels.total_metric, report.metrics.total);
            });
            if report.is_empty() {
                ui.label(&labels.empty_range);
            }

            for chart in &app.charts {
                ui.separator();
                ui.heading(&chart.heading);
                ui.add(egui::Image::new(&chart.texture).max_width(ui.available_width()));
            }

            if !labels.caption.is_empty() {
                ui.separator();
                ui.small(&labels.caption);
            }
        });
    });
}

fn metric(ui: &mut Ui, label: &str, value: u64) {
    ui.label(label);
    ui.label(RichText::new(value.to_string()).size(28.0).strong());
}
