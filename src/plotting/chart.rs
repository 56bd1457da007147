use log::{debug, info};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::time::Instant;

use super::model::{panels, BarChart, LineChart, Panel};
use super::styles::{ChartStyle, ChartTheme};
use crate::analysis::Report;
use crate::config::{ChartSize, Labels};
use crate::error::PlotError;

/// Share of a category slot covered by its bars.
const GROUP_WIDTH: f64 = 0.8;

/// An RGB bitmap of one panel, 3 bytes per pixel, row-major.
#[derive(Debug, Clone)]
pub struct RenderedChart {
    pub name: &'static str,
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

// Helper function to wrap errors
fn wrap_err<E: std::fmt::Display>(e: E) -> PlotError {
    PlotError::Drawing(e.to_string())
}

/// Render every panel of a report. Either all panels render or none is returned.
pub fn render_report(
    report: &Report,
    labels: &Labels,
    size: ChartSize,
) -> Result<Vec<RenderedChart>, PlotError> {
    let start_time = Instant::now();
    let theme = ChartTheme::default();
    let style = ChartStyle::default();

    let charts = panels(report, labels)
        .iter()
        .map(|panel| render_panel(panel, size, &theme, &style))
        .collect::<Result<Vec<_>, _>>()?;

    info!(
        "Rendered {} panels for {} in {}ms",
        charts.len(),
        report.range,
        start_time.elapsed().as_millis()
    );
    Ok(charts)
}

/// Draw one panel into an in-memory bitmap. The stacked holiday/weekday panel is
/// twice as tall as the others.
pub fn render_panel(
    panel: &Panel,
    size: ChartSize,
    theme: &ChartTheme,
    style: &ChartStyle,
) -> Result<RenderedChart, PlotError> {
    let width = size.width.max(1);
    let height = panel_height(panel, size);
    let mut pixels = vec![0u8; width as usize * height as usize * 3];

    {
        let root = BitMapBackend::with_buffer(&mut pixels, (width, height)).into_drawing_area();
        root.fill(&theme.background_color).map_err(wrap_err)?;

        match panel {
            Panel::Monthly(chart) => draw_line_chart(&root, chart, theme, style)?,
            Panel::Season(chart) | Panel::Weather(chart) => {
                draw_bar_chart(&root, chart, theme, style)?
            }
            Panel::HolidayWeekday { holiday, weekday } => {
                let areas = root.split_evenly((2, 1));
                draw_bar_chart(&areas[0], holiday, theme, style)?;
                draw_bar_chart(&areas[1], weekday, theme, style)?;
            }
        }
        root.present().map_err(wrap_err)?;
    }

    debug!("rendered panel {} at {}x{}", panel.name(), width, height);
    Ok(RenderedChart {
        name: panel.name(),
        width,
        height,
        pixels,
    })
}

/// Bitmap height of a panel; the stacked panel gets two chart heights.
pub(crate) fn panel_height(panel: &Panel, size: ChartSize) -> u32 {
    let height = size.height.max(1);
    match panel {
        Panel::HolidayWeekday { .. } => height.saturating_mul(2),
        _ => height,
    }
}

/// Left edge and width of bar `series` (of `series_count`) in category slot `category`.
///
/// The bars of one category sit side by side, centred on the slot.
pub(crate) fn bar_span(category: usize, series: usize, series_count: usize) -> (f64, f64) {
    let width = GROUP_WIDTH / series_count.max(1) as f64;
    let left = category as f64 - GROUP_WIDTH / 2.0 + series as f64 * width;
    (left, width)
}

fn draw_bar_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    chart: &BarChart,
    theme: &ChartTheme,
    style: &ChartStyle,
) -> Result<(), PlotError> {
    let slots = chart.categories.len().max(1);
    let label_style = ("sans-serif", style.font_size)
        .into_font()
        .color(&theme.text_color);

    let mut ctx = ChartBuilder::on(area)
        .caption(
            &chart.title,
            ("sans-serif", style.caption_size)
                .into_font()
                .color(&theme.text_color),
        )
        .margin(style.margin)
        .x_label_area_size(style.label_area_size)
        .y_label_area_size(style.label_area_size)
        .build_cartesian_2d(
            -0.5f64..(slots as f64 - 0.5),
            0f64..calculate_range(chart.max_value()),
        )
        .map_err(wrap_err)?;

    let categories = chart.categories.clone();
    let x_label_formatter = move |x: &f64| category_label(&categories, *x);

    ctx.configure_mesh()
        .disable_x_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(theme.grid_color)
        .axis_style(theme.axis_color)
        .label_style(label_style.clone())
        .x_labels(slots)
        .x_label_formatter(&x_label_formatter)
        .y_label_formatter(&|y| format_axis_value(*y))
        .draw()
        .map_err(wrap_err)?;

    let series_count = chart.series.len();
    let single = series_count == 1;
    let annotation_style = ("sans-serif", style.annotation_size)
        .into_font()
        .color(&theme.text_color)
        .pos(Pos::new(HPos::Center, VPos::Bottom));

    for (j, series) in chart.series.iter().enumerate() {
        let series_color = theme.series_color(j);
        // A lone series is colored per category instead
        let bar_color = |i: usize| {
            if single {
                theme.series_color(i)
            } else {
                series_color
            }
        };

        let drawn = ctx
            .draw_series(series.values.iter().enumerate().map(|(i, value)| {
                let (x0, bar_width) = bar_span(i, j, series_count);
                Rectangle::new(
                    [(x0, 0.0), (x0 + bar_width, *value as f64)],
                    bar_color(i).filled(),
                )
            }))
            .map_err(wrap_err)?;
        if !single {
            drawn.label(series.label.as_str()).legend(move |(x, y)| {
                Rectangle::new([(x, y - 5), (x + 20, y + 5)], series_color.filled())
            });
        }

        if chart.annotate {
            ctx.draw_series(series.values.iter().enumerate().map(|(i, value)| {
                let (x0, bar_width) = bar_span(i, j, series_count);
                Text::new(
                    value.to_string(),
                    (x0 + bar_width / 2.0, *value as f64),
                    annotation_style.clone(),
                )
            }))
            .map_err(wrap_err)?;
        }
    }

    if !single && !chart.is_empty() {
        ctx.configure_series_labels()
            .background_style(theme.background_color.mix(0.8))
            .border_style(theme.axis_color)
            .label_font(label_style)
            .position(SeriesLabelPosition::UpperRight)
            .draw()
            .map_err(wrap_err)?;
    }

    Ok(())
}

fn draw_line_chart(
    area: &DrawingArea<BitMapBackend, Shift>,
    chart: &LineChart,
    theme: &ChartTheme,
    style: &ChartStyle,
) -> Result<(), PlotError> {
    let slots = chart.x_labels.len().max(1);
    let label_style = ("sans-serif", style.font_size)
        .into_font()
        .color(&theme.text_color);

    let mut ctx = ChartBuilder::on(area)
        .caption(
            &chart.title,
            ("sans-serif", style.caption_size)
                .into_font()
                .color(&theme.text_color),
        )
        .margin(style.margin)
        .x_label_area_size(style.label_area_size)
        .y_label_area_size(style.label_area_size)
        .build_cartesian_2d(
            -0.5f64..(slots as f64 - 0.5),
            0f64..calculate_range(chart.max_value()),
        )
        .map_err(wrap_err)?;

    let x_labels = chart.x_labels.clone();
    let x_label_formatter = move |x: &f64| category_label(&x_labels, *x);

    ctx.configure_mesh()
        .light_line_style(TRANSPARENT)
        .bold_line_style(theme.grid_color)
        .axis_style(theme.axis_color)
        .label_style(label_style.clone())
        .x_labels(slots)
        .x_label_formatter(&x_label_formatter)
        .y_label_formatter(&|y| format_axis_value(*y))
        .draw()
        .map_err(wrap_err)?;

    for (j, line) in chart.lines.iter().enumerate() {
        let color = theme.series_color(j);
        let points: Vec<(f64, f64)> = line
            .points
            .iter()
            .map(|(x, v)| (*x as f64, *v as f64))
            .collect();

        ctx.draw_series(LineSeries::new(
            points.clone(),
            color.stroke_width(style.line_width),
        ))
        .map_err(wrap_err)?
        .label(line.label.as_str())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));

        ctx.draw_series(
            points
                .into_iter()
                .map(|p| Circle::new(p, style.marker_size as i32, color.filled())),
        )
        .map_err(wrap_err)?;
    }

    if !chart.is_empty() {
        ctx.configure_series_labels()
            .background_style(theme.background_color.mix(0.8))
            .border_style(theme.axis_color)
            .label_font(label_style)
            .position(SeriesLabelPosition::UpperLeft)
            .draw()
            .map_err(wrap_err)?;
    }

    Ok(())
}

/// Label of the category centred on `x`; blank between categories.
pub(crate) fn category_label(categories: &[String], x: f64) -> String {
    let idx = x.round();
    if (x - idx).abs() > 1e-6 || idx < 0.0 {
        return String::new();
    }
    categories.get(idx as usize).cloned().unwrap_or_default()
}

/// Y-axis upper bound leaving headroom for value annotations.
pub(crate) fn calculate_range(max_value: u64) -> f64 {
    if max_value == 0 {
        1.0
    } else {
        max_value as f64 * 1.15
    }
}

/// Use K/M formatting for large numbers
pub(crate) fn format_axis_value(y: f64) -> String {
    if y.abs() >= 1_000_000.0 {
        format!("{:.1}M", y / 1_000_000.0)
    } else if y.abs() >= 1_000.0 {
        format!("{:.1}K", y / 1_000.0)
    } else {
        format!("{:.0}", y)
    }
}
