//! Projection of a [`Report`] onto chart models.
//!
//! Nothing here draws; the models only say which quantities each panel shows,
//! in which order and under which labels.

use log::debug;
use std::collections::BTreeMap;

use crate::analysis::Report;
use crate::config::Labels;
use crate::types::{AggregateTable, Measure, MonthKey};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarSeries {
    pub label: String,
    /// One value per category
    pub values: Vec<u64>,
}

/// Bars per category; more than one series gives grouped bars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChart {
    pub title: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
    /// Print each value above its bar
    pub annotate: bool,
}

impl BarChart {
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn max_value(&self) -> u64 {
        self.series
            .iter()
            .flat_map(|s| s.values.iter().copied())
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSeries {
    pub label: String,
    /// `(x index, value)` pairs in x order
    pub points: Vec<(usize, u64)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChart {
    pub title: String,
    pub x_labels: Vec<String>,
    pub lines: Vec<LineSeries>,
}

impl LineChart {
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.points.is_empty())
    }

    pub fn max_value(&self) -> u64 {
        self.lines
            .iter()
            .flat_map(|l| l.points.iter().map(|(_, v)| *v))
            .max()
            .unwrap_or(0)
    }
}

/// One visual block of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Panel {
    Monthly(LineChart),
    Season(BarChart),
    Weather(BarChart),
    /// Holiday totals above weekday totals
    HolidayWeekday { holiday: BarChart, weekday: BarChart },
}

impl Panel {
    /// Stable identifier, also used as the export file stem.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Monthly(_) => "monthly",
            Panel::Season(_) => "season",
            Panel::Weather(_) => "weather",
            Panel::HolidayWeekday { .. } => "holiday_weekday",
        }
    }

    /// Section heading shown above the panel.
    pub fn heading<'a>(&self, labels: &'a Labels) -> &'a str {
        match self {
            Panel::Monthly(_) => &labels.monthly_heading,
            Panel::Season(_) => &labels.season_heading,
            Panel::Weather(_) => &labels.weather_heading,
            Panel::HolidayWeekday { .. } => &labels.holiday_weekday_heading,
        }
    }
}

/// All chart panels of a report, in display order.
pub fn panels(report: &Report, labels: &Labels) -> Vec<Panel> {
    vec![
        Panel::Monthly(monthly_chart(&report.monthly, labels)),
        Panel::Season(season_chart(&report.season, labels)),
        Panel::Weather(category_chart(
            &labels.weather_title,
            &report.weather,
            Measure::Count,
        )),
        Panel::HolidayWeekday {
            holiday: category_chart(&labels.holiday_title, &report.holiday, Measure::Count),
            weekday: category_chart(&labels.weekday_title, &report.weekday, Measure::Count),
        },
    ]
}

/// One line per year over a January..December axis.
pub fn monthly_chart(table: &AggregateTable<MonthKey>, labels: &Labels) -> LineChart {
    let mut years: BTreeMap<i32, Vec<(usize, u64)>> = BTreeMap::new();

    for row in &table.rows {
        let value = table.value(row, Measure::Count).unwrap_or(0);
        match row.key.month_index() {
            Some(idx) => years.entry(row.key.year).or_default().push((idx, value)),
            None => debug!("month `{}` has no calendar position, not plotted", row.key.month),
        }
    }

    LineChart {
        title: labels.monthly_title.clone(),
        x_labels: (0..12).map(|idx| labels.month_name(idx)).collect(),
        lines: years
            .into_iter()
            .map(|(year, mut points)| {
                points.sort_by_key(|(idx, _)| *idx);
                LineSeries {
                    label: year.to_string(),
                    points,
                }
            })
            .collect(),
    }
}

/// Registered and casual bars per season, annotated with their values.
pub fn season_chart(table: &AggregateTable<String>, labels: &Labels) -> BarChart {
    BarChart {
        title: labels.season_title.clone(),
        categories: table.keys().cloned().collect(),
        series: vec![
            BarSeries {
                label: labels.registered_series.clone(),
                values: table.column(Measure::Registered),
            },
            BarSeries {
                label: labels.casual_series.clone(),
                values: table.column(Measure::Casual),
            },
        ],
        annotate: true,
    }
}

/// A single-series bar chart of one measure over a categorical key.
pub fn category_chart(title: &str, table: &AggregateTable<String>, measure: Measure) -> BarChart {
    BarChart {
        title: title.to_string(),
        categories: table.keys().cloned().collect(),
        series: vec![BarSeries {
            label: measure.name().to_string(),
            values: table.column(measure),
        }],
        annotate: false,
    }
}
