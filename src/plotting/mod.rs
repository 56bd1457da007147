mod chart;
mod export;
pub mod model;
mod styles;


pub use chart::{render_panel, render_report, RenderedChart};
pub use export::{export_panels, save_png};
pub use model::{panels, BarChart, BarSeries, LineChart, LineSeries, Panel};
pub use styles::{ChartStyle, ChartTheme};
