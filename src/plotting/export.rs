use image::RgbImage;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

use super::chart::RenderedChart;
use crate::error::PlotError;

/// Write a rendered panel as a PNG file.
pub fn save_png(chart: &RenderedChart, path: &Path) -> Result<(), PlotError> {
    let image = RgbImage::from_raw(chart.width, chart.height, chart.pixels.clone()).ok_or(
        PlotError::BufferSize {
            width: chart.width,
            height: chart.height,
        },
    )?;
    image.save(path)?;
    Ok(())
}

/// Write every panel to `<dir>/<panel name>.png`, creating `dir` if needed.
pub fn export_panels(charts: &[RenderedChart], dir: &Path) -> Result<Vec<PathBuf>, PlotError> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(charts.len());
    for chart in charts {
        let path = dir.join(format!("{}.png", chart.name));
        save_png(chart, &path)?;
        info!("Wrote {}", path.display());
        written.push(path);
    }
    Ok(written)
}
