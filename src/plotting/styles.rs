use plotters::style::RGBAColor;

/// Chart theme configuration
pub struct ChartTheme {
    pub background_color: RGBAColor,
    pub text_color: RGBAColor,
    pub grid_color: RGBAColor,
    pub axis_color: RGBAColor,
    /// Colors assigned to series (lines, bar groups) in order
    pub series_colors: Vec<RGBAColor>,
}

impl ChartTheme {
    /// Palette color for `index`, cycling. An empty palette falls back to the text color.
    pub fn series_color(&self, index: usize) -> RGBAColor {
        match self.series_colors.len() {
            0 => self.text_color,
            n => self.series_colors[index % n],
        }
    }
}

impl Default for ChartTheme {
    fn default() -> Self {
        Self {
            background_color: RGBAColor(24, 26, 31, 1.0),
            text_color: RGBAColor(255, 255, 255, 0.85),
            grid_color: RGBAColor(255, 255, 255, 0.15),
            axis_color: RGBAColor(255, 255, 255, 0.8),
            series_colors: vec![
                RGBAColor(76, 114, 176, 1.0),
                RGBAColor(221, 132, 82, 1.0),
                RGBAColor(85, 168, 104, 1.0),
                RGBAColor(196, 78, 82, 1.0),
                RGBAColor(129, 114, 179, 1.0),
                RGBAColor(147, 120, 96, 1.0),
                RGBAColor(218, 139, 195, 1.0),
            ],
        }
    }
}

/// Chart style configuration
pub struct ChartStyle {
    pub line_width: u32,
    pub marker_size: u32,
    pub caption_size: u32,
    pub font_size: u32,
    pub annotation_size: u32,
    pub margin: u32,
    pub label_area_size: u32,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_width: 2,
            marker_size: 4,
            caption_size: 22,
            font_size: 15,
            annotation_size: 13,
            margin: 10,
            label_area_size: 50,
        }
    }
}
