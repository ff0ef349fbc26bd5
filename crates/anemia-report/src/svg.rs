//! SVG rendering of a chart artifact via plotters

use crate::chart::{ChartArtifact, START_ANGLE};
use crate::ReportError;
use plotters::element::Pie;
use plotters::prelude::*;
use std::fs;
use std::path::Path;
use tracing::info;

/// Canvas size in pixels
pub const CHART_SIZE: (u32, u32) = (640, 640);

/// Draw the chart as an SVG document
pub fn to_svg_string(chart: &ChartArtifact) -> Result<String, ReportError> {
    if chart.slices.is_empty() {
        return Err(ReportError::Empty);
    }

    let sizes: Vec<f64> = chart.slices.iter().map(|s| s.count as f64).collect();
    let colors: Vec<RGBColor> = chart
        .slices
        .iter()
        .map(|s| RGBColor(s.color.0, s.color.1, s.color.2))
        .collect();
    let labels: Vec<&str> = chart.slices.iter().map(|s| s.severity.as_str()).collect();

    let mut buffer = String::new();
    {
        let root = SVGBackend::with_string(&mut buffer, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE).map_err(render_error)?;
        let area = root
            .titled(&chart.title, ("sans-serif", 24).into_font())
            .map_err(render_error)?;

        let (width, height) = area.dim_in_pixel();
        let center = (width as i32 / 2, height as i32 / 2);
        let radius = f64::from(width.min(height)) * 0.35;

        let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
        // plotters measures angles clockwise in screen space
        pie.start_angle(-START_ANGLE);
        pie.label_style(("sans-serif", 16).into_font().color(&BLACK));
        pie.percentages(("sans-serif", 14).into_font().color(&BLACK));
        area.draw(&pie).map_err(render_error)?;

        root.present().map_err(render_error)?;
    }

    Ok(buffer)
}

/// Draw the chart and write it to `path`, creating parent directories
pub fn write_svg<P: AsRef<Path>>(chart: &ChartArtifact, path: P) -> Result<(), ReportError> {
    let path = path.as_ref();
    let svg = to_svg_string(chart)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, svg)?;

    info!(path = %path.display(), slices = chart.slices.len(), "Wrote distribution chart");
    Ok(())
}

fn render_error<E: std::fmt::Display>(e: E) -> ReportError {
    ReportError::Render(e.to_string())
}
