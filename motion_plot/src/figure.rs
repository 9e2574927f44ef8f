use std::ops::Range;
use std::path::Path;

use motion::{Bounds, Sample};
use plotters::prelude::*;
use show_image::{ImageInfo, ImageView, WindowOptions, create_window};
use tracing::{debug, info};
use utilities::format_number;

use crate::{LegendPosition, PlotErrors, Renderer};

/// Fraction of the data span left empty around the points.
const AXIS_MARGIN: f64 = 0.05;
const MARKER_SIZE: i32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct FigureSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for FigureSettings {
    fn default() -> Self {
        Self {
            title: "Motion".to_string(),
            width: 1200,
            height: 800,
        }
    }
}

#[derive(Debug, Clone)]
struct ScatterSeries {
    label: String,
    points: Vec<(f64, f64)>,
    color: color::Color,
}

/// A scatter figure drawn with plotters into an RGB buffer.
///
/// Series and legend requests are collected first and only rasterised by
/// [`Figure::render`], since the axis ranges depend on every series.
#[derive(Debug, Clone, Default)]
pub struct Figure {
    settings: FigureSettings,
    series: Vec<ScatterSeries>,
    legend: Option<LegendPosition>,
}

impl Figure {
    pub fn new(settings: FigureSettings) -> Self {
        Self {
            settings,
            series: Vec::new(),
            legend: None,
        }
    }

    fn bounds(&self) -> Option<Bounds> {
        Bounds::from_samples(
            self.series
                .iter()
                .flat_map(|s| s.points.iter().map(|&(x, y)| Sample::new(x, y))),
        )
    }

    /// x and y axis ranges covering every point, `0..1` when there is nothing to show.
    fn axis_ranges(&self) -> (Range<f64>, Range<f64>) {
        match self.bounds() {
            Some(bounds) => {
                let b = bounds.padded(AXIS_MARGIN);
                (b.xmin..b.xmax, b.ymin..b.ymax)
            }
            None => (0.0..1.0, 0.0..1.0),
        }
    }

    /// Draws the figure and returns the raw RGB8 pixels, row major.
    pub fn render(&self) -> Result<Vec<u8>, PlotErrors> {
        let FigureSettings {
            title,
            width,
            height,
        } = &self.settings;
        let (width, height) = (*width, *height);
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(3))
            .filter(|&len| len > 0)
            .ok_or(PlotErrors::InvalidSize { width, height })?;

        let mut buffer = vec![0u8; len];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (width, height)).into_drawing_area();
            root.fill(&WHITE).map_err(draw_error)?;

            let (x_range, y_range) = self.axis_ranges();
            let mut chart = ChartBuilder::on(&root)
                .caption(title.as_str(), ("sans-serif", 30))
                .margin(20)
                .x_label_area_size(40)
                .y_label_area_size(60)
                .build_cartesian_2d(x_range, y_range)
                .map_err(draw_error)?;

            chart
                .configure_mesh()
                .x_desc("x")
                .y_desc("y")
                .x_label_formatter(&|v| format_number(*v))
                .y_label_formatter(&|v| format_number(*v))
                .draw()
                .map_err(draw_error)?;

            for series in &self.series {
                let [r, g, b] = series.color.to_rgb8();
                let style = RGBColor(r, g, b).filled();
                chart
                    .draw_series(
                        series
                            .points
                            .iter()
                            .map(|&point| Circle::new(point, MARKER_SIZE, style)),
                    )
                    .map_err(draw_error)?
                    .label(series.label.as_str())
                    .legend(move |(x, y)| Circle::new((x + 10, y), MARKER_SIZE + 1, style));
            }

            // Only draw a legend box if there is something to put in it
            if let Some(position) = self.legend {
                if !self.series.is_empty() {
                    chart
                        .configure_series_labels()
                        .position(position.into())
                        .background_style(&WHITE.mix(0.8))
                        .border_style(&BLACK)
                        .draw()
                        .map_err(draw_error)?;
                }
            }

            root.present().map_err(draw_error)?;
        }
        Ok(buffer)
    }

    /// Renders the figure and writes it as an image, format chosen by extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), PlotErrors> {
        let path = path.as_ref();
        let buffer = self.render()?;
        let image = image::RgbImage::from_raw(self.settings.width, self.settings.height, buffer)
            .ok_or(PlotErrors::Buffer)?;
        image.save(path)?;
        info!("saved figure to {:?}", path);
        Ok(())
    }
}

impl Renderer for Figure {
    fn scatter(&mut self, xs: &[f64], ys: &[f64], label: &str) -> Result<(), PlotErrors> {
        if xs.len() != ys.len() {
            return Err(PlotErrors::LengthMismatch {
                label: label.to_string(),
                x: xs.len(),
                y: ys.len(),
            });
        }
        self.series.push(ScatterSeries {
            label: label.to_string(),
            points: xs.iter().copied().zip(ys.iter().copied()).collect(),
            color: color::Color::cycle(self.series.len()),
        });
        Ok(())
    }

    fn legend(&mut self, position: LegendPosition) -> Result<(), PlotErrors> {
        debug!("legend at {}", position);
        self.legend = Some(position);
        Ok(())
    }

    /// Opens a window with the rendered figure and waits for it to be closed.
    ///
    /// The display backend takes over the main thread and ends the process
    /// once the window is gone, so this only returns on the error path.
    fn show(&mut self) -> Result<(), PlotErrors> {
        let buffer = self.render()?;
        let FigureSettings {
            title,
            width,
            height,
        } = self.settings.clone();

        info!("showing figure '{}'", title);
        show_image::run_context(move || -> Result<(), PlotErrors> {
            let window = create_window(title, window_options()).map_err(window_error)?;
            window
                .set_image("plot", ImageView::new(ImageInfo::rgb8(width, height), &buffer))
                .map_err(window_error)?;

            // Wait for window to be closed
            window.wait_until_destroyed().map_err(window_error)?;
            Ok(())
        })
    }
}

/// The figure takes the whole screen.
fn window_options() -> WindowOptions {
    let mut options = WindowOptions::default();
    options.fullscreen = true;
    options
}

fn draw_error(e: impl std::fmt::Display) -> PlotErrors {
    PlotErrors::Draw(e.to_string())
}

fn window_error(e: impl std::fmt::Display) -> PlotErrors {
    PlotErrors::Window(e.to_string())
}
