use std::fmt;

use motion::SeriesTable;
use plotters::chart::SeriesLabelPosition;
use thiserror::Error;
use tracing::debug;

pub mod figure;

pub use figure::{Figure, FigureSettings};

#[derive(Debug, Error)]
pub enum PlotErrors {
    #[error("series '{label}' has {x} x values but {y} y values")]
    LengthMismatch { label: String, x: usize, y: usize },
    #[error("figure size {width}x{height} cannot be drawn")]
    InvalidSize { width: u32, height: u32 },
    #[error("drawing failed: {0}")]
    Draw(String),
    #[error("rendered buffer does not match the figure size")]
    Buffer,
    #[error("ImageError: {0}")]
    Image(#[from] image::ImageError),
    #[error("window failed: {0}")]
    Window(String),
}

/// Where the legend box is anchored inside the plot area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegendPosition {
    UpperLeft,
    UpperMiddle,
    UpperRight,
    MiddleLeft,
    MiddleMiddle,
    MiddleRight,
    LowerLeft,
    LowerMiddle,
    LowerRight,
}

impl fmt::Display for LegendPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LegendPosition::UpperLeft => "upper left",
            LegendPosition::UpperMiddle => "upper center",
            LegendPosition::UpperRight => "upper right",
            LegendPosition::MiddleLeft => "center left",
            LegendPosition::MiddleMiddle => "center",
            LegendPosition::MiddleRight => "center right",
            LegendPosition::LowerLeft => "lower left",
            LegendPosition::LowerMiddle => "lower center",
            LegendPosition::LowerRight => "lower right",
        };
        f.write_str(name)
    }
}

impl From<LegendPosition> for SeriesLabelPosition {
    fn from(position: LegendPosition) -> Self {
        match position {
            LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendPosition::UpperMiddle => SeriesLabelPosition::UpperMiddle,
            LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
            LegendPosition::MiddleLeft => SeriesLabelPosition::MiddleLeft,
            LegendPosition::MiddleMiddle => SeriesLabelPosition::MiddleMiddle,
            LegendPosition::MiddleRight => SeriesLabelPosition::MiddleRight,
            LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendPosition::LowerMiddle => SeriesLabelPosition::LowerMiddle,
            LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
        }
    }
}

/// Something that can compose labeled scatter series into a figure and display it.
pub trait Renderer {
    /// Adds one labeled point series. `xs` and `ys` must have the same length.
    fn scatter(&mut self, xs: &[f64], ys: &[f64], label: &str) -> Result<(), PlotErrors>;
    fn legend(&mut self, position: LegendPosition) -> Result<(), PlotErrors>;
    /// Blocks until the user dismisses the figure.
    fn show(&mut self) -> Result<(), PlotErrors>;
}

/// Submits every series of `table` in table order, then asks for an upper right legend.
pub fn draw_table<R: Renderer>(table: &SeriesTable, renderer: &mut R) -> Result<(), PlotErrors> {
    for series in table {
        debug!("scatter {} ({} points)", series.body(), series.len());
        renderer.scatter(series.x(), series.y(), series.body().as_str())?;
    }
    renderer.legend(LegendPosition::UpperRight)
}

/// [`draw_table`] followed by a blocking [`Renderer::show`].
pub fn plot_table<R: Renderer>(table: &SeriesTable, renderer: &mut R) -> Result<(), PlotErrors> {
    draw_table(table, renderer)?;
    renderer.show()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[derive(Debug, PartialEq)]
    enum Call {
        Scatter {
            label: String,
            xs: Vec<f64>,
            ys: Vec<f64>,
        },
        Legend(LegendPosition),
        Show,
    }

    #[derive(Default)]
    struct RecordingRenderer {
        calls: Vec<Call>,
    }

    impl Renderer for RecordingRenderer {
        fn scatter(&mut self, xs: &[f64], ys: &[f64], label: &str) -> Result<(), PlotErrors> {
            self.calls.push(Call::Scatter {
                label: label.to_string(),
                xs: xs.to_vec(),
                ys: ys.to_vec(),
            });
            Ok(())
        }

        fn legend(&mut self, position: LegendPosition) -> Result<(), PlotErrors> {
            self.calls.push(Call::Legend(position));
            Ok(())
        }

        fn show(&mut self) -> Result<(), PlotErrors> {
            self.calls.push(Call::Show);
            Ok(())
        }
    }

    struct FailingRenderer;

    impl Renderer for FailingRenderer {
        fn scatter(&mut self, _xs: &[f64], _ys: &[f64], _label: &str) -> Result<(), PlotErrors> {
            Err(PlotErrors::Draw("no canvas".to_string()))
        }

        fn legend(&mut self, _position: LegendPosition) -> Result<(), PlotErrors> {
            Ok(())
        }

        fn show(&mut self) -> Result<(), PlotErrors> {
            panic!("show must not be reached after a failed scatter")
        }
    }

    fn table(text: &str) -> SeriesTable {
        SeriesTable::from_reader(Cursor::new(text.to_string())).unwrap()
    }

    #[test]
    fn test_plot_table_submits_series_before_show() {
        let table = table("earth:1.0,2.0\nmoon:(3.0),Some4.0\nearth:5.0,6.0\n");
        let mut renderer = RecordingRenderer::default();

        plot_table(&table, &mut renderer).unwrap();

        assert_eq!(
            renderer.calls,
            vec![
                Call::Scatter {
                    label: "earth".to_string(),
                    xs: vec![1.0, 5.0],
                    ys: vec![2.0, 6.0],
                },
                Call::Scatter {
                    label: "moon".to_string(),
                    xs: vec![3.0],
                    ys: vec![4.0],
                },
                Call::Legend(LegendPosition::UpperRight),
                Call::Show,
            ]
        );
    }

    #[test]
    fn test_plot_empty_table() {
        let mut renderer = RecordingRenderer::default();

        plot_table(&SeriesTable::new(), &mut renderer).unwrap();

        assert_eq!(
            renderer.calls,
            vec![Call::Legend(LegendPosition::UpperRight), Call::Show]
        );
    }

    #[test]
    fn test_draw_table_does_not_show() {
        let mut renderer = RecordingRenderer::default();

        draw_table(&table("moon:1,1"), &mut renderer).unwrap();

        assert!(!renderer.calls.contains(&Call::Show));
        assert_eq!(renderer.calls.len(), 2);
    }

    #[test]
    fn test_renderer_failure_aborts() {
        let result = plot_table(&table("earth:1,1"), &mut FailingRenderer);
        assert!(matches!(result, Err(PlotErrors::Draw(_))));
    }

    #[test]
    fn test_legend_position_names() {
        assert_eq!(LegendPosition::UpperRight.to_string(), "upper right");
        assert!(matches!(
            SeriesLabelPosition::from(LegendPosition::UpperRight),
            SeriesLabelPosition::UpperRight
        ));
    }
}
