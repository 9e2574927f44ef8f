use clap::{ArgAction, Parser, ValueHint};
use motion::SeriesTable;
use motion_plot::{Figure, FigureSettings, Renderer, draw_table};
use std::error::Error;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Scatter plot of celestial body positions", long_about = None)]
struct Cli {
    /// Motion file with one `body:x,y` sample per line
    #[arg(default_value = "motion.csv", value_hint = ValueHint::FilePath)]
    input: PathBuf,

    /// Figure caption and window title
    #[arg(long, default_value = "Motion")]
    title: String,

    /// Figure width in pixels
    #[arg(long, default_value_t = 1200, value_parser = clap::value_parser!(u32).range(1..))]
    width: u32,

    /// Figure height in pixels
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(u32).range(1..))]
    height: u32,

    /// Also write the figure to this image file (png, bmp, ...)
    #[arg(long, value_hint = ValueHint::FilePath)]
    save: Option<PathBuf>,

    /// Do not open the plot window
    #[arg(long, action = ArgAction::SetTrue)]
    no_show: bool,

    /// Log debug output
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

impl Cli {
    fn figure_settings(&self) -> FigureSettings {
        FigureSettings {
            title: self.title.clone(),
            width: self.width,
            height: self.height,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", report(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn Error>> {
    let table = SeriesTable::load(&cli.input)?;

    let mut figure = Figure::new(cli.figure_settings());
    draw_table(&table, &mut figure)?;

    if let Some(path) = &cli.save {
        figure.save(path)?;
    }

    if cli.no_show {
        info!("skipping plot window");
        return Ok(());
    }
    figure.show()?;
    Ok(())
}

/// Joins an error and all of its sources into one line.
fn report(e: &dyn Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use motion::MotionErrors;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["plot_motions"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("motion.csv"));
        assert!(cli.save.is_none());
        assert!(!cli.no_show);
        assert_eq!(cli.figure_settings(), FigureSettings::default());
    }

    #[test]
    fn test_figure_settings() {
        let cli = Cli::try_parse_from([
            "plot_motions",
            "orbit.csv",
            "--title",
            "Earth-Moon",
            "--width",
            "640",
            "--height",
            "480",
            "--save",
            "orbit.png",
            "--no-show",
        ])
        .unwrap();

        assert_eq!(cli.input, PathBuf::from("orbit.csv"));
        assert_eq!(cli.save, Some(PathBuf::from("orbit.png")));
        assert!(cli.no_show);
        assert_eq!(
            cli.figure_settings(),
            FigureSettings {
                title: "Earth-Moon".to_string(),
                width: 640,
                height: 480,
            }
        );
    }

    #[test]
    fn test_zero_size_rejected() {
        assert!(Cli::try_parse_from(["plot_motions", "--width", "0"]).is_err());
    }

    #[test]
    fn test_report_includes_sources() {
        let e = SeriesTable::from_reader(io::Cursor::new("earth:1,2\npluto:3,4")).unwrap_err();
        assert!(matches!(e, MotionErrors::Line { line: 2, .. }));
        assert_eq!(
            report(&e),
            "line 2: unrecognized body 'pluto' (expected one of: moon, earth)"
        );
    }
}
