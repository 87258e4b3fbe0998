use clap::Parser;
use get_zoom::{RasterInfo, ZoomError, ZoomReport, compute_zoom, raw_zoom};
use std::path::PathBuf;
use std::process::ExitCode;

/// Print the Web Mercator zoom level matching the ground resolution of a GeoTIFF
#[derive(Debug, Parser)]
#[command(name = "get-zoom", version)]
struct Cli {
    /// Input GeoTIFF
    input: PathBuf,

    /// Print the raw ceiling instead of clamping to 0..=22
    #[arg(long, conflicts_with = "json")]
    unclamped: bool,

    /// Also print how many levels below the zoom the image can be halved
    #[arg(long, conflicts_with = "json")]
    offset: bool,

    /// Print a JSON report
    #[arg(long)]
    json: bool,

    /// Extra positional arguments are accepted and ignored
    #[arg(hide = true)]
    ignored: Vec<String>,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help and --version
            return match e.print() {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(e) => {
            eprint!("{}", ZoomError::Usage(e.render().to_string()));
            return ExitCode::FAILURE;
        }
    };

    if !cli.ignored.is_empty() {
        log::debug!("ignoring extra arguments {:?}", cli.ignored);
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(ZoomError::ResolutionUnavailable(reason)) => {
            log::debug!("{}: {}", cli.input.display(), reason);
            eprintln!("Unable to open '{}'.", cli.input.display());
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("{}: {}", cli.input.display(), e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ZoomError> {
    let info = RasterInfo::open(&cli.input)?;

    if cli.json {
        let report = ZoomReport::new(cli.input.display().to_string(), &info)?;
        println!("{}", report.to_json()?);
        return Ok(());
    }

    let zoom = compute_zoom(&info.resolution)?;
    if cli.unclamped {
        println!("{}", raw_zoom(&info.resolution)?);
    } else {
        println!("{}", zoom);
    }

    if cli.offset {
        println!("{}", info.dimensions.zoom_offset(zoom.value()));
    }

    Ok(())
}
