use clap::Parser;
use log::{info, LevelFilter};
use tempfile::NamedTempFile;

use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::colour::Paint;
use crate::errors::{Error, Result};
use crate::{render_stream, RenderConfig};

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about=None)] // Read from Cargo.toml
struct Arguments {
    /// SVG file to render ('-' for stdin)
    file: String,

    /// Target PNG file ('-' for stdout)
    #[arg(short, long, default_value = "output.png")]
    output: String,

    /// Canvas width in pixels, overriding the document size
    #[arg(long)]
    width: Option<u32>,

    /// Canvas height in pixels, overriding the document size
    #[arg(long)]
    height: Option<u32>,

    /// Background colour, e.g. 'white', '#336699' or 'rgba(0,0,0,0.5)'
    #[arg(long)]
    background: Option<String>,

    /// Fail on invalid path data rather than skipping the shape
    #[arg(long)]
    strict: bool,

    /// Increase logging; may be repeated (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Top-level configuration used by the `svgpix` command-line process.
///
/// Input/output filenames and logging are handled here; rendering settings
/// are stored in the embedded `RenderConfig` struct.
#[derive(Clone, Debug)]
pub struct Config {
    /// Path to input file, or '-' for stdin
    pub input_path: String,
    /// Path to output file, or '-' for stdout
    pub output_path: String,
    /// Number of `-v` flags given
    pub verbosity: u8,
    /// render config options
    pub render: RenderConfig,
}

impl Config {
    fn from_args(args: Arguments) -> Result<Self> {
        if args.file != "-" && args.output != "-" {
            let in_path = Path::new(&args.file);
            let out_path = Path::new(&args.output);
            if out_path.exists()
                && out_path.canonicalize().map_err(Error::from_err)?
                    == in_path.canonicalize().map_err(Error::from_err)?
            {
                return Err(Error::Cli(
                    "Output path must not refer to the same file as the input file.".into(),
                ));
            }
        }
        let mut render = RenderConfig {
            width: args.width,
            height: args.height,
            strict: args.strict,
            ..Default::default()
        };
        if let Some(background) = args.background {
            render.background = Paint::from_str(&background)
                .map_err(|e| Error::Cli(format!("Invalid --background value: {e}")))?;
        }
        Ok(Self {
            input_path: args.file,
            output_path: args.output,
            verbosity: args.verbose,
            render,
        })
    }

    /// Create a `Config` object set up given a command line string.
    ///
    /// The string is parsed using `shlex::split()`, so values containing
    /// spaces or quotes should be quoted or escaped appropriately.
    pub fn from_cmdline(args: &str) -> Result<Self> {
        let args = shlex::split(args).unwrap_or_default();
        let args = Arguments::try_parse_from(args.iter()).map_err(Error::from_err)?;
        Self::from_args(args)
    }

    /// Log level implied by the number of `-v` flags
    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Create a `Config` object from process arguments.
pub fn get_config() -> Result<Config> {
    let args = Arguments::parse();
    Config::from_args(args)
}

/// Set up `env_logger` at the level given by `config`; `RUST_LOG` takes
/// precedence if set.
pub fn init_logging(config: &Config) {
    // Ignore failure; a logger may already be installed (e.g. in tests)
    let _ = env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_default_env()
        .try_init();
}

/// Render the SVG file at `input` ('-' for stdin) to a PNG file at `output`
/// ('-' for stdout).
pub fn render_file(input: &str, output: &str, cfg: &RenderConfig) -> Result<()> {
    let mut in_reader = if input == "-" {
        Box::new(std::io::stdin().lock()) as Box<dyn BufRead>
    } else {
        Box::new(BufReader::new(File::open(input)?)) as Box<dyn BufRead>
    };

    if output == "-" {
        render_stream(&mut in_reader, &mut std::io::stdout(), cfg)?;
    } else {
        // a failed render must leave any existing output untouched
        let mut out_temp = NamedTempFile::new()?;
        render_stream(&mut in_reader, &mut out_temp, cfg)?;
        fs::copy(out_temp.path(), output)?;
        info!("wrote {output}");
    }

    Ok(())
}

/// Run the `svgpix` program with a given `Config`.
pub fn run(config: Config) -> Result<()> {
    render_file(&config.input_path, &config.output_path, &config.render)
}
