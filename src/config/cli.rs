use crate::domain::model::CogRequest;
use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::Path;

pub const HELP_NOTE: &str = "The GDAL and argument checks run on every conversion; \
--help and --version print and exit without running them. \
Paths are passed to GDAL as given, including names that start with '-'.";

/// Positionals are optional to clap so that a short argument list is
/// reported by preflight, after the tool check, with exit status 1.
#[derive(Debug, Clone, Default, Parser)]
#[command(name = "cogify", version)]
#[command(about = "Convert a GeoTIFF to a Cloud-Optimized GeoTIFF and build overviews with GDAL")]
#[command(after_help = HELP_NOTE)]
pub struct CliConfig {
    /// Source raster
    #[arg(value_name = "INPUT.TIF", allow_hyphen_values = true)]
    pub input: Option<OsString>,

    /// Destination COG, overwritten if present
    #[arg(value_name = "OUTPUT_COG.TIF", allow_hyphen_values = true)]
    pub output: Option<OsString>,

    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<OsString>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log elapsed time and host resource usage per stage
    #[arg(long)]
    pub monitor: bool,
}

impl CliConfig {
    /// `None` unless both positionals were supplied.
    pub fn request(&self) -> Option<CogRequest> {
        match (&self.input, &self.output) {
            (Some(input), Some(output)) => Some(CogRequest::new(input, output)),
            _ => None,
        }
    }
}

/// Result of reading the command line.
#[derive(Debug)]
pub enum CliArgs {
    Parsed(CliConfig),
    /// Clap rejected the arguments; treated as a usage error once the
    /// tool check has passed.
    Rejected(clap::Error),
}

impl CliArgs {
    pub fn verbose(&self) -> bool {
        matches!(self, CliArgs::Parsed(config) if config.verbose)
    }

    pub fn monitor(&self) -> bool {
        matches!(self, CliArgs::Parsed(config) if config.monitor)
    }

    pub fn request(&self) -> Option<CogRequest> {
        match self {
            CliArgs::Parsed(config) => config.request(),
            CliArgs::Rejected(_) => None,
        }
    }
}

/// Parses `args` (including the program name). `--help` and `--version`
/// print and exit immediately.
pub fn parse_args<I, T>(args: I) -> CliArgs
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match CliConfig::try_parse_from(args) {
        Ok(config) => CliArgs::Parsed(config),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => CliArgs::Rejected(e),
    }
}

/// Program name as invoked, used in the usage line.
pub fn program_name(argv0: Option<&OsString>) -> String {
    argv0
        .map(|arg| Path::new(arg).to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| "cogify".to_string())
}
