use std::collections::HashSet;
use std::convert::Infallible;
use std::ffi::OsString;
use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use itertools::Itertools;
use tracing::debug;

/// Environment variable that replaces the gperf program given on the command line.
pub const GPERF_ENV: &str = "GPERF";

pub const DEFAULT_GPERF_FILE: &str = "SelectorPseudoElementTypeMap.gperf";
pub const DEFAULT_OUTPUT_FILE: &str = "SelectorPseudoElementTypeMap.cpp";

#[derive(Parser, Debug)]
#[command(about = "Generate the selector pseudo-element lookup table with gperf")]
pub struct Cli {
    /// Keyword definition file, e.g. `SelectorPseudoElementTypeMap.in`.
    pub input: PathBuf,

    /// gperf executable. The `GPERF` environment variable takes precedence.
    pub gperf: PathBuf,

    /// Active build flags. Only the last argument counts; it holds all flags
    /// separated by spaces, e.g. "ENABLE_VIDEO ENABLE_SVG".
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub defines: Vec<String>,

    /// Where the gperf source is written.
    #[arg(long, default_value = DEFAULT_GPERF_FILE)]
    pub gperf_file: PathBuf,

    /// Where gperf writes the lookup function.
    #[arg(long, default_value = DEFAULT_OUTPUT_FILE)]
    pub output_file: PathBuf,

    /// Fail if the gperf source is out of date instead of regenerating; gperf
    /// is not run.
    #[arg(long)]
    pub check: bool,

    /// More logging; repeat for more detail.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Set of active build flags, e.g. `ENABLE_VIDEO`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildFlags {
    flags: HashSet<String>,
}

impl BuildFlags {
    /// Splits on single spaces and trims every token.
    pub fn from_defines(defines: &str) -> Self {
        defines.split(' ').map(str::trim).collect()
    }

    pub fn is_active(&self, flag: &str) -> bool {
        self.flags.contains(flag)
    }
}

impl FromStr for BuildFlags {
    type Err = Infallible;

    fn from_str(defines: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_defines(defines))
    }
}

impl<S: Into<String>> FromIterator<S> for BuildFlags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            flags: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl std::fmt::Display for BuildFlags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.flags.iter().filter(|flag| !flag.is_empty()).sorted().join(" "))
    }
}

/// Everything a single generator run needs, resolved from the command line
/// and the environment.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub input: PathBuf,
    pub gperf: PathBuf,
    pub flags: BuildFlags,
    pub gperf_file: PathBuf,
    pub output_file: PathBuf,
    pub check: bool,
}

impl GeneratorConfig {
    /// `gperf_override` is the value of [`GPERF_ENV`], passed in by the caller.
    pub fn resolve(cli: Cli, gperf_override: Option<OsString>) -> Self {
        let Cli {
            input,
            gperf,
            mut defines,
            gperf_file,
            output_file,
            check,
            ..
        } = cli;

        let flags = BuildFlags::from_defines(&defines.pop().unwrap_or_default());
        if !defines.is_empty() {
            debug!(ignored = ?defines, "only the last argument holds build flags");
        }

        Self {
            input,
            gperf: gperf_override.map(PathBuf::from).unwrap_or(gperf),
            flags,
            gperf_file,
            output_file,
            check,
        }
    }
}
