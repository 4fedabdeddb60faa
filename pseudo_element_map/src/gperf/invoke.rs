use std::ffi::OsString;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use xshell::Shell;

use crate::error::{GenError, GenResult};

/// Command line options passed before the input file: every character
/// position is part of the key, the table size is tuned with `-m 10`, and
/// `-s 2` sets the size multiple.
///
/// The remaining options (C++, read-only global table, `strncmp`, enum) are
/// `%` directives in the source itself.
pub const GPERF_FLAGS: [&str; 5] = ["--key-positions=*", "-m", "10", "-s", "2"];

/// Something that turns a gperf source into the final lookup source.
pub trait HashTableCompiler {
    fn compile(&self, source: &Path, output: &Path) -> GenResult<()>;
}

/// Full argument list for compiling `source` into `output`.
pub fn gperf_arguments(source: &Path, output: &Path) -> Vec<OsString> {
    let mut output_arg = OsString::from("--output-file=");
    output_arg.push(output);

    GPERF_FLAGS
        .into_iter()
        .map(OsString::from)
        .chain([source.as_os_str().to_owned(), output_arg])
        .collect()
}

/// The real gperf executable.
#[derive(Debug, Clone)]
pub struct Gperf {
    program: PathBuf,
}

impl Gperf {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self { program: program.into() }
    }
}

impl HashTableCompiler for Gperf {
    #[tracing::instrument(skip_all, fields(program = %self.program.display(), source = %source.display()))]
    fn compile(&self, source: &Path, output: &Path) -> GenResult<()> {
        let sh = Shell::new()?;
        let result = sh
            .cmd(&self.program)
            .args(gperf_arguments(source, output))
            .quiet()
            .ignore_status()
            .output()?;

        let stderr = String::from_utf8_lossy(&result.stderr).into_owned();
        for line in stderr.lines() {
            warn!(target: "gperf", "{line}");
        }
        for line in String::from_utf8_lossy(&result.stdout).lines() {
            debug!(target: "gperf", "{line}");
        }

        if result.status.success() {
            Ok(())
        } else {
            Err(GenError::GperfFailed {
                program: self.program.clone(),
                code: result.status.code(),
                stderr,
            })
        }
    }
}
