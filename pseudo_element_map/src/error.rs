use std::path::PathBuf;

pub type GenResult<T> = Result<T, GenError>;

#[derive(thiserror::Error, Debug)]
pub enum GenError {
    #[error("could not read keyword definitions from `{}`", .path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not write gperf source `{}`", .path.display())]
    WriteIntermediate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("line {line}: cannot derive an enum name from malformed keyword `{keyword}`")]
    MalformedKeyword { line: usize, keyword: String },
    #[error("could not run gperf")]
    Spawn(#[from] xshell::Error),
    #[error("`{}` exited with {}{}", .program.display(), display_code(.code), display_stderr(.stderr))]
    GperfFailed {
        program: PathBuf,
        code: Option<i32>,
        stderr: String,
    },
    #[error("{} was not up-to-date", .path.display())]
    Stale { path: PathBuf },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl GenError {
    /// Process exit code the binary reports for this error.
    ///
    /// A failing gperf hands its own code through; everything else is `1`.
    pub fn exit_code(&self) -> i32 {
        match self {
            GenError::GperfFailed { code: Some(code), .. } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn display_code(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no status (terminated by signal)".to_owned(),
    }
}

fn display_stderr(stderr: &str) -> String {
    match stderr.trim() {
        "" => String::new(),
        stderr => format!(":\n{stderr}"),
    }
}
