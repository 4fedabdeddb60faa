use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{GenError, GenResult};
use crate::gperf::{longest_keyword, write_gperf_source, HashTableCompiler};
use crate::keywords::read_keyword_definitions;

/// Outcome of a successful run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateReport {
    pub entries: usize,
    pub max_keyword_length: usize,
    /// The gperf source on disk was replaced.
    pub rewritten: bool,
    /// gperf ran and produced the output file.
    pub compiled: bool,
}

/// Reads the keyword list, writes the gperf source and compiles it.
///
/// With `config.check` set, nothing is written and `compiler` is not called;
/// the run fails with [`GenError::Stale`] unless the gperf source on disk
/// already matches.
#[tracing::instrument(skip_all, fields(input = %config.input.display()))]
pub fn generate(config: &GeneratorConfig, compiler: &dyn HashTableCompiler) -> GenResult<GenerateReport> {
    let entries = read_keyword_definitions(&config.input, &config.flags)?;
    debug!(entries = entries.len(), flags = %config.flags, "read keyword definitions");

    let mut source = Vec::new();
    write_gperf_source(&entries, &mut source)?;

    let mut report = GenerateReport {
        entries: entries.len(),
        max_keyword_length: longest_keyword(&entries),
        rewritten: false,
        compiled: false,
    };

    if config.check {
        if !is_up_to_date(&config.gperf_file, &source) {
            return Err(GenError::Stale {
                path: config.gperf_file.clone(),
            });
        }
        info!(path = %config.gperf_file.display(), "gperf source is up to date");
        return Ok(report);
    }

    report.rewritten = ensure_file_contents(&config.gperf_file, &source)?;
    compiler.compile(&config.gperf_file, &config.output_file)?;
    report.compiled = true;

    info!(
        entries = report.entries,
        output = %config.output_file.display(),
        "generated pseudo-element map"
    );
    Ok(report)
}

fn normalize_newlines(s: &str) -> String {
    s.replace("\r\n", "\n")
}

fn is_up_to_date(file: &Path, contents: &[u8]) -> bool {
    match std::fs::read_to_string(file) {
        Ok(old_contents) => normalize_newlines(&old_contents).as_bytes() == contents,
        Err(_) => false,
    }
}

/// Writes `contents` to `file` unless it already holds them. Returns whether
/// the file was written.
fn ensure_file_contents(file: &Path, contents: &[u8]) -> GenResult<bool> {
    if is_up_to_date(file, contents) {
        debug!(path = %file.display(), "gperf source unchanged, not rewriting");
        return Ok(false);
    }

    let write = || -> std::io::Result<()> {
        if let Some(parent) = file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let mut out = BufWriter::new(File::create(file)?);
        out.write_all(contents)?;
        out.flush()
    };
    write().map_err(|source| GenError::WriteIntermediate {
        path: file.to_owned(),
        source,
    })?;
    debug!(path = %file.display(), bytes = contents.len(), "wrote gperf source");
    Ok(true)
}

#[cfg(test)]
mod test {
    use super::{generate, GenerateReport};
    use crate::config::{BuildFlags, GeneratorConfig};
    use crate::error::{GenError, GenResult};
    use crate::gperf::HashTableCompiler;
    use std::cell::RefCell;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    /// Records its calls and optionally fails like gperf would.
    #[derive(Default)]
    struct FakeCompiler {
        calls: RefCell<Vec<(PathBuf, PathBuf)>>,
        exit_code: Option<i32>,
    }

    impl HashTableCompiler for FakeCompiler {
        fn compile(&self, source: &Path, output: &Path) -> GenResult<()> {
            assert!(source.exists(), "gperf source should be on disk before compiling");
            self.calls.borrow_mut().push((source.to_owned(), output.to_owned()));
            match self.exit_code {
                Some(code) => Err(GenError::GperfFailed {
                    program: PathBuf::from("gperf"),
                    code: Some(code),
                    stderr: "gperf: boom".to_owned(),
                }),
                None => Ok(()),
            }
        }
    }

    const INPUT: &str = "before\n-webkit-scrollbar\n#if ENABLE(VIDEO)\ncue-region\n#endif\ncue(\n";

    fn setup(input: &str, defines: &str) -> (TempDir, GeneratorConfig) {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("SelectorPseudoElementTypeMap.in");
        std::fs::write(&input_path, input).unwrap();
        let config = GeneratorConfig {
            input: input_path,
            gperf: PathBuf::from("gperf"),
            flags: BuildFlags::from_defines(defines),
            gperf_file: dir.path().join("gen/SelectorPseudoElementTypeMap.gperf"),
            output_file: dir.path().join("gen/SelectorPseudoElementTypeMap.cpp"),
            check: false,
        };
        (dir, config)
    }

    fn entry_lines(config: &GeneratorConfig) -> Vec<String> {
        std::fs::read_to_string(&config.gperf_file)
            .unwrap()
            .lines()
            .filter(|l| l.starts_with('"'))
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn end_to_end() {
        let (_dir, config) = setup(INPUT, "ENABLE_SVG");
        let compiler = FakeCompiler::default();
        let report = generate(&config, &compiler).unwrap();

        assert_eq!(
            report,
            GenerateReport {
                entries: 3,
                max_keyword_length: 17,
                rewritten: true,
                compiled: true,
            }
        );
        assert_eq!(
            entry_lines(&config),
            [
                "\"before\", CSSSelector::PseudoElementBefore",
                "\"-webkit-scrollbar\", CSSSelector::PseudoElementScrollbar",
                "\"cue(\", CSSSelector::PseudoElementCue",
            ]
        );
        assert_eq!(
            *compiler.calls.borrow(),
            [(config.gperf_file.clone(), config.output_file.clone())]
        );
    }

    #[test]
    fn active_condition_is_emitted() {
        let (_dir, config) = setup(INPUT, "ENABLE_VIDEO");
        let report = generate(&config, &FakeCompiler::default()).unwrap();
        assert_eq!(report.entries, 4);
        assert!(entry_lines(&config).contains(&"\"cue-region\", CSSSelector::PseudoElementCueRegion".to_owned()));
    }

    #[test]
    fn unchanged_source_is_not_rewritten() {
        let (_dir, config) = setup(INPUT, "");
        let compiler = FakeCompiler::default();
        assert!(generate(&config, &compiler).unwrap().rewritten);

        let report = generate(&config, &compiler).unwrap();
        assert!(!report.rewritten);
        assert!(report.compiled);
        assert_eq!(compiler.calls.borrow().len(), 2);
    }

    #[test]
    fn crlf_source_counts_as_unchanged() {
        let (_dir, config) = setup(INPUT, "");
        generate(&config, &FakeCompiler::default()).unwrap();
        let lf = std::fs::read_to_string(&config.gperf_file).unwrap();
        std::fs::write(&config.gperf_file, lf.replace('\n', "\r\n")).unwrap();

        let report = generate(&config, &FakeCompiler::default()).unwrap();
        assert!(!report.rewritten);
    }

    #[test]
    fn gperf_failure_propagates() {
        let (_dir, config) = setup(INPUT, "");
        let compiler = FakeCompiler {
            exit_code: Some(2),
            ..Default::default()
        };
        let err = generate(&config, &compiler).unwrap_err();
        assert!(matches!(err, GenError::GperfFailed { code: Some(2), .. }), "unexpected error {err:?}");
        assert_eq!(err.exit_code(), 2);
        // the source stays behind for inspection
        assert!(config.gperf_file.exists());
    }

    #[test]
    fn check_mode() {
        let (_dir, mut config) = setup(INPUT, "");
        config.check = true;
        let compiler = FakeCompiler::default();

        let err = generate(&config, &compiler).unwrap_err();
        assert!(matches!(err, GenError::Stale { .. }), "missing file should be stale, got {err:?}");
        assert!(!config.gperf_file.exists(), "check mode must not write");

        config.check = false;
        generate(&config, &compiler).unwrap();
        config.check = true;
        let report = generate(&config, &compiler).unwrap();
        assert!(!report.compiled);
        assert!(!report.rewritten);
        assert_eq!(compiler.calls.borrow().len(), 1, "check mode must not run gperf");

        std::fs::write(&config.input, "before\nafter\n").unwrap();
        assert!(matches!(generate(&config, &compiler), Err(GenError::Stale { .. })));
    }

    #[test]
    fn missing_input() {
        let (dir, mut config) = setup("", "");
        config.input = dir.path().join("nope.in");
        let err = generate(&config, &FakeCompiler::default()).unwrap_err();
        assert!(matches!(err, GenError::ReadInput { .. }), "unexpected error {err:?}");
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn malformed_keyword_stops_before_writing() {
        let (_dir, config) = setup("before\n-webkit-\n", "");
        let compiler = FakeCompiler::default();
        let err = generate(&config, &compiler).unwrap_err();
        assert!(matches!(err, GenError::MalformedKeyword { line: 2, .. }), "unexpected error {err:?}");
        assert!(!config.gperf_file.exists());
        assert!(compiler.calls.borrow().is_empty());
    }
}
