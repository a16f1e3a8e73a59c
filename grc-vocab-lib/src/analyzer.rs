// The external morphological analyzer (Morpheus `cruncher`).

use std::io::{ErrorKind, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};

use log::{debug, warn};
use thiserror::Error;

/// Retry switches understood by the analyzer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AnalyzerFlags {
    pub ignore_case: bool,
    pub ignore_accents: bool,
}

impl AnalyzerFlags {
    pub const NONE: AnalyzerFlags = AnalyzerFlags {
        ignore_case: false,
        ignore_accents: false,
    };
}

/// Anything that turns one working-encoding token into raw `<NL>` output.
///
/// Failures are not errors here: an analyzer that cannot run returns an
/// empty string, which parses to zero analyses.
pub trait Analyzer {
    fn analyze(&self, token: &str, flags: AnalyzerFlags) -> String;
}

impl<F> Analyzer for F
where
    F: Fn(&str, AnalyzerFlags) -> String,
{
    fn analyze(&self, token: &str, flags: AnalyzerFlags) -> String {
        self(token, flags)
    }
}

#[derive(Debug, Error)]
pub enum AnalyzerError {
    #[error("failed to start {path}: {source}")]
    Spawn {
        path: String,
        source: std::io::Error,
    },
    #[error("I/O error talking to analyzer: {0}")]
    Io(#[from] std::io::Error),
    #[error("analyzer exited with {0}")]
    Status(ExitStatus),
    #[error("analyzer output is not UTF-8")]
    Encoding(#[from] std::string::FromUtf8Error),
}

/// A `cruncher` executable plus the stem library it reads through `MORPHLIB`.
#[derive(Debug, Clone)]
pub struct Cruncher {
    executable: PathBuf,
    stemlib: PathBuf,
}

impl Cruncher {
    pub fn new(executable: impl Into<PathBuf>, stemlib: impl Into<PathBuf>) -> Self {
        Cruncher {
            executable: executable.into(),
            stemlib: stemlib.into(),
        }
    }

    fn switches(flags: AnalyzerFlags) -> Vec<&'static str> {
        let mut args = Vec::new();
        if flags.ignore_case {
            args.push("-S");
        }
        if flags.ignore_accents {
            args.push("-n");
        }
        args
    }

    /// Run one token through the cruncher and return its stdout.
    pub fn run(&self, token: &str, flags: AnalyzerFlags) -> Result<String, AnalyzerError> {
        let mut child = Command::new(&self.executable)
            .args(Self::switches(flags))
            .env("MORPHLIB", &self.stemlib)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| AnalyzerError::Spawn {
                path: self.executable.display().to_string(),
                source,
            })?;

        if let Some(mut stdin) = child.stdin.take() {
            // The child may exit without reading; its status is what counts.
            if let Err(e) = writeln!(stdin, "{token}") {
                if e.kind() != ErrorKind::BrokenPipe {
                    return Err(e.into());
                }
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(AnalyzerError::Status(output.status));
        }
        Ok(String::from_utf8(output.stdout)?)
    }
}

impl Analyzer for Cruncher {
    fn analyze(&self, token: &str, flags: AnalyzerFlags) -> String {
        match self.run(token, flags) {
            Ok(out) => {
                debug!("cruncher {token:?} {flags:?}: {} bytes", out.len());
                out
            }
            Err(e) => {
                warn!("analyzer failed for {token:?}: {e}");
                String::new()
            }
        }
    }
}
