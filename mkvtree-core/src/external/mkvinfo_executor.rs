//! mkvinfo integration for producing report trees
//!
//! This module runs `mkvinfo` on a Matroska file and folds its standard output
//! into a [`Tree`] line by line while the process is still running, so the
//! report never has to be held in memory as a whole.

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use crate::report::{Tree, parse_reader};
use std::io::{self, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::thread;

/// Default name of the mkvinfo binary.
pub const DEFAULT_MKVINFO: &str = "mkvinfo";

/// Trait for anything that can turn a media file into a report tree.
pub trait ReportExecutor {
    /// Produces the parsed report for `input_path`.
    fn report_tree(&self, input_path: &Path) -> CoreResult<Tree>;
}

/// Runs an mkvinfo binary and parses its text output.
#[derive(Debug, Clone)]
pub struct MkvinfoExecutor {
    program: String,
}

impl MkvinfoExecutor {
    pub fn new() -> Self {
        Self::with_program(DEFAULT_MKVINFO)
    }

    /// Uses a specific binary name or path instead of `mkvinfo`.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for MkvinfoExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportExecutor for MkvinfoExecutor {
    fn report_tree(&self, input_path: &Path) -> CoreResult<Tree> {
        log::debug!("Running {} on: {}", self.program, input_path.display());

        let mut child = Command::new(&self.program)
            .arg(input_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == io::ErrorKind::NotFound {
                    log::warn!("Dependency '{}' not found.", self.program);
                    CoreError::DependencyNotFound(self.program.clone())
                } else {
                    command_start_error(self.program.as_str(), e)
                }
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| CoreError::Io(io::Error::other("mkvinfo stdout was not captured")))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| CoreError::Io(io::Error::other("mkvinfo stderr was not captured")))?;

        // Drain stderr alongside stdout so a chatty process cannot fill its pipe.
        let stderr_reader = thread::spawn(move || {
            let mut bytes = Vec::new();
            let _ = stderr.read_to_end(&mut bytes);
            String::from_utf8_lossy(&bytes).into_owned()
        });

        let parsed = parse_reader(BufReader::new(stdout));
        if parsed.is_err() {
            // The exit status of a killed producer says nothing about the report.
            let _ = child.kill();
            let _ = child.wait();
            let _ = stderr_reader.join();
            return parsed;
        }

        let status = child.wait()?;
        let stderr = stderr_reader.join().unwrap_or_default();
        if !status.success() {
            log::error!(
                "{} failed for {}: {}",
                self.program,
                input_path.display(),
                stderr.trim()
            );
            return Err(command_failed_error(self.program.as_str(), status, stderr));
        }

        parsed
    }
}
