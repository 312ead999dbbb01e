//! Child process execution.
//!
//! The bootstrap only ever runs the located Python interpreter directly
//! (`python -c <code> [args...]`), never through a shell, so there is no
//! quoting or interpolation layer here.

use crate::error::{Result, SetupError};
use std::collections::HashMap;
use std::path::Path;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of running a child process.
#[derive(Debug, Clone)]
pub struct RunResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Captured standard output.
    pub stdout: String,

    /// Captured standard error.
    pub stderr: String,

    /// Execution duration.
    pub duration: Duration,

    /// Whether the process exited with code 0.
    pub success: bool,
}

/// Options for process execution.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Environment variables (merged with the parent environment).
    pub env: HashMap<String, String>,

    /// Capture stdout (if false, inherits from parent).
    pub capture_stdout: bool,

    /// Capture stderr (if false, inherits from parent).
    pub capture_stderr: bool,
}

impl RunOptions {
    /// Options that capture both output streams.
    pub fn captured() -> Self {
        Self {
            capture_stdout: true,
            capture_stderr: true,
            ..Default::default()
        }
    }

    /// Options that pass both output streams through to the parent.
    pub fn inherited() -> Self {
        Self::default()
    }
}

/// Run a program with arguments, waiting for it to exit.
pub fn run(program: &Path, args: &[&str], options: &RunOptions) -> Result<RunResult> {
    let start = Instant::now();

    let mut cmd = Command::new(program);
    cmd.args(args);

    for (key, value) in &options.env {
        cmd.env(key, value);
    }

    cmd.stdin(Stdio::null());
    cmd.stdout(if options.capture_stdout {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });
    cmd.stderr(if options.capture_stderr {
        Stdio::piped()
    } else {
        Stdio::inherit()
    });

    let output = cmd.output().map_err(|e| SetupError::ProbeFailed {
        path: program.to_path_buf(),
        message: e.to_string(),
    })?;

    let duration = start.elapsed();

    let stdout = if options.capture_stdout {
        String::from_utf8_lossy(&output.stdout).to_string()
    } else {
        String::new()
    };

    let stderr = if options.capture_stderr {
        String::from_utf8_lossy(&output.stderr).to_string()
    } else {
        String::new()
    };

    Ok(RunResult {
        exit_code: output.status.code(),
        stdout,
        stderr,
        duration,
        success: output.status.success(),
    })
}
