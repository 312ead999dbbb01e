//! Runtime version querying and parsing.
//!
//! The version is read once at startup and never mutated. The query snippet
//! uses `%`-formatting so it runs unchanged under both Python 2 and 3 — a
//! Python 2 interpreter has to be able to *report* its version for the gate
//! to reject it with the right diagnostic.

use crate::error::{Result, SetupError};
use crate::process::{self, RunOptions};
use regex::Regex;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::sync::OnceLock;

/// Python snippet that prints the interpreter version as `major.minor.patch`.
const VERSION_QUERY: &str = "import sys; print('%d.%d.%d' % sys.version_info[:3])";

/// An interpreter version, read once at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuntimeVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl RuntimeVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Whether this version passes a major-version gate.
    pub fn meets_major(&self, required: u32) -> bool {
        self.major >= required
    }
}

impl fmt::Display for RuntimeVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d+)\.(\d+)(?:\.(\d+))?").expect("hardcoded version pattern")
    })
}

impl FromStr for RuntimeVersion {
    type Err = SetupError;

    fn from_str(s: &str) -> Result<Self> {
        let caps = version_pattern()
            .captures(s.trim())
            .ok_or_else(|| SetupError::VersionParse {
                output: s.to_string(),
            })?;
        let part = |i: usize| -> u32 {
            caps.get(i)
                .and_then(|m| m.as_str().parse().ok())
                .unwrap_or(0)
        };
        Ok(Self::new(part(1), part(2), part(3)))
    }
}

/// Query an interpreter for its version.
pub fn query_version(interpreter: &Path) -> Result<RuntimeVersion> {
    let result = process::run(interpreter, &["-c", VERSION_QUERY], &RunOptions::captured())?;

    if !result.success {
        return Err(SetupError::ProbeFailed {
            path: interpreter.to_path_buf(),
            message: if result.stderr.trim().is_empty() {
                format!("version query exited with code {:?}", result.exit_code)
            } else {
                result.stderr.trim().to_string()
            },
        });
    }

    let version: RuntimeVersion = result.stdout.parse()?;
    tracing::debug!(
        "interpreter {} reports version {}",
        interpreter.display(),
        version
    );
    Ok(version)
}
