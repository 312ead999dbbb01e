//! Interpreter discovery.
//!
//! The original `setup.py` ran *under* the interpreter it was checking; this
//! bootstrap runs outside of one and has to find it first. Resolution order:
//!
//! 1. Explicit `--python` override
//! 2. `PYTSDL_PYTHON` environment variable (handles relocated installs)
//! 3. `python3`, then `python`, on PATH
//!
//! PATH resolution iterates entries directly rather than shelling out to
//! `which` — `which` behavior varies across systems and is sometimes a shell
//! builtin with inconsistent error handling.

use crate::error::{Result, SetupError};
use std::path::{Path, PathBuf};

/// Environment variable naming an interpreter to use.
pub const INTERPRETER_ENV_VAR: &str = "PYTSDL_PYTHON";

/// Interpreter names probed on PATH, in order.
const INTERPRETER_CANDIDATES: &[&str] = &["python3", "python"];

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_on_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let candidate = dir.join(tool);
        if candidate.is_file() && is_executable(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Locate the Python interpreter to bootstrap with.
///
/// `override_path` comes from the `--python` flag and wins outright.
pub fn locate_interpreter(override_path: Option<&Path>) -> Result<PathBuf> {
    locate_with_env(override_path, |key| std::env::var(key), &parse_system_path())
}

/// Locate the interpreter with a custom env lookup and PATH entries.
///
/// This allows testing without modifying actual environment variables.
pub fn locate_with_env<F>(
    override_path: Option<&Path>,
    env_fn: F,
    path_entries: &[PathBuf],
) -> Result<PathBuf>
where
    F: Fn(&str) -> std::result::Result<String, std::env::VarError>,
{
    if let Some(path) = override_path {
        if path.is_file() && is_executable(path) {
            tracing::debug!("using interpreter override {}", path.display());
            return Ok(path.to_path_buf());
        }
        return Err(SetupError::InterpreterNotFound {
            searched: vec![path.display().to_string()],
        });
    }

    if let Ok(val) = env_fn(INTERPRETER_ENV_VAR) {
        let path = PathBuf::from(&val);
        if path.is_file() && is_executable(&path) {
            tracing::debug!("using interpreter from {}: {}", INTERPRETER_ENV_VAR, val);
            return Ok(path);
        }
        return Err(SetupError::InterpreterNotFound {
            searched: vec![val],
        });
    }

    for candidate in INTERPRETER_CANDIDATES {
        if let Some(resolved) = resolve_on_path(candidate, path_entries) {
            tracing::debug!("resolved {} to {}", candidate, resolved.display());
            return Ok(resolved);
        }
    }

    Err(SetupError::InterpreterNotFound {
        searched: INTERPRETER_CANDIDATES
            .iter()
            .map(|s| s.to_string())
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn not_present(_: &str) -> std::result::Result<String, std::env::VarError> {
        Err(std::env::VarError::NotPresent)
    }

    /// Create a fake binary at a path (creates parent dirs as needed).
    fn create_fake_binary(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "#!/bin/sh\n").unwrap();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
        }
    }

    #[test]
    fn resolve_on_path_finds_first_match() {
        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        create_fake_binary(&dir_a.join("python3"));
        create_fake_binary(&dir_b.join("python3"));

        let result = resolve_on_path("python3", &[dir_a.clone(), dir_b]);
        assert_eq!(result, Some(dir_a.join("python3")));
    }

    #[test]
    fn resolve_on_path_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("empty");
        fs::create_dir_all(&dir).unwrap();

        assert!(resolve_on_path("python3", &[dir]).is_none());
    }

    #[cfg(unix)]
    #[test]
    fn resolve_on_path_skips_non_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let dir_a = temp.path().join("a");
        let dir_b = temp.path().join("b");
        fs::create_dir_all(&dir_a).unwrap();
        fs::write(dir_a.join("python3"), "not executable").unwrap();
        fs::set_permissions(dir_a.join("python3"), fs::Permissions::from_mode(0o644)).unwrap();
        create_fake_binary(&dir_b.join("python3"));

        let result = resolve_on_path("python3", &[dir_a, dir_b.clone()]);
        assert_eq!(result, Some(dir_b.join("python3")));
    }

    #[test]
    fn override_wins_over_candidates() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("custom-python");
        create_fake_binary(&custom);
        let on_path = temp.path().join("bin");
        create_fake_binary(&on_path.join("python3"));

        let result = locate_with_env(Some(&custom), not_present, &[on_path]).unwrap();
        assert_eq!(result, custom);
    }

    #[test]
    fn missing_override_is_an_error_not_a_fallback() {
        let temp = TempDir::new().unwrap();
        let on_path = temp.path().join("bin");
        create_fake_binary(&on_path.join("python3"));

        let result = locate_with_env(
            Some(Path::new("/nonexistent/python")),
            not_present,
            &[on_path],
        );
        assert!(matches!(
            result,
            Err(SetupError::InterpreterNotFound { .. })
        ));
    }

    #[test]
    fn env_var_checked_before_path_candidates() {
        let temp = TempDir::new().unwrap();
        let custom = temp.path().join("env-python");
        create_fake_binary(&custom);
        let on_path = temp.path().join("bin");
        create_fake_binary(&on_path.join("python3"));

        let custom_str = custom.to_string_lossy().to_string();
        let result = locate_with_env(
            None,
            |var| {
                if var == INTERPRETER_ENV_VAR {
                    Ok(custom_str.clone())
                } else {
                    Err(std::env::VarError::NotPresent)
                }
            },
            &[on_path],
        )
        .unwrap();
        assert_eq!(result, custom);
    }

    #[test]
    fn python3_preferred_over_python() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("python"));
        create_fake_binary(&bin.join("python3"));

        let result = locate_with_env(None, not_present, &[bin.clone()]).unwrap();
        assert_eq!(result, bin.join("python3"));
    }

    #[test]
    fn falls_back_to_python_when_no_python3() {
        let temp = TempDir::new().unwrap();
        let bin = temp.path().join("bin");
        create_fake_binary(&bin.join("python"));

        let result = locate_with_env(None, not_present, &[bin.clone()]).unwrap();
        assert_eq!(result, bin.join("python"));
    }

    #[test]
    fn nothing_found_reports_searched_names() {
        let temp = TempDir::new().unwrap();
        let empty = temp.path().join("empty");
        fs::create_dir_all(&empty).unwrap();

        let err = locate_with_env(None, not_present, &[empty]).unwrap_err();
        match err {
            SetupError::InterpreterNotFound { searched } => {
                assert_eq!(searched, vec!["python3", "python"]);
            }
            other => panic!("expected InterpreterNotFound, got {:?}", other),
        }
    }
}
