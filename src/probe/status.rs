//! Probe outcome types.

/// The result of probing a single Python module dependency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    /// The module imported cleanly.
    Satisfied,

    /// The module is not installed. Carries the manual installation steps
    /// shown to the user.
    Missing {
        /// Remediation commands, one per line.
        remediation: Vec<String>,
    },

    /// The interpreter ran but the import failed for a reason other than
    /// the module being absent (e.g. a broken installation).
    ProbeFailed {
        /// Interpreter stderr, trimmed.
        message: String,
    },
}

impl DependencyStatus {
    /// Whether the dependency is importable.
    pub fn is_satisfied(&self) -> bool {
        matches!(self, DependencyStatus::Satisfied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn satisfied_is_satisfied() {
        assert!(DependencyStatus::Satisfied.is_satisfied());
    }

    #[test]
    fn missing_is_not_satisfied() {
        let status = DependencyStatus::Missing {
            remediation: vec!["sudo pip3 install pyPEG2".to_string()],
        };
        assert!(!status.is_satisfied());
    }

    #[test]
    fn probe_failed_is_not_satisfied() {
        let status = DependencyStatus::ProbeFailed {
            message: "segfault".to_string(),
        };
        assert!(!status.is_satisfied());
    }

    #[test]
    fn missing_carries_remediation_steps() {
        let status = DependencyStatus::Missing {
            remediation: vec!["step one".to_string(), "step two".to_string()],
        };
        if let DependencyStatus::Missing { remediation } = &status {
            assert_eq!(remediation.len(), 2);
        } else {
            panic!("expected Missing");
        }
    }
}
