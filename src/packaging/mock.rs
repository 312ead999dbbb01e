//! Recording packager for tests.

use crate::error::{Result, SetupError};
use crate::metadata::PackageMetadata;
use crate::packaging::{Packager, PackagingAction};

/// A packager that records every registration instead of delegating.
#[derive(Debug, Default)]
pub struct RecordingPackager {
    /// Registrations received, in order.
    pub calls: Vec<(PackageMetadata, PackagingAction)>,
    /// When set, `register` fails with this exit code.
    pub fail_with: Option<i32>,
}

impl RecordingPackager {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Packager for RecordingPackager {
    fn register(&mut self, metadata: &PackageMetadata, action: PackagingAction) -> Result<()> {
        self.calls.push((metadata.clone(), action));
        if let Some(code) = self.fail_with {
            return Err(SetupError::PackagingFailed { code: Some(code) });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_metadata_and_action() {
        let mut packager = RecordingPackager::new();
        packager
            .register(&PackageMetadata::pytsdl(), PackagingAction::Install)
            .unwrap();

        assert_eq!(packager.calls.len(), 1);
        assert_eq!(packager.calls[0].0.name, "pytsdl");
        assert_eq!(packager.calls[0].1, PackagingAction::Install);
    }

    #[test]
    fn fails_when_configured() {
        let mut packager = RecordingPackager {
            fail_with: Some(2),
            ..Default::default()
        };
        let err = packager
            .register(&PackageMetadata::pytsdl(), PackagingAction::Install)
            .unwrap_err();
        assert!(matches!(err, SetupError::PackagingFailed { code: Some(2) }));
        // The call is still recorded
        assert_eq!(packager.calls.len(), 1);
    }
}
