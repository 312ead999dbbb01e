//! The static package metadata record.
//!
//! This is the record the original `setup.py` passed to `setuptools.setup()`.
//! It is constructed once, never mutated, and handed field-for-field intact
//! to the packaging backend.

use serde::{Deserialize, Serialize};

/// Package metadata forwarded to the packaging subsystem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageMetadata {
    /// Distribution name.
    pub name: String,
    /// Distribution version.
    pub version: String,
    /// One-line description.
    pub description: String,
    /// Author name.
    pub author: String,
    /// Author contact email.
    pub author_email: String,
    /// Project source URL.
    pub url: String,
    /// Python packages included in the distribution.
    pub packages: Vec<String>,
}

impl PackageMetadata {
    /// The pytsdl distribution record.
    pub fn pytsdl() -> Self {
        Self {
            name: "pytsdl".to_string(),
            version: "0.3".to_string(),
            description: "TSDL parser implemented entirely in Python 3".to_string(),
            author: "Philippe Proulx".to_string(),
            author_email: "eeppeliteloop@gmail.com".to_string(),
            url: "https://github.com/eepp/pytsdl".to_string(),
            packages: vec!["pytsdl".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pytsdl_record_has_declared_fields() {
        let record = PackageMetadata::pytsdl();
        assert_eq!(record.name, "pytsdl");
        assert_eq!(record.version, "0.3");
        assert_eq!(
            record.description,
            "TSDL parser implemented entirely in Python 3"
        );
        assert_eq!(record.author, "Philippe Proulx");
        assert_eq!(record.author_email, "eeppeliteloop@gmail.com");
        assert_eq!(record.url, "https://github.com/eepp/pytsdl");
    }

    #[test]
    fn pytsdl_record_registers_exactly_one_package() {
        let record = PackageMetadata::pytsdl();
        assert_eq!(record.packages, vec!["pytsdl".to_string()]);
    }

    #[test]
    fn record_round_trips_through_json() {
        let record = PackageMetadata::pytsdl();
        let json = serde_json::to_string(&record).unwrap();
        let parsed: PackageMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record);
    }

    #[test]
    fn json_contains_all_seven_fields() {
        let record = PackageMetadata::pytsdl();
        let value: serde_json::Value = serde_json::to_value(&record).unwrap();
        let obj = value.as_object().unwrap();
        for field in [
            "name",
            "version",
            "description",
            "author",
            "author_email",
            "url",
            "packages",
        ] {
            assert!(obj.contains_key(field), "missing field {}", field);
        }
        assert_eq!(obj.len(), 7);
    }
}
