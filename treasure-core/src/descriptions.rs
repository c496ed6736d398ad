use crate::{constants::FALLBACK_DESCRIPTION, errors::DescriptionsError};

use std::path::{Path, PathBuf};

use rand::Rng;
use serde::Deserialize;
use tracing::{Level, event};

/// Non-empty, ordered list of filler descriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Descriptions(Vec<String>);

impl Descriptions {
    /// Blank entries are dropped; an empty result is rejected.
    pub fn new(descriptions: Vec<String>) -> Result<Self, DescriptionsError> {
        let descriptions = descriptions
            .into_iter()
            .filter(|description| !description.trim().is_empty())
            .collect::<Vec<_>>();

        if descriptions.is_empty() {
            return Err(DescriptionsError::Empty);
        }

        Ok(Descriptions(descriptions))
    }

    pub fn fallback() -> Self {
        Descriptions(vec![FALLBACK_DESCRIPTION.to_string()])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    // Never empty, kept for clippy's `len_without_is_empty`.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub(crate) fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.0[rng.random_range(0..self.0.len())]
    }
}

impl Default for Descriptions {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Supplies the filler descriptions used for generic cells.
pub trait DescriptionSource {
    fn load(&self) -> Result<Descriptions, DescriptionsError>;
}

#[derive(Debug, Deserialize)]
struct DescriptionsDocument {
    descriptions: Vec<String>,
}

/// Parses a `{"descriptions": ["..", ..]}` document.
pub fn parse_descriptions(json: &str) -> Result<Descriptions, DescriptionsError> {
    let document: DescriptionsDocument = serde_json::from_str(json)?;

    Descriptions::new(document.descriptions)
}

/// Reads descriptions from a JSON file on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileSource { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DescriptionSource for JsonFileSource {
    fn load(&self) -> Result<Descriptions, DescriptionsError> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|source| DescriptionsError::Io {
                path: self.path.clone(),
                source,
            })?;

        parse_descriptions(&contents)
    }
}

/// Loads from `source`, substituting [Descriptions::fallback] on any failure.
pub fn load_or_fallback<S: DescriptionSource + ?Sized>(source: &S) -> Descriptions {
    match source.load() {
        Ok(descriptions) => {
            event!(Level::DEBUG, "Loaded {} descriptions", descriptions.len());
            descriptions
        }
        Err(err) => {
            event!(
                Level::WARN,
                "Could not load descriptions, using fallback: {}",
                err
            );
            Descriptions::fallback()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    use std::io::Write;

    struct FailingSource;

    impl DescriptionSource for FailingSource {
        fn load(&self) -> Result<Descriptions, DescriptionsError> {
            Err(DescriptionsError::Empty)
        }
    }

    #[test]
    fn test_parse_descriptions() {
        let descriptions =
            parse_descriptions(r#"{"descriptions": ["Sand.", "  ", "A palm tree."]}"#).unwrap();

        assert_eq!(descriptions.as_slice(), &["Sand.", "A palm tree."]);
    }

    #[test]
    fn test_parse_rejects_empty_and_malformed() {
        assert!(matches!(
            parse_descriptions(r#"{"descriptions": []}"#),
            Err(DescriptionsError::Empty)
        ));
        assert!(matches!(
            parse_descriptions(r#"{"descriptions": "Sand."}"#),
            Err(DescriptionsError::Json(_))
        ));
        assert!(matches!(
            parse_descriptions("not json"),
            Err(DescriptionsError::Json(_))
        ));
    }

    #[test]
    fn test_json_file_source() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"descriptions": ["Wet sand.", "Driftwood."]}}"#).unwrap();

        let descriptions = JsonFileSource::new(file.path()).load().unwrap();

        assert_eq!(descriptions.len(), 2);
        assert_eq!(descriptions.as_slice()[1], "Driftwood.");
    }

    #[test]
    fn test_missing_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("missing.json"));

        assert!(matches!(source.load(), Err(DescriptionsError::Io { .. })));
        assert_eq!(load_or_fallback(&source), Descriptions::fallback());
    }

    #[test]
    fn test_fallback() {
        let descriptions = load_or_fallback(&FailingSource);

        assert_eq!(descriptions.as_slice(), &["Nothing here."]);
        assert!(!descriptions.is_empty());
    }
}
