//! Question sets used to seed the question table.
//!
//! A seed is a YAML document (or a directory of them) of the form
//!
//! ```yaml
//! version: "0.1"
//! questions:
//!   - text: How often does your team refine problems before jumping to solutions?
//!     category: Problem Identification
//!     max-score: 5
//! ```

use crate::questions::error::ConfigError;
use crate::questions::v01::QuestionV01;
use futures::TryStreamExt;
use innodex_utils::loader::{Filter, LoaderTrait};
use serde::Deserialize;

pub mod error;
pub mod v01;

const DEFAULT_QUESTIONS: &str = include_str!("../seed/questions.yaml");

#[derive(Deserialize, Debug)]
#[serde(tag = "version")]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub enum VersionConfig {
    #[serde(rename = "0.1")]
    V01 { questions: Vec<QuestionV01> },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSeed {
    pub text: String,
    pub category: String,
    pub max_score: u32,
}

impl From<QuestionV01> for QuestionSeed {
    fn from(v01: QuestionV01) -> Self {
        Self {
            text: v01.text.trim().to_owned(),
            category: v01.category.trim().to_owned(),
            max_score: v01.max_score,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionConfig {
    pub questions: Vec<QuestionSeed>,
}

impl QuestionConfig {
    /// The questionnaire shipped with the service.
    pub fn builtin() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        config.extend_from_slice("builtin", DEFAULT_QUESTIONS.as_bytes())?;
        Ok(config)
    }

    fn extend_from_slice(&mut self, source_key: &str, content: &[u8]) -> Result<(), ConfigError> {
        let VersionConfig::V01 { questions } = serde_yml::from_slice::<VersionConfig>(content)?;
        for (index, question) in questions.into_iter().map(QuestionSeed::from).enumerate() {
            let reason = if question.text.is_empty() {
                Some("text is empty")
            } else if question.category.is_empty() {
                Some("category is empty")
            } else if question.max_score == 0 {
                Some("max-score must be positive")
            } else {
                None
            };
            if let Some(reason) = reason {
                return Err(ConfigError::InvalidQuestion {
                    source_key: source_key.to_owned(),
                    index,
                    reason,
                });
            }
            self.questions.push(question);
        }
        Ok(())
    }
}

/// Loads a question set from a single file or from every YAML file of a directory, in file name order.
pub async fn load<L: LoaderTrait>(loader: &L) -> Result<QuestionConfig, ConfigError> {
    tracing::debug!("Loading questions");
    let mut files = if loader.is_dir("").await? {
        loader.load_dir("", Filter::Yaml).try_collect::<Vec<_>>().await?
    } else {
        vec![loader.load_file("").await?]
    };
    files.sort_by(|a, b| a.metadata.key.cmp(&b.metadata.key));

    let mut config = QuestionConfig::default();
    for file in files {
        tracing::debug!(key = %file.metadata.key, last_modified = ?file.metadata.last_modified, "reading question file");
        config.extend_from_slice(&file.metadata.key, &file.content)?;
    }
    if config.questions.is_empty() {
        return Err(ConfigError::Empty);
    }
    tracing::debug!(questions = config.questions.len(), "loaded question configuration");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use innodex_utils::loader::error::{LoadingError, ParseError};
    use innodex_utils::loader::file_system::FileSystemLoader;
    use std::collections::BTreeSet;
    use test_log::test;

    #[test]
    fn test_builtin_questions() {
        let config = QuestionConfig::builtin().unwrap();
        assert_eq!(config.questions.len(), 8);
        assert!(config.questions.iter().all(|question| question.max_score == 5));
        let categories: BTreeSet<_> = config.questions.iter().map(|q| q.category.as_str()).collect();
        assert_eq!(
            categories,
            BTreeSet::from([
                "Collaboration",
                "Customer Focus",
                "Data Analytics",
                "Problem Identification",
                "Research"
            ])
        );
    }

    #[test]
    fn test_default_max_score() {
        let mut config = QuestionConfig::default();
        config
            .extend_from_slice(
                "inline",
                b"version: \"0.1\"\nquestions:\n  - text: Who decides?\n    category: Collaboration\n",
            )
            .unwrap();
        assert_eq!(config.questions[0].max_score, 5);
    }

    #[test]
    fn test_rejects_unknown_fields_and_versions() {
        let mut config = QuestionConfig::default();
        let unknown_field = b"version: \"0.1\"\nquestions:\n  - text: A\n    category: B\n    weight: 2\n";
        assert!(matches!(
            config.extend_from_slice("inline", unknown_field),
            Err(ConfigError::Loading(LoadingError::Parse(ParseError::Yaml(_))))
        ));
        let unknown_version = b"version: \"9.9\"\nquestions: []\n";
        assert!(config.extend_from_slice("inline", unknown_version).is_err());
    }

    #[test]
    fn test_rejects_zero_max_score() {
        let mut config = QuestionConfig::default();
        let result = config.extend_from_slice(
            "inline",
            b"version: \"0.1\"\nquestions:\n  - text: A\n    category: B\n    max-score: 0\n",
        );
        assert!(matches!(result, Err(ConfigError::InvalidQuestion { index: 0, .. })));
    }

    #[test(tokio::test)]
    async fn test_load_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("b.yaml"),
            "version: \"0.1\"\nquestions:\n  - text: Second\n    category: Research\n",
        )
        .unwrap();
        std::fs::write(
            dir.path().join("a.yaml"),
            "version: \"0.1\"\nquestions:\n  - text: First\n    category: Research\n",
        )
        .unwrap();

        let config = load(&FileSystemLoader::new(dir.path().to_path_buf())).await.unwrap();
        let texts: Vec<_> = config.questions.iter().map(|q| q.text.as_str()).collect();
        assert_eq!(texts, ["First", "Second"]);
    }

    #[test(tokio::test)]
    async fn test_load_single_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("questions.yaml");
        std::fs::write(&path, DEFAULT_QUESTIONS).unwrap();

        let config = load(&FileSystemLoader::new(path)).await.unwrap();
        assert_eq!(config, QuestionConfig::builtin().unwrap());
    }

    #[test(tokio::test)]
    async fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&FileSystemLoader::new(dir.path().to_path_buf())).await;
        assert!(matches!(result, Err(ConfigError::Empty)));
    }
}
