// Language registry
// Maps each enabled language to the backend's opaque execution-environment
// id. Built-in defaults cover the full language set; config/languages.json
// can narrow or re-point the mapping without a rebuild.

use arbiter_common::Language;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse language config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("unknown language in config: {0}")]
    UnknownLanguage(String),
    #[error("no languages configured")]
    Empty,
}

#[derive(Debug, Deserialize)]
struct LanguageEntry {
    name: String,
    environment_id: u32,
}

#[derive(Debug, Deserialize)]
struct LanguagesFile {
    languages: Vec<LanguageEntry>,
}

/// Authoritative source for which languages are enabled and how they map
/// to backend environments.
#[derive(Debug, Clone)]
pub struct LanguageRegistry {
    environments: HashMap<Language, u32>,
}

impl Default for LanguageRegistry {
    fn default() -> Self {
        let environments = [
            (Language::Javascript, 63), // Node.js
            (Language::Python, 71),     // Python 3
            (Language::Java, 62),
            (Language::Cpp, 54), // C++ (GCC 9.2.0)
        ]
        .into_iter()
        .collect();
        Self { environments }
    }
}

impl LanguageRegistry {
    /// Load the registry from a languages.json file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, RegistryError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|source| RegistryError::Io {
                path: path.as_ref().display().to_string(),
                source,
            })?;
        Self::from_json(&content)
    }

    pub(crate) fn from_json(content: &str) -> Result<Self, RegistryError> {
        let file: LanguagesFile = serde_json::from_str(content)?;
        if file.languages.is_empty() {
            return Err(RegistryError::Empty);
        }

        let mut environments = HashMap::new();
        for entry in file.languages {
            let language = Language::from_str(&entry.name)
                .ok_or_else(|| RegistryError::UnknownLanguage(entry.name.clone()))?;
            environments.insert(language, entry.environment_id);
        }

        Ok(Self { environments })
    }

    /// Resolve a language to its execution-environment id, if enabled.
    pub fn resolve(&self, language: Language) -> Option<u32> {
        self.environments.get(&language).copied()
    }

    /// Enabled languages, in stable display order.
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.environments.keys().copied().collect();
        languages.sort_by_key(|l| l.to_string());
        languages
    }
}
