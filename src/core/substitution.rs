// src/core/substitution.rs
use crate::error::{DeclensionError, Result};
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Curated genitive -> nominative overrides for forms the rules get wrong.
///
/// Each line of the source list is either a single token (mapped to itself,
/// marking it as already correct) or two whitespace-separated tokens
/// `genitive nominative`. Keys are case-sensitive; on duplicates the last
/// line wins. Lines with more than two fields are skipped with a warning.
#[derive(Debug, Clone, Default)]
pub struct SubstitutionDictionary {
    label: String,
    entries: HashMap<String, String>,
}

impl SubstitutionDictionary {
    /// An empty dictionary: every lookup misses.
    pub fn empty(label: &str) -> Self {
        Self {
            label: label.to_string(),
            entries: HashMap::new(),
        }
    }

    /// Loads a list from disk. A missing file yields an empty dictionary.
    pub fn load(path: &Path) -> Result<Self> {
        let label = path.display().to_string();

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(list = %label, "substitution list not found, using empty dictionary");
                return Ok(Self::empty(&label));
            }
            Err(e) => return Err(DeclensionError::io(path, e)),
        };

        Ok(Self::parse(&label, &content))
    }

    /// Builds a dictionary from list text already in memory.
    pub fn parse(label: &str, content: &str) -> Self {
        let mut entries = HashMap::new();

        for (idx, line) in content.lines().enumerate() {
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [] => continue,
                [word] => {
                    entries.insert(word.to_string(), word.to_string());
                }
                [genitive, nominative] => {
                    entries.insert(genitive.to_string(), nominative.to_string());
                }
                _ => {
                    tracing::warn!(
                        list = %label,
                        line = idx + 1,
                        fields = fields.len(),
                        "skipping malformed substitution line"
                    );
                }
            }
        }

        tracing::info!(list = %label, entries = entries.len(), "substitutions loaded");

        Self {
            label: label.to_string(),
            entries,
        }
    }

    /// Exact-match lookup of a genitive form.
    pub fn lookup(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}
