// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single word from the register: a surname or a given name.
pub type Token = String;

/// The grammatical category an engine instance is responsible for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Name,
    Surname,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Name => "name",
            Category::Surname => "surname",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which step of the decision chain produced a normalized token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Served from the engine's memo of earlier decisions.
    Cached,
    /// Exact hit in the substitution dictionary.
    Dictionary,
    /// Already nominative (or not transformable); left unchanged.
    Excluded,
    /// Rewritten by a suffix rule.
    Rule,
    /// No rule matched but the terminal filter accepted it; left unchanged.
    FilteredAfterAll,
    /// Nothing matched; left unchanged for human review.
    Unresolved,
}

/// Result of a single `normalize_detailed` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub value: Token,
    pub outcome: Outcome,
}
