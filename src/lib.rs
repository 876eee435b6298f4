// src/lib.rs

pub mod core {
    pub mod engine;
    pub mod name;
    pub mod report;
    pub mod rules;
    pub mod substitution;
    pub mod surname;
    pub mod translit;
    pub mod types;
}
pub mod config;
pub mod error;
pub mod ledger;
pub mod persistence;

pub use crate::core::engine::{DeclensionEngine, NameEngine, SurnameEngine};
pub use crate::core::name::NameRules;
pub use crate::core::rules::DeclensionRules;
pub use crate::core::substitution::SubstitutionDictionary;
pub use crate::core::surname::SurnameRules;
pub use crate::core::translit::transliterate;
pub use crate::core::types::{Category, Normalized, Outcome};
pub use crate::error::{DeclensionError, Result};
