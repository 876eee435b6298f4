use crate::core::name::NameRules;
use crate::core::report::{ClassificationBuckets, DeclensionReport};
use crate::core::rules::DeclensionRules;
use crate::core::substitution::SubstitutionDictionary;
use crate::core::surname::SurnameRules;
use crate::core::types::{Category, Normalized, Outcome};
use crate::error::Result;
use std::collections::HashMap;
use std::path::Path;

/// Genitive -> nominative normalizer for one grammatical category.
///
/// The engine owns its memo of earlier decisions and the diagnostic buckets;
/// it is meant to be constructed once per category per run. `normalize`
/// takes `&mut self`, so sharing across threads needs external locking.
pub struct DeclensionEngine<R: DeclensionRules> {
    rules: R,
    dictionary: SubstitutionDictionary,
    cache: HashMap<String, String>,
    buckets: ClassificationBuckets,
}

pub type NameEngine = DeclensionEngine<NameRules>;
pub type SurnameEngine = DeclensionEngine<SurnameRules>;

impl<R: DeclensionRules> DeclensionEngine<R> {
    pub fn new(rules: R, dictionary: SubstitutionDictionary) -> Self {
        Self::from_parts(rules, dictionary, HashMap::new(), ClassificationBuckets::new())
    }

    /// Loads the substitution list at `path` (missing file => empty) and
    /// builds an engine around it.
    pub fn from_path(rules: R, path: &Path) -> Result<Self> {
        Ok(Self::new(rules, SubstitutionDictionary::load(path)?))
    }

    pub(crate) fn from_parts(
        rules: R,
        dictionary: SubstitutionDictionary,
        cache: HashMap<String, String>,
        buckets: ClassificationBuckets,
    ) -> Self {
        Self { rules, dictionary, cache, buckets }
    }

    /// Converts a genitive token to nominative. Never fails: the worst case
    /// is the input returned unchanged and flagged as unresolved.
    pub fn normalize(&mut self, token: &str) -> String {
        self.normalize_detailed(token).value
    }

    /// Same as [`normalize`](Self::normalize), also reporting which step
    /// produced the value.
    pub fn normalize_detailed(&mut self, token: &str) -> Normalized {
        let category = self.rules.category();

        // 1. Already decided earlier: no side effects at all.
        if let Some(cached) = self.cache.get(token) {
            return Normalized { value: cached.clone(), outcome: Outcome::Cached };
        }

        // 2. Curated override. Cached, but recorded in no bucket.
        if let Some(nominative) = self.dictionary.lookup(token) {
            let value = nominative.to_string();
            self.cache.insert(token.to_string(), value.clone());
            tracing::debug!(%category, token, result = %value, "replaced by dictionary");
            return Normalized { value, outcome: Outcome::Dictionary };
        }

        // 3. Already nominative.
        if self.rules.is_excluded(token) {
            self.buckets.record(Outcome::Excluded, token);
            self.cache.insert(token.to_string(), token.to_string());
            tracing::debug!(%category, token, "exclusion");
            return Normalized { value: token.to_string(), outcome: Outcome::Excluded };
        }

        // 4. Suffix rewrite.
        if let Some(value) = self.rules.apply_suffix_rule(token) {
            self.buckets.record(Outcome::Rule, &value);
            self.cache.insert(token.to_string(), value.clone());
            tracing::debug!(%category, token, result = %value, "replaced by rule");
            return Normalized { value, outcome: Outcome::Rule };
        }

        // 5./6. Left unchanged and not cached, so a repeat re-runs the chain.
        let outcome = if self.rules.is_filtered_after_all(token) {
            tracing::debug!(%category, token, "filtered by rules");
            Outcome::FilteredAfterAll
        } else {
            tracing::debug!(%category, token, "no replace rule matched");
            Outcome::Unresolved
        };
        self.buckets.record(outcome, token);
        Normalized { value: token.to_string(), outcome }
    }

    pub fn category(&self) -> Category {
        self.rules.category()
    }

    pub fn dictionary(&self) -> &SubstitutionDictionary {
        &self.dictionary
    }

    pub fn buckets(&self) -> &ClassificationBuckets {
        &self.buckets
    }

    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    pub fn cached(&self, token: &str) -> Option<&str> {
        self.cache.get(token).map(String::as_str)
    }

    pub(crate) fn cache(&self) -> &HashMap<String, String> {
        &self.cache
    }

    pub fn report(&self) -> DeclensionReport {
        DeclensionReport {
            category: self.category(),
            dictionary_entries: self.dictionary.len(),
            cached_tokens: self.cache.len(),
            counts: self.buckets.counts(),
            buckets: self.buckets.clone(),
        }
    }
}

impl NameEngine {
    pub fn names(dictionary: SubstitutionDictionary) -> Self {
        Self::new(NameRules::new(), dictionary)
    }
}

impl SurnameEngine {
    pub fn surnames(dictionary: SubstitutionDictionary) -> Self {
        Self::new(SurnameRules::new(), dictionary)
    }
}
