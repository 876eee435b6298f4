// File: src/core/report.rs
use crate::core::types::{Category, Outcome};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Per-engine diagnostic sets, one per classification outcome.
///
/// Dictionary hits are deliberately absent: they are only visible through
/// the engine's cache.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationBuckets {
    /// Results (not inputs) of suffix-rule rewrites.
    pub replaced: BTreeSet<String>,
    pub excluded: BTreeSet<String>,
    pub filtered_after_all: BTreeSet<String>,
    pub unresolved: BTreeSet<String>,
}

impl ClassificationBuckets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `token` to the bucket for `outcome`. Returns `true` if it was new.
    /// Outcomes without a bucket are ignored.
    pub fn record(&mut self, outcome: Outcome, token: &str) -> bool {
        let bucket = match outcome {
            Outcome::Rule => &mut self.replaced,
            Outcome::Excluded => &mut self.excluded,
            Outcome::FilteredAfterAll => &mut self.filtered_after_all,
            Outcome::Unresolved => &mut self.unresolved,
            Outcome::Cached | Outcome::Dictionary => return false,
        };
        bucket.insert(token.to_string())
    }

    pub fn bucket(&self, outcome: Outcome) -> Option<&BTreeSet<String>> {
        match outcome {
            Outcome::Rule => Some(&self.replaced),
            Outcome::Excluded => Some(&self.excluded),
            Outcome::FilteredAfterAll => Some(&self.filtered_after_all),
            Outcome::Unresolved => Some(&self.unresolved),
            Outcome::Cached | Outcome::Dictionary => None,
        }
    }

    pub fn counts(&self) -> BucketCounts {
        BucketCounts {
            replaced: self.replaced.len(),
            excluded: self.excluded.len(),
            filtered_after_all: self.filtered_after_all.len(),
            unresolved: self.unresolved.len(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    pub replaced: usize,
    pub excluded: usize,
    pub filtered_after_all: usize,
    pub unresolved: usize,
}

impl fmt::Display for BucketCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "replaced={} excluded={} filtered={} unresolved={}",
            self.replaced, self.excluded, self.filtered_after_all, self.unresolved
        )
    }
}

/// End-of-run view of one engine, for human review.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeclensionReport {
    pub category: Category,
    pub dictionary_entries: usize,
    pub cached_tokens: usize,
    pub counts: BucketCounts,
    pub buckets: ClassificationBuckets,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_is_set_like() {
        let mut buckets = ClassificationBuckets::new();
        assert!(buckets.record(Outcome::Unresolved, "Бугу"));
        assert!(!buckets.record(Outcome::Unresolved, "Бугу"));
        assert_eq!(buckets.counts().unresolved, 1);
    }

    #[test]
    fn dictionary_and_cache_have_no_bucket() {
        let mut buckets = ClassificationBuckets::new();
        assert!(!buckets.record(Outcome::Dictionary, "Грицько"));
        assert!(!buckets.record(Outcome::Cached, "Грицько"));
        assert_eq!(buckets, ClassificationBuckets::default());
        assert!(buckets.bucket(Outcome::Dictionary).is_none());
    }

    #[test]
    fn counts_display() {
        let mut buckets = ClassificationBuckets::new();
        buckets.record(Outcome::Rule, "Іван");
        buckets.record(Outcome::Excluded, "Андрія");
        assert_eq!(
            buckets.counts().to_string(),
            "replaced=1 excluded=1 filtered=0 unresolved=0"
        );
    }
}
