// src/core/rules.rs
use crate::core::types::Category;

/// Consonants after which a trailing genitive "у" is simply dropped.
/// Shared by both rule sets.
pub const BASE_CONSONANTS: [char; 14] = [
    'б', 'в', 'д', 'з', 'н', 'п', 'р', 'с', 'т', 'ф', 'ч', 'х', 'ш', 'ц',
];

/// The capability set a grammatical category supplies to the engine.
///
/// All three operations are pure and look only at the last few characters
/// of the token.
pub trait DeclensionRules {
    fn category(&self) -> Category;

    /// Already nominative, or not something the rules can transform.
    /// Checked before any suffix rule.
    fn is_excluded(&self, token: &str) -> bool;

    /// First matching rule of the category's ordered table, if any.
    fn apply_suffix_rule(&self, token: &str) -> Option<String>;

    /// Catch-all for tokens no rule matched: `true` means "probably fine".
    fn is_filtered_after_all(&self, token: &str) -> bool;
}

/// Condition on the character immediately before the matched suffix.
#[derive(Debug, Clone, Copy)]
pub enum Guard {
    Always,
    PrecededBy(&'static [char]),
}

/// One row of a rule table: when `suffix` ends the token and `guard` holds,
/// the suffix is rewritten to `replacement`.
#[derive(Debug, Clone, Copy)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub guard: Guard,
    pub replacement: &'static str,
}

impl SuffixRule {
    pub const fn new(suffix: &'static str, replacement: &'static str) -> Self {
        Self { suffix, guard: Guard::Always, replacement }
    }

    pub const fn after(suffix: &'static str, preceding: &'static [char], replacement: &'static str) -> Self {
        Self { suffix, guard: Guard::PrecededBy(preceding), replacement }
    }

    pub fn apply(&self, token: &str) -> Option<String> {
        if let Guard::PrecededBy(set) = self.guard {
            // A token with nothing before the suffix cannot satisfy the guard.
            let prev = token.strip_suffix(self.suffix)?.chars().next_back()?;
            if !set.contains(&prev) {
                return None;
            }
        }
        replace_suffix(token, self.suffix, self.replacement)
    }
}

/// Tries the table in order; the first rule that fires wins.
pub fn apply_first(table: &[SuffixRule], token: &str) -> Option<String> {
    table.iter().find_map(|rule| rule.apply(token))
}

/// Rewrites `suffix` at the very end of `token`, leaving every earlier
/// character untouched even if the same substring occurs before.
pub fn replace_suffix(token: &str, suffix: &str, replacement: &str) -> Option<String> {
    token
        .strip_suffix(suffix)
        .map(|stem| format!("{stem}{replacement}"))
}

/// Last character of the token.
pub(crate) fn last_char(token: &str) -> Option<char> {
    token.chars().next_back()
}
