// src/core/name.rs
use crate::core::rules::{apply_first, last_char, DeclensionRules, SuffixRule};
use crate::core::types::Category;

/// The shared consonants plus м, л, к (н is already among them).
const U_DROP: [char; 17] = [
    'б', 'в', 'д', 'з', 'н', 'п', 'р', 'с', 'т', 'ф', 'ч', 'х', 'ш', 'ц', 'м', 'л', 'к',
];

const I_TO_A: [char; 6] = ['д', 'м', 'н', 'ш', 'т', 'р'];

const EXCLUDED_FINALS: [char; 9] = ['я', 'й', 'а', 'н', 'п', 'о', 'с', 'ь', '.'];

static NAME_RULES: [SuffixRule; 9] = [
    SuffixRule::after("у", &U_DROP, ""),
    SuffixRule::after("і", &I_TO_A, "а"),
    SuffixRule::new("ці", "ка"),
    SuffixRule::new("рю", "рь"),
    SuffixRule::new("ею", "ей"),
    SuffixRule::new("ію", "ій"),
    SuffixRule::new("лю", "ль"),
    SuffixRule::new("ії", "ія"),
    SuffixRule::new("еї", "ея"),
];

/// Rule set for given names.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameRules;

impl NameRules {
    pub fn new() -> Self {
        Self
    }
}

impl DeclensionRules for NameRules {
    fn category(&self) -> Category {
        Category::Name
    }

    fn is_excluded(&self, token: &str) -> bool {
        match last_char(token) {
            None => true,
            Some(c) => EXCLUDED_FINALS.contains(&c) || token.chars().count() == 1,
        }
    }

    fn apply_suffix_rule(&self, token: &str) -> Option<String> {
        apply_first(&NAME_RULES, token)
    }

    fn is_filtered_after_all(&self, _token: &str) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::rules::BASE_CONSONANTS;

    fn rule(token: &str) -> Option<String> {
        NameRules.apply_suffix_rule(token)
    }

    #[test]
    fn u_table_covers_shared_consonants() {
        assert!(BASE_CONSONANTS.iter().all(|c| U_DROP.contains(c)));
    }

    #[test]
    fn drops_u_after_consonant() {
        assert_eq!(rule("Івану").as_deref(), Some("Іван"));
        assert_eq!(rule("Петру").as_deref(), Some("Петр"));
        assert_eq!(rule("Юхиму").as_deref(), Some("Юхим"));
        assert_eq!(rule("Павлу").as_deref(), Some("Павл"));
        assert_eq!(rule("Марку").as_deref(), Some("Марк"));
    }

    #[test]
    fn keeps_u_after_other_letters() {
        assert_eq!(rule("Олегу"), None);
    }

    #[test]
    fn feminine_i_endings() {
        assert_eq!(rule("Ганні").as_deref(), Some("Ганна"));
        assert_eq!(rule("Марті").as_deref(), Some("Марта"));
        assert_eq!(rule("Одарці").as_deref(), Some("Одарка"));
        assert_eq!(rule("Ользі"), None);
    }

    #[test]
    fn soft_endings() {
        assert_eq!(rule("Ігорю").as_deref(), Some("Ігорь"));
        assert_eq!(rule("Андрею").as_deref(), Some("Андрей"));
        assert_eq!(rule("Олексію").as_deref(), Some("Олексій"));
        assert_eq!(rule("Михайлю").as_deref(), Some("Михайль"));
        assert_eq!(rule("Василю").as_deref(), Some("Василь"));
    }

    #[test]
    fn yi_endings() {
        assert_eq!(rule("Марії").as_deref(), Some("Марія"));
        assert_eq!(rule("Одеї").as_deref(), Some("Одея"));
    }

    #[test]
    fn exclusions() {
        assert!(NameRules.is_excluded("Андрія"));
        assert!(NameRules.is_excluded("Андрій"));
        assert!(NameRules.is_excluded("Іван"));
        assert!(NameRules.is_excluded("І."));
        assert!(NameRules.is_excluded("Ю"));
        assert!(NameRules.is_excluded(""));
        assert!(!NameRules.is_excluded("Івану"));
    }

    #[test]
    fn nothing_is_filtered_after_all() {
        assert!(!NameRules.is_filtered_after_all("Олегу"));
    }
}
