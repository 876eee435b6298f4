// src/core/surname.rs
use crate::core::rules::{apply_first, last_char, DeclensionRules, SuffixRule, BASE_CONSONANTS};
use crate::core::types::Category;

/// Consonants (and the soft sign) that end a surname already in nominative.
pub const SURNAME_CONSONANTS: [char; 22] = [
    'б', 'в', 'г', 'ґ', 'д', 'ж', 'з', 'к', 'л', 'м', 'н', 'п', 'р', 'с', 'т', 'ф', 'х', 'ц', 'ч',
    'ш', 'щ', 'ь',
];

/// Stems after which "ку" comes from "-ко" rather than "-к".
const KO_STEMS: [char; 23] = [
    'б', 'в', 'г', 'ґ', 'д', 'ж', 'з', 'к', 'л', 'м', 'н', 'п', 'р', 'с', 'т', 'ф', 'х', 'ц', 'ч',
    'ш', 'щ', 'ь', 'й',
];

// Order matters: "ьому" before "ому", the guarded "ку"/"цю" rows before
// their unguarded fallbacks.
static SURNAME_RULES: [SuffixRule; 17] = [
    SuffixRule::new("ій", "а"),
    SuffixRule::new("ьому", "ій"),
    SuffixRule::new("ому", "ий"),
    SuffixRule::after("ку", &KO_STEMS, "ко"),
    SuffixRule::new("ку", "к"),
    SuffixRule::after("у", &BASE_CONSONANTS, ""),
    SuffixRule::new("ію", "ій"),
    SuffixRule::new("аю", "ай"),
    SuffixRule::new("ню", "нь"),
    SuffixRule::new("лю", "ль"),
    SuffixRule::new("дю", "дь"),
    SuffixRule::new("рю", "р"),
    SuffixRule::after("цю", &['е'], "ць"),
    SuffixRule::new("йцю", "єць"),
    SuffixRule::new("цю", "ець"),
    SuffixRule::new("бі", "ба"),
    SuffixRule::new("ді", "да"),
];

/// Rule set for surnames.
#[derive(Debug, Clone, Copy, Default)]
pub struct SurnameRules;

impl SurnameRules {
    pub fn new() -> Self {
        Self
    }
}

impl DeclensionRules for SurnameRules {
    fn category(&self) -> Category {
        Category::Surname
    }

    fn is_excluded(&self, token: &str) -> bool {
        match last_char(token) {
            None => true,
            Some(c) => SURNAME_CONSONANTS.contains(&c) || c == 'о' || token.ends_with("ко"),
        }
    }

    fn apply_suffix_rule(&self, token: &str) -> Option<String> {
        apply_first(&SURNAME_RULES, token)
    }

    fn is_filtered_after_all(&self, token: &str) -> bool {
        last_char(token) == Some('й')
    }
}
