//! Property-based checks of the normalization chain.

use declension_core::{
    DeclensionRules, NameEngine, NameRules, Outcome, SubstitutionDictionary, SurnameEngine, SurnameRules,
};
use proptest::prelude::*;

fn cyrillic_word() -> impl Strategy<Value = String> {
    "[абвгґдеєжзиіїйклмнопрстуфхцчшщьюя]{1,10}"
}

proptest! {
    #[test]
    fn excluded_names_are_fixed_points(stem in cyrillic_word(), last in "[яйанпось.]") {
        let token = format!("{stem}{last}");
        let mut engine = NameEngine::names(SubstitutionDictionary::empty("names"));
        let once = engine.normalize(&token);
        prop_assert_eq!(&once, &token);
        prop_assert_eq!(engine.normalize(&once), once);
    }

    #[test]
    fn excluded_surnames_are_fixed_points(stem in cyrillic_word(), last in "[бвгґджзклмнпрстфхцчшщьо]") {
        let token = format!("{stem}{last}");
        let mut engine = SurnameEngine::surnames(SubstitutionDictionary::empty("surnames"));
        prop_assert_eq!(engine.normalize(&token), token);
    }

    #[test]
    fn repeat_calls_agree_and_leave_buckets_alone(token in cyrillic_word()) {
        let mut engine = SurnameEngine::surnames(SubstitutionDictionary::empty("surnames"));
        let first = engine.normalize_detailed(&token);
        let buckets = engine.buckets().clone();
        let second = engine.normalize_detailed(&token);
        prop_assert_eq!(&first.value, &second.value);
        prop_assert_eq!(engine.buckets(), &buckets);
        if matches!(first.outcome, Outcome::Excluded | Outcome::Rule) {
            prop_assert_eq!(second.outcome, Outcome::Cached);
        } else {
            prop_assert_eq!(second.outcome, first.outcome);
        }
    }

    #[test]
    fn dictionary_always_wins(token in cyrillic_word(), target in cyrillic_word()) {
        let list = format!("{token} {target}\n");
        let mut engine = NameEngine::names(SubstitutionDictionary::parse("names", &list));
        prop_assert_eq!(engine.normalize(&token), target);
    }

    #[test]
    fn rules_touch_at_most_four_trailing_chars(stem in cyrillic_word(), tail in cyrillic_word()) {
        let token = format!("{stem}{tail}");
        let head: String = token.chars().take(token.chars().count().saturating_sub(4)).collect();
        for out in [NameRules.apply_suffix_rule(&token), SurnameRules.apply_suffix_rule(&token)].into_iter().flatten() {
            prop_assert!(out.starts_with(&head));
        }
    }
}
