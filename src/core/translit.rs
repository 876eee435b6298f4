/// Ukrainian Cyrillic to German-orthography transliteration.
///
/// Applied by callers to both the original and the normalized tokens; the
/// declension engine itself never uses it.
#[derive(Debug, Clone, Copy, Default)]
pub struct Transliterator;

impl Transliterator {
    pub fn new() -> Self {
        Self
    }

    /// Transliterates a full string. Characters outside the Ukrainian
    /// alphabet are copied as-is.
    pub fn transliterate(&self, cyrillic: &str) -> String {
        let mut result = String::with_capacity(cyrillic.len());

        for c in cyrillic.chars() {
            let lower = c.to_lowercase().next().unwrap_or(c);
            match self.get_latin(lower) {
                Some(latin) if c != lower => {
                    let mut letters = latin.chars();
                    if let Some(first) = letters.next() {
                        result.extend(first.to_uppercase());
                        result.push_str(letters.as_str());
                    }
                }
                Some(latin) => result.push_str(latin),
                None => result.push(c),
            }
        }

        result
    }

    fn get_latin(&self, c: char) -> Option<&'static str> {
        match c {
            'а' => Some("a"), 'б' => Some("b"), 'в' => Some("w"),
            'г' => Some("h"), 'ґ' => Some("g"), 'д' => Some("d"),
            'е' => Some("e"), 'є' => Some("je"), 'ж' => Some("sch"),
            'з' => Some("s"), 'и' => Some("y"), 'і' => Some("i"),
            'ї' => Some("ji"), 'й' => Some("j"), 'к' => Some("k"),
            'л' => Some("l"), 'м' => Some("m"), 'н' => Some("n"),
            'о' => Some("o"), 'п' => Some("p"), 'р' => Some("r"),
            'с' => Some("s"), 'т' => Some("t"), 'у' => Some("u"),
            'ф' => Some("f"), 'х' => Some("ch"), 'ц' => Some("z"),
            'ч' => Some("tsch"), 'ш' => Some("sch"), 'щ' => Some("schtsch"),
            'ь' => Some(""), 'ю' => Some("ju"), 'я' => Some("ja"),
            _ => None,
        }
    }
}

/// Convenience wrapper around [`Transliterator::transliterate`].
pub fn transliterate(cyrillic: &str) -> String {
    Transliterator.transliterate(cyrillic)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters() {
        assert_eq!(transliterate("Іван"), "Iwan");
        assert_eq!(transliterate("Петренко"), "Petrenko");
        assert_eq!(transliterate("Гнат"), "Hnat");
    }

    #[test]
    fn multi_letter_sounds() {
        assert_eq!(transliterate("Шевчук"), "Schewtschuk");
        assert_eq!(transliterate("Юхим"), "Juchym");
        assert_eq!(transliterate("Щербак"), "Schtscherbak");
        assert_eq!(transliterate("Марія"), "Marija");
        assert_eq!(transliterate("Євген"), "Jewhen");
    }

    #[test]
    fn soft_sign_is_dropped() {
        assert_eq!(transliterate("Коваль"), "Kowal");
        assert_eq!(transliterate("Грицько"), "Hryzko");
    }

    #[test]
    fn other_characters_pass_through() {
        assert_eq!(transliterate("с. Бар, 1941"), "s. Bar, 1941");
        assert_eq!(transliterate(""), "");
    }
}
