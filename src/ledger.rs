//! Addressee cells of the correspondence register.
//!
//! A well-formed cell names the sender and the receiver as
//! `SenderSurname SenderName ReceiverSurname ReceiverName`, the receiver in
//! genitive ("to whom"). Only the receiver is normalized.

use crate::core::engine::{NameEngine, SurnameEngine};
use crate::core::report::DeclensionReport;
use crate::core::translit::Transliterator;
use serde::Serialize;
use std::io::{self, Write};

/// Trims, turns line breaks into spaces and collapses runs of whitespace.
pub fn normalize_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addressees {
    pub sender_surname: String,
    pub sender_name: String,
    pub receiver_surname: String,
    pub receiver_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddresseeLine {
    Parsed(Addressees),
    /// Anything other than exactly four words; kept whole for review.
    Malformed(String),
}

impl AddresseeLine {
    pub fn parse(cell: &str) -> Self {
        let cleaned = normalize_text(&cell.replace('-', ""));
        let words: Vec<&str> = cleaned.split(' ').filter(|w| !w.is_empty()).collect();

        match words.as_slice() {
            [sender_surname, sender_name, receiver_surname, receiver_name] => {
                AddresseeLine::Parsed(Addressees {
                    sender_surname: sender_surname.to_string(),
                    sender_name: sender_name.to_string(),
                    receiver_surname: receiver_surname.to_string(),
                    receiver_name: receiver_name.to_string(),
                })
            }
            _ => AddresseeLine::Malformed(cleaned),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LedgerRecord {
    pub sender_surname: String,
    pub sender_surname_de: String,
    pub sender_name: String,
    pub sender_name_de: String,
    pub receiver_surname: String,
    pub receiver_surname_de: String,
    pub receiver_name: String,
    pub receiver_name_de: String,
}

impl LedgerRecord {
    pub fn fields(&self) -> [&str; 8] {
        [
            &self.sender_surname,
            &self.sender_surname_de,
            &self.sender_name,
            &self.sender_name_de,
            &self.receiver_surname,
            &self.receiver_surname_de,
            &self.receiver_name,
            &self.receiver_name_de,
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum LedgerRow {
    Record(LedgerRecord),
    Warning { addressees: String, addressees_de: String },
}

impl LedgerRow {
    /// Writes the row as tab-separated text. A warning goes whole to
    /// `warnings` and leaves an empty record in `records`, so record lines
    /// stay aligned with the input.
    pub fn write_tsv<W: Write, V: Write>(&self, records: &mut W, warnings: &mut V) -> io::Result<()> {
        match self {
            LedgerRow::Record(record) => writeln!(records, "{}", record.fields().join("\t")),
            LedgerRow::Warning { addressees, addressees_de } => {
                writeln!(warnings, "{addressees}\t{addressees_de}")?;
                writeln!(records, "{}", LedgerRecord::default().fields().join("\t"))
            }
        }
    }
}

/// Owns the two per-category engines for a run.
pub struct LedgerNormalizer {
    surnames: SurnameEngine,
    names: NameEngine,
    translit: Transliterator,
}

impl LedgerNormalizer {
    pub fn new(surnames: SurnameEngine, names: NameEngine) -> Self {
        Self { surnames, names, translit: Transliterator::new() }
    }

    pub fn process(&mut self, cell: &str) -> LedgerRow {
        match AddresseeLine::parse(cell) {
            AddresseeLine::Parsed(a) => {
                let receiver_surname = self.surnames.normalize(&a.receiver_surname);
                let receiver_name = self.names.normalize(&a.receiver_name);

                LedgerRow::Record(LedgerRecord {
                    sender_surname_de: self.translit.transliterate(&a.sender_surname),
                    sender_name_de: self.translit.transliterate(&a.sender_name),
                    receiver_surname_de: self.translit.transliterate(&receiver_surname),
                    receiver_name_de: self.translit.transliterate(&receiver_name),
                    sender_surname: a.sender_surname,
                    sender_name: a.sender_name,
                    receiver_surname,
                    receiver_name,
                })
            }
            AddresseeLine::Malformed(text) => {
                tracing::warn!(addressees = %text, "expected four words in addressee cell");
                LedgerRow::Warning {
                    addressees_de: self.translit.transliterate(&text),
                    addressees: text,
                }
            }
        }
    }

    pub fn surnames(&self) -> &SurnameEngine {
        &self.surnames
    }

    pub fn names(&self) -> &NameEngine {
        &self.names
    }

    pub fn reports(&self) -> Vec<DeclensionReport> {
        vec![self.surnames.report(), self.names.report()]
    }

    pub fn into_engines(self) -> (SurnameEngine, NameEngine) {
        (self.surnames, self.names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::substitution::SubstitutionDictionary;

    fn normalizer() -> LedgerNormalizer {
        LedgerNormalizer::new(
            SurnameEngine::surnames(SubstitutionDictionary::empty("surnames")),
            NameEngine::names(SubstitutionDictionary::empty("names")),
        )
    }

    #[test]
    fn normalize_text_collapses_whitespace() {
        assert_eq!(normalize_text("  Бондар \n Іван\t\tПетренку  "), "Бондар Іван Петренку");
    }

    #[test]
    fn parse_four_words() {
        let line = AddresseeLine::parse("Бондар Іван -\nПетренку Олексію");
        assert_eq!(
            line,
            AddresseeLine::Parsed(Addressees {
                sender_surname: "Бондар".into(),
                sender_name: "Іван".into(),
                receiver_surname: "Петренку".into(),
                receiver_name: "Олексію".into(),
            })
        );
    }

    #[test]
    fn hyphens_are_removed_before_splitting() {
        let line = AddresseeLine::parse("Бондар-Іван Петренку Олексію");
        assert_eq!(line, AddresseeLine::Malformed("БондарІван Петренку Олексію".into()));
    }

    #[test]
    fn receiver_is_normalized_and_transliterated() {
        let mut ledger = normalizer();
        let row = ledger.process("Бондар Іван Петренку Олексію");
        let LedgerRow::Record(record) = row else {
            panic!("expected a record");
        };
        assert_eq!(record.sender_surname, "Бондар");
        assert_eq!(record.sender_name_de, "Iwan");
        assert_eq!(record.receiver_surname, "Петренко");
        assert_eq!(record.receiver_surname_de, "Petrenko");
        assert_eq!(record.receiver_name, "Олексій");
        assert_eq!(record.receiver_name_de, "Oleksij");
    }

    #[test]
    fn malformed_cell_becomes_warning() {
        let mut ledger = normalizer();
        let row = ledger.process("Бондар Іван");
        assert_eq!(
            row,
            LedgerRow::Warning { addressees: "Бондар Іван".into(), addressees_de: "Bondar Iwan".into() }
        );
        assert_eq!(ledger.surnames().cache_len(), 0);
    }

    #[test]
    fn warning_rows_reach_the_warnings_sink() {
        let mut ledger = normalizer();
        let mut records = Vec::new();
        let mut warnings = Vec::new();
        for cell in ["Бондар Іван Петренку Олексію", "Бондар Іван"] {
            ledger.process(cell).write_tsv(&mut records, &mut warnings).unwrap();
        }

        let records = String::from_utf8(records).unwrap();
        let lines: Vec<&str> = records.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Бондар\tBondar\tІван\tIwan\tПетренко\tPetrenko"));
        assert_eq!(lines[1], "\t".repeat(7));
        assert_eq!(String::from_utf8(warnings).unwrap(), "Бондар Іван\tBondar Iwan\n");
    }

    #[test]
    fn reports_cover_both_categories() {
        let mut ledger = normalizer();
        ledger.process("Бондар Іван Петренку Олексію");
        let reports = ledger.reports();
        assert_eq!(reports.len(), 2);
        assert_eq!(reports[0].counts.replaced, 1);
        assert_eq!(reports[1].counts.replaced, 1);
    }
}
