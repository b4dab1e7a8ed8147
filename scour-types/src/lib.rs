//! Core types for the Scour text-cleaning pipeline.
//!
//! This crate holds the values shared between the cleaning core and its
//! callers. Keeping them separate means:
//!
//! - **No third-party dependencies**: Callers can name a configuration or
//!   match on an error without pulling in the analyzer stack
//! - **One flag vocabulary**: The library and the bench binary parse and
//!   print flags the same way
//! - **Clean boundaries**: Errors describe the table or input that failed,
//!   never the internals that noticed it

#![warn(missing_docs)]

use core::fmt;
use core::str::FromStr;

/// Per-call switches for the cleaning pipeline.
///
/// Each flag only decides whether its stage runs. Stage order is fixed and
/// every one of the 128 combinations is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CleanConfig {
    /// Case-fold the whole input.
    pub lowercase: bool,
    /// Substitute mapped punctuation, then blank out removable punctuation.
    pub map_punctuation: bool,
    /// Normalize apostrophes and substitute special characters.
    pub clean_special_chars: bool,
    /// Apply substring spelling corrections.
    pub spell_check: bool,
    /// Drop tokens of three characters or fewer and stopwords.
    pub remove_stopwords: bool,
    /// Reduce each surviving token to its stem.
    pub stem: bool,
    /// Expand contractions such as `don't`.
    pub map_contractions: bool,
}

impl CleanConfig {
    /// Every optional stage disabled. Tokens are still rejoined and
    /// whitespace is still collapsed.
    pub const fn none() -> Self {
        Self {
            lowercase: false,
            map_punctuation: false,
            clean_special_chars: false,
            spell_check: false,
            remove_stopwords: false,
            stem: false,
            map_contractions: false,
        }
    }

    /// Every optional stage enabled.
    pub const fn all() -> Self {
        Self {
            lowercase: true,
            map_punctuation: true,
            clean_special_chars: true,
            spell_check: true,
            remove_stopwords: true,
            stem: true,
            map_contractions: true,
        }
    }

    /// Builds a config from the low seven bits of `bits`, in flag order
    /// (`lowercase` is bit 0, `map_contractions` is bit 6).
    ///
    /// Handy for walking the full flag grid.
    pub const fn from_bits(bits: u8) -> Self {
        Self {
            lowercase: bits & 0b000_0001 != 0,
            map_punctuation: bits & 0b000_0010 != 0,
            clean_special_chars: bits & 0b000_0100 != 0,
            spell_check: bits & 0b000_1000 != 0,
            remove_stopwords: bits & 0b001_0000 != 0,
            stem: bits & 0b010_0000 != 0,
            map_contractions: bits & 0b100_0000 != 0,
        }
    }

    /// Inverse of [`CleanConfig::from_bits`].
    pub const fn bits(self) -> u8 {
        (self.lowercase as u8)
            | (self.map_punctuation as u8) << 1
            | (self.clean_special_chars as u8) << 2
            | (self.spell_check as u8) << 3
            | (self.remove_stopwords as u8) << 4
            | (self.stem as u8) << 5
            | (self.map_contractions as u8) << 6
    }

    /// Number of distinct flag combinations.
    pub const COMBINATIONS: u8 = 1 << 7;
}

/// Flag names accepted by [`CleanConfig::from_str`], in bit order.
pub const FLAG_NAMES: [&str; 7] = [
    "lowercase",
    "punctuation",
    "special",
    "spelling",
    "stopwords",
    "stem",
    "contractions",
];

impl FromStr for CleanConfig {
    type Err = ConfigError;

    /// Parses a comma-separated flag list such as `lowercase,stem`.
    ///
    /// `all` and `none` are accepted; an empty string means `none`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bits = 0u8;
        for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match name {
                "all" => bits = Self::all().bits(),
                "none" => bits = 0,
                _ => match FLAG_NAMES.iter().position(|&f| f == name) {
                    Some(bit) => bits |= 1 << bit,
                    None => {
                        return Err(ConfigError::UnknownFlag {
                            name: name.to_owned(),
                        })
                    }
                },
            }
        }
        Ok(Self::from_bits(bits))
    }
}

impl fmt::Display for CleanConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.bits();
        if bits == 0 {
            return f.write_str("none");
        }
        let mut first = true;
        for (bit, name) in FLAG_NAMES.iter().enumerate() {
            if bits & (1 << bit) != 0 {
                if !first {
                    f.write_str(",")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

/// Error produced when parsing a textual flag list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A flag name that is not in [`FLAG_NAMES`].
    UnknownFlag {
        /// The offending name.
        name: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownFlag { name } => {
                write!(
                    f,
                    "unknown flag `{}` (expected one of: {}, all, none)",
                    name,
                    FLAG_NAMES.join(", ")
                )
            }
        }
    }
}

impl core::error::Error for ConfigError {}

/// Identifies one of the lexical tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    /// Token to expansion.
    Contractions,
    /// Character to replacement, applied before punctuation removal.
    PunctuationMap,
    /// Characters blanked out to a space.
    PunctuationRemove,
    /// Apostrophe-like glyphs folded to `'`.
    Apostrophes,
    /// Substring to replacement for symbols outside ASCII punctuation.
    SpecialChars,
    /// Misspelled substring to corrected substring.
    SpellCorrections,
    /// Whitespace-like characters folded to an ASCII space.
    Whitespace,
    /// Tokens dropped by stopword removal.
    Stopwords,
}

impl Table {
    /// All tables, in load order.
    pub const ALL: [Table; 8] = [
        Table::Contractions,
        Table::PunctuationMap,
        Table::PunctuationRemove,
        Table::Apostrophes,
        Table::SpecialChars,
        Table::SpellCorrections,
        Table::Whitespace,
        Table::Stopwords,
    ];

    /// Short human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Table::Contractions => "contractions",
            Table::PunctuationMap => "punctuation map",
            Table::PunctuationRemove => "punctuation removal",
            Table::Apostrophes => "apostrophes",
            Table::SpecialChars => "special characters",
            Table::SpellCorrections => "spelling corrections",
            Table::Whitespace => "whitespace variants",
            Table::Stopwords => "stopwords",
        }
    }

    /// File name used when loading tables from a directory.
    pub const fn file_name(self) -> &'static str {
        match self {
            Table::Contractions => "contractions.tsv",
            Table::PunctuationMap => "punctuation_map.tsv",
            Table::PunctuationRemove => "punctuation_remove.txt",
            Table::Apostrophes => "apostrophes.txt",
            Table::SpecialChars => "special_chars.tsv",
            Table::SpellCorrections => "spell_corrections.tsv",
            Table::Whitespace => "whitespace.txt",
            Table::Stopwords => "stopwords.txt",
        }
    }

    /// Whether entries are `key<TAB>value` pairs rather than single items.
    pub const fn is_mapping(self) -> bool {
        matches!(
            self,
            Table::Contractions
                | Table::PunctuationMap
                | Table::SpecialChars
                | Table::SpellCorrections
        )
    }

    /// Whether every key must be exactly one character.
    pub const fn is_char_keyed(self) -> bool {
        matches!(
            self,
            Table::PunctuationMap
                | Table::PunctuationRemove
                | Table::Apostrophes
                | Table::Whitespace
        )
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while constructing the lexical resources.
///
/// These are startup failures; a pipeline is never built from a table
/// that produced one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceError {
    /// An entry with an empty key.
    EmptyKey {
        /// The table containing the entry.
        table: Table,
    },
    /// A key that appears twice in the same table.
    DuplicateKey {
        /// The table containing the entry.
        table: Table,
        /// The repeated key.
        key: String,
    },
    /// A table line that could not be parsed.
    Malformed {
        /// The table being parsed.
        table: Table,
        /// One-based line number.
        line: usize,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// A table file that does not exist.
    Missing {
        /// The table that was looked for.
        table: Table,
    },
    /// A table file that exists but could not be read as UTF-8 text.
    Unreadable {
        /// The table that was being read.
        table: Table,
        /// Underlying I/O failure kind.
        kind: std::io::ErrorKind,
    },
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceError::EmptyKey { table } => {
                write!(f, "{} table contains an empty key", table)
            }
            ResourceError::DuplicateKey { table, key } => {
                write!(f, "{} table contains duplicate key {:?}", table, key)
            }
            ResourceError::Malformed {
                table,
                line,
                reason,
            } => {
                write!(f, "{} table, line {}: {}", table, line, reason)
            }
            ResourceError::Missing { table } => {
                write!(f, "{} table not found ({})", table, table.file_name())
            }
            ResourceError::Unreadable { table, kind } => {
                write!(
                    f,
                    "{} table could not be read ({}): {}",
                    table,
                    table.file_name(),
                    kind
                )
            }
        }
    }
}

impl core::error::Error for ResourceError {}

/// Input bytes that are not valid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodingError {
    /// Length of the longest valid prefix.
    pub valid_up_to: usize,
    /// Length of the invalid sequence, or `None` if the input ended
    /// in the middle of a sequence.
    pub error_len: Option<usize>,
}

impl From<core::str::Utf8Error> for EncodingError {
    fn from(e: core::str::Utf8Error) -> Self {
        Self {
            valid_up_to: e.valid_up_to(),
            error_len: e.error_len(),
        }
    }
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_len {
            Some(len) => write!(
                f,
                "invalid utf-8 sequence of {} bytes at offset {}",
                len, self.valid_up_to
            ),
            None => write!(
                f,
                "incomplete utf-8 sequence at offset {}",
                self.valid_up_to
            ),
        }
    }
}

impl core::error::Error for EncodingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_none() {
        assert_eq!(CleanConfig::default(), CleanConfig::none());
        assert_eq!(CleanConfig::none().bits(), 0);
    }

    #[test]
    fn bits_round_trip_whole_grid() {
        for bits in 0..CleanConfig::COMBINATIONS {
            assert_eq!(CleanConfig::from_bits(bits).bits(), bits);
        }
        assert_eq!(CleanConfig::all().bits(), CleanConfig::COMBINATIONS - 1);
    }

    #[test]
    fn parse_flag_list() {
        let cfg: CleanConfig = "lowercase, stem,contractions".parse().unwrap();
        assert!(cfg.lowercase);
        assert!(cfg.stem);
        assert!(cfg.map_contractions);
        assert!(!cfg.map_punctuation);
        assert!(!cfg.remove_stopwords);
    }

    #[test]
    fn parse_all_none_and_empty() {
        assert_eq!("all".parse::<CleanConfig>().unwrap(), CleanConfig::all());
        assert_eq!("none".parse::<CleanConfig>().unwrap(), CleanConfig::none());
        assert_eq!("".parse::<CleanConfig>().unwrap(), CleanConfig::none());
    }

    #[test]
    fn parse_unknown_flag() {
        let err = "lowercase,shout".parse::<CleanConfig>().unwrap_err();
        assert_eq!(
            err,
            ConfigError::UnknownFlag {
                name: "shout".into()
            }
        );
        assert!(err.to_string().contains("shout"));
    }

    #[test]
    fn display_parses_back() {
        for bits in 0..CleanConfig::COMBINATIONS {
            let cfg = CleanConfig::from_bits(bits);
            assert_eq!(cfg.to_string().parse::<CleanConfig>().unwrap(), cfg);
        }
    }

    #[test]
    fn table_kinds() {
        assert!(Table::Contractions.is_mapping());
        assert!(!Table::Stopwords.is_mapping());
        assert!(Table::Whitespace.is_char_keyed());
        assert!(!Table::SpellCorrections.is_char_keyed());
        assert_eq!(Table::ALL.len(), 8);
    }

    #[test]
    fn resource_error_display() {
        let err = ResourceError::DuplicateKey {
            table: Table::Contractions,
            key: "don't".into(),
        };
        assert_eq!(
            err.to_string(),
            "contractions table contains duplicate key \"don't\""
        );

        let err = ResourceError::Missing {
            table: Table::Stopwords,
        };
        assert!(err.to_string().contains("stopwords.txt"));
    }

    #[test]
    fn encoding_error_from_utf8() {
        let bytes = [b'a', b'b', 0xff, b'c'];
        let err: EncodingError = core::str::from_utf8(&bytes).unwrap_err().into();
        assert_eq!(err.valid_up_to, 2);
        assert_eq!(err.error_len, Some(1));
        assert!(err.to_string().contains("offset 2"));

        let truncated = [b'a', 0xe2, 0x82];
        let err: EncodingError = core::str::from_utf8(&truncated).unwrap_err().into();
        assert_eq!(err.error_len, None);
    }
}
