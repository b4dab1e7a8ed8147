//! Immutable lexical tables consulted by every cleaning stage.
//!
//! Substitution tables are ordered: rules run in insertion order and see the
//! output of earlier rules. Lookup-only tables (contractions, stopwords) are
//! hashed. Nothing here is mutated after [`ResourceBuilder::build`].

pub mod loader;
pub mod tables;

use std::borrow::Cow;
use std::path::Path;

use memchr::memmem;
use rustc_hash::{FxHashMap, FxHashSet};
use scour_types::{ResourceError, Table};
use smallvec::SmallVec;

/// One ordered `needle -> replacement` rule with a pre-built substring finder.
#[derive(Debug, Clone)]
pub struct Substitution {
    needle: Box<str>,
    replacement: Box<str>,
    finder: memmem::Finder<'static>,
}

impl Substitution {
    fn new(needle: &str, replacement: &str) -> Self {
        Self {
            finder: memmem::Finder::new(needle.as_bytes()).into_owned(),
            needle: needle.into(),
            replacement: replacement.into(),
        }
    }

    /// Replaces every non-overlapping occurrence, scanning left to right.
    ///
    /// Borrows the input when the needle does not occur.
    pub fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        let mut hits = self.finder.find_iter(text.as_bytes()).peekable();
        if hits.peek().is_none() {
            return Cow::Borrowed(text);
        }

        let mut out = String::with_capacity(text.len() + self.replacement.len());
        let mut last = 0usize;
        for start in hits {
            // Needle and haystack are both UTF-8, so hits land on char boundaries.
            out.push_str(&text[last..start]);
            out.push_str(&self.replacement);
            last = start + self.needle.len();
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

/// Runs `rules` in order over `text`. Each rule sees the previous one's output.
pub fn apply_in_order(rules: &[Substitution], text: &str) -> String {
    let mut current: Cow<'_, str> = Cow::Borrowed(text);
    for rule in rules {
        let next = match rule.apply(&current) {
            Cow::Borrowed(_) => None,
            Cow::Owned(s) => Some(s),
        };
        if let Some(s) = next {
            current = Cow::Owned(s);
        }
    }
    current.into_owned()
}

/// A set of characters with a table fast path for ASCII.
#[derive(Debug, Clone)]
pub struct CharSet {
    ascii: [bool; 128],
    other: SmallVec<[char; 16]>,
}

impl Default for CharSet {
    fn default() -> Self {
        Self {
            ascii: [false; 128],
            other: SmallVec::new(),
        }
    }
}

impl CharSet {
    fn insert(&mut self, c: char) {
        if c.is_ascii() {
            self.ascii[c as usize] = true;
        } else if !self.other.contains(&c) {
            self.other.push(c);
        }
    }

    /// Returns `true` if `c` is in the set.
    #[inline(always)]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii[c as usize]
        } else {
            self.other.contains(&c)
        }
    }

    /// Number of characters in the set.
    pub fn len(&self) -> usize {
        self.ascii.iter().filter(|&&b| b).count() + self.other.len()
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Replaces every member of the set with `with`, in a single pass.
    pub fn replace_with<'t>(&self, text: &'t str, with: char) -> Cow<'t, str> {
        if !text.chars().any(|c| self.contains(c)) {
            return Cow::Borrowed(text);
        }
        Cow::Owned(
            text.chars()
                .map(|c| if self.contains(c) { with } else { c })
                .collect(),
        )
    }
}

/// Process-wide lookup tables for one language.
///
/// Build once at startup and share by reference; every accessor is `&self`.
#[derive(Debug, Clone)]
pub struct LexicalResources {
    contractions: FxHashMap<Box<str>, Box<str>>,
    punctuation_map: Vec<Substitution>,
    punctuation_remove: CharSet,
    apostrophes: CharSet,
    special_chars: Vec<Substitution>,
    spell_corrections: Vec<Substitution>,
    whitespace: CharSet,
    stopwords: FxHashSet<Box<str>>,
}

impl LexicalResources {
    /// Builds the compiled-in English tables.
    ///
    /// # Errors
    ///
    /// Only fails if the compiled-in tables are themselves inconsistent.
    pub fn english() -> Result<Self, ResourceError> {
        ResourceBuilder::english().build()
    }

    /// Loads every table from tab-separated text files in `dir`.
    ///
    /// See [`loader`] for the file format and [`Table::file_name`] for the
    /// expected names. A missing file is an error.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, ResourceError> {
        loader::load_dir(dir.as_ref())?.build()
    }

    /// Expansion for `token`, if it is a known contraction.
    #[inline]
    pub fn contraction(&self, token: &str) -> Option<&str> {
        self.contractions.get(token).map(|s| &**s)
    }

    /// Returns `true` if `token` is a stopword. Case-sensitive.
    #[inline]
    pub fn is_stopword(&self, token: &str) -> bool {
        self.stopwords.contains(token)
    }

    /// Punctuation substitutions, in application order.
    pub fn punctuation_map(&self) -> &[Substitution] {
        &self.punctuation_map
    }

    /// Characters blanked by punctuation removal.
    pub fn punctuation_remove(&self) -> &CharSet {
        &self.punctuation_remove
    }

    /// Apostrophe-like glyphs.
    pub fn apostrophes(&self) -> &CharSet {
        &self.apostrophes
    }

    /// Special-character substitutions, in application order.
    pub fn special_chars(&self) -> &[Substitution] {
        &self.special_chars
    }

    /// Spelling corrections, in application order.
    pub fn spell_corrections(&self) -> &[Substitution] {
        &self.spell_corrections
    }

    /// Whitespace-like characters.
    pub fn whitespace(&self) -> &CharSet {
        &self.whitespace
    }

    /// Number of entries in `table`.
    pub fn len(&self, table: Table) -> usize {
        match table {
            Table::Contractions => self.contractions.len(),
            Table::PunctuationMap => self.punctuation_map.len(),
            Table::PunctuationRemove => self.punctuation_remove.len(),
            Table::Apostrophes => self.apostrophes.len(),
            Table::SpecialChars => self.special_chars.len(),
            Table::SpellCorrections => self.spell_corrections.len(),
            Table::Whitespace => self.whitespace.len(),
            Table::Stopwords => self.stopwords.len(),
        }
    }
}

#[inline(always)]
const fn slot(table: Table) -> usize {
    match table {
        Table::Contractions => 0,
        Table::PunctuationMap => 1,
        Table::PunctuationRemove => 2,
        Table::Apostrophes => 3,
        Table::SpecialChars => 4,
        Table::SpellCorrections => 5,
        Table::Whitespace => 6,
        Table::Stopwords => 7,
    }
}

/// Collects raw table entries and validates them into [`LexicalResources`].
///
/// Set tables ignore the value half of an entry.
#[derive(Debug, Clone, Default)]
pub struct ResourceBuilder {
    entries: [Vec<(String, String)>; 8],
}

impl ResourceBuilder {
    /// Creates a builder with every table empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled with the compiled-in English tables.
    pub fn english() -> Self {
        Self::new()
            .mapping(Table::Contractions, tables::CONTRACTIONS.iter().copied())
            .mapping(Table::PunctuationMap, tables::PUNCTUATION_MAP.iter().copied())
            .set(Table::PunctuationRemove, tables::PUNCTUATION_REMOVE.iter().copied())
            .set(Table::Apostrophes, tables::APOSTROPHES.iter().copied())
            .mapping(Table::SpecialChars, tables::SPECIAL_CHARS.iter().copied())
            .mapping(
                Table::SpellCorrections,
                tables::SPELL_CORRECTIONS.iter().copied(),
            )
            .set(Table::Whitespace, tables::WHITESPACE.iter().copied())
            .set(Table::Stopwords, tables::STOPWORDS.iter().copied())
    }

    /// Appends `key -> value` entries to `table`.
    pub fn mapping<K, V, I>(mut self, table: Table, entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.entries[slot(table)].extend(entries.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Appends set members to `table`.
    pub fn set<K, I>(mut self, table: Table, entries: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = K>,
    {
        self.entries[slot(table)].extend(entries.into_iter().map(|k| (k.into(), String::new())));
        self
    }

    /// Drops every entry of `table`.
    pub fn clear(mut self, table: Table) -> Self {
        self.entries[slot(table)].clear();
        self
    }

    /// Validates every table and freezes them.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::EmptyKey` or `ResourceError::DuplicateKey` for
    /// bad keys, and `ResourceError::Malformed` when a character-keyed table
    /// has a key that is not exactly one character.
    pub fn build(self) -> Result<LexicalResources, ResourceError> {
        for table in Table::ALL {
            validate(table, &self.entries[slot(table)])?;
        }

        let [contractions, punctuation_map, punctuation_remove, apostrophes, special_chars, spell_corrections, whitespace, stopwords] =
            self.entries;

        let resources = LexicalResources {
            contractions: contractions
                .into_iter()
                .map(|(k, v)| (k.into_boxed_str(), v.into_boxed_str()))
                .collect(),
            punctuation_map: substitutions(&punctuation_map),
            punctuation_remove: char_set(&punctuation_remove),
            apostrophes: char_set(&apostrophes),
            special_chars: substitutions(&special_chars),
            spell_corrections: substitutions(&spell_corrections),
            whitespace: char_set(&whitespace),
            stopwords: stopwords
                .into_iter()
                .map(|(k, _)| k.into_boxed_str())
                .collect(),
        };

        tracing::debug!(
            contractions = resources.len(Table::Contractions),
            punctuation_map = resources.len(Table::PunctuationMap),
            punctuation_remove = resources.len(Table::PunctuationRemove),
            apostrophes = resources.len(Table::Apostrophes),
            special_chars = resources.len(Table::SpecialChars),
            spell_corrections = resources.len(Table::SpellCorrections),
            whitespace = resources.len(Table::Whitespace),
            stopwords = resources.len(Table::Stopwords),
            "lexical resources built"
        );

        Ok(resources)
    }
}

fn validate(table: Table, entries: &[(String, String)]) -> Result<(), ResourceError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for (i, (key, _)) in entries.iter().enumerate() {
        if key.is_empty() {
            return Err(ResourceError::EmptyKey { table });
        }
        if table.is_char_keyed() && key.chars().nth(1).is_some() {
            return Err(ResourceError::Malformed {
                table,
                line: i + 1,
                reason: "expected a single character",
            });
        }
        if !seen.insert(key.as_str()) {
            return Err(ResourceError::DuplicateKey {
                table,
                key: key.clone(),
            });
        }
    }
    Ok(())
}

fn substitutions(entries: &[(String, String)]) -> Vec<Substitution> {
    entries
        .iter()
        .map(|(k, v)| Substitution::new(k, v))
        .collect()
}

fn char_set(entries: &[(String, String)]) -> CharSet {
    let mut set = CharSet::default();
    for c in entries.iter().filter_map(|(k, _)| k.chars().next()) {
        set.insert(c);
    }
    set
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> LexicalResources {
        LexicalResources::english().expect("built-in tables are valid")
    }

    #[test]
    fn builtin_tables_build() {
        let r = english();
        assert_eq!(r.len(Table::Contractions), tables::CONTRACTIONS.len());
        assert_eq!(r.len(Table::Stopwords), tables::STOPWORDS.len());
        assert_eq!(r.len(Table::SpellCorrections), tables::SPELL_CORRECTIONS.len());
        assert_eq!(r.len(Table::Apostrophes), tables::APOSTROPHES.len());
    }

    #[test]
    fn contraction_lookup() {
        let r = english();
        assert_eq!(r.contraction("can't"), Some("can not"));
        assert_eq!(r.contraction("y'all"), Some("you all"));
        assert_eq!(r.contraction("cant"), None);
    }

    #[test]
    fn stopwords_are_case_sensitive() {
        let r = english();
        assert!(r.is_stopword("the"));
        assert!(!r.is_stopword("The"));
    }

    #[test]
    fn apostrophe_is_not_removed_punctuation() {
        let r = english();
        assert!(!r.punctuation_remove().contains('\''));
        assert!(r.punctuation_remove().contains('!'));
        assert!(r.punctuation_remove().contains('…'));
    }

    #[test]
    fn substitution_borrows_when_absent() {
        let rule = Substitution::new("colour", "color");
        assert!(matches!(rule.apply("no match here"), Cow::Borrowed(_)));
        assert_eq!(rule.apply("colour colours"), "color colors");
    }

    #[test]
    fn substitution_is_non_overlapping() {
        let rule = Substitution::new("aa", "b");
        assert_eq!(rule.apply("aaaaa"), "bba");
    }

    #[test]
    fn later_rules_see_earlier_output() {
        let rules = [Substitution::new("ab", "xy"), Substitution::new("yc", "Z")];
        assert_eq!(apply_in_order(&rules, "abc"), "xZ");

        let reversed = [Substitution::new("yc", "Z"), Substitution::new("ab", "xy")];
        assert_eq!(apply_in_order(&reversed, "abc"), "xyc");
    }

    #[test]
    fn char_set_replace() {
        let mut set = CharSet::default();
        set.insert('!');
        set.insert('…');
        assert_eq!(set.len(), 2);
        assert_eq!(set.replace_with("hi!…", ' '), "hi  ");
        assert!(matches!(set.replace_with("plain", ' '), Cow::Borrowed(_)));
    }

    #[test]
    fn empty_key_rejected() {
        let err = ResourceBuilder::new()
            .mapping(Table::SpellCorrections, [("", "x")])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ResourceError::EmptyKey {
                table: Table::SpellCorrections
            }
        );
    }

    #[test]
    fn duplicate_key_rejected() {
        let err = ResourceBuilder::new()
            .mapping(Table::Contractions, [("don't", "do not"), ("don't", "dont")])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ResourceError::DuplicateKey {
                table: Table::Contractions,
                key: "don't".into()
            }
        );
    }

    #[test]
    fn multi_char_key_rejected_for_char_tables() {
        let err = ResourceBuilder::new()
            .set(Table::Whitespace, [" ", "ab"])
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ResourceError::Malformed {
                table: Table::Whitespace,
                line: 2,
                reason: "expected a single character"
            }
        );
    }

    #[test]
    fn clear_then_refill() {
        let r = ResourceBuilder::english()
            .clear(Table::Stopwords)
            .set(Table::Stopwords, ["lol"])
            .build()
            .unwrap();
        assert_eq!(r.len(Table::Stopwords), 1);
        assert!(r.is_stopword("lol"));
        assert!(!r.is_stopword("the"));
    }
}
