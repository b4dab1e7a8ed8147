use std::borrow::Cow;

use crate::resources::{apply_in_order, LexicalResources};

#[rustfmt::skip]
const LOWERCASE_TABLE: [u8; 128] = [
    0x00,0x01,0x02,0x03,0x04,0x05,0x06,0x07,0x08,0x09,0x0a,0x0b,0x0c,0x0d,0x0e,0x0f,
    0x10,0x11,0x12,0x13,0x14,0x15,0x16,0x17,0x18,0x19,0x1a,0x1b,0x1c,0x1d,0x1e,0x1f,
    0x20,0x21,0x22,0x23,0x24,0x25,0x26,0x27,0x28,0x29,0x2a,0x2b,0x2c,0x2d,0x2e,0x2f,
    0x30,0x31,0x32,0x33,0x34,0x35,0x36,0x37,0x38,0x39,0x3a,0x3b,0x3c,0x3d,0x3e,0x3f,
    0x40,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x5b,0x5c,0x5d,0x5e,0x5f,
    0x60,0x61,0x62,0x63,0x64,0x65,0x66,0x67,0x68,0x69,0x6a,0x6b,0x6c,0x6d,0x6e,0x6f,
    0x70,0x71,0x72,0x73,0x74,0x75,0x76,0x77,0x78,0x79,0x7a,0x7b,0x7c,0x7d,0x7e,0x7f,
];

/// Character-level cleaning stages.
///
/// Each stage is a pure `&str -> String` transform over the shared tables:
/// - Case folding (Unicode-aware, with an ASCII fast path)
/// - Punctuation mapping followed by punctuation removal
/// - Apostrophe folding followed by special-character substitution
/// - Substring spelling correction
/// - Whitespace folding, trimming and collapsing
///
/// Substitution stages run their rules in table order, so text inserted by
/// one rule is visible to the rules after it.
///
/// # Examples
///
/// ```
/// use scour_core::analyzer::TextNormalizer;
/// use scour_core::resources::LexicalResources;
///
/// let resources = LexicalResources::english().unwrap();
/// let normalizer = TextNormalizer::new(&resources);
/// assert_eq!(normalizer.collapse_whitespace("  HELLO \t WORLD  "), "HELLO WORLD");
/// assert_eq!(normalizer.map_punctuation("R&D!"), "R and D ");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TextNormalizer<'r> {
    resources: &'r LexicalResources,
}

impl<'r> TextNormalizer<'r> {
    /// Creates a normalizer over `resources`.
    #[inline]
    pub const fn new(resources: &'r LexicalResources) -> Self {
        Self { resources }
    }

    /// Case-folds `text`.
    #[inline]
    pub fn lowercase(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        lowercase_into(text, &mut out);
        out
    }

    /// Replaces each mapped punctuation character with its substitute, in
    /// table order, then blanks the removable punctuation.
    pub fn map_punctuation(&self, text: &str) -> String {
        let mapped = apply_in_order(self.resources.punctuation_map(), text);
        self.remove_punctuation(&mapped)
    }

    /// Replaces every removable punctuation character with a single space.
    #[inline]
    pub fn remove_punctuation(&self, text: &str) -> String {
        self.resources
            .punctuation_remove()
            .replace_with(text, ' ')
            .into_owned()
    }

    /// Folds apostrophe-like glyphs to `'`, then applies the special-character
    /// substitutions in table order.
    pub fn clean_special_chars(&self, text: &str) -> String {
        let folded = self.resources.apostrophes().replace_with(text, '\'');
        apply_in_order(self.resources.special_chars(), &folded)
    }

    /// Applies the spelling corrections over the whole string, in table order.
    ///
    /// Rules are substring rules, not token rules: a correction can fire
    /// inside a longer word, and a later rule can match text an earlier rule
    /// inserted.
    #[inline]
    pub fn correct_spelling(&self, text: &str) -> String {
        apply_in_order(self.resources.spell_corrections(), text)
    }

    /// Folds whitespace variants to an ASCII space, trims both ends and
    /// collapses runs of spaces to one.
    #[inline]
    pub fn collapse_whitespace(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        self.collapse_whitespace_into(text, &mut out);
        out
    }

    /// Like [`collapse_whitespace`](Self::collapse_whitespace), writing into
    /// an existing buffer. Clears the buffer first.
    ///
    /// Besides the table's variants, any Unicode whitespace or control
    /// character counts as whitespace, so the output has none embedded.
    pub fn collapse_whitespace_into(&self, text: &str, out: &mut String) {
        out.clear();
        out.reserve(text.len());

        let variants = self.resources.whitespace();
        let mut pending_space = false;

        for ch in text.chars() {
            if ch == ' ' || variants.contains(ch) || ch.is_whitespace() || ch.is_control() {
                pending_space = !out.is_empty();
                continue;
            }
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        }
    }
}

/// Case-folds `input` into `out`. Clears the buffer first.
///
/// Pure-ASCII input goes through a byte table; anything else uses full
/// Unicode lowercasing.
pub fn lowercase_into(input: &str, out: &mut String) {
    out.clear();
    if !input.is_ascii() {
        out.push_str(&input.to_lowercase());
        return;
    }

    out.reserve(input.len());
    for &b in input.as_bytes() {
        out.push(LOWERCASE_TABLE[b as usize] as char);
    }
}

/// Decodes HTML character references.
///
/// Handles decimal `&#NNN;`, hex `&#xHH;` and a small set of named entities.
/// Anything unrecognised is left verbatim.
pub fn unescape_entities(text: &str) -> Cow<'_, str> {
    let Some(first) = memchr::memchr(b'&', text.as_bytes()) else {
        return Cow::Borrowed(text);
    };

    let mut out = String::with_capacity(text.len());
    out.push_str(&text[..first]);
    let mut rest = &text[first..];

    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let candidate = &rest[amp..];
        match decode_entity(candidate) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &candidate[consumed..];
            }
            None => {
                out.push('&');
                rest = &candidate[1..];
            }
        }
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Decodes one entity at the start of `s` (which begins with `&`), returning
/// the character and the number of bytes consumed.
fn decode_entity(s: &str) -> Option<(char, usize)> {
    let semi = s.as_bytes().iter().take(12).position(|&b| b == b';')?;
    let body = &s[1..semi];

    let ch = if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix(&['x', 'X'][..]) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        char::from_u32(code)?
    } else {
        match body {
            "amp" => '&',
            "lt" => '<',
            "gt" => '>',
            "quot" => '"',
            "apos" => '\'',
            "nbsp" => '\u{a0}',
            "hellip" => '…',
            "mdash" => '—',
            "ndash" => '–',
            "lsquo" => '‘',
            "rsquo" => '’',
            "ldquo" => '“',
            "rdquo" => '”',
            "copy" => '©',
            "reg" => '®',
            "trade" => '™',
            _ => return None,
        }
    };

    Some((ch, semi + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::ResourceBuilder;
    use scour_types::Table;

    fn with<R>(f: impl FnOnce(TextNormalizer<'_>) -> R) -> R {
        let resources = LexicalResources::english().unwrap();
        f(TextNormalizer::new(&resources))
    }

    #[test]
    fn ascii_lowercase() {
        with(|n| {
            assert_eq!(n.lowercase("HeLLo World 123!"), "hello world 123!");
            let upper: String = (b'A'..=b'Z').map(|b| b as char).collect();
            let lower: String = (b'a'..=b'z').map(|b| b as char).collect();
            assert_eq!(n.lowercase(&upper), lower);
        });
    }

    #[test]
    fn unicode_lowercase() {
        with(|n| {
            assert_eq!(n.lowercase("ÜBER Café"), "über café");
            assert_eq!(n.lowercase("ПРИВЕТ"), "привет");
            assert_eq!(n.lowercase("I CAN'T 😡"), "i can't 😡");
        });
    }

    #[test]
    fn lowercase_into_reuses_buffer() {
        let mut buf = String::with_capacity(64);
        lowercase_into("HELLO", &mut buf);
        assert_eq!(buf, "hello");
        lowercase_into("WORLD", &mut buf);
        assert_eq!(buf, "world");
    }

    #[test]
    fn map_punctuation_substitutes_then_removes() {
        with(|n| {
            assert_eq!(n.map_punctuation("rock&roll"), "rock and roll");
            assert_eq!(n.map_punctuation("wow!!!"), "wow   ");
            assert_eq!(n.map_punctuation("50%"), "50 percent ");
        });
    }

    #[test]
    fn remove_punctuation_keeps_apostrophe() {
        with(|n| {
            assert_eq!(n.remove_punctuation("can't, won't."), "can't  won't ");
            assert_eq!(n.remove_punctuation("a-b_c"), "a b c");
        });
    }

    #[test]
    fn punctuation_map_order_is_table_order() {
        let resources = ResourceBuilder::new()
            .mapping(Table::PunctuationMap, [("&", "+"), ("+", " plus ")])
            .build()
            .unwrap();
        let n = TextNormalizer::new(&resources);
        assert_eq!(n.map_punctuation("a&b"), "a plus b");

        let resources = ResourceBuilder::new()
            .mapping(Table::PunctuationMap, [("+", " plus "), ("&", "+")])
            .build()
            .unwrap();
        let n = TextNormalizer::new(&resources);
        assert_eq!(n.map_punctuation("a&b"), "a+b");
    }

    #[test]
    fn special_chars_fold_apostrophes_first() {
        with(|n| {
            assert_eq!(n.clean_special_chars("can’t"), "can't");
            assert_eq!(n.clean_special_chars("it`s ‘ok´"), "it's 'ok'");
            assert_eq!(n.clean_special_chars("“café”…"), "\"cafe\"...");
            assert_eq!(n.clean_special_chars("zero\u{200b}width"), "zerowidth");
            assert_eq!(n.clean_special_chars("😡"), "😡");
        });
    }

    #[test]
    fn spelling_is_substring_scoped() {
        with(|n| {
            assert_eq!(n.correct_spelling("my favourite colours"), "my favorite colors");
            assert_eq!(n.correct_spelling("watch on youtu be"), "watch on youtube be");
            assert_eq!(n.correct_spelling("howdoI"), "how do I");
        });
    }

    #[test]
    fn spelling_cascades_through_inserted_text() {
        let resources = ResourceBuilder::new()
            .mapping(Table::SpellCorrections, [("ur", "your"), ("yo", "you")])
            .build()
            .unwrap();
        let n = TextNormalizer::new(&resources);
        assert_eq!(n.correct_spelling("ur four"), "youur foyouur");
    }

    #[test]
    fn collapse_whitespace_basic() {
        with(|n| {
            assert_eq!(n.collapse_whitespace("hello   world"), "hello world");
            assert_eq!(n.collapse_whitespace("  hello\t\nworld  "), "hello world");
            assert_eq!(n.collapse_whitespace("a\u{a0}\u{2003}b\u{3000}"), "a b");
            assert_eq!(n.collapse_whitespace("   "), "");
            assert_eq!(n.collapse_whitespace(""), "");
        });
    }

    #[test]
    fn collapse_whitespace_drops_control_chars() {
        with(|n| {
            assert_eq!(n.collapse_whitespace("a\x01\x02b\x1fc\0"), "a b c");
        });
    }

    #[test]
    fn collapse_whitespace_is_idempotent() {
        with(|n| {
            let samples = [
                "",
                " ",
                "plain",
                "  lead and trail  ",
                "tabs\tand\nnewlines\r\n",
                "\u{a0}nbsp\u{2009}thin\u{202f}",
                "mixed \x0b\x0c controls\x1c\x1d",
                "emoji 😡  🌍",
            ];
            for s in samples {
                let once = n.collapse_whitespace(s);
                assert_eq!(n.collapse_whitespace(&once), once, "{s:?}");
                assert!(!once.contains("  "));
                assert!(!once.starts_with(' ') && !once.ends_with(' '));
            }
        });
    }

    #[test]
    fn collapse_whitespace_into_clears() {
        with(|n| {
            let mut buf = String::from("stale");
            n.collapse_whitespace_into(" fresh ", &mut buf);
            assert_eq!(buf, "fresh");
        });
    }

    #[test]
    fn entities_decoded() {
        assert_eq!(unescape_entities("a &amp; b"), "a & b");
        assert_eq!(unescape_entities("&lt;3 &#39;hi&#x27;"), "<3 'hi'");
        assert_eq!(unescape_entities("&quot;q&quot;&nbsp;"), "\"q\"\u{a0}");
    }

    #[test]
    fn unknown_entities_left_alone() {
        assert_eq!(unescape_entities("AT&T"), "AT&T");
        assert_eq!(unescape_entities("&bogus; &#xzz; &"), "&bogus; &#xzz; &");
        assert!(matches!(unescape_entities("no refs"), Cow::Borrowed(_)));
    }
}
