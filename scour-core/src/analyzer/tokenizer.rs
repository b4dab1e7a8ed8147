//! Social-media-aware tokenizer.
//!
//! Splits raw text into an ordered sequence of tokens, keeping together the
//! constructs a plain word splitter would break apart:
//!
//! ```ignore
//! "@bob I can't believe it!!! :-) #fail 😡"
//!   -> ["@bob", "I", "can't", "believe", "it", "!!!", ":-)", "#fail", "😡"]
//! ```
//!
//! ## Token Kinds
//!
//! Tried in this order at each position:
//!
//! 1. **URLs** starting with `http://`, `https://` or `www.`, up to the next space
//! 2. **Emoticons** such as `:-)`, `;P`, `(:`, `<3`, `</3`
//! 3. **Arrows** such as `-->` and `<--`
//! 4. **Handles** (`@name`) and **hashtags** (`#topic`)
//! 5. **Words**: letter/digit/underscore runs, with `'` or `-` allowed between
//!    two letters and `, . / :` allowed between two digits
//! 6. **Emphasis clusters**: a run of one repeated punctuation character, or
//!    any mix of `!` and `?`
//! 7. Any other non-space grapheme cluster, so emoji with modifiers or
//!    joiners stay whole
//!
//! ## Zero Allocation
//!
//! Tokens are slices of the input. The callback form allocates nothing; the
//! collecting form only allocates past the inline capacity.

use smallvec::SmallVec;
use unicode_segmentation::UnicodeSegmentation;

/// Collected tokens. Short comments stay on the stack.
pub type Tokens<'t> = SmallVec<[&'t str; 32]>;

const EYES: &[u8] = b":;=";
const NOSES: &[u8] = b"-o*'";
const MOUTHS: &[u8] = b")]([dDpP/:}{@|\\";

/// Segments text into tokens.
///
/// Stateless and `Copy`; one instance can serve any number of threads.
///
/// ## Example
///
/// ```
/// use scour_core::analyzer::Tokenizer;
///
/// let tokens = Tokenizer::new().tokens("don't stop :-) !!!");
/// assert_eq!(tokens.as_slice(), ["don't", "stop", ":-)", "!!!"]);
/// ```
#[derive(Debug, Default, Copy, Clone)]
pub struct Tokenizer;

impl Tokenizer {
    /// Creates a tokenizer.
    #[inline]
    pub const fn new() -> Self {
        Self
    }

    /// Tokenizes `text` and emits `(token, position)` left to right.
    ///
    /// Position is `u32`. After emitting a token at position `u32::MAX`,
    /// further emissions stop.
    pub fn tokenize<'t, F>(&self, text: &'t str, mut emit: F)
    where
        F: FnMut(&'t str, u32),
    {
        let bytes = text.as_bytes();
        let mut i = 0usize;
        let mut pos = 0u32;

        while i < bytes.len() {
            let Some(ch) = text[i..].chars().next() else {
                break;
            };
            if ch.is_whitespace() {
                i += ch.len_utf8();
                continue;
            }

            let end = scan_url(text, i)
                .or_else(|| scan_emoticon(text, i))
                .or_else(|| scan_arrow(bytes, i))
                .or_else(|| scan_prefixed(text, i))
                .or_else(|| scan_word(text, i))
                .or_else(|| scan_cluster(bytes, i))
                .unwrap_or_else(|| grapheme_end(text, i));

            debug_assert!(end > i, "tokenizer: scanner made no progress");
            emit(&text[i..end], pos);
            if pos == u32::MAX {
                return;
            }
            pos += 1;
            i = end;
        }
    }

    /// Tokenizes `text` and collects the tokens in order.
    #[inline]
    pub fn tokens<'t>(&self, text: &'t str) -> Tokens<'t> {
        let mut out = Tokens::new();
        self.tokenize(text, |tok, _| out.push(tok));
        out
    }
}

#[inline]
fn char_at(text: &str, i: usize) -> Option<char> {
    text.get(i..).and_then(|s| s.chars().next())
}

#[inline]
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// End of the grapheme cluster starting at `i`.
#[inline]
fn grapheme_end(text: &str, i: usize) -> usize {
    i + text[i..].graphemes(true).next().map_or(1, |g| g.len())
}

fn scan_url(text: &str, i: usize) -> Option<usize> {
    let rest = &text[i..];
    let prefix_len = ["https://", "http://", "www."]
        .iter()
        .find(|p| {
            rest.len() > p.len() && rest.as_bytes()[..p.len()].eq_ignore_ascii_case(p.as_bytes())
        })?
        .len();

    let body = &rest[prefix_len..];
    let len = body.find(char::is_whitespace).unwrap_or(body.len());
    (len > 0).then_some(i + prefix_len + len)
}

fn scan_emoticon(text: &str, i: usize) -> Option<usize> {
    let bytes = text.as_bytes();
    let at = |k: usize| bytes.get(k).copied();

    if at(i) == Some(b'<') {
        if at(i + 1) == Some(b'3') {
            return Some(i + 2).filter(|&e| !continues_word(text, e));
        }
        if at(i + 1) == Some(b'/') && at(i + 2) == Some(b'3') {
            return Some(i + 3).filter(|&e| !continues_word(text, e));
        }
    }

    // [<>]? eyes nose? mouth
    let mut k = i;
    if matches!(at(k), Some(b'<' | b'>')) {
        k += 1;
    }
    if at(k).is_some_and(|b| EYES.contains(&b)) {
        let mut m = k + 1;
        if at(m).is_some_and(|b| NOSES.contains(&b)) && at(m + 1).is_some_and(|b| MOUTHS.contains(&b)) {
            m += 1;
        }
        if at(m).is_some_and(|b| MOUTHS.contains(&b)) {
            let end = m + 1;
            if !ends_inside_word(text, end) {
                return Some(end);
            }
        }
    }

    // mouth nose? eyes [<>]?
    if at(i).is_some_and(|b| MOUTHS.contains(&b)) {
        let mut m = i + 1;
        if at(m).is_some_and(|b| NOSES.contains(&b)) && at(m + 1).is_some_and(|b| EYES.contains(&b)) {
            m += 1;
        }
        if at(m).is_some_and(|b| EYES.contains(&b)) {
            let mut end = m + 1;
            if matches!(at(end), Some(b'<' | b'>')) {
                end += 1;
            }
            if !continues_word(text, end) {
                return Some(end);
            }
        }
    }

    None
}

/// A letter mouth (`:P`, `:D`) glued to more letters is the start of a word.
#[inline]
fn ends_inside_word(text: &str, end: usize) -> bool {
    text.as_bytes()[end - 1].is_ascii_alphanumeric() && continues_word(text, end)
}

#[inline]
fn continues_word(text: &str, end: usize) -> bool {
    char_at(text, end).is_some_and(is_word_char)
}

fn scan_arrow(bytes: &[u8], i: usize) -> Option<usize> {
    let dashes = |from: usize| bytes[from.min(bytes.len())..].iter().take_while(|&&b| b == b'-').count();

    match bytes[i] {
        b'-' => {
            let n = dashes(i);
            (bytes.get(i + n) == Some(&b'>')).then_some(i + n + 1)
        }
        b'<' => {
            let n = dashes(i + 1);
            (n > 0).then_some(i + 1 + n)
        }
        _ => None,
    }
}

fn scan_prefixed(text: &str, i: usize) -> Option<usize> {
    let sigil = text.as_bytes()[i];
    if sigil != b'@' && sigil != b'#' {
        return None;
    }
    let start = i + 1;
    if !char_at(text, start).is_some_and(is_word_char) {
        return None;
    }
    if sigil == b'@' {
        let mut end = start;
        while let Some(c) = char_at(text, end).filter(|&c| is_word_char(c)) {
            end += c.len_utf8();
        }
        Some(end)
    } else {
        scan_word(text, start)
    }
}

fn scan_word(text: &str, i: usize) -> Option<usize> {
    if !char_at(text, i).is_some_and(is_word_char) {
        return None;
    }

    let mut end = i;
    let mut prev: Option<char> = None;
    loop {
        let Some(c) = char_at(text, end) else { break };
        if is_word_char(c) {
            // Whole clusters, so combining marks stay with their base.
            prev = Some(c);
            end = grapheme_end(text, end);
            continue;
        }

        let next = char_at(text, end + c.len_utf8());
        let joins = match (prev, next) {
            (Some(p), Some(n)) if c == '\'' || c == '-' => p.is_alphabetic() && n.is_alphabetic(),
            (Some(p), Some(n)) if matches!(c, ',' | '.' | '/' | ':') => {
                p.is_ascii_digit() && n.is_ascii_digit()
            }
            _ => false,
        };
        if !joins {
            break;
        }
        end += c.len_utf8();
    }

    Some(end)
}

fn scan_cluster(bytes: &[u8], i: usize) -> Option<usize> {
    let first = bytes[i];
    if !first.is_ascii_punctuation() {
        return None;
    }
    let emphatic = |b: u8| b == b'!' || b == b'?';

    let run = bytes[i..]
        .iter()
        .take_while(|&&b| b == first || (emphatic(first) && emphatic(b)))
        .count();
    (run >= 2).then_some(i + run)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(input: &str) -> Vec<&str> {
        Tokenizer::new().tokens(input).into_vec()
    }

    #[test]
    fn empty_emits_nothing() {
        assert!(toks("").is_empty());
        assert!(toks("   \t\n").is_empty());
    }

    #[test]
    fn words_and_numbers() {
        assert_eq!(toks("hello world 42"), ["hello", "world", "42"]);
        assert_eq!(toks("snake_case x2"), ["snake_case", "x2"]);
    }

    #[test]
    fn contractions_stay_whole() {
        assert_eq!(toks("I can't believe"), ["I", "can't", "believe"]);
        assert_eq!(toks("y'all'd've rock'n'roll"), ["y'all'd've", "rock'n'roll"]);
    }

    #[test]
    fn trailing_apostrophe_splits() {
        assert_eq!(toks("students' 'quoted'"), ["students", "'", "'", "quoted", "'"]);
    }

    #[test]
    fn hyphenated_words() {
        assert_eq!(toks("well-known -dash"), ["well-known", "-", "dash"]);
    }

    #[test]
    fn numbers_with_separators() {
        assert_eq!(toks("3.14 1,000 12:30 1/2"), ["3.14", "1,000", "12:30", "1/2"]);
        assert_eq!(toks("end."), ["end", "."]);
    }

    #[test]
    fn punctuation_clusters_stay_whole() {
        assert_eq!(toks("this!!! what?!? wait..."), ["this", "!!!", "what", "?!?", "wait", "..."]);
        assert_eq!(toks("no, really."), ["no", ",", "really", "."]);
    }

    #[test]
    fn emoticons() {
        assert_eq!(toks("hi :-) bye :( ok ;P"), ["hi", ":-)", "bye", ":(", "ok", ";P"]);
        assert_eq!(toks("(: <3 </3 >:("), ["(:", "<3", "</3", ">:("]);
    }

    #[test]
    fn letter_mouth_glued_to_word_is_not_emoticon() {
        assert_eq!(toks(":Dog"), [":", "Dog"]);
        assert_eq!(toks(":D"), [":D"]);
    }

    #[test]
    fn arrows() {
        assert_eq!(toks("a -> b <-- c"), ["a", "->", "b", "<--", "c"]);
    }

    #[test]
    fn handles_and_hashtags() {
        assert_eq!(toks("@bob_99 says #no-way"), ["@bob_99", "says", "#no-way"]);
        assert_eq!(toks("@ #"), ["@", "#"]);
    }

    #[test]
    fn urls() {
        assert_eq!(
            toks("see https://x.io/a?b=1 and www.site.com now"),
            ["see", "https://x.io/a?b=1", "and", "www.site.com", "now"]
        );
    }

    #[test]
    fn emoji_graphemes_stay_whole() {
        assert_eq!(toks("mad 😡 👍🏽 🇫🇷"), ["mad", "😡", "👍🏽", "🇫🇷"]);
        assert_eq!(toks("👨‍👩‍👧"), ["👨‍👩‍👧"]);
    }

    #[test]
    fn combining_marks_stay_with_base() {
        assert_eq!(toks("cafe\u{301} ok"), ["cafe\u{301}", "ok"]);
    }

    #[test]
    fn apostrophe_joins_after_combining_mark() {
        assert_eq!(toks("a\u{301}'b"), ["a\u{301}'b"]);
        assert_eq!(toks("e\u{301}-e\u{301}"), ["e\u{301}-e\u{301}"]);
    }

    #[test]
    fn unicode_words() {
        assert_eq!(toks("naïve Привет 你好"), ["naïve", "Привет", "你好"]);
    }

    #[test]
    fn positions_are_sequential() {
        let mut seen = Vec::new();
        Tokenizer::new().tokenize("the quick!! brown fox", |tok, pos| seen.push((tok, pos)));
        assert_eq!(seen.len(), 5);
        for (i, (_, pos)) in seen.iter().enumerate() {
            assert_eq!(*pos, i as u32);
        }
    }

    #[test]
    fn tokens_are_slices_of_input() {
        let input = String::from("hello world :)");
        let base = input.as_ptr() as usize;
        let end = base + input.len();

        Tokenizer::new().tokenize(&input, |text, _| {
            let ptr = text.as_ptr() as usize;
            assert!(ptr >= base && ptr < end);
        });
    }

    #[test]
    fn rejoining_never_loses_non_space_text() {
        let samples = [
            "I can't believe this!!! 😡",
            "@a #b c-d e'f 1.2 :-) -> ...",
            "weird\u{200b}zero width",
        ];
        for s in samples {
            let joined: String = toks(s).concat();
            let stripped: String = s.chars().filter(|c| !c.is_whitespace()).collect();
            assert_eq!(joined, stripped, "{s:?}");
        }
    }
}
