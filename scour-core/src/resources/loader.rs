//! Text format for lexical tables.
//!
//! One entry per line. Mapping tables use `key<TAB>value`; set tables hold a
//! single item per line. Empty lines are skipped. A line is taken verbatim
//! apart from a trailing `\r`, so a line holding only a space or a tab is an
//! entry and leading or trailing spaces are significant.
//! Escapes:
//!
//! | escape     | meaning            |
//! |------------|--------------------|
//! | `\\`       | backslash          |
//! | `\t`       | tab                |
//! | `\n`       | newline            |
//! | `\r`       | carriage return    |
//! | `\s`       | space              |
//! | `\u{HEX}`  | any scalar value   |

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;

use scour_types::{ResourceError, Table};

use super::{tables, ResourceBuilder};

/// Parses the contents of one table file into raw `(key, value)` entries.
///
/// Set tables produce empty values.
pub fn parse_table(table: Table, source: &str) -> Result<Vec<(String, String)>, ResourceError> {
    let mut entries = Vec::new();

    for (idx, raw) in source.split('\n').enumerate() {
        let line_no = idx + 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line.is_empty() {
            continue;
        }

        let malformed = |reason| ResourceError::Malformed {
            table,
            line: line_no,
            reason,
        };

        let entry = if table.is_mapping() {
            let (key, value) = line
                .split_once('\t')
                .ok_or_else(|| malformed("expected key<TAB>value"))?;
            (
                unescape(key).map_err(malformed)?,
                unescape(value).map_err(malformed)?,
            )
        } else {
            (unescape(line).map_err(malformed)?, String::new())
        };
        if table.is_char_keyed() && entry.0.chars().nth(1).is_some() {
            return Err(malformed("expected a single character"));
        }

        entries.push(entry);
    }

    Ok(entries)
}

/// Reads every table from `dir` into a builder.
pub fn load_dir(dir: &Path) -> Result<ResourceBuilder, ResourceError> {
    let mut builder = ResourceBuilder::new();
    for table in Table::ALL {
        let path = dir.join(table.file_name());
        let source = fs::read_to_string(&path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ResourceError::Missing { table },
            kind => ResourceError::Unreadable { table, kind },
        })?;
        let entries = parse_table(table, &source)?;
        tracing::trace!(table = table.name(), entries = entries.len(), "table parsed");
        builder = builder.mapping(table, entries);
    }
    Ok(builder)
}

/// Renders the compiled-in version of `table` in the text format.
pub fn render_builtin(table: Table) -> String {
    match table {
        Table::Contractions => render_mapping(tables::CONTRACTIONS),
        Table::PunctuationMap => render_mapping(tables::PUNCTUATION_MAP),
        Table::PunctuationRemove => render_set(tables::PUNCTUATION_REMOVE),
        Table::Apostrophes => render_set(tables::APOSTROPHES),
        Table::SpecialChars => render_mapping(tables::SPECIAL_CHARS),
        Table::SpellCorrections => render_mapping(tables::SPELL_CORRECTIONS),
        Table::Whitespace => render_set(tables::WHITESPACE),
        Table::Stopwords => render_set(tables::STOPWORDS),
    }
}

fn render_mapping(entries: &[(&str, &str)]) -> String {
    let mut out = String::new();
    for (k, v) in entries {
        out.push_str(&escape(k));
        out.push('\t');
        out.push_str(&escape(v));
        out.push('\n');
    }
    out
}

fn render_set(entries: &[&str]) -> String {
    let mut out = String::new();
    for k in entries {
        out.push_str(&escape(k));
        out.push('\n');
    }
    out
}

/// Escapes `s` so that [`parse_table`] reads it back unchanged.
///
/// Spaces are escaped only at the edges; control and invisible characters
/// always are.
pub fn escape(s: &str) -> String {
    let last = s.chars().count().saturating_sub(1);
    let mut out = String::with_capacity(s.len());
    for (i, c) in s.chars().enumerate() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            ' ' if i == 0 || i == last => out.push_str("\\s"),
            ' ' => out.push(' '),
            c if c.is_control() || c.is_whitespace() || is_invisible(c) => {
                let _ = write!(out, "\\u{{{:x}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

#[inline]
fn is_invisible(c: char) -> bool {
    matches!(c, '\u{200b}'..='\u{200f}' | '\u{00ad}' | '\u{feff}' | '\u{180e}')
}

fn unescape(s: &str) -> Result<String, &'static str> {
    if !s.contains('\\') {
        return Ok(s.to_owned());
    }

    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('s') => out.push(' '),
            Some('u') => {
                if chars.next() != Some('{') {
                    return Err("expected `{` after \\u");
                }
                let mut hex = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(h) if h.is_ascii_hexdigit() && hex.len() < 6 => hex.push(h),
                        _ => return Err("malformed \\u{...} escape"),
                    }
                }
                let scalar = u32::from_str_radix(&hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .ok_or("\\u{...} is not a unicode scalar value")?;
                out.push(scalar);
            }
            Some(_) => return Err("unknown escape"),
            None => return Err("trailing backslash"),
        }
    }
    Ok(out)
}
