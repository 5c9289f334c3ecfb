//! Plain text primitives.
//!
//! Every text operation a colored string exposes is computed here on the
//! uncolored content first. Positions and widths count characters (Unicode
//! scalar values), not bytes, so padding and slicing line up with what a
//! reader sees.

use std::collections::HashMap;
use std::fmt::Display;
use std::ops::{Bound, RangeBounds};

/// Maps characters to their replacement; `None` deletes the character.
pub type TranslationTable = HashMap<char, Option<String>>;

/// Number of characters in `s`.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn byte_offset(s: &str, chars: usize) -> usize {
    s.char_indices().nth(chars).map_or(s.len(), |(i, _)| i)
}

fn char_offset(s: &str, bytes: usize) -> usize {
    char_len(&s[..bytes])
}

fn is_cased(c: char) -> bool {
    c.is_lowercase() || c.is_uppercase()
}

/// The character at `index`, if there is one.
pub fn char_at(s: &str, index: usize) -> Option<char> {
    s.chars().nth(index)
}

/// The characters covered by `range`, clamped to the length of `s`.
pub fn slice<R: RangeBounds<usize>>(s: &str, range: R) -> String {
    let len = char_len(s);
    let start = match range.start_bound() {
        Bound::Included(&n) => n,
        Bound::Excluded(&n) => n.saturating_add(1),
        Bound::Unbounded => 0,
    }
    .min(len);
    let end = match range.end_bound() {
        Bound::Included(&n) => n.saturating_add(1),
        Bound::Excluded(&n) => n,
        Bound::Unbounded => len,
    }
    .min(len);
    if start >= end {
        return String::new();
    }
    s[byte_offset(s, start)..byte_offset(s, end)].to_string()
}

/// First character uppercased, the rest lowercased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Lowercase form suitable for caseless matching.
pub fn casefold(s: &str) -> String {
    s.to_lowercase().replace('ß', "ss")
}

pub fn to_lowercase(s: &str) -> String {
    s.to_lowercase()
}

pub fn to_uppercase(s: &str) -> String {
    s.to_uppercase()
}

/// Lowercase becomes uppercase and the other way around.
pub fn swapcase(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        if c.is_lowercase() {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.extend(c.to_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Uppercases every character that follows an uncased one and lowercases
/// the rest.
pub fn title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for c in s.chars() {
        if prev_cased {
            out.extend(c.to_lowercase());
        } else {
            out.extend(c.to_uppercase());
        }
        prev_cased = is_cased(c);
    }
    out
}

fn pad(s: &str, left: usize, right: usize, fill: char) -> String {
    let mut out = String::with_capacity(s.len() + left + right);
    out.extend(std::iter::repeat_n(fill, left));
    out.push_str(s);
    out.extend(std::iter::repeat_n(fill, right));
    out
}

/// Centers `s` in a field of `width` characters.
///
/// When the padding is odd the extra fill character goes on the left if
/// `width` is odd, on the right otherwise.
pub fn center(s: &str, width: usize, fill: char) -> String {
    let len = char_len(s);
    if width <= len {
        return s.to_string();
    }
    let margin = width - len;
    let left = margin / 2 + (margin & width & 1);
    pad(s, left, margin - left, fill)
}

/// Left-justifies `s` in a field of `width` characters.
pub fn ljust(s: &str, width: usize, fill: char) -> String {
    pad(s, 0, width.saturating_sub(char_len(s)), fill)
}

/// Right-justifies `s` in a field of `width` characters.
pub fn rjust(s: &str, width: usize, fill: char) -> String {
    pad(s, width.saturating_sub(char_len(s)), 0, fill)
}

/// Pads with zeros on the left, keeping a leading sign in front.
pub fn zfill(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(char_len(s));
    if fill == 0 {
        return s.to_string();
    }
    let zeros = "0".repeat(fill);
    match s.strip_prefix(['+', '-']) {
        Some(rest) => format!("{}{zeros}{rest}", &s[..1]),
        None => format!("{zeros}{s}"),
    }
}

/// Replaces tabs with spaces up to the next multiple of `tabsize` columns.
pub fn expand_tabs(s: &str, tabsize: usize) -> String {
    let mut out = String::with_capacity(s.len());
    let mut column = 0;
    for c in s.chars() {
        match c {
            '\t' => {
                if tabsize > 0 {
                    let n = tabsize - column % tabsize;
                    out.extend(std::iter::repeat_n(' ', n));
                    column += n;
                }
            }
            '\n' | '\r' => {
                out.push(c);
                column = 0;
            }
            _ => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

/// Trims whitespace, or any of `chars` when given, from both ends.
pub fn strip(s: &str, chars: Option<&str>) -> String {
    match chars {
        Some(set) => s.trim_matches(|c: char| set.contains(c)).to_string(),
        None => s.trim().to_string(),
    }
}

pub fn lstrip(s: &str, chars: Option<&str>) -> String {
    match chars {
        Some(set) => s.trim_start_matches(|c: char| set.contains(c)).to_string(),
        None => s.trim_start().to_string(),
    }
}

pub fn rstrip(s: &str, chars: Option<&str>) -> String {
    match chars {
        Some(set) => s.trim_end_matches(|c: char| set.contains(c)).to_string(),
        None => s.trim_end().to_string(),
    }
}

pub fn replace(s: &str, from: &str, to: &str) -> String {
    s.replace(from, to)
}

pub fn replacen(s: &str, from: &str, to: &str, count: usize) -> String {
    s.replacen(from, to, count)
}

pub fn remove_prefix(s: &str, prefix: &str) -> String {
    s.strip_prefix(prefix).unwrap_or(s).to_string()
}

pub fn remove_suffix(s: &str, suffix: &str) -> String {
    s.strip_suffix(suffix).unwrap_or(s).to_string()
}

/// Joins the items with `s` between each pair.
pub fn join<I>(s: &str, items: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let parts: Vec<String> = items.into_iter().map(|i| i.to_string()).collect();
    parts.join(s)
}

/// Builds a translation table.
///
/// The n-th character of `from` maps to the n-th character of `to`, and every
/// character of `delete` maps to deletion. Returns `None` when `from` and
/// `to` differ in length.
pub fn make_translation(
    from: &str,
    to: &str,
    delete: &str,
) -> Option<TranslationTable> {
    if char_len(from) != char_len(to) {
        return None;
    }
    let mut table: TranslationTable = from
        .chars()
        .zip(to.chars())
        .map(|(f, t)| (f, Some(t.to_string())))
        .collect();
    table.extend(delete.chars().map(|c| (c, None)));
    Some(table)
}

/// Maps every character through `table`; characters not in it are kept.
pub fn translate(s: &str, table: &TranslationTable) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match table.get(&c) {
            Some(Some(replacement)) => out.push_str(replacement),
            Some(None) => {}
            None => out.push(c),
        }
    }
    out
}

/// Substitutes `{}`, `{N}` and `{name}` placeholders.
///
/// `{{` and `}}` produce literal braces. A placeholder with no matching
/// argument is left in the output as written.
pub fn format(
    s: &str,
    positional: &[String],
    named: &HashMap<String, String>,
) -> String {
    let mut out = String::with_capacity(s.len());
    let mut next_auto = 0;
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '{' if chars.peek() == Some(&'{') => {
                chars.next();
                out.push('{');
            }
            '}' if chars.peek() == Some(&'}') => {
                chars.next();
                out.push('}');
            }
            '{' => {
                let mut key = String::new();
                let mut closed = false;
                for k in chars.by_ref() {
                    if k == '}' {
                        closed = true;
                        break;
                    }
                    key.push(k);
                }
                if !closed {
                    out.push('{');
                    out.push_str(&key);
                    break;
                }
                let value = if key.is_empty() {
                    next_auto += 1;
                    positional.get(next_auto - 1)
                } else if let Ok(n) = key.parse::<usize>() {
                    positional.get(n)
                } else {
                    named.get(&key)
                };
                match value {
                    Some(v) => out.push_str(v),
                    None => {
                        out.push('{');
                        out.push_str(&key);
                        out.push('}');
                    }
                }
            }
            _ => out.push(c),
        }
    }
    out
}

fn split_whitespace_max(s: &str, maxsplit: Option<usize>) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = s.trim_start();
    while !rest.is_empty() {
        if maxsplit.is_some_and(|max| out.len() >= max) {
            out.push(rest.to_string());
            break;
        }
        match rest.find(char::is_whitespace) {
            Some(i) => {
                out.push(rest[..i].to_string());
                rest = rest[i..].trim_start();
            }
            None => {
                out.push(rest.to_string());
                break;
            }
        }
    }
    out
}

fn rsplit_whitespace_max(s: &str, maxsplit: Option<usize>) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = s.trim_end();
    while !rest.is_empty() {
        if maxsplit.is_some_and(|max| out.len() >= max) {
            out.push(rest.to_string());
            break;
        }
        match rest.char_indices().rev().find(|(_, c)| c.is_whitespace()) {
            Some((i, c)) => {
                out.push(rest[i + c.len_utf8()..].to_string());
                rest = rest[..i].trim_end();
            }
            None => {
                out.push(rest.to_string());
                break;
            }
        }
    }
    out.reverse();
    out
}

/// Splits on `sep`, or on runs of whitespace when `sep` is `None`.
///
/// At most `maxsplit` splits are made when it is given; the remainder is the
/// last piece. Whitespace splitting drops empty pieces, separator splitting
/// keeps them. An empty separator does not split at all.
pub fn split(s: &str, sep: Option<&str>, maxsplit: Option<usize>) -> Vec<String> {
    match sep {
        None => split_whitespace_max(s, maxsplit),
        Some("") => vec![s.to_string()],
        Some(sep) => match maxsplit {
            Some(max) => {
                s.splitn(max.saturating_add(1), sep).map(str::to_string).collect()
            }
            None => s.split(sep).map(str::to_string).collect(),
        },
    }
}

/// Like [`split`], but splits are counted from the right.
pub fn rsplit(s: &str, sep: Option<&str>, maxsplit: Option<usize>) -> Vec<String> {
    match sep {
        None => rsplit_whitespace_max(s, maxsplit),
        Some("") => vec![s.to_string()],
        Some(sep) => {
            let mut parts: Vec<String> = match maxsplit {
                Some(max) => {
                    s.rsplitn(max.saturating_add(1), sep).map(str::to_string).collect()
                }
                None => s.rsplit(sep).map(str::to_string).collect(),
            };
            parts.reverse();
            parts
        }
    }
}

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Splits at line boundaries, treating `\r\n` as one boundary.
pub fn split_lines(s: &str, keepends: bool) -> Vec<String> {
    let mut out = Vec::new();
    let mut start = 0;
    let mut chars = s.char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        if !is_line_break(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        if c == '\r' && chars.peek().is_some_and(|&(_, n)| n == '\n') {
            chars.next();
            end += 1;
        }
        let line = if keepends { &s[start..end] } else { &s[start..i] };
        out.push(line.to_string());
        start = end;
    }
    if start < s.len() {
        out.push(s[start..].to_string());
    }
    out
}

/// Splits around the first `sep`: `(before, sep, after)`, or `(s, "", "")`.
pub fn partition(s: &str, sep: &str) -> (String, String, String) {
    match s.split_once(sep) {
        Some((a, b)) => (a.to_string(), sep.to_string(), b.to_string()),
        None => (s.to_string(), String::new(), String::new()),
    }
}

/// Splits around the last `sep`: `(before, sep, after)`, or `("", "", s)`.
pub fn rpartition(s: &str, sep: &str) -> (String, String, String) {
    match s.rsplit_once(sep) {
        Some((a, b)) => (a.to_string(), sep.to_string(), b.to_string()),
        None => (String::new(), String::new(), s.to_string()),
    }
}

/// UTF-8 bytes of `s`.
pub fn encode(s: &str) -> Vec<u8> {
    s.as_bytes().to_vec()
}

/// Non-overlapping occurrences of `sub`.
pub fn count(s: &str, sub: &str) -> usize {
    s.matches(sub).count()
}

/// Character position of the first `sub`.
pub fn find(s: &str, sub: &str) -> Option<usize> {
    s.find(sub).map(|b| char_offset(s, b))
}

/// Character position of the last `sub`.
pub fn rfind(s: &str, sub: &str) -> Option<usize> {
    s.rfind(sub).map(|b| char_offset(s, b))
}

pub fn starts_with(s: &str, prefix: &str) -> bool {
    s.starts_with(prefix)
}

pub fn ends_with(s: &str, suffix: &str) -> bool {
    s.ends_with(suffix)
}

fn non_empty_all(s: &str, pred: impl Fn(char) -> bool) -> bool {
    !s.is_empty() && s.chars().all(pred)
}

fn is_superscript_digit(c: char) -> bool {
    matches!(c, '\u{b2}' | '\u{b3}' | '\u{b9}' | '\u{2070}' | '\u{2074}'..='\u{2079}')
}

pub fn is_alphabetic(s: &str) -> bool {
    non_empty_all(s, char::is_alphabetic)
}

pub fn is_alphanumeric(s: &str) -> bool {
    non_empty_all(s, char::is_alphanumeric)
}

/// True for the empty string too.
pub fn is_ascii(s: &str) -> bool {
    s.is_ascii()
}

/// Only the digits `0` to `9`.
pub fn is_decimal(s: &str) -> bool {
    non_empty_all(s, |c| c.is_ascii_digit())
}

/// Decimal digits plus superscript digits.
pub fn is_digit(s: &str) -> bool {
    non_empty_all(s, |c| c.is_ascii_digit() || is_superscript_digit(c))
}

/// Any numeric character: digits, fractions, numerals.
pub fn is_numeric(s: &str) -> bool {
    non_empty_all(s, char::is_numeric)
}

/// A letter or underscore followed by letters, digits and underscores.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) if first == '_' || first.is_alphabetic() => {
            chars.all(|c| c == '_' || c.is_alphanumeric())
        }
        _ => false,
    }
}

/// At least one cased character, and every cased character is lowercase.
pub fn is_lowercase(s: &str) -> bool {
    s.chars().any(is_cased) && !s.chars().any(char::is_uppercase)
}

/// At least one cased character, and every cased character is uppercase.
pub fn is_uppercase(s: &str) -> bool {
    s.chars().any(is_cased) && !s.chars().any(char::is_lowercase)
}

/// No control characters and no whitespace other than a plain space.
pub fn is_printable(s: &str) -> bool {
    s.chars().all(|c| !c.is_control() && (c == ' ' || !c.is_whitespace()))
}

pub fn is_whitespace(s: &str) -> bool {
    non_empty_all(s, char::is_whitespace)
}

/// Uppercase characters only follow uncased ones and lowercase characters
/// only follow cased ones, with at least one cased character overall.
pub fn is_titlecase(s: &str) -> bool {
    let mut prev_cased = false;
    let mut seen_cased = false;
    for c in s.chars() {
        if c.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            seen_cased = true;
        } else if c.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            seen_cased = true;
        } else {
            prev_cased = false;
        }
    }
    seen_cased
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn padding() {
        assert_eq!(center("ab", 5, '*'), "**ab*");
        assert_eq!(center("abc", 6, '*'), "*abc**");
        assert_eq!(center("abc", 2, '*'), "abc");
        assert_eq!(ljust("ab", 4, '.'), "ab..");
        assert_eq!(rjust("ab", 4, '.'), "..ab");
        assert_eq!(rjust("é", 3, ' '), "  é");
    }

    #[test]
    fn zfill_keeps_sign_first() {
        assert_eq!(zfill("42", 5), "00042");
        assert_eq!(zfill("-42", 5), "-0042");
        assert_eq!(zfill("+7", 3), "+07");
        assert_eq!(zfill("12345", 3), "12345");
        assert_eq!(zfill("", 2), "00");
    }

    #[test]
    fn case_changes() {
        assert_eq!(capitalize("hELLO wORLD"), "Hello world");
        assert_eq!(swapcase("Hello"), "hELLO");
        assert_eq!(title("they're bill's friends"), "They'Re Bill'S Friends");
        assert_eq!(casefold("Straße"), "strasse");
    }

    #[test]
    fn tabs_expand_to_columns() {
        assert_eq!(expand_tabs("a\tb", 4), "a   b");
        assert_eq!(expand_tabs("ab\n\tc", 2), "ab\n  c");
        assert_eq!(expand_tabs("a\tb", 0), "ab");
    }

    #[test]
    fn stripping() {
        assert_eq!(strip("  x  ", None), "x");
        assert_eq!(strip("xxhixx", Some("x")), "hi");
        assert_eq!(lstrip("--a--", Some("-")), "a--");
        assert_eq!(rstrip("--a--", Some("-")), "--a");
    }

    #[test]
    fn whitespace_split() {
        assert_eq!(split("  a b\t c  ", None, None), strings(&["a", "b", "c"]));
        assert_eq!(split("a b  c  ", None, Some(1)), strings(&["a", "b  c  "]));
        assert_eq!(split("   ", None, None), Vec::<String>::new());
        assert_eq!(rsplit("  a b  c", None, Some(1)), strings(&["  a b", "c"]));
        assert_eq!(rsplit(" a b c ", None, None), strings(&["a", "b", "c"]));
    }

    #[test]
    fn separator_split() {
        assert_eq!(split("a,b,,c", Some(","), None), strings(&["a", "b", "", "c"]));
        assert_eq!(split("a,b,c", Some(","), Some(1)), strings(&["a", "b,c"]));
        assert_eq!(rsplit("a,b,c", Some(","), Some(1)), strings(&["a,b", "c"]));
        assert_eq!(split("abc", Some(""), None), strings(&["abc"]));
    }

    #[test]
    fn unbounded_maxsplit_splits_everything() {
        let all = strings(&["a", "b", "c"]);
        assert_eq!(split("a,b,c", Some(","), Some(usize::MAX)), all);
        assert_eq!(rsplit("a,b,c", Some(","), Some(usize::MAX)), all);
        assert_eq!(split("a b c", None, Some(usize::MAX)), all);
        assert_eq!(rsplit("a b c", None, Some(usize::MAX)), all);
    }

    #[test]
    fn lines() {
        assert_eq!(split_lines("a\nb\r\nc", false), strings(&["a", "b", "c"]));
        assert_eq!(split_lines("a\nb\r\n", true), strings(&["a\n", "b\r\n"]));
        assert_eq!(split_lines("", false), Vec::<String>::new());
        assert_eq!(split_lines("\n", false), strings(&[""]));
    }

    #[test]
    fn partitions() {
        let p = |a: &str, b: &str, c: &str| (a.to_string(), b.to_string(), c.to_string());
        assert_eq!(partition("k=v=w", "="), p("k", "=", "v=w"));
        assert_eq!(rpartition("k=v=w", "="), p("k=v", "=", "w"));
        assert_eq!(partition("kv", "="), p("kv", "", ""));
        assert_eq!(rpartition("kv", "="), p("", "", "kv"));
    }

    #[test]
    fn searching_counts_characters() {
        assert_eq!(find("héllo", "l"), Some(2));
        assert_eq!(rfind("héllo", "l"), Some(3));
        assert_eq!(find("abc", "z"), None);
        assert_eq!(count("aaaa", "aa"), 2);
        assert_eq!(count("abc", ""), 4);
    }

    #[test]
    fn slicing_clamps() {
        assert_eq!(slice("héllo", 1..3), "él");
        assert_eq!(slice("abc", 1..), "bc");
        assert_eq!(slice("abc", ..10), "abc");
        assert_eq!(slice("abc", 2..1), "");
        assert_eq!(slice("abc", 0..=1), "ab");
        assert_eq!(char_at("héllo", 1), Some('é'));
        assert_eq!(char_at("abc", 3), None);
    }

    #[test]
    fn translation() {
        let table = make_translation("ab", "xy", "c").unwrap();
        assert_eq!(translate("abcd", &table), "xyd");
        assert!(make_translation("ab", "x", "").is_none());
    }

    #[test]
    fn placeholders() {
        let positional = strings(&["a", "b"]);
        let mut named = HashMap::new();
        named.insert("who".to_string(), "you".to_string());
        assert_eq!(format("{} {} {0}", &positional, &named), "a b a");
        assert_eq!(format("hi {who}", &positional, &named), "hi you");
        assert_eq!(format("{{x}} {missing}", &positional, &named), "{x} {missing}");
        assert_eq!(format("open {", &positional, &named), "open {");
    }

    #[test]
    fn predicates() {
        assert!(is_alphabetic("abc"));
        assert!(!is_alphabetic(""));
        assert!(is_alphanumeric("a1"));
        assert!(is_ascii(""));
        assert!(is_decimal("123"));
        assert!(!is_decimal("²"));
        assert!(is_digit("1²"));
        assert!(is_numeric("½"));
        assert!(is_identifier("_a1"));
        assert!(!is_identifier("1a"));
        assert!(is_lowercase("abc1"));
        assert!(!is_lowercase("123"));
        assert!(is_uppercase("ABC1"));
        assert!(is_printable("a b"));
        assert!(!is_printable("a\nb"));
        assert!(is_whitespace(" \t"));
        assert!(is_titlecase("Hello World"));
        assert!(!is_titlecase("HeLLo"));
        assert!(!is_titlecase("123"));
    }
}
