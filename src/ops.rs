//! The text-operation surface of [`ColoredString`].
//!
//! Each operation runs the plain-text primitive from [`crate::text`] on the
//! uncolored text and wraps the result by shape: text becomes a new colored
//! string with the same styling, a list or triple of texts becomes a list or
//! triple of colored strings, and bytes or native values pass through.

use std::collections::HashMap;
use std::fmt::Display;

use crate::colored::ColoredString;
use crate::error::{Error, Result};
use crate::text::{self, TranslationTable};

/// Generates one delegating method per table entry.
///
/// An entry reads `<shape> fn <name>(<args>) [-> <native type>] = <primitive>;`
/// where the primitive takes the uncolored text followed by `<args>`.
macro_rules! text_ops {
    (@ret text) => { ColoredString };
    (@ret list) => { Vec<ColoredString> };
    (@ret triple) => { (ColoredString, ColoredString, ColoredString) };
    (@ret bytes) => { Vec<u8> };
    (@ret native $ret:ty) => { $ret };

    (@wrap $this:ident, text, $out:expr) => { $this.derive($out) };
    (@wrap $this:ident, list, $out:expr) => {
        $out.into_iter().map(|part| $this.derive(part)).collect()
    };
    (@wrap $this:ident, triple, $out:expr) => {{
        let (head, sep, tail) = $out;
        ($this.derive(head), $this.derive(sep), $this.derive(tail))
    }};
    (@wrap $this:ident, bytes, $out:expr) => { $out };
    (@wrap $this:ident, native, $out:expr) => { $out };

    ($(
        $(#[$meta:meta])*
        $shape:ident fn $name:ident($($arg:ident: $ty:ty),*) $(-> $ret:ty)? = $prim:path;
    )*) => {
        impl ColoredString {
            $(
                $(#[$meta])*
                pub fn $name(&self, $($arg: $ty),*) -> text_ops!(@ret $shape $($ret)?) {
                    text_ops!(@wrap self, $shape, $prim(self.text(), $($arg),*))
                }
            )*
        }
    };
}

text_ops! {
    /// First character uppercased, the rest lowercased.
    text fn capitalize() = text::capitalize;
    /// Aggressive lowercase for caseless matching.
    text fn casefold() = text::casefold;
    text fn to_lowercase() = text::to_lowercase;
    text fn to_uppercase() = text::to_uppercase;
    text fn swapcase() = text::swapcase;
    /// Every word starts uppercase, the rest of it lowercase.
    text fn title() = text::title;

    /// Centered in a field of `width` characters, padded with `fill`.
    text fn center(width: usize, fill: char) = text::center;
    text fn ljust(width: usize, fill: char) = text::ljust;
    text fn rjust(width: usize, fill: char) = text::rjust;
    /// Left padded with zeros, after any leading sign.
    text fn zfill(width: usize) = text::zfill;
    text fn expand_tabs(tabsize: usize) = text::expand_tabs;

    /// Strips `chars` from both ends, or whitespace when `None`.
    text fn strip(chars: Option<&str>) = text::strip;
    text fn lstrip(chars: Option<&str>) = text::lstrip;
    text fn rstrip(chars: Option<&str>) = text::rstrip;

    text fn replace(from: &str, to: &str) = text::replace;
    /// Replaces the first `count` occurrences.
    text fn replacen(from: &str, to: &str, count: usize) = text::replacen;
    text fn remove_prefix(prefix: &str) = text::remove_prefix;
    text fn remove_suffix(suffix: &str) = text::remove_suffix;
    text fn translate(table: &TranslationTable) = text::translate;

    /// Splits on `sep`, or on runs of whitespace when `None`.
    list fn split(sep: Option<&str>, maxsplit: Option<usize>) = text::split;
    /// Like `split`, but `maxsplit` counts from the right.
    list fn rsplit(sep: Option<&str>, maxsplit: Option<usize>) = text::rsplit;
    list fn split_lines(keepends: bool) = text::split_lines;

    /// Splits at the first `sep` into head, separator and tail.
    triple fn partition(sep: &str) = text::partition;
    triple fn rpartition(sep: &str) = text::rpartition;

    /// The UTF-8 bytes of the uncolored text.
    bytes fn encode() = text::encode;

    /// Non-overlapping occurrences of `sub`.
    native fn count(sub: &str) -> usize = text::count;
    /// Character index of the first occurrence of `sub`.
    native fn find(sub: &str) -> Option<usize> = text::find;
    native fn rfind(sub: &str) -> Option<usize> = text::rfind;
    native fn starts_with(prefix: &str) -> bool = text::starts_with;
    native fn ends_with(suffix: &str) -> bool = text::ends_with;

    native fn is_alphabetic() -> bool = text::is_alphabetic;
    native fn is_alphanumeric() -> bool = text::is_alphanumeric;
    native fn is_ascii() -> bool = text::is_ascii;
    native fn is_decimal() -> bool = text::is_decimal;
    native fn is_digit() -> bool = text::is_digit;
    native fn is_identifier() -> bool = text::is_identifier;
    native fn is_lowercase() -> bool = text::is_lowercase;
    native fn is_numeric() -> bool = text::is_numeric;
    native fn is_printable() -> bool = text::is_printable;
    native fn is_whitespace() -> bool = text::is_whitespace;
    native fn is_titlecase() -> bool = text::is_titlecase;
    native fn is_uppercase() -> bool = text::is_uppercase;
}

impl ColoredString {
    /// The items joined with this text between each pair.
    pub fn join<I>(&self, items: I) -> ColoredString
    where
        I: IntoIterator,
        I::Item: Display,
    {
        self.derive(text::join(self.text(), items))
    }

    /// Substitutes `{}` and `{N}` placeholders with `args`.
    pub fn format(&self, args: &[&dyn Display]) -> ColoredString {
        let positional: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        self.derive(text::format(self.text(), &positional, &HashMap::new()))
    }

    /// Substitutes `{name}` placeholders from `named`.
    pub fn format_map<I, K, V>(&self, named: I) -> ColoredString
    where
        I: IntoIterator<Item = (K, V)>,
        K: Display,
        V: Display,
    {
        let named: HashMap<String, String> = named
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.derive(text::format(self.text(), &[], &named))
    }

    /// Like [`ColoredString::find`], but a miss is an error.
    pub fn index(&self, sub: &str) -> Result<usize> {
        self.find(sub)
            .ok_or_else(|| Error::SubstringNotFound { needle: sub.to_string() })
    }

    /// Like [`ColoredString::rfind`], but a miss is an error.
    pub fn rindex(&self, sub: &str) -> Result<usize> {
        self.rfind(sub)
            .ok_or_else(|| Error::SubstringNotFound { needle: sub.to_string() })
    }
}
