//! Result shapes, and operations looked up by name.
//!
//! [`TextResult`] tags what a plain-text operation returned; [`Reshaped`] is
//! the same result with every text replaced by a colored string carrying the
//! styling of the value the operation ran on. [`ColoredString::apply`] runs
//! an arbitrary operation this way, and [`ColoredString::call`] finds one of
//! the built-in operations by name and parses its arguments from strings.

use std::any::Any;
use std::collections::{HashMap, HashSet};
use std::str::FromStr;

use tracing::debug;

use crate::colored::ColoredString;
use crate::text;

/// The result of an operation on plain text, tagged by shape.
#[derive(Debug)]
pub enum TextResult {
    Text(String),
    Bytes(Vec<u8>),
    List(Vec<String>),
    /// A fixed-size group, such as the three parts of a partition.
    Tuple(Vec<String>),
    Set(HashSet<String>),
    Map(HashMap<String, String>),
    /// Anything that is not text, passed through untouched.
    Other(Box<dyn Any>),
    None,
}

impl TextResult {
    /// Tag a non-text value.
    pub fn other<T: Any>(value: T) -> TextResult {
        TextResult::Other(Box::new(value))
    }
}

impl From<String> for TextResult {
    fn from(s: String) -> TextResult {
        TextResult::Text(s)
    }
}

impl From<&str> for TextResult {
    fn from(s: &str) -> TextResult {
        TextResult::Text(s.to_string())
    }
}

impl From<Vec<u8>> for TextResult {
    fn from(bytes: Vec<u8>) -> TextResult {
        TextResult::Bytes(bytes)
    }
}

impl From<Vec<String>> for TextResult {
    fn from(list: Vec<String>) -> TextResult {
        TextResult::List(list)
    }
}

impl From<(String, String, String)> for TextResult {
    fn from((a, b, c): (String, String, String)) -> TextResult {
        TextResult::Tuple(vec![a, b, c])
    }
}

impl From<HashSet<String>> for TextResult {
    fn from(set: HashSet<String>) -> TextResult {
        TextResult::Set(set)
    }
}

impl From<HashMap<String, String>> for TextResult {
    fn from(map: HashMap<String, String>) -> TextResult {
        TextResult::Map(map)
    }
}

impl From<bool> for TextResult {
    fn from(b: bool) -> TextResult {
        TextResult::other(b)
    }
}

impl From<usize> for TextResult {
    fn from(n: usize) -> TextResult {
        TextResult::other(n)
    }
}

impl<T: Into<TextResult>> From<Option<T>> for TextResult {
    fn from(value: Option<T>) -> TextResult {
        value.map_or(TextResult::None, Into::into)
    }
}

/// A [`TextResult`] with its texts rewrapped as colored strings.
#[derive(Debug)]
pub enum Reshaped {
    Text(ColoredString),
    Bytes(Vec<u8>),
    List(Vec<ColoredString>),
    Tuple(Vec<ColoredString>),
    /// Members are unique by colored-string equality, which includes styling.
    Set(HashSet<ColoredString>),
    Map(HashMap<ColoredString, ColoredString>),
    Other(Box<dyn Any>),
    None,
}

impl Reshaped {
    pub fn is_none(&self) -> bool {
        matches!(self, Reshaped::None)
    }

    /// The single colored string, if that is what this is.
    pub fn into_text(self) -> Option<ColoredString> {
        match self {
            Reshaped::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The colored strings of a list or tuple.
    pub fn into_list(self) -> Option<Vec<ColoredString>> {
        match self {
            Reshaped::List(v) | Reshaped::Tuple(v) => Some(v),
            _ => None,
        }
    }

    /// The passed-through value, if it has type `T`.
    pub fn into_other<T: Any>(self) -> Option<T> {
        match self {
            Reshaped::Other(value) => value.downcast::<T>().ok().map(|b| *b),
            _ => None,
        }
    }
}

impl ColoredString {
    /// Rewrap `result` with this value's styling.
    pub fn reshape(&self, result: TextResult) -> Reshaped {
        match result {
            TextResult::Text(s) => Reshaped::Text(self.derive(s)),
            TextResult::Bytes(b) => Reshaped::Bytes(b),
            TextResult::List(v) => {
                Reshaped::List(v.into_iter().map(|s| self.derive(s)).collect())
            }
            TextResult::Tuple(v) => {
                Reshaped::Tuple(v.into_iter().map(|s| self.derive(s)).collect())
            }
            TextResult::Set(set) => {
                Reshaped::Set(set.into_iter().map(|s| self.derive(s)).collect())
            }
            TextResult::Map(map) => Reshaped::Map(
                map.into_iter()
                    .map(|(k, v)| (self.derive(k), self.derive(v)))
                    .collect(),
            ),
            TextResult::Other(value) => Reshaped::Other(value),
            TextResult::None => Reshaped::None,
        }
    }

    /// Run `op` on the uncolored text and rewrap its result by shape.
    ///
    /// ```
    /// use crayons::{ColorContext, ColoredString};
    ///
    /// let ctx = ColorContext::new();
    /// let word = ColoredString::new_in(&ctx, "red", "abc", false, false).unwrap();
    /// let rev = word.apply(|s| s.chars().rev().collect::<String>());
    /// assert_eq!(rev.into_text().unwrap().text(), "cba");
    /// ```
    pub fn apply<F, R>(&self, op: F) -> Reshaped
    where
        F: FnOnce(&str) -> R,
        R: Into<TextResult>,
    {
        self.reshape(op(self.text()).into())
    }

    /// Run the built-in operation called `name` with arguments parsed from
    /// `args`.
    ///
    /// Names are the method names of [`ColoredString`], plus `lower` and
    /// `upper`. An unknown name, or arguments that do not fit the operation,
    /// give [`Reshaped::None`].
    pub fn call(&self, name: &str, args: &[&str]) -> Reshaped {
        let Some((_, op)) = operations().find(|(n, _)| *n == name) else {
            debug!(name, "no such text operation");
            return Reshaped::None;
        };
        match op(self.text(), args) {
            Some(result) => self.reshape(result),
            None => {
                debug!(name, given = args.len(), "arguments do not fit text operation");
                Reshaped::None
            }
        }
    }
}

type Operation = fn(&str, &[&str]) -> Option<TextResult>;

fn arity(args: &[&str], min: usize, max: usize) -> Option<()> {
    (min..=max).contains(&args.len()).then_some(())
}

fn parse<T: FromStr>(args: &[&str], i: usize) -> Option<T> {
    args.get(i)?.parse().ok()
}

fn fill(args: &[&str], i: usize) -> Option<char> {
    match args.get(i) {
        None => Some(' '),
        Some(f) => {
            let mut chars = f.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Some(c),
                _ => None,
            }
        }
    }
}

macro_rules! nullary {
    ($($name:literal => $prim:path),* $(,)?) => {
        [$(
            ($name, |s, a| {
                arity(a, 0, 0)?;
                Some($prim(s).into())
            }),
        )*]
    };
}

static NULLARY: [(&str, Operation); 23] = nullary! {
    "capitalize" => text::capitalize,
    "casefold" => text::casefold,
    "to_lowercase" => text::to_lowercase,
    "to_uppercase" => text::to_uppercase,
    "swapcase" => text::swapcase,
    "title" => text::title,
    "encode" => text::encode,
    "is_alphabetic" => text::is_alphabetic,
    "is_alphanumeric" => text::is_alphanumeric,
    "is_ascii" => text::is_ascii,
    "is_decimal" => text::is_decimal,
    "is_digit" => text::is_digit,
    "is_identifier" => text::is_identifier,
    "is_lowercase" => text::is_lowercase,
    "is_numeric" => text::is_numeric,
    "is_printable" => text::is_printable,
    "is_whitespace" => text::is_whitespace,
    "is_titlecase" => text::is_titlecase,
    "is_uppercase" => text::is_uppercase,
    "len" => text::char_len,
    "lower" => text::to_lowercase,
    "upper" => text::to_uppercase,
    "is_empty" => str::is_empty,
};

static WITH_ARGS: [(&str, Operation); 25] = [
    ("center", |s, a| {
        arity(a, 1, 2)?;
        Some(text::center(s, parse(a, 0)?, fill(a, 1)?).into())
    }),
    ("ljust", |s, a| {
        arity(a, 1, 2)?;
        Some(text::ljust(s, parse(a, 0)?, fill(a, 1)?).into())
    }),
    ("rjust", |s, a| {
        arity(a, 1, 2)?;
        Some(text::rjust(s, parse(a, 0)?, fill(a, 1)?).into())
    }),
    ("zfill", |s, a| {
        arity(a, 1, 1)?;
        Some(text::zfill(s, parse(a, 0)?).into())
    }),
    ("expand_tabs", |s, a| {
        arity(a, 0, 1)?;
        let size = if a.is_empty() { 8 } else { parse(a, 0)? };
        Some(text::expand_tabs(s, size).into())
    }),
    ("lstrip", |s, a| {
        arity(a, 0, 1)?;
        Some(text::lstrip(s, a.first().copied()).into())
    }),
    ("rstrip", |s, a| {
        arity(a, 0, 1)?;
        Some(text::rstrip(s, a.first().copied()).into())
    }),
    ("strip", |s, a| {
        arity(a, 0, 1)?;
        Some(text::strip(s, a.first().copied()).into())
    }),
    ("replace", |s, a| {
        arity(a, 2, 3)?;
        match a.get(2) {
            None => Some(text::replace(s, a[0], a[1]).into()),
            Some(_) => Some(text::replacen(s, a[0], a[1], parse(a, 2)?).into()),
        }
    }),
    ("remove_prefix", |s, a| {
        arity(a, 1, 1)?;
        Some(text::remove_prefix(s, a[0]).into())
    }),
    ("remove_suffix", |s, a| {
        arity(a, 1, 1)?;
        Some(text::remove_suffix(s, a[0]).into())
    }),
    ("join", |s, a| Some(text::join(s, a.iter()).into())),
    ("format", |s, a| {
        let positional: Vec<String> = a.iter().map(|x| x.to_string()).collect();
        Some(text::format(s, &positional, &HashMap::new()).into())
    }),
    ("split", |s, a| {
        arity(a, 0, 2)?;
        let maxsplit = if a.len() == 2 { Some(parse(a, 1)?) } else { None };
        Some(text::split(s, a.first().copied(), maxsplit).into())
    }),
    ("rsplit", |s, a| {
        arity(a, 0, 2)?;
        let maxsplit = if a.len() == 2 { Some(parse(a, 1)?) } else { None };
        Some(text::rsplit(s, a.first().copied(), maxsplit).into())
    }),
    ("split_lines", |s, a| {
        arity(a, 0, 1)?;
        let keepends = if a.is_empty() { false } else { parse(a, 0)? };
        Some(text::split_lines(s, keepends).into())
    }),
    ("partition", |s, a| {
        arity(a, 1, 1)?;
        Some(text::partition(s, a[0]).into())
    }),
    ("rpartition", |s, a| {
        arity(a, 1, 1)?;
        Some(text::rpartition(s, a[0]).into())
    }),
    ("count", |s, a| {
        arity(a, 1, 1)?;
        Some(text::count(s, a[0]).into())
    }),
    ("find", |s, a| {
        arity(a, 1, 1)?;
        Some(text::find(s, a[0]).into())
    }),
    ("rfind", |s, a| {
        arity(a, 1, 1)?;
        Some(text::rfind(s, a[0]).into())
    }),
    ("starts_with", |s, a| {
        arity(a, 1, 1)?;
        Some(text::starts_with(s, a[0]).into())
    }),
    ("ends_with", |s, a| {
        arity(a, 1, 1)?;
        Some(text::ends_with(s, a[0]).into())
    }),
    ("contains", |s, a| {
        arity(a, 1, 1)?;
        Some(s.contains(a[0]).into())
    }),
    ("translate", |s, a| {
        arity(a, 2, 3)?;
        let table = text::make_translation(a[0], a[1], a.get(2).copied().unwrap_or(""))?;
        Some(text::translate(s, &table).into())
    }),
];

fn operations() -> impl Iterator<Item = &'static (&'static str, Operation)> {
    NULLARY.iter().chain(WITH_ARGS.iter())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::ColorContext;
    use crate::types::ForeColor;
    use pretty_assertions::assert_eq;

    fn word(s: &str) -> ColoredString {
        ColoredString::new_in(&ColorContext::new(), "yellow", s, false, true).unwrap()
    }

    #[test]
    fn reshape_by_shape() {
        let w = word("x");
        let set: HashSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
        match w.reshape(set.into()) {
            Reshaped::Set(out) => {
                assert_eq!(out.len(), 2);
                assert!(out.iter().all(|c| c.color() == ForeColor::Yellow && c.bold()));
            }
            other => panic!("unexpected {other:?}"),
        }
        let map: HashMap<String, String> =
            [("k".to_string(), "v".to_string())].into_iter().collect();
        match w.reshape(map.into()) {
            Reshaped::Map(out) => {
                let (k, v) = out.into_iter().next().unwrap();
                assert_eq!((k.text(), v.text()), ("k", "v"));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(w.reshape(b"raw".to_vec().into()), Reshaped::Bytes(_)));
        assert!(w.reshape(None::<usize>.into()).is_none());
    }

    #[test]
    fn apply_passes_native_values_through() {
        let w = word("hello");
        let n = w.apply(|s| TextResult::other(s.len() * 2));
        assert_eq!(n.into_other::<usize>(), Some(10));
        let flag = w.apply(|s| s.starts_with('h'));
        assert_eq!(flag.into_other::<bool>(), Some(true));
    }

    #[test]
    fn call_by_name() {
        let w = word("a-b-c");
        assert_eq!(w.call("upper", &[]).into_text().unwrap().text(), "A-B-C");
        let parts = w.call("split", &["-", "1"]).into_list().unwrap();
        assert_eq!(parts, vec!["a", "b-c"]);
        assert!(parts.iter().all(|p| p.bold()));
        let padded = w.call("center", &["9", "*"]).into_text().unwrap();
        assert_eq!(padded.text(), "**a-b-c**");
        assert_eq!(w.call("find", &["b"]).into_other::<usize>(), Some(2));
        assert!(w.call("find", &["z"]).is_none());
        assert_eq!(w.call("len", &[]).into_other::<usize>(), Some(5));
    }

    #[test]
    fn call_split_with_largest_maxsplit() {
        let w = word("a-b-c");
        let max = usize::MAX.to_string();
        let parts = w.call("split", &["-", max.as_str()]).into_list().unwrap();
        assert_eq!(parts, vec!["a", "b", "c"]);
        let parts = w.call("rsplit", &["-", max.as_str()]).into_list().unwrap();
        assert_eq!(parts, vec!["a", "b", "c"]);
    }

    #[test]
    fn unknown_or_malformed_calls_give_none() {
        let w = word("abc");
        assert!(w.call("frobnicate", &[]).is_none());
        assert!(w.call("center", &[]).is_none());
        assert!(w.call("center", &["wide"]).is_none());
        assert!(w.call("center", &["9", "ab"]).is_none());
        assert!(w.call("upper", &["extra"]).is_none());
    }

    #[test]
    fn operation_names_are_unique() {
        let names: HashSet<&str> = operations().map(|(n, _)| *n).collect();
        assert_eq!(names.len(), operations().count());
    }
}
