use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, RangeBounds};

use crate::ansi;
use crate::context::{self, ColorContext};
use crate::error::{Error, Result};
use crate::text;
use crate::traits::TextSource;
use crate::types::ForeColor;

/// Text with a foreground color and intensity attached.
///
/// A `ColoredString` behaves like the text it wraps: it has a length, can be
/// sliced, searched, split, case-mapped and compared against plain strings.
/// Every operation that produces new text returns a new `ColoredString` with
/// the same color, `always_color` and `bold` settings; operations with a
/// non-text result (lengths, positions, predicates) return that result
/// directly.
///
/// Escape sequences only appear when the value is rendered, through
/// `Display` or [`ColoredString::render_in`], and only when colorization
/// applies: either `always_color` is set, or stdout is a terminal and color
/// has not been disabled.
///
/// Equality between two colored strings compares text and all styling;
/// equality and ordering against plain strings compare text only. Ordering
/// between two colored strings compares text only, so two values with the
/// same text and different colors are neither less nor greater than each
/// other, yet not equal.
///
/// That makes `partial_cmp` return `Some(Equal)` for values `==` rejects,
/// which the `PartialOrd` contract treats as a logic error. It is what keeps
/// `a <= b` identical to `a < b || a.eq_text(&b)`. Sorting works as expected
/// on text; code that assumes `Equal` implies `==`, such as deduplicating a
/// sorted list, must compare styling itself.
#[derive(Clone, Eq, Hash, PartialEq)]
pub struct ColoredString {
    text: String,
    color: ForeColor,
    always_color: bool,
    bold: bool,
}

impl ColoredString {
    /// Create a colored string, consulting the process-wide override table.
    ///
    /// `color` is matched case insensitively against the fore-color keys.
    /// If it is not one of them, [`Error::InvalidColor`] is returned; if
    /// `source` cannot produce text, [`Error::NotText`] is returned. When
    /// `CLINT_FORCE_COLOR` is set, `always` is ignored and the result always
    /// renders in color.
    pub fn new<S: ?Sized + TextSource>(
        color: &str,
        source: &S,
        always: bool,
        bold: bool,
    ) -> Result<ColoredString> {
        let requested = color.parse::<ForeColor>()?;
        ColoredString::from_color(requested, source, always, bold)
    }

    /// Like [`ColoredString::new`], with an explicit context.
    ///
    /// A colored string passed as `source` is rendered against `ctx` too.
    pub fn new_in<S: ?Sized + TextSource>(
        ctx: &ColorContext,
        color: &str,
        source: &S,
        always: bool,
        bold: bool,
    ) -> Result<ColoredString> {
        let requested = color.parse::<ForeColor>()?;
        let text = source.to_text_in(ctx)?;
        Ok(ColoredString::assemble(text, ctx.replacement(requested), always, bold))
    }

    /// Like [`ColoredString::new`], with an already parsed color.
    pub fn from_color<S: ?Sized + TextSource>(
        color: ForeColor,
        source: &S,
        always: bool,
        bold: bool,
    ) -> Result<ColoredString> {
        // Converting may render another colored string, which reads the
        // global context, so it has to happen outside the lock.
        let text = source.to_text()?;
        let color = context::with_global(|ctx| ctx.replacement(color));
        Ok(ColoredString::assemble(text, color, always, bold))
    }

    fn assemble(
        text: String,
        color: ForeColor,
        always: bool,
        bold: bool,
    ) -> ColoredString {
        let always_color = always || context::force_color_requested();
        ColoredString { text, color, always_color, bold }
    }

    /// A new value with this one's styling and different text.
    pub(crate) fn derive(&self, text: String) -> ColoredString {
        ColoredString { text, ..*self }
    }

    /// The uncolored text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume this value and return the uncolored text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// The stored color, after any override was applied.
    pub fn color(&self) -> ForeColor {
        self.color
    }

    /// Whether this value renders in color regardless of terminal and
    /// enable state.
    pub fn always_color(&self) -> bool {
        self.always_color
    }

    /// Whether this value renders with bright intensity.
    pub fn bold(&self) -> bool {
        self.bold
    }

    /// The text wrapped in escape sequences, whatever the context says.
    pub fn colorized(&self) -> String {
        ansi::colorize(&self.text, self.color, self.bold)
    }

    /// Render against `ctx`: colorized if colorization applies, plain text
    /// otherwise.
    pub fn render_in(&self, ctx: &ColorContext) -> String {
        if ctx.should_colorize(self.always_color) {
            self.colorized()
        } else {
            self.text.clone()
        }
    }

    /// Render against the process-wide context.
    pub fn render(&self) -> String {
        context::with_global(|ctx| self.render_in(ctx))
    }

    /// Number of characters of text.
    pub fn len(&self) -> usize {
        text::char_len(&self.text)
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true if the text form of `needle` occurs in the text.
    ///
    /// A needle without a text form is never contained.
    pub fn contains<S: ?Sized + TextSource>(&self, needle: &S) -> bool {
        needle.to_text().is_ok_and(|n| self.text.contains(n.as_str()))
    }

    /// The characters of the rendered form.
    pub fn chars(&self) -> std::vec::IntoIter<char> {
        self.render().chars().collect::<Vec<_>>().into_iter()
    }

    /// The character at `index`, as a colored string.
    pub fn char_at(&self, index: usize) -> Option<ColoredString> {
        text::char_at(&self.text, index).map(|c| self.derive(c.to_string()))
    }

    /// The characters in `range`, clamped to the text's length.
    pub fn slice<R: RangeBounds<usize>>(&self, range: R) -> ColoredString {
        self.derive(text::slice(&self.text, range))
    }

    /// `lhs` followed by the rendered form.
    pub fn prepend<T: fmt::Display>(&self, lhs: T) -> String {
        format!("{lhs}{}", self.render())
    }

    /// The rendered form repeated `n` times, as new text.
    pub fn repeat_in(&self, ctx: &ColorContext, n: usize) -> ColoredString {
        self.derive(self.render_in(ctx).repeat(n))
    }

    /// Every character of the rendered form paired with every item, in
    /// order, concatenated.
    ///
    /// `red("AB")` times `["X", "Y"]` is `"AXAYBXBY"`. An empty rendered
    /// form or no items gives empty text.
    pub fn product_in<I>(&self, ctx: &ColorContext, items: I) -> ColoredString
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let rendered = self.render_in(ctx);
        let items: Vec<String> =
            items.into_iter().map(|i| i.to_string()).collect();
        let mut out = String::new();
        for c in rendered.chars() {
            for item in &items {
                out.push(c);
                out.push_str(item);
            }
        }
        self.derive(out)
    }

    /// [`ColoredString::repeat_in`] against the process-wide context.
    pub fn repeat(&self, n: usize) -> ColoredString {
        context::with_global(|ctx| self.repeat_in(ctx, n))
    }

    /// [`ColoredString::product_in`] against the process-wide context.
    pub fn product<I>(&self, items: I) -> ColoredString
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        let ctx = context::global_snapshot();
        self.product_in(&ctx, items)
    }

    /// Returns true if `other` compares by text equal to this text.
    ///
    /// Another colored string compares by its uncolored content, whatever
    /// its styling; use `==` to compare styling as well. Unlike ordering,
    /// this never fails: a value without a text form is simply not equal.
    pub fn eq_text<S: ?Sized + TextSource>(&self, other: &S) -> bool {
        other.comparable_text().is_ok_and(|t| t == self.text)
    }

    /// Order this text against the text of `other`.
    ///
    /// Another colored string is ordered by its uncolored content. If
    /// `other` has no text form, [`Error::NonTextComparand`] is returned.
    pub fn compare<S: ?Sized + TextSource>(&self, other: &S) -> Result<Ordering> {
        let other = other
            .comparable_text()
            .map_err(|e| Error::NonTextComparand { reason: e.to_string() })?;
        Ok(self.text.as_str().cmp(&*other))
    }

    pub fn try_lt<S: ?Sized + TextSource>(&self, other: &S) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Less)
    }

    pub fn try_gt<S: ?Sized + TextSource>(&self, other: &S) -> Result<bool> {
        Ok(self.compare(other)? == Ordering::Greater)
    }

    /// `try_lt(other) || eq_text(other)`.
    pub fn try_le<S: ?Sized + TextSource>(&self, other: &S) -> Result<bool> {
        Ok(self.try_lt(other)? || self.eq_text(other))
    }

    /// `try_gt(other) || eq_text(other)`.
    pub fn try_ge<S: ?Sized + TextSource>(&self, other: &S) -> Result<bool> {
        Ok(self.try_gt(other)? || self.eq_text(other))
    }
}

impl TextSource for ColoredString {
    /// A colored string used as the text of another one contributes its
    /// rendered form.
    fn to_text(&self) -> Result<String> {
        Ok(self.render())
    }

    fn to_text_in(&self, ctx: &ColorContext) -> Result<String> {
        Ok(self.render_in(ctx))
    }

    fn comparable_text(&self) -> Result<Cow<'_, str>> {
        Ok(Cow::Borrowed(&self.text))
    }
}

impl fmt::Display for ColoredString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Debug for ColoredString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}-string: '{}'>", self.color, self.text)
    }
}

impl AsRef<str> for ColoredString {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialOrd for ColoredString {
    fn partial_cmp(&self, other: &ColoredString) -> Option<Ordering> {
        Some(self.text.cmp(&other.text))
    }
}

macro_rules! text_comparisons {
    ($($ty:ty),*) => {
        $(
            impl PartialEq<$ty> for ColoredString {
                fn eq(&self, other: &$ty) -> bool {
                    self.text.as_str() == AsRef::<str>::as_ref(other)
                }
            }

            impl PartialEq<ColoredString> for $ty {
                fn eq(&self, other: &ColoredString) -> bool {
                    AsRef::<str>::as_ref(self) == other.text.as_str()
                }
            }

            impl PartialOrd<$ty> for ColoredString {
                fn partial_cmp(&self, other: &$ty) -> Option<Ordering> {
                    Some(self.text.as_str().cmp(AsRef::<str>::as_ref(other)))
                }
            }

            impl PartialOrd<ColoredString> for $ty {
                fn partial_cmp(&self, other: &ColoredString) -> Option<Ordering> {
                    Some(AsRef::<str>::as_ref(self).cmp(other.text.as_str()))
                }
            }
        )*
    };
}

text_comparisons!(str, &str, String);

impl<T: fmt::Display> Add<T> for &ColoredString {
    type Output = String;

    /// The rendered form followed by `rhs`.
    fn add(self, rhs: T) -> String {
        format!("{}{rhs}", self.render())
    }
}

impl<T: fmt::Display> Add<T> for ColoredString {
    type Output = String;

    fn add(self, rhs: T) -> String {
        &self + rhs
    }
}

impl Mul<usize> for &ColoredString {
    type Output = ColoredString;

    fn mul(self, n: usize) -> ColoredString {
        self.repeat(n)
    }
}

impl Mul<usize> for ColoredString {
    type Output = ColoredString;

    fn mul(self, n: usize) -> ColoredString {
        self.repeat(n)
    }
}

impl Mul<&ColoredString> for usize {
    type Output = ColoredString;

    fn mul(self, rhs: &ColoredString) -> ColoredString {
        rhs.repeat(self)
    }
}

impl Mul<ColoredString> for usize {
    type Output = ColoredString;

    fn mul(self, rhs: ColoredString) -> ColoredString {
        rhs.repeat(self)
    }
}

impl<T: fmt::Display> Mul<&[T]> for &ColoredString {
    type Output = ColoredString;

    fn mul(self, items: &[T]) -> ColoredString {
        self.product(items)
    }
}

impl<T: fmt::Display, const N: usize> Mul<[T; N]> for &ColoredString {
    type Output = ColoredString;

    fn mul(self, items: [T; N]) -> ColoredString {
        self.product(items)
    }
}

impl<T: fmt::Display, const N: usize> Mul<[T; N]> for ColoredString {
    type Output = ColoredString;

    fn mul(self, items: [T; N]) -> ColoredString {
        self.product(items)
    }
}
