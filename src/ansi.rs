//! ANSI escape sequence tables and matchers.
//!
//! This module holds the fore-color and style tables, the wrap step of
//! rendering, and the two patterns used on rendered text: one that spots a
//! previously colorized span embedded in a string, and a broader one that
//! strips any CSI sequence at all.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::types::{ForeColor, Style};

/// Two SGR sequences, some content, two more SGR sequences.
///
/// This is the shape `colorize` produces, so a match is a colored string
/// that was rendered into another one's source.
static WRAPPED_SPAN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:\x1b\[[0-9]+m){2}[^\x1b\n].*(?:\x1b\[[0-9]+m){2}",
    )
    .expect("invalid wrapped span regex")
});

/// Any CSI sequence: introducer, parameter bytes, intermediate bytes, final
/// byte.
static CSI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:\x{9B}|\x1B\[)[0-?]*[ -/]*[@-~]")
        .expect("invalid CSI regex")
});

/// Returns the escape sequence that selects the given foreground color.
pub fn fore_code(color: ForeColor) -> &'static str {
    match color {
        ForeColor::Black => "\x1B[30m",
        ForeColor::Red => "\x1B[31m",
        ForeColor::Green => "\x1B[32m",
        ForeColor::Yellow => "\x1B[33m",
        ForeColor::Blue => "\x1B[34m",
        ForeColor::Magenta => "\x1B[35m",
        ForeColor::Cyan => "\x1B[36m",
        ForeColor::White => "\x1B[37m",
        ForeColor::Reset => "\x1B[39m",
        ForeColor::LightBlackEx => "\x1B[90m",
        ForeColor::LightRedEx => "\x1B[91m",
        ForeColor::LightGreenEx => "\x1B[92m",
        ForeColor::LightYellowEx => "\x1B[93m",
        ForeColor::LightBlueEx => "\x1B[94m",
        ForeColor::LightMagentaEx => "\x1B[95m",
        ForeColor::LightCyanEx => "\x1B[96m",
        ForeColor::LightWhiteEx => "\x1B[97m",
    }
}

/// Returns the escape sequence for the given style.
pub fn style_code(style: Style) -> &'static str {
    match style {
        Style::Bright => "\x1B[1m",
        Style::Dim => "\x1B[2m",
        Style::Normal => "\x1B[22m",
        Style::ResetAll => "\x1B[0m",
    }
}

/// Wraps `text` in the escape sequences for `color` and `bold`.
///
/// The result is always
/// `<color><intensity><text><NORMAL><RESET color>`. Any colorized span
/// already embedded in `text` is followed by the outer color and intensity
/// again, so the outer color resumes where the inner one ended instead of
/// falling back to the terminal default.
pub fn colorize(text: &str, color: ForeColor, bold: bool) -> String {
    let fore = fore_code(color);
    let intensity = style_code(Style::intensity(bold));
    let inner = WRAPPED_SPAN.replace_all(text, |caps: &Captures<'_>| {
        format!("{}{fore}{intensity}", &caps[0])
    });
    format!(
        "{fore}{intensity}{inner}{}{}",
        style_code(Style::Normal),
        fore_code(ForeColor::Reset),
    )
}

/// Returns true if `text` contains a span that looks like a rendered colored
/// string.
pub fn has_wrapped_span(text: &str) -> bool {
    WRAPPED_SPAN.is_match(text)
}

/// Removes every CSI sequence from `text`.
///
/// Stripping is repeated until nothing matches, so a sequence that only
/// appears once its inner neighbour is removed is stripped as well and
/// `clean(&clean(s)) == clean(s)` holds for any input.
pub fn clean(text: &str) -> String {
    let mut current = CSI.replace_all(text, "").into_owned();
    while CSI.is_match(&current) {
        current = CSI.replace_all(&current, "").into_owned();
    }
    current
}
