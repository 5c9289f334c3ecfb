use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// The lowercase names of the sixteen selectable colors.
///
/// `normal` is not in this set: it resets to the terminal's own color rather
/// than selecting one.
pub const COLORS: [&str; 16] = [
    "black",
    "blue",
    "cyan",
    "green",
    "lightblack_ex",
    "lightblue_ex",
    "lightcyan_ex",
    "lightgreen_ex",
    "lightmagenta_ex",
    "lightred_ex",
    "lightwhite_ex",
    "lightyellow_ex",
    "magenta",
    "red",
    "white",
    "yellow",
];

/// A foreground color key.
///
/// This is the full set of keys of the fore-color table: the eight standard
/// colors, their eight light variants, and `Reset` which selects the
/// terminal's default foreground.
///
/// This type has a `FromStr` impl that matches the uppercase key names case
/// insensitively, so `"red"`, `"Red"` and `"RED"` all parse to `Red`, and
/// `"lightblue_ex"` parses to `LightBlueEx`.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum ForeColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Reset,
    LightBlackEx,
    LightRedEx,
    LightGreenEx,
    LightYellowEx,
    LightBlueEx,
    LightMagentaEx,
    LightCyanEx,
    LightWhiteEx,
}

impl ForeColor {
    /// Every key of the fore-color table, `Reset` included.
    pub const ALL: [ForeColor; 17] = [
        ForeColor::Black,
        ForeColor::Red,
        ForeColor::Green,
        ForeColor::Yellow,
        ForeColor::Blue,
        ForeColor::Magenta,
        ForeColor::Cyan,
        ForeColor::White,
        ForeColor::Reset,
        ForeColor::LightBlackEx,
        ForeColor::LightRedEx,
        ForeColor::LightGreenEx,
        ForeColor::LightYellowEx,
        ForeColor::LightBlueEx,
        ForeColor::LightMagentaEx,
        ForeColor::LightCyanEx,
        ForeColor::LightWhiteEx,
    ];

    /// The uppercase table key, e.g. `"LIGHTRED_EX"`.
    pub fn key(self) -> &'static str {
        match self {
            ForeColor::Black => "BLACK",
            ForeColor::Red => "RED",
            ForeColor::Green => "GREEN",
            ForeColor::Yellow => "YELLOW",
            ForeColor::Blue => "BLUE",
            ForeColor::Magenta => "MAGENTA",
            ForeColor::Cyan => "CYAN",
            ForeColor::White => "WHITE",
            ForeColor::Reset => "RESET",
            ForeColor::LightBlackEx => "LIGHTBLACK_EX",
            ForeColor::LightRedEx => "LIGHTRED_EX",
            ForeColor::LightGreenEx => "LIGHTGREEN_EX",
            ForeColor::LightYellowEx => "LIGHTYELLOW_EX",
            ForeColor::LightBlueEx => "LIGHTBLUE_EX",
            ForeColor::LightMagentaEx => "LIGHTMAGENTA_EX",
            ForeColor::LightCyanEx => "LIGHTCYAN_EX",
            ForeColor::LightWhiteEx => "LIGHTWHITE_EX",
        }
    }

    /// The escape sequence that selects this color.
    pub fn code(self) -> &'static str {
        crate::ansi::fore_code(self)
    }

    /// Returns true for `Reset`, the only key that is not one of [`COLORS`].
    pub fn is_reset(self) -> bool {
        self == ForeColor::Reset
    }
}

impl fmt::Display for ForeColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ForeColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<ForeColor, Error> {
        let upper = s.to_uppercase();
        ForeColor::ALL
            .into_iter()
            .find(|c| c.key() == upper)
            .ok_or_else(|| Error::InvalidColor { name: s.to_string() })
    }
}

/// An intensity/style key of the style table.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Style {
    Bright,
    Dim,
    Normal,
    ResetAll,
}

impl Style {
    /// The uppercase table key, e.g. `"RESET_ALL"`.
    pub fn key(self) -> &'static str {
        match self {
            Style::Bright => "BRIGHT",
            Style::Dim => "DIM",
            Style::Normal => "NORMAL",
            Style::ResetAll => "RESET_ALL",
        }
    }

    /// The escape sequence for this style.
    pub fn code(self) -> &'static str {
        crate::ansi::style_code(self)
    }

    /// The intensity a colored string opens with.
    pub fn intensity(bold: bool) -> Style {
        if bold { Style::Bright } else { Style::Normal }
    }
}

/// Whether colorization has been switched on or off process-wide.
///
/// The `Default` implementation for this type will select `Auto`, which
/// defers to a one-time look at the environment.
///
/// The `FromStr` implementation accepts `auto`, `enabled` and `disabled`,
/// case insensitively. Any other string results in an error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum ColorState {
    /// Never set explicitly; the environment decides.
    #[default]
    Auto,
    /// Set by `enable()`.
    Enabled,
    /// Set by `disable()`.
    Disabled,
}

impl FromStr for ColorState {
    type Err = Error;

    fn from_str(s: &str) -> Result<ColorState, Error> {
        match s.to_lowercase().as_str() {
            "auto" => Ok(ColorState::Auto),
            "enabled" => Ok(ColorState::Enabled),
            "disabled" => Ok(ColorState::Disabled),
            unknown => {
                Err(Error::InvalidColorState { given: unknown.to_string() })
            }
        }
    }
}

impl fmt::Display for ColorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorState::Auto => "auto",
            ColorState::Enabled => "enabled",
            ColorState::Disabled => "disabled",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("red".parse::<ForeColor>(), Ok(ForeColor::Red));
        assert_eq!("Red".parse::<ForeColor>(), Ok(ForeColor::Red));
        assert_eq!("lightBlue_ex".parse::<ForeColor>(), Ok(ForeColor::LightBlueEx));
        assert_eq!("reset".parse::<ForeColor>(), Ok(ForeColor::Reset));
    }

    #[test]
    fn parse_rejects_unknown_names() {
        let err = "not_a_color".parse::<ForeColor>().unwrap_err();
        assert_eq!(err, Error::InvalidColor { name: "not_a_color".to_string() });
    }

    #[test]
    fn colors_are_every_key_but_reset() {
        let from_all: Vec<String> = ForeColor::ALL
            .into_iter()
            .filter(|c| !c.is_reset())
            .map(|c| c.key().to_lowercase())
            .collect();
        let mut sorted = from_all.clone();
        sorted.sort();
        assert_eq!(sorted, COLORS.to_vec());
        for name in COLORS {
            assert!(name.parse::<ForeColor>().is_ok(), "{name}");
        }
    }

    #[test]
    fn display_is_the_key() {
        assert_eq!(ForeColor::LightMagentaEx.to_string(), "LIGHTMAGENTA_EX");
        assert_eq!(Style::ResetAll.key(), "RESET_ALL");
    }

    #[test]
    fn color_state_round_trips_through_strings() {
        for state in [ColorState::Auto, ColorState::Enabled, ColorState::Disabled] {
            assert_eq!(state.to_string().parse::<ColorState>(), Ok(state));
        }
        assert_eq!("DISABLED".parse::<ColorState>(), Ok(ColorState::Disabled));
        assert!("sometimes".parse::<ColorState>().is_err());
        assert_eq!(ColorState::default(), ColorState::Auto);
    }
}
