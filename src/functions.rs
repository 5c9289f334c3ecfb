//! Color constructors and the process-wide switches.
//!
//! Each color has a free function, `red(text, always, bold)` and so on, that
//! builds a [`ColoredString`] against the process-wide context. The same
//! constructors are available as [`ColorFunction`] values for callers that
//! pick a color at runtime. `enable`, `disable` and the `replace_colors`
//! family change the process-wide context that all of them read.

use std::sync::{LazyLock, Mutex, PoisonError};

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use tracing::debug;

use crate::ansi;
use crate::colored::ColoredString;
use crate::context::{self, ColorContext};
use crate::error::Result;
use crate::text;
use crate::traits::TextSource;
use crate::types::{COLORS, ForeColor};

/// Seeded once, the first time a random color is picked.
static RNG: LazyLock<Mutex<StdRng>> =
    LazyLock::new(|| Mutex::new(StdRng::from_os_rng()));

/// A constructor with its color fixed.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ColorFunction {
    name: &'static str,
    color: ForeColor,
    description: &'static str,
}

const COLOR_DESCRIPTION: &str = "Wraps text in this color when printed to a \
    compatible terminal, keeping ordinary string behavior.";

const NORMAL_DESCRIPTION: &str = "Wraps text in the terminal's default \
    color, so it reads as plain text next to colored text while keeping \
    ordinary string behavior.";

impl ColorFunction {
    const fn new(name: &'static str, color: ForeColor) -> ColorFunction {
        let description = if matches!(color, ForeColor::Reset) {
            NORMAL_DESCRIPTION
        } else {
            COLOR_DESCRIPTION
        };
        ColorFunction { name, color, description }
    }

    /// Every constructor: the sixteen colors, then `normal`.
    pub const ALL: [ColorFunction; 17] = [
        ColorFunction::new("black", ForeColor::Black),
        ColorFunction::new("blue", ForeColor::Blue),
        ColorFunction::new("cyan", ForeColor::Cyan),
        ColorFunction::new("green", ForeColor::Green),
        ColorFunction::new("magenta", ForeColor::Magenta),
        ColorFunction::new("red", ForeColor::Red),
        ColorFunction::new("white", ForeColor::White),
        ColorFunction::new("yellow", ForeColor::Yellow),
        ColorFunction::new("lightblack_ex", ForeColor::LightBlackEx),
        ColorFunction::new("lightblue_ex", ForeColor::LightBlueEx),
        ColorFunction::new("lightcyan_ex", ForeColor::LightCyanEx),
        ColorFunction::new("lightgreen_ex", ForeColor::LightGreenEx),
        ColorFunction::new("lightmagenta_ex", ForeColor::LightMagentaEx),
        ColorFunction::new("lightred_ex", ForeColor::LightRedEx),
        ColorFunction::new("lightwhite_ex", ForeColor::LightWhiteEx),
        ColorFunction::new("lightyellow_ex", ForeColor::LightYellowEx),
        ColorFunction::new("normal", ForeColor::Reset),
    ];

    /// Find a constructor by its lowercase name.
    pub fn by_name(name: &str) -> Option<ColorFunction> {
        let name = text::casefold(name);
        ColorFunction::ALL.into_iter().find(|f| f.name == name)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// The color requested on every call, before any override.
    pub fn color(&self) -> ForeColor {
        self.color
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Color `text` with neither `always` nor `bold`.
    pub fn call<S: ?Sized + TextSource>(&self, text: &S) -> Result<ColoredString> {
        self.call_with(text, false, false)
    }

    pub fn call_with<S: ?Sized + TextSource>(
        &self,
        text: &S,
        always: bool,
        bold: bool,
    ) -> Result<ColoredString> {
        ColoredString::from_color(self.color, text, always, bold)
    }
}

macro_rules! color_functions {
    ($($name:ident => $color:ident),* $(,)?) => {
        $(
            #[doc = concat!("Color `text` ", stringify!($name), ".")]
            pub fn $name<S: ?Sized + TextSource>(
                text: &S,
                always: bool,
                bold: bool,
            ) -> Result<ColoredString> {
                ColoredString::from_color(ForeColor::$color, text, always, bold)
            }
        )*
    };
}

color_functions! {
    black => Black,
    blue => Blue,
    cyan => Cyan,
    green => Green,
    magenta => Magenta,
    red => Red,
    white => White,
    yellow => Yellow,
    lightblack_ex => LightBlackEx,
    lightblue_ex => LightBlueEx,
    lightcyan_ex => LightCyanEx,
    lightgreen_ex => LightGreenEx,
    lightmagenta_ex => LightMagentaEx,
    lightred_ex => LightRedEx,
    lightwhite_ex => LightWhiteEx,
    lightyellow_ex => LightYellowEx,
}

/// Wrap `text` in the terminal's default color.
///
/// Useful next to colored text: `red("Error")` followed by
/// `normal(" - details")` prints only the first part in red, and the second
/// in whatever color the terminal uses by default.
pub fn normal<S: ?Sized + TextSource>(
    text: &S,
    always: bool,
    bold: bool,
) -> Result<ColoredString> {
    ColoredString::from_color(ForeColor::Reset, text, always, bold)
}

/// Color `text` with a color picked uniformly at random.
///
/// The pick is made among `colors`, matched case insensitively against
/// [`COLORS`]; names that are not colors are ignored. If `colors` is `None`
/// or none of its names is a color, the pick is made among all of
/// [`COLORS`].
pub fn random<S: ?Sized + TextSource>(
    text: &S,
    always: bool,
    bold: bool,
    colors: Option<&[&str]>,
) -> Result<ColoredString> {
    ColoredString::new(pick_color(colors), text, always, bold)
}

/// Like [`random`], with an explicit context.
pub fn random_in<S: ?Sized + TextSource>(
    ctx: &ColorContext,
    text: &S,
    always: bool,
    bold: bool,
    colors: Option<&[&str]>,
) -> Result<ColoredString> {
    ColoredString::new_in(ctx, pick_color(colors), text, always, bold)
}

fn pick_color(colors: Option<&[&str]>) -> &'static str {
    let mut candidates: Vec<&'static str> = colors
        .unwrap_or(&COLORS)
        .iter()
        .filter_map(|c| {
            let c = text::casefold(c);
            COLORS.iter().copied().find(|known| *known == c)
        })
        .collect();
    candidates.sort_unstable();
    candidates.dedup();
    if candidates.is_empty() {
        candidates = COLORS.to_vec();
    }
    let mut rng = RNG.lock().unwrap_or_else(PoisonError::into_inner);
    candidates.choose(&mut *rng).copied().unwrap_or(COLORS[0])
}

/// Turn colorization on for strings that are not `always_color`.
pub fn enable() {
    context::with_global_mut(ColorContext::enable);
    debug!("colors enabled");
}

/// Turn colorization off for strings that are not `always_color`.
pub fn disable() {
    context::with_global_mut(ColorContext::disable);
    debug!("colors disabled");
}

/// Returns true if the process-wide context has colorization switched off.
pub fn is_disabled() -> bool {
    context::with_global(ColorContext::is_disabled)
}

/// Replace the process-wide override table.
///
/// See [`ColorContext::replace_colors`].
pub fn replace_colors<I, K, V>(pairs: I) -> Result<()>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    context::with_global_mut(|ctx| ctx.replace_colors(pairs))
}

/// Replace the process-wide override table from a string like
/// `"magenta=blue, red=green"`.
///
/// See [`ColorContext::replace_colors_from_str`].
pub fn replace_colors_from_str(table: &str) -> Result<()> {
    context::with_global_mut(|ctx| ctx.replace_colors_from_str(table))
}

/// Empty the process-wide override table.
pub fn reset_replace_colors() {
    context::with_global_mut(ColorContext::reset_replace_colors);
}

/// Remove every ANSI escape sequence from `text`.
pub fn clean(text: &str) -> String {
    ansi::clean(text)
}
