//! Color state shared by construction and rendering.
//!
//! A [`ColorContext`] bundles the two pieces of state the rest of the crate
//! consults: whether colorization is switched on, and the color override
//! table. The crate keeps one process-wide context behind a lock; the free
//! functions `enable`, `disable`, `replace_colors` and friends operate on it.
//! Contexts can also be built and passed around explicitly, which is how
//! rendering is made deterministic in tests.

use std::collections::HashMap;
use std::env;
use std::io::{self, IsTerminal};
use std::sync::{LazyLock, OnceLock, PoisonError, RwLock};

use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::types::{ColorState, ForeColor};

/// Environment variable that forces `always_color` on every new colored
/// string when set to a non-empty value.
pub const FORCE_COLOR_ENV: &str = "CLINT_FORCE_COLOR";

/// Environment variable set by notebook kernels.
const NOTEBOOK_ENV: &str = "JPY_PARENT_PID";

static GLOBAL: LazyLock<RwLock<ColorContext>> =
    LazyLock::new(|| RwLock::new(ColorContext::new()));

/// The enable flag, the override table and the terminal check.
#[derive(Clone, Debug, Default)]
pub struct ColorContext {
    state: ColorState,
    default_disabled: OnceLock<bool>,
    replacements: HashMap<ForeColor, ForeColor>,
    terminal: Option<bool>,
}

impl ColorContext {
    /// A context in the `Auto` state with an empty override table, probing
    /// stdout for the terminal check.
    pub fn new() -> ColorContext {
        ColorContext::default()
    }

    /// Set the enable state.
    pub fn with_state(mut self, state: ColorState) -> ColorContext {
        self.state = state;
        self
    }

    /// Pin the answer to "is stdout a terminal" instead of probing.
    pub fn with_terminal(mut self, yes: bool) -> ColorContext {
        self.terminal = Some(yes);
        self
    }

    /// The explicit enable state.
    pub fn state(&self) -> ColorState {
        self.state
    }

    pub fn enable(&mut self) {
        self.state = ColorState::Enabled;
    }

    pub fn disable(&mut self) {
        self.state = ColorState::Disabled;
    }

    /// Returns true if colorization is switched off.
    ///
    /// In the `Auto` state this is decided once, from the environment, the
    /// first time it is asked.
    pub fn is_disabled(&self) -> bool {
        match self.state {
            ColorState::Enabled => false,
            ColorState::Disabled => true,
            ColorState::Auto => {
                *self.default_disabled.get_or_init(detect_default_disabled)
            }
        }
    }

    /// Returns true if stdout is a terminal, or the pinned answer.
    pub fn stdout_is_terminal(&self) -> bool {
        self.terminal.unwrap_or_else(|| io::stdout().is_terminal())
    }

    /// Returns true if a string with the given `always_color` flag should be
    /// rendered with escape sequences.
    pub fn should_colorize(&self, always_color: bool) -> bool {
        always_color || (self.stdout_is_terminal() && !self.is_disabled())
    }

    /// The color actually stored when `color` is requested.
    pub fn replacement(&self, color: ForeColor) -> ForeColor {
        self.replacements.get(&color).copied().unwrap_or(color)
    }

    /// The current override table.
    pub fn replacements(&self) -> &HashMap<ForeColor, ForeColor> {
        &self.replacements
    }

    /// Replace the override table.
    ///
    /// Names are matched case insensitively. Every replacement value must be
    /// a color; the first one that is not is reported as
    /// [`Error::InvalidReplacement`] and the table is left as it was. Keys
    /// that are not colors could never be requested, so they are dropped.
    pub fn replace_colors<I, K, V>(&mut self, pairs: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = HashMap::new();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            let to = value.parse::<ForeColor>().map_err(|_| {
                Error::InvalidReplacement { name: value.to_string() }
            })?;
            match key.parse::<ForeColor>() {
                Ok(from) => {
                    table.insert(from, to);
                }
                Err(_) => debug!(key, "ignoring replacement for unknown color"),
            }
        }
        debug!(entries = table.len(), "replaced color table");
        self.replacements = table;
        Ok(())
    }

    /// Replace the override table from a string like
    /// `"magenta=blue, red=green"`.
    ///
    /// An entry without `=` makes the whole call a no-op: a warning is
    /// written to stderr and the table is left unchanged. Invalid color
    /// values are still errors, as with [`ColorContext::replace_colors`].
    pub fn replace_colors_from_str(&mut self, table: &str) -> Result<()> {
        let mut pairs = Vec::new();
        for part in table.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            match part.split_once('=') {
                Some((from, to)) => pairs.push((from.trim(), to.trim())),
                None => {
                    eprintln!(
                        "Warning: replace_colors had no effect, because the \
                         entry '{part}' should be a color=replacement pair."
                    );
                    warn!(entry = part, "malformed color replacement ignored");
                    return Ok(());
                }
            }
        }
        self.replace_colors(pairs)
    }

    /// Empty the override table.
    pub fn reset_replace_colors(&mut self) {
        debug!("reset color table");
        self.replacements.clear();
    }
}

/// Returns true if the `CLINT_FORCE_COLOR` environment variable is set to a
/// non-empty value.
pub fn force_color_requested() -> bool {
    env::var_os(FORCE_COLOR_ENV).is_some_and(|v| !v.is_empty())
}

/// Decide the default enable state from a `TERM` value and whether the
/// process runs inside a notebook.
pub fn default_disabled_for(term: Option<&str>, notebook: bool) -> bool {
    notebook || term == Some("dumb")
}

fn detect_default_disabled() -> bool {
    let term = env::var("TERM").ok();
    let notebook = env::var_os(NOTEBOOK_ENV).is_some();
    let disabled = default_disabled_for(term.as_deref(), notebook);
    debug!(term = term.as_deref(), notebook, disabled, "detected default color state");
    disabled
}

/// Run `f` against the process-wide context.
///
/// `f` must not render or construct colored strings through the global
/// context itself; compute those first and only consult the context here.
pub(crate) fn with_global<R>(f: impl FnOnce(&ColorContext) -> R) -> R {
    let guard = GLOBAL.read().unwrap_or_else(PoisonError::into_inner);
    f(&guard)
}

pub(crate) fn with_global_mut<R>(f: impl FnOnce(&mut ColorContext) -> R) -> R {
    let mut guard = GLOBAL.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// A copy of the process-wide context as it is right now.
pub fn global_snapshot() -> ColorContext {
    with_global(ColorContext::clone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_state_wins() {
        let mut ctx = ColorContext::new().with_terminal(true);
        ctx.disable();
        assert!(ctx.is_disabled());
        assert!(!ctx.should_colorize(false));
        assert!(ctx.should_colorize(true));
        ctx.enable();
        assert!(!ctx.is_disabled());
        assert!(ctx.should_colorize(false));
    }

    #[test]
    fn no_terminal_means_no_color_unless_forced() {
        let ctx = ColorContext::new()
            .with_state(ColorState::Enabled)
            .with_terminal(false);
        assert!(!ctx.should_colorize(false));
        assert!(ctx.should_colorize(true));
    }

    #[test]
    fn default_detection() {
        assert!(default_disabled_for(Some("dumb"), false));
        assert!(!default_disabled_for(Some("xterm-256color"), false));
        assert!(!default_disabled_for(None, false));
        assert!(default_disabled_for(Some("xterm"), true));
    }

    #[test]
    fn replacement_table() {
        let mut ctx = ColorContext::new();
        ctx.replace_colors([("magenta", "blue")]).unwrap();
        assert_eq!(ctx.replacement(ForeColor::Magenta), ForeColor::Blue);
        assert_eq!(ctx.replacement(ForeColor::Red), ForeColor::Red);
        ctx.reset_replace_colors();
        assert_eq!(ctx.replacement(ForeColor::Magenta), ForeColor::Magenta);
    }

    #[test]
    fn invalid_replacement_leaves_table_alone() {
        let mut ctx = ColorContext::new();
        ctx.replace_colors([("red", "green")]).unwrap();
        let err = ctx
            .replace_colors([("blue", "cyan"), ("RED", "INVALID_COLOR")])
            .unwrap_err();
        assert_eq!(
            err,
            Error::InvalidReplacement { name: "INVALID_COLOR".to_string() }
        );
        assert_eq!(ctx.replacement(ForeColor::Red), ForeColor::Green);
        assert_eq!(ctx.replacement(ForeColor::Blue), ForeColor::Blue);
    }

    #[test]
    fn replacement_from_str() {
        let mut ctx = ColorContext::new();
        ctx.replace_colors_from_str("magenta = blue, Red=LIGHTRED_EX").unwrap();
        assert_eq!(ctx.replacement(ForeColor::Magenta), ForeColor::Blue);
        assert_eq!(ctx.replacement(ForeColor::Red), ForeColor::LightRedEx);

        ctx.replace_colors_from_str("cyan").unwrap();
        assert_eq!(ctx.replacements().len(), 2);

        assert!(ctx.replace_colors_from_str("cyan=nope").is_err());
        assert_eq!(ctx.replacements().len(), 2);
    }
}
