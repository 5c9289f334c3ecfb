//! Colored strings that keep behaving like strings.
//!
//! A [`ColoredString`] carries text, a foreground color and an intensity. It
//! renders with ANSI escape sequences when printed to a terminal, and
//! otherwise acts like the text it wraps: it can be sliced, split, padded,
//! searched, compared and hashed, and every operation that produces text
//! keeps the original styling.
//!
//! ```
//! use crayons::{ColorContext, ColorState, red};
//!
//! let warning = red("warning", false, true).unwrap();
//! let shout = warning.to_uppercase();
//! assert_eq!(shout, "WARNING");
//! assert!(shout.bold());
//!
//! let tty = ColorContext::new()
//!     .with_state(ColorState::Enabled)
//!     .with_terminal(true);
//! assert_eq!(shout.render_in(&tty), "\x1b[31m\x1b[1mWARNING\x1b[22m\x1b[39m");
//! ```
//!
//! Whether escape sequences are emitted is decided by a process-wide
//! [`ColorContext`], switched with [`enable`] and [`disable`], or by an
//! explicit one passed to the `*_in` methods.

pub mod ansi;
mod colored;
mod context;
mod error;
mod functions;
mod ops;
mod reshape;
pub mod text;
mod traits;
mod types;

// Re-export core traits and types
pub use colored::ColoredString;
pub use context::{
    ColorContext, FORCE_COLOR_ENV, default_disabled_for, force_color_requested,
    global_snapshot,
};
pub use error::{Error, Result};
pub use functions::{
    ColorFunction, black, blue, clean, cyan, disable, enable, green,
    is_disabled, lightblack_ex, lightblue_ex, lightcyan_ex, lightgreen_ex,
    lightmagenta_ex, lightred_ex, lightwhite_ex, lightyellow_ex, magenta,
    normal, random, random_in, red, replace_colors, replace_colors_from_str,
    reset_replace_colors, white, yellow,
};
pub use reshape::{Reshaped, TextResult};
pub use text::TranslationTable;
pub use traits::{Displayed, TextSource};
pub use types::{COLORS, ColorState, ForeColor, Style};
