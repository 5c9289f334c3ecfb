//! Errors produced while building, comparing or configuring colored strings.

/// A specialized `Result` for this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong in this crate.
///
/// Every error is local to the call that produced it; nothing here is fatal
/// to the process and nothing is retried.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    /// A color name that is not one of the fore-color keys.
    #[error("invalid color name ({name}) requested")]
    InvalidColor { name: String },

    /// A replacement value handed to the override table is not a color.
    #[error("invalid color name ({name}) requested for replacement")]
    InvalidReplacement { name: String },

    /// The source of a colored string could not be turned into text.
    #[error("failed to convert input to text: {reason}")]
    NotText { reason: String },

    /// An ordering comparison against something that is not text.
    #[error("cannot order a colored string against a non-text value: {reason}")]
    NonTextComparand { reason: String },

    /// `index`/`rindex` did not find the needle.
    #[error("substring not found: '{needle}'")]
    SubstringNotFound { needle: String },

    /// A color state word that is not `auto`, `enabled` or `disabled`.
    #[error(
        "unrecognized color state '{given}': valid choices are: \
         auto, enabled, disabled"
    )]
    InvalidColorState { given: String },
}

impl Error {
    /// Shorthand for [`Error::NotText`], for `TextSource` implementors.
    pub fn not_text(reason: impl Into<String>) -> Error {
        Error::NotText { reason: reason.into() }
    }

    /// Return the offending color name, if this error is about one.
    pub fn invalid_name(&self) -> Option<&str> {
        match self {
            Error::InvalidColor { name }
            | Error::InvalidReplacement { name } => Some(name),
            _ => None,
        }
    }
}
