use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::context::ColorContext;
use crate::error::{Error, Result};

/// This trait describes values that can serve as the text of a colored
/// string.
///
/// It has a single operation: produce the text. The conversion may fail, in
/// which case construction of a colored string fails with
/// [`Error::NotText`] and comparisons treat the value as a non-text
/// comparand.
///
/// Implementations are provided for string types, characters, numbers,
/// booleans, UTF-8 byte buffers and colored strings themselves. Any other
/// `Display` type can be passed through [`Displayed`].
pub trait TextSource {
    /// Convert this value to text.
    ///
    /// If the value has no text form, an error is returned.
    fn to_text(&self) -> Result<String>;

    /// Convert this value to text, rendering against `ctx` where rendering
    /// applies.
    fn to_text_in(&self, _ctx: &ColorContext) -> Result<String> {
        self.to_text()
    }

    /// The text this value is compared by.
    ///
    /// This is the text form, except for colored strings, which compare by
    /// their uncolored content.
    fn comparable_text(&self) -> Result<Cow<'_, str>> {
        self.to_text().map(Cow::Owned)
    }
}

impl TextSource for str {
    fn to_text(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl TextSource for String {
    fn to_text(&self) -> Result<String> {
        Ok(self.clone())
    }
}

impl TextSource for Cow<'_, str> {
    fn to_text(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl TextSource for char {
    fn to_text(&self) -> Result<String> {
        Ok(self.to_string())
    }
}

impl TextSource for [u8] {
    fn to_text(&self) -> Result<String> {
        std::str::from_utf8(self)
            .map(str::to_string)
            .map_err(|e| Error::not_text(format!("bytes are not UTF-8: {e}")))
    }
}

impl TextSource for Vec<u8> {
    fn to_text(&self) -> Result<String> {
        self.as_slice().to_text()
    }
}

impl<T: TextSource> TextSource for Option<T> {
    fn to_text(&self) -> Result<String> {
        match self {
            Some(inner) => inner.to_text(),
            None => Err(Error::not_text("value is None")),
        }
    }

    fn to_text_in(&self, ctx: &ColorContext) -> Result<String> {
        match self {
            Some(inner) => inner.to_text_in(ctx),
            None => Err(Error::not_text("value is None")),
        }
    }

    fn comparable_text(&self) -> Result<Cow<'_, str>> {
        match self {
            Some(inner) => inner.comparable_text(),
            None => Err(Error::not_text("value is None")),
        }
    }
}

macro_rules! display_sources {
    ($($ty:ty),* $(,)?) => {
        $(
            impl TextSource for $ty {
                fn to_text(&self) -> Result<String> {
                    Ok(self.to_string())
                }
            }
        )*
    };
}

display_sources!(
    bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize,
    f32, f64,
);

impl<T: ?Sized + TextSource> TextSource for &T {
    fn to_text(&self) -> Result<String> {
        (**self).to_text()
    }

    fn to_text_in(&self, ctx: &ColorContext) -> Result<String> {
        (**self).to_text_in(ctx)
    }

    fn comparable_text(&self) -> Result<Cow<'_, str>> {
        (**self).comparable_text()
    }
}

impl<T: ?Sized + TextSource> TextSource for &mut T {
    fn to_text(&self) -> Result<String> {
        (**self).to_text()
    }

    fn to_text_in(&self, ctx: &ColorContext) -> Result<String> {
        (**self).to_text_in(ctx)
    }

    fn comparable_text(&self) -> Result<Cow<'_, str>> {
        (**self).comparable_text()
    }
}

impl<T: ?Sized + TextSource> TextSource for Box<T> {
    fn to_text(&self) -> Result<String> {
        (**self).to_text()
    }

    fn to_text_in(&self, ctx: &ColorContext) -> Result<String> {
        (**self).to_text_in(ctx)
    }

    fn comparable_text(&self) -> Result<Cow<'_, str>> {
        (**self).comparable_text()
    }
}

impl<T: ?Sized + TextSource> TextSource for Rc<T> {
    fn to_text(&self) -> Result<String> {
        (**self).to_text()
    }

    fn to_text_in(&self, ctx: &ColorContext) -> Result<String> {
        (**self).to_text_in(ctx)
    }

    fn comparable_text(&self) -> Result<Cow<'_, str>> {
        (**self).comparable_text()
    }
}

impl<T: ?Sized + TextSource> TextSource for Arc<T> {
    fn to_text(&self) -> Result<String> {
        (**self).to_text()
    }

    fn to_text_in(&self, ctx: &ColorContext) -> Result<String> {
        (**self).to_text_in(ctx)
    }

    fn comparable_text(&self) -> Result<Cow<'_, str>> {
        (**self).comparable_text()
    }
}

/// Adapts any `Display` value into a [`TextSource`].
///
/// Formatting errors surface as [`Error::NotText`].
#[derive(Clone, Copy, Debug)]
pub struct Displayed<T>(pub T);

impl<T: fmt::Display> TextSource for Displayed<T> {
    fn to_text(&self) -> Result<String> {
        use std::fmt::Write;

        let mut out = String::new();
        write!(out, "{}", self.0)
            .map_err(|_| Error::not_text("Display implementation failed"))?;
        Ok(out)
    }
}
