use std::borrow::Cow;

/// One raw coordinate value, as lifted out of a Gerber/drill command
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawToken<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> RawToken<'a> {
    /// Textual form used for digit splitting.
    ///
    /// Numbers use `f64`'s `Display`, which never switches to exponent
    /// notation; `NaN` and infinities come out as non-digit text.
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            RawToken::Text(text) => Cow::Borrowed(text),
            RawToken::Number(value) => Cow::Owned(value.to_string()),
        }
    }
}

impl<'a> From<&'a str> for RawToken<'a> {
    fn from(text: &'a str) -> Self {
        RawToken::Text(text)
    }
}

impl<'a> From<&'a String> for RawToken<'a> {
    fn from(text: &'a String) -> Self {
        RawToken::Text(text.as_str())
    }
}

impl From<f64> for RawToken<'_> {
    fn from(value: f64) -> Self {
        RawToken::Number(value)
    }
}

impl From<i64> for RawToken<'_> {
    fn from(value: i64) -> Self {
        RawToken::Number(value as f64)
    }
}
