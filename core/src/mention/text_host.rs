// Copyright (c) 2026 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::CaretSpan;

/// The editable text widget that owns the text buffer and the caret. The scanner only
/// reads a snapshot of it: the full text, and the caret span, if there is one (eg: a
/// widget that does not have focus might not have a caret).
pub trait TextHost {
    fn text(&self) -> &str;

    fn caret_span(&self) -> Option<CaretSpan>;
}

/// An owned [`TextHost`], for tests and for the `mention` binary.
///
/// ```
/// use r3bl_mention::{CaretSpan, TextHost, TextSnapshot};
///
/// let host = TextSnapshot::new("hi @bo").with_caret_at_end();
/// assert_eq!(host.caret_span(), Some(CaretSpan::collapsed(6)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextSnapshot {
    pub text: String,
    pub caret_span: Option<CaretSpan>,
}

impl TextSnapshot {
    /// A snapshot with no caret.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            caret_span: None,
        }
    }

    #[must_use]
    pub fn with_caret_span(mut self, caret_span: impl Into<CaretSpan>) -> Self {
        self.caret_span = Some(caret_span.into());
        self
    }

    /// Collapsed caret after the last UTF-16 code unit of the text.
    #[must_use]
    pub fn with_caret_at_end(self) -> Self {
        let end = self.text.encode_utf16().count();
        self.with_caret_span(CaretSpan::collapsed(end))
    }
}

impl TextHost for TextSnapshot {
    fn text(&self) -> &str { &self.text }

    fn caret_span(&self) -> Option<CaretSpan> { self.caret_span }
}

impl<T: TextHost + ?Sized> TextHost for &T {
    fn text(&self) -> &str { (**self).text() }

    fn caret_span(&self) -> Option<CaretSpan> { (**self).caret_span() }
}
