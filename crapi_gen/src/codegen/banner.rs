use crate::errors::{GenError, GenResult};
use std::borrow::Cow;
use std::path::Path;

/// Copyright notice every generated C file starts with.
pub const STANFORD_COPYRIGHT: &str = "/* Copyright (c) 2001, Stanford University
    All rights reserved.

    See the file LICENSE.txt for information on redistributing this software. */
";

/// Banner text placed verbatim at the top of a generated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyrightBanner {
    text: String,
}

impl CopyrightBanner {
    pub fn stanford() -> Self {
        Self::custom(STANFORD_COPYRIGHT)
    }

    pub fn custom(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn from_file(path: &Path) -> GenResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| GenError::Banner {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::custom(text))
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Banner as emitted: unchanged, except that a non-empty banner always
    /// ends in a newline so the next line starts on its own.
    pub fn render(&self) -> Cow<'_, str> {
        if self.text.is_empty() || self.text.ends_with('\n') {
            Cow::Borrowed(&self.text)
        } else {
            Cow::Owned(format!("{}\n", self.text))
        }
    }
}

impl Default for CopyrightBanner {
    fn default() -> Self {
        Self::stanford()
    }
}
