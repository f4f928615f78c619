//! Escaped HTML fragments.
//!
//! `Markup` can only grow through [`Markup::text`] (escaped) or by appending
//! other `Markup`. Literal tags come from `&'static str` templates, so text
//! received from the user or the server never reaches the page unescaped.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new() -> Self {
        Self(String::new())
    }

    /// Start from a literal template fragment.
    pub fn tag(fragment: &'static str) -> Self {
        Self(fragment.to_string())
    }

    /// Append a literal template fragment.
    pub fn push_tag(&mut self, fragment: &'static str) -> &mut Self {
        self.0.push_str(fragment);
        self
    }

    /// Append arbitrary text, escaped.
    pub fn push_text(&mut self, text: &str) -> &mut Self {
        escape_into(&mut self.0, text);
        self
    }

    /// Append a displayable value (numbers, dates), escaped.
    pub fn push_display(&mut self, value: impl fmt::Display) -> &mut Self {
        self.push_text(&value.to_string())
    }

    pub fn push_markup(&mut self, other: &Markup) -> &mut Self {
        self.0.push_str(&other.0);
        self
    }

    /// Escaped text as a standalone fragment.
    pub fn text(text: &str) -> Self {
        let mut m = Self::new();
        m.push_text(text);
        m
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromIterator<Markup> for Markup {
    fn from_iter<I: IntoIterator<Item = Markup>>(iter: I) -> Self {
        let mut out = Markup::new();
        for m in iter {
            out.push_markup(&m);
        }
        out
    }
}

/// Escape text for use in element content and quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_into(&mut out, text);
    out
}

fn escape_into(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}
