//! The link rendering primitive.
//!
//! Builders hand back a [`Link`]; how it is displayed is up to the caller.
//! [`Link::to_html`] renders a plain anchor tag with the text and attribute
//! values HTML-escaped. [`url_with_query`] appends an encoded query string to a
//! base URL the same way a web framework's URL helper would.

use serde::{Deserialize, Serialize};

/// Target attribute that opens the link in a new browsing context
pub const NEW_WINDOW: &str = "_blank";

/// A rendered hyperlink
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub text: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
}

impl Link {
    pub fn new(text: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            href: href.into(),
            target: None,
        }
    }

    #[must_use]
    pub fn with_target(mut self, target: impl Into<String>) -> Self {
        self.target = Some(target.into());
        self
    }

    /// Open in a new browsing context
    #[must_use]
    pub fn in_new_window(self) -> Self {
        self.with_target(NEW_WINDOW)
    }

    /// Render as an HTML anchor
    #[must_use]
    pub fn to_html(&self) -> String {
        match &self.target {
            Some(target) => format!(
                "<a href=\"{}\" target=\"{}\">{}</a>",
                escape_html(&self.href),
                escape_html(target),
                escape_html(&self.text)
            ),
            None => format!(
                "<a href=\"{}\">{}</a>",
                escape_html(&self.href),
                escape_html(&self.text)
            ),
        }
    }
}

impl std::fmt::Display for Link {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_html())
    }
}

/// Escape text for use in HTML content or a quoted attribute
#[must_use]
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Percent-encode a query key or value.
///
/// RFC 3986 encoding, except that `/` is left readable.
#[must_use]
pub fn encode_query_component(s: &str) -> String {
    urlencoding::encode(s).replace("%2F", "/")
}

/// Append `key=value` pairs to a base URL.
///
/// Pairs are joined with `&`. The query is attached with `?`, or with `&` when
/// the base already carries a query string.
#[must_use]
pub fn url_with_query(base: &str, pairs: &[(&str, String)]) -> String {
    if pairs.is_empty() {
        return base.to_string();
    }

    let query = pairs
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                encode_query_component(key),
                encode_query_component(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&");

    let separator = if base.contains('?') { '&' } else { '?' };
    format!("{base}{separator}{query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_html_with_target() {
        let link = Link::new("Chr01", "http://example.org/name/Chr01").in_new_window();
        assert_eq!(
            link.to_html(),
            "<a href=\"http://example.org/name/Chr01\" target=\"_blank\">Chr01</a>"
        );
    }

    #[test]
    fn test_to_html_escapes() {
        let link = Link::new("a<b>", "http://x.org/?a=1&b=\"2\"");
        assert_eq!(
            link.to_html(),
            "<a href=\"http://x.org/?a=1&amp;b=&quot;2&quot;\">a&lt;b&gt;</a>"
        );
    }

    #[test]
    fn test_encode_query_component() {
        assert_eq!(encode_query_component("a b,c"), "a%20b%2Cc");
        assert_eq!(encode_query_component("x/y"), "x/y");
        assert_eq!(encode_query_component("100..200"), "100..200");
    }

    #[test]
    fn test_url_with_query_separator() {
        let pairs = [("ref", "Chr01".to_string()), ("start", "5".to_string())];
        assert_eq!(
            url_with_query("http://x.org/gb", &pairs),
            "http://x.org/gb?ref=Chr01&start=5"
        );
        assert_eq!(
            url_with_query("http://x.org/gb?db=a", &pairs),
            "http://x.org/gb?db=a&ref=Chr01&start=5"
        );
        assert_eq!(url_with_query("http://x.org/gb", &[]), "http://x.org/gb");
    }
}
