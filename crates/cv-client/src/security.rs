//! Security utilities for Cvent SOAP operations.
//!
//! All values interpolated into an envelope go through [`xml::escape`].
//! Anything that may reach an error message or a log line goes through
//! [`redact`] first.

/// Marker substituted for redacted values.
pub const REDACTED: &str = "[REDACTED]";

/// XML escaping utilities for SOAP envelopes.
pub mod xml {
    /// Escape a string for safe inclusion in XML content or attribute values.
    ///
    /// This escapes the five predefined XML entities.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cvent_client::security::xml;
    ///
    /// let safe = xml::escape("Hello <World> & 'Friends'");
    /// assert_eq!(safe, "Hello &lt;World&gt; &amp; &apos;Friends&apos;");
    /// ```
    #[must_use]
    pub fn escape(value: &str) -> String {
        let mut escaped = String::with_capacity(value.len() + 16);
        for ch in value.chars() {
            match ch {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                '"' => escaped.push_str("&quot;"),
                '\'' => escaped.push_str("&apos;"),
                _ => escaped.push(ch),
            }
        }
        escaped
    }

    /// Whether `name` is usable as an element or attribute name.
    ///
    /// Parameter tree keys become tag names verbatim, so they must not
    /// carry markup.
    #[must_use]
    pub fn is_safe_name(name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    }
}

/// Redaction utilities for credential values.
pub mod redact {
    use super::REDACTED;

    /// Elements whose text content is a credential.
    pub const SENSITIVE_ELEMENTS: &[&str] = &[
        "AccountNumber",
        "UserName",
        "Password",
        "CventSessionValue",
    ];

    /// Replace every occurrence of each non-empty secret with `[REDACTED]`.
    ///
    /// Each secret is also matched in its XML-escaped form, since request
    /// envelopes end up in fault reports. Longer patterns are replaced
    /// first so a secret that contains another leaves no remainder.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cvent_client::security::redact;
    ///
    /// let text = redact::scrub("login failed for bob/hunter2", &["bob", "hunter2"]);
    /// assert_eq!(text, "login failed for [REDACTED]/[REDACTED]");
    /// ```
    #[must_use]
    pub fn scrub(text: &str, secrets: &[&str]) -> String {
        let mut patterns: Vec<String> = secrets
            .iter()
            .filter(|s| !s.is_empty())
            .flat_map(|s| [s.to_string(), super::xml::escape(s)])
            .collect();
        patterns.sort_by(|a, b| b.len().cmp(&a.len()));
        patterns.dedup();

        let mut scrubbed = text.to_string();
        for pattern in &patterns {
            scrubbed = scrubbed.replace(pattern.as_str(), REDACTED);
        }
        scrubbed
    }

    /// Blank the text content of [`SENSITIVE_ELEMENTS`] in an XML document.
    ///
    /// Matches both unprefixed and prefixed tags (`<Password>`,
    /// `<ns:Password>`).
    #[must_use]
    pub fn envelope(xml: &str) -> String {
        let mut redacted = xml.to_string();
        for name in SENSITIVE_ELEMENTS {
            redacted = redact_element(&redacted, name);
        }
        redacted
    }

    fn redact_element(xml: &str, name: &str) -> String {
        let mut out = String::with_capacity(xml.len());
        let mut rest = xml;

        while let Some((content_start, close)) = find_open_tag(rest, name) {
            out.push_str(&rest[..content_start]);
            let remaining = &rest[content_start..];
            match remaining.find(&close) {
                Some(end) => {
                    out.push_str(REDACTED);
                    out.push_str(&close);
                    rest = &remaining[end + close.len()..];
                }
                None => {
                    out.push_str(REDACTED);
                    rest = "";
                }
            }
        }

        out.push_str(rest);
        out
    }

    /// Find `<name>` or `<prefix:name>`; returns the offset just past the
    /// opening tag and the matching closing tag.
    fn find_open_tag(xml: &str, name: &str) -> Option<(usize, String)> {
        let mut search_from = 0;
        while let Some(idx) = xml[search_from..].find('<') {
            let start = search_from + idx;
            let tag_end = start + xml[start..].find('>')?;
            let tag = &xml[start + 1..tag_end];
            let qualified = tag.split_whitespace().next().unwrap_or("");
            let local = qualified.rsplit(':').next().unwrap_or(qualified);

            if local == name && !tag.starts_with('/') && !tag.ends_with('/') {
                return Some((tag_end + 1, format!("</{}>", qualified)));
            }
            search_from = tag_end + 1;
        }
        None
    }
}
