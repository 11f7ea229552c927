//! Escaping of untrusted user text into embedded contexts.
//!
//! The compiled document interpolates the user's content into three places
//! with different grammars: JavaScript string literals, HTML attribute
//! values, and HTML text. Each gets its own escaper. Getting these wrong is
//! a correctness defect, not a runtime error, so the round-trip law is
//! enforced by tests rather than by a fallible API.

/// Escape text for a double-quoted JavaScript string literal.
///
/// Backslashes are escaped first, then double quotes, then newlines and
/// carriage returns; reversing that order would double-escape the
/// backslashes the later steps introduce. `</` also becomes `<\/` so the
/// literal can never terminate the surrounding inline `<script>` element.
#[must_use]
pub fn escape_js_string(raw: &str) -> String {
    raw.replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace("</", "<\\/")
}

/// Escape text for an HTML text node.
#[must_use]
pub fn escape_html_text(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for a double-quoted HTML attribute value.
#[must_use]
pub fn escape_attr(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Font family as it appears inside the font-resource URL query.
///
/// Every space becomes the `+` join character.
#[must_use]
pub fn font_query_value(family: &str) -> String {
    family.replace(' ', "+")
}
