//! Markup emission.
//!
//! A `.container` div wraps the text element. With a link target the text
//! element is an anchor opened in a new browsing context with a safe `rel`;
//! otherwise it is a plain block. Imperative strategies render an
//! initially-empty content node for the script to fill.

use animar::config::Config;
use animar::preview::PLACEHOLDER;

use crate::compiler::RenderStrategy;
use crate::escape::{escape_attr, escape_html_text};

/// Anchor attributes when the embed is a hyperlink, or an empty string.
fn href_attr(config: &Config) -> String {
    match config.resolved_link() {
        Some(href) => format!(
            r#" href="{}" target="_blank" rel="noopener noreferrer""#,
            escape_attr(&href)
        ),
        None => String::new(),
    }
}

/// Build the markup body for a compiled document.
#[must_use]
pub fn render_markup(config: &Config, strategy: RenderStrategy) -> String {
    let linked = config.resolved_link().is_some();
    let href = href_attr(config);

    match strategy {
        RenderStrategy::Declarative => {
            // Plain text embeds read as a heading; linked ones as an anchor.
            let tag = if linked { "a" } else { "h1" };
            let content = escape_html_text(&config.content);
            format!(r#"<div class="container"><{tag} class="text"{href}>{content}</{tag}></div>"#)
        }
        RenderStrategy::TypewriterScript => {
            let tag = if linked { "a" } else { "div" };
            format!(
                r#"<div class="container"><{tag} class="text" id="typewriter-text"{href}><span id="cursor"></span></{tag}></div>"#
            )
        }
        RenderStrategy::CountdownScript => {
            let tag = if linked { "a" } else { "div" };
            format!(
                r#"<div class="container"><{tag} class="text" id="countdown"{href}>{PLACEHOLDER}</{tag}></div>"#
            )
        }
    }
}
