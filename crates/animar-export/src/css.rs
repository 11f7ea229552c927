//! Stylesheet emission.
//!
//! Serializes the composed style into the embed's `<style>` block: page
//! layout, the text rule, the caret rule when the multi-line typewriter is
//! scripted, and every referenced keyframe definition exactly once.

use animar::compose::{ComposedStyle, CARET_BLINK_SECONDS};
use animar::config::Config;
use animar::keyframes::KeyframeId;

use crate::compiler::RenderStrategy;

/// Render one rule with the standard indentation.
#[must_use]
pub fn render_rule(selector: &str, declarations: &[(String, String)]) -> String {
    if declarations.is_empty() {
        return String::new();
    }
    let decls = declarations
        .iter()
        .map(|(prop, val)| format!("    {prop}: {val};"))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{selector} {{\n{decls}\n}}")
}

fn body_rule(config: &Config) -> String {
    let background = if config.background_transparent {
        "transparent".to_string()
    } else {
        config.background_color.clone()
    };
    let declarations = vec![
        ("margin".to_string(), "0".to_string()),
        ("padding".to_string(), "20px".to_string()),
        ("display".to_string(), "flex".to_string()),
        ("flex-direction".to_string(), "column".to_string()),
        (
            "justify-content".to_string(),
            config.vertical_align.flex_css().to_string(),
        ),
        ("align-items".to_string(), "stretch".to_string()),
        ("min-height".to_string(), "100vh".to_string()),
        ("background-color".to_string(), background),
        (
            "font-family".to_string(),
            format!("'{}', sans-serif", config.font_family),
        ),
        ("overflow".to_string(), "hidden".to_string()),
        ("box-sizing".to_string(), "border-box".to_string()),
    ];
    render_rule("body", &declarations)
}

fn container_rule(config: &Config) -> String {
    let declarations = vec![
        ("width".to_string(), "100%".to_string()),
        (
            "text-align".to_string(),
            config.horizontal_align.css().to_string(),
        ),
    ];
    render_rule(".container", &declarations)
}

fn text_rule(config: &Config, composed: &ComposedStyle, strategy: RenderStrategy) -> String {
    let mut declarations = composed.declarations.clone();
    if strategy == RenderStrategy::TypewriterScript {
        // The scripted reveal flows as a block, same as the preview buffer.
        declarations.push(("display".to_string(), "block".to_string()));
    }
    if let Some(shorthand) = composed.animation_shorthand() {
        declarations.push(("animation".to_string(), shorthand));
        if config.defer_until_visible {
            declarations.push(("animation-play-state".to_string(), "paused".to_string()));
        }
    }
    render_rule(".text", &declarations)
}

fn cursor_rule(config: &Config) -> String {
    let declarations = vec![
        ("display".to_string(), "inline-block".to_string()),
        ("width".to_string(), "0.15em".to_string()),
        ("height".to_string(), "1em".to_string()),
        ("background-color".to_string(), config.text_color.clone()),
        ("margin-left".to_string(), "1px".to_string()),
        ("vertical-align".to_string(), "baseline".to_string()),
        (
            "animation".to_string(),
            format!("blink-caret-opacity {CARET_BLINK_SECONDS}s step-end infinite"),
        ),
    ];
    render_rule("#cursor", &declarations)
}

/// Build the full stylesheet for a compiled document.
#[must_use]
pub fn stylesheet(config: &Config, composed: &ComposedStyle, strategy: RenderStrategy) -> String {
    let mut sections = vec![
        body_rule(config),
        container_rule(config),
        text_rule(config, composed, strategy),
    ];

    let mut keyframes = composed.referenced_keyframes();
    if strategy == RenderStrategy::TypewriterScript {
        // The caret span animates even though the reveal itself is scripted.
        if !keyframes.contains(&KeyframeId::BlinkCaretOpacity) {
            keyframes.push(KeyframeId::BlinkCaretOpacity);
        }
        sections.push(cursor_rule(config));
    }
    for id in keyframes {
        sections.push(id.render(config));
    }

    sections.join("\n\n")
}
