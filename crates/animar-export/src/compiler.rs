//! The configuration-to-document compiler.
//!
//! [`compile`] is a pure function from a configuration to the three string
//! artifacts of a standalone embed: markup, stylesheet, and an optional
//! behavior script. It reads the same composed style as the preview
//! renderer, which is the design guarantee that the exported document
//! cannot drift from what the user saw.

use animar::compose::compose;
use animar::config::Config;
use animar::effects::{imperative_mode, ImperativeMode};
use serde::{Deserialize, Serialize};

use crate::css::stylesheet;
use crate::escape::font_query_value;
use crate::html::render_markup;
use crate::js::behavior_script;

/// How the document reproduces the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderStrategy {
    /// Stylesheet-driven. Covers every style-only effect mix and the empty
    /// effect set (static styled text).
    Declarative,
    /// Scripted character-by-character reveal (typewriter with wrap).
    TypewriterScript,
    /// Scripted once-per-second countdown rewrite.
    CountdownScript,
}

/// Select the rendering strategy for a configuration.
#[must_use]
pub fn strategy_for(config: &Config) -> RenderStrategy {
    match imperative_mode(config) {
        ImperativeMode::None => RenderStrategy::Declarative,
        ImperativeMode::Typewriter => RenderStrategy::TypewriterScript,
        ImperativeMode::Countdown => RenderStrategy::CountdownScript,
    }
}

/// A compiled, self-contained embed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompiledDocument {
    /// Strategy the document was compiled with
    pub strategy: RenderStrategy,
    /// Font-resource reference for the head
    pub font_link: String,
    /// Stylesheet content (without the `<style>` wrapper)
    pub stylesheet: String,
    /// Markup body
    pub markup: String,
    /// Behavior script blocks, absent when the stylesheet suffices
    pub script: Option<String>,
}

impl CompiledDocument {
    /// Assemble the single portable document.
    ///
    /// Order is fixed: font reference, embedded stylesheet, markup body,
    /// behavior script.
    #[must_use]
    pub fn to_html(&self) -> String {
        let script = match &self.script {
            Some(script) => format!("\n{script}"),
            None => String::new(),
        };
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n{font_link}\n<style>\n{stylesheet}\n</style>\n</head>\n<body>\n{markup}{script}\n</body>\n</html>",
            font_link = self.font_link,
            stylesheet = self.stylesheet,
            markup = self.markup,
        )
    }
}

/// Font-resource reference built from the opaque font family name.
fn font_link(config: &Config) -> String {
    format!(
        r#"<link href="https://fonts.googleapis.com/css2?family={}:wght@400;700&display=swap" rel="stylesheet">"#,
        font_query_value(&config.font_family)
    )
}

/// Compile a configuration into a standalone embed document.
#[must_use]
pub fn compile(config: &Config) -> CompiledDocument {
    let strategy = strategy_for(config);
    let composed = compose(config);

    let document = CompiledDocument {
        strategy,
        font_link: font_link(config),
        stylesheet: stylesheet(config, &composed, strategy),
        markup: render_markup(config, strategy),
        script: behavior_script(config, strategy),
    };
    tracing::debug!(
        ?strategy,
        effects = config.active_effects.len(),
        scripted = document.script.is_some(),
        "compiled embed document"
    );
    document
}
