//! The style compositor.
//!
//! [`compose`] is the single source of truth for *what* the animated
//! element looks like. The preview renderer and the document compiler are
//! thin backends over its output, which is what keeps them visually
//! identical: they can only differ in how the composed style is delivered,
//! never in the style itself.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::effects::{AnimationRef, EffectId};
use crate::keyframes::KeyframeId;

/// Caret blink period in seconds. Fixed: the caret blinks for the lifetime
/// of the element, not just during the reveal, so it is independent of the
/// configured duration.
pub const CARET_BLINK_SECONDS: f64 = 0.75;

/// The merged style for the text element plus its ordered animation refs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedStyle {
    /// Ordered CSS declarations. Later effects have already won any
    /// property collisions.
    pub declarations: Vec<(String, String)>,
    /// Animation refs in effect-selection order.
    pub animations: Vec<AnimationRef>,
}

impl ComposedStyle {
    /// The `animation` shorthand value, or `None` when no effect animates.
    #[must_use]
    pub fn animation_shorthand(&self) -> Option<String> {
        if self.animations.is_empty() {
            return None;
        }
        let parts: Vec<&str> = self.animations.iter().map(|r| r.shorthand.as_str()).collect();
        Some(parts.join(", "))
    }

    /// Keyframe definitions referenced by the animation list, deduplicated,
    /// first-reference order preserved.
    #[must_use]
    pub fn referenced_keyframes(&self) -> Vec<KeyframeId> {
        let mut seen = Vec::new();
        for r in &self.animations {
            if !seen.contains(&r.keyframe) {
                seen.push(r.keyframe);
            }
        }
        seen
    }

    /// Look up a declaration value by property name.
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(k, _)| k == property)
            .map(|(_, v)| v.as_str())
    }
}

/// Merge one declaration into the list, later writer wins.
fn merge(declarations: &mut Vec<(String, String)>, property: &str, value: String) {
    if let Some(entry) = declarations.iter_mut().find(|(k, _)| k == property) {
        entry.1 = value;
    } else {
        declarations.push((property.to_string(), value));
    }
}

/// Compose the final style for a configuration.
///
/// Starts from the base style (font, color, alignment, wrap strategy),
/// merges each active effect's contribution in insertion order, and
/// collects the ordered animation refs. The single-line typewriter gets its
/// two synthetic refs here: a width reveal stepped once per character over
/// the configured duration, and the caret blink at its fixed period. An
/// empty effect set yields an empty animation list and composes without
/// error.
#[must_use]
pub fn compose(config: &Config) -> ComposedStyle {
    let mut declarations: Vec<(String, String)> = Vec::new();

    merge(&mut declarations, "color", config.text_color.clone());
    merge(
        &mut declarations,
        "font-size",
        format!("{}px", config.font_size_px),
    );
    merge(
        &mut declarations,
        "font-family",
        format!("'{}', sans-serif", config.font_family),
    );
    merge(
        &mut declarations,
        "font-weight",
        if config.bold { "bold" } else { "normal" }.to_string(),
    );
    merge(
        &mut declarations,
        "font-style",
        if config.italic { "italic" } else { "normal" }.to_string(),
    );
    merge(
        &mut declarations,
        "text-align",
        config.horizontal_align.css().to_string(),
    );
    merge(&mut declarations, "line-height", "1.2".to_string());
    merge(
        &mut declarations,
        "white-space",
        if config.wrap_enabled { "pre-wrap" } else { "nowrap" }.to_string(),
    );
    merge(
        &mut declarations,
        "word-wrap",
        if config.wrap_enabled { "break-word" } else { "normal" }.to_string(),
    );
    merge(&mut declarations, "text-decoration", "none".to_string());
    if config.resolved_link().is_some() {
        merge(&mut declarations, "cursor", "pointer".to_string());
    }

    let mut animations: Vec<AnimationRef> = Vec::new();
    for effect in config.active_effects.iter() {
        for (property, value) in effect.style_contribution(config) {
            merge(&mut declarations, property, value);
        }
        if let Some(r) = effect.animation_ref(config) {
            animations.push(r);
        }
    }

    if config.active_effects.contains(EffectId::Typewriter) && !config.wrap_enabled {
        let steps = config.char_count().max(1);
        let d = config.clamped_duration_seconds();
        animations.push(AnimationRef::new(
            KeyframeId::Typing,
            format!("typing {d}s steps({steps}, end)"),
        ));
        animations.push(AnimationRef::new(
            KeyframeId::BlinkCaretBorder,
            format!("blink-caret-border {CARET_BLINK_SECONDS}s step-end infinite"),
        ));
    }

    // Countdown digits stay glyph-stable regardless of what other effects
    // contributed.
    if config.active_effects.contains(EffectId::Countdown) {
        merge(
            &mut declarations,
            "font-variant-numeric",
            "tabular-nums".to_string(),
        );
    }

    ComposedStyle {
        declarations,
        animations,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::effects::ActiveEffects;
    use std::collections::BTreeMap;

    fn decl_map(style: &ComposedStyle) -> BTreeMap<String, String> {
        style.declarations.iter().cloned().collect()
    }

    #[test]
    fn empty_effect_set_composes_without_animation() {
        let mut config = Config::new();
        config.active_effects = ActiveEffects::new();
        let style = compose(&config);
        assert!(style.animations.is_empty());
        assert!(style.animation_shorthand().is_none());
        assert_eq!(style.get("color").unwrap(), "#ffffff");
    }

    #[test]
    fn base_style_reflects_font_fields() {
        let mut config = Config::new();
        config.active_effects = ActiveEffects::new();
        config.bold = true;
        config.italic = true;
        config.set_font_size_px(72);
        let style = compose(&config);
        assert_eq!(style.get("font-weight").unwrap(), "bold");
        assert_eq!(style.get("font-style").unwrap(), "italic");
        assert_eq!(style.get("font-size").unwrap(), "72px");
        assert_eq!(style.get("font-family").unwrap(), "'Inter', sans-serif");
    }

    #[test]
    fn cursor_only_when_linked() {
        let mut config = Config::new();
        config.active_effects = ActiveEffects::new();
        assert!(compose(&config).get("cursor").is_none());
        config.link_target = "example.com".to_string();
        assert_eq!(compose(&config).get("cursor").unwrap(), "pointer");
    }

    #[test]
    fn merge_later_writer_wins() {
        let mut declarations = vec![("display".to_string(), "inline-block".to_string())];
        merge(&mut declarations, "display", "block".to_string());
        assert_eq!(declarations.len(), 1);
        assert_eq!(declarations[0].1, "block");
    }

    #[test]
    fn effect_order_controls_animation_layering() {
        let mut config = Config::new();
        config.active_effects = ActiveEffects::from_ids(&[EffectId::Neon, EffectId::Gradient]);
        let forward = compose(&config);
        config.active_effects = ActiveEffects::from_ids(&[EffectId::Gradient, EffectId::Neon]);
        let reverse = compose(&config);

        let fwd = forward.animation_shorthand().unwrap();
        let rev = reverse.animation_shorthand().unwrap();
        assert!(fwd.starts_with("pulsate"));
        assert!(rev.starts_with("shine"));
        // Neither effect writes a property the other writes, so the merged
        // declarations agree; only the layering order differs.
        assert_eq!(decl_map(&forward), decl_map(&reverse));
    }

    #[test]
    fn single_line_typewriter_gets_synthetic_refs() {
        let mut config = Config::new();
        config.content = "Hi".to_string();
        config.duration_seconds = 2.0;
        config.wrap_enabled = false;
        config.active_effects = ActiveEffects::from_ids(&[EffectId::Typewriter]);
        let style = compose(&config);
        let shorthand = style.animation_shorthand().unwrap();
        assert!(shorthand.contains("typing 2s steps(2, end)"));
        assert!(shorthand.contains("blink-caret-border 0.75s step-end infinite"));
    }

    #[test]
    fn typewriter_steps_treat_empty_as_one() {
        let mut config = Config::new();
        config.content = String::new();
        config.wrap_enabled = false;
        config.active_effects = ActiveEffects::from_ids(&[EffectId::Typewriter]);
        let style = compose(&config);
        assert!(style.animation_shorthand().unwrap().contains("steps(1, end)"));
    }

    #[test]
    fn wrap_typewriter_has_no_declarative_reveal() {
        let mut config = Config::new();
        config.wrap_enabled = true;
        config.active_effects = ActiveEffects::from_ids(&[EffectId::Typewriter]);
        let style = compose(&config);
        assert!(style.animations.is_empty());
        assert_eq!(style.get("white-space").unwrap(), "pre-wrap");
    }

    #[test]
    fn caret_blink_independent_of_duration() {
        let mut config = Config::new();
        config.wrap_enabled = false;
        config.active_effects = ActiveEffects::from_ids(&[EffectId::Typewriter]);
        config.duration_seconds = 9.0;
        let style = compose(&config);
        let caret = &style
            .animations
            .iter()
            .find(|r| r.keyframe == KeyframeId::BlinkCaretBorder)
            .unwrap()
            .shorthand;
        assert!(caret.contains("0.75s"));
        assert!(!caret.contains("9s"));
    }

    #[test]
    fn countdown_forces_tabular_digits() {
        let mut config = Config::new();
        config.active_effects =
            ActiveEffects::from_ids(&[EffectId::Gradient, EffectId::Countdown]);
        let style = compose(&config);
        assert_eq!(style.get("font-variant-numeric").unwrap(), "tabular-nums");
    }

    #[test]
    fn referenced_keyframes_deduplicated_in_order() {
        let style = ComposedStyle {
            declarations: Vec::new(),
            animations: vec![
                AnimationRef::new(KeyframeId::Shine, "a".to_string()),
                AnimationRef::new(KeyframeId::Pulsate, "b".to_string()),
                AnimationRef::new(KeyframeId::Shine, "c".to_string()),
            ],
        };
        assert_eq!(
            style.referenced_keyframes(),
            vec![KeyframeId::Shine, KeyframeId::Pulsate]
        );
    }
}
