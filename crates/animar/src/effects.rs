//! The effect registry.
//!
//! Every animation primitive is a variant of [`EffectId`]. An effect
//! declares the style properties it contributes, the keyframe animation it
//! requires (if any), its conflict set, and whether it needs imperative
//! rendering. The compositor and the document compiler both consume this
//! catalog, so adding an effect here is the whole story of adding it to the
//! product.

use serde::{Deserialize, Serialize};

use crate::config::{Config, HorizontalAlign};
use crate::keyframes::KeyframeId;

/// A named animation primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectId {
    /// Character-by-character reveal with a blinking caret
    Typewriter,
    /// Fade in while translating upward
    FadeUp,
    /// Pulsating multi-layer glow
    Neon,
    /// Flowing gradient fill clipped to the glyphs
    Gradient,
    /// Elastic scale-in
    Bounce,
    /// Slide in from the left
    Slide,
    /// Scale up from half size
    Zoom,
    /// Sharpen from a heavy blur
    Blur,
    /// 3D rotation into place
    Spin,
    /// Live countdown to a target instant, then a finished message
    Countdown,
}

impl EffectId {
    /// Every effect in the catalog, in presentation order.
    pub const ALL: [Self; 10] = [
        Self::Typewriter,
        Self::FadeUp,
        Self::Neon,
        Self::Gradient,
        Self::Bounce,
        Self::Slide,
        Self::Zoom,
        Self::Blur,
        Self::Spin,
        Self::Countdown,
    ];

    /// Stable identifier, also used in style keys.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Typewriter => "typewriter",
            Self::FadeUp => "fadeup",
            Self::Neon => "neon",
            Self::Gradient => "gradient",
            Self::Bounce => "bounce",
            Self::Slide => "slide",
            Self::Zoom => "zoom",
            Self::Blur => "blur",
            Self::Spin => "spin",
            Self::Countdown => "countdown",
        }
    }

    /// Effects that cannot coexist with this one.
    ///
    /// Only the two content-mutating effects conflict today. New effects
    /// get an empty set unless they declare otherwise; exclusivity is never
    /// assumed transitively.
    #[must_use]
    pub const fn conflicts_with(self) -> &'static [Self] {
        match self {
            Self::Typewriter => &[Self::Countdown],
            Self::Countdown => &[Self::Typewriter],
            _ => &[],
        }
    }

    /// Whether this effect mutates the element's *content* over time and
    /// therefore cannot be expressed as a declarative animation.
    ///
    /// True only for the multi-line typewriter (the single-line variant is
    /// a pure width reveal) and the countdown.
    #[must_use]
    pub fn requires_imperative_rendering(self, config: &Config) -> bool {
        match self {
            Self::Typewriter => config.wrap_enabled,
            Self::Countdown => true,
            _ => false,
        }
    }

    /// Style declarations this effect contributes to the composed style.
    #[must_use]
    pub fn style_contribution(self, config: &Config) -> Vec<(&'static str, String)> {
        let color = &config.text_color;
        match self {
            Self::Neon => vec![(
                "text-shadow",
                format!(
                    "0 0 5px #fff, 0 0 10px #fff, 0 0 20px {color}, 0 0 30px {color}, 0 0 40px {color}"
                ),
            )],
            Self::Gradient => vec![
                (
                    "background",
                    format!("linear-gradient(to right, {color}, #ff00cc, #3333ff, {color})"),
                ),
                ("background-size", "200% auto".to_string()),
                ("-webkit-background-clip", "text".to_string()),
                ("-webkit-text-fill-color", "transparent".to_string()),
            ],
            Self::Spin => vec![("transform-style", "preserve-3d".to_string())],
            Self::Typewriter if !config.wrap_enabled => {
                let margin = match config.horizontal_align {
                    HorizontalAlign::Center => "0 auto",
                    HorizontalAlign::Right => "0 0 0 auto",
                    HorizontalAlign::Left => "0",
                };
                vec![
                    ("display", "inline-block".to_string()),
                    ("overflow", "hidden".to_string()),
                    ("border-right", format!(".15em solid {color}")),
                    ("white-space", "nowrap".to_string()),
                    ("margin", margin.to_string()),
                    ("letter-spacing", "0.1em".to_string()),
                    ("max-width", "100%".to_string()),
                ]
            }
            Self::Countdown => vec![("font-variant-numeric", "tabular-nums".to_string())],
            _ => Vec::new(),
        }
    }

    /// The keyframe animation this effect runs, or `None`.
    ///
    /// `None` covers both style-only effects and the two imperative
    /// effects, whose timing refs are synthesized by the compositor or
    /// driven by a stepper instead.
    #[must_use]
    pub fn animation_ref(self, config: &Config) -> Option<AnimationRef> {
        let d = config.clamped_duration_seconds();
        match self {
            Self::Neon => Some(AnimationRef::new(
                KeyframeId::Pulsate,
                format!("pulsate {d}s infinite alternate"),
            )),
            Self::Gradient => Some(AnimationRef::new(
                KeyframeId::Shine,
                format!("shine {d}s linear infinite"),
            )),
            Self::FadeUp => Some(AnimationRef::new(
                KeyframeId::FadeInUp,
                format!("fadeInUp {d}s ease-out forwards"),
            )),
            Self::Bounce => Some(AnimationRef::new(
                KeyframeId::BounceIn,
                format!("bounceIn {d}s cubic-bezier(0.215, 0.610, 0.355, 1.000) both"),
            )),
            Self::Slide => Some(AnimationRef::new(
                KeyframeId::SlideIn,
                format!("slideIn {d}s ease-out forwards"),
            )),
            Self::Zoom => Some(AnimationRef::new(
                KeyframeId::ZoomIn,
                format!("zoomIn {d}s ease-out forwards"),
            )),
            Self::Blur => Some(AnimationRef::new(
                KeyframeId::BlurIn,
                format!("blurIn {d}s ease-out forwards"),
            )),
            Self::Spin => Some(AnimationRef::new(
                KeyframeId::SpinIn,
                format!("spinIn {d}s ease-out forwards"),
            )),
            Self::Typewriter | Self::Countdown => None,
        }
    }
}

/// A reference to a keyframe animation attached to the text element.
///
/// Carries both the keyframe requirement (so the stylesheet writer can emit
/// the definition exactly once) and the ready-made `animation` shorthand
/// segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationRef {
    /// Keyframe definition this ref requires
    pub keyframe: KeyframeId,
    /// `animation` shorthand segment, e.g. `"shine 2s linear infinite"`
    pub shorthand: String,
}

impl AnimationRef {
    /// Create a new animation reference.
    #[must_use]
    pub fn new(keyframe: KeyframeId, shorthand: String) -> Self {
        Self { keyframe, shorthand }
    }
}

/// How a configuration must be rendered over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImperativeMode {
    /// Everything is expressible as declarative animation (including the
    /// empty effect set, which renders as static styled text).
    None,
    /// Multi-line typewriter: content grows one character per tick.
    Typewriter,
    /// Countdown: content is rewritten once per second.
    Countdown,
}

/// Select the imperative rendering mode for a configuration.
#[must_use]
pub fn imperative_mode(config: &Config) -> ImperativeMode {
    if config.active_effects.contains(EffectId::Countdown) {
        ImperativeMode::Countdown
    } else if config.active_effects.contains(EffectId::Typewriter) && config.wrap_enabled {
        ImperativeMode::Typewriter
    } else {
        ImperativeMode::None
    }
}

/// The ordered set of active effects.
///
/// Insertion order is preserved and significant: it becomes animation
/// layering order, and later effects win style-property collisions.
/// Duplicates are impossible by construction because [`toggle`] is the only
/// mutation.
///
/// [`toggle`]: ActiveEffects::toggle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActiveEffects {
    ids: Vec<EffectId>,
}

impl ActiveEffects {
    /// Empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self { ids: Vec::new() }
    }

    /// Build a set by toggling each id in order, applying the same
    /// conflict-resolution rule as interactive selection.
    #[must_use]
    pub fn from_ids(ids: &[EffectId]) -> Self {
        let mut set = Self::new();
        for &id in ids {
            set.toggle(id);
        }
        set
    }

    /// Toggle an effect.
    ///
    /// Turning an active effect off removes it, preserving the relative
    /// order of the remainder. Turning an effect on first evicts every
    /// member of its conflict set (last selected wins), then appends it.
    pub fn toggle(&mut self, id: EffectId) {
        if self.contains(id) {
            self.ids.retain(|&e| e != id);
            return;
        }
        let conflicts = id.conflicts_with();
        self.ids.retain(|e| !conflicts.contains(e));
        self.ids.push(id);
    }

    /// Whether the effect is active.
    #[must_use]
    pub fn contains(&self, id: EffectId) -> bool {
        self.ids.contains(&id)
    }

    /// Active effects in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = EffectId> + '_ {
        self.ids.iter().copied()
    }

    /// Active effects as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[EffectId] {
        &self.ids
    }

    /// Number of active effects.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether no effect is active. A valid state: the element renders as
    /// static styled text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn toggle_on_appends_in_order() {
        let mut set = ActiveEffects::new();
        set.toggle(EffectId::Neon);
        set.toggle(EffectId::Gradient);
        assert_eq!(set.as_slice(), &[EffectId::Neon, EffectId::Gradient]);
    }

    #[test]
    fn toggle_off_preserves_remainder_order() {
        let mut set =
            ActiveEffects::from_ids(&[EffectId::Neon, EffectId::Bounce, EffectId::Gradient]);
        set.toggle(EffectId::Bounce);
        assert_eq!(set.as_slice(), &[EffectId::Neon, EffectId::Gradient]);
    }

    #[test]
    fn countdown_evicts_typewriter() {
        let mut set = ActiveEffects::from_ids(&[EffectId::Typewriter, EffectId::Neon]);
        set.toggle(EffectId::Countdown);
        assert!(!set.contains(EffectId::Typewriter));
        assert_eq!(
            set.as_slice(),
            &[EffectId::Neon, EffectId::Countdown],
            "non-conflicting members survive in order"
        );
    }

    #[test]
    fn typewriter_evicts_countdown() {
        let mut set = ActiveEffects::from_ids(&[EffectId::Countdown, EffectId::Slide]);
        set.toggle(EffectId::Typewriter);
        assert!(!set.contains(EffectId::Countdown));
        assert!(set.contains(EffectId::Typewriter));
    }

    #[test]
    fn eviction_is_idempotent_over_all_prior_states() {
        // Toggling countdown on must remove typewriter for every prior set.
        for prior in [
            vec![],
            vec![EffectId::Typewriter],
            vec![EffectId::Typewriter, EffectId::Neon],
            vec![EffectId::Neon, EffectId::Typewriter, EffectId::Spin],
        ] {
            let mut set = ActiveEffects::from_ids(&prior);
            set.toggle(EffectId::Countdown);
            assert!(!set.contains(EffectId::Typewriter));
            assert!(set.contains(EffectId::Countdown));
        }
    }

    #[test]
    fn no_duplicates_by_construction() {
        let set = ActiveEffects::from_ids(&[EffectId::Neon, EffectId::Neon]);
        // Second toggle removes the first: toggling twice is a no-op pair.
        assert!(set.is_empty());
    }

    #[test]
    fn non_conflicting_effects_have_empty_conflict_sets() {
        for id in EffectId::ALL {
            if id == EffectId::Typewriter || id == EffectId::Countdown {
                continue;
            }
            assert!(id.conflicts_with().is_empty(), "{} must not conflict", id.as_str());
        }
    }

    #[test]
    fn imperative_only_for_wrap_typewriter_and_countdown() {
        let mut config = Config::new();
        config.active_effects = ActiveEffects::from_ids(&[EffectId::Typewriter]);
        config.wrap_enabled = false;
        assert_eq!(imperative_mode(&config), ImperativeMode::None);
        config.wrap_enabled = true;
        assert_eq!(imperative_mode(&config), ImperativeMode::Typewriter);

        config.active_effects = ActiveEffects::from_ids(&[EffectId::Countdown]);
        config.wrap_enabled = false;
        assert_eq!(imperative_mode(&config), ImperativeMode::Countdown);

        config.active_effects = ActiveEffects::from_ids(&[EffectId::Neon, EffectId::Spin]);
        assert_eq!(imperative_mode(&config), ImperativeMode::None);
    }

    #[test]
    fn neon_contribution_keyed_to_text_color() {
        let mut config = Config::new();
        config.text_color = "#ff0055".to_string();
        let decls = EffectId::Neon.style_contribution(&config);
        assert_eq!(decls.len(), 1);
        assert_eq!(decls[0].0, "text-shadow");
        assert!(decls[0].1.contains("#ff0055"));
    }

    #[test]
    fn typewriter_contribution_depends_on_wrap() {
        let mut config = Config::new();
        config.wrap_enabled = true;
        assert!(EffectId::Typewriter.style_contribution(&config).is_empty());
        config.wrap_enabled = false;
        let decls = EffectId::Typewriter.style_contribution(&config);
        assert!(decls.iter().any(|(k, _)| *k == "border-right"));
        assert!(decls.iter().any(|(k, v)| *k == "margin" && v == "0 auto"));
    }

    #[test]
    fn typewriter_margin_follows_alignment() {
        let mut config = Config::new();
        config.wrap_enabled = false;
        config.horizontal_align = HorizontalAlign::Right;
        let decls = EffectId::Typewriter.style_contribution(&config);
        assert!(decls.iter().any(|(k, v)| *k == "margin" && v == "0 0 0 auto"));
    }

    #[test]
    fn animation_refs_carry_duration() {
        let mut config = Config::new();
        config.duration_seconds = 3.5;
        let r = EffectId::Slide.animation_ref(&config).unwrap();
        assert_eq!(r.shorthand, "slideIn 3.5s ease-out forwards");
        assert_eq!(r.keyframe, KeyframeId::SlideIn);
    }

    #[test]
    fn imperative_effects_have_no_declarative_ref() {
        let config = Config::new();
        assert!(EffectId::Typewriter.animation_ref(&config).is_none());
        assert!(EffectId::Countdown.animation_ref(&config).is_none());
    }

    #[test]
    fn effect_id_serde_uses_stable_names() {
        let json = serde_json::to_string(&EffectId::FadeUp).unwrap();
        assert_eq!(json, "\"fadeup\"");
        let parsed: EffectId = serde_json::from_str("\"countdown\"").unwrap();
        assert_eq!(parsed, EffectId::Countdown);
    }
}
