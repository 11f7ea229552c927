//! The animation configuration model.
//!
//! A [`Config`] is the single value object describing everything needed to
//! render an animated text embed. The control surface owns the only mutable
//! instance and mutates it field-by-field; the preview renderer and the
//! document compiler read the full record on every pass and never write it.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::effects::{ActiveEffects, EffectId};

/// Smallest accepted font size in pixels.
pub const FONT_SIZE_MIN: u32 = 12;
/// Largest accepted font size in pixels.
pub const FONT_SIZE_MAX: u32 = 120;
/// Smallest accepted animation duration. Durations are clamped here at the
/// boundary so no generated timing expression can divide by zero.
pub const DURATION_MIN_SECONDS: f64 = 0.1;

/// Horizontal placement of the text within the embed box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    /// Flush left
    Left,
    /// Centered
    Center,
    /// Flush right
    Right,
}

impl HorizontalAlign {
    /// CSS `text-align` value.
    #[must_use]
    pub const fn css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Vertical placement of the text within the embed box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    /// Top of the box
    Top,
    /// Vertically centered
    Middle,
    /// Bottom of the box
    Bottom,
}

impl VerticalAlign {
    /// CSS `justify-content` value for the column flex layout.
    #[must_use]
    pub const fn flex_css(self) -> &'static str {
        match self {
            Self::Top => "flex-start",
            Self::Middle => "center",
            Self::Bottom => "flex-end",
        }
    }
}

/// The animation configuration record.
///
/// Created once with defaults at session start, mutated by the control
/// surface on every interaction, discarded when the session ends. It has no
/// persistence of its own.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Literal text to render. When the countdown effect is active this is
    /// the message shown after the countdown reaches zero.
    pub content: String,
    /// Countdown target. Only meaningful while [`EffectId::Countdown`] is
    /// active.
    pub target_timestamp: DateTime<Utc>,
    /// Optional destination. Empty means the root element is a plain
    /// container, not a hyperlink with no host.
    pub link_target: String,
    /// Active effects in selection order. Order is layering priority.
    pub active_effects: ActiveEffects,
    /// Font size in pixels, within [`FONT_SIZE_MIN`]..=[`FONT_SIZE_MAX`].
    pub font_size_px: u32,
    /// Opaque font catalog key, used verbatim.
    pub font_family: String,
    /// Bold weight
    pub bold: bool,
    /// Italic style
    pub italic: bool,
    /// Text color (opaque CSS color)
    pub text_color: String,
    /// Background color; ignored while `background_transparent` is set.
    pub background_color: String,
    /// Render the embed background as transparent.
    pub background_transparent: bool,
    /// Multi-line rendering: `true` wraps and reveals word-by-word capable
    /// text, `false` keeps a single `nowrap` line with a width reveal.
    pub wrap_enabled: bool,
    /// Animation duration in seconds, strictly positive.
    pub duration_seconds: f64,
    /// Horizontal alignment of the text
    pub horizontal_align: HorizontalAlign,
    /// Vertical alignment of the text
    pub vertical_align: VerticalAlign,
    /// Defer the animation start until the embed scrolls into view.
    pub defer_until_visible: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: "Mix and match styles!".to_string(),
            target_timestamp: Utc::now() + Duration::days(1),
            link_target: String::new(),
            active_effects: ActiveEffects::from_ids(&[EffectId::Typewriter, EffectId::Neon]),
            font_size_px: 40,
            font_family: "Inter".to_string(),
            bold: false,
            italic: false,
            text_color: "#ffffff".to_string(),
            background_color: "#000000".to_string(),
            background_transparent: false,
            wrap_enabled: false,
            duration_seconds: 2.0,
            horizontal_align: HorizontalAlign::Center,
            vertical_align: VerticalAlign::Middle,
            defer_until_visible: true,
        }
    }
}

impl Config {
    /// Create a configuration with session defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font size, clamped to [`FONT_SIZE_MIN`]..=[`FONT_SIZE_MAX`].
    pub fn set_font_size_px(&mut self, px: u32) {
        self.font_size_px = px.clamp(FONT_SIZE_MIN, FONT_SIZE_MAX);
    }

    /// Set the duration, clamped to at least [`DURATION_MIN_SECONDS`].
    ///
    /// Non-finite input falls back to the minimum.
    pub fn set_duration_seconds(&mut self, seconds: f64) {
        self.duration_seconds = if seconds.is_finite() {
            seconds.max(DURATION_MIN_SECONDS)
        } else {
            DURATION_MIN_SECONDS
        };
    }

    /// Duration as used in generated timing expressions.
    ///
    /// The setter already clamps, but the record is plain data; clamping
    /// again at the use site keeps every emitted timing expression strictly
    /// positive no matter how the field was written.
    #[must_use]
    pub fn clamped_duration_seconds(&self) -> f64 {
        if self.duration_seconds.is_finite() {
            self.duration_seconds.max(DURATION_MIN_SECONDS)
        } else {
            DURATION_MIN_SECONDS
        }
    }

    /// Number of characters in the content.
    ///
    /// Counted in scalar values, not bytes, so multi-byte text reveals one
    /// visible character per step.
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.content.chars().count()
    }

    /// Resolve the link target to an absolute destination.
    ///
    /// Empty (after trimming) resolves to `None`: the rendered root is then
    /// a plain container. Known absolute prefixes pass through unmodified;
    /// anything else gets `https://` prepended.
    #[must_use]
    pub fn resolved_link(&self) -> Option<String> {
        let url = self.link_target.trim();
        if url.is_empty() {
            return None;
        }
        if url.starts_with("http://") || url.starts_with("https://") || url.starts_with("mailto:")
        {
            Some(url.to_string())
        } else {
            Some(format!("https://{url}"))
        }
    }

    /// Identity of the visual output.
    ///
    /// Combines every field that affects what the viewer sees. The preview
    /// re-instantiates the animated element whenever this key changes, which
    /// is what makes a finished declarative animation restart on edit.
    #[must_use]
    pub fn style_key(&self) -> String {
        let effects: Vec<&str> = self.active_effects.iter().map(EffectId::as_str).collect();
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}|{}",
            effects.join("-"),
            self.content,
            self.duration_seconds,
            self.font_size_px,
            self.font_family,
            self.bold,
            self.italic,
            self.text_color,
            self.background_color,
            self.background_transparent,
            self.wrap_enabled,
            self.link_target,
            self.horizontal_align.css(),
            self.vertical_align.flex_css(),
            self.defer_until_visible,
            self.target_timestamp.timestamp_millis(),
        )
    }

    /// Shuffle the visual styling in place.
    ///
    /// Picks a random font and text color, rolls bold/italic, and replaces
    /// the active set with one or two non-conflicting visual effects.
    /// Countdown is never selected, so the shuffle cannot change the content
    /// semantics out from under the user.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        const FONTS: [&str; 11] = [
            "Inter",
            "Roboto",
            "Open Sans",
            "Montserrat",
            "Oswald",
            "Playfair Display",
            "Merriweather",
            "Courier Prime",
            "Pacifico",
            "Dancing Script",
            "Press Start 2P",
        ];
        const COLORS: [&str; 8] = [
            "#ffffff", "#ff0055", "#0099ff", "#00ff99", "#ffaa00", "#aa00ff", "#ff00cc", "#ffff00",
        ];
        const OPTIONS: [EffectId; 9] = [
            EffectId::Typewriter,
            EffectId::FadeUp,
            EffectId::Neon,
            EffectId::Gradient,
            EffectId::Bounce,
            EffectId::Slide,
            EffectId::Zoom,
            EffectId::Blur,
            EffectId::Spin,
        ];

        self.font_family = FONTS[rng.gen_range(0..FONTS.len())].to_string();
        self.text_color = COLORS[rng.gen_range(0..COLORS.len())].to_string();
        self.bold = rng.gen_bool(0.5);
        self.italic = rng.gen_bool(0.2);

        let picks = if rng.gen_bool(0.3) { 2 } else { 1 };
        let mut fresh = ActiveEffects::new();
        for _ in 0..picks {
            let candidate = OPTIONS[rng.gen_range(0..OPTIONS.len())];
            if !fresh.contains(candidate) {
                fresh.toggle(candidate);
            }
        }
        self.active_effects = fresh;
    }
}
