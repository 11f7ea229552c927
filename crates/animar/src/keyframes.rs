//! The keyframe catalog.
//!
//! Each [`KeyframeId`] names one `@keyframes` definition. Bodies that
//! involve the text color are generated against the configuration; the rest
//! are fixed. The stylesheet writer emits each referenced definition exactly
//! once, no matter how many effects share it.

use serde::{Deserialize, Serialize};

use crate::config::Config;

/// A keyframe animation definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyframeId {
    /// Width reveal for the single-line typewriter
    Typing,
    /// Caret blink via border color (single-line typewriter)
    BlinkCaretBorder,
    /// Caret blink via opacity (multi-line caret span)
    BlinkCaretOpacity,
    /// Fade in while translating upward
    FadeInUp,
    /// Pulsating glow, keyed to the text color
    Pulsate,
    /// Gradient sweep
    Shine,
    /// Elastic scale-in
    BounceIn,
    /// Slide in from the left
    SlideIn,
    /// Scale up from half size
    ZoomIn,
    /// Sharpen from a heavy blur
    BlurIn,
    /// 3D rotation into place
    SpinIn,
}

impl KeyframeId {
    /// CSS identifier used in `@keyframes` and `animation` shorthands.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Typing => "typing",
            Self::BlinkCaretBorder => "blink-caret-border",
            Self::BlinkCaretOpacity => "blink-caret-opacity",
            Self::FadeInUp => "fadeInUp",
            Self::Pulsate => "pulsate",
            Self::Shine => "shine",
            Self::BounceIn => "bounceIn",
            Self::SlideIn => "slideIn",
            Self::ZoomIn => "zoomIn",
            Self::BlurIn => "blurIn",
            Self::SpinIn => "spinIn",
        }
    }

    /// Keyframe block body (the part between the braces).
    #[must_use]
    pub fn body(self, config: &Config) -> String {
        let color = &config.text_color;
        match self {
            Self::Typing => "from { width: 0 } to { width: 100% }".to_string(),
            Self::BlinkCaretBorder => format!(
                "from, to {{ border-color: transparent; }} 50% {{ border-color: {color}; }}"
            ),
            Self::BlinkCaretOpacity => {
                "from, to { opacity: 0; } 50% { opacity: 1; }".to_string()
            }
            Self::FadeInUp => {
                "from { opacity: 0; transform: translateY(20px); } to { opacity: 1; transform: translateY(0); }"
                    .to_string()
            }
            Self::Pulsate => format!(
                "0% {{ text-shadow: 0 0 2px #fff, 0 0 4px #fff, 0 0 6px #fff, 0 0 10px {color}, 0 0 45px {color}, 0 0 55px {color}, 0 0 70px {color}, 0 0 80px {color}; }} 100% {{ text-shadow: 0 0 4px #fff, 0 0 11px #fff, 0 0 19px #fff, 0 0 40px {color}, 0 0 80px {color}, 0 0 90px {color}, 0 0 100px {color}, 0 0 150px {color}; }}"
            ),
            Self::Shine => "to { background-position: 200% center; }".to_string(),
            Self::BounceIn => {
                "0% { opacity: 0; transform: scale3d(.3, .3, .3); } 20% { transform: scale3d(1.1, 1.1, 1.1); } 40% { transform: scale3d(.9, .9, .9); } 60% { opacity: 1; transform: scale3d(1.03, 1.03, 1.03); } 80% { transform: scale3d(.97, .97, .97); } 100% { opacity: 1; transform: scale3d(1, 1, 1); }"
                    .to_string()
            }
            Self::SlideIn => {
                "from { transform: translateX(-100px); opacity: 0; } to { transform: translateX(0); opacity: 1; }"
                    .to_string()
            }
            Self::ZoomIn => {
                "from { opacity: 0; transform: scale(0.5); } to { opacity: 1; transform: scale(1); }"
                    .to_string()
            }
            Self::BlurIn => {
                "from { opacity: 0; filter: blur(20px); } to { opacity: 1; filter: blur(0); }"
                    .to_string()
            }
            Self::SpinIn => {
                "from { opacity: 0; transform: rotate3d(0, 1, 0, 90deg); } to { opacity: 1; transform: rotate3d(0, 1, 0, 0deg); }"
                    .to_string()
            }
        }
    }

    /// Render the full `@keyframes` rule.
    #[must_use]
    pub fn render(self, config: &Config) -> String {
        format!("@keyframes {} {{ {} }}", self.name(), self.body(config))
    }
}
