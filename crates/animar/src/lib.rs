//! Animar: Composable Text-Animation Engine
//!
//! Animar (Spanish: "to animate") turns a single configuration record into
//! an animated text rendering — live in a host UI, or compiled to a
//! standalone embed document by the companion `animar-export` crate.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                      ANIMAR Architecture                          │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  ┌──────────┐    ┌──────────┐    ┌───────────────────────┐       │
//! │  │ Config   │───►│ Effect   │───►│ Style Compositor      │       │
//! │  │ (record) │    │ Registry │    │ (single source of     │       │
//! │  └──────────┘    └──────────┘    │  rendered truth)      │       │
//! │                                  └──────┬─────────┬──────┘       │
//! │                                         │         │              │
//! │                              ┌──────────▼──┐  ┌───▼───────────┐  │
//! │                              │ Preview     │  │ animar-export │  │
//! │                              │ Renderer    │  │ (document     │  │
//! │                              │ (live host) │  │  compiler)    │  │
//! │                              └─────────────┘  └───────────────┘  │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Both backends read the same [`compose::ComposedStyle`], so the preview
//! and the exported document can only differ in how styling is delivered,
//! never in the styling itself.

#![warn(missing_docs)]

/// Time sources for the preview timers.
pub mod clock;
/// Style composition: the single source of rendered truth.
pub mod compose;
/// The configuration record and its boundary clamps.
pub mod config;
/// Deferred-start protocol shared by preview and export.
pub mod defer;
/// Clipboard and file delivery of compiled documents.
pub mod delivery;
/// The effect registry and the ordered active set.
pub mod effects;
/// Keyframe definitions shared by every effect.
pub mod keyframes;
/// The live preview renderer and its imperative steppers.
pub mod preview;
/// Result and error types.
pub mod result;
/// Armed-timer discipline.
pub mod timer;

pub use compose::{compose, ComposedStyle, CARET_BLINK_SECONDS};
pub use config::{Config, HorizontalAlign, VerticalAlign};
pub use defer::{GateAction, StartMode, VisibilityGate};
pub use effects::{imperative_mode, ActiveEffects, AnimationRef, EffectId, ImperativeMode};
pub use keyframes::KeyframeId;
pub use preview::{PreviewFrame, PreviewRenderer, RootNode};
pub use result::{AnimarError, AnimarResult};
