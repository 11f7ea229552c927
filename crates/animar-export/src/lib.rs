//! Animar Export: Standalone Embed Document Compiler
//!
//! Compiles an animar configuration into one self-contained, portable HTML
//! document — markup, stylesheet (including keyframes), and, only when
//! required, a behavior script — that reproduces the live preview's
//! animation inside a third-party page the user cannot script.
//!
//! # Design Principles
//!
//! 1. **One source of rendered truth**: styling comes from the shared
//!    compositor in `animar`; this crate only serializes it.
//! 2. **Escaping is correctness**: user text is escaped per embedded
//!    context (script literal, attribute, text node), and the round-trip
//!    law is enforced by property tests.
//! 3. **No script unless needed**: purely declarative immediate-start
//!    configurations compile to markup and stylesheet alone.

#![warn(missing_docs)]

/// The top-level compiler and document assembly.
pub mod compiler;
/// Stylesheet emission.
pub mod css;
/// Context-specific escaping of untrusted text.
pub mod escape;
/// Markup emission.
pub mod html;
/// Behavior-script emission.
pub mod js;

pub use compiler::{compile, strategy_for, CompiledDocument, RenderStrategy};
pub use escape::{escape_attr, escape_html_text, escape_js_string, font_query_value};
