//! End-to-end compiler tests.
//!
//! Each test compiles a full configuration and checks the emitted document
//! against the behavior the preview shows for the same configuration.

use animar::effects::{ActiveEffects, EffectId};
use animar::Config;
use animar_export::{compile, RenderStrategy};
use pretty_assertions::assert_eq;

fn base_config() -> Config {
    let mut config = Config::new();
    config.defer_until_visible = false;
    config
}

// =============================================================================
// Static text: the empty effect set is a valid, distinct state
// =============================================================================

#[test]
fn empty_effect_set_compiles_static_styled_text() {
    let mut config = base_config();
    config.active_effects = ActiveEffects::new();
    config.content = "Just text".to_string();

    let document = compile(&config);
    assert_eq!(document.strategy, RenderStrategy::Declarative);
    assert!(!document.stylesheet.contains("animation:"));
    assert!(!document.stylesheet.contains("@keyframes"));
    assert!(document.markup.contains("Just text"));
    assert!(document.script.is_none());
}

// =============================================================================
// Single-line typewriter: declarative width reveal
// =============================================================================

#[test]
fn single_line_typewriter_hi_two_seconds() {
    let mut config = base_config();
    config.content = "Hi".to_string();
    config.active_effects = ActiveEffects::from_ids(&[EffectId::Typewriter]);
    config.wrap_enabled = false;
    config.duration_seconds = 2.0;

    let document = compile(&config);
    assert_eq!(document.strategy, RenderStrategy::Declarative);
    // One step per character, caret on its own fixed clock.
    assert!(document.stylesheet.contains("typing 2s steps(2, end)"));
    assert!(document
        .stylesheet
        .contains("blink-caret-border 0.75s step-end infinite"));
    assert!(document.stylesheet.contains("@keyframes typing"));
    assert!(document.markup.contains(">Hi</"));
    assert!(document.script.is_none());
}

// =============================================================================
// Multi-line typewriter: scripted reveal
// =============================================================================

#[test]
fn wrap_typewriter_compiles_scripted_reveal() {
    let mut config = base_config();
    config.content = "Beep".to_string();
    config.active_effects = ActiveEffects::from_ids(&[EffectId::Typewriter]);
    config.wrap_enabled = true;
    config.duration_seconds = 2.0;

    let document = compile(&config);
    assert_eq!(document.strategy, RenderStrategy::TypewriterScript);
    let script = document.script.as_deref().expect("script required");
    // 2000ms over 4 chars: 500ms per character, same as the preview.
    assert!(script.contains("setTimeout(stepTypewriter, 500)"));
    assert!(script.contains(r#"const text = "Beep";"#));
    // Content node starts empty; only the caret span is in the markup.
    assert!(document.markup.contains(r#"<span id="cursor"></span>"#));
    assert!(!document.markup.contains("Beep"));
    // The caret blinks from the stylesheet, independent of the stepper.
    assert!(document
        .stylesheet
        .contains("blink-caret-opacity 0.75s step-end infinite"));
}

#[test]
fn wrap_typewriter_escapes_hostile_content() {
    let mut config = base_config();
    config.content = "line one\nsay \"hi\" \\ </script>".to_string();
    config.active_effects = ActiveEffects::from_ids(&[EffectId::Typewriter]);
    config.wrap_enabled = true;

    let script = compile(&config).script.expect("script required");
    assert!(script.contains(r#"const text = "line one\nsay \"hi\" \\ <\/script>";"#));
    // The embedded literal must not be able to close the script element.
    let after_open = script.split("const text = ").nth(1).expect("literal present");
    assert!(!after_open.split(';').next().expect("statement").contains("</script>"));
}

// =============================================================================
// Countdown: scripted once-per-second rewrite
// =============================================================================

#[test]
fn countdown_compiles_interval_and_finished_message() {
    let mut config = base_config();
    config.content = "We are live!".to_string();
    config.active_effects = ActiveEffects::from_ids(&[EffectId::Countdown]);

    let document = compile(&config);
    assert_eq!(document.strategy, RenderStrategy::CountdownScript);
    assert!(document.markup.contains("00d 00h 00m 00s"));
    assert!(document.stylesheet.contains("font-variant-numeric: tabular-nums"));

    let script = document.script.expect("script required");
    assert!(script.contains(r#"const finishedText = "We are live!";"#));
    assert!(script.contains("}, 1000);"));
    assert!(script.contains("<script>startCountdown();</script>"));
}

#[test]
fn countdown_evicts_typewriter_before_compile() {
    let mut config = base_config();
    config.active_effects = ActiveEffects::from_ids(&[EffectId::Typewriter, EffectId::Neon]);
    config.active_effects.toggle(EffectId::Countdown);
    config.wrap_enabled = true;

    let document = compile(&config);
    assert_eq!(document.strategy, RenderStrategy::CountdownScript);
    let script = document.script.expect("script required");
    assert!(!script.contains("startTypewriter"));
    // The surviving neon layer still animates.
    assert!(document.stylesheet.contains("animation: pulsate"));
}

// =============================================================================
// Link handling
// =============================================================================

#[test]
fn link_destination_resolution() {
    let mut config = base_config();

    config.link_target = "example.com".to_string();
    assert!(compile(&config)
        .markup
        .contains(r#"href="https://example.com""#));

    config.link_target = "https://example.com".to_string();
    assert!(compile(&config)
        .markup
        .contains(r#"href="https://example.com""#));

    config.link_target = String::new();
    let markup = compile(&config).markup;
    assert!(!markup.contains("href="));
    assert!(!markup.contains("<a "));
}

// =============================================================================
// Effect ordering: user-controlled layering priority
// =============================================================================

#[test]
fn effect_order_changes_only_the_layering() {
    let mut config = base_config();
    config.active_effects = ActiveEffects::from_ids(&[EffectId::Neon, EffectId::Gradient]);
    let forward = compile(&config);
    config.active_effects = ActiveEffects::from_ids(&[EffectId::Gradient, EffectId::Neon]);
    let reverse = compile(&config);

    assert!(forward.stylesheet.contains("animation: pulsate"));
    assert!(reverse.stylesheet.contains("animation: shine"));
    assert_eq!(forward.markup, reverse.markup);
    // Both orders reference the same keyframe set.
    for name in ["@keyframes pulsate", "@keyframes shine"] {
        assert_eq!(forward.stylesheet.matches(name).count(), 1);
        assert_eq!(reverse.stylesheet.matches(name).count(), 1);
    }
}

// =============================================================================
// Deferred start
// =============================================================================

#[test]
fn deferred_declarative_pauses_and_observes() {
    let mut config = Config::new();
    config.active_effects = ActiveEffects::from_ids(&[EffectId::Bounce]);
    config.defer_until_visible = true;

    let document = compile(&config);
    assert!(document.stylesheet.contains("animation-play-state: paused"));
    let script = document.script.expect("observer required");
    assert!(script.contains("IntersectionObserver"));
    assert!(script.contains("{ threshold: 0.1 }"));
    assert!(script.contains("animationPlayState = 'running'"));
}

#[test]
fn deferred_typewriter_starts_on_view_not_on_load() {
    let mut config = Config::new();
    config.active_effects = ActiveEffects::from_ids(&[EffectId::Typewriter]);
    config.wrap_enabled = true;
    config.defer_until_visible = true;

    let script = compile(&config).script.expect("script required");
    assert!(script.contains("startTypewriter();"));
    assert!(script.contains("resetTypewriter();"));
    assert!(!script.contains("setTimeout(startTypewriter, 500)"));
}

// =============================================================================
// Whole-document assembly
// =============================================================================

#[test]
fn full_document_is_self_contained() {
    let mut config = base_config();
    config.content = "Hi".to_string();
    config.font_family = "Playfair Display".to_string();
    config.active_effects = ActiveEffects::from_ids(&[EffectId::Zoom]);

    let html = compile(&config).to_html();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("family=Playfair+Display"));
    assert!(html.contains("@keyframes zoomIn"));
    assert!(html.contains(">Hi</"));
    assert!(html.ends_with("</html>"));
}
