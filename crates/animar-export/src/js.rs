//! Behavior-script emission.
//!
//! A script is emitted only when the configuration needs one: an
//! imperative stepper (multi-line typewriter, countdown), a deferred
//! start, or both. Purely declarative immediate-start documents ship no
//! script at all. The emitted steppers follow the same discipline as the
//! preview: every start and reset clears the pending timer first, so rapid
//! scroll-in/scroll-out can never leave two steppers running.

use animar::config::Config;
use animar::defer::{IMMEDIATE_START_DELAY_MS, VISIBILITY_THRESHOLD};
use animar::timer::per_char_delay_ms;
use chrono::SecondsFormat;

use crate::compiler::RenderStrategy;
use crate::escape::escape_js_string;

/// The imperative typewriter engine.
fn typewriter_script(config: &Config) -> String {
    let text = escape_js_string(&config.content);
    let char_delay = per_char_delay_ms(config.clamped_duration_seconds(), config.char_count());
    format!(
        r#"<script>
  const text = "{text}";
  const container = document.getElementById('typewriter-text');
  let cursor = document.getElementById('cursor');
  let i = 0;
  let typeTimer;

  function startTypewriter() {{
    clearTimeout(typeTimer);
    if (container) container.style.animationPlayState = 'running';
    stepTypewriter();
  }}
  function stepTypewriter() {{
    if (i < text.length) {{
      const span = document.createElement('span');
      span.textContent = text.charAt(i);
      container.insertBefore(span, cursor);
      i++;
      typeTimer = setTimeout(stepTypewriter, {char_delay});
    }}
  }}
  function resetTypewriter() {{
    clearTimeout(typeTimer);
    i = 0;
    container.innerHTML = '<span id="cursor"></span>';
    cursor = document.getElementById('cursor');
    container.style.animation = 'none';
    container.offsetHeight;
    container.style.animation = null;
  }}
</script>"#
    )
}

/// The imperative countdown engine.
fn countdown_script(config: &Config) -> String {
    let target = config
        .target_timestamp
        .to_rfc3339_opts(SecondsFormat::Millis, true);
    let finished = escape_js_string(&config.content);
    format!(
        r#"<script>
  let countdownInterval;

  function startCountdown() {{
    if (countdownInterval) clearInterval(countdownInterval);
    const countDownDate = new Date("{target}").getTime();
    const finishedText = "{finished}";
    const el = document.getElementById('countdown');

    if (el) el.style.animationPlayState = 'running';

    countdownInterval = setInterval(function() {{
      const now = new Date().getTime();
      const distance = countDownDate - now;

      if (distance < 0) {{
        clearInterval(countdownInterval);
        el.textContent = finishedText;
        return;
      }}

      const days = Math.floor(distance / (1000 * 60 * 60 * 24));
      const hours = Math.floor((distance % (1000 * 60 * 60 * 24)) / (1000 * 60 * 60));
      const minutes = Math.floor((distance % (1000 * 60 * 60)) / (1000 * 60));
      const seconds = Math.floor((distance % (1000 * 60)) / 1000);

      el.textContent = days + "d " + hours + "h " + minutes + "m " + seconds + "s";
    }}, 1000);
  }}
  function resetCountdown() {{
    if (countdownInterval) clearInterval(countdownInterval);
    const el = document.getElementById('countdown');
    if (el) {{
      el.style.animation = 'none';
      el.offsetHeight;
      el.style.animation = null;
    }}
  }}
</script>"#
    )
}

/// The visibility observer implementing the deferred-start protocol.
///
/// Entering view starts the stepper or flips the run state to running;
/// leaving view invokes the matching reset, so declarative effects replay
/// and imperative ones fully restart on every re-entry.
fn observer_script(strategy: RenderStrategy) -> String {
    let (start_call, reset_call) = match strategy {
        RenderStrategy::TypewriterScript => ("startTypewriter();", "resetTypewriter();"),
        RenderStrategy::CountdownScript => ("startCountdown();", "resetCountdown();"),
        RenderStrategy::Declarative => (
            "if (text) text.style.animationPlayState = 'running';",
            "resetAnimation();",
        ),
    };
    format!(
        r#"<script>
  document.addEventListener("DOMContentLoaded", function() {{
    const target = document.querySelector('.container');
    const text = document.querySelector('.text');

    function resetAnimation() {{
      if (text) {{
        text.style.animation = 'none';
        text.offsetHeight;
        text.style.animation = null;
      }}
    }}

    const observer = new IntersectionObserver((entries) => {{
      entries.forEach(entry => {{
        if (entry.isIntersecting) {{
          {start_call}
        }} else {{
          {reset_call}
        }}
      }});
    }}, {{ threshold: {VISIBILITY_THRESHOLD} }});

    if (target) observer.observe(target);
  }});
</script>"#
    )
}

/// Immediate-start trigger for the imperative engines.
fn immediate_start_script(strategy: RenderStrategy) -> Option<String> {
    match strategy {
        RenderStrategy::TypewriterScript => Some(format!(
            "<script>setTimeout(startTypewriter, {IMMEDIATE_START_DELAY_MS});</script>"
        )),
        RenderStrategy::CountdownScript => Some("<script>startCountdown();</script>".to_string()),
        RenderStrategy::Declarative => None,
    }
}

/// Assemble the behavior script for a document, or `None` when the
/// stylesheet alone suffices.
#[must_use]
pub fn behavior_script(config: &Config, strategy: RenderStrategy) -> Option<String> {
    let mut blocks: Vec<String> = Vec::new();
    match strategy {
        RenderStrategy::TypewriterScript => blocks.push(typewriter_script(config)),
        RenderStrategy::CountdownScript => blocks.push(countdown_script(config)),
        RenderStrategy::Declarative => {}
    }

    if config.defer_until_visible {
        blocks.push(observer_script(strategy));
    } else if let Some(trigger) = immediate_start_script(strategy) {
        blocks.push(trigger);
    }

    if blocks.is_empty() {
        None
    } else {
        Some(blocks.join("\n"))
    }
}
