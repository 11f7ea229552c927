//! The live preview renderer.
//!
//! The preview is the user's only feedback loop before export, so it rides
//! on the same composed style as the document compiler and differs only in
//! delivery: a host UI applies [`PreviewFrame`]s to live elements instead
//! of reading static markup. Declarative effects are executed by the host's
//! native animation machinery; the two content-mutating effects run on
//! imperative steppers driven through [`PreviewRenderer::tick`].

mod countdown;
mod typewriter;

pub use countdown::{breakdown, format_breakdown, CountdownTicker, PLACEHOLDER, TICK_PERIOD_MS};
pub use typewriter::TypewriterStepper;

use crate::compose::{compose, ComposedStyle};
use crate::config::Config;
use crate::defer::{GateAction, StartMode, VisibilityGate};
use crate::effects::{imperative_mode, ImperativeMode};

/// Kind of root element the host should render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RootNode {
    /// Plain container
    Block,
    /// Hyperlink opened in a new context
    Link {
        /// Resolved absolute destination
        href: String,
    },
}

/// One renderable snapshot of the preview.
#[derive(Debug, Clone, PartialEq)]
pub struct PreviewFrame {
    /// Root element kind
    pub root: RootNode,
    /// Composed style declarations for the text element
    pub declarations: Vec<(String, String)>,
    /// `animation` shorthand, when any effect animates
    pub animation_shorthand: Option<String>,
    /// Whether the animation run state is currently paused (deferred start,
    /// not yet in view)
    pub paused: bool,
    /// Text to display
    pub text: String,
    /// Whether the separately blinking caret span is present
    pub caret: bool,
    /// Identity of the rendered element. The host must re-instantiate the
    /// element whenever this changes, or a finished declarative animation
    /// would not restart on edit.
    pub style_key: String,
}

#[derive(Debug)]
enum Engine {
    Declarative,
    Typewriter(TypewriterStepper),
    Countdown(CountdownTicker),
}

impl Engine {
    fn build(config: &Config) -> Self {
        match imperative_mode(config) {
            ImperativeMode::None => Self::Declarative,
            ImperativeMode::Typewriter => Self::Typewriter(TypewriterStepper::new(
                &config.content,
                config.clamped_duration_seconds(),
            )),
            ImperativeMode::Countdown => Self::Countdown(CountdownTicker::new(
                config.target_timestamp,
                &config.content,
            )),
        }
    }

    fn start(&mut self, now_ms: u64) {
        match self {
            Self::Declarative => {}
            Self::Typewriter(stepper) => stepper.start(now_ms),
            Self::Countdown(ticker) => ticker.start(now_ms),
        }
    }

    fn reset(&mut self) {
        match self {
            Self::Declarative => {}
            Self::Typewriter(stepper) => stepper.reset(),
            Self::Countdown(ticker) => ticker.reset(),
        }
    }
}

/// Fields whose edits restart the imperative engine rather than just
/// re-instantiating the styled element.
fn engine_inputs_changed(old: &Config, new: &Config) -> bool {
    old.content != new.content
        || old.clamped_duration_seconds() != new.clamped_duration_seconds()
        || old.wrap_enabled != new.wrap_enabled
        || old.target_timestamp != new.target_timestamp
}

/// The live preview.
///
/// Owns at most one imperative engine at a time; replacing the engine drops
/// its armed timer, and dropping the renderer stops everything. There is no
/// way to leave a previous effect's timer running against the element.
#[derive(Debug)]
pub struct PreviewRenderer {
    config: Config,
    composed: ComposedStyle,
    key: String,
    gate: VisibilityGate,
    engine: Engine,
    replay_epoch: u64,
}

impl PreviewRenderer {
    /// Create a renderer for the given configuration.
    ///
    /// With an immediate start mode the engine starts right away; a
    /// deferred one waits for the first [`set_visible`] transition.
    ///
    /// [`set_visible`]: PreviewRenderer::set_visible
    #[must_use]
    pub fn new(config: Config, now_ms: u64) -> Self {
        let composed = compose(&config);
        let key = config.style_key();
        let mut gate = VisibilityGate::new(StartMode::from_deferred(config.defer_until_visible));
        let mut engine = Engine::build(&config);
        if gate.session_start() == GateAction::Start {
            engine.start(now_ms);
        }
        Self {
            config,
            composed,
            key,
            gate,
            engine,
            replay_epoch: 0,
        }
    }

    /// Apply an edited configuration. Returns whether the visual identity
    /// changed (and the host must re-instantiate the element).
    ///
    /// The engine resets and restarts only when its inputs changed: the
    /// content, the duration, the wrap strategy, the countdown target, or
    /// the imperative mode itself. A pure style edit keeps reveal progress.
    pub fn set_config(&mut self, config: Config, now_ms: u64) -> bool {
        let key = config.style_key();
        if key == self.key {
            return false;
        }

        let mode_changed = imperative_mode(&self.config) != imperative_mode(&config);
        let rebuild_engine = mode_changed || engine_inputs_changed(&self.config, &config);
        let defer_changed = self.config.defer_until_visible != config.defer_until_visible;

        self.composed = compose(&config);
        self.key = key;
        self.config = config;

        if defer_changed {
            self.gate =
                VisibilityGate::new(StartMode::from_deferred(self.config.defer_until_visible));
            // Tear the old engine down before the new gate decides anything.
            self.engine.reset();
            self.engine = Engine::build(&self.config);
            if self.gate.session_start() == GateAction::Start {
                self.engine.start(now_ms);
            }
        } else if rebuild_engine {
            self.engine.reset();
            self.engine = Engine::build(&self.config);
            if self.gate.is_running() {
                self.engine.start(now_ms);
            }
        }
        true
    }

    /// Drive the imperative engine. Returns whether the frame changed.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        match &mut self.engine {
            Engine::Declarative => false,
            Engine::Typewriter(stepper) => stepper.tick(now_ms),
            Engine::Countdown(ticker) => ticker.tick(now_ms),
        }
    }

    /// Feed a visibility transition from the host.
    ///
    /// Entering view starts the engine (or unpauses declarative playback);
    /// leaving view resets it, so every re-entry replays from the
    /// beginning.
    pub fn set_visible(&mut self, visible: bool, now_ms: u64) {
        match self.gate.observe(visible) {
            GateAction::None => {}
            GateAction::Start => self.engine.start(now_ms),
            GateAction::Reset => {
                self.engine.reset();
                // Declarative animations replay via element re-instantiation.
                self.replay_epoch += 1;
            }
        }
    }

    /// Current renderable snapshot.
    #[must_use]
    pub fn frame(&self) -> PreviewFrame {
        let root = match self.config.resolved_link() {
            Some(href) => RootNode::Link { href },
            None => RootNode::Block,
        };

        let mut declarations = self.composed.declarations.clone();
        let (text, caret) = match &self.engine {
            Engine::Declarative => (self.config.content.clone(), false),
            Engine::Typewriter(stepper) => {
                // The typed buffer flows as a block so wrapped lines align
                // the same way they will in the exported document.
                if let Some(entry) = declarations.iter_mut().find(|(k, _)| k == "display") {
                    entry.1 = "block".to_string();
                } else {
                    declarations.push(("display".to_string(), "block".to_string()));
                }
                (stepper.typed_text(), true)
            }
            Engine::Countdown(ticker) => (ticker.display().to_string(), false),
        };

        PreviewFrame {
            root,
            declarations,
            animation_shorthand: self.composed.animation_shorthand(),
            paused: self.config.defer_until_visible && !self.gate.is_running(),
            text,
            caret,
            style_key: format!("{}#{}", self.key, self.replay_epoch),
        }
    }

    /// The configuration currently rendered.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The composed style currently rendered.
    #[must_use]
    pub fn composed(&self) -> &ComposedStyle {
        &self.composed
    }
}
