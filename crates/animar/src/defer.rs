//! The deferred-start protocol.
//!
//! One state machine gates when an animation's running state flips from
//! paused to running. The preview drives it with host visibility callbacks;
//! the compiled document mirrors the same transitions in its observer
//! script. Keeping the protocol in one place is what makes the two targets
//! behave identically.

use serde::{Deserialize, Serialize};

/// Fraction of the container that must be visible to count as "in view".
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

/// Start delay for imperative steppers when the start is not deferred.
pub const IMMEDIATE_START_DELAY_MS: u64 = 500;

/// When the animation is allowed to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartMode {
    /// Start unconditionally, shortly after load.
    Immediate,
    /// Start on the first transition into view; reset on leaving view.
    OnVisible,
}

impl StartMode {
    /// Map the configuration flag to a mode.
    #[must_use]
    pub const fn from_deferred(defer_until_visible: bool) -> Self {
        if defer_until_visible {
            Self::OnVisible
        } else {
            Self::Immediate
        }
    }
}

/// What the host must do after feeding the gate an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateAction {
    /// Nothing changed.
    None,
    /// Start the imperative stepper, or flip the declarative animation's
    /// run state to running.
    Start,
    /// Fully reset the stepper, or replay the declarative animation from
    /// the beginning on the next start.
    Reset,
}

/// The deferred-start state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibilityGate {
    mode: StartMode,
    running: bool,
}

impl VisibilityGate {
    /// Gate in its initial, paused state.
    #[must_use]
    pub const fn new(mode: StartMode) -> Self {
        Self {
            mode,
            running: false,
        }
    }

    /// Called once when the session (or document) begins.
    ///
    /// Immediate mode starts here; the fixed start delay is owned by the
    /// caller's scheduler, not by the gate.
    pub fn session_start(&mut self) -> GateAction {
        if self.mode == StartMode::Immediate && !self.running {
            self.running = true;
            GateAction::Start
        } else {
            GateAction::None
        }
    }

    /// Feed a visibility transition.
    ///
    /// Only meaningful in [`StartMode::OnVisible`]; an immediate-mode gate
    /// ignores visibility entirely. Entering view starts, leaving view
    /// resets, and repeated events in the same state are no-ops, so rapid
    /// scroll-in/scroll-out yields strictly alternating actions.
    pub fn observe(&mut self, visible: bool) -> GateAction {
        if self.mode != StartMode::OnVisible {
            return GateAction::None;
        }
        if visible && !self.running {
            self.running = true;
            GateAction::Start
        } else if !visible && self.running {
            self.running = false;
            GateAction::Reset
        } else {
            GateAction::None
        }
    }

    /// Whether the animation is currently allowed to run.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }
}
