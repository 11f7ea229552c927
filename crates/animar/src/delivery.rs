//! Delivery of the compiled document to the user.
//!
//! Two fire-and-forget targets: a clipboard write and a file download. The
//! core only knows "deliver string S"; everything else (OS clipboards,
//! browser download UX) stays behind [`DeliverySink`]. The clipboard path
//! is best-effort: a failure is logged and swallowed, and the user simply
//! does not see the transient confirmation.

use std::path::PathBuf;

use crate::result::{AnimarError, AnimarResult};

/// Suggested filename for the download target.
pub const SUGGESTED_FILENAME: &str = "animation.html";

/// How long the "copied" confirmation stays visible.
pub const COPIED_FLASH_MS: u64 = 2_000;

/// A place a compiled document can be handed to.
pub trait DeliverySink {
    /// Short target name, for logs.
    fn name(&self) -> &'static str;

    /// Deliver the document.
    fn deliver(&mut self, document: &str) -> AnimarResult<()>;
}

/// Writes the document to `animation.html` under a directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    /// Sink writing into the given directory.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Full path of the file this sink writes.
    #[must_use]
    pub fn path(&self) -> PathBuf {
        self.dir.join(SUGGESTED_FILENAME)
    }
}

impl DeliverySink for FileSink {
    fn name(&self) -> &'static str {
        "file"
    }

    fn deliver(&mut self, document: &str) -> AnimarResult<()> {
        std::fs::write(self.path(), document)?;
        tracing::debug!(path = %self.path().display(), bytes = document.len(), "document written");
        Ok(())
    }
}

/// Writes the document to the system clipboard.
#[cfg(feature = "clipboard")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ClipboardSink;

#[cfg(feature = "clipboard")]
impl DeliverySink for ClipboardSink {
    fn name(&self) -> &'static str {
        "clipboard"
    }

    fn deliver(&mut self, document: &str) -> AnimarResult<()> {
        let mut clipboard = arboard::Clipboard::new().map_err(|e| AnimarError::Clipboard {
            message: e.to_string(),
        })?;
        clipboard
            .set_text(document.to_string())
            .map_err(|e| AnimarError::Clipboard {
                message: e.to_string(),
            })
    }
}

/// Tracks the transient "copied" confirmation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeliveryState {
    copied_until_ms: Option<u64>,
}

impl DeliveryState {
    /// No confirmation showing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            copied_until_ms: None,
        }
    }

    /// Record a successful copy at `now_ms`.
    pub fn mark_copied(&mut self, now_ms: u64) {
        self.copied_until_ms = Some(now_ms + COPIED_FLASH_MS);
    }

    /// Whether the confirmation is currently visible.
    #[must_use]
    pub fn copied(&self, now_ms: u64) -> bool {
        self.copied_until_ms.is_some_and(|until| now_ms < until)
    }
}

/// Copy the document to a sink, best-effort.
///
/// Success flips the confirmation flag for [`COPIED_FLASH_MS`]. Failure is
/// logged and otherwise ignored; nothing propagates to the caller.
pub fn copy_best_effort(
    sink: &mut dyn DeliverySink,
    state: &mut DeliveryState,
    document: &str,
    now_ms: u64,
) {
    match sink.deliver(document) {
        Ok(()) => {
            state.mark_copied(now_ms);
            tracing::debug!(target_name = sink.name(), bytes = document.len(), "document delivered");
        }
        Err(error) => {
            tracing::warn!(target_name = sink.name(), %error, "best-effort delivery failed");
        }
    }
}
