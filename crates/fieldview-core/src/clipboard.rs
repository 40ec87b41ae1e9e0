//! Copy-to-clipboard collaborator.
//!
//! This module provides:
//! - A backend trait so hosts can plug in the platform clipboard
//! - An in-memory backend for headless use and tests
//! - [`ClipboardService`], which copies a field's display value
//! - [`CopyFeedback`], the per-field transient "copied" flag owned by the UI

use crate::field::Field;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

/// How long the "copied" feedback stays visible by default.
pub const DEFAULT_FEEDBACK_DURATION: Duration = Duration::from_secs(2);

/// Result of a clipboard operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardResult {
    /// Operation succeeded.
    Success,
    /// Copying is turned off in the display settings.
    Disabled,
    /// Clipboard is not available in this environment.
    Unavailable,
    /// Permission denied.
    PermissionDenied,
    /// Other error.
    Error(String),
}

impl ClipboardResult {
    /// Check if operation was successful.
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }

    /// Check if operation failed.
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }
}

/// Destination for copied text.
pub trait ClipboardBackend {
    /// Write plain text.
    fn write_text(&mut self, text: &str) -> ClipboardResult;
}

/// In-memory clipboard. Clones share the same storage.
#[derive(Debug, Clone)]
pub struct MemoryClipboard {
    data: Arc<RwLock<Option<String>>>,
    available: bool,
    writes: u64,
}

impl MemoryClipboard {
    /// Create an available clipboard.
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(None)),
            available: true,
            writes: 0,
        }
    }

    /// Create an unavailable clipboard (for testing).
    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::new()
        }
    }

    /// Check if clipboard is available.
    pub const fn is_available(&self) -> bool {
        self.available
    }

    /// Read the stored text.
    pub fn read_text(&self) -> Option<String> {
        self.data.read().ok().and_then(|data| data.clone())
    }

    /// Number of successful writes.
    pub const fn writes(&self) -> u64 {
        self.writes
    }
}

impl Default for MemoryClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn write_text(&mut self, text: &str) -> ClipboardResult {
        if !self.available {
            return ClipboardResult::Unavailable;
        }
        if let Ok(mut data) = self.data.write() {
            *data = Some(text.to_string());
        } else {
            return ClipboardResult::Error("Lock error".to_string());
        }
        self.writes += 1;
        ClipboardResult::Success
    }
}

/// Copies field values through a backend, honoring the copy setting.
#[derive(Debug)]
pub struct ClipboardService<B> {
    backend: B,
    enabled: bool,
}

impl<B: ClipboardBackend> ClipboardService<B> {
    /// Create a service over `backend`.
    pub const fn new(backend: B, enabled: bool) -> Self {
        Self { backend, enabled }
    }

    /// Whether copying is enabled.
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Toggle copying.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Access the backend.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Copy the field's display value. Failures are returned, never raised.
    pub fn copy(&mut self, field: &Field) -> ClipboardResult {
        if !self.enabled {
            return ClipboardResult::Disabled;
        }
        let result = self.backend.write_text(&field.display_value());
        if result.is_error() {
            tracing::debug!(key = %field.key, ?result, "clipboard copy failed");
        }
        result
    }
}

/// Per-field "just copied" flags, each expiring after a fixed duration.
///
/// Time is supplied by the caller so the UI keeps ownership of its clock.
#[derive(Debug, Clone)]
pub struct CopyFeedback {
    copied_at: HashMap<String, Instant>,
    duration: Duration,
}

impl Default for CopyFeedback {
    fn default() -> Self {
        Self::new(DEFAULT_FEEDBACK_DURATION)
    }
}

impl CopyFeedback {
    /// Create feedback state with the given visibility window.
    pub fn new(duration: Duration) -> Self {
        Self {
            copied_at: HashMap::new(),
            duration,
        }
    }

    /// Record a copy, if it succeeded.
    pub fn record(&mut self, key: &str, result: &ClipboardResult, now: Instant) {
        if result.is_success() {
            self.copied_at.insert(key.to_string(), now);
        }
    }

    /// Whether the field should currently show "copied".
    pub fn is_active(&self, key: &str, now: Instant) -> bool {
        self.copied_at
            .get(key)
            .is_some_and(|at| now.saturating_duration_since(*at) < self.duration)
    }

    /// Drop expired flags.
    pub fn expire(&mut self, now: Instant) {
        let duration = self.duration;
        self.copied_at
            .retain(|_, at| now.saturating_duration_since(*at) < duration);
    }

    /// Number of tracked flags.
    pub fn len(&self) -> usize {
        self.copied_at.len()
    }

    /// Check if no flags are tracked.
    pub fn is_empty(&self) -> bool {
        self.copied_at.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DeniedClipboard;

    impl ClipboardBackend for DeniedClipboard {
        fn write_text(&mut self, _text: &str) -> ClipboardResult {
            ClipboardResult::PermissionDenied
        }
    }

    #[test]
    fn test_clipboard_result_is_success() {
        assert!(ClipboardResult::Success.is_success());
        assert!(!ClipboardResult::Unavailable.is_success());
        assert!(ClipboardResult::Error("x".into()).is_error());
        assert!(ClipboardResult::Disabled.is_error());
    }

    #[test]
    fn test_memory_clipboard_write() {
        let mut clipboard = MemoryClipboard::new();
        assert!(clipboard.write_text("hello").is_success());
        assert_eq!(clipboard.read_text(), Some("hello".to_string()));
        assert_eq!(clipboard.writes(), 1);
    }

    #[test]
    fn test_memory_clipboard_shared_storage() {
        let mut clipboard = MemoryClipboard::new();
        let observer = clipboard.clone();
        clipboard.write_text("shared");
        assert_eq!(observer.read_text(), Some("shared".to_string()));
    }

    #[test]
    fn test_unavailable_clipboard() {
        let mut clipboard = MemoryClipboard::unavailable();
        assert!(!clipboard.is_available());
        assert_eq!(clipboard.write_text("x"), ClipboardResult::Unavailable);
        assert_eq!(clipboard.read_text(), None);
    }

    #[test]
    fn test_service_copies_display_value() {
        let mut service = ClipboardService::new(MemoryClipboard::new(), true);
        let field = Field::new("total", "Total", 150_i64);
        assert!(service.copy(&field).is_success());
        assert_eq!(service.backend().read_text(), Some("150".to_string()));
    }

    #[test]
    fn test_service_disabled() {
        let mut service = ClipboardService::new(MemoryClipboard::new(), false);
        let field = Field::new("a", "A", "x");
        assert_eq!(service.copy(&field), ClipboardResult::Disabled);
        assert_eq!(service.backend().writes(), 0);

        service.set_enabled(true);
        assert!(service.copy(&field).is_success());
    }

    #[test]
    fn test_service_permission_denied() {
        let mut service = ClipboardService::new(DeniedClipboard, true);
        let result = service.copy(&Field::new("a", "A", "x"));
        assert_eq!(result, ClipboardResult::PermissionDenied);
    }

    #[test]
    fn test_feedback_expires() {
        let start = Instant::now();
        let mut feedback = CopyFeedback::new(Duration::from_millis(500));
        feedback.record("a", &ClipboardResult::Success, start);

        assert!(feedback.is_active("a", start + Duration::from_millis(100)));
        assert!(!feedback.is_active("b", start));
        assert!(!feedback.is_active("a", start + Duration::from_millis(600)));

        feedback.expire(start + Duration::from_millis(600));
        assert!(feedback.is_empty());
    }

    #[test]
    fn test_feedback_ignores_failures() {
        let now = Instant::now();
        let mut feedback = CopyFeedback::default();
        feedback.record("a", &ClipboardResult::Unavailable, now);
        assert!(!feedback.is_active("a", now));
        assert_eq!(feedback.len(), 0);
    }
}
