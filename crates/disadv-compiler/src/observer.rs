//! Injected observability hooks
//!
//! The compiler reports informational and warning signals through a
//! [`CompileObserver`] passed in by the caller instead of talking to a
//! process-wide logger. The default implementation routes to `tracing`;
//! tests typically use [`NullObserver`] or a recording stub.

/// Receiver for compilation signals
pub trait CompileObserver {
    /// Informational signal (validation passed, message generated)
    fn info(&self, message: &str);

    /// Non-fatal warning signal (entry skipped, weight not aggregated)
    fn warn(&self, message: &str);

    /// Error signal (validation failed, compilation aborted)
    fn error(&self, message: &str);
}

/// Observer that forwards signals to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl CompileObserver for TracingObserver {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn warn(&self, message: &str) {
        tracing::warn!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}

/// Observer that discards all signals
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl CompileObserver for NullObserver {
    fn info(&self, _message: &str) {}

    fn warn(&self, _message: &str) {}

    fn error(&self, _message: &str) {}
}
