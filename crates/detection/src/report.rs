/// Per-frame conditions the pipeline surfaces without failing the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// Output tensor shape matched no known layout.
    UnrecognizedFormat,
    /// Output buffer was empty.
    EmptyOutput,
}

/// Reporting collaborator injected into the pipeline.
///
/// Replaces the process-wide logger of earlier revisions: callers decide
/// where conditions go (logs, counters, test capture).
pub trait Reporter {
    fn report(&self, kind: ReportKind, message: &str);
}

/// Forwards reports to `tracing` at warn level.
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, kind: ReportKind, message: &str) {
        tracing::warn!(kind = ?kind, "{message}");
    }
}

/// Discards all reports.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report(&self, _kind: ReportKind, _message: &str) {}
}
