//! Output sinks for per-request outcome lines.

/// Destination for outcome and completion lines.
///
/// Implementations must tolerate concurrent emits; units of a group report
/// as they finish.
pub trait OutputSink: Send + Sync {
    fn emit(&self, line: &str);
}

/// Sink that writes each line to standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutSink;

impl OutputSink for StdoutSink {
    fn emit(&self, line: &str) {
        println!("{}", line);
    }
}
