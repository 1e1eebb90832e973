//! Optional trace collection for the Θ walk.
//!
//! The Θ engine can report what it decided (trans-pair assignments, the
//! per-projection contributions) through a caller-supplied sink. The
//! default sink, [`NoTrace`], collects nothing, and the engines themselves
//! never print or log.

/// An appendable sink for human-readable trace lines.
pub trait TraceSink {
    /// Record one trace line.
    fn record(&mut self, line: &str);
}

/// Sink that discards every line; the default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoTrace;

impl TraceSink for NoTrace {
    fn record(&mut self, _line: &str) {}
}

/// Collect trace lines into a vector.
impl TraceSink for Vec<String> {
    fn record(&mut self, line: &str) {
        self.push(line.to_owned());
    }
}
