//! Non-fatal diagnostics raised while normalising fill inputs.
//!
//! Callers choose where diagnostics go by passing a [`DiagnosticSink`].
//! [`LogSink`] forwards them to the `log` facade; any `FnMut(&Diagnostic)`
//! closure also works as a sink.

use std::fmt;

use crate::error::Axis;

#[derive(Debug, Clone, PartialEq)]
pub enum Diagnostic {
    /// A fractional seed coordinate was truncated toward zero.
    CoordinateTruncated { axis: Axis, from: f64, to: usize },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::CoordinateTruncated { axis, from, to } => {
                write!(f, "{axis} truncated from {from} to {to}")
            }
        }
    }
}

pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: &Diagnostic);
}

impl<F: FnMut(&Diagnostic)> DiagnosticSink for F {
    fn report(&mut self, diagnostic: &Diagnostic) {
        self(diagnostic)
    }
}

/// Sink that emits every diagnostic as a `log::warn!` record.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: &Diagnostic) {
        log::warn!("{diagnostic}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_sink_collects() {
        let mut seen = Vec::new();
        let mut sink = |d: &Diagnostic| seen.push(d.clone());
        sink.report(&Diagnostic::CoordinateTruncated { axis: Axis::X, from: 1.5, to: 1 });
        assert_eq!(seen.len(), 1);
    }

    #[test]
    fn test_display() {
        let d = Diagnostic::CoordinateTruncated { axis: Axis::Y, from: 2.75, to: 2 };
        assert_eq!(d.to_string(), "y truncated from 2.75 to 2");
    }
}
