//! Router diagnostics
//!
//! Every non-success path through [`Router::recv`](crate::Router::recv)
//! emits exactly one [`Diagnostic`]. The sink is injected into the router so
//! tests and embedders can capture diagnostics in memory instead of scraping
//! global logging state; the default [`TracingSink`] forwards to `tracing`.
//!
//! The rendered message texts are an observable contract: peers' operators
//! grep logs for them, so they must not drift.

use bytes::Bytes;
use emtp_core::Address;
use parking_lot::Mutex;
use std::fmt;
use tracing::{error, info};

/// A single diagnostic record produced by the dispatch state machine
#[derive(Debug, Clone)]
pub enum Diagnostic {
    /// Input did not match the frame grammar
    ParseFailure { input: Bytes },
    /// A routed frame's destination had no registered client, or the client
    /// refused the payload
    DeliveryFailure { destination: Address },
    /// A direct frame reached its terminus
    DirectFrame { source: Address, payload: Bytes },
    /// Type tag outside the known set
    UnrecognizedType { tag: u8 },
}

/// Log level of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::DirectFrame { .. } => Severity::Info,
            _ => Severity::Error,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::ParseFailure { input } => {
                write!(
                    f,
                    "Router could not parse frame: '{}'",
                    String::from_utf8_lossy(input)
                )
            }
            Diagnostic::DeliveryFailure { destination } => {
                write!(f, "Router could not deliver frame: {}", destination)
            }
            Diagnostic::DirectFrame { source, payload } => {
                // "recieved" is the historical log text; deployed tooling
                // greps for it verbatim
                write!(
                    f,
                    "Frame recieved directly from {}: '{}'",
                    source,
                    String::from_utf8_lossy(payload)
                )
            }
            Diagnostic::UnrecognizedType { tag } => {
                write!(
                    f,
                    "Frame has a type that the router does not understand: '{}'",
                    char::from(*tag)
                )
            }
        }
    }
}

/// Where the router reports its diagnostics
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: Diagnostic);
}

/// Default sink: forwards to `tracing` at the diagnostic's severity
#[derive(Debug, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&self, diagnostic: Diagnostic) {
        match diagnostic.severity() {
            Severity::Info => info!("{}", diagnostic),
            Severity::Error => error!("{}", diagnostic),
        }
    }
}

/// In-memory sink collecting rendered diagnostics, for tests and harnesses
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<(Severity, String)>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered messages, in emission order
    pub fn records(&self) -> Vec<String> {
        self.records.lock().iter().map(|(_, m)| m.clone()).collect()
    }

    /// True if any record contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.records.lock().iter().any(|(_, m)| m.contains(needle))
    }

    /// Severity of the record at `index`, if present
    pub fn severity_at(&self, index: usize) -> Option<Severity> {
        self.records.lock().get(index).map(|(s, _)| *s)
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, diagnostic: Diagnostic) {
        self.records
            .lock()
            .push((diagnostic.severity(), diagnostic.to_string()));
    }
}
