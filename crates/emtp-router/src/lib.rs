//! EMTP Router
//!
//! The dispatch core of the EMTP stack. The router accepts raw framed bytes,
//! classifies them by type tag, resolves the destination address against its
//! registries and delivers the payload, or emits one diagnostic describing
//! exactly why delivery failed.
//!
//! # Example
//!
//! ```
//! use emtp_router::Router;
//!
//! let router = Router::new();
//! // malformed input is logged and recovered, never a panic
//! router.recv(b"qwerty");
//! ```

pub mod diagnostics;
pub mod error;
pub mod router;

pub use diagnostics::{Diagnostic, DiagnosticSink, MemorySink, Severity, TracingSink};
pub use error::{Result, RouterError};
pub use router::Router;
