//! The dispatch core
//!
//! The router owns two registries keyed by [`Address`], one per endpoint
//! kind. Jacks bridge raw transports and feed inbound bytes to [`Router::recv`];
//! clients are the logical termini that routed frames resolve to. Dispatch is
//! synchronous: each `recv` runs parse → classify → resolve → deliver to
//! completion and never blocks on I/O itself.
//!
//! `recv` models an untrusted-input boundary. Malformed or undeliverable
//! frames are contained: each such frame produces exactly one diagnostic and
//! the call returns normally, so adversarial or buggy peers cannot
//! destabilize the router. Registration failures, by contrast, are
//! caller-actionable and returned as errors.

use std::sync::Arc;

use bytes::Bytes;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use emtp_core::{Address, Client, Frame, FrameKind, Jack};
use tracing::debug;

use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::{Result, RouterError};

/// EMTP router
pub struct Router {
    /// Transport-facing endpoints, one per bound address
    jacks: DashMap<Address, Arc<dyn Jack>>,
    /// Logical endpoints, one per bound address
    clients: DashMap<Address, Arc<dyn Client>>,
    /// Diagnostic sink for the observable failure channel
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Router {
    /// Create a router reporting through `tracing`
    pub fn new() -> Self {
        Self::with_diagnostics(Arc::new(TracingSink))
    }

    /// Create a router reporting to an injected sink
    pub fn with_diagnostics(diagnostics: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            jacks: DashMap::new(),
            clients: DashMap::new(),
            diagnostics,
        }
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register a jack under its bound address.
    ///
    /// Insert-if-absent is atomic; a second jack at an occupied address is
    /// rejected with [`RouterError::JackAlreadyLoaded`] and nothing mutates.
    pub fn load_jack(&self, jack: Arc<dyn Jack>) -> Result<()> {
        match self.jacks.entry(jack.address().clone()) {
            Entry::Occupied(entry) => Err(RouterError::JackAlreadyLoaded(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!("Loaded jack at {}", entry.key());
                entry.insert(jack);
                Ok(())
            }
        }
    }

    /// Register a client under its bound address.
    ///
    /// Same uniqueness rule as [`Router::load_jack`], scoped to the client
    /// registry; the two keyspaces do not interfere.
    pub fn load_client(&self, client: Arc<dyn Client>) -> Result<()> {
        match self.clients.entry(client.address().clone()) {
            Entry::Occupied(entry) => Err(RouterError::ClientAlreadyLoaded(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!("Loaded client at {}", entry.key());
                entry.insert(client);
                Ok(())
            }
        }
    }

    /// Look up the jack registered at `address`
    pub fn jack(&self, address: &Address) -> Option<Arc<dyn Jack>> {
        self.jacks.get(address).map(|e| Arc::clone(e.value()))
    }

    /// Look up the client registered at `address`
    pub fn client(&self, address: &Address) -> Option<Arc<dyn Client>> {
        self.clients.get(address).map(|e| Arc::clone(e.value()))
    }

    /// Number of registered jacks
    pub fn jack_count(&self) -> usize {
        self.jacks.len()
    }

    /// Number of registered clients
    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    // =========================================================================
    // Receive & Dispatch
    // =========================================================================

    /// Handle one inbound frame.
    ///
    /// Called by jacks (or harnesses) with the raw bytes they read off their
    /// transport. Every path either completes a delivery or emits exactly one
    /// diagnostic; malformed input never propagates as an error.
    pub fn recv(&self, raw: &[u8]) {
        debug!("Handling frame: {:?}", String::from_utf8_lossy(raw));

        let frame = match Frame::parse(raw) {
            Ok(frame) => frame,
            Err(e) => {
                debug!("Parse error: {}", e);
                self.diagnostics.emit(Diagnostic::ParseFailure {
                    input: Bytes::copy_from_slice(raw),
                });
                return;
            }
        };

        let Frame { kind, payload } = frame;
        match kind {
            FrameKind::Routed { destination } => match self.client(&destination) {
                Some(client) => {
                    if let Err(e) = client.deliver(payload) {
                        debug!("Client at {} refused payload: {}", destination, e);
                        self.diagnostics
                            .emit(Diagnostic::DeliveryFailure { destination });
                    }
                }
                None => {
                    self.diagnostics
                        .emit(Diagnostic::DeliveryFailure { destination });
                }
            },
            FrameKind::Direct { source } => {
                self.diagnostics
                    .emit(Diagnostic::DirectFrame { source, payload });
            }
            FrameKind::Unrecognized { tag } => {
                self.diagnostics.emit(Diagnostic::UnrecognizedType { tag });
            }
        }
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}
