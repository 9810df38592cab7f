//! In-memory jack

use bytes::Bytes;
use emtp_core::{Address, Endpoint, Jack};
use emtp_router::Router;
use parking_lot::Mutex;
use tracing::debug;

/// A jack whose transport is an in-memory queue
///
/// Outbound frames delivered by the router are queued instead of written to
/// a socket. Useful in tests and in embeddings where the host application
/// shuttles frames itself; socket-backed jacks implement the same
/// [`Jack`] trait.
pub struct LoopbackJack {
    address: Address,
    outbound: Mutex<Vec<Bytes>>,
}

impl LoopbackJack {
    /// Create a jack bound to `address`
    pub fn new(address: Address) -> Self {
        Self {
            address,
            outbound: Mutex::new(Vec::new()),
        }
    }

    /// Take all queued outbound frames, oldest first
    pub fn drain(&self) -> Vec<Bytes> {
        std::mem::take(&mut *self.outbound.lock())
    }

    /// Number of queued outbound frames
    pub fn pending(&self) -> usize {
        self.outbound.lock().len()
    }

    /// Feed every queued frame into `router`, as if read off the wire
    pub fn flush_into(&self, router: &Router) {
        for frame in self.drain() {
            router.recv(&frame);
        }
    }
}

impl Endpoint for LoopbackJack {
    fn address(&self) -> &Address {
        &self.address
    }

    fn deliver(&self, payload: Bytes) -> emtp_core::Result<()> {
        debug!("Jack {} queued {} outbound bytes", self.address, payload.len());
        self.outbound.lock().push(payload);
        Ok(())
    }
}

impl Jack for LoopbackJack {}
