//! Logical client endpoint

use std::sync::Arc;

use bytes::Bytes;
use emtp_core::{Address, Client, Endpoint, Frame, Jack};
use emtp_router::Router;
use parking_lot::{Mutex, RwLock};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Callback invoked for every payload delivered to a [`MessageClient`]
pub type ReceiveCallback = Arc<dyn Fn(&Address, &Bytes) + Send + Sync>;

/// A logical endpoint bound to one address
///
/// The terminus of routed frames. Delivered payloads land in an inbox and
/// are handed to the receive callback if one is set. A client may optionally
/// own a jack for its own transport; without one it can still send through a
/// local router with [`MessageClient::send_via`].
pub struct MessageClient {
    address: Address,
    /// Optional transport binding for outbound frames
    jack: RwLock<Option<Arc<dyn Jack>>>,
    handler: RwLock<Option<ReceiveCallback>>,
    inbox: Mutex<Vec<Bytes>>,
}

impl MessageClient {
    /// Create a client bound to `address`
    pub fn new(address: Address) -> Self {
        Self {
            address,
            jack: RwLock::new(None),
            handler: RwLock::new(None),
            inbox: Mutex::new(Vec::new()),
        }
    }

    /// Register this client with a router
    pub fn register(self: &Arc<Self>, router: &Router) -> Result<()> {
        router.load_client(Arc::clone(self) as Arc<dyn Client>)?;
        Ok(())
    }

    /// Attach the jack this client transmits through
    pub fn attach_jack(&self, jack: Arc<dyn Jack>) {
        *self.jack.write() = Some(jack);
    }

    /// Set the receive callback, replacing any previous one
    pub fn on_receive(&self, callback: impl Fn(&Address, &Bytes) + Send + Sync + 'static) {
        *self.handler.write() = Some(Arc::new(callback));
    }

    /// Payloads delivered so far, oldest first
    pub fn received(&self) -> Vec<Bytes> {
        self.inbox.lock().clone()
    }

    /// Encode a routed frame and hand it to the attached jack
    pub fn send(&self, destination: &Address, payload: impl Into<Bytes>) -> Result<()> {
        let frame = Frame::routed(destination.clone(), payload.into());
        let encoded = frame.encode()?;

        let jack = self.jack.read().as_ref().cloned().ok_or(ClientError::NoJack)?;
        debug!("Sending {} bytes to {}", encoded.len(), destination);
        jack.deliver(encoded)
            .map_err(|e| ClientError::SendFailed(e.to_string()))
    }

    /// Encode a routed frame and feed it straight into a local router
    ///
    /// Exercises the full wire path without any transport; the router parses
    /// the encoded bytes exactly as if a jack had read them off a socket.
    pub fn send_via(
        &self,
        router: &Router,
        destination: &Address,
        payload: impl Into<Bytes>,
    ) -> Result<()> {
        let frame = Frame::routed(destination.clone(), payload.into());
        let encoded = frame.encode()?;
        router.recv(&encoded);
        Ok(())
    }
}

impl Endpoint for MessageClient {
    fn address(&self) -> &Address {
        &self.address
    }

    fn deliver(&self, payload: Bytes) -> emtp_core::Result<()> {
        debug!("Client {} received {} bytes", self.address, payload.len());
        self.inbox.lock().push(payload.clone());
        // clone the handle and release the lock first, so a callback may
        // call `on_receive` itself without deadlocking
        let handler = self.handler.read().clone();
        if let Some(handler) = handler {
            handler(&self.address, &payload);
        }
        Ok(())
    }
}

impl Client for MessageClient {}
