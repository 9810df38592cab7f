//! Endpoint capability surface
//!
//! The router depends on exactly this much of its collaborators: an endpoint
//! exposes the address it is bound to and accepts delivered payloads. [`Jack`]
//! and [`Client`] refine [`Endpoint`] to select the registry an implementor
//! belongs to at the type level; concrete transports and payload crypto live
//! behind them and never leak into the dispatch core.

use crate::{Address, Result};
use bytes::Bytes;

/// Something the router can register under an address and deliver to
pub trait Endpoint: Send + Sync {
    /// The address this endpoint is bound to
    fn address(&self) -> &Address;

    /// Hand a payload to this endpoint
    ///
    /// Delivery is all-or-nothing: the payload is either fully accepted or
    /// the call fails and the router records a delivery failure.
    fn deliver(&self, payload: Bytes) -> Result<()>;
}

/// Transport-facing endpoint; `deliver` transmits an encoded frame outward
pub trait Jack: Endpoint {}

/// Logical, application-facing endpoint; the terminus of routed frames
pub trait Client: Endpoint {}
