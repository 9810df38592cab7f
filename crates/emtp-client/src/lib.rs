//! EMTP Client
//!
//! Interface-level endpoints for the EMTP dispatch core: a logical
//! [`MessageClient`] that terminates routed frames, and a [`LoopbackJack`]
//! that stands in for a socket-backed transport. Real transports and payload
//! crypto plug in behind the same `emtp-core` traits.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use emtp_client::MessageClient;
//! use emtp_core::{Address, Component};
//! use emtp_router::Router;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let router = Router::new();
//! let address = Address::new(vec![
//!     Component::from("local"),
//!     Component::Null,
//!     Component::from("example"),
//! ])?;
//!
//! let client = Arc::new(MessageClient::new(address.clone()));
//! client.register(&router)?;
//!
//! // loops back through the wire codec and the router
//! client.send_via(&router, &address, "Jam and cookies")?;
//! assert_eq!(client.received().len(), 1);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod jack;

pub use client::{MessageClient, ReceiveCallback};
pub use error::{ClientError, Result};
pub use jack::LoopbackJack;
