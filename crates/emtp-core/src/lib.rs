//! EMTP Core
//!
//! Core types and wire primitives for EMTP (Encrypted Message Transport
//! Protocol).
//!
//! This crate provides:
//! - Routing addresses and their JSON descriptor codec ([`Address`])
//! - Wire frame parsing and encoding ([`Frame`], [`FrameKind`])
//! - The endpoint capability surface ([`Endpoint`], [`Jack`], [`Client`])
//!
//! Transport bindings and payload crypto live behind the endpoint traits and
//! are supplied by collaborator crates; nothing here performs I/O.

pub mod address;
pub mod endpoint;
pub mod error;
pub mod frame;

pub use address::{Address, Component};
pub use endpoint::{Client, Endpoint, Jack};
pub use error::{Error, Result};
pub use frame::{Frame, FrameKind};

/// Separator between a frame's address descriptor and its payload.
pub const SEPARATOR: u8 = 0x00;

/// Type tag for frames routed to a registered client.
pub const TAG_ROUTED: u8 = b'r';

/// Type tag for frames that arrived already at their terminus.
pub const TAG_DIRECT: u8 = b's';
