//! Error types for EMTP core

use thiserror::Error;

/// Result type alias for EMTP core operations
pub type Result<T> = std::result::Result<T, Error>;

/// EMTP core error types
#[derive(Error, Debug)]
pub enum Error {
    /// Frame input was empty
    #[error("empty frame")]
    EmptyFrame,

    /// Frame has no NUL separator after its descriptor slot
    #[error("frame has no descriptor separator")]
    MissingSeparator,

    /// Address descriptor could not be decoded
    #[error("bad address descriptor: {0}")]
    BadDescriptor(String),

    /// Address has zero components
    #[error("address must have at least one component")]
    EmptyAddress,

    /// An endpoint refused a delivered payload
    #[error("delivery failed: {0}")]
    Delivery(String),
}
