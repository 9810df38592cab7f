//! Router error types

use emtp_core::Address;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RouterError>;

#[derive(Error, Debug)]
pub enum RouterError {
    #[error("jack already loaded at {0}")]
    JackAlreadyLoaded(Address),

    #[error("client already loaded at {0}")]
    ClientAlreadyLoaded(Address),

    #[error("core protocol error: {0}")]
    Core(#[from] emtp_core::Error),
}
