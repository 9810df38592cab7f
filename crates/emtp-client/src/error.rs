//! Client error types

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("no jack attached")]
    NoJack,

    #[error("send failed: {0}")]
    SendFailed(String),

    #[error("protocol error: {0}")]
    Protocol(#[from] emtp_core::Error),

    #[error("registration error: {0}")]
    Registration(#[from] emtp_router::RouterError),
}
