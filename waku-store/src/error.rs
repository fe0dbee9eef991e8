use crate::response::HistoryErrorKind;
use crate::transport::TransportError;

/// The bytes received from a store node are not a valid store response.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("invalid protobuf: {0}")]
    Decode(#[from] prost::DecodeError),

    #[error("missing field: {0}")]
    MissingField(&'static str),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no store peer available")]
    NoPeerAvailable,

    #[error("failed to decode store response: {0}")]
    Codec(#[from] CodecError),

    #[error("store query timed out")]
    QueryTimeout,

    #[error("store node returned an error: {0}")]
    StoreQuery(HistoryErrorKind),

    #[error("store request failed: {0}")]
    Transport(TransportError),
}

impl From<TransportError> for StoreError {
    fn from(err: TransportError) -> Self {
        match err {
            TransportError::Timeout => StoreError::QueryTimeout,
            err => StoreError::Transport(err),
        }
    }
}

impl From<HistoryErrorKind> for StoreError {
    fn from(kind: HistoryErrorKind) -> Self {
        StoreError::StoreQuery(kind)
    }
}
