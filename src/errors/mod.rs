use std::fmt;

pub mod prelude {
    pub use super::{
        err_msg, UrsaCryptoError, UrsaCryptoErrorExt, UrsaCryptoErrorKind, UrsaCryptoResult,
    };
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, thiserror::Error)]
pub enum UrsaCryptoErrorKind {
    // Common errors
    #[error("Invalid library state")]
    InvalidState,
    #[error("Invalid structure")]
    InvalidStructure,
    #[error("Invalid parameter {0}")]
    InvalidParam(u32),
    #[error("IO error")]
    IOError,
    // CL errors
    #[error("Proof rejected")]
    ProofRejected,
    #[error("Revocation accumulator is full")]
    RevocationAccumulatorIsFull,
    #[error("Invalid revocation id")]
    InvalidRevocationAccumulatorIndex,
    #[error("Credential revoked")]
    CredentialRevoked,
}

/// Error returned by every fallible operation of the crate.
///
/// Carries the error kind callers branch on and a human readable message
/// describing the concrete failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrsaCryptoError {
    kind: UrsaCryptoErrorKind,
    msg: String,
}

impl UrsaCryptoError {
    pub fn from_msg<D>(kind: UrsaCryptoErrorKind, msg: D) -> UrsaCryptoError
    where
        D: fmt::Display + fmt::Debug + Send + Sync + 'static,
    {
        UrsaCryptoError {
            kind,
            msg: msg.to_string(),
        }
    }

    pub fn kind(&self) -> UrsaCryptoErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for UrsaCryptoError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.msg.is_empty() {
            write!(f, "{}", self.kind)
        } else {
            write!(f, "{}: {}", self.kind, self.msg)
        }
    }
}

impl std::error::Error for UrsaCryptoError {}

pub fn err_msg<D>(kind: UrsaCryptoErrorKind, msg: D) -> UrsaCryptoError
where
    D: fmt::Display + fmt::Debug + Send + Sync + 'static,
{
    UrsaCryptoError::from_msg(kind, msg)
}

impl From<UrsaCryptoErrorKind> for UrsaCryptoError {
    fn from(kind: UrsaCryptoErrorKind) -> UrsaCryptoError {
        UrsaCryptoError {
            kind,
            msg: String::new(),
        }
    }
}

#[cfg(feature = "logger")]
impl From<log::SetLoggerError> for UrsaCryptoError {
    fn from(_err: log::SetLoggerError) -> UrsaCryptoError {
        err_msg(UrsaCryptoErrorKind::InvalidState, "Setting logger failed")
    }
}

impl From<std::io::Error> for UrsaCryptoError {
    fn from(err: std::io::Error) -> UrsaCryptoError {
        err.to_ursa(UrsaCryptoErrorKind::IOError, "IO operation failed")
    }
}

impl From<serde_json::Error> for UrsaCryptoError {
    fn from(err: serde_json::Error) -> UrsaCryptoError {
        err.to_ursa(UrsaCryptoErrorKind::InvalidStructure, "Invalid JSON")
    }
}

pub type UrsaCryptoResult<T> = Result<T, UrsaCryptoError>;

/// Extension methods for `Error`.
pub trait UrsaCryptoErrorExt {
    fn to_ursa<D>(self, kind: UrsaCryptoErrorKind, msg: D) -> UrsaCryptoError
    where
        D: fmt::Display + Send + Sync + 'static;
}

impl<E> UrsaCryptoErrorExt for E
where
    E: std::error::Error,
{
    fn to_ursa<D>(self, kind: UrsaCryptoErrorKind, msg: D) -> UrsaCryptoError
    where
        D: fmt::Display + Send + Sync + 'static,
    {
        UrsaCryptoError {
            kind,
            msg: format!("{} ({})", msg, self),
        }
    }
}
