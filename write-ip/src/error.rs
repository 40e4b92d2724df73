use std::net::IpAddr;
use std::path::PathBuf;

/// The OS could not pick a local address for the probe target.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    #[error("Failed to resolve local address: {0}")]
    Socket(#[from] std::io::Error),

    #[error("Local address {0} is not IPv4")]
    NotIpv4(IpAddr),
}

#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    #[error("Failed to serialize ip record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum WriteIpError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(transparent)]
    Persist(#[from] PersistError),
}

impl WriteIpError {
    pub fn is_resolution(&self) -> bool {
        matches!(self, WriteIpError::Resolve(_))
    }

    pub fn is_persistence(&self) -> bool {
        matches!(self, WriteIpError::Persist(_))
    }
}

pub type WriteIpResult<T> = Result<T, WriteIpError>;
