//! Errors raised while decoding a profile
//!
//! Dangling references inside a decoded profile are never errors; see
//! [`crate::symbols`].

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProfileError {
    /// The profile file could not be opened or read
    #[error("failed to read profile {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The underlying reader failed while the stream was being decompressed
    #[error("failed to read profile stream: {0}")]
    Read(#[source] std::io::Error),

    /// Input is not a valid gzip stream
    #[error("corrupt profile: invalid gzip stream: {0}")]
    CorruptGzip(#[source] std::io::Error),

    /// Decompressed bytes are not a valid pprof message
    #[error("corrupt profile: invalid pprof message: {0}")]
    CorruptProtobuf(#[from] prost::DecodeError),

    /// Decompressed profile is larger than the configured limit
    #[error("decompressed profile exceeds the {limit} byte limit")]
    TooLarge { limit: u64 },
}

impl ProfileError {
    /// True for errors caused by malformed input rather than I/O or limits
    pub fn is_corrupt_input(&self) -> bool {
        matches!(
            self,
            ProfileError::CorruptGzip(_) | ProfileError::CorruptProtobuf(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, ProfileError>;
