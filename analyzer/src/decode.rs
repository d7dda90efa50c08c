//! Profile decoder
//!
//! Turns a gzip-compressed pprof message into a [`Profile`]. This is pure
//! format translation: references between tables are not checked here.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use hotspot_shared::types::profile::Profile;
use prost::Message;
use tracing::{debug, info};

use crate::config::AnalyzerConfig;
use crate::error::{ProfileError, Result};
use crate::proto;

/// Stateless pprof decoder; each call yields an independent profile
#[derive(Debug, Clone)]
pub struct ProfileDecoder {
    max_profile_bytes: u64,
}

impl ProfileDecoder {
    pub fn new(config: &AnalyzerConfig) -> Self {
        Self {
            max_profile_bytes: config.max_profile_bytes,
        }
    }

    /// Decode the profile stored at `path`
    pub fn decode_file(&self, path: impl AsRef<Path>) -> Result<Profile> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ProfileError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let profile = self
            .decode_reader(BufReader::new(file))
            .map_err(|err| match err {
                ProfileError::Read(source) => ProfileError::Io {
                    path: path.to_path_buf(),
                    source,
                },
                other => other,
            })?;
        info!(
            "Decoded {}: {} samples, {} locations, {} functions",
            path.display(),
            profile.samples.len(),
            profile.locations.len(),
            profile.functions.len()
        );
        Ok(profile)
    }

    /// Decode a gzip-compressed profile from any reader
    pub fn decode_reader<R: Read>(&self, reader: R) -> Result<Profile> {
        let raw = self.decompress(reader)?;
        debug!("Decompressed profile: {} bytes", raw.len());

        let message = proto::Profile::decode(raw.as_slice())?;
        let profile = Profile::from(message);
        debug!(
            "Profile tables: {} samples, {} mappings, {} locations, {} functions, {} strings",
            profile.samples.len(),
            profile.mappings.len(),
            profile.locations.len(),
            profile.functions.len(),
            profile.string_table.len()
        );
        Ok(profile)
    }

    /// Decode a gzip-compressed profile held in memory
    pub fn decode_bytes(&self, bytes: &[u8]) -> Result<Profile> {
        self.decode_reader(bytes)
    }

    fn decompress<R: Read>(&self, reader: R) -> Result<Vec<u8>> {
        let limit = self.max_profile_bytes;

        // One byte past the limit is enough to tell an oversized profile apart.
        let mut decoder = GzDecoder::new(reader).take(limit.saturating_add(1));
        let mut raw = Vec::new();
        decoder.read_to_end(&mut raw).map_err(classify_read_error)?;

        if raw.len() as u64 > limit {
            return Err(ProfileError::TooLarge { limit });
        }
        Ok(raw)
    }
}

/// flate2 reports malformed or truncated streams with these kinds; anything
/// else came from the underlying reader.
fn classify_read_error(err: io::Error) -> ProfileError {
    match err.kind() {
        io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => {
            ProfileError::CorruptGzip(err)
        }
        _ => ProfileError::Read(err),
    }
}

impl Default for ProfileDecoder {
    fn default() -> Self {
        Self::new(&AnalyzerConfig::default())
    }
}
