//! Operating-system entropy source.

use rand::rngs::OsRng;
use rand::RngCore;
use strapi_deploy_types::{DeployError, EntropySource, Result};

/// Entropy drawn from the operating system's CSPRNG.
///
/// A read failure surfaces as `DeployError::EntropyUnavailable`; there is
/// no retry and no fallback generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| DeployError::EntropyUnavailable(e.to_string()))
    }
}
