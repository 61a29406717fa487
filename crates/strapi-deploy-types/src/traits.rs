//! Core trait definitions for strapi-deploy abstractions.

use crate::errors::Result;

/// A source of cryptographically secure random bytes.
///
/// The provisioner receives this as a capability instead of reaching for a
/// process-wide generator, so tests can substitute a deterministic source.
/// Implementations must be safe to share between threads.
pub trait EntropySource: Send + Sync {
    /// Fill `buf` entirely with random bytes.
    ///
    /// Returns `DeployError::EntropyUnavailable` if the source cannot
    /// produce bytes. Implementations must never substitute a
    /// non-cryptographic generator on failure.
    fn fill(&self, buf: &mut [u8]) -> Result<()>;

    /// Draw `count` fresh random bytes.
    fn bytes(&self, count: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; count];
        self.fill(&mut buf)?;
        Ok(buf)
    }
}

impl<T: EntropySource + ?Sized> EntropySource for &T {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}

impl<T: EntropySource + ?Sized> EntropySource for Box<T> {
    fn fill(&self, buf: &mut [u8]) -> Result<()> {
        (**self).fill(buf)
    }
}

/// Validation result for secret values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    /// Secret is valid
    Ok,
    /// Secret is missing
    Missing,
    /// Secret is usable but weaker than a generated one
    Warning(Vec<String>),
    /// Secret is invalid
    Error(Vec<String>),
}

impl ValidationResult {
    /// True for `Ok` and `Warning`.
    pub fn is_usable(&self) -> bool {
        matches!(self, ValidationResult::Ok | ValidationResult::Warning(_))
    }
}
