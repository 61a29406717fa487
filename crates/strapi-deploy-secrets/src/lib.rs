//! # Strapi Deploy Secrets
//!
//! Secret provisioning for a production Strapi install.
//!
//! Provides:
//! - An OS-backed entropy source (never falls back to a weaker generator)
//! - The provisioner drawing `APP_KEYS`, token salts, JWT secrets, and a
//!   suggested database password
//! - Rendering of the operator-facing `.env` report
//! - Parsing and validation of existing `.env` files
//!
//! ## Example
//!
//! ```
//! use strapi_deploy_secrets::SecretProvisioner;
//!
//! let provisioner = SecretProvisioner::new();
//! let secrets = provisioner.provision()?;
//! assert_eq!(secrets.app_keys.len(), 4);
//!
//! let report = provisioner.report()?.render();
//! assert!(report.starts_with("================================\n"));
//! # Ok::<(), strapi_deploy_types::DeployError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entropy;
pub mod generator;
pub mod parser;
pub mod report;
pub mod set;
pub mod validator;

pub use entropy::OsEntropy;
pub use generator::{SecretProvisioner, DATABASE_PASSWORD_BYTES, DEFAULT_SECRET_BYTES};
pub use parser::parse_env;
pub use report::ProvisionReport;
pub use set::SecretSet;
pub use validator::{SecretValidator, ValidationSummary};

#[cfg(test)]
pub(crate) mod testing {
    //! Deterministic entropy sources for unit tests.

    use std::sync::atomic::{AtomicU8, Ordering};
    use strapi_deploy_types::{EntropySource, Result};

    mockall::mock! {
        pub Entropy {}

        impl EntropySource for Entropy {
            fn fill(&self, buf: &mut [u8]) -> Result<()>;
        }
    }

    /// Fills every buffer with the same byte.
    pub struct ConstantEntropy(pub u8);

    impl EntropySource for ConstantEntropy {
        fn fill(&self, buf: &mut [u8]) -> Result<()> {
            buf.fill(self.0);
            Ok(())
        }
    }

    /// Fills each draw with a different byte, starting at zero.
    #[derive(Default)]
    pub struct CountingEntropy(AtomicU8);

    impl EntropySource for CountingEntropy {
        fn fill(&self, buf: &mut [u8]) -> Result<()> {
            buf.fill(self.0.fetch_add(1, Ordering::Relaxed));
            Ok(())
        }
    }

    /// Repeats a fixed byte pattern across every draw.
    pub struct PatternEntropy(pub Vec<u8>);

    impl EntropySource for PatternEntropy {
        fn fill(&self, buf: &mut [u8]) -> Result<()> {
            for (dst, src) in buf.iter_mut().zip(self.0.iter().cycle()) {
                *dst = *src;
            }
            Ok(())
        }
    }
}
