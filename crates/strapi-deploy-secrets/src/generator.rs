//! Secret generation.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use strapi_deploy_types::{EntropySource, Result, SecretSlot};
use crate::entropy::OsEntropy;
use crate::report::ProvisionReport;
use crate::set::SecretSet;

/// Random bytes behind every key, salt, and JWT secret.
pub const DEFAULT_SECRET_BYTES: usize = 32;

/// Random bytes behind the suggested database password.
pub const DATABASE_PASSWORD_BYTES: usize = 24;

/// Characters removed from database passwords; they break shell quoting and
/// connection URLs.
pub const PASSWORD_STRIPPED_CHARS: [char; 3] = ['/', '+', '='];

/// Draws secrets from an injected entropy source.
#[derive(Debug, Clone, Default)]
pub struct SecretProvisioner<E = OsEntropy> {
    entropy: E,
}

impl SecretProvisioner<OsEntropy> {
    /// Provisioner backed by the operating system's CSPRNG.
    pub fn new() -> Self {
        Self { entropy: OsEntropy }
    }
}

impl<E: EntropySource> SecretProvisioner<E> {
    /// Provisioner backed by a caller-supplied entropy source.
    pub fn with_entropy(entropy: E) -> Self {
        Self { entropy }
    }

    /// Draw `byte_count` random bytes and encode them as standard base64.
    pub fn generate_secret(&self, byte_count: usize) -> Result<String> {
        let bytes = self.entropy.bytes(byte_count)?;
        tracing::trace!("Drew {} random bytes", byte_count);
        Ok(STANDARD.encode(bytes))
    }

    fn draw_app_keys(&self) -> Result<[String; SecretSlot::APP_KEY_COUNT]> {
        Ok([
            self.generate_secret(DEFAULT_SECRET_BYTES)?,
            self.generate_secret(DEFAULT_SECRET_BYTES)?,
            self.generate_secret(DEFAULT_SECRET_BYTES)?,
            self.generate_secret(DEFAULT_SECRET_BYTES)?,
        ])
    }

    /// Four independent secrets joined with `,`, ready for `APP_KEYS`.
    pub fn generate_app_keys(&self) -> Result<String> {
        Ok(self.draw_app_keys()?.join(","))
    }

    /// A 24-byte secret with `/`, `+`, and `=` stripped.
    ///
    /// The result is at most 32 characters and shrinks by however many
    /// characters were stripped, so callers must not assume a fixed length.
    pub fn generate_database_password(&self) -> Result<String> {
        let encoded = self.generate_secret(DATABASE_PASSWORD_BYTES)?;
        Ok(encoded.replace(PASSWORD_STRIPPED_CHARS, ""))
    }

    fn draw_keys(&self, database_password: String) -> Result<SecretSet> {
        Ok(SecretSet {
            app_keys: self.draw_app_keys()?,
            api_token_salt: self.generate_secret(DEFAULT_SECRET_BYTES)?,
            admin_jwt_secret: self.generate_secret(DEFAULT_SECRET_BYTES)?,
            transfer_token_salt: self.generate_secret(DEFAULT_SECRET_BYTES)?,
            jwt_secret: self.generate_secret(DEFAULT_SECRET_BYTES)?,
            database_password,
        })
    }

    /// Generate a complete secret set.
    ///
    /// Keys are drawn first, in output order, then the database password.
    pub fn provision(&self) -> Result<SecretSet> {
        let mut set = self.draw_keys(String::new())?;
        set.database_password = self.generate_database_password()?;
        Ok(set)
    }

    /// Build the operator report stamped with the current time.
    pub fn report(&self) -> Result<ProvisionReport> {
        self.report_at(Utc::now())
    }

    /// Build the operator report stamped with `generated_at`.
    ///
    /// The `.env` template block draws its own keys rather than repeating
    /// the ones listed above it; only the database password is shared.
    pub fn report_at(&self, generated_at: DateTime<Utc>) -> Result<ProvisionReport> {
        let secrets = self.provision()?;
        let template = self.draw_keys(secrets.database_password.clone())?;
        tracing::info!("Provisioned secrets for {} slots", SecretSlot::ALL.len());

        Ok(ProvisionReport {
            generated_at,
            secrets,
            template,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{ConstantEntropy, CountingEntropy, MockEntropy, PatternEntropy};
    use mockall::Sequence;
    use proptest::prelude::*;
    use strapi_deploy_types::DeployError;

    fn decode(value: &str) -> Vec<u8> {
        STANDARD.decode(value).unwrap()
    }

    #[test]
    fn test_generate_secret_default_length() {
        let provisioner = SecretProvisioner::new();
        let secret = provisioner.generate_secret(DEFAULT_SECRET_BYTES).unwrap();
        assert_eq!(decode(&secret).len(), 32);
        assert_eq!(secret.len(), 44);
    }

    #[test]
    fn test_zero_entropy_golden_value() {
        let provisioner = SecretProvisioner::with_entropy(ConstantEntropy(0x00));
        let secrets = provisioner.provision().unwrap();

        let expected = format!("{}=", "A".repeat(43));
        assert_eq!(secrets.api_token_salt, expected);
        assert_eq!(
            SecretSlot::ApiTokenSalt.env_line(&secrets.api_token_salt),
            format!("API_TOKEN_SALT={}", expected)
        );
        assert_eq!(secrets.database_password, "A".repeat(32));
    }

    #[test]
    fn test_all_ones_database_password_strips_to_alphabet() {
        let provisioner = SecretProvisioner::with_entropy(ConstantEntropy(0xFF));
        let raw = provisioner.generate_secret(DATABASE_PASSWORD_BYTES).unwrap();
        assert_eq!(raw, "/".repeat(32));

        let password = provisioner.generate_database_password().unwrap();
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(password.is_empty());
    }

    #[test]
    fn test_database_password_pre_strip_length() {
        let provisioner = SecretProvisioner::with_entropy(PatternEntropy(vec![0xFB, 0xEF, 0xBE]));
        let raw = provisioner.generate_secret(DATABASE_PASSWORD_BYTES).unwrap();
        assert_eq!(decode(&raw).len(), 24);
        assert_eq!(raw, "++++".repeat(8));
        assert_eq!(provisioner.generate_database_password().unwrap(), "");
    }

    #[test]
    fn test_app_keys_are_independent_draws() {
        let provisioner = SecretProvisioner::with_entropy(CountingEntropy::default());
        let keys = provisioner.generate_app_keys().unwrap();
        let parts: Vec<&str> = keys.split(',').collect();

        assert_eq!(parts.len(), 4);
        for (i, part) in parts.iter().enumerate() {
            assert_eq!(decode(part), vec![i as u8; 32]);
        }
    }

    #[test]
    fn test_provision_draw_order() {
        let provisioner = SecretProvisioner::with_entropy(CountingEntropy::default());
        let set = provisioner.provision().unwrap();

        for (i, key) in set.app_keys.iter().enumerate() {
            assert_eq!(decode(key), vec![i as u8; 32]);
        }
        assert_eq!(decode(&set.api_token_salt), vec![4u8; 32]);
        assert_eq!(decode(&set.admin_jwt_secret), vec![5u8; 32]);
        assert_eq!(decode(&set.transfer_token_salt), vec![6u8; 32]);
        assert_eq!(decode(&set.jwt_secret), vec![7u8; 32]);
        // 24 bytes of 0x08 encode without padding or stripped characters
        assert_eq!(decode(&set.database_password), vec![8u8; 24]);
    }

    #[test]
    fn test_provisions_differ() {
        let provisioner = SecretProvisioner::new();
        let first = provisioner.provision().unwrap();
        let second = provisioner.provision().unwrap();
        assert_ne!(first, second);
        assert_ne!(first.jwt_secret, second.jwt_secret);
    }

    #[test]
    fn test_report_draws_template_keys_and_shares_password() {
        let mut entropy = MockEntropy::new();
        entropy.expect_fill().times(17).returning(|buf| {
            buf.fill(0x42);
            Ok(())
        });

        let report = SecretProvisioner::with_entropy(entropy).report().unwrap();
        assert_eq!(report.template.database_password, report.secrets.database_password);
    }

    #[test]
    fn test_entropy_failure_propagates() {
        let mut entropy = MockEntropy::new();
        entropy
            .expect_fill()
            .times(1)
            .returning(|_| Err(DeployError::EntropyUnavailable("getrandom: ENOSYS".to_string())));

        let result = SecretProvisioner::with_entropy(entropy).provision();
        assert!(matches!(result, Err(DeployError::EntropyUnavailable(_))));
    }

    #[test]
    fn test_late_entropy_failure_yields_no_partial_set() {
        let mut seq = Sequence::new();
        let mut entropy = MockEntropy::new();
        entropy
            .expect_fill()
            .times(8)
            .in_sequence(&mut seq)
            .returning(|buf| {
                buf.fill(1);
                Ok(())
            });
        entropy
            .expect_fill()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(DeployError::EntropyUnavailable("device closed".to_string())));

        let result = SecretProvisioner::with_entropy(entropy).report();
        assert!(matches!(result, Err(DeployError::EntropyUnavailable(_))));
    }

    proptest! {
        #[test]
        fn prop_database_password_has_no_stripped_chars(
            pattern in proptest::collection::vec(any::<u8>(), 1..48)
        ) {
            let provisioner = SecretProvisioner::with_entropy(PatternEntropy(pattern));
            let raw = provisioner.generate_secret(DATABASE_PASSWORD_BYTES).unwrap();
            let password = provisioner.generate_database_password().unwrap();

            prop_assert_eq!(STANDARD.decode(&raw).unwrap().len(), 24);
            prop_assert!(password.len() <= 32);
            prop_assert!(!password.contains(PASSWORD_STRIPPED_CHARS));
            prop_assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
        }

        #[test]
        fn prop_secrets_decode_to_requested_length(byte in any::<u8>(), count in 0usize..96) {
            let provisioner = SecretProvisioner::with_entropy(ConstantEntropy(byte));
            let secret = provisioner.generate_secret(count).unwrap();
            prop_assert_eq!(STANDARD.decode(secret).unwrap(), vec![byte; count]);
        }
    }
}
