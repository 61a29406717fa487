//! The generated secret set.

use std::borrow::Cow;
use std::fmt;
use strapi_deploy_types::SecretSlot;

/// One freshly generated value per secret slot.
///
/// Values only live for the duration of the process; nothing here persists
/// them. `Debug` output is redacted so sets can be traced safely.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretSet {
    /// Four independent 32-byte keys
    pub app_keys: [String; SecretSlot::APP_KEY_COUNT],
    /// 32-byte API token salt
    pub api_token_salt: String,
    /// 32-byte admin JWT secret
    pub admin_jwt_secret: String,
    /// 32-byte transfer token salt
    pub transfer_token_salt: String,
    /// 32-byte JWT secret
    pub jwt_secret: String,
    /// Stripped 24-byte database password
    pub database_password: String,
}

impl SecretSet {
    /// `APP_KEYS` as written to `.env`.
    pub fn app_keys_joined(&self) -> String {
        self.app_keys.join(",")
    }

    /// The `.env` value of a slot.
    pub fn get(&self, slot: SecretSlot) -> Cow<'_, str> {
        match slot {
            SecretSlot::AppKeys => Cow::Owned(self.app_keys_joined()),
            SecretSlot::ApiTokenSalt => Cow::Borrowed(&self.api_token_salt),
            SecretSlot::AdminJwtSecret => Cow::Borrowed(&self.admin_jwt_secret),
            SecretSlot::TransferTokenSalt => Cow::Borrowed(&self.transfer_token_salt),
            SecretSlot::JwtSecret => Cow::Borrowed(&self.jwt_secret),
            SecretSlot::DatabasePassword => Cow::Borrowed(&self.database_password),
        }
    }

    /// `(slot, value)` pairs in output order.
    pub fn entries(&self) -> impl Iterator<Item = (SecretSlot, Cow<'_, str>)> + '_ {
        SecretSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }

    /// `.env` lines for the key slots (everything but the database password).
    pub fn key_lines(&self) -> impl Iterator<Item = String> + '_ {
        SecretSlot::KEYS
            .into_iter()
            .map(move |slot| slot.env_line(&self.get(slot)))
    }
}

impl fmt::Debug for SecretSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("SecretSet");
        for slot in SecretSlot::ALL {
            s.field(slot.env_key(), &"<redacted>");
        }
        s.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SecretSet {
        SecretSet {
            app_keys: ["k1".into(), "k2".into(), "k3".into(), "k4".into()],
            api_token_salt: "salt".into(),
            admin_jwt_secret: "admin".into(),
            transfer_token_salt: "transfer".into(),
            jwt_secret: "jwt".into(),
            database_password: "pw".into(),
        }
    }

    #[test]
    fn test_get_joins_app_keys() {
        let set = sample();
        assert_eq!(set.get(SecretSlot::AppKeys), "k1,k2,k3,k4");
        assert_eq!(set.get(SecretSlot::DatabasePassword), "pw");
    }

    #[test]
    fn test_key_lines_order_and_quoting() {
        let lines: Vec<String> = sample().key_lines().collect();
        assert_eq!(
            lines,
            vec![
                "APP_KEYS=\"k1,k2,k3,k4\"",
                "API_TOKEN_SALT=salt",
                "ADMIN_JWT_SECRET=admin",
                "TRANSFER_TOKEN_SALT=transfer",
                "JWT_SECRET=jwt",
            ]
        );
    }

    #[test]
    fn test_entries_cover_all_slots() {
        let set = sample();
        let slots: Vec<SecretSlot> = set.entries().map(|(slot, _)| slot).collect();
        assert_eq!(slots, SecretSlot::ALL.to_vec());
    }

    #[test]
    fn test_debug_is_redacted() {
        let debug = format!("{:?}", sample());
        assert!(debug.contains("APP_KEYS"));
        assert!(!debug.contains("k1"));
        assert!(!debug.contains("salt\""));
    }
}
