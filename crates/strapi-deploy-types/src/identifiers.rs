//! Type-safe identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::errors::{DeployError, Result};

/// A validated component uid of the form `category.name`.
///
/// Both segments must:
/// - Start with a lowercase letter
/// - Contain only lowercase letters, digits, and hyphens
/// - Not end with a hyphen
///
/// # Example
///
/// ```
/// use strapi_deploy_types::ComponentUid;
///
/// let uid = ComponentUid::new("text.text").unwrap();
/// assert_eq!(uid.as_str(), "text.text");
///
/// // Invalid uids are rejected
/// assert!(ComponentUid::new("Images.single").is_err());
/// assert!(ComponentUid::new("no-category").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ComponentUid(pub(crate) String);

impl ComponentUid {
    /// Create a new validated component uid.
    ///
    /// # Errors
    ///
    /// Returns an error if the uid doesn't meet validation requirements.
    pub fn new(uid: impl AsRef<str>) -> Result<Self> {
        let uid = uid.as_ref();
        if !Self::is_valid(uid) {
            return Err(DeployError::Validation(format!(
                "Invalid component uid '{}': expected 'category.name' using lowercase letters, \
                digits, and hyphens",
                uid
            )));
        }
        Ok(Self(uid.to_string()))
    }

    /// Check if a uid is valid without allocating.
    pub fn is_valid(uid: &str) -> bool {
        match uid.split_once('.') {
            Some((category, name)) => {
                Self::is_valid_segment(category) && Self::is_valid_segment(name)
            }
            None => false,
        }
    }

    fn is_valid_segment(segment: &str) -> bool {
        let mut chars = segment.chars();
        match chars.next() {
            Some(first) if first.is_ascii_lowercase() => {}
            _ => return false,
        }

        !segment.ends_with('-')
            && chars.all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    }

    /// Get the uid as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The category segment (before the dot).
    pub fn category(&self) -> &str {
        self.0.split_once('.').map(|(c, _)| c).unwrap_or_default()
    }

    /// The name segment (after the dot).
    pub fn name(&self) -> &str {
        self.0.split_once('.').map(|(_, n)| n).unwrap_or_default()
    }
}

impl fmt::Display for ComponentUid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ComponentUid {
    type Err = DeployError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl TryFrom<String> for ComponentUid {
    type Error = DeployError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<ComponentUid> for String {
    fn from(uid: ComponentUid) -> Self {
        uid.0
    }
}
