use std::fmt::Display;

use crate::{
    const_config::validation::{
        VALIDATION_MAX_EMAIL_LENGTH, VALIDATION_MAX_NAME_LENGTH, VALIDATION_MIN_NAME_LENGTH,
    },
    errors::ConversionError,
    id::DbId,
};

/// The identity of the logged in user as reported by the backend
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl User {
    /// Falls back to the email when the backend did not supply a name
    pub fn display_name(&self) -> &str {
        if self.full_name.trim().is_empty() {
            &self.email
        } else {
            &self.full_name
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq, Hash)]
/// An email address that at least looks deliverable (`local@domain.tld`)
pub struct Email(String);

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct FullName(String);

impl Email {
    pub const MAX_LENGTH: usize = VALIDATION_MAX_EMAIL_LENGTH;

    fn check_shape(value: &str) -> Result<(), ConversionError> {
        const EXPECTED: &str = "expected an address like name@example.com";
        if value.chars().any(char::is_whitespace) {
            return Err(ConversionError::InvalidFormat(EXPECTED));
        }
        let Some((local, domain)) = value.split_once('@') else {
            return Err(ConversionError::InvalidFormat(EXPECTED));
        };
        let domain_ok = !domain.contains('@')
            && domain
                .split_once('.')
                .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
            && !domain.ends_with('.');
        if local.is_empty() || !domain_ok {
            return Err(ConversionError::InvalidFormat(EXPECTED));
        }
        Ok(())
    }
}

impl FullName {
    pub const MIN_LENGTH: usize = VALIDATION_MIN_NAME_LENGTH;
    pub const MAX_LENGTH: usize = VALIDATION_MAX_NAME_LENGTH;
}

impl TryFrom<String> for Email {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_string();
        if value.is_empty() {
            return Err(ConversionError::Empty);
        }
        if value.len() > Self::MAX_LENGTH {
            return Err(ConversionError::MaxExceeded {
                max: Self::MAX_LENGTH,
                actual: value.len(),
            });
        }
        Self::check_shape(&value)?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for Email {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl TryFrom<String> for FullName {
    type Error = ConversionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_string();
        let actual = value.chars().count();
        if actual == 0 {
            return Err(ConversionError::Empty);
        }
        if actual < Self::MIN_LENGTH {
            return Err(ConversionError::MinNotMet {
                min: Self::MIN_LENGTH,
                actual,
            });
        }
        if actual > Self::MAX_LENGTH {
            return Err(ConversionError::MaxExceeded {
                max: Self::MAX_LENGTH,
                actual,
            });
        }
        Ok(Self(value))
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl From<FullName> for String {
    fn from(value: FullName) -> Self {
        value.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for FullName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
