use chrono::NaiveDateTime;

use crate::{
    const_config::validation::{VALIDATION_MAX_NAME_LENGTH, VALIDATION_MIN_NAME_LENGTH},
    errors::ConversionError,
    id::DbId,
};

/// A tenant grouping documents and team members
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Organization {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

/// Data needed to create an organization
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone)]
pub struct OrganizationDraft {
    pub name: OrganizationName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct OrganizationName(String);

impl OrganizationName {
    pub const MIN_LENGTH: usize = VALIDATION_MIN_NAME_LENGTH;
    pub const MAX_LENGTH: usize = VALIDATION_MAX_NAME_LENGTH;
}

impl TryFrom<String> for OrganizationName {
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

impl TryFrom<&str> for OrganizationName {
    type Error = ConversionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.to_string().try_into()
    }
}

impl From<OrganizationName> for String {
    fn from(value: OrganizationName) -> Self {
        value.0
    }
}

impl AsRef<str> for OrganizationName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
