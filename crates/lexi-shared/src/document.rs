use chrono::NaiveDateTime;

use crate::id::DbId;

/// Processing state of an uploaded document
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum DocumentStatus {
    #[default]
    Pending,
    Processing,
    Completed,
    Failed,
    /// Any status this client does not know about yet
    #[serde(other)]
    Unknown,
}

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    serde::Serialize,
    serde::Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PermissionLevel {
    #[default]
    Read,
    Comment,
    Edit,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DbId,
    pub organization_id: DbId,
    #[serde(default)]
    pub uploaded_by_user_id: Option<DbId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub file_type: Option<String>,
    #[serde(default)]
    pub file_size: Option<u64>,
    #[serde(default)]
    pub status: DocumentStatus,
    #[serde(default)]
    pub processing_error: Option<String>,
    /// Only set on documents shared with the current user
    #[serde(default)]
    pub permission_level: Option<PermissionLevel>,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Document {
    /// Returns `true` while the analysis has not finished (successfully or not)
    #[must_use]
    pub fn is_processing(&self) -> bool {
        matches!(
            self.status,
            DocumentStatus::Pending | DocumentStatus::Processing
        )
    }
}

#[derive(Debug, Default, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Pagination {
    pub page: u32,
    pub per_page: u32,
    pub total_pages: u32,
    pub total_items: u64,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct DocumentShare {
    pub id: DbId,
    pub document_id: DbId,
    pub user_id: DbId,
    #[serde(default)]
    pub permission_level: PermissionLevel,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}

/// Filters for listing documents. Unset fields are left to the server defaults
#[derive(Debug, Default, serde::Serialize, Clone, PartialEq, Eq)]
pub struct DocumentListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
}

impl DocumentListParams {
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    pub fn search<S: Into<String>>(mut self, search: S) -> Self {
        self.search = Some(search.into());
        self
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct ShareDocumentReqArgs {
    pub user_id: DbId,
    pub permission_level: PermissionLevel,
}
