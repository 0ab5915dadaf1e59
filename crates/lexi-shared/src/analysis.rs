//! Results of the backend's document analysis

use chrono::{NaiveDate, NaiveDateTime};

use crate::id::DbId;

#[derive(
    Debug,
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
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Clause {
    pub id: DbId,
    pub document_id: DbId,
    pub clause_type: String,
    #[serde(default)]
    pub title: Option<String>,
    pub content: String,
    #[serde(default)]
    pub page_number: Option<u32>,
    #[serde(default)]
    pub risk_level: Option<RiskLevel>,
    #[serde(default)]
    pub risk_explanation: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct ClauseCategory {
    pub id: DbId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Default, serde::Serialize, Clone, PartialEq, Eq)]
pub struct ClauseListParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_level: Option<RiskLevel>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct DocumentSummary {
    pub id: DbId,
    pub document_id: DbId,
    pub summary_text: String,
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct Obligation {
    pub id: DbId,
    pub document_id: DbId,
    #[serde(default)]
    pub clause_id: Option<DbId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<String>,
}

/// Answer to a natural language question about a document
#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct SearchAnswer {
    pub answer: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default)]
    pub explanation: Option<String>,
}

#[derive(Debug, serde::Serialize, serde::Deserialize, Clone, PartialEq, Eq)]
pub struct SearchRecord {
    pub id: DbId,
    #[serde(default)]
    pub user_id: Option<DbId>,
    #[serde(default, alias = "query")]
    pub query_text: String,
    #[serde(default)]
    pub created_at: Option<NaiveDateTime>,
}
