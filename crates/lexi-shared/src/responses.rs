//! Envelopes the backend wraps its payloads in. Fields the client does not
//! rely on are optional so that server additions do not break parsing

use crate::{
    analysis::{Clause, ClauseCategory, DocumentSummary, Obligation, SearchAnswer, SearchRecord},
    billing::Plan,
    document::{Document, DocumentShare, Pagination},
    organization::Organization,
    token::AuthToken,
    uac::User,
};

/// Returned by both login and registration
#[derive(Debug, Clone, serde::Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub user: User,
    pub access_token: AuthToken,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub user: User,
}

#[derive(Debug, Clone, Default, serde::Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize, PartialEq, Eq)]
pub struct OrganizationsResponse {
    #[serde(default)]
    pub organizations: Vec<Organization>,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq, Eq)]
pub struct OrganizationResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub organization: Organization,
    /// Role of the current user, only sent when fetching a single organization
    #[serde(default)]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Default, serde::Deserialize, PartialEq, Eq)]
pub struct DocumentListResponse {
    #[serde(default)]
    pub documents: Vec<Document>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq, Eq)]
pub struct DocumentResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub document: Document,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq, Eq)]
pub struct DocumentShareResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub document_share: DocumentShare,
}

#[derive(Debug, Clone, Default, serde::Deserialize, PartialEq, Eq)]
pub struct DocumentSharesResponse {
    #[serde(default)]
    pub shares: Vec<DocumentShare>,
}

#[derive(Debug, Clone, Default, serde::Deserialize, PartialEq, Eq)]
pub struct ClausesResponse {
    #[serde(default)]
    pub clauses: Vec<Clause>,
}

#[derive(Debug, Clone, Default, serde::Deserialize, PartialEq, Eq)]
pub struct ClauseCategoriesResponse {
    #[serde(default)]
    pub categories: Vec<ClauseCategory>,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq, Eq)]
pub struct SummaryResponse {
    pub summary: DocumentSummary,
}

#[derive(Debug, Clone, Default, serde::Deserialize, PartialEq, Eq)]
pub struct ObligationsResponse {
    #[serde(default)]
    pub obligations: Vec<Obligation>,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq, Eq)]
pub struct SearchResponse {
    pub result: SearchAnswer,
}

#[derive(Debug, Clone, Default, serde::Deserialize, PartialEq, Eq)]
pub struct SearchHistoryResponse {
    #[serde(default)]
    pub searches: Vec<SearchRecord>,
}

#[derive(Debug, Clone, Default, serde::Deserialize, PartialEq)]
pub struct PlansResponse {
    #[serde(default)]
    pub plans: Vec<Plan>,
}

/// Subscription details come straight from the payment provider and are
/// passed through untouched
#[derive(Debug, Clone, serde::Deserialize, PartialEq)]
pub struct SubscriptionResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub subscription: serde_json::Value,
}
