//! Stores settings that are not expected to need to change but grouped together
//! for discoverability and reuse. Each constant should be prefixed by the module
//! name to allow importing the constant only and still be readable

pub mod client {
    /// Used when neither the configuration file nor the environment provide one
    pub const CLIENT_DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

    /// Prefix of environment variables read into the client settings. For
    /// example `LEXI_API_BASE_URL` sets `api_base_url`
    pub const CLIENT_ENV_PREFIX: &str = "LEXI";

    pub const CLIENT_DEFAULT_CONFIG_FILE: &str = "lexi.toml";
    pub const CLIENT_DEFAULT_STORAGE_FILE: &str = "lexi_storage.ron";
}

/// Keys of the scalar entries that survive restarts. The two entries have
/// independent lifecycles
pub mod storage {
    pub const STORAGE_KEY_TOKEN: &str = "token";
    pub const STORAGE_KEY_CURRENT_ORGANIZATION: &str = "currentOrganizationId";
}

/// Destinations used by route guards when redirecting
pub mod routes {
    pub const ROUTE_LOGIN: &str = "/login";
    pub const ROUTE_DASHBOARD: &str = "/dashboard";
}

pub mod validation {
    pub const VALIDATION_MIN_NAME_LENGTH: usize = 2;
    pub const VALIDATION_MAX_NAME_LENGTH: usize = 100;
    pub const VALIDATION_MIN_PASSWORD_LENGTH: usize = 8;
    /// Longest address allowed by RFC 5321
    pub const VALIDATION_MAX_EMAIL_LENGTH: usize = 254;
}

pub mod path {
    mod path_spec;
    pub use path_spec::{PathSpec, Route};

    pub const PATH_AUTH_CHANGE_PASSWORD: PathSpec = PathSpec::post("/auth/change-password");
    pub const PATH_AUTH_LOGIN: PathSpec = PathSpec::post("/auth/login");
    pub const PATH_AUTH_LOGOUT: PathSpec = PathSpec::post("/auth/logout");
    pub const PATH_AUTH_ME: PathSpec = PathSpec::get("/auth/me");
    pub const PATH_AUTH_REGISTER: PathSpec = PathSpec::post("/auth/register");
    pub const PATH_AUTH_RESET_PASSWORD: PathSpec = PathSpec::post("/auth/reset-password");
    pub const PATH_AUTH_RESET_PASSWORD_REQUEST: PathSpec =
        PathSpec::post("/auth/reset-password-request");

    pub const PATH_ORGANIZATIONS: PathSpec = PathSpec::get("/organizations");
    pub const PATH_ORGANIZATION: PathSpec = PathSpec::get("/organizations/{id}");
    pub const PATH_ORGANIZATION_CREATE: PathSpec = PathSpec::post("/organizations");

    pub const PATH_ORGANIZATION_DOCUMENTS: PathSpec =
        PathSpec::get("/organizations/{id}/documents");
    pub const PATH_ORGANIZATION_DOCUMENT_UPLOAD: PathSpec =
        PathSpec::post("/organizations/{id}/documents");
    pub const PATH_DOCUMENT: PathSpec = PathSpec::get("/documents/{id}");
    pub const PATH_DOCUMENT_CONTENT: PathSpec = PathSpec::get("/documents/{id}/content");
    pub const PATH_DOCUMENT_DELETE: PathSpec = PathSpec::delete("/documents/{id}");
    pub const PATH_DOCUMENT_SHARE: PathSpec = PathSpec::post("/documents/{id}/share");
    pub const PATH_DOCUMENT_SHARES: PathSpec = PathSpec::get("/documents/{id}/shares");
    pub const PATH_DOCUMENT_UNSHARE: PathSpec = PathSpec::delete("/documents/{id}/share/{id}");
    pub const PATH_DOCUMENT_UPDATE: PathSpec = PathSpec::put("/documents/{id}");
    pub const PATH_SHARED_WITH_ME: PathSpec = PathSpec::get("/users/me/shared-documents");

    pub const PATH_AI_ANALYZE: PathSpec = PathSpec::post("/ai/documents/{id}/analyze");
    pub const PATH_AI_CLAUSE_CATEGORIES: PathSpec = PathSpec::get("/ai/clause-categories");
    pub const PATH_AI_CLAUSES: PathSpec = PathSpec::get("/ai/documents/{id}/clauses");
    pub const PATH_AI_OBLIGATIONS: PathSpec = PathSpec::get("/ai/documents/{id}/obligations");
    pub const PATH_AI_SEARCH: PathSpec = PathSpec::post("/ai/documents/{id}/search");
    pub const PATH_AI_SEARCH_HISTORY: PathSpec =
        PathSpec::get("/ai/documents/{id}/search-history");
    pub const PATH_AI_SUMMARY: PathSpec = PathSpec::get("/ai/documents/{id}/summary");

    pub const PATH_BILLING_CANCEL_SUBSCRIPTION: PathSpec =
        PathSpec::post("/billing/cancel-subscription");
    pub const PATH_BILLING_CREATE_SUBSCRIPTION: PathSpec =
        PathSpec::post("/billing/create-subscription");
    pub const PATH_BILLING_PLANS: PathSpec = PathSpec::get("/billing/plans");
    pub const PATH_BILLING_UPDATE_SUBSCRIPTION: PathSpec =
        PathSpec::post("/billing/update-subscription");
}
