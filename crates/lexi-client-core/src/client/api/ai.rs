use futures::channel::oneshot;
use lexi_shared::{
    analysis::{
        Clause, ClauseCategory, ClauseListParams, DocumentSummary, Obligation, SearchAnswer,
        SearchRecord,
    },
    const_config::path::{
        PATH_AI_ANALYZE, PATH_AI_CLAUSES, PATH_AI_CLAUSE_CATEGORIES, PATH_AI_OBLIGATIONS,
        PATH_AI_SEARCH, PATH_AI_SEARCH_HISTORY, PATH_AI_SUMMARY,
    },
    document::Document,
    id::DbId,
    req_args::{api::SearchReqArgs, QueryParams},
    responses::{
        ClauseCategoriesResponse, ClausesResponse, DocumentResponse, ObligationsResponse,
        SearchHistoryResponse, SearchResponse, SummaryResponse,
    },
};

use crate::{
    client::{respond_now, Payload, UiCallBack},
    Client,
};

impl Client {
    /// Queues the document for analysis, the returned document shows the
    /// processing status
    #[tracing::instrument(skip(ui_notify))]
    pub fn analyze_document<F: UiCallBack>(
        &self,
        document_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Document>> {
        self.send_request_expect_json_map(
            PATH_AI_ANALYZE.with_id(document_id),
            Payload::Empty,
            |body: DocumentResponse| body.document,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_document_clauses<F: UiCallBack>(
        &self,
        document_id: DbId,
        params: &ClauseListParams,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Clause>>> {
        let query = match QueryParams::from_serializable(params) {
            Ok(query) => query,
            Err(err) => return respond_now(Err(err), ui_notify),
        };
        self.send_request_expect_json_map(
            PATH_AI_CLAUSES.with_id(document_id),
            Payload::Query(query),
            |body: ClausesResponse| body.clauses,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_document_summary<F: UiCallBack>(
        &self,
        document_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<DocumentSummary>> {
        self.send_request_expect_json_map(
            PATH_AI_SUMMARY.with_id(document_id),
            Payload::Empty,
            |body: SummaryResponse| body.summary,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_document_obligations<F: UiCallBack>(
        &self,
        document_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Obligation>>> {
        self.send_request_expect_json_map(
            PATH_AI_OBLIGATIONS.with_id(document_id),
            Payload::Empty,
            |body: ObligationsResponse| body.obligations,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn search_document<F: UiCallBack>(
        &self,
        document_id: DbId,
        args: &SearchReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<SearchAnswer>> {
        self.send_request_expect_json_map(
            PATH_AI_SEARCH.with_id(document_id),
            Payload::Json(serde_json::json!(args)),
            |body: SearchResponse| body.result,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_search_history<F: UiCallBack>(
        &self,
        document_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<SearchRecord>>> {
        self.send_request_expect_json_map(
            PATH_AI_SEARCH_HISTORY.with_id(document_id),
            Payload::Empty,
            |body: SearchHistoryResponse| body.searches,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_clause_categories<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<ClauseCategory>>> {
        self.send_request_expect_json_map(
            PATH_AI_CLAUSE_CATEGORIES.route(),
            Payload::Empty,
            |body: ClauseCategoriesResponse| body.categories,
            ui_notify,
        )
    }
}
