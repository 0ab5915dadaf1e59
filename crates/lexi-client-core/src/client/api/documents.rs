use futures::channel::oneshot;
use lexi_shared::{
    const_config::path::{
        PATH_DOCUMENT, PATH_DOCUMENT_CONTENT, PATH_DOCUMENT_DELETE, PATH_DOCUMENT_SHARE,
        PATH_DOCUMENT_SHARES, PATH_DOCUMENT_UNSHARE, PATH_DOCUMENT_UPDATE,
        PATH_ORGANIZATION_DOCUMENTS, PATH_ORGANIZATION_DOCUMENT_UPLOAD, PATH_SHARED_WITH_ME,
    },
    document::{Document, DocumentListParams, DocumentShare, ShareDocumentReqArgs},
    id::DbId,
    req_args::QueryParams,
    responses::{
        DocumentListResponse, DocumentResponse, DocumentShareResponse, DocumentSharesResponse,
    },
};
use reqwest::multipart::{Form, Part};
use std::fmt::Debug;

use crate::{
    client::{respond_now, Payload, UiCallBack},
    Client,
};

/// Fields of the multipart form used to upload or update a document. All
/// fields are required for an upload, an update only sends what is set
#[derive(Default, Clone)]
pub struct DocumentUpload {
    pub title: Option<String>,
    pub description: Option<String>,
    pub file_name: Option<String>,
    pub content: Option<Vec<u8>>,
}

impl DocumentUpload {
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    pub fn description<S: Into<String>>(mut self, description: S) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn file<S: Into<String>>(mut self, file_name: S, content: Vec<u8>) -> Self {
        self.file_name = Some(file_name.into());
        self.content = Some(content);
        self
    }

    pub fn into_form(self) -> Form {
        let mut form = Form::new();
        if let Some(title) = self.title {
            form = form.text("title", title);
        }
        if let Some(description) = self.description {
            form = form.text("description", description);
        }
        if let Some(content) = self.content {
            let part = Part::bytes(content).file_name(self.file_name.unwrap_or_default());
            form = form.part("file", part);
        }
        form
    }
}

impl Debug for DocumentUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DocumentUpload")
            .field("title", &self.title)
            .field("description", &self.description)
            .field("file_name", &self.file_name)
            .field("content_len", &self.content.as_ref().map(Vec::len))
            .finish()
    }
}

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn get_organization_documents<F: UiCallBack>(
        &self,
        organization_id: DbId,
        params: &DocumentListParams,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<DocumentListResponse>> {
        let query = match QueryParams::from_serializable(params) {
            Ok(query) => query,
            Err(err) => return respond_now(Err(err), ui_notify),
        };
        self.send_request_expect_json(
            PATH_ORGANIZATION_DOCUMENTS.with_id(organization_id),
            Payload::Query(query),
            ui_notify,
        )
    }

    /// See [`DocumentUpload::into_form`] for building `form`
    #[tracing::instrument(skip(form, ui_notify))]
    pub fn upload_document<F: UiCallBack>(
        &self,
        organization_id: DbId,
        form: Form,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Document>> {
        self.send_request_expect_json_map(
            PATH_ORGANIZATION_DOCUMENT_UPLOAD.with_id(organization_id),
            Payload::Form(form),
            |body: DocumentResponse| body.document,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_document<F: UiCallBack>(
        &self,
        document_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Document>> {
        self.send_request_expect_json_map(
            PATH_DOCUMENT.with_id(document_id),
            Payload::Empty,
            |body: DocumentResponse| body.document,
            ui_notify,
        )
    }

    /// Returns the response as is so the caller can stream the file. The
    /// status code is NOT checked
    #[tracing::instrument(skip(ui_notify))]
    pub fn get_document_content<F: UiCallBack>(
        &self,
        document_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<reqwest::Response>> {
        self.send_request_raw(
            PATH_DOCUMENT_CONTENT.with_id(document_id),
            Payload::Empty,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(form, ui_notify))]
    pub fn update_document<F: UiCallBack>(
        &self,
        document_id: DbId,
        form: Form,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Document>> {
        self.send_request_expect_json_map(
            PATH_DOCUMENT_UPDATE.with_id(document_id),
            Payload::Form(form),
            |body: DocumentResponse| body.document,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn delete_document<F: UiCallBack>(
        &self,
        document_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_DOCUMENT_DELETE.with_id(document_id),
            Payload::Empty,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn share_document<F: UiCallBack>(
        &self,
        document_id: DbId,
        args: &ShareDocumentReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<DocumentShare>> {
        self.send_request_expect_json_map(
            PATH_DOCUMENT_SHARE.with_id(document_id),
            Payload::Json(serde_json::json!(args)),
            |body: DocumentShareResponse| body.document_share,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_document_shares<F: UiCallBack>(
        &self,
        document_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<DocumentShare>>> {
        self.send_request_expect_json_map(
            PATH_DOCUMENT_SHARES.with_id(document_id),
            Payload::Empty,
            |body: DocumentSharesResponse| body.shares,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn unshare_document<F: UiCallBack>(
        &self,
        document_id: DbId,
        user_id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<()>> {
        self.send_request_expect_empty(
            PATH_DOCUMENT_UNSHARE.with_ids(&[document_id, user_id]),
            Payload::Empty,
            ui_notify,
        )
    }

    /// Documents other users shared with the logged in user
    #[tracing::instrument(skip(ui_notify))]
    pub fn get_shared_documents<F: UiCallBack>(
        &self,
        params: &DocumentListParams,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<DocumentListResponse>> {
        let query = match QueryParams::from_serializable(params) {
            Ok(query) => query,
            Err(err) => return respond_now(Err(err), ui_notify),
        };
        self.send_request_expect_json(PATH_SHARED_WITH_ME.route(), Payload::Query(query), ui_notify)
    }
}
