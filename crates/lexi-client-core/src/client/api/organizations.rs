use futures::channel::oneshot;
use lexi_shared::{
    const_config::path::{PATH_ORGANIZATION, PATH_ORGANIZATIONS, PATH_ORGANIZATION_CREATE},
    id::DbId,
    organization::{Organization, OrganizationDraft},
    responses::{OrganizationResponse, OrganizationsResponse},
};

use crate::{
    client::{Payload, UiCallBack},
    Client,
};

impl Client {
    /// Organizations the logged in user is a member of
    #[tracing::instrument(skip(ui_notify))]
    pub fn get_organizations<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Organization>>> {
        self.send_request_expect_json_map(
            PATH_ORGANIZATIONS.route(),
            Payload::Empty,
            |body: OrganizationsResponse| body.organizations,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn get_organization<F: UiCallBack>(
        &self,
        id: DbId,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<OrganizationResponse>> {
        self.send_request_expect_json(PATH_ORGANIZATION.with_id(id), Payload::Empty, ui_notify)
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn create_organization<F: UiCallBack>(
        &self,
        args: &OrganizationDraft,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Organization>> {
        let args = serde_json::json!(args);
        self.send_request_expect_json_map(
            PATH_ORGANIZATION_CREATE.route(),
            Payload::Json(args),
            |body: OrganizationResponse| body.organization,
            ui_notify,
        )
    }
}
