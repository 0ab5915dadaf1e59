use futures::channel::oneshot;
use lexi_shared::{
    billing::{CreateSubscriptionReqArgs, Plan, UpdateSubscriptionReqArgs},
    const_config::path::{
        PATH_BILLING_CANCEL_SUBSCRIPTION, PATH_BILLING_CREATE_SUBSCRIPTION, PATH_BILLING_PLANS,
        PATH_BILLING_UPDATE_SUBSCRIPTION,
    },
    responses::{PlansResponse, SubscriptionResponse},
};

use crate::{
    client::{Payload, UiCallBack},
    Client,
};

impl Client {
    #[tracing::instrument(skip(ui_notify))]
    pub fn get_plans<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<Vec<Plan>>> {
        self.send_request_expect_json_map(
            PATH_BILLING_PLANS.route(),
            Payload::Empty,
            |body: PlansResponse| body.plans,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn create_subscription<F: UiCallBack>(
        &self,
        args: &CreateSubscriptionReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<SubscriptionResponse>> {
        self.send_request_expect_json(
            PATH_BILLING_CREATE_SUBSCRIPTION.route(),
            Payload::Json(serde_json::json!(args)),
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn cancel_subscription<F: UiCallBack>(
        &self,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<SubscriptionResponse>> {
        self.send_request_expect_json(
            PATH_BILLING_CANCEL_SUBSCRIPTION.route(),
            Payload::Empty,
            ui_notify,
        )
    }

    #[tracing::instrument(skip(ui_notify))]
    pub fn update_subscription<F: UiCallBack>(
        &self,
        args: &UpdateSubscriptionReqArgs,
        ui_notify: F,
    ) -> oneshot::Receiver<anyhow::Result<SubscriptionResponse>> {
        self.send_request_expect_json(
            PATH_BILLING_UPDATE_SUBSCRIPTION.route(),
            Payload::Json(serde_json::json!(args)),
            ui_notify,
        )
    }
}
