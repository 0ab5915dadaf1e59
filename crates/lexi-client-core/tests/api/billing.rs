use crate::helpers::{no_cb, spawn_app_with_token};
use lexi_shared::billing::{CreateSubscriptionReqArgs, UpdateSubscriptionReqArgs};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn plans_listed() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_json(
        "GET",
        "/billing/plans",
        200,
        json!({
            "plans": [
                { "id": "basic", "name": "Basic", "price": 9.99, "interval": "month" },
                {
                    "id": "pro",
                    "name": "Professional",
                    "price": 29.99,
                    "interval": "month",
                    "features": ["Unlimited documents"],
                },
            ]
        }),
    )
    .await;

    // Act
    let plans = app.core_client.get_plans(no_cb).await.unwrap().unwrap();

    // Assert
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[1].features, vec!["Unlimited documents".to_string()]);
}

#[tokio::test]
async fn subscription_lifecycle() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    let subscription = json!({ "id": "sub_1", "plan_id": "pro", "status": "active" });
    Mock::given(method("POST"))
        .and(path(app.api_path("/billing/create-subscription")))
        .and(body_json(json!({ "plan_id": "pro" })))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({ "subscription": subscription })),
        )
        .expect(1)
        .mount(&app.mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path(app.api_path("/billing/update-subscription")))
        .and(body_json(json!({ "plan_id": "basic" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "subscription": { "id": "sub_1", "plan_id": "basic", "status": "active" }
        })))
        .expect(1)
        .mount(&app.mock_server)
        .await;
    app.mount_json(
        "POST",
        "/billing/cancel-subscription",
        200,
        json!({
            "message": "Subscription cancelled",
            "subscription": { "id": "sub_1", "status": "cancelled" },
        }),
    )
    .await;

    // Act
    let created = app
        .core_client
        .create_subscription(
            &CreateSubscriptionReqArgs {
                plan_id: "pro".to_string(),
                payment_method_id: None,
            },
            no_cb,
        )
        .await
        .unwrap()
        .unwrap();
    let updated = app
        .core_client
        .update_subscription(
            &UpdateSubscriptionReqArgs {
                plan_id: "basic".to_string(),
            },
            no_cb,
        )
        .await
        .unwrap()
        .unwrap();
    let cancelled = app
        .core_client
        .cancel_subscription(no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(created.subscription["status"], "active");
    assert_eq!(updated.subscription["plan_id"], "basic");
    assert_eq!(cancelled.message.as_deref(), Some("Subscription cancelled"));
}
