use crate::helpers::{
    no_cb, organization_json, spawn_app, spawn_app_with_token, wait_until, SLOW_RESPONSE,
};
use lexi_client_core::{
    guards::{GuardOutcome, RouteAccess},
    AppStore,
};
use lexi_shared::{
    const_config::storage::STORAGE_KEY_CURRENT_ORGANIZATION, id::DbId,
    organization::OrganizationDraft,
};
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn start_with_token_loads_organizations() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_current_user().await;
    app.mount_organizations(&[1, 2]).await;
    app.set_stored(STORAGE_KEY_CURRENT_ORGANIZATION, "2");
    let store = AppStore::new(app.core_client.clone());

    // Act
    let _handle = store.start(no_cb);

    // Assert
    wait_until(|| store.session.is_authenticated()).await;
    wait_until(|| !store.organizations.is_loading()).await;
    assert_eq!(store.organizations.organizations().len(), 2);
    assert_eq!(store.organizations.current().unwrap().id, DbId::from(2));
    assert_eq!(
        RouteAccess::Protected.evaluate(&store.session.state()),
        GuardOutcome::Render
    );
}

#[tokio::test]
async fn start_without_token_stays_offline() {
    // Arrange
    let app = spawn_app().await;
    let store = AppStore::new(app.core_client.clone());

    // Act
    let _handle = store.start(no_cb);

    // Assert
    wait_until(|| !store.organizations.is_loading()).await;
    assert!(!store.session.is_authenticated());
    assert!(store.organizations.organizations().is_empty());
    assert!(app.received_requests().await.is_empty());
    assert_eq!(
        RouteAccess::Protected.evaluate(&store.session.state()),
        GuardOutcome::RedirectToLogin
    );
}

#[tokio::test]
async fn login_then_logout_follows_session() {
    // Arrange
    let app = spawn_app().await;
    app.mount_login_success("jwt-123").await;
    app.mount_organizations(&[4]).await;
    app.mount_logout(200).await;
    let store = AppStore::new(app.core_client.clone());
    let _handle = store.start(no_cb);
    wait_until(|| !store.organizations.is_loading()).await;

    // Act - Login
    store
        .session
        .login(app.test_user.login_args(), no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert - Organizations fetched for the new user
    wait_until(|| store.organizations.current().is_some()).await;
    assert_eq!(store.organizations.current().unwrap().id, DbId::from(4));

    // Act - Logout
    store.session.logout(no_cb).await.unwrap().unwrap();

    // Assert - Everything belonging to the user is gone
    wait_until(|| store.organizations.current().is_none()).await;
    assert!(store.organizations.organizations().is_empty());
    assert!(!store.organizations.is_loading());
    assert_eq!(app.stored_token(), None);
}

#[tokio::test]
async fn logout_discards_pending_organization_create() {
    // Arrange
    let app = spawn_app().await;
    app.mount_login_success("jwt-123").await;
    app.mount_organizations(&[]).await;
    app.mount_logout(200).await;
    Mock::given(method("POST"))
        .and(path(app.api_path("/organizations")))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({ "organization": organization_json(5) }))
                .set_delay(SLOW_RESPONSE),
        )
        .mount(&app.mock_server)
        .await;
    let store = AppStore::new(app.core_client.clone());
    let _handle = store.start(no_cb);
    store
        .session
        .login(app.test_user.login_args(), no_cb)
        .await
        .unwrap()
        .unwrap();
    // Login and the organization fetch it triggers
    app.wait_for_requests(2).await;
    wait_until(|| !store.organizations.is_loading()).await;
    let draft = OrganizationDraft {
        name: "Acme Legal".try_into().unwrap(),
        description: None,
    };
    let create_rx = store.organizations.create_organization(&draft, no_cb);
    app.wait_for_requests(3).await;

    // Act
    store.session.logout(no_cb).await.unwrap().unwrap();
    let created = create_rx.await;
    tokio::time::sleep(SLOW_RESPONSE * 2).await;

    // Assert
    assert!(created.is_err(), "create from before logout should never be delivered");
    assert!(store.organizations.organizations().is_empty());
    assert!(store.organizations.current().is_none());
    assert!(!store.organizations.is_loading());
}
