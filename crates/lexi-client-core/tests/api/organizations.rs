use crate::helpers::{
    error_body, no_cb, organization_json, spawn_app_with_token, SLOW_RESPONSE,
};
use lexi_client_core::{OrganizationStore, SessionState};
use lexi_shared::{
    const_config::storage::STORAGE_KEY_CURRENT_ORGANIZATION, id::DbId,
    organization::OrganizationDraft,
};
use rstest::rstest;
use serde_json::json;
use wiremock::{
    matchers::{method, path},
    Mock, ResponseTemplate,
};

#[rstest]
#[case::nothing_persisted(None, 1)]
#[case::persisted_in_list(Some("2"), 2)]
#[case::persisted_not_in_list(Some("99"), 1)]
#[case::persisted_not_numeric(Some("acme"), 1)]
#[tokio::test]
async fn fetch_selects_current(#[case] persisted: Option<&str>, #[case] expected: u64) {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_organizations(&[1, 2, 3]).await;
    if let Some(persisted) = persisted {
        app.set_stored(STORAGE_KEY_CURRENT_ORGANIZATION, persisted);
    }
    let store = OrganizationStore::new(app.core_client.clone());

    // Act
    let organizations = store.fetch(no_cb).await.unwrap().unwrap();

    // Assert
    assert_eq!(organizations.len(), 3);
    assert_eq!(store.current().unwrap().id, DbId::from(expected));
    assert!(!store.is_loading());
}

#[tokio::test]
async fn fetch_empty_list_leaves_no_current() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_organizations(&[]).await;
    let store = OrganizationStore::new(app.core_client.clone());

    // Act
    store.fetch(no_cb).await.unwrap().unwrap();

    // Assert
    assert!(store.organizations().is_empty());
    assert!(store.current().is_none());
}

#[tokio::test]
async fn fetch_failure_keeps_previous_list() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    Mock::given(method("GET"))
        .and(path(app.api_path("/organizations")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "organizations": [organization_json(1), organization_json(2)]
        })))
        .up_to_n_times(1)
        .mount(&app.mock_server)
        .await;
    app.mount_json("GET", "/organizations", 500, error_body("Database unavailable"))
        .await;
    let store = OrganizationStore::new(app.core_client.clone());
    store.fetch(no_cb).await.unwrap().unwrap();

    // Act
    let outcome = store.fetch(no_cb).await.unwrap();

    // Assert
    assert_eq!(outcome.unwrap_err().to_string(), "Database unavailable");
    assert_eq!(store.organizations().len(), 2);
    assert_eq!(store.current().unwrap().id, DbId::from(1));
    assert_eq!(store.error().as_deref(), Some("Database unavailable"));
    assert!(!store.is_loading());
}

#[tokio::test]
async fn newer_fetch_supersedes_older() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    Mock::given(method("GET"))
        .and(path(app.api_path("/organizations")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "organizations": [organization_json(1), organization_json(2)]
                }))
                .set_delay(SLOW_RESPONSE),
        )
        .up_to_n_times(1)
        .mount(&app.mock_server)
        .await;
    app.mount_organizations(&[3]).await;
    let store = OrganizationStore::new(app.core_client.clone());

    // Act
    let slow_rx = store.fetch(no_cb);
    // Ensure the slow response is the one matched by the first request
    app.wait_for_requests(1).await;
    let fast = store.fetch(no_cb).await.unwrap().unwrap();
    let slow = slow_rx.await;
    tokio::time::sleep(SLOW_RESPONSE).await;

    // Assert
    assert_eq!(fast.len(), 1);
    assert!(slow.is_err(), "superseded fetch should never be delivered");
    assert_eq!(store.organizations().len(), 1);
    assert_eq!(store.current().unwrap().id, DbId::from(3));
}

#[tokio::test]
async fn going_anonymous_discards_pending_fetch() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    Mock::given(method("GET"))
        .and(path(app.api_path("/organizations")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "organizations": [organization_json(1)] }))
                .set_delay(SLOW_RESPONSE),
        )
        .mount(&app.mock_server)
        .await;
    let store = OrganizationStore::new(app.core_client.clone());
    let fetch_rx = store.fetch(no_cb);
    app.wait_for_requests(1).await;

    // Act
    store.sync_with_session(&SessionState::Anonymous, no_cb);
    let fetched = fetch_rx.await;
    tokio::time::sleep(SLOW_RESPONSE * 2).await;

    // Assert
    assert!(fetched.is_err(), "cleared fetch should never be delivered");
    assert!(store.organizations().is_empty());
    assert!(store.current().is_none());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn create_does_not_end_pending_fetch_loading() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    Mock::given(method("GET"))
        .and(path(app.api_path("/organizations")))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "organizations": [organization_json(1)] }))
                .set_delay(SLOW_RESPONSE),
        )
        .mount(&app.mock_server)
        .await;
    app.mount_json(
        "POST",
        "/organizations",
        201,
        json!({ "organization": organization_json(5) }),
    )
    .await;
    let store = OrganizationStore::new(app.core_client.clone());
    let fetch_rx = store.fetch(no_cb);
    app.wait_for_requests(1).await;
    let draft = OrganizationDraft {
        name: "Acme Legal".try_into().unwrap(),
        description: None,
    };

    // Act - Create finishes first
    store
        .create_organization(&draft, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert - Still waiting on the list
    assert!(store.is_loading());

    // Act - Fetch finishes
    fetch_rx.await.unwrap().unwrap();

    // Assert
    assert!(!store.is_loading());
}

#[tokio::test]
async fn create_selects_when_none_selected() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_organizations(&[]).await;
    app.mount_json(
        "POST",
        "/organizations",
        201,
        json!({ "organization": organization_json(5), "role": "admin" }),
    )
    .await;
    let store = OrganizationStore::new(app.core_client.clone());
    store.fetch(no_cb).await.unwrap().unwrap();
    let draft = OrganizationDraft {
        name: "Acme Legal".try_into().unwrap(),
        description: Some("Contracts team".to_string()),
    };

    // Act
    let created = store
        .create_organization(&draft, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(created.id, DbId::from(5));
    assert_eq!(store.organizations(), vec![created.clone()]);
    assert_eq!(store.current(), Some(created));
    assert_eq!(app.stored_organization(), None);
}

#[tokio::test]
async fn create_keeps_existing_selection() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_organizations(&[1]).await;
    app.mount_json(
        "POST",
        "/organizations",
        201,
        json!({ "organization": organization_json(5) }),
    )
    .await;
    let store = OrganizationStore::new(app.core_client.clone());
    store.fetch(no_cb).await.unwrap().unwrap();
    let draft = OrganizationDraft {
        name: "Acme Legal".try_into().unwrap(),
        description: None,
    };

    // Act
    store
        .create_organization(&draft, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(store.organizations().len(), 2);
    assert_eq!(store.current().unwrap().id, DbId::from(1));
}

#[tokio::test]
async fn create_failure_records_error() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_json(
        "POST",
        "/organizations",
        400,
        error_body("Organization name is required"),
    )
    .await;
    let store = OrganizationStore::new(app.core_client.clone());
    let draft = OrganizationDraft {
        name: "Acme Legal".try_into().unwrap(),
        description: None,
    };

    // Act
    let outcome = store.create_organization(&draft, no_cb).await.unwrap();

    // Assert
    assert!(outcome.is_err());
    assert_eq!(
        store.error().as_deref(),
        Some("Organization name is required")
    );
    assert!(store.organizations().is_empty());
}

#[tokio::test]
async fn switch_persists_known_organization() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_organizations(&[1, 2]).await;
    let store = OrganizationStore::new(app.core_client.clone());
    store.fetch(no_cb).await.unwrap().unwrap();

    // Act
    let switched = store.switch_organization(2.into());

    // Assert
    assert!(switched);
    assert_eq!(store.current().unwrap().id, DbId::from(2));
    assert_eq!(app.stored_organization().as_deref(), Some("2"));
}

#[tokio::test]
async fn switch_to_unknown_organization_is_ignored() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_organizations(&[1, 2]).await;
    let store = OrganizationStore::new(app.core_client.clone());
    store.fetch(no_cb).await.unwrap().unwrap();

    // Act
    let switched = store.switch_organization(99.into());

    // Assert
    assert!(!switched);
    assert_eq!(store.current().unwrap().id, DbId::from(1));
    assert_eq!(app.stored_organization(), None);
}

#[tokio::test]
async fn selection_survives_refetch() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_organizations(&[1, 2, 3]).await;
    let store = OrganizationStore::new(app.core_client.clone());
    store.fetch(no_cb).await.unwrap().unwrap();
    store.switch_organization(3.into());

    // Act - A new store reads what the first one persisted
    let restarted = OrganizationStore::new(app.core_client.clone());
    restarted.fetch(no_cb).await.unwrap().unwrap();

    // Assert
    assert_eq!(restarted.current().unwrap().id, DbId::from(3));
}
