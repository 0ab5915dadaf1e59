use crate::helpers::{document_json, no_cb, spawn_app_with_token};
use lexi_client_core::DocumentUpload;
use lexi_shared::{
    document::{DocumentListParams, DocumentStatus, PermissionLevel, ShareDocumentReqArgs},
    id::DbId,
};
use serde_json::json;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, ResponseTemplate,
};

#[tokio::test]
async fn list_sends_query_and_returns_pagination() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    Mock::given(method("GET"))
        .and(path(app.api_path("/organizations/2/documents")))
        .and(query_param("page", "2"))
        .and(query_param("search", "lease"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "documents": [document_json(10, 2), document_json(11, 2)],
            "pagination": { "page": 2, "per_page": 10, "total_pages": 3, "total_items": 22 },
        })))
        .expect(1)
        .mount(&app.mock_server)
        .await;
    let params = DocumentListParams::default().page(2).search("lease");

    // Act
    let outcome = app
        .core_client
        .get_organization_documents(2.into(), &params, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(outcome.documents.len(), 2);
    assert_eq!(outcome.pagination.unwrap().total_items, 22);
}

#[tokio::test]
async fn list_without_params_has_no_query_string() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_json(
        "GET",
        "/organizations/2/documents",
        200,
        json!({ "documents": [] }),
    )
    .await;

    // Act
    let outcome = app
        .core_client
        .get_organization_documents(2.into(), &DocumentListParams::default(), no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert!(outcome.documents.is_empty());
    assert_eq!(app.received_requests().await[0].url.query(), None);
}

#[tokio::test]
async fn upload_sends_multipart_form() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_json(
        "POST",
        "/organizations/2/documents",
        201,
        json!({ "message": "Document uploaded successfully", "document": document_json(12, 2) }),
    )
    .await;
    let form = DocumentUpload::new("Office lease")
        .description("Ten year term")
        .file("lease.pdf", b"%PDF-1.7 lease".to_vec())
        .into_form();

    // Act
    let document = app
        .core_client
        .upload_document(2.into(), form, no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(document.id, DbId::from(12));
    let request = &app.received_requests().await[0];
    let content_type = request.headers.get("content-type").unwrap().to_str().unwrap();
    assert!(
        content_type.starts_with("multipart/form-data"),
        "unexpected content type: {content_type}"
    );
    let body = String::from_utf8_lossy(&request.body);
    assert!(body.contains("name=\"title\""), "{body}");
    assert!(body.contains("Office lease"), "{body}");
    assert!(body.contains("filename=\"lease.pdf\""), "{body}");
    assert!(body.contains("%PDF-1.7 lease"), "{body}");
}

#[tokio::test]
async fn get_document_unwraps_envelope() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_json(
        "GET",
        "/documents/10",
        200,
        json!({ "document": document_json(10, 2) }),
    )
    .await;

    // Act
    let document = app
        .core_client
        .get_document(10.into(), no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(document.title, "Document 10");
    assert_eq!(document.status, DocumentStatus::Completed);
}

#[tokio::test]
async fn content_returned_unprocessed() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    Mock::given(method("GET"))
        .and(path(app.api_path("/documents/10/content")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "application/pdf")
                .set_body_bytes(b"%PDF-1.7".to_vec()),
        )
        .mount(&app.mock_server)
        .await;

    // Act
    let response = app
        .core_client
        .get_document_content(10.into(), no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "application/pdf"
    );
    assert_eq!(response.bytes().await.unwrap().as_ref(), b"%PDF-1.7");
}

#[tokio::test]
async fn content_failure_status_left_to_caller() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    Mock::given(method("GET"))
        .and(path(app.api_path("/documents/10/content")))
        .respond_with(ResponseTemplate::new(404))
        .mount(&app.mock_server)
        .await;

    // Act
    let outcome = app
        .core_client
        .get_document_content(10.into(), no_cb)
        .await
        .unwrap();

    // Assert
    assert_eq!(outcome.unwrap().status().as_u16(), 404);
}

#[tokio::test]
async fn update_uses_put() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    app.mount_json(
        "PUT",
        "/documents/10",
        200,
        json!({ "message": "Document updated successfully", "document": document_json(10, 2) }),
    )
    .await;
    let form = DocumentUpload::new("Renamed").into_form();

    // Act
    let outcome = app
        .core_client
        .update_document(10.into(), form, no_cb)
        .await
        .unwrap();

    // Assert
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn delete_expects_no_body() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    Mock::given(method("DELETE"))
        .and(path(app.api_path("/documents/10")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    // Act
    let outcome = app
        .core_client
        .delete_document(10.into(), no_cb)
        .await
        .unwrap();

    // Assert
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn share_and_list_shares() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    let share = json!({
        "id": 1,
        "document_id": 10,
        "user_id": 7,
        "permission_level": "edit",
    });
    Mock::given(method("POST"))
        .and(path(app.api_path("/documents/10/share")))
        .and(body_json(json!({ "user_id": 7, "permission_level": "edit" })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "message": "Document shared successfully",
            "document_share": share,
        })))
        .expect(1)
        .mount(&app.mock_server)
        .await;
    app.mount_json("GET", "/documents/10/shares", 200, json!({ "shares": [share] }))
        .await;
    let args = ShareDocumentReqArgs {
        user_id: 7.into(),
        permission_level: PermissionLevel::Edit,
    };

    // Act
    let created = app
        .core_client
        .share_document(10.into(), &args, no_cb)
        .await
        .unwrap()
        .unwrap();
    let shares = app
        .core_client
        .get_document_shares(10.into(), no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(created.permission_level, PermissionLevel::Edit);
    assert_eq!(shares, vec![created]);
}

#[tokio::test]
async fn unshare_targets_user() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    Mock::given(method("DELETE"))
        .and(path(app.api_path("/documents/10/share/7")))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&app.mock_server)
        .await;

    // Act
    let outcome = app
        .core_client
        .unshare_document(10.into(), 7.into(), no_cb)
        .await
        .unwrap();

    // Assert
    assert!(outcome.is_ok());
}

#[tokio::test]
async fn shared_with_me_lists_documents() {
    // Arrange
    let app = spawn_app_with_token("abc").await;
    let mut shared = document_json(20, 9);
    shared["permission_level"] = json!("read");
    Mock::given(method("GET"))
        .and(path(app.api_path("/users/me/shared-documents")))
        .and(query_param("per_page", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "documents": [shared] })))
        .mount(&app.mock_server)
        .await;

    // Act
    let outcome = app
        .core_client
        .get_shared_documents(&DocumentListParams::default().per_page(5), no_cb)
        .await
        .unwrap()
        .unwrap();

    // Assert
    assert_eq!(
        outcome.documents[0].permission_level,
        Some(PermissionLevel::Read)
    );
}
