use anyhow::{bail, Context as _};
use lexi_client_core::{AppStore, DocumentUpload};
use lexi_shared::{
    document::{DocumentListParams, ShareDocumentReqArgs},
    id::DbId,
};
use std::path::{Path, PathBuf};
use tracing::info;

use super::{finish, no_cb, organization_id, require_token};
use crate::{
    cli::{DocumentCommand, PageArgs},
    output,
};

pub async fn run(store: &AppStore, command: DocumentCommand) -> anyhow::Result<()> {
    require_token(store)?;
    match command {
        DocumentCommand::List {
            organization,
            paging,
        } => {
            let organization_id = organization_id(store, organization.organization_id).await?;
            let response = finish(store.client.get_organization_documents(
                organization_id,
                &list_params(paging),
                no_cb,
            ))
            .await?;
            output::print_documents(&response.documents, response.pagination.as_ref());
        }
        DocumentCommand::Upload {
            file,
            title,
            description,
            organization,
        } => {
            let organization_id = organization_id(store, organization.organization_id).await?;
            let upload = read_upload(&file, title, description)?;
            let document =
                finish(store.client.upload_document(organization_id, upload.into_form(), no_cb))
                    .await?;
            println!("Uploaded {}", output::document_line(&document));
        }
        DocumentCommand::Show { id } => {
            let document = finish(store.client.get_document(id, no_cb)).await?;
            output::print_json(&document)?;
        }
        DocumentCommand::Download { id, output } => download(store, id, output).await?,
        DocumentCommand::Rename { id, title } => {
            let form = DocumentUpload {
                title: Some(title),
                ..Default::default()
            }
            .into_form();
            let document = finish(store.client.update_document(id, form, no_cb)).await?;
            println!("Renamed {}", output::document_line(&document));
        }
        DocumentCommand::Delete { id } => {
            finish(store.client.delete_document(id, no_cb)).await?;
            println!("Deleted document {id}");
        }
        DocumentCommand::Share {
            id,
            user_id,
            permission,
        } => {
            let args = ShareDocumentReqArgs {
                user_id,
                permission_level: permission,
            };
            let share = finish(store.client.share_document(id, &args, no_cb)).await?;
            println!(
                "Shared document {} with user {} ({})",
                share.document_id, share.user_id, share.permission_level
            );
        }
        DocumentCommand::Shares { id } => {
            let shares = finish(store.client.get_document_shares(id, no_cb)).await?;
            output::print_json(&shares)?;
        }
        DocumentCommand::Unshare { id, user_id } => {
            finish(store.client.unshare_document(id, user_id, no_cb)).await?;
            println!("Document {id} is no longer shared with user {user_id}");
        }
        DocumentCommand::Shared { paging } => {
            let response =
                finish(store.client.get_shared_documents(&list_params(paging), no_cb)).await?;
            output::print_documents(&response.documents, response.pagination.as_ref());
        }
    }
    Ok(())
}

fn list_params(paging: PageArgs) -> DocumentListParams {
    DocumentListParams {
        page: paging.page,
        per_page: paging.per_page,
        search: paging.search,
    }
}

fn read_upload(
    file: &Path,
    title: Option<String>,
    description: Option<String>,
) -> anyhow::Result<DocumentUpload> {
    let content = std::fs::read(file).with_context(|| format!("failed to read {file:?}"))?;
    let file_name = file
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .with_context(|| format!("{file:?} is not a file"))?;
    let title = match title {
        Some(title) => title,
        None => file
            .file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
            .unwrap_or_else(|| file_name.clone()),
    };
    let mut upload = DocumentUpload::new(title).file(file_name, content);
    if let Some(description) = description {
        upload = upload.description(description);
    }
    Ok(upload)
}

async fn download(store: &AppStore, id: DbId, output: Option<PathBuf>) -> anyhow::Result<()> {
    let response = finish(store.client.get_document_content(id, no_cb)).await?;
    let status = response.status();
    if !status.is_success() {
        bail!(
            "download failed: {}",
            status.canonical_reason().unwrap_or(status.as_str())
        );
    }
    let output = output.unwrap_or_else(|| PathBuf::from(format!("document_{id}")));
    let content = response
        .bytes()
        .await
        .context("failed to read document content")?;
    std::fs::write(&output, &content).with_context(|| format!("failed to write {output:?}"))?;
    info!(?output, len = content.len(), "document saved");
    println!("Saved {} bytes to {output:?}", content.len());
    Ok(())
}
