use anyhow::Context as _;
use lexi_shared::{
    document::{Document, Pagination},
    organization::Organization,
};

pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to format output")?;
    println!("{text}");
    Ok(())
}

pub fn organization_line(organization: &Organization, is_current: bool) -> String {
    let marker = if is_current { '*' } else { ' ' };
    format!(
        "{marker} {:>6}  {}",
        organization.id.to_string(),
        organization.name
    )
}

pub fn document_line(document: &Document) -> String {
    let mut line = format!(
        "{:>6}  {:<10}  {}",
        document.id.to_string(),
        document.status.to_string(),
        document.title
    );
    if let Some(permission) = document.permission_level {
        line.push_str(&format!(" ({permission})"));
    }
    line
}

pub fn print_documents(documents: &[Document], pagination: Option<&Pagination>) {
    if documents.is_empty() {
        println!("No documents");
    }
    for document in documents {
        println!("{}", document_line(document));
    }
    if let Some(pagination) = pagination {
        println!(
            "Page {} of {} ({} documents)",
            pagination.page, pagination.total_pages, pagination.total_items
        );
    }
}
