use lexi_client_core::AppStore;
use lexi_shared::{analysis::ClauseListParams, req_args::api::SearchReqArgs};

use super::{finish, no_cb, require_token};
use crate::{cli::AiCommand, output};

pub async fn run(store: &AppStore, command: AiCommand) -> anyhow::Result<()> {
    require_token(store)?;
    match command {
        AiCommand::Analyze { id } => {
            let document = finish(store.client.analyze_document(id, no_cb)).await?;
            println!("Analysis started: {}", output::document_line(&document));
        }
        AiCommand::Clauses { id, risk, category } => {
            let params = ClauseListParams {
                category_id: category,
                risk_level: risk,
            };
            let clauses = finish(store.client.get_document_clauses(id, &params, no_cb)).await?;
            output::print_json(&clauses)?;
        }
        AiCommand::Summary { id } => {
            let summary = finish(store.client.get_document_summary(id, no_cb)).await?;
            println!("{}", summary.summary_text);
        }
        AiCommand::Obligations { id } => {
            let obligations = finish(store.client.get_document_obligations(id, no_cb)).await?;
            output::print_json(&obligations)?;
        }
        AiCommand::Search { id, query } => {
            let args = SearchReqArgs { query };
            let answer = finish(store.client.search_document(id, &args, no_cb)).await?;
            println!("{}", answer.answer);
            if let Some(context) = answer.context {
                println!("\nFrom the document:\n{context}");
            }
        }
        AiCommand::History { id } => {
            let searches = finish(store.client.get_search_history(id, no_cb)).await?;
            for search in searches {
                println!("{:>6}  {}", search.id.to_string(), search.query_text);
            }
        }
        AiCommand::Categories => {
            let categories = finish(store.client.get_clause_categories(no_cb)).await?;
            output::print_json(&categories)?;
        }
    }
    Ok(())
}
