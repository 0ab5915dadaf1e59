use anyhow::bail;
use lexi_client_core::AppStore;
use lexi_shared::forms::NewOrganizationForm;

use super::{finish, invalid_input, no_cb, require_token};
use crate::{cli::OrganizationCommand, output};

pub async fn run(store: &AppStore, command: OrganizationCommand) -> anyhow::Result<()> {
    require_token(store)?;
    match command {
        OrganizationCommand::List => {
            let organizations = finish(store.organizations.fetch(no_cb)).await?;
            if organizations.is_empty() {
                println!("You are not a member of any organization");
            }
            let current = store.organizations.current();
            for organization in &organizations {
                let is_current = current.as_ref().is_some_and(|c| c.id == organization.id);
                println!("{}", output::organization_line(organization, is_current));
            }
        }
        OrganizationCommand::Show { id } => {
            let response = finish(store.client.get_organization(id, no_cb)).await?;
            output::print_json(&response.organization)?;
            if let Some(role) = response.role {
                println!("Your role: {role}");
            }
        }
        OrganizationCommand::Create { name, description } => {
            let draft = NewOrganizationForm { name, description }
                .validate()
                .map_err(invalid_input)?;
            // Loaded first so the new organization is only selected if none was
            finish(store.organizations.fetch(no_cb)).await?;
            let organization = finish(store.organizations.create_organization(&draft, no_cb)).await?;
            println!("Created organization {} ({})", organization.name, organization.id);
        }
        OrganizationCommand::Switch { id } => {
            finish(store.organizations.fetch(no_cb)).await?;
            if !store.organizations.switch_organization(id) {
                bail!("organization {id} not found among your organizations");
            }
            println!("Switched to organization {id}");
        }
    }
    Ok(())
}
