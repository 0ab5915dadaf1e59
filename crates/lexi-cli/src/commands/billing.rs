use lexi_client_core::AppStore;
use lexi_shared::{
    billing::{CreateSubscriptionReqArgs, UpdateSubscriptionReqArgs},
    responses::SubscriptionResponse,
};

use super::{finish, no_cb, require_token};
use crate::{cli::BillingCommand, output};

pub async fn run(store: &AppStore, command: BillingCommand) -> anyhow::Result<()> {
    match command {
        // Plans are public
        BillingCommand::Plans => {
            let plans = finish(store.client.get_plans(no_cb)).await?;
            for plan in plans {
                println!(
                    "{:<12} {} ({:.2}/{})",
                    plan.id, plan.name, plan.price, plan.interval
                );
            }
            Ok(())
        }
        BillingCommand::Subscribe {
            plan_id,
            payment_method,
        } => {
            require_token(store)?;
            let args = CreateSubscriptionReqArgs {
                plan_id,
                payment_method_id: payment_method,
            };
            print_subscription(finish(store.client.create_subscription(&args, no_cb)).await?)
        }
        BillingCommand::ChangePlan { plan_id } => {
            require_token(store)?;
            let args = UpdateSubscriptionReqArgs { plan_id };
            print_subscription(finish(store.client.update_subscription(&args, no_cb)).await?)
        }
        BillingCommand::Cancel => {
            require_token(store)?;
            print_subscription(finish(store.client.cancel_subscription(no_cb)).await?)
        }
    }
}

fn print_subscription(response: SubscriptionResponse) -> anyhow::Result<()> {
    if let Some(message) = &response.message {
        println!("{message}");
    }
    output::print_json(&response.subscription)
}
