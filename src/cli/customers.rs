use super::output::{PageArgs, print_json, print_pages};
use clap::Subcommand;
use saltedge_client::Result;
use saltedge_client::SaltEdgeOperations;
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum CustomersCommand {
    /// List all customers of the app
    List {
        #[command(flatten)]
        page: PageArgs,
    },
    Show {
        customer_id: String,
    },
    /// Create a customer with a unique identifier
    Create {
        identifier: String,
    },
    /// Remove a customer and all of its data
    Remove {
        customer_id: String,
    },
    Lock {
        customer_id: String,
    },
    Unlock {
        customer_id: String,
    },
}

impl CustomersCommand {
    pub async fn execute(&self, client: &impl SaltEdgeOperations) -> Result<()> {
        match self {
            CustomersCommand::List { page } => {
                print_pages(page, |from_id| async move {
                    client.list_customers(from_id.as_deref(), None).await
                })
                .await
            }
            CustomersCommand::Show { customer_id } => {
                print_json(&client.show_customer(customer_id).await?)
            }
            CustomersCommand::Create { identifier } => {
                let customer = client.create_customer(identifier).await?;
                info!(customer_id = %customer.id, "Customer created");
                print_json(&customer)
            }
            CustomersCommand::Remove { customer_id } => {
                let removed = client.remove_customer(customer_id).await?;
                info!(customer_id = %removed.id, deleted = removed.deleted, "Customer removed");
                Ok(())
            }
            CustomersCommand::Lock { customer_id } => {
                let locked = client.lock_customer(customer_id).await?;
                info!(customer_id = %locked.id, locked = locked.locked, "Customer locked");
                Ok(())
            }
            CustomersCommand::Unlock { customer_id } => {
                let unlocked = client.unlock_customer(customer_id).await?;
                info!(customer_id = %unlocked.id, unlocked = unlocked.unlocked, "Customer unlocked");
                Ok(())
            }
        }
    }
}
