use super::connections::ScopeArgs;
use super::output::{PageArgs, fetch_items, print_json, print_pages};
use clap::{Subcommand, ValueEnum};
use saltedge_client::Result;
use saltedge_client::SaltEdgeOperations;
use saltedge_client::models::{CategoryLearn, TransactionsQuery, write_csv};
use tracing::info;

#[derive(Subcommand, Debug)]
pub enum AccountsCommand {
    /// List accounts of a connection or customer
    List {
        #[command(flatten)]
        scope: ScopeArgs,

        #[command(flatten)]
        page: PageArgs,
    },
}

impl AccountsCommand {
    pub async fn execute(&self, client: &impl SaltEdgeOperations) -> Result<()> {
        match self {
            AccountsCommand::List { scope, page } => {
                let scope = scope.scope()?;
                print_pages(page, |from_id| async move {
                    client.list_accounts(scope, from_id.as_deref()).await
                })
                .await
            }
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
pub enum TransactionKind {
    #[default]
    Normal,
    Duplicated,
    Pending,
}

#[derive(Subcommand, Debug)]
pub enum TransactionsCommand {
    /// List transactions of a connection
    List {
        connection_id: String,

        #[arg(long)]
        account: Option<String>,

        #[arg(long, value_enum, default_value_t)]
        kind: TransactionKind,

        /// Write CSV instead of JSON
        #[arg(long)]
        csv: bool,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Mark transactions as duplicated
    Duplicate {
        customer_id: String,
        #[arg(required = true)]
        transaction_ids: Vec<String>,
    },
    /// Remove the duplicated flag from transactions
    Unduplicate {
        customer_id: String,
        #[arg(required = true)]
        transaction_ids: Vec<String>,
    },
    /// Remove transactions older than the given number of days
    Remove {
        customer_id: String,
        account_id: String,
        #[arg(long, default_value_t = 0)]
        keep_days: u32,
    },
    /// Teach the categorizer the correct category of a transaction
    Learn {
        customer_id: String,
        transaction_id: String,
        category_code: String,
    },
}

impl TransactionsCommand {
    pub async fn execute(&self, client: &impl SaltEdgeOperations) -> Result<()> {
        match self {
            TransactionsCommand::List {
                connection_id,
                account,
                kind,
                csv,
                page,
            } => {
                let base = TransactionsQuery {
                    connection_id: connection_id.clone(),
                    account_id: account.clone(),
                    from_id: None,
                };

                let transactions = fetch_items(page, |from_id| {
                    let query = base.clone().from_id(from_id);
                    let kind = *kind;
                    async move {
                        match kind {
                            TransactionKind::Normal => client.list_transactions(&query).await,
                            TransactionKind::Duplicated => {
                                client.list_duplicated_transactions(&query).await
                            }
                            TransactionKind::Pending => {
                                client.list_pending_transactions(&query).await
                            }
                        }
                    }
                })
                .await?;

                match *csv {
                    true => write_csv(&transactions, std::io::stdout().lock()),
                    false => print_json(&transactions),
                }
            }
            TransactionsCommand::Duplicate {
                customer_id,
                transaction_ids,
            } => {
                let response = client
                    .duplicate_transactions(customer_id, transaction_ids)
                    .await?;
                info!(duplicated = response.duplicated, "Transactions marked duplicated");
                Ok(())
            }
            TransactionsCommand::Unduplicate {
                customer_id,
                transaction_ids,
            } => {
                let response = client
                    .unduplicate_transactions(customer_id, transaction_ids)
                    .await?;
                info!(unduplicated = response.unduplicated, "Duplicated flag removed");
                Ok(())
            }
            TransactionsCommand::Remove {
                customer_id,
                account_id,
                keep_days,
            } => {
                let response = client
                    .remove_transactions(customer_id, account_id, *keep_days)
                    .await?;
                info!(cleanup_started = response.cleanup_started, "Transaction cleanup requested");
                Ok(())
            }
            TransactionsCommand::Learn {
                customer_id,
                transaction_id,
                category_code,
            } => {
                let learn = [CategoryLearn {
                    id: transaction_id.clone(),
                    category_code: category_code.clone(),
                    immediate: None,
                }];
                let response = client.learn_categories(customer_id, &learn).await?;
                info!(learned = response.learned, "Category learned");
                Ok(())
            }
        }
    }
}
