mod accounts;
mod config;
mod connections;
mod customers;
mod output;
mod reference;

use clap::{Parser, Subcommand};
use saltedge_client::config::Config;
use saltedge_client::{Result, SaltEdgeClient};

pub use accounts::{AccountsCommand, TransactionsCommand};
pub use config::ConfigCommand;
pub use connections::{AttemptsCommand, ConnectionsCommand, ConsentsCommand, SessionsCommand};
pub use customers::CustomersCommand;
pub use reference::{MerchantsCommand, ProvidersCommand};

#[derive(Parser, Debug)]
#[command(name = "saltedge")]
#[command(about = "Inspect Salt Edge account information data", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        if let Commands::Config { command } = &self.command {
            return command.execute().await;
        }

        let config = Config::load()?;
        let client = SaltEdgeClient::new(&config.saltedge)?;

        match &self.command {
            Commands::Config { .. } => Ok(()),
            Commands::Countries => reference::countries(&client).await,
            Commands::Currencies => reference::currencies(&client).await,
            Commands::Assets => reference::assets(&client).await,
            Commands::Categories => reference::categories(&client).await,
            Commands::Rates { date } => reference::rates(&client, *date).await,
            Commands::Providers { command } => command.execute(&client).await,
            Commands::Merchants { command } => command.execute(&client).await,
            Commands::Customers { command } => command.execute(&client).await,
            Commands::Sessions { command } => command.execute(&client).await,
            Commands::Connections { command } => command.execute(&client).await,
            Commands::HolderInfo { connection_id } => {
                connections::holder_info(&client, connection_id).await
            }
            Commands::Attempts { command } => command.execute(&client).await,
            Commands::Accounts { command } => command.execute(&client).await,
            Commands::Transactions { command } => command.execute(&client).await,
            Commands::Consents { command } => command.execute(&client).await,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inspect the local configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
    /// List supported countries
    Countries,
    /// List supported currencies
    Currencies,
    /// List supported assets
    Assets,
    /// List transaction categories grouped by parent
    Categories,
    /// List currency rates
    Rates {
        /// Rates for this date (yyyy-mm-dd), latest when omitted
        #[arg(long)]
        date: Option<chrono::NaiveDate>,
    },
    Providers {
        #[command(subcommand)]
        command: ProvidersCommand,
    },
    Merchants {
        #[command(subcommand)]
        command: MerchantsCommand,
    },
    Customers {
        #[command(subcommand)]
        command: CustomersCommand,
    },
    /// Create connect sessions for Salt Edge Connect
    Sessions {
        #[command(subcommand)]
        command: SessionsCommand,
    },
    Connections {
        #[command(subcommand)]
        command: ConnectionsCommand,
    },
    /// Show account holder information for a connection
    HolderInfo { connection_id: String },
    Attempts {
        #[command(subcommand)]
        command: AttemptsCommand,
    },
    Accounts {
        #[command(subcommand)]
        command: AccountsCommand,
    },
    Transactions {
        #[command(subcommand)]
        command: TransactionsCommand,
    },
    Consents {
        #[command(subcommand)]
        command: ConsentsCommand,
    },
}
