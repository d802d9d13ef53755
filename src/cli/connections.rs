use super::output::{PageArgs, print_json, print_pages};
use clap::{Args, Subcommand};
use saltedge_client::SaltEdgeOperations;
use saltedge_client::error::{Result, SaltEdgeError};
use saltedge_client::models::{
    AttemptRequest, ConsentRequest, CreateSession, ReconnectSession, RefreshSession,
};
use saltedge_client::saltedge::Scope;
use tracing::info;

/// Exactly one of `--connection` or `--customer`
#[derive(Args, Debug)]
#[group(required = true, multiple = false)]
pub struct ScopeArgs {
    #[arg(long)]
    pub connection: Option<String>,

    #[arg(long)]
    pub customer: Option<String>,
}

impl ScopeArgs {
    pub fn scope(&self) -> Result<Scope<'_>> {
        match (&self.connection, &self.customer) {
            (Some(connection_id), _) => Ok(Scope::Connection(connection_id)),
            (None, Some(customer_id)) => Ok(Scope::Customer(customer_id)),
            (None, None) => Err(SaltEdgeError::InvalidArgument(
                "either --connection or --customer is required".to_string(),
            )),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConnectionsCommand {
    /// List the connections of a customer
    List {
        customer_id: String,

        #[command(flatten)]
        page: PageArgs,
    },
    Show {
        connection_id: String,
    },
    /// Remove a connection and revoke its consent
    Remove {
        connection_id: String,
    },
}

impl ConnectionsCommand {
    pub async fn execute(&self, client: &impl SaltEdgeOperations) -> Result<()> {
        match self {
            ConnectionsCommand::List { customer_id, page } => {
                print_pages(page, |from_id| async move {
                    client
                        .list_connections(customer_id, from_id.as_deref())
                        .await
                })
                .await
            }
            ConnectionsCommand::Show { connection_id } => {
                print_json(&client.show_connection(connection_id).await?)
            }
            ConnectionsCommand::Remove { connection_id } => {
                let removed = client.remove_connection(connection_id).await?;
                info!(connection_id = %removed.id, removed = removed.removed, "Connection removed");
                Ok(())
            }
        }
    }
}

pub async fn holder_info(client: &impl SaltEdgeOperations, connection_id: &str) -> Result<()> {
    print_json(&client.show_holder_info(connection_id).await?)
}

#[derive(Subcommand, Debug)]
pub enum AttemptsCommand {
    /// List the attempts of a connection
    List { connection_id: String },
    Show {
        connection_id: String,
        attempt_id: String,
    },
}

impl AttemptsCommand {
    pub async fn execute(&self, client: &impl SaltEdgeOperations) -> Result<()> {
        match self {
            AttemptsCommand::List { connection_id } => {
                print_json(&client.list_attempts(connection_id).await?)
            }
            AttemptsCommand::Show {
                connection_id,
                attempt_id,
            } => print_json(&client.show_attempt(connection_id, attempt_id).await?),
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum ConsentsCommand {
    List {
        #[command(flatten)]
        scope: ScopeArgs,

        #[command(flatten)]
        page: PageArgs,
    },
    Show {
        consent_id: String,

        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Revoke a consent
    Revoke {
        consent_id: String,

        #[command(flatten)]
        scope: ScopeArgs,
    },
}

impl ConsentsCommand {
    pub async fn execute(&self, client: &impl SaltEdgeOperations) -> Result<()> {
        match self {
            ConsentsCommand::List { scope, page } => {
                let scope = scope.scope()?;
                print_pages(page, |from_id| async move {
                    client.list_consents(scope, from_id.as_deref()).await
                })
                .await
            }
            ConsentsCommand::Show { consent_id, scope } => {
                print_json(&client.show_consent(consent_id, scope.scope()?).await?)
            }
            ConsentsCommand::Revoke { consent_id, scope } => {
                let consent = client.revoke_consent(consent_id, scope.scope()?).await?;
                info!(consent_id = %consent.id, revoked_at = ?consent.revoked_at, "Consent revoked");
                Ok(())
            }
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum SessionsCommand {
    /// Start a connect session for a new connection and print its URL
    Create {
        customer_id: String,

        /// Consent scopes to request
        #[arg(long, value_delimiter = ',', default_value = "account_details,transactions_details")]
        scopes: Vec<String>,

        /// Skip provider selection and go straight to this provider
        #[arg(long)]
        provider: Option<String>,

        #[arg(long)]
        include_fake: bool,

        /// Where Salt Edge Connect redirects after finishing
        #[arg(long)]
        return_to: Option<String>,
    },
    /// Start a connect session that reconnects an existing connection
    Reconnect {
        connection_id: String,

        #[arg(long, value_delimiter = ',', default_value = "account_details,transactions_details")]
        scopes: Vec<String>,

        #[arg(long)]
        return_to: Option<String>,
    },
    /// Start a connect session that refreshes an existing connection
    Refresh {
        connection_id: String,

        #[arg(long)]
        return_to: Option<String>,
    },
}

impl SessionsCommand {
    pub async fn execute(&self, client: &impl SaltEdgeOperations) -> Result<()> {
        let response = match self {
            SessionsCommand::Create {
                customer_id,
                scopes,
                provider,
                include_fake,
                return_to,
            } => {
                let session = CreateSession {
                    customer_id: customer_id.clone(),
                    consent: consent(scopes),
                    attempt: attempt(return_to),
                    provider_code: provider.clone(),
                    include_fake_providers: include_fake.then_some(true),
                    ..Default::default()
                };
                client.create_session(&session).await?
            }
            SessionsCommand::Reconnect {
                connection_id,
                scopes,
                return_to,
            } => {
                let session = ReconnectSession {
                    connection_id: connection_id.clone(),
                    consent: consent(scopes),
                    attempt: attempt(return_to),
                    ..Default::default()
                };
                client.reconnect_session(&session).await?
            }
            SessionsCommand::Refresh {
                connection_id,
                return_to,
            } => {
                let session = RefreshSession {
                    connection_id: connection_id.clone(),
                    attempt: attempt(return_to),
                    ..Default::default()
                };
                client.refresh_session(&session).await?
            }
        };

        info!(expires_at = %response.expires_at, "Connect session created");
        println!("Open this URL in your browser:\n{}", response.connect_url);
        Ok(())
    }
}

fn consent(scopes: &[String]) -> ConsentRequest {
    ConsentRequest {
        scopes: scopes.to_vec(),
        ..Default::default()
    }
}

fn attempt(return_to: &Option<String>) -> Option<AttemptRequest> {
    return_to.as_ref().map(|url| AttemptRequest {
        return_to: Some(url.clone()),
        ..Default::default()
    })
}
