use super::output::{PageArgs, print_json, print_pages};
use chrono::NaiveDate;
use clap::Subcommand;
use saltedge_client::Result;
use saltedge_client::SaltEdgeOperations;
use saltedge_client::error::SaltEdgeError;
use saltedge_client::models::{CountryCode, ProviderMode, ProvidersQuery};
use tracing::info;

pub async fn countries(client: &impl SaltEdgeOperations) -> Result<()> {
    let countries = client.list_countries().await?;
    let special = countries.iter().filter(|c| !c.code.is_iso()).count();
    info!(count = countries.len(), special, "Fetched countries");
    print_json(&countries)
}

pub async fn currencies(client: &impl SaltEdgeOperations) -> Result<()> {
    print_json(&client.list_currencies().await?)
}

pub async fn assets(client: &impl SaltEdgeOperations) -> Result<()> {
    print_json(&client.list_assets().await?)
}

pub async fn categories(client: &impl SaltEdgeOperations) -> Result<()> {
    print_json(&client.list_categories().await?)
}

pub async fn rates(client: &impl SaltEdgeOperations, date: Option<NaiveDate>) -> Result<()> {
    print_json(&client.list_rates(date).await?)
}

#[derive(Subcommand, Debug)]
pub enum ProvidersCommand {
    /// List providers
    List {
        /// Two letter country code, XF for fake providers
        #[arg(long)]
        country: Option<String>,

        /// Providers created or updated since this date (yyyy-mm-dd)
        #[arg(long)]
        from_date: Option<NaiveDate>,

        #[arg(long, value_enum)]
        mode: Option<Mode>,

        #[arg(long)]
        include_fake: bool,

        #[arg(long)]
        include_fields: bool,

        #[command(flatten)]
        page: PageArgs,
    },
    /// Show a single provider
    Show { code: String },
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Mode {
    Oauth,
    Web,
    Api,
    File,
}

impl From<Mode> for ProviderMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Oauth => ProviderMode::Oauth,
            Mode::Web => ProviderMode::Web,
            Mode::Api => ProviderMode::Api,
            Mode::File => ProviderMode::File,
        }
    }
}

impl ProvidersCommand {
    pub async fn execute(&self, client: &impl SaltEdgeOperations) -> Result<()> {
        match self {
            ProvidersCommand::Show { code } => print_json(&client.show_provider(code).await?),
            ProvidersCommand::List {
                country,
                from_date,
                mode,
                include_fake,
                include_fields,
                page,
            } => {
                let country_code = country
                    .as_deref()
                    .map(CountryCode::new)
                    .transpose()
                    .map_err(|e| SaltEdgeError::InvalidArgument(e.to_string()))?;
                let base = ProvidersQuery {
                    from_date: *from_date,
                    country_code,
                    mode: mode.map(Into::into),
                    include_fake_providers: *include_fake,
                    include_provider_fields: *include_fields,
                    ..Default::default()
                };

                print_pages(page, |from_id| {
                    let query = ProvidersQuery {
                        from_id,
                        ..base.clone()
                    };
                    async move { client.list_providers(&query).await }
                })
                .await
            }
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum MerchantsCommand {
    /// Show a single merchant
    Show { merchant_id: String },
    /// Fetch several merchants at once
    List {
        #[arg(required = true)]
        merchant_ids: Vec<String>,
    },
}

impl MerchantsCommand {
    pub async fn execute(&self, client: &impl SaltEdgeOperations) -> Result<()> {
        match self {
            MerchantsCommand::Show { merchant_id } => {
                print_json(&client.show_merchant(merchant_id).await?)
            }
            MerchantsCommand::List { merchant_ids } => {
                print_json(&client.list_merchants(merchant_ids).await?)
            }
        }
    }
}
