mod client;
pub mod pagination;
pub mod request;
pub mod transport;
pub mod types;

pub use client::SaltEdgeClient;
pub use pagination::collect_all;
pub use request::{ApiRequest, QueryParams, Scope};
pub use transport::{RawResponse, ReqwestTransport, Transport};
pub use types::{Page, Paging};

use crate::error::Result;
use crate::models::{
    Account, Asset, Attempt, AuthorizeOAuthProvider, AuthorizeOAuthProviderResponse,
    CategoryLearn, CategoryLearnResponse, CategoryTree, Connection, Consent, Country,
    CreateOAuthProvider, CreateSession, Currency, Customer, DuplicatedResponse, HolderInfo,
    LockedCustomer, Merchant, OAuthProviderResponse, Provider, ProvidersQuery, Rate,
    ReconnectOAuthProvider, ReconnectSession, RefreshSession, RemovedConnection, RemovedCustomer,
    RemovedTransactions, SessionResponse, Transaction, TransactionsQuery, UnduplicatedResponse,
    UnlockedCustomer,
};

use async_trait::async_trait;
use chrono::NaiveDate;

/// Every Salt Edge v5 endpoint the client speaks.
///
/// Each call is a single independent request: nothing is cached, retried or
/// shared between calls. Collection endpoints return one [`Page`]; feed
/// [`Page::next_cursor`] back as `from_id` (or use [`collect_all`]) until it
/// is `None`.
#[async_trait]
pub trait SaltEdgeOperations {
    async fn list_countries(&self) -> Result<Vec<Country>>;

    async fn show_provider(&self, provider_code: &str) -> Result<Provider>;

    async fn list_providers(&self, query: &ProvidersQuery) -> Result<Page<Provider>>;

    async fn create_customer(&self, identifier: &str) -> Result<Customer>;

    async fn show_customer(&self, customer_id: &str) -> Result<Customer>;

    async fn list_customers(
        &self,
        from_id: Option<&str>,
        next_id: Option<&str>,
    ) -> Result<Page<Customer>>;

    async fn remove_customer(&self, customer_id: &str) -> Result<RemovedCustomer>;

    async fn lock_customer(&self, customer_id: &str) -> Result<LockedCustomer>;

    async fn unlock_customer(&self, customer_id: &str) -> Result<UnlockedCustomer>;

    async fn create_session(&self, session: &CreateSession) -> Result<SessionResponse>;

    async fn reconnect_session(&self, session: &ReconnectSession) -> Result<SessionResponse>;

    async fn refresh_session(&self, session: &RefreshSession) -> Result<SessionResponse>;

    async fn create_oauth_provider(
        &self,
        request: &CreateOAuthProvider,
    ) -> Result<OAuthProviderResponse>;

    async fn reconnect_oauth_provider(
        &self,
        request: &ReconnectOAuthProvider,
    ) -> Result<OAuthProviderResponse>;

    async fn authorize_oauth_provider(
        &self,
        request: &AuthorizeOAuthProvider,
    ) -> Result<AuthorizeOAuthProviderResponse>;

    async fn list_connections(
        &self,
        customer_id: &str,
        from_id: Option<&str>,
    ) -> Result<Page<Connection>>;

    async fn show_connection(&self, connection_id: &str) -> Result<Connection>;

    /// Removes the connection and revokes its consent
    async fn remove_connection(&self, connection_id: &str) -> Result<RemovedConnection>;

    async fn show_holder_info(&self, connection_id: &str) -> Result<HolderInfo>;

    async fn list_attempts(&self, connection_id: &str) -> Result<Page<Attempt>>;

    async fn show_attempt(&self, connection_id: &str, attempt_id: &str) -> Result<Attempt>;

    async fn list_accounts(
        &self,
        scope: Scope<'_>,
        from_id: Option<&str>,
    ) -> Result<Page<Account>>;

    /// Non-duplicated transactions
    async fn list_transactions(&self, query: &TransactionsQuery) -> Result<Page<Transaction>>;

    async fn list_duplicated_transactions(
        &self,
        query: &TransactionsQuery,
    ) -> Result<Page<Transaction>>;

    async fn list_pending_transactions(
        &self,
        query: &TransactionsQuery,
    ) -> Result<Page<Transaction>>;

    async fn duplicate_transactions(
        &self,
        customer_id: &str,
        transaction_ids: &[String],
    ) -> Result<DuplicatedResponse>;

    async fn unduplicate_transactions(
        &self,
        customer_id: &str,
        transaction_ids: &[String],
    ) -> Result<UnduplicatedResponse>;

    /// Removes transactions older than `keep_days` days from the account
    async fn remove_transactions(
        &self,
        customer_id: &str,
        account_id: &str,
        keep_days: u32,
    ) -> Result<RemovedTransactions>;

    async fn list_consents(
        &self,
        scope: Scope<'_>,
        from_id: Option<&str>,
    ) -> Result<Page<Consent>>;

    async fn show_consent(&self, consent_id: &str, scope: Scope<'_>) -> Result<Consent>;

    async fn revoke_consent(&self, consent_id: &str, scope: Scope<'_>) -> Result<Consent>;

    async fn list_categories(&self) -> Result<CategoryTree>;

    async fn learn_categories(
        &self,
        customer_id: &str,
        transactions: &[CategoryLearn],
    ) -> Result<CategoryLearnResponse>;

    async fn list_currencies(&self) -> Result<Vec<Currency>>;

    async fn list_assets(&self) -> Result<Vec<Asset>>;

    /// Rates for `date`, or the latest rates when `None`
    async fn list_rates(&self, date: Option<NaiveDate>) -> Result<Vec<Rate>>;

    async fn list_merchants(&self, merchant_ids: &[String]) -> Result<Vec<Merchant>>;

    async fn show_merchant(&self, merchant_id: &str) -> Result<Merchant>;
}
