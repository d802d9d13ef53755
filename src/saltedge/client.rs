use super::SaltEdgeOperations;
use super::request::{ApiRequest, QueryParams, Scope};
use super::transport::{RawResponse, ReqwestTransport, Transport};
use super::types::{DataRequest, DataResponse, ErrorResponse, Page};
use crate::config::SaltEdgeConfig;
use crate::error::{Result, SaltEdgeError, require, require_all, require_segment};
use crate::models::category::CategoryLearnRequest;
use crate::models::customer::NewCustomer;
use crate::models::transaction::{TransactionIds, TransactionsCleanup};
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
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{instrument, warn};

pub struct SaltEdgeClient<T = ReqwestTransport> {
    transport: T,
}

impl SaltEdgeClient<ReqwestTransport> {
    /// Create a client that sends the configured `App-id` and `Secret` with every request
    pub fn new(config: &SaltEdgeConfig) -> Result<Self> {
        Ok(Self::with_transport(ReqwestTransport::new(config)?))
    }
}

impl<T: Transport> SaltEdgeClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    async fn send<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let response = self.transport.execute(request).await?;

        if !response.status.is_success() {
            return Err(remote_error(response));
        }

        Ok(serde_json::from_str(&response.body)?)
    }

    /// Single entity wrapped in `{ "data": ... }`
    async fn data<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<R> {
        let response: DataResponse<R> = self.send(request).await?;
        Ok(response.data)
    }

    async fn page<R: DeserializeOwned>(&self, request: ApiRequest) -> Result<Page<R>> {
        self.send(request).await
    }

    async fn transactions_page(
        &self,
        path: &str,
        query: &TransactionsQuery,
    ) -> Result<Page<Transaction>> {
        require("connection_id", &query.connection_id)?;

        let mut params = QueryParams::new();
        params
            .push("connection_id", query.connection_id.as_str())
            .push_opt("account_id", query.account_id.as_deref())
            .push_opt("from_id", query.from_id.as_deref());

        self.page(ApiRequest::get(path).query(params)).await
    }
}

fn remote_error(response: RawResponse) -> SaltEdgeError {
    let status = response.status;
    match serde_json::from_str::<ErrorResponse>(&response.body) {
        Ok(ErrorResponse { error }) => SaltEdgeError::RemoteApi {
            status,
            class: error.class,
            message: error.message,
        },
        Err(_) => {
            warn!(status = %status, "Unrecognised error body");
            let message = match response.body.trim().is_empty() {
                true => status.canonical_reason().unwrap_or_default().to_string(),
                false => response.body,
            };
            SaltEdgeError::RemoteApi {
                status,
                class: "Unknown".to_string(),
                message,
            }
        }
    }
}

fn data_body<B: Serialize>(data: B) -> Result<Value> {
    Ok(serde_json::to_value(DataRequest { data })?)
}

// Characters that cannot appear raw inside one path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

fn segment(id: &str) -> String {
    utf8_percent_encode(id, PATH_SEGMENT).to_string()
}

#[async_trait]
impl<T: Transport> SaltEdgeOperations for SaltEdgeClient<T> {
    #[instrument(name = "Fetching countries", skip_all)]
    async fn list_countries(&self) -> Result<Vec<Country>> {
        self.data(ApiRequest::get("countries")).await
    }

    #[instrument(name = "Fetching provider", skip_all, fields(provider_code = %provider_code))]
    async fn show_provider(&self, provider_code: &str) -> Result<Provider> {
        require_segment("provider_code", provider_code)?;
        self.data(ApiRequest::get(format!("providers/{}", segment(provider_code))))
            .await
    }

    #[instrument(name = "Fetching providers", skip_all)]
    async fn list_providers(&self, query: &ProvidersQuery) -> Result<Page<Provider>> {
        let mut params = QueryParams::new();
        params
            .push_opt("from_id", query.from_id.as_deref())
            .push_date("from_date", query.from_date)
            .push_opt("country_code", query.country_code.as_ref().map(|c| c.as_str()))
            .push_opt("mode", query.mode.map(|m| m.as_str()))
            .push_flag("include_fake_providers", query.include_fake_providers)
            .push_flag("include_provider_fields", query.include_provider_fields)
            .push_opt(
                "provider_key_owner",
                query.provider_key_owner.map(|o| o.as_str()),
            );

        self.page(ApiRequest::get("providers").query(params)).await
    }

    #[instrument(name = "Creating customer", skip_all, fields(identifier = %identifier))]
    async fn create_customer(&self, identifier: &str) -> Result<Customer> {
        require("identifier", identifier)?;
        let body = data_body(NewCustomer { identifier })?;
        self.data(ApiRequest::new(Method::POST, "customers").body(body))
            .await
    }

    #[instrument(name = "Fetching customer", skip_all, fields(customer_id = %customer_id))]
    async fn show_customer(&self, customer_id: &str) -> Result<Customer> {
        require_segment("customer_id", customer_id)?;
        self.data(ApiRequest::get(format!("customers/{}", segment(customer_id))))
            .await
    }

    #[instrument(name = "Fetching customers", skip_all)]
    async fn list_customers(
        &self,
        from_id: Option<&str>,
        next_id: Option<&str>,
    ) -> Result<Page<Customer>> {
        let mut params = QueryParams::new();
        params
            .push_opt("from_id", from_id)
            .push_opt("next_id", next_id);

        self.page(ApiRequest::get("customers").query(params)).await
    }

    #[instrument(name = "Removing customer", skip_all, fields(customer_id = %customer_id))]
    async fn remove_customer(&self, customer_id: &str) -> Result<RemovedCustomer> {
        require_segment("customer_id", customer_id)?;
        let path = format!("customers/{}", segment(customer_id));
        self.data(ApiRequest::new(Method::DELETE, path)).await
    }

    #[instrument(name = "Locking customer", skip_all, fields(customer_id = %customer_id))]
    async fn lock_customer(&self, customer_id: &str) -> Result<LockedCustomer> {
        require_segment("customer_id", customer_id)?;
        let path = format!("customers/{}/lock", segment(customer_id));
        self.data(ApiRequest::new(Method::PUT, path)).await
    }

    #[instrument(name = "Unlocking customer", skip_all, fields(customer_id = %customer_id))]
    async fn unlock_customer(&self, customer_id: &str) -> Result<UnlockedCustomer> {
        require_segment("customer_id", customer_id)?;
        let path = format!("customers/{}/unlock", segment(customer_id));
        self.data(ApiRequest::new(Method::PUT, path)).await
    }

    #[instrument(name = "Creating connect session", skip_all, fields(customer_id = %session.customer_id))]
    async fn create_session(&self, session: &CreateSession) -> Result<SessionResponse> {
        require("customer_id", &session.customer_id)?;
        let body = data_body(session)?;
        self.data(ApiRequest::new(Method::POST, "connect_sessions/create").body(body))
            .await
    }

    #[instrument(name = "Creating reconnect session", skip_all, fields(connection_id = %session.connection_id))]
    async fn reconnect_session(&self, session: &ReconnectSession) -> Result<SessionResponse> {
        require("connection_id", &session.connection_id)?;
        let body = data_body(session)?;
        self.data(ApiRequest::new(Method::POST, "connect_sessions/reconnect").body(body))
            .await
    }

    #[instrument(name = "Creating refresh session", skip_all, fields(connection_id = %session.connection_id))]
    async fn refresh_session(&self, session: &RefreshSession) -> Result<SessionResponse> {
        require("connection_id", &session.connection_id)?;
        let body = data_body(session)?;
        self.data(ApiRequest::new(Method::POST, "connect_sessions/refresh").body(body))
            .await
    }

    #[instrument(name = "Creating OAuth connection", skip_all, fields(provider_code = %request.provider_code))]
    async fn create_oauth_provider(
        &self,
        request: &CreateOAuthProvider,
    ) -> Result<OAuthProviderResponse> {
        require("customer_id", &request.customer_id)?;
        require("provider_code", &request.provider_code)?;
        let body = data_body(request)?;
        self.data(ApiRequest::new(Method::POST, "oauth_providers/create").body(body))
            .await
    }

    #[instrument(name = "Reconnecting OAuth connection", skip_all, fields(connection_id = %request.connection_id))]
    async fn reconnect_oauth_provider(
        &self,
        request: &ReconnectOAuthProvider,
    ) -> Result<OAuthProviderResponse> {
        require("connection_id", &request.connection_id)?;
        let body = data_body(request)?;
        self.data(ApiRequest::new(Method::POST, "oauth_providers/reconnect").body(body))
            .await
    }

    #[instrument(name = "Authorizing OAuth connection", skip_all, fields(connection_id = %request.connection_id))]
    async fn authorize_oauth_provider(
        &self,
        request: &AuthorizeOAuthProvider,
    ) -> Result<AuthorizeOAuthProviderResponse> {
        require("connection_id", &request.connection_id)?;
        require("query_string", &request.query_string)?;
        let body = data_body(request)?;
        self.data(ApiRequest::new(Method::PUT, "oauth_providers/authorize").body(body))
            .await
    }

    #[instrument(name = "Fetching connections", skip_all, fields(customer_id = %customer_id))]
    async fn list_connections(
        &self,
        customer_id: &str,
        from_id: Option<&str>,
    ) -> Result<Page<Connection>> {
        require("customer_id", customer_id)?;

        let mut params = QueryParams::new();
        params
            .push("customer_id", customer_id)
            .push_opt("from_id", from_id);

        self.page(ApiRequest::get("connections").query(params)).await
    }

    #[instrument(name = "Fetching connection", skip_all, fields(connection_id = %connection_id))]
    async fn show_connection(&self, connection_id: &str) -> Result<Connection> {
        require_segment("connection_id", connection_id)?;
        self.data(ApiRequest::get(format!("connections/{}", segment(connection_id))))
            .await
    }

    #[instrument(name = "Removing connection", skip_all, fields(connection_id = %connection_id))]
    async fn remove_connection(&self, connection_id: &str) -> Result<RemovedConnection> {
        require_segment("connection_id", connection_id)?;
        let path = format!("connections/{}", segment(connection_id));
        self.data(ApiRequest::new(Method::DELETE, path)).await
    }

    #[instrument(name = "Fetching holder info", skip_all, fields(connection_id = %connection_id))]
    async fn show_holder_info(&self, connection_id: &str) -> Result<HolderInfo> {
        require("connection_id", connection_id)?;

        let mut params = QueryParams::new();
        params.push("connection_id", connection_id);

        self.data(ApiRequest::get("holder_info").query(params)).await
    }

    #[instrument(name = "Fetching attempts", skip_all, fields(connection_id = %connection_id))]
    async fn list_attempts(&self, connection_id: &str) -> Result<Page<Attempt>> {
        require("connection_id", connection_id)?;

        let mut params = QueryParams::new();
        params.push("connection_id", connection_id);

        self.page(ApiRequest::get("attempts").query(params)).await
    }

    #[instrument(name = "Fetching attempt", skip_all, fields(connection_id = %connection_id, attempt_id = %attempt_id))]
    async fn show_attempt(&self, connection_id: &str, attempt_id: &str) -> Result<Attempt> {
        require("connection_id", connection_id)?;
        require_segment("attempt_id", attempt_id)?;

        let mut params = QueryParams::new();
        params.push("connection_id", connection_id);

        let path = format!("attempts/{}", segment(attempt_id));
        self.data(ApiRequest::get(path).query(params)).await
    }

    #[instrument(name = "Fetching accounts", skip_all, fields(scope = ?scope))]
    async fn list_accounts(
        &self,
        scope: Scope<'_>,
        from_id: Option<&str>,
    ) -> Result<Page<Account>> {
        scope.validate()?;

        let mut params = QueryParams::new();
        params.push_scope(scope).push_opt("from_id", from_id);

        self.page(ApiRequest::get("accounts").query(params)).await
    }

    #[instrument(name = "Fetching transactions", skip_all, fields(connection_id = %query.connection_id))]
    async fn list_transactions(&self, query: &TransactionsQuery) -> Result<Page<Transaction>> {
        self.transactions_page("transactions", query).await
    }

    #[instrument(name = "Fetching duplicated transactions", skip_all, fields(connection_id = %query.connection_id))]
    async fn list_duplicated_transactions(
        &self,
        query: &TransactionsQuery,
    ) -> Result<Page<Transaction>> {
        self.transactions_page("transactions/duplicates", query)
            .await
    }

    #[instrument(name = "Fetching pending transactions", skip_all, fields(connection_id = %query.connection_id))]
    async fn list_pending_transactions(
        &self,
        query: &TransactionsQuery,
    ) -> Result<Page<Transaction>> {
        self.transactions_page("transactions/pending", query).await
    }

    #[instrument(name = "Marking transactions duplicated", skip_all, fields(customer_id = %customer_id, count = transaction_ids.len()))]
    async fn duplicate_transactions(
        &self,
        customer_id: &str,
        transaction_ids: &[String],
    ) -> Result<DuplicatedResponse> {
        require("customer_id", customer_id)?;
        require_all("transaction_ids", transaction_ids)?;

        let body = data_body(TransactionIds {
            customer_id,
            transaction_ids,
        })?;
        self.data(ApiRequest::new(Method::PUT, "transactions/duplicate").body(body))
            .await
    }

    #[instrument(name = "Removing duplicated flag", skip_all, fields(customer_id = %customer_id, count = transaction_ids.len()))]
    async fn unduplicate_transactions(
        &self,
        customer_id: &str,
        transaction_ids: &[String],
    ) -> Result<UnduplicatedResponse> {
        require("customer_id", customer_id)?;
        require_all("transaction_ids", transaction_ids)?;

        let body = data_body(TransactionIds {
            customer_id,
            transaction_ids,
        })?;
        self.data(ApiRequest::new(Method::PUT, "transactions/unduplicate").body(body))
            .await
    }

    #[instrument(name = "Removing old transactions", skip_all, fields(account_id = %account_id, keep_days = keep_days))]
    async fn remove_transactions(
        &self,
        customer_id: &str,
        account_id: &str,
        keep_days: u32,
    ) -> Result<RemovedTransactions> {
        require("customer_id", customer_id)?;
        require("account_id", account_id)?;

        let body = data_body(TransactionsCleanup {
            customer_id,
            account_id,
            keep_days,
        })?;
        self.data(ApiRequest::new(Method::DELETE, "transactions").body(body))
            .await
    }

    #[instrument(name = "Fetching consents", skip_all, fields(scope = ?scope))]
    async fn list_consents(
        &self,
        scope: Scope<'_>,
        from_id: Option<&str>,
    ) -> Result<Page<Consent>> {
        scope.validate()?;

        let mut params = QueryParams::new();
        params.push_scope(scope).push_opt("from_id", from_id);

        self.page(ApiRequest::get("consents").query(params)).await
    }

    #[instrument(name = "Fetching consent", skip_all, fields(consent_id = %consent_id))]
    async fn show_consent(&self, consent_id: &str, scope: Scope<'_>) -> Result<Consent> {
        require_segment("consent_id", consent_id)?;
        scope.validate()?;

        let mut params = QueryParams::new();
        params.push_scope(scope);

        let path = format!("consents/{}", segment(consent_id));
        self.data(ApiRequest::get(path).query(params)).await
    }

    #[instrument(name = "Revoking consent", skip_all, fields(consent_id = %consent_id))]
    async fn revoke_consent(&self, consent_id: &str, scope: Scope<'_>) -> Result<Consent> {
        require_segment("consent_id", consent_id)?;
        scope.validate()?;

        let mut params = QueryParams::new();
        params.push_scope(scope);

        let path = format!("consents/{}/revoke", segment(consent_id));
        self.data(ApiRequest::new(Method::PUT, path).query(params))
            .await
    }

    #[instrument(name = "Fetching categories", skip_all)]
    async fn list_categories(&self) -> Result<CategoryTree> {
        self.data(ApiRequest::get("categories")).await
    }

    #[instrument(name = "Learning categories", skip_all, fields(customer_id = %customer_id, count = transactions.len()))]
    async fn learn_categories(
        &self,
        customer_id: &str,
        transactions: &[CategoryLearn],
    ) -> Result<CategoryLearnResponse> {
        require("customer_id", customer_id)?;
        if transactions.is_empty() {
            return Err(SaltEdgeError::InvalidArgument(
                "transactions must contain at least one entry".to_string(),
            ));
        }
        for learn in transactions {
            require("transactions.id", &learn.id)?;
            require("transactions.category_code", &learn.category_code)?;
        }

        let body = data_body(CategoryLearnRequest {
            customer_id,
            transactions,
        })?;
        self.data(ApiRequest::new(Method::POST, "categories/learn").body(body))
            .await
    }

    #[instrument(name = "Fetching currencies", skip_all)]
    async fn list_currencies(&self) -> Result<Vec<Currency>> {
        self.data(ApiRequest::get("currencies")).await
    }

    #[instrument(name = "Fetching assets", skip_all)]
    async fn list_assets(&self) -> Result<Vec<Asset>> {
        self.data(ApiRequest::get("assets")).await
    }

    #[instrument(name = "Fetching rates", skip_all, fields(date = ?date))]
    async fn list_rates(&self, date: Option<NaiveDate>) -> Result<Vec<Rate>> {
        let mut params = QueryParams::new();
        params.push_date("date", date);

        self.data(ApiRequest::get("rates").query(params)).await
    }

    #[instrument(name = "Fetching merchants", skip_all, fields(count = merchant_ids.len()))]
    async fn list_merchants(&self, merchant_ids: &[String]) -> Result<Vec<Merchant>> {
        require_all("merchant_ids", merchant_ids)?;
        let body = data_body(merchant_ids)?;
        self.data(ApiRequest::new(Method::POST, "merchants").body(body))
            .await
    }

    #[instrument(name = "Fetching merchant", skip_all, fields(merchant_id = %merchant_id))]
    async fn show_merchant(&self, merchant_id: &str) -> Result<Merchant> {
        require_segment("merchant_id", merchant_id)?;
        self.data(ApiRequest::get(format!("merchants/{}", segment(merchant_id))))
            .await
    }
}


#[cfg(test)]
mod tests {
    use super::mocks::{MockTransport, client};
    use super::*;
    use crate::models::connection::test_helpers::connection_json;
    use crate::models::consent::test_helpers::consent_json;
    use crate::models::provider::test_helpers::provider_json;
    use crate::models::transaction::test_helpers::transaction_json;
    use crate::models::{ConsentRequest, CountryCode, ProviderMode};
    use crate::saltedge::collect_all;
    use reqwest::StatusCode;
    use serde_json::json;

    fn page_json(items: &[String], next_id: Option<&str>) -> String {
        let next_id = next_id.map_or("null".to_string(), |id| format!("\"{}\"", id));
        format!(
            r#"{{ "data": [{}], "meta": {{ "next_id": {}, "next_page": null }} }}"#,
            items.join(","),
            next_id
        )
    }

    #[tokio::test]
    async fn test_connections_two_pages() {
        let transport = MockTransport::default()
            .ok(page_json(
                &[connection_json("conn_1"), connection_json("conn_2")],
                Some("conn_3"),
            ))
            .ok(page_json(
                &[connection_json("conn_3"), connection_json("conn_4")],
                None,
            ));
        let client = client(&transport);

        let connections = collect_all(|from_id| {
            let client = &client;
            async move { client.list_connections("cust_1", from_id.as_deref()).await }
        })
        .await
        .unwrap();

        let ids: Vec<_> = connections.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["conn_1", "conn_2", "conn_3", "conn_4"]);

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].path, "connections");
        assert_eq!(requests[0].query_value("customer_id"), Some("cust_1"));
        assert_eq!(requests[0].query_value("from_id"), None);
        assert_eq!(requests[1].query_value("from_id"), Some("conn_3"));
    }

    #[tokio::test]
    async fn test_empty_provider_code_rejected_before_request() {
        let transport = MockTransport::default();
        let client = client(&transport);

        let result = client.show_provider("").await;

        assert!(matches!(result, Err(SaltEdgeError::InvalidArgument(_))));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_show_provider() {
        let transport = MockTransport::default().ok(format!(
            r#"{{ "data": {} }}"#,
            provider_json("fakebank_simple_xf")
        ));
        let client = client(&transport);

        let provider = client.show_provider("fakebank_simple_xf").await.unwrap();

        assert_eq!(provider.code, "fakebank_simple_xf");
        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].path, "providers/fakebank_simple_xf");
        assert!(requests[0].query.is_empty());
    }

    #[tokio::test]
    async fn test_list_providers_omits_unset_filters() {
        let transport = MockTransport::default().ok(page_json(&[], None));
        let client = client(&transport);

        client
            .list_providers(&ProvidersQuery::default())
            .await
            .unwrap();

        assert!(transport.requests()[0].query.is_empty());
    }

    #[tokio::test]
    async fn test_list_providers_sends_filters() {
        let transport = MockTransport::default().ok(page_json(&[provider_json("fake")], None));
        let client = client(&transport);

        let query = ProvidersQuery {
            from_date: NaiveDate::from_ymd_opt(2024, 2, 9),
            country_code: Some(CountryCode::new("XF").unwrap()),
            mode: Some(ProviderMode::Oauth),
            include_fake_providers: true,
            ..Default::default()
        };
        let page = client.list_providers(&query).await.unwrap();

        assert_eq!(page.data.len(), 1);
        let request = &transport.requests()[0];
        assert_eq!(request.query_value("from_date"), Some("2024-02-09"));
        assert_eq!(request.query_value("country_code"), Some("XF"));
        assert_eq!(request.query_value("mode"), Some("oauth"));
        assert_eq!(request.query_value("include_fake_providers"), Some("true"));
        assert_eq!(request.query_value("include_provider_fields"), None);
        assert_eq!(request.query_value("from_id"), None);
    }

    #[tokio::test]
    async fn test_list_transactions_from_cursor() {
        let transport =
            MockTransport::default().ok(page_json(&[transaction_json("tx_3", "9.99")], None));
        let client = client(&transport);

        let query = TransactionsQuery::for_connection("conn_1").from_id(Some("tx_3".to_string()));
        let page = client.list_transactions(&query).await.unwrap();

        assert!(page.is_last());
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "transactions");
        assert_eq!(
            request.query,
            vec![
                ("connection_id".to_string(), "conn_1".to_string()),
                ("from_id".to_string(), "tx_3".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_rates_without_date_sends_no_date() {
        let transport = MockTransport::default()
            .ok(r#"{ "data": [{"currency_code": "EUR", "rate": 0.9}] }"#)
            .ok(r#"{ "data": [] }"#);
        let client = client(&transport);

        let rates = client.list_rates(None).await.unwrap();
        client
            .list_rates(NaiveDate::from_ymd_opt(2023, 12, 31))
            .await
            .unwrap();

        assert_eq!(rates.len(), 1);
        let requests = transport.requests();
        assert_eq!(requests[0].query_value("date"), None);
        assert_eq!(requests[1].query_value("date"), Some("2023-12-31"));
    }

    #[tokio::test]
    async fn test_duplicate_then_unduplicate() {
        let transport = MockTransport::default()
            .ok(r#"{ "data": { "duplicated": true } }"#)
            .ok(r#"{ "data": { "unduplicated": true } }"#)
            .ok(page_json(&[], None));
        let client = client(&transport);
        let ids = vec!["tx_1".to_string(), "tx_2".to_string()];

        let duplicated = client.duplicate_transactions("cust_1", &ids).await.unwrap();
        let unduplicated = client
            .unduplicate_transactions("cust_1", &ids)
            .await
            .unwrap();
        let still_duplicated = client
            .list_duplicated_transactions(&TransactionsQuery::for_connection("conn_1"))
            .await
            .unwrap();

        assert!(duplicated.duplicated);
        assert!(unduplicated.unduplicated);
        assert!(still_duplicated.data.is_empty());

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::PUT);
        assert_eq!(requests[0].path, "transactions/duplicate");
        assert_eq!(
            requests[0].body,
            Some(json!({ "data": { "customer_id": "cust_1", "transaction_ids": ["tx_1", "tx_2"] } }))
        );
        assert_eq!(requests[1].path, "transactions/unduplicate");
        assert_eq!(requests[1].body, requests[0].body);
        assert_eq!(requests[2].path, "transactions/duplicates");
    }

    #[tokio::test]
    async fn test_duplicate_requires_ids() {
        let transport = MockTransport::default();
        let client = client(&transport);

        let no_ids = client.duplicate_transactions("cust_1", &[]).await;
        let no_customer = client
            .duplicate_transactions("", &["tx_1".to_string()])
            .await;

        assert!(matches!(no_ids, Err(SaltEdgeError::InvalidArgument(_))));
        assert!(matches!(
            no_customer,
            Err(SaltEdgeError::InvalidArgument(_))
        ));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_accounts_connection_scope_omits_customer() {
        let transport = MockTransport::default().ok(page_json(&[], None));
        let client = client(&transport);

        client
            .list_accounts(Scope::Connection("conn_1"), Some("acc_9"))
            .await
            .unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.path, "accounts");
        assert_eq!(request.query_value("connection_id"), Some("conn_1"));
        assert_eq!(request.query_value("customer_id"), None);
        assert_eq!(request.query_value("from_id"), Some("acc_9"));
    }

    #[tokio::test]
    async fn test_consents_customer_scope() {
        let transport = MockTransport::default().ok(page_json(
            &[consent_json("cons_1", false), consent_json("cons_2", true)],
            None,
        ));
        let client = client(&transport);

        let page = client
            .list_consents(Scope::Customer("cust_1"), None)
            .await
            .unwrap();

        assert_eq!(page.data.len(), 2);
        assert!(page.data[1].is_revoked());
        let request = &transport.requests()[0];
        assert_eq!(request.query_value("customer_id"), Some("cust_1"));
        assert_eq!(request.query_value("connection_id"), None);
    }

    #[tokio::test]
    async fn test_revoke_consent() {
        let transport =
            MockTransport::default().ok(format!(r#"{{ "data": {} }}"#, consent_json("cons_1", true)));
        let client = client(&transport);

        let consent = client
            .revoke_consent("cons_1", Scope::Connection("conn_1"))
            .await
            .unwrap();

        assert!(consent.is_revoked());
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "consents/cons_1/revoke");
        assert_eq!(request.query_value("connection_id"), Some("conn_1"));
    }

    #[tokio::test]
    async fn test_pending_transactions_query() {
        let transport = MockTransport::default().ok(page_json(
            &[transaction_json("tx_1", "-1.50")],
            Some("tx_2"),
        ));
        let client = client(&transport);

        let query = TransactionsQuery::for_connection("conn_1").account("acc_1");
        let page = client.list_pending_transactions(&query).await.unwrap();

        assert_eq!(page.next_cursor(), Some("tx_2"));
        let request = &transport.requests()[0];
        assert_eq!(request.path, "transactions/pending");
        assert_eq!(request.query_value("connection_id"), Some("conn_1"));
        assert_eq!(request.query_value("account_id"), Some("acc_1"));
        assert_eq!(request.query_value("from_id"), None);
    }

    #[tokio::test]
    async fn test_remove_transactions_body() {
        let transport = MockTransport::default().ok(r#"{ "data": { "cleanup_started": true } }"#);
        let client = client(&transport);

        let removed = client
            .remove_transactions("cust_1", "acc_1", 30)
            .await
            .unwrap();

        assert!(removed.cleanup_started);
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(
            request.body,
            Some(json!({ "data": { "customer_id": "cust_1", "account_id": "acc_1", "keep_days": 30 } }))
        );
    }

    #[tokio::test]
    async fn test_remote_error() {
        let transport = MockTransport::default().respond(
            StatusCode::NOT_FOUND,
            r#"{
                "error": {
                    "class": "ProviderNotFound",
                    "message": "Provider with code: 'nope' was not found.",
                    "documentation_url": "https://docs.saltedge.com/account_information/v5/#errors-provider_not_found"
                },
                "request": { "code": "nope" }
            }"#,
        );
        let client = client(&transport);

        let err = client.show_provider("nope").await.unwrap_err();

        match err {
            SaltEdgeError::RemoteApi {
                status,
                class,
                message,
            } => {
                assert_eq!(status, StatusCode::NOT_FOUND);
                assert_eq!(class, "ProviderNotFound");
                assert_eq!(message, "Provider with code: 'nope' was not found.");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_remote_error_without_json_body() {
        let transport = MockTransport::default()
            .respond(StatusCode::BAD_GATEWAY, "")
            .respond(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        let client = client(&transport);

        let empty = client.list_countries().await.unwrap_err();
        let html = client.list_countries().await.unwrap_err();

        assert_eq!(empty.remote_class(), Some("Unknown"));
        assert!(empty.to_string().contains("Bad Gateway"));
        assert!(html.to_string().contains("<html>oops</html>"));
    }

    #[tokio::test]
    async fn test_unexpected_body_is_serialization_error() {
        let transport = MockTransport::default().ok(r#"{ "data": { "unexpected": true } }"#);
        let client = client(&transport);

        let result = client.list_countries().await;

        assert!(matches!(result, Err(SaltEdgeError::Serialization(_))));
    }

    #[tokio::test]
    async fn test_countries_special_codes() {
        let transport = MockTransport::default().ok(
            r#"{ "data": [
                {"code": "GB", "name": "United Kingdom"},
                {"code": "XF", "name": "Fake"},
                {"code": "XO", "name": "Other"}
            ] }"#,
        );
        let client = client(&transport);

        let countries = client.list_countries().await.unwrap();

        let iso: Vec<_> = countries
            .iter()
            .filter(|c| c.code.is_iso())
            .map(|c| c.code.as_str())
            .collect();
        assert_eq!(iso, vec!["GB"]);
        assert!(countries.iter().all(|c| c.code.as_str().len() == 2));
    }

    #[tokio::test]
    async fn test_create_customer_body() {
        let transport = MockTransport::default().ok(
            r#"{ "data": {
                "id": "222222222222222222",
                "identifier": "12rv1212f1efxchsdhbgv",
                "secret": "AtQX6Q8vRyMrPjUVtW7J_O1n06qYQ25bvUJ8CIC80-8",
                "blocked_at": null,
                "created_at": "2024-01-01T10:00:00Z",
                "updated_at": "2024-01-01T10:00:00Z"
            } }"#,
        );
        let client = client(&transport);

        let customer = client
            .create_customer("12rv1212f1efxchsdhbgv")
            .await
            .unwrap();

        assert_eq!(customer.id, "222222222222222222");
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.body,
            Some(json!({ "data": { "identifier": "12rv1212f1efxchsdhbgv" } }))
        );
    }

    #[tokio::test]
    async fn test_lock_and_remove_customer() {
        let transport = MockTransport::default()
            .ok(r#"{ "data": { "locked": true, "id": "cust_1" } }"#)
            .ok(r#"{ "data": { "deleted": true, "id": "cust_1" } }"#);
        let client = client(&transport);

        assert!(client.lock_customer("cust_1").await.unwrap().locked);
        assert!(client.remove_customer("cust_1").await.unwrap().deleted);

        let requests = transport.requests();
        assert_eq!(
            (requests[0].method.clone(), requests[0].path.as_str()),
            (Method::PUT, "customers/cust_1/lock")
        );
        assert_eq!(
            (requests[1].method.clone(), requests[1].path.as_str()),
            (Method::DELETE, "customers/cust_1")
        );
    }

    #[tokio::test]
    async fn test_create_session() {
        let transport = MockTransport::default().ok(
            r#"{ "data": {
                "expires_at": "2024-01-01T11:00:00Z",
                "connect_url": "https://www.saltedge.com/connect?token=GENERATED_TOKEN"
            } }"#,
        );
        let client = client(&transport);

        let session = CreateSession {
            customer_id: "cust_1".to_string(),
            ..Default::default()
        };
        let response = client.create_session(&session).await.unwrap();

        assert!(response.connect_url.contains("GENERATED_TOKEN"));
        let request = &transport.requests()[0];
        assert_eq!(request.path, "connect_sessions/create");
        assert_eq!(request.body.as_ref().unwrap()["data"]["customer_id"], "cust_1");
    }

    #[tokio::test]
    async fn test_refresh_session_requires_connection() {
        let transport = MockTransport::default();
        let client = client(&transport);

        let result = client.refresh_session(&RefreshSession::default()).await;

        assert!(matches!(result, Err(SaltEdgeError::InvalidArgument(_))));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_reconnect_session_sends_consent() {
        let transport = MockTransport::default().ok(
            r#"{ "data": {
                "expires_at": "2024-01-01T11:00:00Z",
                "connect_url": "https://www.saltedge.com/connect?token=RECONNECT"
            } }"#,
        );
        let client = client(&transport);

        let session = ReconnectSession {
            connection_id: "conn_1".to_string(),
            consent: ConsentRequest {
                scopes: vec!["account_details".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        client.reconnect_session(&session).await.unwrap();

        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::POST);
        assert_eq!(request.path, "connect_sessions/reconnect");
        assert_eq!(
            request.body.as_ref().unwrap(),
            &json!({ "data": {
                "connection_id": "conn_1",
                "consent": { "scopes": ["account_details"] }
            } })
        );
    }

    #[tokio::test]
    async fn test_create_oauth_provider() {
        let transport = MockTransport::default().ok(
            r#"{ "data": {
                "token": "GENERATED_TOKEN",
                "expires_at": "2024-01-01T11:00:00Z",
                "redirect_url": "https://bank.example/authorize?token=GENERATED_TOKEN"
            } }"#,
        );
        let client = client(&transport);

        let request = CreateOAuthProvider {
            customer_id: "cust_1".to_string(),
            country_code: CountryCode::new("XF").unwrap(),
            provider_code: "fake_oauth_client_xf".to_string(),
            consent: ConsentRequest {
                scopes: vec!["account_details".to_string()],
                ..Default::default()
            },
            attempt: None,
            daily_refresh: None,
            return_connection_id: None,
        };
        let response = client.create_oauth_provider(&request).await.unwrap();

        assert_eq!(response.connection_id, None);
        assert_eq!(response.token, "GENERATED_TOKEN");
        let sent = &transport.requests()[0];
        assert_eq!(sent.path, "oauth_providers/create");
        assert_eq!(sent.body.as_ref().unwrap()["data"]["country_code"], "XF");
    }

    #[tokio::test]
    async fn test_authorize_oauth_provider() {
        let transport = MockTransport::default().ok(
            r#"{ "data": {
                "connection_id": "conn_1",
                "attempt_id": "att_1",
                "token": "GENERATED_TOKEN"
            } }"#,
        );
        let client = client(&transport);

        let request = AuthorizeOAuthProvider {
            connection_id: "conn_1".to_string(),
            query_string: "code=abc&state=xyz".to_string(),
        };
        let response = client.authorize_oauth_provider(&request).await.unwrap();

        assert_eq!(response.attempt_id, "att_1");
        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::PUT);
        assert_eq!(sent.path, "oauth_providers/authorize");
    }

    #[tokio::test]
    async fn test_authorize_oauth_provider_requires_query_string() {
        let transport = MockTransport::default();
        let client = client(&transport);

        let request = AuthorizeOAuthProvider {
            connection_id: "conn_1".to_string(),
            query_string: String::new(),
        };
        let result = client.authorize_oauth_provider(&request).await;

        assert!(matches!(result, Err(SaltEdgeError::InvalidArgument(_))));
        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_show_attempt() {
        let transport = MockTransport::default().ok(
            r#"{ "data": {
                "id": "att_1",
                "finished": true,
                "success_at": "2024-01-01T10:01:00Z",
                "created_at": "2024-01-01T10:00:00Z",
                "updated_at": "2024-01-01T10:01:00Z"
            } }"#,
        );
        let client = client(&transport);

        let attempt = client.show_attempt("conn_1", "att_1").await.unwrap();

        assert!(!attempt.failed());
        let request = &transport.requests()[0];
        assert_eq!(request.path, "attempts/att_1");
        assert_eq!(request.query_value("connection_id"), Some("conn_1"));
    }

    #[tokio::test]
    async fn test_categories_keep_order() {
        let transport = MockTransport::default().ok(
            r#"{ "data": { "personal": ["transfer", "bills"], "business": ["equipment"] } }"#,
        );
        let client = client(&transport);

        let tree = client.list_categories().await.unwrap();

        assert_eq!(tree.parents().collect::<Vec<_>>(), vec!["personal", "business"]);
    }

    #[tokio::test]
    async fn test_learn_categories() {
        let transport = MockTransport::default().ok(r#"{ "data": { "learned": true } }"#);
        let client = client(&transport);

        let learn = vec![CategoryLearn {
            id: "tx_1".to_string(),
            category_code: "car_rental".to_string(),
            immediate: Some(true),
        }];
        let response = client.learn_categories("cust_1", &learn).await.unwrap();

        assert!(response.learned);
        assert_eq!(transport.requests()[0].path, "categories/learn");
    }

    #[tokio::test]
    async fn test_list_merchants_body() {
        let transport = MockTransport::default().ok(
            r#"{ "data": [{ "id": "m_1", "names": [{"mode": "name", "value": "Shop"}] }] }"#,
        );
        let client = client(&transport);

        let merchants = client
            .list_merchants(&["m_1".to_string()])
            .await
            .unwrap();

        assert_eq!(merchants[0].name(), Some("Shop"));
        assert_eq!(transport.requests()[0].body, Some(json!({ "data": ["m_1"] })));
    }

    #[tokio::test]
    async fn test_ids_are_path_encoded() {
        let transport = MockTransport::default().ok(format!(
            r#"{{ "data": {} }}"#,
            connection_json("a/b")
        ));
        let client = client(&transport);

        client.show_connection("a/b").await.unwrap();

        assert_eq!(transport.requests()[0].path, "connections/a%2Fb");
    }

    #[tokio::test]
    async fn test_ids_encode_spaces_for_paths() {
        let transport = MockTransport::default().ok(format!(
            r#"{{ "data": {} }}"#,
            customer_json("a b")
        ));
        let client = client(&transport);

        client.show_customer("a b").await.unwrap();

        assert_eq!(transport.requests()[0].path, "customers/a%20b");
    }

    #[tokio::test]
    async fn test_dot_segment_ids_rejected_before_request() {
        let transport = MockTransport::default();
        let client = client(&transport);

        let removed = client.remove_customer("..").await;
        let connection = client.show_connection(".").await;
        let consent = client
            .revoke_consent("%2e%2e", Scope::Customer("cust_1"))
            .await;

        assert!(matches!(removed, Err(SaltEdgeError::InvalidArgument(_))));
        assert!(matches!(connection, Err(SaltEdgeError::InvalidArgument(_))));
        assert!(matches!(consent, Err(SaltEdgeError::InvalidArgument(_))));
        assert!(transport.requests().is_empty());
    }

    fn customer_json(id: &str) -> String {
        format!(
            r#"{{
                "id": "{id}",
                "identifier": "user@example.com",
                "created_at": "2024-01-01T10:00:00Z",
                "updated_at": "2024-01-01T10:00:00Z"
            }}"#
        )
    }

    #[tokio::test]
    async fn test_show_customer() {
        let transport = MockTransport::default().ok(format!(
            r#"{{ "data": {} }}"#,
            customer_json("cust_1")
        ));
        let client = client(&transport);

        let customer = client.show_customer("cust_1").await.unwrap();

        assert_eq!(customer.identifier, "user@example.com");
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "customers/cust_1");
        assert!(request.query.is_empty());
    }

    #[tokio::test]
    async fn test_list_customers_sends_only_given_cursors() {
        let page = page_json(&[customer_json("cust_1")], None);
        let transport = MockTransport::default().ok(page.clone()).ok(page);
        let client = client(&transport);

        client.list_customers(None, None).await.unwrap();
        client.list_customers(Some("cust_5"), Some("")).await.unwrap();

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].path, "customers");
        assert!(requests[0].query.is_empty());
        assert_eq!(
            requests[1].query,
            vec![("from_id".to_string(), "cust_5".to_string())]
        );
    }

    #[tokio::test]
    async fn test_unlock_customer() {
        let transport =
            MockTransport::default().ok(r#"{ "data": { "unlocked": true, "id": "cust_1" } }"#);
        let client = client(&transport);

        let unlocked = client.unlock_customer("cust_1").await.unwrap();

        assert!(unlocked.unlocked);
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::PUT);
        assert_eq!(request.path, "customers/cust_1/unlock");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_reconnect_oauth_provider() {
        let transport = MockTransport::default().ok(
            r#"{ "data": {
                "connection_id": "conn_1",
                "token": "GENERATED_TOKEN",
                "expires_at": "2024-01-01T11:00:00Z",
                "redirect_url": "https://bank.example/authorize?token=GENERATED_TOKEN"
            } }"#,
        );
        let client = client(&transport);

        let request = ReconnectOAuthProvider {
            connection_id: "conn_1".to_string(),
            consent: ConsentRequest {
                scopes: vec!["transactions_details".to_string()],
                ..Default::default()
            },
            ..Default::default()
        };
        let response = client.reconnect_oauth_provider(&request).await.unwrap();

        assert_eq!(response.connection_id.as_deref(), Some("conn_1"));
        let sent = &transport.requests()[0];
        assert_eq!(sent.method, Method::POST);
        assert_eq!(sent.path, "oauth_providers/reconnect");
        assert_eq!(
            sent.body.as_ref().unwrap(),
            &json!({ "data": {
                "connection_id": "conn_1",
                "consent": { "scopes": ["transactions_details"] }
            } })
        );
    }

    #[tokio::test]
    async fn test_remove_connection() {
        let transport =
            MockTransport::default().ok(r#"{ "data": { "removed": true, "id": "conn_1" } }"#);
        let client = client(&transport);

        let removed = client.remove_connection("conn_1").await.unwrap();

        assert!(removed.removed);
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::DELETE);
        assert_eq!(request.path, "connections/conn_1");
    }

    #[tokio::test]
    async fn test_show_holder_info() {
        let transport = MockTransport::default().ok(
            r#"{ "data": {
                "names": ["John Doe"],
                "emails": ["john.doe@example.com"],
                "phone_numbers": ["+16135550175"],
                "addresses": [{ "city": "Ottawa", "country_code": "CA" }]
            } }"#,
        );
        let client = client(&transport);

        let holder = client.show_holder_info("conn_1").await.unwrap();

        assert_eq!(holder.names, vec!["John Doe"]);
        assert_eq!(holder.addresses[0].city.as_deref(), Some("Ottawa"));
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "holder_info");
        assert_eq!(request.query_value("connection_id"), Some("conn_1"));
    }

    #[tokio::test]
    async fn test_list_attempts() {
        let attempt = r#"{
            "id": "att_1",
            "fail_at": "2024-01-01T10:01:00Z",
            "fail_error_class": "InvalidCredentials",
            "created_at": "2024-01-01T10:00:00Z",
            "updated_at": "2024-01-01T10:01:00Z"
        }"#;
        let transport =
            MockTransport::default().ok(page_json(&[attempt.to_string()], None));
        let client = client(&transport);

        let page = client.list_attempts("conn_1").await.unwrap();

        assert!(page.data[0].failed());
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "attempts");
        assert_eq!(
            request.query,
            vec![("connection_id".to_string(), "conn_1".to_string())]
        );
    }

    #[tokio::test]
    async fn test_show_consent() {
        let transport = MockTransport::default().ok(format!(
            r#"{{ "data": {} }}"#,
            consent_json("cons_1", false)
        ));
        let client = client(&transport);

        let consent = client
            .show_consent("cons_1", Scope::Connection("conn_1"))
            .await
            .unwrap();

        assert!(!consent.is_revoked());
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "consents/cons_1");
        assert_eq!(request.query_value("connection_id"), Some("conn_1"));
        assert_eq!(request.query_value("customer_id"), None);
    }

    #[tokio::test]
    async fn test_list_currencies_and_assets() {
        let transport = MockTransport::default()
            .ok(r#"{ "data": [{ "code": "EUR", "name": "Euro" }] }"#)
            .ok(r#"{ "data": [{ "code": "BTC", "name": "Bitcoin" }] }"#);
        let client = client(&transport);

        let currencies = client.list_currencies().await.unwrap();
        let assets = client.list_assets().await.unwrap();

        assert_eq!(currencies[0].code, "EUR");
        assert_eq!(assets[0].name, "Bitcoin");
        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::GET);
        assert_eq!(requests[0].path, "currencies");
        assert_eq!(requests[1].path, "assets");
        assert!(requests.iter().all(|r| r.query.is_empty() && r.body.is_none()));
    }

    #[tokio::test]
    async fn test_show_merchant() {
        let transport = MockTransport::default().ok(
            r#"{ "data": {
                "id": "merch_1",
                "names": [{ "mode": "name", "value": "Coffee Shop" }]
            } }"#,
        );
        let client = client(&transport);

        let merchant = client.show_merchant("merch_1").await.unwrap();

        assert_eq!(merchant.name(), Some("Coffee Shop"));
        let request = &transport.requests()[0];
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.path, "merchants/merch_1");
        assert!(request.body.is_none());
    }
}
