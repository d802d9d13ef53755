pub mod account;
pub mod attempt;
pub mod category;
pub mod connection;
pub mod consent;
pub mod country;
pub mod customer;
pub mod merchant;
pub mod oauth_provider;
pub mod provider;
pub mod reference;
pub mod session;
pub mod transaction;

pub use account::{Account, AccountExtra, TransactionCount};
pub use attempt::{Attempt, Stage};
pub use category::{CategoryGroup, CategoryLearn, CategoryLearnResponse, CategoryTree};
pub use connection::{Connection, ConnectionStatus, HolderInfo, RemovedConnection};
pub use consent::Consent;
pub use country::{Country, CountryCode, InvalidCountryCode};
pub use customer::{Customer, LockedCustomer, RemovedCustomer, UnlockedCustomer};
pub use merchant::Merchant;
pub use oauth_provider::{
    AuthorizeOAuthProvider, AuthorizeOAuthProviderResponse, CreateOAuthProvider,
    OAuthProviderResponse, ReconnectOAuthProvider,
};
pub use provider::{Provider, ProviderKeyOwner, ProviderMode, ProvidersQuery};
pub use reference::{Asset, Currency, Rate};
pub use session::{
    AttemptRequest, ConsentRequest, CreateSession, ReconnectSession, RefreshSession,
    SessionResponse,
};
pub use transaction::{
    DuplicatedResponse, RemovedTransactions, Transaction, TransactionMode, TransactionStatus,
    TransactionsQuery, UnduplicatedResponse, write_csv,
};
