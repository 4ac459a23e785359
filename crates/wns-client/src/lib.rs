#![deny(missing_docs)]

//! # wns-client
//!
//! Async client for the WNS partner API: wallet name CRUD, certificate
//! issuance workflows, public wallet name lookup, and the signed
//! request pipeline underneath them.
//!
//! Authentication is resolved once at construction into one of three
//! schemes (api-key, distributed, partner-signed); the two key-based
//! schemes sign every request over the exact URL and body bytes sent.
//!
//! # Example
//!
//! ```no_run
//! use wns_client::{ClientConfig, PartnerClient};
//!
//! # async fn example() -> Result<(), wns_client::ClientError> {
//! let client = PartnerClient::new(ClientConfig {
//!     partner_id: Some("my-partner-id".to_string()),
//!     api_key: Some("my-api-key".to_string()),
//!     ..Default::default()
//! })?;
//!
//! let mut wallet_name =
//!     client.create_wallet_name("example.com", "alice", "btc", "1btcaddress", None);
//! wallet_name.save(&client).await?;
//! # Ok(())
//! # }
//! ```

pub mod certificate;
pub mod client;
pub mod config;
pub mod error;
pub mod request;
pub mod types;
pub mod wallet_name;


pub use certificate::{Certificate, CustomerData, ORDER_FINALIZED};
pub use client::PartnerClient;
pub use config::{AuthScheme, ClientConfig, DEFAULT_API_URL, DEFAULT_LOOKUP_URL};
pub use error::ClientError;
pub use request::HttpMethod;
pub use types::{
    BalanceResponse, CaCertResponse, CertificateBundle, CertificateOrderResponse,
    CertificateStatusResponse, CertificateTokenResponse, Product, ProductsResponse, WalletData,
    WalletNameListResponse, WalletNameLookup, WalletNameRecord,
};
pub use wallet_name::WalletName;
