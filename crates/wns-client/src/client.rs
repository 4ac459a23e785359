//! The partner API client.

use serde_json::Value;

use crate::certificate::{Certificate, CustomerData};
use crate::config::{AuthScheme, ClientConfig};
use crate::error::ClientError;
use crate::request::process_request;
use crate::types::{
    BalanceResponse, CaCertResponse, Product, ProductsResponse, WalletNameListResponse,
    WalletNameLookup,
};
use crate::wallet_name::WalletName;

/// Async client for the WNS partner API.
///
/// The auth scheme is resolved once at construction and immutable
/// afterwards, so a client can be cloned and shared across concurrent
/// calls freely. Each call is independent: no retries, no shared
/// per-call state.
#[derive(Debug, Clone)]
pub struct PartnerClient {
    /// Resolved authentication scheme.
    auth: AuthScheme,
    /// Base URL for authenticated partner API calls.
    api_url: String,
    /// Base URL for public wallet name lookups.
    lookup_url: String,
    /// Underlying HTTP client.
    http: reqwest::Client,
}

impl PartnerClient {
    /// Create a new client, resolving the auth scheme from the config.
    ///
    /// Fails with [`ClientError::Configuration`] when no valid
    /// credential combination is present.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let auth = AuthScheme::resolve(&config)?;
        Ok(PartnerClient {
            auth,
            api_url: config.api_url,
            lookup_url: config.lookup_url,
            http: reqwest::Client::new(),
        })
    }

    /// The resolved auth scheme.
    pub fn auth_scheme(&self) -> &AuthScheme {
        &self.auth
    }

    /// Perform one authenticated call against the partner API.
    ///
    /// `method` must be one of GET/PUT/POST/DELETE; anything else fails
    /// before any network I/O. The parsed JSON payload is returned on
    /// success; failures are classified per [`ClientError`].
    pub async fn api_request(
        &self,
        method: &str,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Value, ClientError> {
        let url = format!("{}{}", self.api_url, path);
        process_request(&self.http, Some(&self.auth), &url, method, body).await
    }

    /// Resolve a wallet name to an address via the public lookup API.
    ///
    /// This call is unauthenticated: no auth headers are sent.
    pub async fn lookup_wallet_name(
        &self,
        wallet_name: &str,
        currency: &str,
    ) -> Result<WalletNameLookup, ClientError> {
        let url = format!("{}{}/{}", self.lookup_url, wallet_name, currency);
        let response = process_request(&self.http, None, &url, "GET", None).await?;
        Ok(serde_json::from_value(response)?)
    }

    /// Fetch wallet names, optionally filtered by domain and/or
    /// external id (sent as URL-encoded query parameters).
    pub async fn get_wallet_names(
        &self,
        domain_name: Option<&str>,
        external_id: Option<&str>,
    ) -> Result<Vec<WalletName>, ClientError> {
        self.ensure_wallet_name_access()?;

        let mut args = Vec::new();
        if let Some(domain_name) = domain_name {
            args.push(format!("domain_name={}", urlencoding::encode(domain_name)));
        }
        if let Some(external_id) = external_id {
            args.push(format!("external_id={}", urlencoding::encode(external_id)));
        }

        let mut path = "/v1/partner/walletname".to_string();
        if !args.is_empty() {
            path = format!("{}?{}", path, args.join("&"));
        }

        let response = self.api_request("GET", &path, None).await?;
        let parsed: WalletNameListResponse = serde_json::from_value(response)?;
        if parsed.wallet_name_count == 0 {
            return Ok(Vec::new());
        }
        Ok(parsed
            .wallet_names
            .into_iter()
            .map(WalletName::from_record)
            .collect())
    }

    /// Create a new unsaved wallet name with one currency bound.
    pub fn create_wallet_name(
        &self,
        domain_name: &str,
        name: &str,
        currency: &str,
        wallet_address: &str,
        external_id: Option<&str>,
    ) -> WalletName {
        let mut wallet_name = WalletName::new(domain_name, name, external_id);
        wallet_name.set_currency_address(currency, wallet_address);
        wallet_name
    }

    /// Create a new certificate order for the given customer data.
    pub fn create_certificate(&self, customer_data: CustomerData) -> Certificate {
        Certificate::new(customer_data)
    }

    /// Fetch an existing certificate order by id, including its current
    /// status.
    pub async fn get_certificate(&self, id: &str) -> Result<Certificate, ClientError> {
        if id.is_empty() {
            return Err(ClientError::InvalidState(
                "certificate id is required".to_string(),
            ));
        }
        let mut certificate = Certificate::new(CustomerData::default());
        certificate.id = Some(id.to_string());
        certificate.get_status(self).await?;
        Ok(certificate)
    }

    /// List the certificate products available to this partner.
    pub async fn get_available_products(&self) -> Result<Vec<Product>, ClientError> {
        let response = self.api_request("GET", "/v1/certificate/products", None).await?;
        let parsed: ProductsResponse = serde_json::from_value(response)?;
        Ok(parsed.products)
    }

    /// Fetch the CA certificate bundle.
    pub async fn get_ca_cert_bundle(&self) -> Result<Vec<String>, ClientError> {
        let response = self.api_request("GET", "/v1/certificate/cacert", None).await?;
        let parsed: CaCertResponse = serde_json::from_value(response)?;
        Ok(parsed.cacerts)
    }

    /// Fetch the available account balance.
    pub async fn get_account_balance(&self) -> Result<f64, ClientError> {
        let response = self.api_request("GET", "/v1/certificate/balance", None).await?;
        let parsed: BalanceResponse = serde_json::from_value(response)?;
        Ok(parsed.available_balance)
    }

    /// Wallet name CRUD is not available to partner-signed clients.
    pub(crate) fn ensure_wallet_name_access(&self) -> Result<(), ClientError> {
        if matches!(self.auth, AuthScheme::PartnerSigned { .. }) {
            return Err(ClientError::Configuration(
                "wallet name operations require api-key or distributed auth".to_string(),
            ));
        }
        Ok(())
    }
}
