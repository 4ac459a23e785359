//! Wire types for partner API responses.

use serde::{Deserialize, Serialize};

/// A single currency/address pair on a wallet name record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletData {
    /// Currency short code (e.g. `btc`).
    #[serde(default)]
    pub currency: String,
    /// Wallet address for the currency.
    #[serde(default)]
    pub wallet_address: String,
}

/// A wallet name record as returned by the partner API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletNameRecord {
    /// Server-assigned record identifier.
    #[serde(default)]
    pub id: String,
    /// Domain the name lives under.
    #[serde(default)]
    pub domain_name: String,
    /// The name portion of the wallet name.
    #[serde(default)]
    pub name: String,
    /// Partner-supplied external identifier.
    #[serde(default)]
    pub external_id: Option<String>,
    /// Currency/address pairs bound to the name.
    #[serde(default)]
    pub wallets: Vec<WalletData>,
}

/// Response to a wallet name listing request.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletNameListResponse {
    /// Total number of matching wallet names.
    #[serde(default)]
    pub wallet_name_count: u64,
    /// The matching records.
    #[serde(default)]
    pub wallet_names: Vec<WalletNameRecord>,
}

/// Result of a public wallet name lookup.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletNameLookup {
    /// The wallet name that was looked up.
    #[serde(default)]
    pub wallet_name: String,
    /// Currency the address is for.
    #[serde(default)]
    pub currency: String,
    /// The resolved wallet address.
    #[serde(default)]
    pub wallet_address: String,
}

/// Response to a certificate customer-data submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CertificateTokenResponse {
    /// Token referencing the submitted customer data.
    #[serde(default)]
    pub token: String,
}

/// Response to a certificate order submission.
#[derive(Debug, Clone, Deserialize)]
pub struct CertificateOrderResponse {
    /// Server-assigned order identifier.
    #[serde(default)]
    pub order_id: String,
}

/// An issued certificate chain.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CertificateBundle {
    /// Root certificate PEM.
    #[serde(default)]
    pub root: Option<String>,
    /// Intermediate certificate PEMs.
    #[serde(default)]
    pub intermediate: Vec<String>,
    /// End-entity certificate PEM.
    #[serde(default)]
    pub certificate: Option<String>,
}

/// Response to a certificate status query.
#[derive(Debug, Clone, Deserialize)]
pub struct CertificateStatusResponse {
    /// Current order status string.
    #[serde(default)]
    pub order_status: String,
    /// Error detail when the order failed.
    #[serde(default)]
    pub order_error: Option<String>,
    /// Issued chain, present once issuance completes.
    #[serde(default)]
    pub certificate_bundle: Option<CertificateBundle>,
}

/// A certificate product offered to the partner.
#[derive(Debug, Clone, Deserialize)]
pub struct Product {
    /// Product identifier.
    #[serde(default)]
    pub id: String,
    /// Human-readable product name.
    #[serde(default)]
    pub name: Option<String>,
    /// Product price.
    #[serde(default)]
    pub price: Option<f64>,
}

/// Response to a product listing request.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsResponse {
    /// Available products.
    #[serde(default)]
    pub products: Vec<Product>,
}

/// Response to a CA certificate bundle request.
#[derive(Debug, Clone, Deserialize)]
pub struct CaCertResponse {
    /// CA certificate PEMs.
    #[serde(default)]
    pub cacerts: Vec<String>,
}

/// Response to an account balance request.
#[derive(Debug, Clone, Deserialize)]
pub struct BalanceResponse {
    /// Available balance on the partner account.
    #[serde(default)]
    pub available_balance: f64,
}
