//! The wallet name entity and its CRUD operations.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use crate::client::PartnerClient;
use crate::error::ClientError;
use crate::types::{WalletNameListResponse, WalletNameRecord};

/// A wallet name: a human-memorable alias bound to one or more
/// cryptocurrency addresses under a partner-managed domain.
///
/// Entities hold no client reference; pass the [`PartnerClient`] to
/// [`save`](WalletName::save) and [`delete`](WalletName::delete).
#[derive(Debug, Clone, Default)]
pub struct WalletName {
    /// Server-assigned identifier; `None` until the name is saved.
    pub id: Option<String>,
    /// Domain the name lives under.
    pub domain_name: String,
    /// The name portion of the wallet name.
    pub name: String,
    /// Partner-supplied external identifier.
    pub external_id: Option<String>,
    /// Currency short code to wallet address.
    wallets: BTreeMap<String, String>,
}

impl WalletName {
    /// Create a new unsaved wallet name.
    pub fn new(domain_name: &str, name: &str, external_id: Option<&str>) -> Self {
        WalletName {
            id: None,
            domain_name: domain_name.to_string(),
            name: name.to_string(),
            external_id: external_id.map(str::to_string),
            wallets: BTreeMap::new(),
        }
    }

    /// Build an entity from a wire record.
    pub(crate) fn from_record(record: WalletNameRecord) -> Self {
        let mut wallet_name = WalletName {
            id: Some(record.id),
            domain_name: record.domain_name,
            name: record.name,
            external_id: record.external_id,
            wallets: BTreeMap::new(),
        };
        for wallet in record.wallets {
            wallet_name.set_currency_address(&wallet.currency, &wallet.wallet_address);
        }
        wallet_name
    }

    /// Currencies that currently have an address bound.
    pub fn used_currencies(&self) -> Vec<&str> {
        self.wallets.keys().map(String::as_str).collect()
    }

    /// The address bound to a currency, if any.
    pub fn wallet_address(&self, currency: &str) -> Option<&str> {
        self.wallets.get(currency).map(String::as_str)
    }

    /// Bind or replace the address for a currency.
    pub fn set_currency_address(&mut self, currency: &str, wallet_address: &str) {
        self.wallets
            .insert(currency.to_string(), wallet_address.to_string());
    }

    /// Remove the address bound to a currency, if present.
    pub fn remove_currency_address(&mut self, currency: &str) {
        self.wallets.remove(currency);
    }

    /// Persist the wallet name: PUT when it already has an id, POST
    /// otherwise. On create, the server-assigned id of the record
    /// matching this domain and name is captured.
    pub async fn save(&mut self, client: &PartnerClient) -> Result<(), ClientError> {
        client.ensure_wallet_name_access()?;

        let wallet_data: Vec<Value> = self
            .wallets
            .iter()
            .map(|(currency, wallet_address)| {
                json!({
                    "currency": currency,
                    "wallet_address": wallet_address,
                })
            })
            .collect();

        let mut record = json!({
            "domain_name": self.domain_name,
            "name": self.name,
            "wallets": wallet_data,
        });
        if let Some(obj) = record.as_object_mut() {
            if let Some(external_id) = &self.external_id {
                obj.insert("external_id".to_string(), Value::String(external_id.clone()));
            }
            if let Some(id) = &self.id {
                obj.insert("id".to_string(), Value::String(id.clone()));
            }
        }
        let body = json!({ "wallet_names": [record] });

        if self.id.is_some() {
            client
                .api_request("PUT", "/v1/partner/walletname", Some(&body))
                .await?;
            return Ok(());
        }

        let response = client
            .api_request("POST", "/v1/partner/walletname", Some(&body))
            .await?;
        let parsed: WalletNameListResponse = serde_json::from_value(response)?;
        for record in parsed.wallet_names {
            if record.domain_name == self.domain_name && record.name == self.name {
                self.id = Some(record.id);
            }
        }
        Ok(())
    }

    /// Delete the wallet name remotely. Fails if the name was never
    /// saved (it has no server-assigned id).
    pub async fn delete(&self, client: &PartnerClient) -> Result<(), ClientError> {
        client.ensure_wallet_name_access()?;

        let Some(id) = &self.id else {
            return Err(ClientError::InvalidState(
                "unable to delete a wallet name that does not exist remotely".to_string(),
            ));
        };

        let body = json!({
            "wallet_names": [
                {
                    "domain_name": self.domain_name,
                    "id": id,
                }
            ]
        });
        client
            .api_request("DELETE", "/v1/partner/walletname", Some(&body))
            .await?;
        Ok(())
    }
}
