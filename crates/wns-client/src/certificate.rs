//! The certificate entity and its issuance workflow.
//!
//! The workflow is a sequence of independent calls: submit customer
//! data, submit the order, submit a signed CSR, then poll status until
//! the order finalizes. CSR generation itself is the caller's concern.

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::{json, Value};

use crate::client::PartnerClient;
use crate::error::ClientError;
use crate::types::{
    CertificateBundle, CertificateOrderResponse, CertificateStatusResponse,
    CertificateTokenResponse, Product,
};

/// Terminal order status reported by the partner API.
pub const ORDER_FINALIZED: &str = "Order Finalized";

/// Initial status of an order that has not been queried yet.
const ORDER_STATUS_UNKNOWN: &str = "UNKNOWN";

/// Customer identity data submitted for certificate issuance.
///
/// Serializes to the partner API's snake_case wire shape; dates go out
/// as `YYYY-MM-DD`. `organization_name` is carried for callers
/// assembling CSR subjects but is never part of the submission payload.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CustomerData {
    /// Given name.
    pub first_name: String,
    /// Middle name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    /// Family name.
    pub last_name: String,
    /// Contact email; also used on the certificate order.
    pub email: String,
    /// Street address.
    pub street_address: String,
    /// City.
    pub city: String,
    /// State or province.
    pub state: String,
    /// Postal code.
    pub postal_code: String,
    /// Country code.
    pub country: String,
    /// Date of birth.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    /// Phone number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Social security number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssn: Option<String>,
    /// Identity document number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity: Option<String>,
    /// Identity document type (e.g. `drivers license`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_type: Option<String>,
    /// Identity document expiration date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_expiration: Option<NaiveDate>,
    /// Identity document issuing state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_state: Option<String>,
    /// Gender as recorded on the identity document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_gender: Option<String>,
    /// Organization name; not part of the customer-data submission.
    #[serde(skip)]
    pub organization_name: Option<String>,
}

/// A certificate order progressing through the issuance workflow.
#[derive(Debug, Clone)]
pub struct Certificate {
    /// Server-assigned order identifier; `None` until the order is submitted.
    pub id: Option<String>,
    /// Token referencing submitted customer data.
    pub data_token: Option<String>,
    /// Last known order status (`UNKNOWN` before the first status query).
    pub order_status: String,
    /// Error detail when the order failed.
    pub order_error: Option<String>,
    /// Issued certificate chain, populated once issuance completes.
    pub bundle: CertificateBundle,
    /// Customer identity data backing the order.
    pub customer_data: CustomerData,
    /// Selected product id.
    product: Option<String>,
}

impl Certificate {
    /// Create a certificate order for the given customer data.
    pub fn new(customer_data: CustomerData) -> Self {
        Certificate {
            id: None,
            data_token: None,
            order_status: ORDER_STATUS_UNKNOWN.to_string(),
            order_error: None,
            bundle: CertificateBundle::default(),
            customer_data,
            product: None,
        }
    }

    /// Select the product to order.
    pub fn set_product(&mut self, product: &Product) {
        self.product = Some(product.id.clone());
    }

    /// The selected product id, if any.
    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }

    /// Submit the customer data and capture the returned data token.
    pub async fn submit_customer_data(
        &mut self,
        client: &PartnerClient,
    ) -> Result<(), ClientError> {
        let mut body = serde_json::to_value(&self.customer_data)?;
        if let Some(obj) = body.as_object_mut() {
            if let Some(product) = &self.product {
                obj.insert("product".to_string(), Value::String(product.clone()));
            }
        }

        let response = client
            .api_request("POST", "/v1/certificate/token", Some(&body))
            .await?;
        let parsed: CertificateTokenResponse = serde_json::from_value(response)?;
        if !parsed.token.is_empty() {
            self.data_token = Some(parsed.token);
        }
        Ok(())
    }

    /// Submit the certificate order, optionally with a payment token.
    ///
    /// Requires a prior [`submit_customer_data`](Certificate::submit_customer_data)
    /// and fails if the order was already submitted.
    pub async fn submit_order(
        &mut self,
        client: &PartnerClient,
        stripe_token: Option<&str>,
    ) -> Result<(), ClientError> {
        let Some(data_token) = &self.data_token else {
            return Err(ClientError::InvalidState(
                "customer data submission has not been completed".to_string(),
            ));
        };
        if self.id.is_some() {
            return Err(ClientError::InvalidState(
                "certificate order has already been submitted".to_string(),
            ));
        }

        let mut body = json!({
            "certdata_token": data_token,
            "email": self.customer_data.email,
        });
        if let Some(obj) = body.as_object_mut() {
            if let Some(product) = &self.product {
                obj.insert("product".to_string(), Value::String(product.clone()));
            }
            if let Some(stripe_token) = stripe_token {
                obj.insert(
                    "stripe_token".to_string(),
                    Value::String(stripe_token.to_string()),
                );
            }
        }

        let response = client
            .api_request("POST", "/v1/certificate", Some(&body))
            .await?;
        let parsed: CertificateOrderResponse = serde_json::from_value(response)?;
        if !parsed.order_id.is_empty() {
            self.id = Some(parsed.order_id);
        }
        Ok(())
    }

    /// Submit a signed CSR PEM for the order.
    pub async fn submit_csr(
        &self,
        client: &PartnerClient,
        signed_csr_pem: &str,
    ) -> Result<(), ClientError> {
        let id = self.require_id()?;
        let body = json!({ "signed_csr": signed_csr_pem });
        client
            .api_request("POST", &format!("/v1/certificate/{}/csr", id), Some(&body))
            .await?;
        Ok(())
    }

    /// Request revocation of the certificate order.
    pub async fn revoke(&self, client: &PartnerClient, reason: &str) -> Result<(), ClientError> {
        let id = self.require_id()?;
        let body = json!({ "revocation_reason": reason });
        client
            .api_request("DELETE", &format!("/v1/certificate/{}", id), Some(&body))
            .await?;
        Ok(())
    }

    /// Fetch the current order status, updating status, error, and
    /// bundle fields. Poll by repeating this call; the client itself
    /// has no notion of polling intervals.
    pub async fn get_status(&mut self, client: &PartnerClient) -> Result<(), ClientError> {
        let id = self.require_id()?.to_string();
        let response = client
            .api_request("GET", &format!("/v1/certificate/{}", id), None)
            .await?;
        let parsed: CertificateStatusResponse = serde_json::from_value(response)?;

        self.order_status = parsed.order_status;
        self.order_error = parsed.order_error;
        if let Some(bundle) = parsed.certificate_bundle {
            self.bundle = bundle;
        }
        Ok(())
    }

    /// Whether the last fetched status is the terminal
    /// [`ORDER_FINALIZED`] state.
    pub fn is_order_complete(&self) -> bool {
        self.order_status == ORDER_FINALIZED
    }

    fn require_id(&self) -> Result<&str, ClientError> {
        self.id.as_deref().ok_or_else(|| {
            ClientError::InvalidState("certificate must have a valid order id".to_string())
        })
    }
}
