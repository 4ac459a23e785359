//! The authenticated request pipeline: method validation, header
//! assembly, request signing, dispatch, and response classification.

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde_json::Value;

use crate::config::AuthScheme;
use crate::error::ClientError;

/// Identifying client/version header value sent with every request.
const USER_AGENT_VALUE: &str = concat!("Wns-Rust/", env!("CARGO_PKG_VERSION"));

/// Status codes treated as success when the payload does not say otherwise.
const SUCCESS_CODES: [u16; 4] = [200, 201, 202, 204];

/// HTTP methods accepted by the partner API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// GET
    Get,
    /// PUT
    Put,
    /// POST
    Post,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Parse a method string, failing fast on anything outside the
    /// supported set. No network I/O has happened at this point.
    pub fn parse(method: &str) -> Result<Self, ClientError> {
        match method {
            "GET" => Ok(HttpMethod::Get),
            "PUT" => Ok(HttpMethod::Put),
            "POST" => Ok(HttpMethod::Post),
            "DELETE" => Ok(HttpMethod::Delete),
            other => Err(ClientError::UnsupportedMethod(other.to_string())),
        }
    }

    /// The method name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        }
    }

    fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// Convert a configured credential into a header value, rejecting
/// values that cannot appear in a header instead of dropping them.
fn header_value(name: &str, value: &str) -> Result<HeaderValue, ClientError> {
    HeaderValue::from_str(value)
        .map_err(|_| ClientError::Configuration(format!("invalid {} header value", name)))
}

/// Assemble the headers for one call under the given auth scheme.
///
/// `url` and `body` are the exact strings that will go on the wire; for
/// the signing schemes the signature is computed over their
/// concatenation (no separator), binding the signature to the exact
/// endpoint as well as the payload.
fn build_headers(
    auth: Option<&AuthScheme>,
    url: &str,
    body: Option<&str>,
) -> Result<HeaderMap, ClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

    let Some(auth) = auth else {
        // Public lookup calls carry no auth headers at all.
        return Ok(headers);
    };

    match auth {
        AuthScheme::ApiKey {
            partner_id,
            api_key,
        } => {
            headers.insert("X-Partner-ID", header_value("X-Partner-ID", partner_id)?);
            // The credential is sent as-is, not hashed.
            headers.insert(AUTHORIZATION, header_value("Authorization", api_key)?);
        }
        AuthScheme::Distributed {
            ksk_hex,
            ksk_sig_hex,
            ..
        } => {
            headers.insert("X-Partner-Key", header_value("X-Partner-Key", ksk_hex)?);
            headers.insert(
                "X-Partner-KeySig",
                header_value("X-Partner-KeySig", ksk_sig_hex)?,
            );
        }
        AuthScheme::PartnerSigned { partner_id, .. } => {
            headers.insert("X-Partner-ID", header_value("X-Partner-ID", partner_id)?);
        }
    }

    if let Some(user_key) = auth.user_key() {
        // Signed material is url + body with no separator. This exact
        // construction is what the remote service verifies; do not
        // change it.
        let signed_material = format!("{}{}", url, body.unwrap_or(""));
        let identity_hex = user_key.public_key().to_spki_hex()?;
        let signature_hex = user_key.sign_message(signed_material.as_bytes())?;

        headers.insert("X-Identity", header_value("X-Identity", &identity_hex)?);
        headers.insert("X-Signature", header_value("X-Signature", &signature_hex)?);
    }

    Ok(headers)
}

/// Perform one authenticated (or, with `auth == None`, public) call and
/// classify the response.
///
/// The four stages run as a straight-line sequence with early
/// termination: validate method, build and sign the request, dispatch,
/// classify the response into a parsed JSON value or a typed error.
pub(crate) async fn process_request(
    http: &reqwest::Client,
    auth: Option<&AuthScheme>,
    url: &str,
    method: &str,
    body: Option<&Value>,
) -> Result<Value, ClientError> {
    let method = HttpMethod::parse(method)?;

    // Serialize once; the same string is signed and sent, so the
    // signature covers the literal wire bytes.
    let body_str = match body {
        Some(value) => Some(serde_json::to_string(value)?),
        None => None,
    };

    let headers = build_headers(auth, url, body_str.as_deref())?;

    tracing::debug!(method = method.as_str(), url, "dispatching partner API request");

    let mut request = http.request(method.as_reqwest(), url).headers(headers);
    if let Some(body_str) = body_str {
        request = request.body(body_str);
    }

    let response = request.send().await?;
    let status = response.status().as_u16();

    tracing::debug!(status, url, "partner API response received");

    // DELETE with 204 short-circuits body parsing entirely.
    if method == HttpMethod::Delete && status == 204 {
        return Ok(serde_json::json!({}));
    }

    let text = response.text().await?;
    let payload: Value = serde_json::from_str(&text).map_err(|e| {
        ClientError::MalformedResponse {
            status_code: status,
            detail: e.to_string(),
        }
    })?;

    let declared_failure = payload.get("success").and_then(Value::as_bool) == Some(false);
    if declared_failure || !SUCCESS_CODES.contains(&status) {
        let message = payload
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let failures = payload
            .get("failures")
            .and_then(Value::as_array)
            .map(|entries| {
                entries
                    .iter()
                    .filter_map(|f| f.get("message").and_then(Value::as_str))
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        return Err(ClientError::RequestFailed {
            status_code: status,
            message,
            failures,
        });
    }

    Ok(payload)
}
