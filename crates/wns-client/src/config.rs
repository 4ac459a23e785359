//! Client configuration and auth-scheme resolution.

use wns_primitives::UserKey;

use crate::error::ClientError;

/// Default base URL for the authenticated partner API.
pub const DEFAULT_API_URL: &str = "https://api.wns.io";

/// Default base URL for the public wallet name lookup API.
pub const DEFAULT_LOOKUP_URL: &str = "https://pubapi.wns.io/api/wallet_lookup/";

/// Configuration for a [`PartnerClient`](crate::PartnerClient).
///
/// Exactly one auth scheme must be satisfiable from the optional
/// credential fields; see [`AuthScheme::resolve`].
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Partner identifier (required for api-key and partner-signed auth).
    pub partner_id: Option<String>,
    /// Opaque API key credential (required for api-key auth).
    pub api_key: Option<String>,
    /// Hex-encoded partner key-signing key (required for distributed auth).
    pub partner_ksk_hex: Option<String>,
    /// Hex-encoded KSK signature over the user key (required for distributed auth).
    pub partner_ksk_sig_hex: Option<String>,
    /// EC user key (required for distributed and partner-signed auth).
    pub user_key: Option<UserKey>,
    /// Base URL for the authenticated partner API.
    pub api_url: String,
    /// Base URL for the public wallet name lookup API.
    pub lookup_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            partner_id: None,
            api_key: None,
            partner_ksk_hex: None,
            partner_ksk_sig_hex: None,
            user_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
        }
    }
}

/// The resolved authentication scheme for a client.
///
/// Resolved once at construction; each variant carries only the fields
/// it needs, so a client can never hold distributed credentials while
/// authenticating with an api key.
#[derive(Debug, Clone)]
pub enum AuthScheme {
    /// Shared-secret auth: partner identity plus raw api key.
    ApiKey {
        /// Partner identifier sent in the partner-identity header.
        partner_id: String,
        /// Credential sent as-is in the authorization header.
        api_key: String,
    },
    /// Delegated auth: a partner-signed key-signing key authorizes the
    /// user key, which signs each request.
    Distributed {
        /// Hex-encoded partner key-signing key.
        ksk_hex: String,
        /// Hex-encoded KSK signature over the user key.
        ksk_sig_hex: String,
        /// EC key signing each request.
        user_key: UserKey,
    },
    /// Direct partner auth: the partner's own key signs each request.
    PartnerSigned {
        /// Partner identifier sent in the partner-identity header.
        partner_id: String,
        /// EC key signing each request.
        user_key: UserKey,
    },
}

impl AuthScheme {
    /// Resolve the active auth scheme from the configured credential fields.
    ///
    /// Precedence when several combinations are satisfiable is fixed:
    /// api-key, then distributed, then partner-signed. If no combination
    /// holds, resolution fails with a configuration error naming the
    /// three valid combinations. No network access happens here.
    pub fn resolve(config: &ClientConfig) -> Result<Self, ClientError> {
        if let (Some(partner_id), Some(api_key)) = (&config.partner_id, &config.api_key) {
            return Ok(AuthScheme::ApiKey {
                partner_id: partner_id.clone(),
                api_key: api_key.clone(),
            });
        }

        if let (Some(ksk_hex), Some(ksk_sig_hex), Some(user_key)) = (
            &config.partner_ksk_hex,
            &config.partner_ksk_sig_hex,
            &config.user_key,
        ) {
            return Ok(AuthScheme::Distributed {
                ksk_hex: ksk_hex.clone(),
                ksk_sig_hex: ksk_sig_hex.clone(),
                user_key: user_key.clone(),
            });
        }

        if let (Some(partner_id), Some(user_key)) = (&config.partner_id, &config.user_key) {
            return Ok(AuthScheme::PartnerSigned {
                partner_id: partner_id.clone(),
                user_key: user_key.clone(),
            });
        }

        Err(ClientError::Configuration(
            "(partner_id AND api_key) OR (partner_ksk_hex AND partner_ksk_sig_hex AND user_key) \
             OR (partner_id AND user_key) are required to construct a client"
                .to_string(),
        ))
    }

    /// The user key for schemes that sign requests, if any.
    pub fn user_key(&self) -> Option<&UserKey> {
        match self {
            AuthScheme::ApiKey { .. } => None,
            AuthScheme::Distributed { user_key, .. }
            | AuthScheme::PartnerSigned { user_key, .. } => Some(user_key),
        }
    }
}
