/// Unified error type for key material operations.
///
/// Covers key parsing, identity encoding, and signature handling.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    /// The private key bytes, hex, or PKCS#8 document could not be parsed.
    #[error("invalid private key: {0}")]
    InvalidPrivateKey(String),

    /// The public key bytes could not be parsed or encoded.
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    /// Signing failed or a signature could not be produced.
    #[error("invalid signature: {0}")]
    InvalidSignature(String),

    /// Hex decoding failed.
    #[error("invalid hex: {0}")]
    InvalidHex(String),

    /// The supplied key material is not an elliptic-curve key.
    #[error("user key must be an EC key (found algorithm {oid})")]
    NotEcKey {
        /// Algorithm OID found in the PKCS#8 document.
        oid: String,
    },
}

impl From<hex::FromHexError> for CryptoError {
    fn from(e: hex::FromHexError) -> Self {
        CryptoError::InvalidHex(e.to_string())
    }
}
