//! secp256k1 public key with SubjectPublicKeyInfo identity encoding.
//!
//! Supports DER SPKI serialization (the identity header wire format)
//! and SHA-256/ECDSA signature verification.

use k256::ecdsa::signature::Verifier;
use k256::ecdsa::{Signature, VerifyingKey};
use k256::pkcs8::{DecodePublicKey, EncodePublicKey};

use crate::CryptoError;

/// A secp256k1 public key identifying a request signer.
///
/// Wraps a k256 `VerifyingKey` and provides the verification side of the
/// identity/signature request headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    /// The underlying k256 verifying key.
    inner: VerifyingKey,
}

impl PublicKey {
    /// Wrap a k256 verifying key.
    pub(crate) fn from_verifying_key(inner: VerifyingKey) -> Self {
        PublicKey { inner }
    }

    /// Parse a public key from DER-encoded SubjectPublicKeyInfo bytes.
    ///
    /// # Arguments
    /// * `bytes` - DER SPKI bytes.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the document is not a
    /// valid secp256k1 SPKI.
    pub fn from_spki_der(bytes: &[u8]) -> Result<Self, CryptoError> {
        let inner = VerifyingKey::from_public_key_der(bytes)
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        Ok(PublicKey { inner })
    }

    /// Parse a public key from a hex-encoded SubjectPublicKeyInfo string.
    ///
    /// # Arguments
    /// * `hex_str` - Hex string of the DER SPKI document.
    ///
    /// # Returns
    /// `Ok(PublicKey)` on success, or an error if the hex or document is
    /// invalid.
    pub fn from_spki_hex(hex_str: &str) -> Result<Self, CryptoError> {
        let bytes = hex::decode(hex_str)?;
        Self::from_spki_der(&bytes)
    }

    /// Serialize the public key as DER-encoded SubjectPublicKeyInfo.
    ///
    /// # Returns
    /// A byte vector containing the DER SPKI document.
    pub fn to_spki_der(&self) -> Result<Vec<u8>, CryptoError> {
        let doc = self
            .inner
            .to_public_key_der()
            .map_err(|e| CryptoError::InvalidPublicKey(e.to_string()))?;
        Ok(doc.as_bytes().to_vec())
    }

    /// Serialize the public key as a lowercase hex SubjectPublicKeyInfo string.
    ///
    /// This is the identity header value sent with signed requests.
    ///
    /// # Returns
    /// A hex string of the DER SPKI document.
    pub fn to_spki_hex(&self) -> Result<String, CryptoError> {
        Ok(hex::encode(self.to_spki_der()?))
    }

    /// Verify a DER-encoded SHA-256/ECDSA signature over a message.
    ///
    /// # Arguments
    /// * `message` - The raw message bytes that were signed.
    /// * `der_signature` - The DER-encoded signature bytes.
    ///
    /// # Returns
    /// `true` if the signature is valid for this message and key,
    /// `false` otherwise (including for malformed signatures).
    pub fn verify_message(&self, message: &[u8], der_signature: &[u8]) -> bool {
        match Signature::from_der(der_signature) {
            Ok(sig) => self.inner.verify(message, &sig).is_ok(),
            Err(_) => false,
        }
    }

    /// Verify a hex DER signature over a message.
    ///
    /// # Arguments
    /// * `message` - The raw message bytes that were signed.
    /// * `signature_hex` - Hex string of the DER-encoded signature.
    ///
    /// # Returns
    /// `true` if the hex decodes and the signature verifies.
    pub fn verify_message_hex(&self, message: &[u8], signature_hex: &str) -> bool {
        match hex::decode(signature_hex) {
            Ok(bytes) => self.verify_message(message, &bytes),
            Err(_) => false,
        }
    }
}
