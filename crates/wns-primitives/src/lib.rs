#![deny(missing_docs)]

//! # wns-primitives
//!
//! Elliptic-curve key material for the WNS partner SDK:
//! - secp256k1 user keys (raw scalar or PKCS#8 PEM, with non-EC rejection)
//! - DER SubjectPublicKeyInfo identity encoding
//! - SHA-256/ECDSA message signing and verification
//!
//! # Example
//!
//! ```
//! use wns_primitives::UserKey;
//!
//! # fn example() -> Result<(), wns_primitives::CryptoError> {
//! let key = UserKey::generate();
//! let signature_hex = key.sign_message(b"https://api.wns.io/v1/partner/walletname")?;
//! assert!(key
//!     .public_key()
//!     .verify_message_hex(b"https://api.wns.io/v1/partner/walletname", &signature_hex));
//! # Ok(())
//! # }
//! ```

pub mod ec;

mod error;
pub use ec::{PublicKey, UserKey};
pub use error::CryptoError;
