//! Elliptic curve key types used for request identity and signing.

pub mod public_key;
pub mod user_key;

pub use public_key::PublicKey;
pub use user_key::UserKey;
