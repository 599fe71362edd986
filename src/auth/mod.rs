// src/auth/mod.rs
// =============================================================================
// This module turns a service-account key file into an access token.
//
// Flow (OAuth 2.0 JWT bearer grant):
// 1. Read the JSON key downloaded from the cloud console
// 2. Sign a short-lived JWT with the key's RSA private key
// 3. Exchange the JWT at the key's token_uri for a bearer token
//
// The token is requested with the read-only Search Console scope only.
// =============================================================================

mod service_account;

pub use service_account::{authenticate, load_key, AccessToken};
