/*
[INPUT]:  API credentials and nonce values
[OUTPUT]: Authentication payloads (key, HMAC-SHA256 signature, nonce)
[POS]:    HTTP layer - request signing for authenticated endpoints
[UPDATE]: When changing signing algorithm or nonce source
*/

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::http::{Credentials, QuadrigaError, Result};
use crate::types::AuthPayload;

type HmacSha256 = Hmac<Sha256>;

/// Signs authenticated requests with the account's API secret
#[derive(Debug, Clone)]
pub struct RequestSigner {
    credentials: Credentials,
}

impl RequestSigner {
    /// Create a new request signer for the given credentials
    pub fn new(credentials: Credentials) -> Self {
        Self { credentials }
    }

    /// Credentials used for signing
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Build the authentication object for one request
    ///
    /// Message: "{nonce}{client_id}{api_key}", keyed with the API secret.
    /// Returns the lowercase hex digest alongside the key and nonce.
    pub fn sign(&self, nonce: u64) -> Result<AuthPayload> {
        let nonce = nonce.to_string();
        let message = format!(
            "{nonce}{}{}",
            self.credentials.client_id, self.credentials.api_key
        );

        let mut mac = HmacSha256::new_from_slice(self.credentials.api_secret.as_bytes())
            .map_err(|e| QuadrigaError::Config(format!("invalid HMAC key: {e}")))?;
        mac.update(message.as_bytes());
        let signature = hex::encode(mac.finalize().into_bytes());

        Ok(AuthPayload {
            key: self.credentials.api_key.clone(),
            signature,
            nonce,
        })
    }
}

/// Issues strictly increasing nonces based on wall-clock nanoseconds
///
/// When the clock does not advance between calls (coarse resolution, clock
/// stepped backwards, concurrent callers) the previous value plus one is used.
#[derive(Debug, Default)]
pub struct NonceGenerator {
    last: AtomicU64,
}

impl NonceGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting from `last`; the next nonce is at least `last + 1`
    pub fn starting_at(last: u64) -> Self {
        Self {
            last: AtomicU64::new(last),
        }
    }

    /// Next nonce, strictly greater than every nonce issued before
    pub fn next(&self) -> u64 {
        let now = now_nanos();
        let mut last = self.last.load(Ordering::Acquire);
        loop {
            let candidate = now.max(last.saturating_add(1));
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Acquire)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}

fn now_nanos() -> u64 {
    Utc::now()
        .timestamp_nanos_opt()
        .and_then(|nanos| u64::try_from(nanos).ok())
        .unwrap_or(0)
}
