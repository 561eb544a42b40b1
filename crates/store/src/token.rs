//! Bearer-token expiry decisions.
//!
//! Tokens arrive as compact JWS strings with an embedded `exp` claim
//! (seconds since epoch). Only the payload segment is read here; signature
//! verification belongs to the backend that issued the token.

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Errors that can occur when decoding a token's claims.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// The token is not in `header.payload.signature` form.
    #[error("token is not in compact JWS form")]
    Malformed,
    /// The payload segment is not valid base64url.
    #[error("token payload is not valid base64url: {0}")]
    Payload(#[from] base64::DecodeError),
    /// The decoded payload is not a JSON claims object.
    #[error("token claims are not valid JSON: {0}")]
    Claims(#[from] serde_json::Error),
}

/// Claims carried in the token payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// Expiry, seconds since epoch.
    #[serde(default)]
    pub exp: Option<i64>,
    /// Issued-at, seconds since epoch.
    #[serde(default)]
    pub iat: Option<i64>,
    /// Account id the token was issued for.
    #[serde(default, rename = "userId")]
    pub user_id: Option<String>,
}

/// Decode the claims object from a compact JWS string.
///
/// # Errors
///
/// Returns a [`TokenError`] if the token has no payload segment, the
/// segment is not base64url, or the payload is not a JSON object.
pub fn decode_claims(token: &str) -> Result<TokenClaims, TokenError> {
    let payload = token.split('.').nth(1).ok_or(TokenError::Malformed)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload)?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Whether the token is expired at `now`.
///
/// Pure decision function: absent, malformed, or claim-less tokens count as
/// expired, and a token whose `exp` equals `now` is already expired
/// (`exp * 1000 <= now` in milliseconds).
#[must_use]
pub fn expired(token: &str, now: DateTime<Utc>) -> bool {
    match decode_claims(token) {
        Ok(TokenClaims { exp: Some(exp), .. }) => {
            exp.saturating_mul(1000) <= now.timestamp_millis()
        }
        _ => true,
    }
}
