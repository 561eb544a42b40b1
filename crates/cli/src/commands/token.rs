//! Bearer token utilities.

use chrono::{DateTime, Utc};
use shopcart_store::token;

/// Decode a token's claims and report whether it has expired.
pub fn check(raw: &str) {
    let now = Utc::now();

    match token::decode_claims(raw) {
        Ok(claims) => {
            if let Some(user_id) = &claims.user_id {
                tracing::info!(user_id, "token subject");
            }
            if let Some(iat) = claims.iat.and_then(|s| DateTime::from_timestamp(s, 0)) {
                tracing::info!(issued_at = %iat, "token issued");
            }
            match claims.exp.and_then(|s| DateTime::from_timestamp(s, 0)) {
                Some(exp) => tracing::info!(expires_at = %exp, "token expiry claim"),
                None => tracing::warn!("token carries no expiry claim"),
            }

            if token::expired(raw, now) {
                tracing::warn!("token is EXPIRED");
            } else {
                tracing::info!("token is valid");
            }
        }
        Err(e) => tracing::warn!(error = %e, "token cannot be decoded; treated as expired"),
    }
}
