//! Session token inspection
//!
//! Tokens are opaque to the dashboard. The only thing read from them is
//! the JWT `exp` claim, when there is one.

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};

/// True only for a JWT whose `exp` lies in the past
///
/// Anything that does not decode as a JWT, or has no `exp`, is trusted.
/// The signature is not checked: the issuer's key is not known here.
pub fn is_expired(token: &str) -> bool {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = true;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    match decode::<serde_json::Value>(token, &DecodingKey::from_secret(&[]), &validation) {
        Ok(_) => false,
        Err(e) => matches!(e.kind(), ErrorKind::ExpiredSignature),
    }
}
