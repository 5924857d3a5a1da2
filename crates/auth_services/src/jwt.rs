use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use super::types::{AuthError, Claims, TokenRequest};

/// Signs and verifies session tokens for the platform.
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl JwtService {
    pub fn new() -> Self {
        let secret = std::env::var("JWT_SECRET")
            .unwrap_or_else(|_| "your-secret-key-change-this-in-production".to_string());

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_ref()),
            decoding_key: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Issues a session token for a signed-in identity. Expires in 24 hours.
    pub fn generate_session_token(&self, request: &TokenRequest) -> Result<String, AuthError> {
        let expiration = Utc::now()
            .checked_add_signed(Duration::hours(24))
            .expect("valid timestamp")
            .timestamp() as usize;

        let claims = Claims {
            email: request.email.clone(),
            name: request.name.clone(),
            picture: request.picture.clone(),
            exp: expiration,
            iat: Utc::now().timestamp() as usize,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)?;
        Ok(token)
    }

    /// Verifies a session token and returns its claims.
    pub fn verify_token(&self, token: &str) -> Result<Claims, AuthError> {
        let token_data = decode::<Claims>(
            token,
            &self.decoding_key,
            &Validation::new(Algorithm::HS256),
        )?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_request() -> TokenRequest {
        TokenRequest {
            email: "pat@example.com".to_string(),
            name: "Pat".to_string(),
            picture: Some("https://example.com/pat.png".to_string()),
        }
    }

    #[test]
    fn test_session_token_round_trip() {
        let service = JwtService::new();
        let token = service.generate_session_token(&token_request()).unwrap();

        let claims = service.verify_token(&token).unwrap();
        assert_eq!(claims.email, "pat@example.com");
        assert_eq!(claims.name, "Pat");
        assert_eq!(
            claims.picture.as_deref(),
            Some("https://example.com/pat.png")
        );
    }

    #[test]
    fn test_session_token_expires_in_24_hours() {
        let service = JwtService::new();
        let token = service.generate_session_token(&token_request()).unwrap();
        let claims = service.verify_token(&token).unwrap();

        let lifetime = claims.exp - claims.iat;
        assert_eq!(lifetime, 24 * 60 * 60);
    }

    #[test]
    fn test_tampered_token_is_rejected() {
        let service = JwtService::new();
        let token = service.generate_session_token(&token_request()).unwrap();

        let tampered = format!("{}AAAA", token);

        assert!(service.verify_token(&tampered).is_err());
    }
}
