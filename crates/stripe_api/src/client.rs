use reqwest::Client;
use tracing::{debug, warn};

use crate::types::{PaymentApiError, PaymentIntent, StripeErrorResponse};

/// Client for interacting with the Stripe PaymentIntents API
pub struct StripeClient {
    client: Client,
    base_url: String,
    secret_key: String,
}

impl StripeClient {
    /// Create a new Stripe API client with the given secret key
    pub fn new(secret_key: String) -> Result<Self, PaymentApiError> {
        if secret_key.is_empty() {
            return Err(PaymentApiError::MissingSecretKey);
        }

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: "https://api.stripe.com/v1".to_string(),
            secret_key,
        })
    }

    /// Create a client reading the secret key from STRIPE_SECRET_KEY
    pub fn from_env() -> Result<Self, PaymentApiError> {
        let secret_key =
            std::env::var("STRIPE_SECRET_KEY").map_err(|_| PaymentApiError::MissingSecretKey)?;
        Self::new(secret_key)
    }

    /// Creates a card payment intent for the given dollar amount and returns
    /// the intent with its client-side secret.
    pub async fn create_payment_intent(
        &self,
        amount: f64,
    ) -> Result<PaymentIntent, PaymentApiError> {
        let cents = amount_to_cents(amount)?;

        debug!("Creating Stripe payment intent for {} cents", cents);

        let url = format!("{}/payment_intents", self.base_url);
        let params = [
            ("amount", cents.to_string()),
            ("currency", "usd".to_string()),
            ("payment_method_types[]", "card".to_string()),
        ];

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.secret_key)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<StripeErrorResponse>()
                .await
                .ok()
                .and_then(|e| e.error.message)
                .unwrap_or_else(|| "Payment intent creation failed".to_string());

            warn!("Stripe rejected payment intent ({}): {}", status, message);
            return Err(PaymentApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let intent = response.json::<PaymentIntent>().await?;
        debug!("Created payment intent {}", intent.id);

        Ok(intent)
    }
}

/// Converts a dollar amount to integer cents, rejecting amounts that are not
/// positive finite numbers.
pub fn amount_to_cents(amount: f64) -> Result<i64, PaymentApiError> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(PaymentApiError::InvalidAmount);
    }

    Ok((amount * 100.0).round() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_to_cents() {
        assert_eq!(amount_to_cents(1.0).unwrap(), 100);
        assert_eq!(amount_to_cents(25.0).unwrap(), 2500);
        assert_eq!(amount_to_cents(50.5).unwrap(), 5050);
        assert_eq!(amount_to_cents(19.99).unwrap(), 1999);
    }

    #[test]
    fn test_amount_to_cents_rejects_bad_amounts() {
        assert!(amount_to_cents(0.0).is_err());
        assert!(amount_to_cents(-5.0).is_err());
        assert!(amount_to_cents(f64::NAN).is_err());
        assert!(amount_to_cents(f64::INFINITY).is_err());
    }

    #[test]
    fn test_client_requires_secret_key() {
        assert!(StripeClient::new(String::new()).is_err());
        assert!(StripeClient::new("sk_test_123".to_string()).is_ok());
    }
}
