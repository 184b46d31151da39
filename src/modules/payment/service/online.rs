use super::super::utils::{self, ProviderCredentials, SendProviderRequestPayload};
use async_trait::async_trait;
use reqwest::{Method, StatusCode};
use serde::Deserialize;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PaymentIntent {
    pub id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CreatePaymentIntentPayload {
    pub amount: i64,
    pub currency: String,
}

#[async_trait]
pub trait Gateway: Send + Sync {
    async fn create_payment_intent(
        &self,
        payload: CreatePaymentIntentPayload,
    ) -> Result<PaymentIntent, Error>;
}

pub struct Stripe {
    api_endpoint: String,
    secret_key: String,
    client: reqwest::Client,
}

impl Stripe {
    pub fn new(api_endpoint: String, secret_key: String) -> Self {
        Self {
            api_endpoint,
            secret_key,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Gateway for Stripe {
    async fn create_payment_intent(
        &self,
        payload: CreatePaymentIntentPayload,
    ) -> Result<PaymentIntent, Error> {
        let form = [
            ("amount", payload.amount.to_string()),
            ("currency", payload.currency),
            ("payment_method_types[]", "card".to_string()),
        ];

        utils::send_provider_request::<PaymentIntent>(
            &self.client,
            ProviderCredentials {
                api_endpoint: &self.api_endpoint,
                secret_key: &self.secret_key,
            },
            SendProviderRequestPayload {
                route: "/payment_intents".to_string(),
                form: Some(&form[..]),
                expected_status_code: StatusCode::OK,
                method: Method::POST,
            },
        )
        .await
        .map_err(|err| {
            tracing::error!("Failed to create payment intent: {:?}", err);
            Error::UnexpectedError
        })
    }
}
