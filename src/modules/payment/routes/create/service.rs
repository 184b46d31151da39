use super::types::{request, response};
use crate::{
    modules::payment::service::{self as payment, online},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let amount = payment::to_minor_units(&payload.body.price)
        .filter(|amount| *amount > 0)
        .ok_or(response::Error::InvalidPrice)?;

    ctx.payment
        .gateway
        .create_payment_intent(online::CreatePaymentIntentPayload {
            amount,
            currency: payment::CURRENCY.to_string(),
        })
        .await
        .map(|intent| {
            tracing::debug!("Created payment intent {}", intent.id);
            response::Success::PaymentIntentCreated(intent)
        })
        .map_err(|_| response::Error::FailedToCreatePaymentIntent)
}
