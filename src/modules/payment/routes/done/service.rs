use super::types::{request, response};
use crate::{modules::payment::repository, types::Context};
use std::sync::Arc;
use validator::Validate;

/// Records the payment, then clears the paid cart items. The two writes are
/// independent: a failed cleanup leaves the payment recorded.
pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload
        .body
        .validate()
        .map_err(response::Error::InvalidBody)?;

    let body = payload.body;
    let cart_ids = body.cart_ids.clone();

    let payment_result = ctx
        .db
        .create_payment(repository::CreatePaymentPayload {
            email: body.email,
            price: body.price,
            transaction_id: body.transaction_id,
            cart_ids: body.cart_ids,
            menu_item_ids: body.menu_item_ids,
            status: body.status.unwrap_or_default(),
        })
        .await
        .map_err(|_| response::Error::FailedToRecordPayment)?;

    let delete_result = ctx
        .db
        .delete_cart_items_by_ids(cart_ids)
        .await
        .map_err(|_| {
            tracing::error!(
                "Payment {} was recorded but its cart items were not cleared",
                payment_result.inserted_id
            );
            response::Error::FailedToClearCart(payment_result.inserted_id.clone())
        })?;

    Ok(response::Success::PaymentRecorded {
        payment_result,
        delete_result,
    })
}
