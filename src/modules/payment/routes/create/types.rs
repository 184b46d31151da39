pub mod request {
    use bigdecimal::BigDecimal;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub price: BigDecimal,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::payment::service::online::PaymentIntent;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        PaymentIntentCreated(PaymentIntent),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaymentIntentCreated(intent) => (
                    StatusCode::OK,
                    Json(json!({ "client_secret": intent.client_secret })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidPrice,
        FailedToCreatePaymentIntent,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidPrice => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Price must be greater than zero" })),
                )
                    .into_response(),
                Self::FailedToCreatePaymentIntent => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create payment intent" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
