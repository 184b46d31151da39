pub mod request {
    use crate::modules::payment::repository::PaymentStatus;
    use bigdecimal::BigDecimal;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(email)]
        pub email: String,
        pub price: BigDecimal,
        pub transaction_id: Option<String>,
        #[serde(default)]
        pub cart_ids: Vec<String>,
        #[serde(default)]
        pub menu_item_ids: Vec<String>,
        pub status: Option<PaymentStatus>,
    }

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::utils::{
        database::{DeleteResult, InsertResult},
        validation,
    };
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        PaymentRecorded {
            payment_result: InsertResult,
            delete_result: DeleteResult,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PaymentRecorded {
                    payment_result,
                    delete_result,
                } => (
                    StatusCode::OK,
                    Json(json!({
                        "payment_result": payment_result,
                        "delete_result": delete_result,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        InvalidBody(ValidationErrors),
        FailedToRecordPayment,
        FailedToClearCart(String),
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::InvalidBody(errors) => validation::into_response(errors),
                Self::FailedToRecordPayment => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to record payment" })),
                )
                    .into_response(),
                Self::FailedToClearCart(payment_id) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": format!(
                            "Payment {} was recorded but the cart could not be cleared",
                            payment_id
                        )
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
