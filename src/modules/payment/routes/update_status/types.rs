pub mod request {
    use crate::modules::payment::repository::PaymentStatus;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub status: PaymentStatus,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }
}

pub mod response {
    use crate::utils::database::UpdateResult;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        StatusUpdated(UpdateResult),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::StatusUpdated(result) => (StatusCode::OK, Json(json!(result))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToUpdateOrderStatus,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToUpdateOrderStatus => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update order status" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
