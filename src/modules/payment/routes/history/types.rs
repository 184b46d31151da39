pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Filters {
        pub email: Option<String>,
    }

    pub struct Payload {
        pub filters: Filters,
    }
}

pub mod response {
    use crate::modules::payment::repository::Payment;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Payments(Vec<Payment>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Payments(payments) => (StatusCode::OK, Json(json!(payments))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchPayments,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchPayments => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch payments" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
