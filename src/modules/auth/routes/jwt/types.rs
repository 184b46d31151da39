pub mod request {
    use serde_json::{Map, Value};

    pub type Subject = Map<String, Value>;

    pub struct Payload {
        pub subject: Subject,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Token(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Token(token) => (StatusCode::OK, Json(json!({ "token": token }))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToIssueToken,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToIssueToken => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to issue token" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
