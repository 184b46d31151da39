use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

const RESERVED_CLAIMS: [&str; 3] = ["exp", "iat", "nbf"];

#[derive(Debug, PartialEq)]
pub enum Error {
    FailedToIssueToken,
    InvalidToken,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

/// The identity object posted at issuance, signed together with its timestamps.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Claims {
    #[serde(flatten)]
    pub subject: Map<String, Value>,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn email(&self) -> Option<&str> {
        self.subject.get("email").and_then(Value::as_str)
    }
}

pub fn token_lifetime() -> Duration {
    Duration::hours(1)
}

pub fn issue(secret: &str, subject: Map<String, Value>) -> Result<String> {
    issue_with_lifetime(secret, subject, token_lifetime())
}

pub fn issue_with_lifetime(
    secret: &str,
    mut subject: Map<String, Value>,
    lifetime: Duration,
) -> Result<String> {
    for claim in RESERVED_CLAIMS {
        subject.remove(claim);
    }

    let now = Utc::now();
    let claims = Claims {
        subject,
        iat: now.timestamp(),
        exp: (now + lifetime).timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|err| {
        tracing::error!("Failed to sign access token: {}", err);
        Error::FailedToIssueToken
    })
}

pub fn verify(secret: &str, token: &str) -> Result<Claims> {
    let mut validation = Validation::default();
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => Error::ExpiredToken,
        _ => Error::InvalidToken,
    })
}
