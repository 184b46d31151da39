use crate::{
    app,
    modules::{
        auth::service as auth,
        payment::service::online::{self, CreatePaymentIntentPayload, Gateway, PaymentIntent},
    },
    types::{AppContext, AppEnvironment, AuthContext, Context, PaymentContext},
    utils::database::{self, memory::MemoryDatabase, DatabaseConnection},
};
use async_trait::async_trait;
use axum::{
    body::{self, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use sqlx::{postgres::PgPoolOptions, types::BigDecimal, Executor, PgPool};
use std::{env, str::FromStr, sync::Arc};
use tokio::sync::Mutex;
use tower::ServiceExt;
use ulid::Ulid;

const SECRET: &str = "test-access-token-secret";

/// Records every intent it is asked for and answers with a predictable secret.
#[derive(Default)]
pub struct FakeGateway {
    pub requests: Mutex<Vec<CreatePaymentIntentPayload>>,
    failing: Mutex<bool>,
}

impl FakeGateway {
    pub async fn fail(&self) {
        *self.failing.lock().await = true;
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn create_payment_intent(
        &self,
        payload: CreatePaymentIntentPayload,
    ) -> Result<PaymentIntent, online::Error> {
        if *self.failing.lock().await {
            return Err(online::Error::UnexpectedError);
        }

        let intent = PaymentIntent {
            id: format!("pi_{}", payload.amount),
            client_secret: format!("secret_{}", payload.amount),
        };
        self.requests.lock().await.push(payload);
        Ok(intent)
    }
}

pub struct TestApp {
    pub ctx: Arc<Context>,
    pub db: Arc<MemoryDatabase>,
    pub gateway: Arc<FakeGateway>,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let db = Arc::new(MemoryDatabase::new());
        let gateway = Arc::new(FakeGateway::default());
        let ctx = Arc::new(Context {
            app: AppContext {
                host: "127.0.0.1".to_string(),
                environment: AppEnvironment::Development,
                port: 5000,
            },
            db: db.clone(),
            auth: AuthContext {
                secret: SECRET.to_string(),
            },
            payment: PaymentContext {
                gateway: gateway.clone(),
            },
        });

        Self {
            router: app::router(ctx.clone()),
            ctx,
            db,
            gateway,
        }
    }

    pub fn token_for(&self, email: &str) -> String {
        token(&self.ctx, email)
    }

    pub async fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut request = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }

        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        self.dispatch(request).await
    }

    /// Sends `body` verbatim as a JSON request body.
    pub async fn request_raw(&self, method: Method, path: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.dispatch(request).await
    }

    async fn dispatch(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

        if bytes.is_empty() {
            return (status, Value::Null);
        }
        (status, serde_json::from_slice(&bytes).unwrap())
    }
}

pub fn token(ctx: &Context, email: &str) -> String {
    let subject = match json!({ "email": email }) {
        Value::Object(subject) => subject,
        _ => unreachable!(),
    };
    auth::issue(&ctx.auth.secret, subject).unwrap()
}

/// Reads a decimal that was serialized either as a string or as a number.
pub fn decimal(value: &Value) -> BigDecimal {
    let raw = value
        .as_str()
        .map(str::to_string)
        .unwrap_or_else(|| value.to_string());
    BigDecimal::from_str(&raw).unwrap()
}

/// A freshly migrated Postgres schema, private to one test.
pub struct ScratchDatabase {
    pub conn: DatabaseConnection,
    admin: PgPool,
    schema: String,
}

impl ScratchDatabase {
    /// Returns `None` when `DATABASE_URL` is not set, so Postgres tests
    /// quietly skip on machines without a database.
    pub async fn connect() -> Option<Self> {
        let Ok(url) = env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set, skipping Postgres test");
            return None;
        };

        let admin = PgPool::connect(&url).await.unwrap();
        let schema = format!("test_{}", Ulid::new().to_string().to_lowercase());
        admin
            .execute(format!("CREATE SCHEMA {}", schema).as_str())
            .await
            .unwrap();

        let search_path = format!("SET search_path TO {}", schema);
        let pool = PgPoolOptions::new()
            .max_connections(8)
            .after_connect(move |conn, _| {
                let search_path = search_path.clone();
                Box::pin(async move {
                    conn.execute(search_path.as_str()).await?;
                    Ok(())
                })
            })
            .connect(&url)
            .await
            .unwrap();

        let conn = DatabaseConnection { pool };
        database::migrate(&conn).await.unwrap();

        Some(Self {
            conn,
            admin,
            schema,
        })
    }

    pub async fn cleanup(self) {
        self.conn.pool.close().await;
        self.admin
            .execute(format!("DROP SCHEMA {} CASCADE", self.schema).as_str())
            .await
            .unwrap();
    }
}
