pub use crate::utils::database;
use crate::modules::payment::service::online;
use async_trait::async_trait;
use std::env;
use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum AppEnvironment {
    Production,
    Development,
}

impl AppEnvironment {
    pub fn from(raw_environment: String) -> Self {
        match raw_environment.as_ref() {
            "production" => Self::Production,
            _ => Self::Development,
        }
    }
}

#[derive(Clone)]
pub struct AppContext {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
}

#[derive(Clone)]
pub struct AuthContext {
    pub secret: String,
}

#[derive(Clone)]
pub struct PaymentContext {
    pub gateway: Arc<dyn online::Gateway>,
}

#[derive(Clone)]
pub struct Context {
    pub app: AppContext,
    pub db: Arc<dyn database::Database>,
    pub auth: AuthContext,
    pub payment: PaymentContext,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub environment: AppEnvironment,
    pub port: u32,
}

#[derive(Clone)]
pub struct AuthConfig {
    pub secret: String,
}

#[derive(Clone)]
pub struct PaymentConfig {
    pub api_endpoint: String,
    pub secret_key: String,
}

#[derive(Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub app: AppConfig,
    pub auth: AuthConfig,
    pub payment: PaymentConfig,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0} not set")]
    MissingVariable(&'static str),
    #[error("Invalid PORT number: {0}")]
    InvalidPort(String),
    #[error("Failed to connect to the database")]
    DatabaseConnectionFailed,
    #[error("Failed to run database migrations")]
    DatabaseMigrationFailed,
}

fn required(name: &'static str) -> Result<String, Error> {
    env::var(name).map_err(|_| Error::MissingVariable(name))
}

impl Config {
    pub fn from_env() -> Result<Self, Error> {
        let database_url = required("DATABASE_URL")?;
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let environment = env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let raw_port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
        let port = raw_port
            .parse::<u32>()
            .map_err(|_| Error::InvalidPort(raw_port.clone()))?;
        let auth_secret = required("ACCESS_TOKEN_SECRET")?;
        let payment_api_endpoint = env::var("PAYMENT_API_ENDPOINT")
            .unwrap_or_else(|_| "https://api.stripe.com/v1".to_string());
        let payment_secret_key = required("PAYMENT_SECRET_KEY")?;

        Ok(Self {
            database: DatabaseConfig { url: database_url },
            app: AppConfig {
                host,
                environment: AppEnvironment::from(environment),
                port,
            },
            auth: AuthConfig {
                secret: auth_secret,
            },
            payment: PaymentConfig {
                api_endpoint: payment_api_endpoint,
                secret_key: payment_secret_key,
            },
        })
    }
}

#[async_trait]
pub trait ToContext {
    async fn to_context(self) -> Result<Context, Error>;
}

#[async_trait]
impl ToContext for Config {
    async fn to_context(self) -> Result<Context, Error> {
        let db_conn = database::connect(self.database.url.as_str())
            .await
            .map_err(|_| Error::DatabaseConnectionFailed)?;
        database::migrate(&db_conn)
            .await
            .map_err(|_| Error::DatabaseMigrationFailed)?;

        Ok(Context {
            app: AppContext {
                host: self.app.host,
                environment: self.app.environment,
                port: self.app.port,
            },
            db: Arc::new(db_conn),
            auth: AuthContext {
                secret: self.auth.secret,
            },
            payment: PaymentContext {
                gateway: Arc::new(online::Stripe::new(
                    self.payment.api_endpoint,
                    self.payment.secret_key,
                )),
            },
        })
    }
}
