use crate::modules::{
    cart::repository::CartRepository, dashboard::repository::DashboardRepository,
    menu::repository::MenuRepository, payment::repository::PaymentRepository,
    review::repository::ReviewRepository, user::repository::UserRepository,
};
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgPoolOptions, PgPool};

#[derive(Clone)]
pub struct DatabaseConnection {
    pub pool: PgPool,
}

pub async fn connect(database_url: &str) -> Result<DatabaseConnection, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(4)
        .connect(database_url)
        .await
        .map(|pool| DatabaseConnection { pool })
        .map_err(|err| {
            tracing::error!("Error connecting to database: {}", err);
            err
        })
}

pub async fn migrate(db_conn: &DatabaseConnection) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(&db_conn.pool).await.map_err(|err| {
        tracing::error!("Failed to run database migrations: {}", err);
        err
    })
}

/// Every store the handlers talk to.
pub trait Database:
    UserRepository
    + MenuRepository
    + ReviewRepository
    + CartRepository
    + PaymentRepository
    + DashboardRepository
    + Send
    + Sync
{
}

impl<T> Database for T where
    T: UserRepository
        + MenuRepository
        + ReviewRepository
        + CartRepository
        + PaymentRepository
        + DashboardRepository
        + Send
        + Sync
{
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl InsertResult {
    pub fn new(inserted_id: String) -> Self {
        Self {
            acknowledged: true,
            inserted_id,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

impl UpdateResult {
    pub fn new(affected: u64) -> Self {
        Self {
            acknowledged: true,
            matched_count: affected,
            modified_count: affected,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn new(deleted_count: u64) -> Self {
        Self {
            acknowledged: true,
            deleted_count,
        }
    }
}
