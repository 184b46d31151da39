use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use std::fmt;
use ulid::Ulid;

use crate::utils::database::{DatabaseConnection, InsertResult, UpdateResult};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub enum PaymentStatus {
    #[default]
    #[serde(rename = "pending")]
    Pending,
    #[serde(rename = "delivered")]
    Delivered,
}

impl From<String> for PaymentStatus {
    fn from(value: String) -> Self {
        match value.as_ref() {
            "delivered" => PaymentStatus::Delivered,
            _ => PaymentStatus::Pending,
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "pending"),
            PaymentStatus::Delivered => write!(f, "delivered"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Payment {
    pub id: String,
    pub email: String,
    pub price: BigDecimal,
    pub transaction_id: Option<String>,
    pub cart_ids: Vec<String>,
    pub menu_item_ids: Vec<String>,
    #[sqlx(try_from = "String")]
    pub status: PaymentStatus,
    pub created_at: NaiveDateTime,
}

pub struct CreatePaymentPayload {
    pub email: String,
    pub price: BigDecimal,
    pub transaction_id: Option<String>,
    pub cart_ids: Vec<String>,
    pub menu_item_ids: Vec<String>,
    pub status: PaymentStatus,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait PaymentRepository {
    async fn create_payment(&self, payload: CreatePaymentPayload) -> Result<InsertResult>;
    async fn find_payments(&self, email: Option<String>) -> Result<Vec<Payment>>;
    async fn update_payment_status_by_id(
        &self,
        id: String,
        status: PaymentStatus,
    ) -> Result<UpdateResult>;
}

#[async_trait]
impl PaymentRepository for DatabaseConnection {
    async fn create_payment(&self, payload: CreatePaymentPayload) -> Result<InsertResult> {
        let id = Ulid::new().to_string();

        sqlx::query(
            "
            INSERT INTO payments (id, email, price, transaction_id, cart_ids, menu_item_ids, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ",
        )
        .bind(id.clone())
        .bind(payload.email)
        .bind(payload.price)
        .bind(payload.transaction_id)
        .bind(payload.cart_ids)
        .bind(payload.menu_item_ids)
        .bind(payload.status.to_string())
        .execute(&self.pool)
        .await
        .map(|_| InsertResult::new(id))
        .map_err(|err| {
            tracing::error!("Error occurred while trying to record a payment: {}", err);
            Error::UnexpectedError
        })
    }

    async fn find_payments(&self, email: Option<String>) -> Result<Vec<Payment>> {
        sqlx::query_as::<_, Payment>(
            "
            SELECT * FROM payments
            WHERE $1::text IS NULL OR email = $1
            ORDER BY created_at DESC
            ",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch payments: {}", err);
            Error::UnexpectedError
        })
    }

    async fn update_payment_status_by_id(
        &self,
        id: String,
        status: PaymentStatus,
    ) -> Result<UpdateResult> {
        sqlx::query("UPDATE payments SET status = $1 WHERE id = $2")
            .bind(status.to_string())
            .bind(id.clone())
            .execute(&self.pool)
            .await
            .map(|res| UpdateResult::new(res.rows_affected()))
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while trying to update status of payment {}: {}",
                    id,
                    err
                );
                Error::UnexpectedError
            })
    }
}
