use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use ulid::Ulid;

use crate::utils::database::{DatabaseConnection, DeleteResult, InsertResult};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct CartItem {
    pub id: String,
    pub item: String,
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<BigDecimal>,
    pub created_at: NaiveDateTime,
}

pub struct CreateCartItemPayload {
    pub item: String,
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub price: Option<BigDecimal>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait CartRepository {
    async fn create_cart_item(&self, payload: CreateCartItemPayload) -> Result<InsertResult>;
    async fn find_cart_items_by_email(&self, email: String) -> Result<Vec<CartItem>>;
    async fn delete_cart_item_by_id(&self, id: String) -> Result<DeleteResult>;
    async fn delete_cart_items_by_ids(&self, ids: Vec<String>) -> Result<DeleteResult>;
}

#[async_trait]
impl CartRepository for DatabaseConnection {
    async fn create_cart_item(&self, payload: CreateCartItemPayload) -> Result<InsertResult> {
        let id = Ulid::new().to_string();

        sqlx::query(
            "
            INSERT INTO cart_items (id, item, email, name, image, price)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(id.clone())
        .bind(payload.item)
        .bind(payload.email)
        .bind(payload.name)
        .bind(payload.image)
        .bind(payload.price)
        .execute(&self.pool)
        .await
        .map(|_| InsertResult::new(id))
        .map_err(|err| {
            tracing::error!("Error occurred while trying to add a cart item: {}", err);
            Error::UnexpectedError
        })
    }

    async fn find_cart_items_by_email(&self, email: String) -> Result<Vec<CartItem>> {
        sqlx::query_as::<_, CartItem>(
            "SELECT * FROM cart_items WHERE email = $1 ORDER BY created_at",
        )
        .bind(email.clone())
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch cart items of {}: {}",
                email,
                err
            );
            Error::UnexpectedError
        })
    }

    async fn delete_cart_item_by_id(&self, id: String) -> Result<DeleteResult> {
        sqlx::query("DELETE FROM cart_items WHERE id = $1")
            .bind(id.clone())
            .execute(&self.pool)
            .await
            .map(|res| DeleteResult::new(res.rows_affected()))
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while trying to delete cart item {}: {}",
                    id,
                    err
                );
                Error::UnexpectedError
            })
    }

    async fn delete_cart_items_by_ids(&self, ids: Vec<String>) -> Result<DeleteResult> {
        sqlx::query("DELETE FROM cart_items WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await
            .map(|res| DeleteResult::new(res.rows_affected()))
            .map_err(|err| {
                tracing::error!("Error occurred while trying to clear cart items: {}", err);
                Error::UnexpectedError
            })
    }
}
