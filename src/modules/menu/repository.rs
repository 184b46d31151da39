use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;
use ulid::Ulid;

use crate::utils::database::{DatabaseConnection, DeleteResult, InsertResult, UpdateResult};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: BigDecimal,
    pub recipe: String,
    pub image: Option<String>,
    pub created_at: NaiveDateTime,
}

pub struct CreateMenuItemPayload {
    pub name: String,
    pub category: String,
    pub price: BigDecimal,
    pub recipe: String,
    pub image: Option<String>,
}

pub struct UpdateMenuItemPayload {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<BigDecimal>,
    pub recipe: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait MenuRepository {
    async fn create_menu_item(&self, payload: CreateMenuItemPayload) -> Result<InsertResult>;
    async fn find_menu_items(&self) -> Result<Vec<MenuItem>>;
    async fn find_menu_item_by_id(&self, id: String) -> Result<Option<MenuItem>>;
    async fn update_menu_item_by_id(
        &self,
        id: String,
        payload: UpdateMenuItemPayload,
    ) -> Result<UpdateResult>;
    async fn delete_menu_item_by_id(&self, id: String) -> Result<DeleteResult>;
}

#[async_trait]
impl MenuRepository for DatabaseConnection {
    async fn create_menu_item(&self, payload: CreateMenuItemPayload) -> Result<InsertResult> {
        let id = Ulid::new().to_string();

        sqlx::query(
            "
            INSERT INTO menu_items (id, name, category, price, recipe, image)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(id.clone())
        .bind(payload.name)
        .bind(payload.category)
        .bind(payload.price)
        .bind(payload.recipe)
        .bind(payload.image)
        .execute(&self.pool)
        .await
        .map(|_| InsertResult::new(id))
        .map_err(|err| {
            tracing::error!("Error occurred while trying to create a menu item: {}", err);
            Error::UnexpectedError
        })
    }

    async fn find_menu_items(&self) -> Result<Vec<MenuItem>> {
        sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items ORDER BY category, name")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to fetch the menu: {}", err);
                Error::UnexpectedError
            })
    }

    async fn find_menu_item_by_id(&self, id: String) -> Result<Option<MenuItem>> {
        sqlx::query_as::<_, MenuItem>("SELECT * FROM menu_items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while trying to fetch a menu item by id: {}",
                    err
                );
                Error::UnexpectedError
            })
    }

    async fn update_menu_item_by_id(
        &self,
        id: String,
        payload: UpdateMenuItemPayload,
    ) -> Result<UpdateResult> {
        sqlx::query(
            "
            UPDATE menu_items SET
                name = COALESCE($1, name),
                category = COALESCE($2, category),
                price = COALESCE($3, price),
                recipe = COALESCE($4, recipe),
                image = COALESCE($5, image)
            WHERE
                id = $6
            ",
        )
        .bind(payload.name)
        .bind(payload.category)
        .bind(payload.price)
        .bind(payload.recipe)
        .bind(payload.image)
        .bind(id.clone())
        .execute(&self.pool)
        .await
        .map(|res| UpdateResult::new(res.rows_affected()))
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update menu item {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
    }

    async fn delete_menu_item_by_id(&self, id: String) -> Result<DeleteResult> {
        sqlx::query("DELETE FROM menu_items WHERE id = $1")
            .bind(id.clone())
            .execute(&self.pool)
            .await
            .map(|res| DeleteResult::new(res.rows_affected()))
            .map_err(|err| {
                tracing::error!(
                    "Error occurred while trying to delete menu item {}: {}",
                    id,
                    err
                );
                Error::UnexpectedError
            })
    }
}
