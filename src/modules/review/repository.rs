use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::utils::database::DatabaseConnection;

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct Review {
    pub id: String,
    pub name: String,
    pub details: String,
    pub rating: i32,
    pub created_at: NaiveDateTime,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait ReviewRepository {
    async fn find_reviews(&self) -> Result<Vec<Review>, Error>;
}

#[async_trait]
impl ReviewRepository for DatabaseConnection {
    async fn find_reviews(&self) -> Result<Vec<Review>, Error> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while trying to fetch reviews: {}", err);
                Error::UnexpectedError
            })
    }
}
