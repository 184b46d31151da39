use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::types::BigDecimal;

use crate::utils::database::DatabaseConnection;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AdminStats {
    pub users: i64,
    pub menu_items: i64,
    pub orders: i64,
    pub revenue: BigDecimal,
}

#[derive(sqlx::FromRow)]
struct OptionalAdminStats {
    users: Option<i64>,
    menu_items: Option<i64>,
    orders: Option<i64>,
    revenue: Option<BigDecimal>,
}

/// Units sold and revenue for one menu category.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct CategoryStats {
    pub category: String,
    pub quantity: i64,
    pub revenue: BigDecimal,
}

#[async_trait]
pub trait DashboardRepository {
    async fn get_admin_stats(&self) -> Result<AdminStats, Error>;
    async fn get_order_stats(&self) -> Result<Vec<CategoryStats>, Error>;
}

#[async_trait]
impl DashboardRepository for DatabaseConnection {
    async fn get_admin_stats(&self) -> Result<AdminStats, Error> {
        sqlx::query_as::<_, OptionalAdminStats>(
            "
            SELECT
                (SELECT COUNT(id) FROM users) AS users,
                (SELECT COUNT(id) FROM menu_items) AS menu_items,
                (SELECT COUNT(id) FROM payments) AS orders,
                (SELECT COALESCE(SUM(price), 0) FROM payments) AS revenue
            ",
        )
        .fetch_one(&self.pool)
        .await
        .map(|res| AdminStats {
            users: res.users.unwrap_or(0),
            menu_items: res.menu_items.unwrap_or(0),
            orders: res.orders.unwrap_or(0),
            revenue: res.revenue.unwrap_or_else(|| BigDecimal::from(0)),
        })
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch info from tables: {}",
                err
            );
            Error::UnexpectedError
        })
    }

    async fn get_order_stats(&self) -> Result<Vec<CategoryStats>, Error> {
        sqlx::query_as::<_, CategoryStats>(
            "
            SELECT
                menu_items.category AS category,
                COUNT(*) AS quantity,
                SUM(menu_items.price) AS revenue
            FROM
                payments
                CROSS JOIN LATERAL UNNEST(payments.menu_item_ids) AS ordered(menu_item_id)
                JOIN menu_items ON menu_items.id = ordered.menu_item_id
            GROUP BY
                menu_items.category
            ORDER BY
                menu_items.category
            ",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to aggregate orders: {}", err);
            Error::UnexpectedError
        })
    }
}
