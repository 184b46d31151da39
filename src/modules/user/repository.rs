use async_trait::async_trait;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

use crate::utils::database::{DatabaseConnection, DeleteResult, InsertResult, UpdateResult};

type Result<T> = std::result::Result<T, Error>;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub enum Role {
    #[serde(rename = "admin")]
    Admin,
    #[default]
    #[serde(rename = "default")]
    Default,
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_ref() {
            "admin" => Role::Admin,
            _ => Role::Default,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Default => write!(f, "default"),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    #[sqlx(try_from = "String")]
    pub role: Role,
    pub photo: Option<String>,
    pub created_at: NaiveDateTime,
}

pub struct CreateUserPayload {
    pub email: String,
    pub name: Option<String>,
    pub photo: Option<String>,
}

pub struct UpdateUserPayload {
    pub name: Option<String>,
    pub photo: Option<String>,
}

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
}

#[async_trait]
pub trait UserRepository {
    /// Inserts the user unless the email is already taken, in which case nothing
    /// is written and `None` comes back.
    async fn create_user(&self, payload: CreateUserPayload) -> Result<Option<InsertResult>>;
    async fn find_users(&self) -> Result<Vec<User>>;
    async fn find_user_by_id(&self, id: String) -> Result<Option<User>>;
    async fn find_user_by_email(&self, email: String) -> Result<Option<User>>;
    async fn update_user_by_id(&self, id: String, payload: UpdateUserPayload)
        -> Result<UpdateResult>;
    async fn set_user_role_by_id(&self, id: String, role: Role) -> Result<UpdateResult>;
    async fn delete_user_by_id(&self, id: String) -> Result<DeleteResult>;
}

#[async_trait]
impl UserRepository for DatabaseConnection {
    async fn create_user(&self, payload: CreateUserPayload) -> Result<Option<InsertResult>> {
        let id = Ulid::new().to_string();

        sqlx::query(
            "
            INSERT INTO users (id, email, name, role, photo)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (email) DO NOTHING
            ",
        )
        .bind(id.clone())
        .bind(payload.email)
        .bind(payload.name)
        .bind(Role::Default.to_string())
        .bind(payload.photo)
        .execute(&self.pool)
        .await
        .map(|res| match res.rows_affected() {
            0 => None,
            _ => Some(InsertResult::new(id)),
        })
        .map_err(|err| {
            tracing::error!("Error occured while creating a user account: {}", err);
            Error::UnexpectedError
        })
    }

    async fn find_users(&self) -> Result<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at")
            .fetch_all(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while fetching users: {}", err);
                Error::UnexpectedError
            })
    }

    async fn find_user_by_id(&self, id: String) -> Result<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id.clone())
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred while fetching user with id {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn find_user_by_email(&self, email: String) -> Result<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|err| {
                tracing::error!("Error occurred in find_user_by_email: {}", err);
                Error::UnexpectedError
            })
    }

    async fn update_user_by_id(
        &self,
        id: String,
        payload: UpdateUserPayload,
    ) -> Result<UpdateResult> {
        sqlx::query(
            "
            UPDATE users SET
                name = COALESCE($1, name),
                photo = COALESCE($2, photo)
            WHERE
                id = $3
            ",
        )
        .bind(payload.name)
        .bind(payload.photo)
        .bind(id.clone())
        .execute(&self.pool)
        .await
        .map(|res| UpdateResult::new(res.rows_affected()))
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to update a user by id {}: {}",
                id,
                err
            );
            Error::UnexpectedError
        })
    }

    async fn set_user_role_by_id(&self, id: String, role: Role) -> Result<UpdateResult> {
        sqlx::query("UPDATE users SET role = $1 WHERE id = $2")
            .bind(role.to_string())
            .bind(id.clone())
            .execute(&self.pool)
            .await
            .map(|res| UpdateResult::new(res.rows_affected()))
            .map_err(|err| {
                tracing::error!("Error occurred while setting role of user {}: {}", id, err);
                Error::UnexpectedError
            })
    }

    async fn delete_user_by_id(&self, id: String) -> Result<DeleteResult> {
        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id.clone())
            .execute(&self.pool)
            .await
            .map(|res| DeleteResult::new(res.rows_affected()))
            .map_err(|err| {
                tracing::error!("Error occurred while deleting user {}: {}", id, err);
                Error::UnexpectedError
            })
    }
}

pub fn is_admin(user: &User) -> bool {
    user.role == Role::Admin
}
