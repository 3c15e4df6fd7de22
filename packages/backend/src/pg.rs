//! PostgreSQL implementation of the store traits.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use store::{Form, FormStore, PasswordHash, StoreError, UpsertOutcome, User, UserStore};
use uuid::Uuid;

use crate::database::Database;

const FORM_COLUMNS: &str = "id, title, description, is_published, created_at, updated_at";
const USER_COLUMNS: &str = "id, email, name, password_hash, created_at, updated_at";

#[derive(Debug, FromRow)]
struct FormRow {
    id: String,
    title: String,
    description: Option<String>,
    is_published: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<FormRow> for Form {
    fn from(row: FormRow) -> Self {
        Form {
            id: row.id,
            title: row.title,
            description: row.description,
            is_published: row.is_published,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct UserRow {
    id: Uuid,
    email: String,
    name: Option<String>,
    password_hash: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = StoreError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(User {
            id: row.id,
            email: row.email,
            name: row.name,
            password_hash: PasswordHash::from_phc(row.password_hash)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, FromRow)]
struct UpsertRow {
    #[sqlx(flatten)]
    user: UserRow,
    inserted: bool,
}

/// Store backed by the shared connection pool.
#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(db: &Database) -> Self {
        Self {
            pool: db.pool().clone(),
        }
    }
}

#[async_trait]
impl FormStore for PgStore {
    async fn get_form(&self, id: &str) -> Result<Option<Form>, StoreError> {
        let row: Option<FormRow> =
            sqlx::query_as(&format!("SELECT {FORM_COLUMNS} FROM forms WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(StoreError::backend)?;
        Ok(row.map(Form::from))
    }

    async fn set_published(
        &self,
        id: &str,
        is_published: bool,
    ) -> Result<Option<Form>, StoreError> {
        // updated_at must move forward even if NOW() has not.
        let row: Option<FormRow> = sqlx::query_as(&format!(
            "UPDATE forms
             SET is_published = $2,
                 updated_at = GREATEST(NOW(), updated_at + INTERVAL '1 microsecond')
             WHERE id = $1
             RETURNING {FORM_COLUMNS}"
        ))
        .bind(id)
        .bind(is_published)
        .fetch_optional(&self.pool)
        .await
        .map_err(StoreError::backend)?;
        Ok(row.map(Form::from))
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1"))
                .bind(email)
                .fetch_optional(&self.pool)
                .await
                .map_err(StoreError::backend)?;
        row.map(User::try_from).transpose()
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let row: Option<UserRow> =
            sqlx::query_as(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1"))
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(StoreError::backend)?;
        row.map(User::try_from).transpose()
    }

    async fn upsert_credentials(
        &self,
        email: &str,
        name: &str,
        password_hash: &PasswordHash,
    ) -> Result<(User, UpsertOutcome), StoreError> {
        // xmax is 0 only for a freshly inserted tuple.
        let row: UpsertRow = sqlx::query_as(&format!(
            "INSERT INTO users (email, name, password_hash) VALUES ($1, $2, $3)
             ON CONFLICT (email) DO UPDATE SET
                password_hash = EXCLUDED.password_hash,
                updated_at = GREATEST(NOW(), users.updated_at + INTERVAL '1 microsecond')
             RETURNING {USER_COLUMNS}, (xmax = 0) AS inserted"
        ))
        .bind(email)
        .bind(name)
        .bind(password_hash.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(StoreError::backend)?;

        let outcome = if row.inserted {
            UpsertOutcome::Created
        } else {
            UpsertOutcome::Updated
        };
        Ok((User::try_from(row.user)?, outcome))
    }
}
