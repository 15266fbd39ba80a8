//! Database operations for user accounts.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::user::{self, ActiveModel as UserActiveModel, Entity as User};
use crate::error::{AppError, AppResult};
use crate::models;

use super::DbPool;

/// Represents a user account to be inserted. The password arrives pre-hashed.
pub struct NewUserRecord {
    pub name: String,
    pub email: String,
    pub role: String,
    pub password_hash: String,
}

impl DbPool {
    /// Insert a new active user account.
    pub async fn insert_user(&self, rec: NewUserRecord) -> AppResult<models::User> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let model = UserActiveModel {
            id: Set(id),
            name: Set(rec.name),
            email: Set(rec.email),
            role: Set(rec.role),
            is_active: Set(true),
            password_hash: Set(rec.password_hash),
            last_login_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert user: {}", e)))?;

        Ok(model_to_user(result))
    }

    /// Find a user row by email. Returns the full entity row because the
    /// caller may need the stored password hash for verification.
    pub async fn find_user_by_email(&self, email: &str) -> AppResult<Option<user::Model>> {
        let result = User::find()
            .filter(user::Column::Email.eq(email))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to find user: {}", e)))?;

        Ok(result)
    }

    /// Find a user by ID.
    pub async fn get_user(&self, id: Uuid) -> AppResult<Option<models::User>> {
        let result = User::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get user: {}", e)))?;

        Ok(result.map(model_to_user))
    }

    /// List all user accounts, newest first.
    pub async fn list_users(&self) -> AppResult<Vec<models::User>> {
        let rows = User::find()
            .order_by_desc(user::Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list users: {}", e)))?;

        Ok(rows.into_iter().map(model_to_user).collect())
    }

    /// Stamp a successful login.
    pub async fn set_last_login(&self, id: Uuid) -> AppResult<()> {
        let existing = User::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get user: {}", e)))?
            .ok_or_else(|| AppError::NotFound("User".to_string()))?;

        let mut active: UserActiveModel = existing.into();
        active.last_login_at = Set(Some(Utc::now()));
        active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update user: {}", e)))?;

        Ok(())
    }
}

/// Convert a stored row into the API model, dropping the password hash.
pub fn model_to_user(m: user::Model) -> models::User {
    models::User {
        id: m.id,
        name: m.name,
        email: m.email,
        role: m.role,
        is_active: m.is_active,
        last_login_at: m.last_login_at,
        created_at: m.created_at,
    }
}
