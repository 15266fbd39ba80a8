//! Database operations for access requests.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};
use uuid::Uuid;

use crate::entity::access_request::{
    self, ActiveModel as AccessRequestActiveModel, Entity as AccessRequestEntity,
};
use crate::error::{AppError, AppResult};
use crate::models::{self, RequestStatus};

use super::DbPool;

impl DbPool {
    /// Insert a new pending access request. The credential arrives pre-hashed.
    pub async fn insert_access_request(
        &self,
        name: String,
        email: String,
        password_hash: String,
    ) -> AppResult<models::AccessRequest> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let model = AccessRequestActiveModel {
            id: Set(id),
            name: Set(name),
            email: Set(email),
            password_hash: Set(password_hash),
            status: Set(RequestStatus::Pending.as_str().to_string()),
            reason: Set(None),
            created_at: Set(now),
            processed_at: Set(None),
        };

        let result = model
            .insert(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to insert access request: {}", e)))?;

        model_to_access_request(result)
    }

    /// Get a full access request row by ID (the approval flow needs the
    /// stored credential hash).
    pub async fn get_access_request_row(
        &self,
        id: Uuid,
    ) -> AppResult<Option<access_request::Model>> {
        let result = AccessRequestEntity::find_by_id(id)
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to get access request: {}", e)))?;

        Ok(result)
    }

    /// Check whether a pending request already exists for this email.
    pub async fn pending_request_exists(&self, email: &str) -> AppResult<bool> {
        let result = AccessRequestEntity::find()
            .filter(access_request::Column::Email.eq(email))
            .filter(access_request::Column::Status.eq(RequestStatus::Pending.as_str()))
            .one(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to query access requests: {}", e)))?;

        Ok(result.is_some())
    }

    /// List access requests, optionally filtered by status, newest first.
    pub async fn list_access_requests(
        &self,
        status: Option<RequestStatus>,
    ) -> AppResult<Vec<models::AccessRequest>> {
        let mut select = AccessRequestEntity::find();
        if let Some(status) = status {
            select = select.filter(access_request::Column::Status.eq(status.as_str()));
        }

        let rows = select
            .order_by_desc(access_request::Column::CreatedAt)
            .all(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to list access requests: {}", e)))?;

        rows.into_iter().map(model_to_access_request).collect()
    }

    /// Mark a request approved. Terminal transition.
    pub async fn mark_request_approved(
        &self,
        row: access_request::Model,
        processed_at: DateTime<Utc>,
    ) -> AppResult<models::AccessRequest> {
        let mut active: AccessRequestActiveModel = row.into();
        active.status = Set(RequestStatus::Approved.as_str().to_string());
        active.processed_at = Set(Some(processed_at));

        let updated = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update access request: {}", e)))?;

        model_to_access_request(updated)
    }

    /// Mark a request rejected with an optional reason. Terminal transition.
    pub async fn mark_request_rejected(
        &self,
        row: access_request::Model,
        reason: Option<String>,
        processed_at: DateTime<Utc>,
    ) -> AppResult<models::AccessRequest> {
        let mut active: AccessRequestActiveModel = row.into();
        active.status = Set(RequestStatus::Rejected.as_str().to_string());
        active.reason = Set(reason);
        active.processed_at = Set(Some(processed_at));

        let updated = active
            .update(self.connection())
            .await
            .map_err(|e| AppError::Database(format!("Failed to update access request: {}", e)))?;

        model_to_access_request(updated)
    }
}

/// Convert a stored row into the API model, dropping the credential hash.
pub fn model_to_access_request(m: access_request::Model) -> AppResult<models::AccessRequest> {
    let status = RequestStatus::parse(&m.status).ok_or_else(|| {
        AppError::Database(format!(
            "Access request {} has unknown status '{}'",
            m.id, m.status
        ))
    })?;

    Ok(models::AccessRequest {
        id: m.id,
        name: m.name,
        email: m.email,
        status,
        reason: m.reason,
        created_at: m.created_at,
        processed_at: m.processed_at,
    })
}
