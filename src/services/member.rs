//! Member service
//!
//! Orchestrates validation and persistence for each member operation.

use serde_json::Value;
use tracing::{info, instrument};

use crate::db::Repository;
use crate::errors::AppError;
use crate::models::Member;
use crate::serializers::MemberSerializer;

/// Member service
#[derive(Clone)]
pub struct MemberService {
    repo: Repository,
}

impl MemberService {
    /// Create a new MemberService
    pub fn new(repo: Repository) -> Self {
        Self { repo }
    }

    /// List every member in store order
    #[instrument(skip(self))]
    pub async fn list_members(&self) -> Result<Vec<Member>, AppError> {
        self.repo.list_members().await
    }

    /// Validate input and create a member
    #[instrument(skip(self, data))]
    pub async fn create_member(&self, data: &Value) -> Result<Member, AppError> {
        let fields = MemberSerializer::validate(data)?;
        let member = self.repo.create_member(&fields).await?;

        info!(member_id = member.id, "Created member {}", member);
        Ok(member)
    }

    /// Get a single member
    #[instrument(skip(self))]
    pub async fn get_member(&self, id: i64) -> Result<Member, AppError> {
        self.find(id).await
    }

    /// Replace all writable fields of a member
    #[instrument(skip(self, data))]
    pub async fn update_member(&self, id: i64, data: &Value) -> Result<Member, AppError> {
        // A missing member wins over invalid input
        self.find(id).await?;

        let fields = MemberSerializer::validate(data)?;
        let member = self.repo.update_member(id, &fields).await?;

        info!(member_id = member.id, "Updated member {}", member);
        Ok(member)
    }

    /// Delete a member
    #[instrument(skip(self))]
    pub async fn delete_member(&self, id: i64) -> Result<(), AppError> {
        self.repo.delete_member(id).await?;

        info!(member_id = id, "Deleted member");
        Ok(())
    }

    /// Mark a member as active. Activating an active member is a no-op.
    #[instrument(skip(self))]
    pub async fn activate_member(&self, id: i64) -> Result<(), AppError> {
        self.repo.set_member_active(id, true).await?;

        info!(member_id = id, "Activated member");
        Ok(())
    }

    async fn find(&self, id: i64) -> Result<Member, AppError> {
        self.repo
            .get_member(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{init_database, DEFAULT_MAX_CONNECTIONS};
    use serde_json::json;
    use tempfile::TempDir;

    async fn test_service() -> (MemberService, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("test.sqlite"), DEFAULT_MAX_CONNECTIONS)
            .await
            .expect("Failed to init DB");
        (MemberService::new(Repository::new(pool)), temp_dir)
    }

    #[tokio::test]
    async fn test_create_then_get() {
        let (service, _dir) = test_service().await;

        let created = service
            .create_member(&json!({ "firstname": "Ada", "lastname": "Lovelace" }))
            .await
            .unwrap();
        assert!(!created.is_active);

        let fetched = service.get_member(created.id).await.unwrap();
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn test_create_invalid_does_not_insert() {
        let (service, _dir) = test_service().await;

        let err = service
            .create_member(&json!({ "firstname": "" }))
            .await
            .unwrap_err();
        let errors = match err {
            AppError::Validation(errors) => errors,
            other => panic!("expected validation error, got {other:?}"),
        };
        assert!(errors.get("firstname").is_some());
        assert!(errors.get("lastname").is_some());

        assert!(service.list_members().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_update_missing_member_is_not_found_even_when_invalid() {
        let (service, _dir) = test_service().await;

        let err = service.update_member(5, &json!({})).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_update_invalid_leaves_row_untouched() {
        let (service, _dir) = test_service().await;
        let member = service
            .create_member(&json!({ "firstname": "Ada", "lastname": "Lovelace" }))
            .await
            .unwrap();

        let err = service
            .update_member(member.id, &json!({ "firstname": "Augusta" }))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(service.get_member(member.id).await.unwrap(), member);
    }

    #[tokio::test]
    async fn test_activate_and_delete() {
        let (service, _dir) = test_service().await;
        let member = service
            .create_member(&json!({ "firstname": "Ada", "lastname": "Lovelace" }))
            .await
            .unwrap();

        service.activate_member(member.id).await.unwrap();
        service.activate_member(member.id).await.unwrap();
        let active = service.get_member(member.id).await.unwrap();
        assert!(active.is_active);
        assert_eq!(active.lastname, "Lovelace");

        service.delete_member(member.id).await.unwrap();
        assert!(matches!(
            service.get_member(member.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.activate_member(member.id).await,
            Err(AppError::NotFound(_))
        ));
        assert!(matches!(
            service.delete_member(member.id).await,
            Err(AppError::NotFound(_))
        ));
    }
}
