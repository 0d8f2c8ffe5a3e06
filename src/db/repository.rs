//! Database repository for member CRUD operations.
//!
//! Every operation is a single statement against the `members` table.

use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Member, MemberFields};

/// Database repository for all member data operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all members in id order.
    pub async fn list_members(&self) -> Result<Vec<Member>, AppError> {
        let rows = sqlx::query("SELECT id, firstname, lastname, is_active FROM members ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|row| member_from_row(&row)).collect())
    }

    /// Get a member by ID.
    pub async fn get_member(&self, id: i64) -> Result<Option<Member>, AppError> {
        let row = sqlx::query("SELECT id, firstname, lastname, is_active FROM members WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.as_ref().map(member_from_row))
    }

    /// Create a new member. An unspecified `is_active` is stored as false.
    pub async fn create_member(&self, fields: &MemberFields) -> Result<Member, AppError> {
        let is_active = fields.is_active.unwrap_or(false);

        let result =
            sqlx::query("INSERT INTO members (firstname, lastname, is_active) VALUES (?, ?, ?)")
                .bind(&fields.firstname)
                .bind(&fields.lastname)
                .bind(is_active)
                .execute(&self.pool)
                .await?;

        Ok(Member {
            id: result.last_insert_rowid(),
            firstname: fields.firstname.clone(),
            lastname: fields.lastname.clone(),
            is_active,
        })
    }

    /// Replace a member's fields. An unspecified `is_active` keeps the stored value.
    pub async fn update_member(&self, id: i64, fields: &MemberFields) -> Result<Member, AppError> {
        let row = sqlx::query(
            "UPDATE members SET firstname = ?, lastname = ?, is_active = COALESCE(?, is_active) WHERE id = ? RETURNING id, firstname, lastname, is_active"
        )
        .bind(&fields.firstname)
        .bind(&fields.lastname)
        .bind(fields.is_active)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref()
            .map(member_from_row)
            .ok_or_else(|| AppError::NotFound(format!("Member {} not found", id)))
    }

    /// Set a member's active flag.
    pub async fn set_member_active(&self, id: i64, active: bool) -> Result<(), AppError> {
        let result = sqlx::query("UPDATE members SET is_active = ? WHERE id = ?")
            .bind(active)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Member {} not found", id)));
        }
        Ok(())
    }

    /// Delete a member.
    pub async fn delete_member(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM members WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Member {} not found", id)));
        }
        Ok(())
    }
}

fn member_from_row(row: &sqlx::sqlite::SqliteRow) -> Member {
    Member {
        id: row.get("id"),
        firstname: row.get("firstname"),
        lastname: row.get("lastname"),
        is_active: row.get("is_active"),
    }
}
