//! Repository for the `staff_assignments` table.
//!
//! The (production, person, talent name) uniqueness invariant is enforced by
//! `uq_staff_assignments_production_person_talent`; a violation surfaces as
//! a sqlx database error with code 23505, which the API layer maps to a
//! distinct `DUPLICATE_ASSIGNMENT` response. Concurrent inserts of the same
//! triple race at that constraint: exactly one succeeds.

use sqlx::PgPool;

use callsheet_core::types::DbId;

use crate::models::assignment::{NewStaffAssignment, StaffAssignment, UpdateStaffAssignment};

const COLUMNS: &str = "id, production_id, person_id, talent_id, talent_name, \
     talent_category_path, note, status, created_at, updated_at";

/// Provides CRUD operations for staff assignments.
pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Insert an assignment, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &NewStaffAssignment,
    ) -> Result<StaffAssignment, sqlx::Error> {
        let query = format!(
            "INSERT INTO staff_assignments \
                (production_id, person_id, talent_id, talent_name, talent_category_path, note, status) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffAssignment>(&query)
            .bind(input.production_id)
            .bind(input.person_id)
            .bind(input.talent_id)
            .bind(&input.talent_name)
            .bind(&input.talent_category_path)
            .bind(&input.note)
            .bind(input.status.as_str())
            .fetch_one(pool)
            .await
    }

    /// Find an assignment by ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<StaffAssignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM staff_assignments WHERE id = $1");
        sqlx::query_as::<_, StaffAssignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a production's assignments in insertion order.
    pub async fn list_by_production(
        pool: &PgPool,
        production_id: DbId,
    ) -> Result<Vec<StaffAssignment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM staff_assignments \
             WHERE production_id = $1 ORDER BY id ASC"
        );
        sqlx::query_as::<_, StaffAssignment>(&query)
            .bind(production_id)
            .fetch_all(pool)
            .await
    }

    /// Update an assignment's note and/or status. Only non-`None` fields are
    /// applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateStaffAssignment,
    ) -> Result<Option<StaffAssignment>, sqlx::Error> {
        let query = format!(
            "UPDATE staff_assignments SET \
                note = COALESCE($2, note), \
                status = COALESCE($3, status), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StaffAssignment>(&query)
            .bind(id)
            .bind(&input.note)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete an assignment by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM staff_assignments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
